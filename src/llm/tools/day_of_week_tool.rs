use serde_json::{json, Value};
use std::collections::HashMap;

use crate::dates;
use crate::error::{Result, WeekwiseError};
use crate::llm::tools::{LlmTool, ToolDescriptor};

/// Tool for getting the day of the week for a date
///
/// This tool takes a date in YYYY-MM-DD format and returns the name of its
/// weekday, like "Friday".
///
/// # Examples
///
/// ```ignore
/// use weekwise::llm::tools::day_of_week_tool::DayOfWeekTool;
///
/// let tool = DayOfWeekTool;
/// let args = HashMap::from([
///     ("date".to_string(), json!("2025-07-04"))
/// ]);
///
/// let result = tool.run(&args)?;
/// // result contains the weekday name "Friday"
/// ```
pub struct DayOfWeekTool;

impl LlmTool for DayOfWeekTool {
    fn run(&self, args: &HashMap<String, Value>) -> Result<Value> {
        let date_str = args.get("date").and_then(|v| v.as_str()).ok_or_else(|| {
            WeekwiseError::ToolError("Missing required argument: date".to_string())
        })?;
        let date = dates::parse_date(date_str)?;

        Ok(json!({
            "date": date_str,
            "weekday": dates::weekday_name(date),
        }))
    }

    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor {
            name: "get_day_of_week".to_string(),
            description: "Get the day of the week for a given date.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "date": {
                        "type": "string",
                        "description": "The date as a string in YYYY-MM-DD format"
                    }
                },
                "required": ["date"]
            }),
        }
    }
}
