use serde_json::{json, Value};
use std::collections::HashMap;

use crate::dates;
use crate::error::{Result, WeekwiseError};
use crate::llm::tools::{LlmTool, ToolDescriptor};

/// Tool for getting full week information for a date
///
/// This tool takes a date in YYYY-MM-DD format and returns every day of its
/// week, keyed by weekday name in calendar order from Monday through Sunday.
///
/// # Examples
///
/// ```ignore
/// use weekwise::llm::tools::week_info_tool::WeekInfoTool;
///
/// let tool = WeekInfoTool;
/// let args = HashMap::from([
///     ("date".to_string(), json!("2025-12-25"))
/// ]);
///
/// let result = tool.run(&args)?;
/// // result maps Monday..Sunday to 2025-12-22..2025-12-28
/// ```
pub struct WeekInfoTool;

impl LlmTool for WeekInfoTool {
    fn run(&self, args: &HashMap<String, Value>) -> Result<Value> {
        let date_str = args.get("date").and_then(|v| v.as_str()).ok_or_else(|| {
            WeekwiseError::ToolError("Missing required argument: date".to_string())
        })?;
        let date = dates::parse_date(date_str)?;

        let mut days = serde_json::Map::new();
        for (name, day) in dates::WEEKDAY_NAMES.into_iter().zip(dates::week_days(date)) {
            days.insert(name.to_string(), json!(dates::format_date(day)));
        }

        Ok(json!({
            "week_of": date_str,
            "days": days,
        }))
    }

    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor {
            name: "get_week_info".to_string(),
            description:
                "Get comprehensive week information for a given date including all days of the week."
                    .to_string(),
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
