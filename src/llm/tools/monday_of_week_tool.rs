use serde_json::{json, Value};
use std::collections::HashMap;

use crate::dates;
use crate::error::{Result, WeekwiseError};
use crate::llm::tools::{LlmTool, ToolDescriptor};

/// Tool for finding the Monday of the week containing a date
///
/// This tool takes a date in YYYY-MM-DD format and returns the date of the
/// Monday that starts its week. A Monday resolves to itself.
///
/// # Examples
///
/// ```ignore
/// use weekwise::llm::tools::monday_of_week_tool::MondayOfWeekTool;
///
/// let tool = MondayOfWeekTool;
/// let args = HashMap::from([
///     ("date".to_string(), json!("2025-07-08"))
/// ]);
///
/// let result = tool.run(&args)?;
/// // result contains the Monday date 2025-07-07
/// ```
pub struct MondayOfWeekTool;

impl LlmTool for MondayOfWeekTool {
    fn run(&self, args: &HashMap<String, Value>) -> Result<Value> {
        let date_str = args.get("date").and_then(|v| v.as_str()).ok_or_else(|| {
            WeekwiseError::ToolError("Missing required argument: date".to_string())
        })?;
        let date = dates::parse_date(date_str)?;
        let monday = dates::monday_of_week(date);

        Ok(json!({
            "date": date_str,
            "monday": dates::format_date(monday),
        }))
    }

    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor {
            name: "get_monday_of_week".to_string(),
            description: "Returns the date of the Monday of the week containing the given date."
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
