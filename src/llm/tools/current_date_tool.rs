use chrono::Local;
use serde_json::{json, Value};
use std::collections::HashMap;

use crate::dates;
use crate::error::Result;
use crate::llm::tools::{LlmTool, ToolDescriptor};

/// Tool for getting the current date
///
/// This tool returns today's date in YYYY-MM-DD format. It's useful when the
/// LLM needs to anchor a relative question like "this week" to a real date.
///
/// # Examples
///
/// ```ignore
/// use weekwise::llm::tools::current_date_tool::CurrentDateTool;
///
/// let tool = CurrentDateTool;
/// let args = HashMap::new();
///
/// let result = tool.run(&args)?;
/// // result contains today's date in YYYY-MM-DD format
/// ```
pub struct CurrentDateTool;

impl LlmTool for CurrentDateTool {
    fn run(&self, _args: &HashMap<String, Value>) -> Result<Value> {
        let today = Local::now().date_naive();
        Ok(json!({
            "date": dates::format_date(today),
        }))
    }

    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor {
            name: "get_current_date".to_string(),
            description: "Get the current date in YYYY-MM-DD format.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        }
    }
}
