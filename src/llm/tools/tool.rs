use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::error::Result;

/// Descriptor for a tool as advertised to the model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

/// Trait for locally executable LLM tools
pub trait LlmTool: Send + Sync {
    /// Execute the tool with the arguments supplied by the model
    fn run(&self, args: &HashMap<String, Value>) -> Result<Value>;

    /// Get the descriptor advertised to the model
    fn descriptor(&self) -> ToolDescriptor;

    /// Check whether this tool answers to the given name
    fn matches(&self, name: &str) -> bool {
        self.descriptor().name == name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct EchoTool;

    impl LlmTool for EchoTool {
        fn run(&self, args: &HashMap<String, Value>) -> Result<Value> {
            Ok(json!({ "echoed": args.len() }))
        }

        fn descriptor(&self) -> ToolDescriptor {
            ToolDescriptor {
                name: "echo".to_string(),
                description: "Echoes back the number of arguments.".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {},
                    "required": []
                }),
            }
        }
    }

    #[test]
    fn test_matches_uses_descriptor_name() {
        let tool = EchoTool;
        assert!(tool.matches("echo"));
        assert!(!tool.matches("other"));
    }

    #[test]
    fn test_descriptor_serializes_to_wire_shape() {
        let descriptor = serde_json::to_value(EchoTool.descriptor()).unwrap();
        assert_eq!(descriptor["name"], json!("echo"));
        assert_eq!(descriptor["input_schema"]["type"], json!("object"));
        assert!(descriptor.get("description").is_some());
    }

    #[test]
    fn test_descriptor_deserializes_from_wire_shape() {
        let descriptor: ToolDescriptor = serde_json::from_value(json!({
            "name": "get_day_of_week",
            "description": "Get the day of the week for a given date.",
            "input_schema": {"type": "object", "properties": {}, "required": []}
        }))
        .unwrap();
        assert_eq!(descriptor.name, "get_day_of_week");
    }

    #[test]
    fn test_run_via_trait_object() {
        let tool: Box<dyn LlmTool> = Box::new(EchoTool);
        let result = tool.run(&HashMap::new()).unwrap();
        assert_eq!(result["echoed"], json!(0));
    }
}
