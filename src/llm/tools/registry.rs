use std::collections::HashSet;

use crate::error::{Result, WeekwiseError};
use crate::llm::tools::{LlmTool, ToolDescriptor};

/// Fixed set of tools offered to the model for a session
pub struct ToolRegistry {
    tools: Vec<Box<dyn LlmTool>>,
}

impl ToolRegistry {
    /// Build a registry from a list of tools, rejecting duplicate names
    pub fn new(tools: Vec<Box<dyn LlmTool>>) -> Result<Self> {
        let mut seen = HashSet::new();
        for tool in &tools {
            let name = tool.descriptor().name;
            if !seen.insert(name.clone()) {
                return Err(WeekwiseError::ConfigError(format!(
                    "duplicate tool name: {}",
                    name
                )));
            }
        }
        Ok(Self { tools })
    }

    /// A registry offering no tools
    pub fn empty() -> Self {
        Self { tools: Vec::new() }
    }

    /// Look up a tool by its declared name
    pub fn get(&self, name: &str) -> Option<&dyn LlmTool> {
        self.tools
            .iter()
            .find(|tool| tool.matches(name))
            .map(|tool| tool.as_ref())
    }

    /// Descriptors for every registered tool, in registration order
    pub fn descriptors(&self) -> Vec<ToolDescriptor> {
        self.tools.iter().map(|tool| tool.descriptor()).collect()
    }
}
