pub mod dates;
pub mod error;
pub mod llm;
pub mod repl;

pub use error::{Result, WeekwiseError};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Result, WeekwiseError};
    pub use crate::llm::gateways::{AnthropicConfig, AnthropicGateway};
    pub use crate::llm::tools::{LlmTool, ToolDescriptor, ToolRegistry};
    pub use crate::llm::{
        ChatSession, CompletionConfig, Exchange, LlmBroker, LlmGateway, LlmGatewayResponse,
        LlmMessage, LlmToolCall, LlmToolResult, MessageRole,
    };
    pub use crate::repl::{Command, Repl};
}
