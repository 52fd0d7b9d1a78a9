pub mod broker;
pub mod chat_session;
pub mod gateway;
pub mod gateways;
pub mod models;
pub mod tools;

pub use broker::{Exchange, LlmBroker, DEFAULT_MAX_TOOL_ROUNDS};
pub use chat_session::{ChatSession, ChatSessionBuilder};
pub use gateway::{CompletionConfig, LlmGateway};
pub use models::{LlmGatewayResponse, LlmMessage, LlmToolCall, LlmToolResult, MessageRole};
