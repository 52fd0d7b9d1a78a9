pub mod anthropic;
pub mod anthropic_messages_adapter;

pub use anthropic::{AnthropicConfig, AnthropicGateway};
