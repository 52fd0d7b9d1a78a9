//! Chat session management with conversation history tracking.
//!
//! This module provides a chat session abstraction that manages conversation history
//! across turns, including tool calls and their results.

use crate::error::Result;
use crate::llm::broker::{Exchange, LlmBroker};
use crate::llm::gateway::CompletionConfig;
use crate::llm::models::LlmMessage;
use crate::llm::tools::ToolRegistry;

/// A chat session that manages conversation history across turns.
///
/// `ChatSession` maintains an append-only list of messages seeded with the system
/// prompt. Each turn appends the user message and the full exchange transcript,
/// including any tool calls and their results. The system prompt (first message)
/// is always preserved.
///
/// # Examples
///
/// ```ignore
/// use weekwise::llm::{ChatSession, LlmBroker};
/// use weekwise::llm::gateways::AnthropicGateway;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let gateway = Arc::new(AnthropicGateway::new());
///     let broker = LlmBroker::new("claude-3-5-sonnet-20241022", gateway);
///     let mut session = ChatSession::new(broker);
///
///     let exchange = session.send("What day is 2025-07-04?").await?;
///     println!("Response: {}", exchange.text);
///
///     Ok(())
/// }
/// ```
pub struct ChatSession {
    broker: LlmBroker,
    tools: ToolRegistry,
    messages: Vec<LlmMessage>,
    max_tokens: u32,
    temperature: Option<f32>,
}

impl ChatSession {
    /// Create a new chat session with default settings.
    ///
    /// # Arguments
    ///
    /// * `broker` - The LLM broker to use for generating responses
    ///
    /// # Examples
    ///
    /// ```ignore
    /// use weekwise::llm::{ChatSession, LlmBroker};
    /// use weekwise::llm::gateways::AnthropicGateway;
    /// use std::sync::Arc;
    ///
    /// let gateway = Arc::new(AnthropicGateway::new());
    /// let broker = LlmBroker::new("claude-3-5-sonnet-20241022", gateway);
    /// let session = ChatSession::new(broker);
    /// ```
    pub fn new(broker: LlmBroker) -> Self {
        Self::builder(broker).build()
    }

    /// Create a chat session builder for custom configuration.
    ///
    /// # Arguments
    ///
    /// * `broker` - The LLM broker to use for generating responses
    ///
    /// # Examples
    ///
    /// ```ignore
    /// use weekwise::llm::ChatSession;
    ///
    /// let session = ChatSession::builder(broker)
    ///     .system_prompt("You are a helpful date assistant.")
    ///     .temperature(0.7)
    ///     .build();
    /// ```
    pub fn builder(broker: LlmBroker) -> ChatSessionBuilder {
        ChatSessionBuilder::new(broker)
    }

    /// Send a message to the LLM and get the completed exchange.
    ///
    /// This method:
    /// 1. Adds the user message to the conversation history
    /// 2. Generates a response using the LLM, executing tool calls as needed
    /// 3. Adds the turn's full transcript to the history
    ///
    /// On failure the user message stays in the history.
    ///
    /// # Arguments
    ///
    /// * `query` - The user's message
    ///
    /// # Returns
    ///
    /// The completed exchange with the final text and the tools used
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let exchange = session.send("What day is 2025-07-04?").await?;
    /// println!("Answer: {}", exchange.text);
    /// ```
    pub async fn send(&mut self, query: &str) -> Result<Exchange> {
        // Add user message
        self.messages.push(LlmMessage::user(query));

        // Generate response
        let config = CompletionConfig {
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };
        let exchange = self
            .broker
            .generate(&self.messages, &self.tools, Some(config))
            .await?;

        // Add the turn's transcript
        self.messages.extend(exchange.messages.iter().cloned());
        Ok(exchange)
    }

    /// Reset the conversation history, keeping only the system prompt
    pub fn clear(&mut self) {
        self.messages.truncate(1);
    }

    /// Get the current conversation history
    pub fn messages(&self) -> &[LlmMessage] {
        &self.messages
    }
}

/// Builder for constructing a `ChatSession` with custom configuration.
pub struct ChatSessionBuilder {
    broker: LlmBroker,
    system_prompt: String,
    tools: ToolRegistry,
    max_tokens: u32,
    temperature: Option<f32>,
}

impl ChatSessionBuilder {
    /// Create a new builder
    fn new(broker: LlmBroker) -> Self {
        let defaults = CompletionConfig::default();
        Self {
            broker,
            system_prompt: "You are a helpful assistant.".to_string(),
            tools: ToolRegistry::empty(),
            max_tokens: defaults.max_tokens,
            temperature: defaults.temperature,
        }
    }

    /// Set the system prompt (default: "You are a helpful assistant.")
    pub fn system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    /// Set the tools available to the LLM
    pub fn tools(mut self, tools: ToolRegistry) -> Self {
        self.tools = tools;
        self
    }

    /// Set the maximum tokens per completion (default: 1000)
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Set the temperature for generation (default: provider default)
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Build the chat session
    pub fn build(self) -> ChatSession {
        ChatSession {
            broker: self.broker,
            tools: self.tools,
            messages: vec![LlmMessage::system(&self.system_prompt)],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }
}
