//! Anthropic Gateway for LLM interactions.
//!
//! This module provides a gateway for interacting with Anthropic's Messages
//! API, including chat completions and tool use.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{Result, WeekwiseError};
use crate::llm::gateway::{CompletionConfig, LlmGateway};
use crate::llm::gateways::anthropic_messages_adapter::{
    adapt_messages_to_anthropic, collect_text_blocks, convert_tool_use_blocks,
};
use crate::llm::models::{LlmGatewayResponse, LlmMessage};
use crate::llm::tools::ToolDescriptor;

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Configuration for connecting to the Anthropic API.
#[derive(Debug, Clone)]
pub struct AnthropicConfig {
    pub api_key: String,
    pub base_url: String,
    pub version: String,
    pub timeout: Option<std::time::Duration>,
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self {
            api_key: std::env::var("ANTHROPIC_API_KEY").unwrap_or_default(),
            base_url: std::env::var("ANTHROPIC_API_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            version: ANTHROPIC_VERSION.to_string(),
            timeout: None,
        }
    }
}

/// Gateway for the Anthropic Messages API.
pub struct AnthropicGateway {
    client: Client,
    config: AnthropicConfig,
}

impl AnthropicGateway {
    /// Create a new Anthropic gateway with default configuration.
    pub fn new() -> Self {
        Self::with_config(AnthropicConfig::default())
    }

    /// Create a new Anthropic gateway with custom configuration.
    pub fn with_config(config: AnthropicConfig) -> Self {
        let mut client_builder = Client::builder();

        if let Some(timeout) = config.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        let client = client_builder.build().unwrap_or_default();

        Self { client, config }
    }

    /// Create gateway with custom API key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self::with_config(AnthropicConfig {
            api_key: api_key.into(),
            ..Default::default()
        })
    }

    /// Create gateway with custom API key and base URL.
    pub fn with_api_key_and_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self::with_config(AnthropicConfig {
            api_key: api_key.into(),
            base_url: base_url.into(),
            ..Default::default()
        })
    }

    /// Extract the message from an `{"error": {"message": ...}}` envelope.
    fn api_error_message(body: &str) -> Option<String> {
        let value: Value = serde_json::from_str(body).ok()?;
        value["error"]["message"].as_str().map(String::from)
    }
}

impl Default for AnthropicGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LlmGateway for AnthropicGateway {
    async fn complete(
        &self,
        model: &str,
        messages: &[LlmMessage],
        tools: &[ToolDescriptor],
        config: &CompletionConfig,
    ) -> Result<LlmGatewayResponse> {
        info!("Delegating to Anthropic for completion");
        debug!("Model: {}, Message count: {}", model, messages.len());

        let (system, wire_messages) = adapt_messages_to_anthropic(messages);

        let mut body = serde_json::json!({
            "model": model,
            "max_tokens": config.max_tokens,
            "messages": wire_messages,
        });

        // Add optional request fields
        if let Some(system) = system {
            body["system"] = serde_json::json!(system);
        }
        if let Some(temperature) = config.temperature {
            body["temperature"] = serde_json::json!(temperature);
        }

        // Add tools if provided
        if !tools.is_empty() {
            body["tools"] = serde_json::to_value(tools)?;
        }

        // Make API request
        let response = self
            .client
            .post(format!("{}/v1/messages", self.config.base_url))
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", &self.config.version)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            let detail = Self::api_error_message(&error_text).unwrap_or(error_text);
            return Err(WeekwiseError::GatewayError(format!(
                "Anthropic API error: {} - {}",
                status, detail
            )));
        }

        let response_body: Value = response.json().await?;

        // Parse content blocks and tool calls
        let blocks = response_body["content"]
            .as_array()
            .cloned()
            .unwrap_or_default();
        let content = collect_text_blocks(&blocks);
        let tool_calls = convert_tool_use_blocks(&blocks);
        let stop_reason = response_body["stop_reason"].as_str().map(String::from);

        debug!(
            "Anthropic response: stop_reason={:?}, tool_calls={}",
            stop_reason,
            tool_calls.len()
        );

        Ok(LlmGatewayResponse {
            content,
            tool_calls,
            stop_reason,
        })
    }
}
