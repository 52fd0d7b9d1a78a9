use std::sync::Arc;
use tracing::{info, warn};

use crate::error::{Result, WeekwiseError};
use crate::llm::gateway::{CompletionConfig, LlmGateway};
use crate::llm::models::{LlmMessage, LlmToolCall, LlmToolResult, MessageRole};
use crate::llm::tools::ToolRegistry;

/// Default cap on gateway rounds within one user turn
pub const DEFAULT_MAX_TOOL_ROUNDS: usize = 10;

/// Everything one resolved user turn produced.
///
/// `messages` is the transcript delta for the turn: assistant tool-call
/// messages, tool result messages, and the final assistant text, in order.
/// `tools_used` names the tools that actually ran, in execution order.
#[derive(Debug, Clone)]
pub struct Exchange {
    pub text: String,
    pub messages: Vec<LlmMessage>,
    pub tools_used: Vec<String>,
}

/// Main interface for LLM interactions
pub struct LlmBroker {
    model: String,
    gateway: Arc<dyn LlmGateway>,
    max_tool_rounds: usize,
}

impl LlmBroker {
    /// Create a broker for the given model and gateway
    pub fn new(model: impl Into<String>, gateway: Arc<dyn LlmGateway>) -> Self {
        Self {
            model: model.into(),
            gateway,
            max_tool_rounds: DEFAULT_MAX_TOOL_ROUNDS,
        }
    }

    /// Override the cap on gateway rounds per user turn
    pub fn with_max_tool_rounds(mut self, max_tool_rounds: usize) -> Self {
        self.max_tool_rounds = max_tool_rounds;
        self
    }

    /// Drive one user turn to completion.
    ///
    /// Tool calls are executed in the order the model requested them, and
    /// every call gets a result: failures (unknown names, rejected
    /// arguments) become error results the model can read and recover from.
    /// A turn still requesting tools after the round cap fails with
    /// [`WeekwiseError::ToolLoopExceeded`].
    pub async fn generate(
        &self,
        messages: &[LlmMessage],
        tools: &ToolRegistry,
        config: Option<CompletionConfig>,
    ) -> Result<Exchange> {
        let config = config.unwrap_or_default();
        let descriptors = tools.descriptors();

        let mut history = messages.to_vec();
        let mut transcript = Vec::new();
        let mut tools_used = Vec::new();

        for round in 0..self.max_tool_rounds {
            let response = self
                .gateway
                .complete(&self.model, &history, &descriptors, &config)
                .await?;

            // No tool calls means the turn is final
            if response.tool_calls.is_empty() {
                let text = response.content.unwrap_or_default();
                transcript.push(LlmMessage::assistant(&text));
                return Ok(Exchange {
                    text,
                    messages: transcript,
                    tools_used,
                });
            }

            info!(
                "Round {}: model requested {} tool call(s)",
                round + 1,
                response.tool_calls.len()
            );

            // Record the request, then answer it with one Tool-role message
            let request = LlmMessage {
                role: MessageRole::Assistant,
                content: response.content,
                tool_calls: Some(response.tool_calls.clone()),
                tool_results: None,
            };
            history.push(request.clone());
            transcript.push(request);

            let results = self.execute_tool_calls(&response.tool_calls, tools, &mut tools_used);
            let results_message = LlmMessage::tool_results(results);
            history.push(results_message.clone());
            transcript.push(results_message);
        }

        Err(WeekwiseError::ToolLoopExceeded(self.max_tool_rounds))
    }

    /// Execute one round of tool calls in request order, turning failures
    /// into error results rather than aborting the turn
    fn execute_tool_calls(
        &self,
        calls: &[LlmToolCall],
        tools: &ToolRegistry,
        tools_used: &mut Vec<String>,
    ) -> Vec<LlmToolResult> {
        calls
            .iter()
            .map(|call| match tools.get(&call.name) {
                Some(tool) => {
                    info!("Executing tool: {}", call.name);
                    tools_used.push(call.name.clone());
                    match tool.run(&call.arguments) {
                        Ok(output) => match serde_json::to_string(&output) {
                            Ok(payload) => LlmToolResult::success(&call.id, payload),
                            Err(e) => LlmToolResult::error(
                                &call.id,
                                format!("Failed to encode tool output: {}", e),
                            ),
                        },
                        Err(e) => {
                            warn!("Tool {} failed: {}", call.name, e);
                            LlmToolResult::error(&call.id, e.to_string())
                        }
                    }
                }
                None => {
                    warn!("Tool not found: {}", call.name);
                    LlmToolResult::error(
                        &call.id,
                        WeekwiseError::UnknownTool(call.name.clone()).to_string(),
                    )
                }
            })
            .collect()
    }
}
