//! Adapter for converting LLM messages to Anthropic format.

use crate::llm::models::{LlmMessage, LlmToolCall, MessageRole};
use serde_json::{json, Value};
use std::collections::HashMap;

/// Adapt LLM messages to Anthropic format, splitting out the top-level `system` string.
pub fn adapt_messages_to_anthropic(messages: &[LlmMessage]) -> (Option<String>, Vec<Value>) {
    let mut system_parts: Vec<&str> = Vec::new();
    let mut wire = Vec::new();

    for message in messages {
        match message.role {
            MessageRole::System => {
                if let Some(text) = message.content.as_deref() {
                    system_parts.push(text);
                }
            }
            MessageRole::User => {
                wire.push(json!({
                    "role": "user",
                    "content": message.content.as_deref().unwrap_or(""),
                }));
            }
            MessageRole::Assistant => match message.tool_calls.as_deref() {
                Some(calls) => {
                    wire.push(json!({
                        "role": "assistant",
                        "content": assistant_blocks(message.content.as_deref(), calls),
                    }));
                }
                None => {
                    wire.push(json!({
                        "role": "assistant",
                        "content": message.content.as_deref().unwrap_or(""),
                    }));
                }
            },
            MessageRole::Tool => {
                let blocks: Vec<Value> = message
                    .tool_results
                    .as_deref()
                    .unwrap_or_default()
                    .iter()
                    .map(|result| {
                        let mut block = json!({
                            "type": "tool_result",
                            "tool_use_id": result.call_id,
                            "content": result.content,
                        });
                        if result.is_error {
                            block["is_error"] = json!(true);
                        }
                        block
                    })
                    .collect();
                wire.push(json!({ "role": "user", "content": blocks }));
            }
        }
    }

    let system = if system_parts.is_empty() {
        None
    } else {
        Some(system_parts.join("\n\n"))
    };
    (system, wire)
}

/// Build content blocks for an assistant message that requested tool calls.
fn assistant_blocks(content: Option<&str>, calls: &[LlmToolCall]) -> Vec<Value> {
    let mut blocks = Vec::new();
    if let Some(text) = content {
        // The API rejects empty text blocks
        if !text.is_empty() {
            blocks.push(json!({ "type": "text", "text": text }));
        }
    }
    for call in calls {
        blocks.push(json!({
            "type": "tool_use",
            "id": call.id,
            "name": call.name,
            "input": call.arguments,
        }));
    }
    blocks
}

/// Extract the `tool_use` blocks of a response content array, skipping malformed ones.
pub fn convert_tool_use_blocks(blocks: &[Value]) -> Vec<LlmToolCall> {
    blocks
        .iter()
        .filter(|block| block["type"] == "tool_use")
        .filter_map(|block| {
            let id = block["id"].as_str()?.to_string();
            let name = block["name"].as_str()?.to_string();
            let arguments: HashMap<String, Value> = block["input"]
                .as_object()
                .map(|object| {
                    object
                        .iter()
                        .map(|(key, value)| (key.clone(), value.clone()))
                        .collect()
                })
                .unwrap_or_default();
            Some(LlmToolCall { id, name, arguments })
        })
        .collect()
}

/// Concatenate the `text` blocks of a response content array.
pub fn collect_text_blocks(blocks: &[Value]) -> Option<String> {
    let mut text = String::new();
    for block in blocks {
        if block["type"] == "text" {
            if let Some(chunk) = block["text"].as_str() {
                text.push_str(chunk);
            }
        }
    }
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::models::LlmToolResult;

    fn tool_call(id: &str, name: &str, date: &str) -> LlmToolCall {
        LlmToolCall {
            id: id.to_string(),
            name: name.to_string(),
            arguments: HashMap::from([("date".to_string(), json!(date))]),
        }
    }

    #[test]
    fn test_system_message_is_lifted_out() {
        let messages = vec![LlmMessage::system("Be helpful"), LlmMessage::user("Hi")];
        let (system, wire) = adapt_messages_to_anthropic(&messages);
        assert_eq!(system.as_deref(), Some("Be helpful"));
        assert_eq!(wire.len(), 1);
        assert_eq!(wire[0]["role"], json!("user"));
        assert_eq!(wire[0]["content"], json!("Hi"));
    }

    #[test]
    fn test_multiple_system_messages_are_joined() {
        let messages = vec![
            LlmMessage::system("First"),
            LlmMessage::system("Second"),
            LlmMessage::user("Hi"),
        ];
        let (system, _) = adapt_messages_to_anthropic(&messages);
        assert_eq!(system.as_deref(), Some("First\n\nSecond"));
    }

    #[test]
    fn test_no_system_message_yields_none() {
        let (system, wire) = adapt_messages_to_anthropic(&[LlmMessage::user("Hi")]);
        assert!(system.is_none());
        assert_eq!(wire.len(), 1);
    }

    #[test]
    fn test_plain_assistant_message() {
        let (_, wire) = adapt_messages_to_anthropic(&[LlmMessage::assistant("Hello!")]);
        assert_eq!(wire[0]["role"], json!("assistant"));
        assert_eq!(wire[0]["content"], json!("Hello!"));
    }

    #[test]
    fn test_assistant_message_with_text_and_tool_call() {
        let message = LlmMessage {
            role: MessageRole::Assistant,
            content: Some("Let me check.".to_string()),
            tool_calls: Some(vec![tool_call("toolu_1", "get_day_of_week", "2025-07-04")]),
            tool_results: None,
        };
        let (_, wire) = adapt_messages_to_anthropic(&[message]);

        let blocks = wire[0]["content"].as_array().unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0]["type"], json!("text"));
        assert_eq!(blocks[0]["text"], json!("Let me check."));
        assert_eq!(blocks[1]["type"], json!("tool_use"));
        assert_eq!(blocks[1]["id"], json!("toolu_1"));
        assert_eq!(blocks[1]["name"], json!("get_day_of_week"));
        assert_eq!(blocks[1]["input"]["date"], json!("2025-07-04"));
    }

    #[test]
    fn test_assistant_tool_call_without_text_has_no_text_block() {
        let message = LlmMessage {
            role: MessageRole::Assistant,
            content: None,
            tool_calls: Some(vec![tool_call("toolu_1", "get_current_date", "")]),
            tool_results: None,
        };
        let (_, wire) = adapt_messages_to_anthropic(&[message]);

        let blocks = wire[0]["content"].as_array().unwrap();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0]["type"], json!("tool_use"));
    }

    #[test]
    fn test_assistant_empty_text_is_not_a_block() {
        let message = LlmMessage {
            role: MessageRole::Assistant,
            content: Some(String::new()),
            tool_calls: Some(vec![tool_call("toolu_1", "get_current_date", "")]),
            tool_results: None,
        };
        let (_, wire) = adapt_messages_to_anthropic(&[message]);
        assert_eq!(wire[0]["content"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_tool_results_become_user_message_with_result_blocks() {
        let message = LlmMessage::tool_results(vec![
            LlmToolResult::success("toolu_1", "{\"weekday\":\"Friday\"}"),
            LlmToolResult::error("toolu_2", "Unknown tool: get_weather"),
        ]);
        let (_, wire) = adapt_messages_to_anthropic(&[message]);

        assert_eq!(wire[0]["role"], json!("user"));
        let blocks = wire[0]["content"].as_array().unwrap();
        assert_eq!(blocks.len(), 2);

        assert_eq!(blocks[0]["type"], json!("tool_result"));
        assert_eq!(blocks[0]["tool_use_id"], json!("toolu_1"));
        assert!(blocks[0].get("is_error").is_none());

        assert_eq!(blocks[1]["tool_use_id"], json!("toolu_2"));
        assert_eq!(blocks[1]["is_error"], json!(true));
        assert_eq!(blocks[1]["content"], json!("Unknown tool: get_weather"));
    }

    #[test]
    fn test_convert_tool_use_blocks_extracts_calls_in_order() {
        let blocks = vec![
            json!({"type": "text", "text": "Checking..."}),
            json!({
                "type": "tool_use",
                "id": "toolu_1",
                "name": "get_monday_of_week",
                "input": {"date": "2025-07-08"}
            }),
            json!({
                "type": "tool_use",
                "id": "toolu_2",
                "name": "get_current_date",
                "input": {}
            }),
        ];
        let calls = convert_tool_use_blocks(&blocks);

        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].id, "toolu_1");
        assert_eq!(calls[0].name, "get_monday_of_week");
        assert_eq!(calls[0].arguments["date"], json!("2025-07-08"));
        assert_eq!(calls[1].id, "toolu_2");
        assert!(calls[1].arguments.is_empty());
    }

    #[test]
    fn test_convert_tool_use_blocks_skips_malformed_entries() {
        let blocks = vec![json!({"type": "tool_use", "input": {"date": "2025-07-08"}})];
        assert!(convert_tool_use_blocks(&blocks).is_empty());
    }

    #[test]
    fn test_collect_text_blocks_concatenates() {
        let blocks = vec![
            json!({"type": "text", "text": "Hello, "}),
            json!({"type": "tool_use", "id": "toolu_1", "name": "x", "input": {}}),
            json!({"type": "text", "text": "world"}),
        ];
        assert_eq!(collect_text_blocks(&blocks).as_deref(), Some("Hello, world"));
    }

    #[test]
    fn test_collect_text_blocks_returns_none_when_absent() {
        let blocks = vec![json!({"type": "tool_use", "id": "toolu_1", "name": "x", "input": {}})];
        assert!(collect_text_blocks(&blocks).is_none());
    }
}
