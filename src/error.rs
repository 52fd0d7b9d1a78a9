//! Error types and result aliases for the weekwise crate.
//!
//! This module defines the core error type [`WeekwiseError`] and the [`Result`] type alias
//! used throughout the crate. All public APIs that can fail return `Result<T>` for
//! consistent error handling.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WeekwiseError {
    #[error("Invalid date format: '{0}' (expected YYYY-MM-DD)")]
    InvalidDateFormat(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Tool error: {0}")]
    ToolError(String),

    #[error("Tool call loop exceeded {0} rounds without a final answer")]
    ToolLoopExceeded(usize),

    #[error("LLM gateway error: {0}")]
    GatewayError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WeekwiseError>;
