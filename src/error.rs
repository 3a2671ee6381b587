//! src/error.rs
//! ============================================================================
//! # AppError: Unified Error Type for the Search Client
//!
//! This module defines the comprehensive error enum (`AppError`) used across the
//! entire application. Each variant carries enough context for diagnostics, and
//! all major modules are expected to use `Result<T, AppError>` for consistency.
//!
//! The taxonomy mirrors how failures surface in the UI: transport errors and
//! server rejections become a single error notification; everything else is an
//! internal fault that is logged but never shown raw to the user.

use std::io;
use thiserror::Error;

/// Unified error type for all client operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Network or HTTP-level failure talking to the search server.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered but rejected the request (`success: false`).
    #[error("server rejected request: {0}")]
    Rejected(String),

    /// Serialization or deserialization error (wire JSON).
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Standard IO error, auto-converted from `io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// TOML config parsing error.
    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// A modal dialog is already open; the requesting operation is dropped.
    #[error("another dialog is already open")]
    DialogBusy,

    /// Async task failure or join error.
    #[error("async task failed: {0}")]
    Task(String),

    /// Terminal I/O or rendering error.
    #[error("terminal error: {0}")]
    Terminal(String),

    /// Any other error, with description.
    #[error("unexpected error: {0}")]
    Other(String),
}

impl AppError {
    /// Attach extra context to an error.
    pub fn with_context<S: Into<String>>(self, ctx: S) -> AppError {
        AppError::Other(format!("{}: {}", ctx.into(), self))
    }
}

// Allow conversion from `anyhow::Error` as fallback.
impl From<anyhow::Error> for AppError {
    fn from(e: anyhow::Error) -> Self {
        AppError::Other(e.to_string())
    }
}
