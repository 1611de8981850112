//! Unified application error type.
//! All modules (resolve, prefs, api, config, cli) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Resolution errors
    // ---------------------------
    /// The server answered with an unparsable start/end pair.
    #[error("Invalid date range")]
    InvalidDateRange,

    /// Non-2xx or bodyless reply; carries the raw response text verbatim.
    #[error("{0}")]
    ServerRejected(String),

    /// Transport-level failure, excluding deliberate cancellation.
    #[error("Network error: {0}")]
    NetworkFailure(String),

    /// Caller aborted the request. Never surfaced to the user as an error.
    #[error("request cancelled")]
    Cancelled,

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid tenant id: {0}")]
    InvalidTenant(String),

    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    // ---------------------------
    // Wire format
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;
