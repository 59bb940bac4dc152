//! Error types for cqlbridge.
//!
//! This module defines domain-specific error types organized by functional area.

use thiserror::Error;

/// Top-level error type encompassing all possible errors.
#[derive(Error, Debug)]
pub enum CqlBridgeError {
    /// Statement dispatch errors
    #[error(transparent)]
    Execution(#[from] ExecutionError),

    /// Session-level errors from the underlying driver
    #[error(transparent)]
    Session(#[from] SessionError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised by the statement-execution engine itself.
#[derive(Error, Debug)]
pub enum ExecutionError {
    /// The multi-statement input exceeded the in-flight ceiling.
    ///
    /// Raised before any statement is submitted; the caller must split the
    /// load into smaller batches.
    #[error("too many statements at once ({count}, limit {limit}); split the query into smaller batches")]
    TooManyStatements { count: usize, limit: usize },

    /// A statement failed during execution.
    ///
    /// Wraps the underlying session error. The whole call may be retried,
    /// but earlier statements in the batch may already have taken effect.
    #[error("statement execution failed: {source}")]
    Transient {
        #[source]
        source: SessionError,
    },
}

impl ExecutionError {
    /// Check whether retrying the whole call can possibly succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transient { .. })
    }
}

/// Errors raised by session implementations.
///
/// The engine never constructs these except by wrapping; they originate in
/// the driver layer behind [`crate::session::CqlSession`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The server rejected or failed the statement
    #[error("statement execution failed: {0}")]
    ExecutionFailed(String),

    /// The request timed out
    #[error("request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    /// Not enough replicas were available to satisfy the consistency level
    #[error("not enough replicas available: {0}")]
    Unavailable(String),

    /// The request was cancelled before it completed
    #[error("request was cancelled before completion")]
    Cancelled,

    /// The session is closed
    #[error("session is closed")]
    SessionClosed,
}

/// Errors for invalid configuration values.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A configuration value is out of its accepted range
    #[error("invalid configuration value for '{parameter}': {message}")]
    InvalidValue {
        parameter: &'static str,
        message: String,
    },
}
