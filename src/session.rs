//! Session collaborator contract.
//!
//! This module defines the `CqlSession` trait that abstracts the underlying
//! driver session the engine dispatches statements to. The engine never talks
//! to the wire itself; it prepares one [`StatementRequest`] per statement and
//! hands it to a session implementation, either synchronously or through a
//! cancellable [`PendingQuery`] handle.

use crate::error::SessionError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::Future;
use tokio::task::JoinHandle;

/// CQL consistency level.
///
/// Controls how many replicas must acknowledge an operation before it is
/// considered complete. Opaque to the engine; passed through to the session
/// with every submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Consistency {
    Any,
    One,
    Two,
    Three,
    Quorum,
    All,
    LocalQuorum,
    EachQuorum,
    LocalOne,
    Serial,
    LocalSerial,
}

impl Default for Consistency {
    fn default() -> Self {
        Consistency::One
    }
}

impl fmt::Display for Consistency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Consistency::Any => "ANY",
            Consistency::One => "ONE",
            Consistency::Two => "TWO",
            Consistency::Three => "THREE",
            Consistency::Quorum => "QUORUM",
            Consistency::All => "ALL",
            Consistency::LocalQuorum => "LOCAL_QUORUM",
            Consistency::EachQuorum => "EACH_QUORUM",
            Consistency::LocalOne => "LOCAL_ONE",
            Consistency::Serial => "SERIAL",
            Consistency::LocalSerial => "LOCAL_SERIAL",
        };
        f.write_str(name)
    }
}

/// One prepared submission: statement text plus the execution directives
/// copied from the connection (or from a per-call override) at dispatch time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementRequest {
    /// Statement text, one logically complete statement
    pub cql: String,
    /// Consistency directive for this submission
    pub consistency: Consistency,
    /// Requested page size (fetch size hint)
    pub page_size: u32,
}

impl StatementRequest {
    /// Create a new statement request.
    pub fn new(cql: impl Into<String>, consistency: Consistency, page_size: u32) -> Self {
        Self {
            cql: cql.into(),
            consistency,
            page_size,
        }
    }
}

/// Column metadata for a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Column name
    pub name: String,
    /// CQL type name as reported by the server
    pub type_name: String,
}

/// Result of a single statement execution.
///
/// Row values are kept in the driver's JSON representation; decoding into
/// native types is the caller's concern, not the engine's.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rows {
    /// Column metadata, empty for statements that return no rows
    pub columns: Vec<ColumnSpec>,
    /// Row data, outer index is the row, inner index matches `columns`
    pub rows: Vec<Vec<serde_json::Value>>,
}

impl Rows {
    /// Create a result from column metadata and row data.
    pub fn new(columns: Vec<ColumnSpec>, rows: Vec<Vec<serde_json::Value>>) -> Self {
        Self { columns, rows }
    }

    /// Create the outcome of a statement that returns no rows
    /// (INSERT, UPDATE, DELETE, DDL).
    pub fn applied() -> Self {
        Self::default()
    }

    /// Number of rows in this result.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check whether this result carries no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A cancellable, awaitable in-flight submission.
///
/// Returned by [`CqlSession::execute_async`]; the engine awaits handles
/// strictly in submission order and cancels the remainder on failure.
#[async_trait]
pub trait PendingQuery: Send {
    /// Block until the result is ready or the submission fails.
    ///
    /// Consumes the handle; a handle is awaited at most once.
    ///
    /// # Errors
    ///
    /// Returns the underlying `SessionError` if the submission failed.
    async fn wait(self: Box<Self>) -> Result<Rows, SessionError>;

    /// Request cancellation of the in-flight submission.
    ///
    /// Best-effort only: the request may arrive after the work already
    /// completed or failed, and its outcome is never inspected.
    fn cancel(&self);
}

/// Driver session trait for statement execution.
///
/// This trait abstracts the underlying driver, allowing for different
/// implementations (native protocol session, test fakes).
#[async_trait]
pub trait CqlSession: Send + Sync {
    /// Execute one statement and wait for its result.
    ///
    /// Used for the single-statement path.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` on any driver or network failure.
    async fn execute(&self, request: &StatementRequest) -> Result<Rows, SessionError>;

    /// Submit one statement for asynchronous execution.
    ///
    /// Must return immediately; the returned handle is awaited later.
    fn execute_async(&self, request: StatementRequest) -> Box<dyn PendingQuery>;
}

/// Task-backed [`PendingQuery`] for session implementations.
///
/// Wraps a spawned tokio task; `cancel` aborts the task, and waiting on an
/// aborted task yields [`SessionError::Cancelled`].
pub struct SpawnedQuery {
    handle: JoinHandle<Result<Rows, SessionError>>,
}

impl SpawnedQuery {
    /// Spawn the given execution future onto the current runtime.
    pub fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = Result<Rows, SessionError>> + Send + 'static,
    {
        Self {
            handle: tokio::spawn(future),
        }
    }
}

#[async_trait]
impl PendingQuery for SpawnedQuery {
    async fn wait(self: Box<Self>) -> Result<Rows, SessionError> {
        match self.handle.await {
            Ok(result) => result,
            Err(join_err) if join_err.is_cancelled() => Err(SessionError::Cancelled),
            Err(join_err) => Err(SessionError::ExecutionFailed(join_err.to_string())),
        }
    }

    fn cancel(&self) {
        self.handle.abort();
    }
}
