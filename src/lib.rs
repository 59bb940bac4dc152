//! # cqlbridge
//!
//! Statement-execution engine for a CQL client adapter.
//!
//! This library takes caller-supplied query text that may contain zero, one,
//! or many semicolon-delimited statements, splits it while respecting quoted
//! literals and `BEGIN ... BATCH ... APPLY` blocks, and dispatches the
//! statements against a driver session: synchronously when there is exactly
//! one, concurrently otherwise. Results are aggregated in submission order,
//! concurrent fan-out is bounded, and a failure mid-dispatch cancels every
//! statement still in flight before the error is reported.
//!
//! ## Example
//!
//! ```no_run
//! use cqlbridge::{
//!     CqlSession, ExecutionConfig, PendingQuery, Rows, SessionError, SpawnedQuery,
//!     StatementExecutor, StatementRequest,
//! };
//! use async_trait::async_trait;
//! use std::sync::Arc;
//!
//! // A session implementation wraps the actual driver; this one is a stub.
//! struct MySession;
//!
//! #[async_trait]
//! impl CqlSession for MySession {
//!     async fn execute(&self, _request: &StatementRequest) -> Result<Rows, SessionError> {
//!         Ok(Rows::applied())
//!     }
//!
//!     fn execute_async(&self, _request: StatementRequest) -> Box<dyn PendingQuery> {
//!         Box::new(SpawnedQuery::spawn(async { Ok(Rows::applied()) }))
//!     }
//! }
//!
//! # async fn example() -> Result<(), cqlbridge::CqlBridgeError> {
//! let executor = StatementExecutor::new(Arc::new(MySession), ExecutionConfig::default());
//!
//! let results = executor.execute("SELECT 1; SELECT 2;").await?;
//! assert_eq!(results.len(), 2);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod session;

// Re-export public API
pub use config::{ExecutionConfig, DEFAULT_PAGE_SIZE, MAX_ASYNC_STATEMENTS};
pub use engine::{split_statements, ResultCursor, StatementExecutor, StatementResults};
pub use error::{ConfigError, CqlBridgeError, ExecutionError, SessionError};
pub use session::{
    ColumnSpec, Consistency, CqlSession, PendingQuery, Rows, SpawnedQuery, StatementRequest,
};
