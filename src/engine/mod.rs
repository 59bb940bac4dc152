//! Statement-execution engine.
//!
//! This module contains the two components behind every `execute` call:
//!
//! - `splitter` - quote-aware splitting of raw text into statements
//! - `executor` - sync/async dispatch, bounded fan-out, ordered aggregation
//! - `results` - the aggregated result and its cursor
//!
//! # Example
//!
//! ```no_run
//! use cqlbridge::{ExecutionConfig, StatementExecutor};
//! use std::sync::Arc;
//!
//! # async fn example(session: Arc<dyn cqlbridge::CqlSession>) -> Result<(), cqlbridge::CqlBridgeError> {
//! let executor = StatementExecutor::new(session, ExecutionConfig::default());
//!
//! // Three statements dispatched concurrently, aggregated in order.
//! let results = executor.execute("SELECT 1; SELECT 2; SELECT 3;").await?;
//! assert_eq!(results.len(), 3);
//!
//! for row in results.into_cursor() {
//!     println!("row: {row:?}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod executor;
pub mod results;
pub mod splitter;

// Re-export commonly used types
pub use executor::StatementExecutor;
pub use results::{ResultCursor, StatementResults};
pub use splitter::split_statements;
