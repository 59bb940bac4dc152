//! Statement dispatch.
//!
//! The [`StatementExecutor`] is the coordinator between the splitter and the
//! session: it splits the raw query text, decides between the synchronous
//! single-statement path and bounded asynchronous fan-out, awaits pending
//! handles strictly in submission order, and cancels whatever is still in
//! flight when a statement fails.
//!
//! The executor holds no state across calls beyond its configuration; every
//! dispatch owns its own in-flight set.

use crate::config::ExecutionConfig;
use crate::engine::results::StatementResults;
use crate::engine::splitter::split_statements;
use crate::error::ExecutionError;
use crate::session::{Consistency, CqlSession, PendingQuery, StatementRequest};
use std::sync::Arc;
use tracing::{debug, trace};

/// Dispatch coordinator for raw, possibly multi-statement query text.
pub struct StatementExecutor {
    session: Arc<dyn CqlSession>,
    config: ExecutionConfig,
}

impl StatementExecutor {
    /// Create an executor over the given session.
    pub fn new(session: Arc<dyn CqlSession>, config: ExecutionConfig) -> Self {
        Self { session, config }
    }

    /// Get the executor configuration.
    pub fn config(&self) -> &ExecutionConfig {
        &self.config
    }

    /// Execute raw query text with the configured defaults.
    ///
    /// Splits the text into statements, executes a single statement
    /// synchronously, or fans out multiple statements asynchronously and
    /// aggregates their results in submission order.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionError::TooManyStatements`] before any submission if
    /// the statement count exceeds the ceiling, or
    /// [`ExecutionError::Transient`] if any statement fails. On a transient
    /// failure every still-pending statement has been asked to cancel.
    pub async fn execute(&self, cql: &str) -> Result<StatementResults, ExecutionError> {
        self.execute_with(
            cql,
            self.config.default_consistency,
            self.config.default_page_size,
        )
        .await
    }

    /// Execute raw query text with per-call consistency and page size.
    ///
    /// Same contract as [`execute`](Self::execute); the overrides are copied
    /// into every statement submission.
    pub async fn execute_with(
        &self,
        cql: &str,
        consistency: Consistency,
        page_size: u32,
    ) -> Result<StatementResults, ExecutionError> {
        let mut statements = split_statements(cql);

        if statements.len() > 1 {
            self.execute_concurrent(statements, consistency, page_size)
                .await
        } else {
            // Blank input still goes to the session; rejecting it is the
            // server's call, not the engine's.
            let statement = statements.pop().unwrap_or_else(|| cql.trim().to_string());
            self.execute_single(statement, consistency, page_size).await
        }
    }

    /// Single-statement path: one synchronous session call, no in-flight set.
    async fn execute_single(
        &self,
        statement: String,
        consistency: Consistency,
        page_size: u32,
    ) -> Result<StatementResults, ExecutionError> {
        debug!(cql = %statement, %consistency, "executing single statement");

        let request = StatementRequest::new(statement, consistency, page_size);
        let rows = self
            .session
            .execute(&request)
            .await
            .map_err(|source| ExecutionError::Transient { source })?;

        Ok(StatementResults::new(vec![rows]))
    }

    /// Multi-statement path: bounded fan-out, ordered fan-in.
    async fn execute_concurrent(
        &self,
        statements: Vec<String>,
        consistency: Consistency,
        page_size: u32,
    ) -> Result<StatementResults, ExecutionError> {
        let count = statements.len();
        if count > self.config.hard_ceiling() {
            return Err(ExecutionError::TooManyStatements {
                count,
                limit: self.config.max_async_statements,
            });
        }

        debug!(statements = count, %consistency, "dispatching multi-statement query");

        let mut in_flight: Vec<Box<dyn PendingQuery>> = Vec::with_capacity(count);
        for statement in statements {
            trace!(cql = %statement, "submitting statement");
            let request = StatementRequest::new(statement, consistency, page_size);
            in_flight.push(self.session.execute_async(request));
        }

        // Await in submission order so the aggregate matches the input order
        // no matter which statement completes first.
        let mut outcomes = Vec::with_capacity(count);
        let mut pending = in_flight.into_iter();
        while let Some(handle) = pending.next() {
            match handle.wait().await {
                Ok(rows) => outcomes.push(rows),
                Err(source) => {
                    debug!(
                        completed = outcomes.len(),
                        "statement failed, cancelling remaining in-flight statements"
                    );
                    // Best-effort cleanup; cancellation outcomes are not
                    // awaited or surfaced.
                    for remaining in pending.by_ref() {
                        remaining.cancel();
                    }
                    return Err(ExecutionError::Transient { source });
                }
            }
        }

        Ok(StatementResults::new(outcomes))
    }
}
