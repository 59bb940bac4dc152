//! Common test utilities for cqlbridge integration tests.
//!
//! Provides a scripted fake session whose submissions genuinely run
//! concurrently (each on its own tokio task), so tests can exercise
//! out-of-order completion, submission counting, and cancellation without a
//! real cluster.

use async_trait::async_trait;
use cqlbridge::{ColumnSpec, CqlSession, PendingQuery, Rows, SessionError, StatementRequest};
use serde_json::json;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Scripted behavior for one submission, consumed in submission order.
pub enum Script {
    /// Complete successfully after the delay
    Ok { rows: Rows, delay_ms: u64 },
    /// Fail after the delay
    Fail { error: SessionError, delay_ms: u64 },
}

impl Script {
    pub fn ok(rows: Rows, delay_ms: u64) -> Self {
        Script::Ok { rows, delay_ms }
    }

    pub fn fail(error: SessionError, delay_ms: u64) -> Self {
        Script::Fail { error, delay_ms }
    }
}

/// A single-column result echoing the statement text, for order assertions.
pub fn echo_rows(cql: &str) -> Rows {
    Rows::new(
        vec![ColumnSpec {
            name: "cql".to_string(),
            type_name: "text".to_string(),
        }],
        vec![vec![json!(cql)]],
    )
}

/// Fake session that records every call and plays back scripted outcomes.
pub struct FakeSession {
    scripts: Mutex<VecDeque<Script>>,
    sync_calls: AtomicUsize,
    next_index: AtomicUsize,
    submitted: Mutex<Vec<StatementRequest>>,
    cancelled: Arc<Mutex<Vec<usize>>>,
}

impl FakeSession {
    pub fn new(scripts: Vec<Script>) -> Self {
        Self {
            scripts: Mutex::new(scripts.into()),
            sync_calls: AtomicUsize::new(0),
            next_index: AtomicUsize::new(0),
            submitted: Mutex::new(Vec::new()),
            cancelled: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of synchronous `execute` calls seen.
    pub fn sync_call_count(&self) -> usize {
        self.sync_calls.load(Ordering::SeqCst)
    }

    /// Number of asynchronous submissions seen.
    pub fn async_call_count(&self) -> usize {
        self.next_index.load(Ordering::SeqCst)
    }

    /// Requests received, in call order, across both entry points.
    pub fn requests(&self) -> Vec<StatementRequest> {
        self.submitted.lock().unwrap().clone()
    }

    /// Submission indices that received a cancellation request, sorted.
    pub fn cancelled_indices(&self) -> Vec<usize> {
        let mut indices = self.cancelled.lock().unwrap().clone();
        indices.sort_unstable();
        indices
    }

    fn next_script(&self) -> Script {
        self.scripts
            .lock()
            .unwrap()
            .pop_front()
            .expect("fake session ran out of scripted outcomes")
    }
}

#[async_trait]
impl CqlSession for FakeSession {
    async fn execute(&self, request: &StatementRequest) -> Result<Rows, SessionError> {
        self.sync_calls.fetch_add(1, Ordering::SeqCst);
        self.submitted.lock().unwrap().push(request.clone());

        match self.next_script() {
            Script::Ok { rows, delay_ms } => {
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                Ok(rows)
            }
            Script::Fail { error, delay_ms } => {
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                Err(error)
            }
        }
    }

    fn execute_async(&self, request: StatementRequest) -> Box<dyn PendingQuery> {
        let index = self.next_index.fetch_add(1, Ordering::SeqCst);
        self.submitted.lock().unwrap().push(request);

        let script = self.next_script();
        let handle = tokio::spawn(async move {
            match script {
                Script::Ok { rows, delay_ms } => {
                    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                    Ok(rows)
                }
                Script::Fail { error, delay_ms } => {
                    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                    Err(error)
                }
            }
        });

        Box::new(FakePending {
            index,
            handle,
            cancelled: Arc::clone(&self.cancelled),
        })
    }
}

/// Pending handle backed by a spawned task, recording cancellation requests.
struct FakePending {
    index: usize,
    handle: JoinHandle<Result<Rows, SessionError>>,
    cancelled: Arc<Mutex<Vec<usize>>>,
}

#[async_trait]
impl PendingQuery for FakePending {
    async fn wait(self: Box<Self>) -> Result<Rows, SessionError> {
        match self.handle.await {
            Ok(result) => result,
            Err(_) => Err(SessionError::Cancelled),
        }
    }

    fn cancel(&self) {
        self.cancelled.lock().unwrap().push(self.index);
        self.handle.abort();
    }
}
