//! Execution configuration.
//!
//! Defaults applied to every dispatch when the caller does not specify
//! per-call overrides, plus the in-flight ceiling protecting the cluster
//! from unbounded fan-out.

use crate::error::ConfigError;
use crate::session::Consistency;

/// Maximum number of statements dispatched asynchronously from one call.
///
/// A 10% overrun is tolerated before hard rejection, to give a little slack
/// for bursts while still failing loudly.
pub const MAX_ASYNC_STATEMENTS: usize = 1000;

/// Default page size (fetch size) requested per statement.
pub const DEFAULT_PAGE_SIZE: u32 = 5000;

/// Configuration for the statement executor.
#[derive(Debug, Clone)]
pub struct ExecutionConfig {
    /// Consistency directive used when no per-call override is given
    pub default_consistency: Consistency,

    /// Page size requested when no per-call override is given
    pub default_page_size: u32,

    /// In-flight ceiling for one multi-statement dispatch
    pub max_async_statements: usize,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            default_consistency: Consistency::One,
            default_page_size: DEFAULT_PAGE_SIZE,
            max_async_statements: MAX_ASYNC_STATEMENTS,
        }
    }
}

impl ExecutionConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default consistency directive.
    pub fn with_consistency(mut self, consistency: Consistency) -> Self {
        self.default_consistency = consistency;
        self
    }

    /// Set the default page size.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.default_page_size = page_size;
        self
    }

    /// Set the in-flight ceiling.
    pub fn with_max_async_statements(mut self, max: usize) -> Self {
        self.max_async_statements = max;
        self
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the page size or the in-flight
    /// ceiling is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_page_size == 0 {
            return Err(ConfigError::InvalidValue {
                parameter: "default_page_size",
                message: "page size must be at least 1".to_string(),
            });
        }
        if self.max_async_statements == 0 {
            return Err(ConfigError::InvalidValue {
                parameter: "max_async_statements",
                message: "in-flight ceiling must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Hard rejection ceiling: the configured maximum plus a 10% overrun.
    pub fn hard_ceiling(&self) -> usize {
        self.max_async_statements + self.max_async_statements / 10
    }
}
