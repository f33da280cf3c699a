//! Executors run a built query against the service.
//!
//! The query layer never talks to the network itself. Anything that can turn
//! a [`QueryArticles`] into a decoded JSON response implements
//! [`QueryExecutor`]:
//!
//! - [`HttpExecutor`]: posts the query to an Event Registry style host
//! - [`MockExecutor`]: replays scripted responses, for tests
//!
//! Executors do not retry. A failed round-trip is returned as an
//! [`ExecutorError`]; an error reported by the service inside a successful
//! response is left in the response's `error` field for the caller.

mod http;
pub mod mock;

pub use http::HttpExecutor;
pub use mock::MockExecutor;

use async_trait::async_trait;
use serde_json::Value;

use crate::query::QueryArticles;

/// Capability to execute an article query
#[async_trait]
pub trait QueryExecutor: Send + Sync + std::fmt::Debug {
    /// Send the query and return the decoded response
    async fn exec_query(&self, query: &QueryArticles) -> Result<Value, ExecutorError>;
}

/// Errors that can occur while executing a query
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExecutorError {
    /// Network or HTTP transport error
    #[error("Network error: {0}")]
    Network(String),

    /// The service answered with a non-success status
    #[error("API error: {0}")]
    Api(String),

    /// The response body could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),

    /// Other error
    #[error("Error: {0}")]
    Other(String),
}

impl From<reqwest::Error> for ExecutorError {
    fn from(err: reqwest::Error) -> Self {
        ExecutorError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ExecutorError {
    fn from(err: serde_json::Error) -> Self {
        ExecutorError::Parse(format!("JSON: {}", err))
    }
}
