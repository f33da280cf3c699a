//! Mock executor for testing purposes.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::Mutex;

use super::{ExecutorError, QueryExecutor};
use crate::models::ParamMap;
use crate::query::QueryArticles;

/// An executor that replays scripted responses in order.
///
/// Every call records the parameters it was given. Once the script runs out,
/// an empty object is returned.
#[derive(Debug, Default)]
pub struct MockExecutor {
    responses: Mutex<VecDeque<Result<Value, ExecutorError>>>,
    calls: Mutex<Vec<ParamMap>>,
}

impl MockExecutor {
    /// Create a new mock executor with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock executor that returns these responses in order.
    pub fn with_responses(responses: impl IntoIterator<Item = Value>) -> Self {
        let mock = Self::new();
        for response in responses {
            mock.push_response(response);
        }
        mock
    }

    /// Queue a successful response.
    pub fn push_response(&self, response: Value) {
        self.lock_responses().push_back(Ok(response));
    }

    /// Queue a failed round-trip.
    pub fn push_error(&self, error: ExecutorError) {
        self.lock_responses().push_back(Err(error));
    }

    /// Parameters of every executed query, oldest first.
    pub fn calls(&self) -> Vec<ParamMap> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Number of executed queries.
    pub fn call_count(&self) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    fn lock_responses(&self) -> std::sync::MutexGuard<'_, VecDeque<Result<Value, ExecutorError>>> {
        self.responses
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl QueryExecutor for MockExecutor {
    async fn exec_query(&self, query: &QueryArticles) -> Result<Value, ExecutorError> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(query.query_params());

        self.lock_responses()
            .pop_front()
            .unwrap_or_else(|| Ok(json!({})))
    }
}

/// Helper to build an `articles` response page for testing.
pub fn articles_page(results: Vec<Value>, pages: u32, total_results: Option<u64>) -> Value {
    let mut articles = json!({
        "results": results,
        "pages": pages,
    });
    if let Some(total) = total_results {
        articles["totalResults"] = json!(total);
    }
    json!({ "articles": articles })
}

/// Helper to build `count` dummy article items for testing.
pub fn make_articles(prefix: &str, count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| {
            json!({
                "uri": format!("{}-{}", prefix, i),
                "title": format!("Article {} {}", prefix, i),
            })
        })
        .collect()
}
