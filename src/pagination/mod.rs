//! Paginated retrieval of matching articles.
//!
//! [`QueryArticlesIter`] repeatedly executes an article query, one page at a
//! time, until the service reports no more pages or the optional item cap is
//! reached. Results can be consumed three ways:
//!
//! - [`QueryArticlesIter::next_batch`]: pull one page at a time
//! - [`QueryArticlesIter::exec_query`]: push pages into callbacks
//! - [`QueryArticlesIter::into_stream`]: a `Stream` of pages
//!
//! An `error` reported inside a response does not stop iteration: it is
//! logged and handed to the consumer with that page. Only a failed round-trip
//! ends iteration early. Nothing is retried.

use async_stream::stream;
use futures_util::stream::Stream;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, warn};

use crate::executor::{ExecutorError, QueryExecutor};
use crate::models::Article;
use crate::query::{
    ArticlesInfoConfig, ComplexQuery, QueryArticles, QueryArticlesArgs, QueryError,
    RequestArticles, RequestArticlesInfo, ReturnInfo,
};

/// Sorting, return shape and item cap for paginated retrieval
#[derive(Debug, Clone, PartialEq)]
pub struct IterOptions {
    /// Sort key sent as `articlesSortBy`
    pub sort_by: String,
    /// Ascending sort
    pub sort_by_asc: bool,
    /// Fields to include for each article
    pub return_info: ReturnInfo,
    /// Stop after this many articles; `None` means no cap
    pub max_items: Option<usize>,
}

impl Default for IterOptions {
    fn default() -> Self {
        Self {
            sort_by: "rel".to_string(),
            sort_by_asc: false,
            return_info: ReturnInfo::default(),
            max_items: None,
        }
    }
}

impl IterOptions {
    pub fn sort_by(mut self, sort_by: impl Into<String>) -> Self {
        self.sort_by = sort_by.into();
        self
    }

    pub fn sort_by_asc(mut self, asc: bool) -> Self {
        self.sort_by_asc = asc;
        self
    }

    pub fn return_info(mut self, return_info: ReturnInfo) -> Self {
        self.return_info = return_info;
        self
    }

    pub fn max_items(mut self, max_items: usize) -> Self {
        self.max_items = Some(max_items);
        self
    }
}

/// One fetched page
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleBatch {
    /// Page number (1-based)
    pub page: u32,
    /// Extracted result items, already truncated to the item cap
    pub items: Vec<Value>,
    /// Error reported by the service for this page
    pub error: Option<String>,
}

impl ArticleBatch {
    /// Decode the items as [`Article`]s
    pub fn articles(&self) -> Result<Vec<Article>, serde_json::Error> {
        self.items
            .iter()
            .cloned()
            .map(Article::from_value)
            .collect()
    }
}

/// Errors that end pagination early
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PaginationError {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Executor(#[from] ExecutorError),
}

/// Iterator state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IterState {
    /// Ready to fetch the next page
    Idle,
    /// All pages fetched or item cap reached
    Done,
    /// Stopped after a failed round-trip
    Failed,
}

/// Drives page-by-page retrieval of the articles matching a query
///
/// Single use: once done or failed, it stays that way.
#[derive(Debug)]
pub struct QueryArticlesIter {
    query: QueryArticles,
    executor: Arc<dyn QueryExecutor>,
    options: IterOptions,
    state: IterState,
    page: u32,
    pages: u32,
    returned_so_far: usize,
    items: Vec<Value>,
}

impl QueryArticlesIter {
    /// Iterate over a keyword/filter query
    pub fn new(
        executor: Arc<dyn QueryExecutor>,
        args: QueryArticlesArgs,
        options: IterOptions,
    ) -> Result<Self, QueryError> {
        Ok(Self::from_query(
            executor,
            QueryArticles::new(args)?,
            options,
        ))
    }

    /// Iterate over an already built query
    pub fn from_query(
        executor: Arc<dyn QueryExecutor>,
        query: QueryArticles,
        options: IterOptions,
    ) -> Self {
        Self {
            query,
            executor,
            options,
            state: IterState::Idle,
            page: 0,
            pages: 1,
            returned_so_far: 0,
            items: Vec::new(),
        }
    }

    /// Iterate over a complex query
    pub fn init_with_complex_query(
        executor: Arc<dyn QueryExecutor>,
        complex: impl Into<ComplexQuery>,
        options: IterOptions,
    ) -> Result<Self, QueryError> {
        let query = QueryArticles::init_with_complex_query(complex)?;
        Ok(Self::from_query(executor, query, options))
    }

    /// Total number of matching articles as reported by the service.
    ///
    /// Sends one request with default article paging; pagination state is
    /// not affected. Returns 0 when the service reports an error or omits
    /// the total.
    pub async fn count(&self) -> Result<u64, ExecutorError> {
        let mut query = self.query.clone();
        query.set_requested_result(RequestArticles::default());

        let response = self.executor.exec_query(&query).await?;
        if let Some(err) = response_error(&response) {
            error!("{}", err);
            return Ok(0);
        }

        Ok(response
            .pointer("/articles/totalResults")
            .and_then(Value::as_u64)
            .unwrap_or(0))
    }

    /// Fetch the next page.
    ///
    /// Returns `Ok(None)` once all pages have been fetched or the item cap is
    /// reached.
    pub async fn next_batch(&mut self) -> Result<Option<ArticleBatch>, PaginationError> {
        if self.state != IterState::Idle {
            return Ok(None);
        }

        self.page += 1;
        if self.page > self.pages || self.cap_reached() {
            self.state = IterState::Done;
            return Ok(None);
        }

        match self.fetch_page().await {
            Ok(batch) => Ok(Some(batch)),
            Err(e) => {
                self.state = IterState::Failed;
                Err(e)
            }
        }
    }

    async fn fetch_page(&mut self) -> Result<ArticleBatch, PaginationError> {
        let request = RequestArticlesInfo::new(ArticlesInfoConfig {
            page: self.page,
            sort_by: self.options.sort_by.clone(),
            sort_by_asc: self.options.sort_by_asc,
            return_info: self.options.return_info.clone(),
            ..ArticlesInfoConfig::default()
        })?;
        self.query.set_requested_result(request);

        debug!("Downloading article page {}...", self.page);
        let response = self.executor.exec_query(&self.query).await?;

        let err = response_error(&response);
        match &err {
            // keep the previous page count so one bad page does not cut
            // pagination short
            Some(err) => error!(
                page = self.page,
                "Error while obtaining a list of articles: {}", err
            ),
            None => {
                if !matches!(response.pointer("/articles/results"), Some(Value::Array(_))) {
                    warn!(page = self.page, "Response contained no article results");
                }
                self.pages = response
                    .pointer("/articles/pages")
                    .and_then(Value::as_u64)
                    .map(|p| u32::try_from(p).unwrap_or(u32::MAX))
                    .unwrap_or(0);
            }
        }

        let items = self.extract_results(&response);
        self.returned_so_far += items.len();
        self.items.extend(items.iter().cloned());

        Ok(ArticleBatch {
            page: self.page,
            items,
            error: err,
        })
    }

    /// Fetch all pages, handing each to `on_item` as `(items, error)`.
    ///
    /// `on_done` is called exactly once: with `None` after the last page, or
    /// with the error that stopped iteration.
    pub async fn exec_query<F, D>(&mut self, mut on_item: F, on_done: D)
    where
        F: FnMut(Vec<Value>, Option<String>),
        D: FnOnce(Option<PaginationError>),
    {
        loop {
            match self.next_batch().await {
                Ok(Some(batch)) => on_item(batch.items, batch.error),
                Ok(None) => {
                    on_done(None);
                    return;
                }
                Err(e) => {
                    error!("{}", e);
                    on_done(Some(e));
                    return;
                }
            }
        }
    }

    /// Consume the iterator as a stream of pages.
    ///
    /// The stream ends after the last page, or right after yielding the
    /// error that stopped iteration.
    pub fn into_stream(mut self) -> impl Stream<Item = Result<ArticleBatch, PaginationError>> {
        stream! {
            loop {
                match self.next_batch().await {
                    Ok(Some(batch)) => yield Ok(batch),
                    Ok(None) => break,
                    Err(e) => {
                        error!("{}", e);
                        yield Err(e);
                        break;
                    }
                }
            }
        }
    }

    fn cap_reached(&self) -> bool {
        matches!(self.options.max_items, Some(max) if self.returned_so_far >= max)
    }

    /// Results of a response, without nulls, truncated to the remaining cap
    fn extract_results(&self, response: &Value) -> Vec<Value> {
        let results = response
            .pointer("/articles/results")
            .and_then(Value::as_array)
            .map(|r| r.iter().filter(|v| !v.is_null()).cloned());

        let Some(results) = results else {
            return Vec::new();
        };
        match self.options.max_items {
            Some(max) => results
                .take(max.saturating_sub(self.returned_so_far))
                .collect(),
            None => results.collect(),
        }
    }

    pub fn query(&self) -> &QueryArticles {
        &self.query
    }

    pub fn state(&self) -> IterState {
        self.state
    }

    /// Last requested page (0 before the first fetch)
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Page count reported by the service (1 before the first response)
    pub fn pages(&self) -> u32 {
        self.pages
    }

    pub fn returned_so_far(&self) -> usize {
        self.returned_so_far
    }

    /// Every item returned so far
    pub fn items(&self) -> &[Value] {
        &self.items
    }
}

fn response_error(response: &Value) -> Option<String> {
    match response.get("error")? {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
