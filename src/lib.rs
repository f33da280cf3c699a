//! # Article Query
//!
//! A query builder and async pagination iterator for article-search APIs
//! (the `/json/article` endpoint).
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`models`]: Parameter maps, filter enums and the `Article` result model
//! - [`query`]: `QueryArticles` and the result-shape requests it carries
//! - [`executor`]: The `QueryExecutor` trait with HTTP and mock implementations
//! - [`pagination`]: `QueryArticlesIter`, page-by-page retrieval
//! - [`utils`]: Shared HTTP client
//! - [`config`]: Configuration management
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use article_query::{HttpExecutor, IterOptions, QueryArticlesArgs, QueryArticlesIter};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let executor = Arc::new(HttpExecutor::new("https://eventregistry.org")?);
//! let mut iter = QueryArticlesIter::new(
//!     executor,
//!     QueryArticlesArgs::default().keywords("Tesla").lang("eng"),
//!     IterOptions::default().max_items(50),
//! )?;
//!
//! while let Some(batch) = iter.next_batch().await? {
//!     println!("page {}: {} articles", batch.page, batch.items.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod executor;
pub mod models;
pub mod pagination;
pub mod query;
pub mod utils;

// Re-export commonly used types
pub use executor::{ExecutorError, HttpExecutor, MockExecutor, QueryExecutor};
pub use models::Article;
pub use pagination::{ArticleBatch, IterOptions, PaginationError, QueryArticlesIter};
pub use query::{QueryArticles, QueryArticlesArgs, QueryError, RequestArticles};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
