//! Query construction for the article search endpoint.
//!
//! [`QueryArticles`] is the entry point. It assembles the filter parameters
//! and carries exactly one [`RequestArticles`] describing which result shape
//! the service should return.
//!
//! ```rust
//! use article_query::models::QueryValues;
//! use article_query::query::{QueryArticles, QueryArticlesArgs};
//!
//! # fn main() -> Result<(), article_query::query::QueryError> {
//! let query = QueryArticles::new(
//!     QueryArticlesArgs::default()
//!         .keywords(QueryValues::list(["Tesla", "Musk"]))
//!         .lang("eng")
//!         .date_start("2024-01-01"),
//! )?;
//!
//! assert_eq!(query.params().get("keywordOper").unwrap(), "and");
//! # Ok(())
//! # }
//! ```

mod articles;
mod complex;
mod requests;
mod return_info;

pub use articles::{ComplexQuery, QueryArticles, QueryArticlesArgs, ARTICLES_PATH};
pub use complex::ComplexArticleQuery;
pub use requests::{
    ArticlesInfoConfig, CategoryAggrConfig, ConceptAggrConfig, ConceptGraphConfig,
    ConceptMatrixConfig, ConceptTrendsConfig, KeywordAggrConfig, RecentActivityConfig,
    RequestArticles, RequestArticlesCategoryAggr, RequestArticlesConceptAggr,
    RequestArticlesConceptGraph, RequestArticlesConceptMatrix, RequestArticlesConceptTrends,
    RequestArticlesDateMentionAggr, RequestArticlesInfo, RequestArticlesKeywordAggr,
    RequestArticlesRecentActivity, RequestArticlesSourceAggr, RequestArticlesTimeAggr,
    RequestArticlesUriWgtList, SourceAggrConfig, UriWgtListConfig,
};
pub use return_info::ReturnInfo;

/// Errors raised while building a query
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QueryError {
    /// An argument has the wrong shape or conflicts with another argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A numeric bound of a result request was violated
    #[error("Out of range: {0}")]
    OutOfRange(String),

    /// A value could not be interpreted as a point in time
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// The value is not a recognized article result request
    #[error("Unsupported result request: {0}")]
    UnsupportedResult(String),
}
