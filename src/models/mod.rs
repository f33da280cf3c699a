//! Core data models for article queries and their results.

mod article;
mod filters;
mod params;

pub use article::{Article, ArticleSource};
pub use filters::{DataType, EventFilter, HasDuplicateFilter, IsDuplicateFilter, KeywordLoc};
pub use params::{ParamMap, QueryOper, QueryValues, TemporalValue};
