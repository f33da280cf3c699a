//! Utility modules supporting query execution.
//!
//! - [`HttpClient`]: shared reqwest client configured from [`crate::config::ApiConfig`]

mod http;

pub use http::HttpClient;
