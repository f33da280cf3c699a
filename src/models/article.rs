//! Article model representing one item of an article search result.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// News source an article was published by
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleSource {
    /// Source URI (usually the host name)
    #[serde(default)]
    pub uri: Option<String>,

    /// Display title of the source
    #[serde(default)]
    pub title: Option<String>,

    /// Data type of the source ("news", "pr", "blog")
    #[serde(default, rename = "dataType")]
    pub data_type: Option<String>,
}

/// An article as returned in `articles.results`
///
/// Only commonly requested fields are typed; anything else the return shape
/// asked for ends up in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Article URI
    pub uri: String,

    /// Language code (e.g. "eng")
    #[serde(default)]
    pub lang: Option<String>,

    /// Publish date (YYYY-MM-DD)
    #[serde(default)]
    pub date: Option<String>,

    /// Publish date and time
    #[serde(default)]
    pub date_time: Option<String>,

    /// Article URL
    #[serde(default)]
    pub url: Option<String>,

    /// Title
    #[serde(default)]
    pub title: String,

    /// Body text (may be truncated by the return shape)
    #[serde(default)]
    pub body: String,

    /// Publishing source
    #[serde(default)]
    pub source: Option<ArticleSource>,

    /// Relevance weight, when sorting by relevance
    #[serde(default)]
    pub wgt: Option<i64>,

    /// Remaining fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Article {
    /// Decode an article from a raw result item
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Source title, if the source was returned
    pub fn source_title(&self) -> Option<&str> {
        self.source.as_ref().and_then(|s| s.title.as_deref())
    }

    /// Check whether the article is a duplicate of another article
    pub fn is_duplicate(&self) -> bool {
        self.extra
            .get("isDuplicate")
            .and_then(|v| v.as_bool())
            .unwrap_or(false)
    }
}
