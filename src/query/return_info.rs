//! Return-shape configuration.
//!
//! Selects which fields the service includes for each result type. The
//! flags are opaque to this crate: they are passed through with the result
//! type prefix applied to each name.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::models::ParamMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReturnInfo {
    flags: BTreeMap<String, Value>,
}

impl ReturnInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field-selection flag, e.g. `("includeArticleConcepts", true)`
    /// or `("articleBodyLen", -1)`
    pub fn flag(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.flags.insert(name.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Parameters for a result type, e.g. prefix `articles` turns
    /// `includeArticleConcepts` into `articlesIncludeArticleConcepts`
    pub fn get_params(&self, prefix: &str) -> ParamMap {
        self.flags
            .iter()
            .map(|(name, value)| (prefixed(prefix, name), value.clone()))
            .collect()
    }
}

fn prefixed(prefix: &str, name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => format!("{}{}{}", prefix, first.to_ascii_uppercase(), chars.as_str()),
        None => prefix.to_string(),
    }
}
