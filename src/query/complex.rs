//! Thin wrapper around an already-built complex boolean query.

use serde_json::{Map, Value};

/// A complex article query (`$query` condition tree plus optional `$filter`)
///
/// Building the condition tree itself is left to the caller; this type only
/// produces the canonical object the service expects.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexArticleQuery {
    condition: Value,
    filter: Option<Map<String, Value>>,
}

impl ComplexArticleQuery {
    pub fn new(condition: Value) -> Self {
        Self {
            condition,
            filter: None,
        }
    }

    /// Add a `$filter` entry (e.g. `isDuplicate`, `dataType`)
    pub fn filter(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filter
            .get_or_insert_with(Map::new)
            .insert(name.into(), value.into());
        self
    }

    /// The query object sent as the `query` parameter
    pub fn get_query(&self) -> Value {
        let mut query = Map::new();
        query.insert("$query".to_string(), self.condition.clone());
        if let Some(filter) = &self.filter {
            query.insert("$filter".to_string(), Value::Object(filter.clone()));
        }
        Value::Object(query)
    }
}
