//! Wire parameter map and the helpers that fill it.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::query::QueryError;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Operator used to combine multiple values of one filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryOper {
    And,
    Or,
}

impl QueryOper {
    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryOper::And => "and",
            QueryOper::Or => "or",
        }
    }
}

/// Value(s) for one filter group (keyword, concept, source, ...)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValues {
    /// A single value, sent as a plain string
    Single(String),
    /// Several values, optionally with an explicit combination operator
    List {
        values: Vec<String>,
        oper: Option<QueryOper>,
    },
}

impl QueryValues {
    /// A single value
    pub fn single(value: impl Into<String>) -> Self {
        QueryValues::Single(value.into())
    }

    /// A list of values combined with the filter's default operator
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        QueryValues::List {
            values: values.into_iter().map(Into::into).collect(),
            oper: None,
        }
    }

    /// A list of values that must all match
    pub fn all<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::list(values).oper(QueryOper::And)
    }

    /// A list of values where any may match
    pub fn any<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::list(values).oper(QueryOper::Or)
    }

    /// Set the combination operator. A single value is promoted to a list.
    pub fn oper(self, oper: QueryOper) -> Self {
        match self {
            QueryValues::Single(value) => QueryValues::List {
                values: vec![value],
                oper: Some(oper),
            },
            QueryValues::List { values, .. } => QueryValues::List {
                values,
                oper: Some(oper),
            },
        }
    }
}

impl From<&str> for QueryValues {
    fn from(value: &str) -> Self {
        QueryValues::single(value)
    }
}

impl From<String> for QueryValues {
    fn from(value: String) -> Self {
        QueryValues::Single(value)
    }
}

impl From<Vec<String>> for QueryValues {
    fn from(values: Vec<String>) -> Self {
        QueryValues::list(values)
    }
}

impl From<Vec<&str>> for QueryValues {
    fn from(values: Vec<&str>) -> Self {
        QueryValues::list(values)
    }
}

/// A point in time accepted by date parameters
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum TemporalValue {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    /// ISO-8601 text, validated when encoded
    Text(String),
}

impl TemporalValue {
    fn to_date_time(&self) -> Result<NaiveDateTime, QueryError> {
        match self {
            TemporalValue::Date(date) => Ok(date.and_time(NaiveTime::MIN)),
            TemporalValue::DateTime(dt) => Ok(*dt),
            TemporalValue::Text(text) => parse_temporal_text(text),
        }
    }

    /// Canonical `YYYY-MM-DD` encoding
    pub fn encode_date(&self) -> Result<String, QueryError> {
        Ok(self.to_date_time()?.date().format(DATE_FORMAT).to_string())
    }

    /// Canonical `YYYY-MM-DDTHH:MM:SS` encoding
    pub fn encode_date_time(&self) -> Result<String, QueryError> {
        Ok(self.to_date_time()?.format(DATE_TIME_FORMAT).to_string())
    }
}

fn parse_temporal_text(text: &str) -> Result<NaiveDateTime, QueryError> {
    let text = text.trim();

    if let Ok(date) = NaiveDate::parse_from_str(text, DATE_FORMAT) {
        return Ok(date.and_time(NaiveTime::MIN));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.naive_utc());
    }
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f"))
        .map_err(|_| QueryError::InvalidDate(text.to_string()))
}

impl From<NaiveDate> for TemporalValue {
    fn from(date: NaiveDate) -> Self {
        TemporalValue::Date(date)
    }
}

impl From<NaiveDateTime> for TemporalValue {
    fn from(dt: NaiveDateTime) -> Self {
        TemporalValue::DateTime(dt)
    }
}

impl From<DateTime<Utc>> for TemporalValue {
    fn from(dt: DateTime<Utc>) -> Self {
        TemporalValue::DateTime(dt.naive_utc())
    }
}

impl From<&str> for TemporalValue {
    fn from(text: &str) -> Self {
        TemporalValue::Text(text.to_string())
    }
}

impl From<String> for TemporalValue {
    fn from(text: String) -> Self {
        TemporalValue::Text(text)
    }
}

/// Parameter name to value mapping sent to the service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParamMap {
    params: BTreeMap<String, Value>,
}

impl ParamMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value unconditionally
    pub fn set_val(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.params.insert(name.into(), value.into());
    }

    /// Store a value only if it differs from the server-side default
    pub fn set_val_if_not_default<V>(&mut self, name: impl Into<String>, value: V, default: V)
    where
        V: Into<Value> + PartialEq,
    {
        if value != default {
            self.set_val(name, value);
        }
    }

    /// Store a filter group.
    ///
    /// The operator is only written for lists of two or more values and only
    /// when the filter has an operator key at all.
    pub fn set_query_arr_val(
        &mut self,
        values: Option<&QueryValues>,
        value_key: &str,
        oper_key: Option<&str>,
        default_oper: QueryOper,
    ) {
        match values {
            None => {}
            Some(QueryValues::Single(value)) => self.set_val(value_key, value.as_str()),
            Some(QueryValues::List { values, .. }) if values.is_empty() => {}
            Some(QueryValues::List { values, oper }) => {
                self.set_val(value_key, values.clone());
                if let Some(oper_key) = oper_key {
                    if values.len() > 1 {
                        self.set_val(oper_key, oper.unwrap_or(default_oper).as_str());
                    }
                }
            }
        }
    }

    /// Store a date as `YYYY-MM-DD`
    pub fn set_date_val(&mut self, name: &str, value: &TemporalValue) -> Result<(), QueryError> {
        let encoded = value.encode_date()?;
        self.set_val(name, encoded);
        Ok(())
    }

    /// Store a date-time as `YYYY-MM-DDTHH:MM:SS`
    pub fn set_date_time_val(
        &mut self,
        name: &str,
        value: &TemporalValue,
    ) -> Result<(), QueryError> {
        let encoded = value.encode_date_time()?;
        self.set_val(name, encoded);
        Ok(())
    }

    /// Merge another map into this one; keys from `other` win
    pub fn extend(&mut self, other: ParamMap) {
        self.params.extend(other.params);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.params.get(name)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.params.remove(name)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.params.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.params.keys().map(String::as_str)
    }

    pub fn into_inner(self) -> BTreeMap<String, Value> {
        self.params
    }
}

impl FromIterator<(String, Value)> for ParamMap {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self {
            params: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_val_if_not_default() {
        let mut params = ParamMap::new();
        params.set_val_if_not_default("eventFilter", "keepAll", "keepAll");
        params.set_val_if_not_default("dataType", "blog", "news");

        assert!(!params.contains_key("eventFilter"));
        assert_eq!(params.get("dataType"), Some(&json!("blog")));
    }

    #[test]
    fn test_query_arr_val_absent_and_empty() {
        let mut params = ParamMap::new();
        params.set_query_arr_val(None, "keyword", Some("keywordOper"), QueryOper::And);
        params.set_query_arr_val(
            Some(&QueryValues::list(Vec::<String>::new())),
            "conceptUri",
            Some("conceptOper"),
            QueryOper::And,
        );

        assert!(params.is_empty());
    }

    #[test]
    fn test_query_arr_val_single() {
        let mut params = ParamMap::new();
        params.set_query_arr_val(
            Some(&QueryValues::single("Tesla")),
            "keyword",
            Some("keywordOper"),
            QueryOper::And,
        );

        assert_eq!(params.get("keyword"), Some(&json!("Tesla")));
        assert!(!params.contains_key("keywordOper"));
    }

    #[test]
    fn test_query_arr_val_one_element_list_has_no_oper() {
        let mut params = ParamMap::new();
        params.set_query_arr_val(
            Some(&QueryValues::any(["Tesla"])),
            "keyword",
            Some("keywordOper"),
            QueryOper::And,
        );

        assert_eq!(params.get("keyword"), Some(&json!(["Tesla"])));
        assert!(!params.contains_key("keywordOper"));
    }

    #[test]
    fn test_query_arr_val_list_oper() {
        let mut params = ParamMap::new();
        params.set_query_arr_val(
            Some(&QueryValues::list(["Tesla", "Musk"])),
            "keyword",
            Some("keywordOper"),
            QueryOper::And,
        );
        params.set_query_arr_val(
            Some(&QueryValues::all(["a", "b"])),
            "sourceUri",
            Some("sourceOper"),
            QueryOper::Or,
        );
        params.set_query_arr_val(
            Some(&QueryValues::list(["eng", "deu"])),
            "lang",
            None,
            QueryOper::Or,
        );

        assert_eq!(params.get("keywordOper"), Some(&json!("and")));
        assert_eq!(params.get("sourceOper"), Some(&json!("and")));
        assert_eq!(params.get("lang"), Some(&json!(["eng", "deu"])));
        assert_eq!(params.len(), 5);
    }

    #[test]
    fn test_date_encoding() {
        let mut params = ParamMap::new();
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();

        params.set_date_val("dateStart", &date.into()).unwrap();
        params
            .set_date_val("dateEnd", &"2024-03-10T12:30:00Z".into())
            .unwrap();
        params
            .set_date_time_val("updatesAfterTm", &"2024-03-10".into())
            .unwrap();

        assert_eq!(params.get("dateStart"), Some(&json!("2024-03-09")));
        assert_eq!(params.get("dateEnd"), Some(&json!("2024-03-10")));
        assert_eq!(
            params.get("updatesAfterTm"),
            Some(&json!("2024-03-10T00:00:00"))
        );
    }

    #[test]
    fn test_invalid_date() {
        let mut params = ParamMap::new();
        let result = params.set_date_val("dateStart", &"last tuesday".into());

        assert!(matches!(result, Err(QueryError::InvalidDate(_))));
        assert!(params.is_empty());
    }

    #[test]
    fn test_serializes_as_object() {
        let mut params = ParamMap::new();
        params.set_val("action", "getArticles");
        params.set_val("articlesPage", 2);

        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value, json!({"action": "getArticles", "articlesPage": 2}));
    }
}
