//! The article query façade.

use serde_json::Value;

use super::{ComplexArticleQuery, QueryError, RequestArticles};
use crate::models::{
    DataType, EventFilter, HasDuplicateFilter, IsDuplicateFilter, KeywordLoc, ParamMap, QueryOper,
    QueryValues, TemporalValue,
};

/// Endpoint path article queries are sent to
pub const ARTICLES_PATH: &str = "/json/article";

const ACTION: &str = "getArticles";

/// Filters for a keyword/filter article query
///
/// All filters are optional; unset filters and policy values equal to the
/// service defaults are left out of the request.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryArticlesArgs {
    pub keywords: Option<QueryValues>,
    pub concept_uri: Option<QueryValues>,
    pub category_uri: Option<QueryValues>,
    pub source_uri: Option<QueryValues>,
    pub source_location_uri: Option<QueryValues>,
    pub source_group_uri: Option<QueryValues>,
    pub location_uri: Option<QueryValues>,
    pub lang: Option<QueryValues>,

    pub date_start: Option<TemporalValue>,
    pub date_end: Option<TemporalValue>,
    pub date_mention_start: Option<TemporalValue>,
    pub date_mention_end: Option<TemporalValue>,

    pub ignore_keywords: Option<QueryValues>,
    pub ignore_concept_uri: Option<QueryValues>,
    pub ignore_category_uri: Option<QueryValues>,
    pub ignore_source_uri: Option<QueryValues>,
    pub ignore_source_location_uri: Option<QueryValues>,
    pub ignore_source_group_uri: Option<QueryValues>,
    pub ignore_location_uri: Option<QueryValues>,
    pub ignore_lang: Option<QueryValues>,

    pub keywords_loc: KeywordLoc,
    pub ignore_keywords_loc: KeywordLoc,
    pub is_duplicate_filter: IsDuplicateFilter,
    pub has_duplicate_filter: HasDuplicateFilter,
    pub event_filter: EventFilter,
    pub data_type: Vec<DataType>,

    pub requested_result: RequestArticles,
}

impl Default for QueryArticlesArgs {
    fn default() -> Self {
        Self {
            keywords: None,
            concept_uri: None,
            category_uri: None,
            source_uri: None,
            source_location_uri: None,
            source_group_uri: None,
            location_uri: None,
            lang: None,
            date_start: None,
            date_end: None,
            date_mention_start: None,
            date_mention_end: None,
            ignore_keywords: None,
            ignore_concept_uri: None,
            ignore_category_uri: None,
            ignore_source_uri: None,
            ignore_source_location_uri: None,
            ignore_source_group_uri: None,
            ignore_location_uri: None,
            ignore_lang: None,
            keywords_loc: KeywordLoc::Body,
            ignore_keywords_loc: KeywordLoc::Body,
            is_duplicate_filter: IsDuplicateFilter::KeepAll,
            has_duplicate_filter: HasDuplicateFilter::KeepAll,
            event_filter: EventFilter::KeepAll,
            data_type: vec![DataType::News],
            requested_result: RequestArticles::default(),
        }
    }
}

impl QueryArticlesArgs {
    /// Set keyword filter
    pub fn keywords(mut self, keywords: impl Into<QueryValues>) -> Self {
        self.keywords = Some(keywords.into());
        self
    }

    /// Set concept filter
    pub fn concept_uri(mut self, uris: impl Into<QueryValues>) -> Self {
        self.concept_uri = Some(uris.into());
        self
    }

    /// Set category filter
    pub fn category_uri(mut self, uris: impl Into<QueryValues>) -> Self {
        self.category_uri = Some(uris.into());
        self
    }

    /// Set news source filter
    pub fn source_uri(mut self, uris: impl Into<QueryValues>) -> Self {
        self.source_uri = Some(uris.into());
        self
    }

    /// Set source location filter
    pub fn source_location_uri(mut self, uris: impl Into<QueryValues>) -> Self {
        self.source_location_uri = Some(uris.into());
        self
    }

    /// Set source group filter
    pub fn source_group_uri(mut self, uris: impl Into<QueryValues>) -> Self {
        self.source_group_uri = Some(uris.into());
        self
    }

    /// Set location filter
    pub fn location_uri(mut self, uris: impl Into<QueryValues>) -> Self {
        self.location_uri = Some(uris.into());
        self
    }

    /// Set language filter
    pub fn lang(mut self, lang: impl Into<QueryValues>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    /// Set earliest publish date
    pub fn date_start(mut self, date: impl Into<TemporalValue>) -> Self {
        self.date_start = Some(date.into());
        self
    }

    /// Set latest publish date
    pub fn date_end(mut self, date: impl Into<TemporalValue>) -> Self {
        self.date_end = Some(date.into());
        self
    }

    /// Set earliest mentioned date
    pub fn date_mention_start(mut self, date: impl Into<TemporalValue>) -> Self {
        self.date_mention_start = Some(date.into());
        self
    }

    /// Set latest mentioned date
    pub fn date_mention_end(mut self, date: impl Into<TemporalValue>) -> Self {
        self.date_mention_end = Some(date.into());
        self
    }

    /// Exclude articles with these keywords
    pub fn ignore_keywords(mut self, keywords: impl Into<QueryValues>) -> Self {
        self.ignore_keywords = Some(keywords.into());
        self
    }

    /// Exclude articles mentioning these concepts
    pub fn ignore_concept_uri(mut self, uris: impl Into<QueryValues>) -> Self {
        self.ignore_concept_uri = Some(uris.into());
        self
    }

    /// Exclude articles in these categories
    pub fn ignore_category_uri(mut self, uris: impl Into<QueryValues>) -> Self {
        self.ignore_category_uri = Some(uris.into());
        self
    }

    /// Exclude articles from these sources
    pub fn ignore_source_uri(mut self, uris: impl Into<QueryValues>) -> Self {
        self.ignore_source_uri = Some(uris.into());
        self
    }

    /// Exclude articles from sources in these locations
    pub fn ignore_source_location_uri(mut self, uris: impl Into<QueryValues>) -> Self {
        self.ignore_source_location_uri = Some(uris.into());
        self
    }

    /// Exclude articles from these source groups
    pub fn ignore_source_group_uri(mut self, uris: impl Into<QueryValues>) -> Self {
        self.ignore_source_group_uri = Some(uris.into());
        self
    }

    /// Exclude articles about these locations
    pub fn ignore_location_uri(mut self, uris: impl Into<QueryValues>) -> Self {
        self.ignore_location_uri = Some(uris.into());
        self
    }

    /// Exclude articles in these languages
    pub fn ignore_lang(mut self, lang: impl Into<QueryValues>) -> Self {
        self.ignore_lang = Some(lang.into());
        self
    }

    /// Set where keywords are matched
    pub fn keywords_loc(mut self, loc: KeywordLoc) -> Self {
        self.keywords_loc = loc;
        self
    }

    /// Set where ignored keywords are matched
    pub fn ignore_keywords_loc(mut self, loc: KeywordLoc) -> Self {
        self.ignore_keywords_loc = loc;
        self
    }

    /// Set duplicate handling
    pub fn is_duplicate_filter(mut self, filter: IsDuplicateFilter) -> Self {
        self.is_duplicate_filter = filter;
        self
    }

    /// Set has-duplicate handling
    pub fn has_duplicate_filter(mut self, filter: HasDuplicateFilter) -> Self {
        self.has_duplicate_filter = filter;
        self
    }

    /// Set event linkage handling
    pub fn event_filter(mut self, filter: EventFilter) -> Self {
        self.event_filter = filter;
        self
    }

    /// Set content types to search
    pub fn data_type(mut self, data_type: impl IntoIterator<Item = DataType>) -> Self {
        self.data_type = data_type.into_iter().collect();
        self
    }

    /// Set the result request
    pub fn requested_result(mut self, request: impl Into<RequestArticles>) -> Self {
        self.requested_result = request.into();
        self
    }
}

/// Input accepted by the complex-query construction mode
#[derive(Debug, Clone, PartialEq)]
pub enum ComplexQuery {
    /// A structured complex query
    Structured(ComplexArticleQuery),
    /// A JSON string (used verbatim) or a JSON object (serialized)
    Json(Value),
}

impl From<ComplexArticleQuery> for ComplexQuery {
    fn from(query: ComplexArticleQuery) -> Self {
        ComplexQuery::Structured(query)
    }
}

impl From<Value> for ComplexQuery {
    fn from(value: Value) -> Self {
        ComplexQuery::Json(value)
    }
}

impl From<&str> for ComplexQuery {
    fn from(raw: &str) -> Self {
        ComplexQuery::Json(Value::String(raw.to_string()))
    }
}

impl From<String> for ComplexQuery {
    fn from(raw: String) -> Self {
        ComplexQuery::Json(Value::String(raw))
    }
}

impl ComplexQuery {
    /// The string sent as the `query` parameter
    pub fn to_query_string(&self) -> Result<String, QueryError> {
        match self {
            ComplexQuery::Structured(query) => Ok(query.get_query().to_string()),
            ComplexQuery::Json(Value::String(raw)) => Ok(raw.clone()),
            ComplexQuery::Json(value @ Value::Object(_)) => Ok(value.to_string()),
            ComplexQuery::Json(other) => Err(QueryError::InvalidArgument(format!(
                "complex query must be a ComplexArticleQuery, a string or an object, got {}",
                json_kind(other)
            ))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A query against the article search endpoint
///
/// Holds the filter parameters and exactly one result request.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryArticles {
    params: ParamMap,
    requested_result: RequestArticles,
}

impl Default for QueryArticles {
    fn default() -> Self {
        let mut params = ParamMap::new();
        params.set_val("action", ACTION);
        Self::with_params(params)
    }
}

impl QueryArticles {
    fn with_params(params: ParamMap) -> Self {
        Self {
            params,
            requested_result: RequestArticles::default(),
        }
    }

    /// Build a keyword/filter query
    pub fn new(args: QueryArticlesArgs) -> Result<Self, QueryError> {
        let mut query = Self::default();
        let p = &mut query.params;

        let filters = [
            (&args.keywords, "keyword", Some("keywordOper"), QueryOper::And),
            (&args.concept_uri, "conceptUri", Some("conceptOper"), QueryOper::And),
            (&args.category_uri, "categoryUri", Some("categoryOper"), QueryOper::Or),
            (&args.source_uri, "sourceUri", Some("sourceOper"), QueryOper::Or),
            (&args.source_location_uri, "sourceLocationUri", None, QueryOper::Or),
            (&args.source_group_uri, "sourceGroupUri", Some("sourceGroupOper"), QueryOper::Or),
            (&args.location_uri, "locationUri", None, QueryOper::Or),
            (&args.lang, "lang", None, QueryOper::Or),
        ];
        for (values, key, oper_key, default_oper) in filters {
            p.set_query_arr_val(values.as_ref(), key, oper_key, default_oper);
        }

        let dates = [
            (&args.date_start, "dateStart"),
            (&args.date_end, "dateEnd"),
            (&args.date_mention_start, "dateMentionStart"),
            (&args.date_mention_end, "dateMentionEnd"),
        ];
        for (date, key) in dates {
            if let Some(date) = date {
                p.set_date_val(key, date)?;
            }
        }

        // exclusions never carry an operator
        let ignored = [
            (&args.ignore_keywords, "ignoreKeyword"),
            (&args.ignore_concept_uri, "ignoreConceptUri"),
            (&args.ignore_category_uri, "ignoreCategoryUri"),
            (&args.ignore_source_uri, "ignoreSourceUri"),
            (&args.ignore_source_location_uri, "ignoreSourceLocationUri"),
            (&args.ignore_source_group_uri, "ignoreSourceGroupUri"),
            (&args.ignore_location_uri, "ignoreLocationUri"),
            (&args.ignore_lang, "ignoreLang"),
        ];
        for (values, key) in ignored {
            p.set_query_arr_val(values.as_ref(), key, None, QueryOper::Or);
        }

        let body = KeywordLoc::Body.as_str();
        p.set_val_if_not_default("keywordLoc", args.keywords_loc.as_str(), body);
        p.set_val_if_not_default("ignoreKeywordLoc", args.ignore_keywords_loc.as_str(), body);
        p.set_val_if_not_default(
            "isDuplicateFilter",
            args.is_duplicate_filter.as_str(),
            "keepAll",
        );
        p.set_val_if_not_default(
            "hasDuplicateFilter",
            args.has_duplicate_filter.as_str(),
            "keepAll",
        );
        p.set_val_if_not_default("eventFilter", args.event_filter.as_str(), "keepAll");
        p.set_val_if_not_default(
            "dataType",
            data_type_value(&args.data_type),
            Value::from("news"),
        );

        query.set_requested_result(args.requested_result);
        Ok(query)
    }

    /// Query for a known list of article URIs
    pub fn init_with_article_uri_list<I, S>(uris: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let uris: Vec<String> = uris.into_iter().map(Into::into).collect();
        let mut params = ParamMap::new();
        params.set_val("action", ACTION);
        params.set_val("articleUri", uris);
        Self::with_params(params)
    }

    /// Query for a weighted list of article URIs (`"uri:weight"` entries)
    pub fn init_with_article_uri_wgt_list<I, S>(uri_wgts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let joined = uri_wgts
            .into_iter()
            .map(Into::into)
            .collect::<Vec<String>>()
            .join(",");
        let mut params = ParamMap::new();
        params.set_val("action", ACTION);
        params.set_val("articleUriWgtList", joined);
        Self::with_params(params)
    }

    /// Query described by a complex boolean query
    pub fn init_with_complex_query(complex: impl Into<ComplexQuery>) -> Result<Self, QueryError> {
        let mut query = Self::default();
        query.set_complex_query(&complex.into())?;
        Ok(query)
    }

    pub(crate) fn set_complex_query(&mut self, complex: &ComplexQuery) -> Result<(), QueryError> {
        let encoded = complex.to_query_string()?;
        self.params.set_val("query", encoded);
        Ok(())
    }

    /// Replace the result request
    pub fn set_requested_result(&mut self, request: impl Into<RequestArticles>) {
        self.requested_result = request.into();
    }

    /// Replace the result request from a JSON description.
    ///
    /// On error the current result request is kept.
    pub fn set_requested_result_value(&mut self, value: Value) -> Result<(), QueryError> {
        let request = RequestArticles::from_value(value)?;
        self.requested_result = request;
        Ok(())
    }

    pub fn requested_result(&self) -> &RequestArticles {
        &self.requested_result
    }

    /// Filter parameters, without the result request
    pub fn params(&self) -> &ParamMap {
        &self.params
    }

    /// Everything sent to the service: filters, `resultType` and the result
    /// request's own parameters
    pub fn query_params(&self) -> ParamMap {
        let mut all = self.params.clone();
        all.set_val("resultType", self.requested_result.result_type());
        all.extend(self.requested_result.params().clone());
        all
    }

    pub fn path(&self) -> &'static str {
        ARTICLES_PATH
    }
}

fn data_type_value(data_type: &[DataType]) -> Value {
    match data_type {
        [] => Value::from(DataType::News.as_str()),
        [single] => Value::from(single.as_str()),
        many => Value::from(many.iter().map(|d| d.as_str()).collect::<Vec<_>>()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{
        ArticlesInfoConfig, ConceptAggrConfig, RequestArticlesConceptAggr, RequestArticlesInfo,
    };
    use serde_json::json;

    #[test]
    fn test_default_query() {
        let query = QueryArticles::new(QueryArticlesArgs::default()).unwrap();

        assert_eq!(query.params().len(), 1);
        assert_eq!(query.params().get("action"), Some(&json!("getArticles")));
        assert_eq!(query.requested_result().result_type(), "articles");
        assert_eq!(query, QueryArticles::default());
    }

    #[test]
    fn test_keyword_query() {
        let query = QueryArticles::new(
            QueryArticlesArgs::default()
                .keywords(QueryValues::list(["Tesla", "SpaceX"]))
                .concept_uri("http://en.wikipedia.org/wiki/Elon_Musk")
                .category_uri(QueryValues::list(["news/Business", "news/Technology"]))
                .lang(QueryValues::list(["eng", "deu"]))
                .ignore_keywords(QueryValues::list(["Twitter", "X"]))
                .date_start("2024-01-01")
                .date_end(chrono::NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()),
        )
        .unwrap();
        let params = query.params();

        assert_eq!(params.get("keyword"), Some(&json!(["Tesla", "SpaceX"])));
        assert_eq!(params.get("keywordOper"), Some(&json!("and")));
        assert_eq!(
            params.get("conceptUri"),
            Some(&json!("http://en.wikipedia.org/wiki/Elon_Musk"))
        );
        assert!(!params.contains_key("conceptOper"));
        assert_eq!(params.get("categoryOper"), Some(&json!("or")));
        assert_eq!(params.get("lang"), Some(&json!(["eng", "deu"])));
        assert!(!params.contains_key("langOper"));
        assert_eq!(params.get("ignoreKeyword"), Some(&json!(["Twitter", "X"])));
        assert!(!params.contains_key("ignoreKeywordOper"));
        assert_eq!(params.get("dateStart"), Some(&json!("2024-01-01")));
        assert_eq!(params.get("dateEnd"), Some(&json!("2024-01-31")));
    }

    #[test]
    fn test_every_filter_group_wire_keys() {
        let pair = |a: &str, b: &str| QueryValues::list([a.to_string(), b.to_string()]);
        let query = QueryArticles::new(
            QueryArticlesArgs::default()
                .keywords(pair("Tesla", "SpaceX"))
                .concept_uri(pair("c1", "c2"))
                .category_uri(pair("cat1", "cat2"))
                .source_uri(pair("bbc.co.uk", "cnn.com"))
                .source_location_uri(pair("loc/UK", "loc/US"))
                .source_group_uri(pair("g1", "g2"))
                .location_uri(pair("loc/Paris", "loc/Berlin"))
                .lang(pair("eng", "deu"))
                .ignore_keywords(pair("k1", "k2"))
                .ignore_concept_uri(pair("ic1", "ic2"))
                .ignore_category_uri(pair("icat1", "icat2"))
                .ignore_source_uri(pair("is1", "is2"))
                .ignore_source_location_uri(pair("isl1", "isl2"))
                .ignore_source_group_uri(pair("isg1", "isg2"))
                .ignore_location_uri(pair("il1", "il2"))
                .ignore_lang(pair("fra", "spa"))
                .date_mention_start("2024-02-01T10:30:00")
                .date_mention_end(chrono::NaiveDate::from_ymd_opt(2024, 2, 29).unwrap())
                .ignore_keywords_loc(KeywordLoc::Title),
        )
        .unwrap();
        let params = query.params();

        let with_oper = [
            ("keyword", "keywordOper", "and", ["Tesla", "SpaceX"]),
            ("conceptUri", "conceptOper", "and", ["c1", "c2"]),
            ("categoryUri", "categoryOper", "or", ["cat1", "cat2"]),
            ("sourceUri", "sourceOper", "or", ["bbc.co.uk", "cnn.com"]),
            ("sourceGroupUri", "sourceGroupOper", "or", ["g1", "g2"]),
        ];
        for (key, oper_key, oper, values) in with_oper {
            assert_eq!(params.get(key), Some(&json!(values)), "{}", key);
            assert_eq!(params.get(oper_key), Some(&json!(oper)), "{}", oper_key);
        }

        let without_oper = [
            ("sourceLocationUri", ["loc/UK", "loc/US"]),
            ("locationUri", ["loc/Paris", "loc/Berlin"]),
            ("lang", ["eng", "deu"]),
            ("ignoreKeyword", ["k1", "k2"]),
            ("ignoreConceptUri", ["ic1", "ic2"]),
            ("ignoreCategoryUri", ["icat1", "icat2"]),
            ("ignoreSourceUri", ["is1", "is2"]),
            ("ignoreSourceLocationUri", ["isl1", "isl2"]),
            ("ignoreSourceGroupUri", ["isg1", "isg2"]),
            ("ignoreLocationUri", ["il1", "il2"]),
            ("ignoreLang", ["fra", "spa"]),
        ];
        for (key, values) in without_oper {
            assert_eq!(params.get(key), Some(&json!(values)), "{}", key);
        }

        let oper_keys: Vec<&str> = params.keys().filter(|k| k.ends_with("Oper")).collect();
        assert_eq!(
            oper_keys,
            vec!["categoryOper", "conceptOper", "keywordOper", "sourceGroupOper", "sourceOper"]
        );

        assert_eq!(params.get("dateMentionStart"), Some(&json!("2024-02-01")));
        assert_eq!(params.get("dateMentionEnd"), Some(&json!("2024-02-29")));
        assert_eq!(params.get("ignoreKeywordLoc"), Some(&json!("title")));
        assert!(!params.contains_key("keywordLoc"));
    }

    #[test]
    fn test_explicit_operator() {
        let query = QueryArticles::new(
            QueryArticlesArgs::default().keywords(QueryValues::any(["Tesla", "SpaceX"])),
        )
        .unwrap();

        assert_eq!(query.params().get("keywordOper"), Some(&json!("or")));
    }

    #[test]
    fn test_policy_defaults_suppressed() {
        let defaults = QueryArticles::new(QueryArticlesArgs::default()).unwrap();
        for key in [
            "keywordLoc",
            "ignoreKeywordLoc",
            "isDuplicateFilter",
            "hasDuplicateFilter",
            "eventFilter",
            "dataType",
        ] {
            assert!(!defaults.params().contains_key(key), "{} should be absent", key);
        }

        let custom = QueryArticles::new(
            QueryArticlesArgs::default()
                .keywords_loc(KeywordLoc::Title)
                .is_duplicate_filter(IsDuplicateFilter::SkipDuplicates)
                .event_filter(EventFilter::SkipArticlesWithoutEvent)
                .data_type([DataType::News, DataType::Blog]),
        )
        .unwrap();
        assert_eq!(custom.params().get("keywordLoc"), Some(&json!("title")));
        assert_eq!(
            custom.params().get("isDuplicateFilter"),
            Some(&json!("skipDuplicates"))
        );
        assert_eq!(
            custom.params().get("eventFilter"),
            Some(&json!("skipArticlesWithoutEvent"))
        );
        assert_eq!(custom.params().get("dataType"), Some(&json!(["news", "blog"])));
    }

    #[test]
    fn test_invalid_date_fails_construction() {
        let result = QueryArticles::new(QueryArticlesArgs::default().date_start("yesterday"));
        assert!(matches!(result, Err(QueryError::InvalidDate(_))));
    }

    #[test]
    fn test_article_uri_list() {
        let query = QueryArticles::init_with_article_uri_list(["a", "b"]);

        assert_eq!(
            serde_json::to_value(query.params()).unwrap(),
            json!({"action": "getArticles", "articleUri": ["a", "b"]})
        );
    }

    #[test]
    fn test_article_uri_wgt_list() {
        let query = QueryArticles::init_with_article_uri_wgt_list(["a:1.0", "b:2.0"]);

        assert_eq!(query.params().get("articleUriWgtList"), Some(&json!("a:1.0,b:2.0")));
        assert_eq!(query.params().len(), 2);
    }

    #[test]
    fn test_complex_query_modes() {
        let structured = QueryArticles::init_with_complex_query(ComplexArticleQuery::new(
            json!({"keyword": "Tesla"}),
        ))
        .unwrap();
        let query_str = structured.params().get("query").unwrap().as_str().unwrap();
        assert_eq!(
            serde_json::from_str::<Value>(query_str).unwrap(),
            json!({"$query": {"keyword": "Tesla"}})
        );

        let raw = r#"{"$query":{"lang":"eng"}}"#;
        let from_string = QueryArticles::init_with_complex_query(raw).unwrap();
        assert_eq!(from_string.params().get("query"), Some(&json!(raw)));

        let from_object =
            QueryArticles::init_with_complex_query(json!({"$query": {"lang": "eng"}})).unwrap();
        assert_eq!(from_object.params().get("query"), Some(&json!(raw)));
        assert_eq!(from_object.params().get("action"), Some(&json!("getArticles")));
    }

    #[test]
    fn test_complex_query_rejects_other_shapes() {
        for value in [json!(42), json!(["a"]), json!(null), json!(true)] {
            assert!(matches!(
                QueryArticles::init_with_complex_query(value),
                Err(QueryError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn test_single_requested_result() {
        let mut query = QueryArticles::default();
        let aggr = RequestArticlesConceptAggr::new(ConceptAggrConfig::default()).unwrap();
        query.set_requested_result(aggr);

        let params = query.query_params();
        assert_eq!(params.get("resultType"), Some(&json!("conceptAggr")));
        assert!(params.contains_key("conceptAggrConceptCount"));
        assert!(!params.contains_key("articlesPage"));
    }

    #[test]
    fn test_set_requested_result_value_keeps_previous_on_error() {
        let mut query = QueryArticles::default();
        let info = RequestArticlesInfo::new(ArticlesInfoConfig {
            page: 3,
            ..Default::default()
        })
        .unwrap();
        query.set_requested_result(info.clone());

        let result = query.set_requested_result_value(json!({"page": 1, "count": 10}));
        assert!(matches!(result, Err(QueryError::UnsupportedResult(_))));
        assert_eq!(query.requested_result(), &RequestArticles::ArticlesInfo(info));

        query
            .set_requested_result_value(json!({"resultType": "timeAggr"}))
            .unwrap();
        assert_eq!(query.requested_result().result_type(), "timeAggr");
    }

    #[test]
    fn test_query_params_include_result() {
        let query = QueryArticles::new(QueryArticlesArgs::default().keywords("Tesla")).unwrap();
        let params = query.query_params();

        assert_eq!(params.get("keyword"), Some(&json!("Tesla")));
        assert_eq!(params.get("resultType"), Some(&json!("articles")));
        assert_eq!(params.get("articlesPage"), Some(&json!(1)));
        assert_eq!(params.get("articlesCount"), Some(&json!(200)));
        assert_eq!(query.path(), "/json/article");
    }
}
