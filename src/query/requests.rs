//! Result requests an article query can carry.
//!
//! Every request follows the same pattern: a `*Config` struct with the
//! documented defaults, validated by the request's `new` constructor, which
//! then fills a parameter map using the request's prefix.

use serde::Deserialize;
use serde_json::Value;

use super::{QueryError, ReturnInfo};
use crate::models::{ParamMap, TemporalValue};

fn check_page(page: u32) -> Result<(), QueryError> {
    if page < 1 {
        return Err(QueryError::OutOfRange("page has to be >= 1".to_string()));
    }
    Ok(())
}

fn check_max(value: u32, max: u32, what: &str) -> Result<(), QueryError> {
    if value > max {
        return Err(QueryError::OutOfRange(format!(
            "at most {} {} (got {})",
            max, what, value
        )));
    }
    Ok(())
}

// ===== ArticlesInfo =====

/// Options for a page of article details
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArticlesInfoConfig {
    pub page: u32,
    pub count: u32,
    pub sort_by: String,
    pub sort_by_asc: bool,
    pub return_info: ReturnInfo,
}

impl Default for ArticlesInfoConfig {
    fn default() -> Self {
        Self {
            page: 1,
            count: 200,
            sort_by: "date".to_string(),
            sort_by_asc: false,
            return_info: ReturnInfo::default(),
        }
    }
}

/// A page of matching articles with their details
#[derive(Debug, Clone, PartialEq)]
pub struct RequestArticlesInfo {
    params: ParamMap,
}

impl RequestArticlesInfo {
    pub const RESULT_TYPE: &'static str = "articles";

    pub fn new(config: ArticlesInfoConfig) -> Result<Self, QueryError> {
        check_page(config.page)?;
        check_max(config.count, 200, "articles can be returned per call")?;
        Ok(Self::populate(config))
    }

    fn populate(config: ArticlesInfoConfig) -> Self {
        let mut params = ParamMap::new();
        params.set_val("articlesPage", config.page);
        params.set_val("articlesCount", config.count);
        params.set_val("articlesSortBy", config.sort_by);
        params.set_val("articlesSortByAsc", config.sort_by_asc);
        params.extend(config.return_info.get_params("articles"));
        Self { params }
    }
}

// ===== UriWgtList =====

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UriWgtListConfig {
    pub page: u32,
    pub count: u32,
    pub sort_by: String,
    pub sort_by_asc: bool,
}

impl Default for UriWgtListConfig {
    fn default() -> Self {
        Self {
            page: 1,
            count: 10000,
            sort_by: "fq".to_string(),
            sort_by_asc: false,
        }
    }
}

/// Article URIs with their weights, for callers that page on their own
#[derive(Debug, Clone, PartialEq)]
pub struct RequestArticlesUriWgtList {
    params: ParamMap,
}

impl RequestArticlesUriWgtList {
    pub const RESULT_TYPE: &'static str = "uriWgtList";

    pub fn new(config: UriWgtListConfig) -> Result<Self, QueryError> {
        check_page(config.page)?;
        check_max(config.count, 50000, "items can be returned per call")?;

        let mut params = ParamMap::new();
        params.set_val("uriWgtListPage", config.page);
        params.set_val("uriWgtListCount", config.count);
        params.set_val("uriWgtListSortBy", config.sort_by);
        params.set_val("uriWgtListSortByAsc", config.sort_by_asc);
        Ok(Self { params })
    }

    /// Move to another page in place
    pub fn set_page(&mut self, page: u32) -> Result<(), QueryError> {
        check_page(page)?;
        self.params.set_val("uriWgtListPage", page);
        Ok(())
    }
}

// ===== TimeAggr / DateMentionAggr =====

/// Distribution of matching articles over time
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestArticlesTimeAggr {
    params: ParamMap,
}

impl RequestArticlesTimeAggr {
    pub const RESULT_TYPE: &'static str = "timeAggr";

    pub fn new() -> Self {
        Self::default()
    }
}

/// Dates mentioned in the matching articles
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestArticlesDateMentionAggr {
    params: ParamMap,
}

impl RequestArticlesDateMentionAggr {
    pub const RESULT_TYPE: &'static str = "dateMentionAggr";

    pub fn new() -> Self {
        Self::default()
    }
}

// ===== ConceptAggr =====

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConceptAggrConfig {
    pub concept_count: u32,
    #[serde(alias = "sampleSize")]
    pub articles_sample_size: u32,
    pub return_info: ReturnInfo,
}

impl Default for ConceptAggrConfig {
    fn default() -> Self {
        Self {
            concept_count: 25,
            articles_sample_size: 10000,
            return_info: ReturnInfo::default(),
        }
    }
}

/// Top concepts mentioned in the matching articles
#[derive(Debug, Clone, PartialEq)]
pub struct RequestArticlesConceptAggr {
    params: ParamMap,
}

impl RequestArticlesConceptAggr {
    pub const RESULT_TYPE: &'static str = "conceptAggr";

    pub fn new(config: ConceptAggrConfig) -> Result<Self, QueryError> {
        check_max(config.concept_count, 500, "concepts can be returned per call")?;
        check_max(
            config.articles_sample_size,
            20000,
            "articles can be used for computation sample",
        )?;

        let mut params = ParamMap::new();
        params.set_val("conceptAggrConceptCount", config.concept_count);
        params.set_val("conceptAggrSampleSize", config.articles_sample_size);
        params.extend(config.return_info.get_params("conceptAggr"));
        Ok(Self { params })
    }
}

// ===== CategoryAggr =====

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CategoryAggrConfig {
    #[serde(alias = "sampleSize")]
    pub articles_sample_size: u32,
    pub return_info: ReturnInfo,
}

impl Default for CategoryAggrConfig {
    fn default() -> Self {
        Self {
            articles_sample_size: 20000,
            return_info: ReturnInfo::default(),
        }
    }
}

/// Categories of the matching articles
#[derive(Debug, Clone, PartialEq)]
pub struct RequestArticlesCategoryAggr {
    params: ParamMap,
}

impl RequestArticlesCategoryAggr {
    pub const RESULT_TYPE: &'static str = "categoryAggr";

    pub fn new(config: CategoryAggrConfig) -> Result<Self, QueryError> {
        check_max(
            config.articles_sample_size,
            50000,
            "articles can be used for computation sample",
        )?;

        let mut params = ParamMap::new();
        params.set_val("categoryAggrSampleSize", config.articles_sample_size);
        params.extend(config.return_info.get_params("categoryAggr"));
        Ok(Self { params })
    }
}

// ===== SourceAggr =====

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SourceAggrConfig {
    #[serde(alias = "sampleSize")]
    pub articles_sample_size: u32,
    pub return_info: ReturnInfo,
}

impl Default for SourceAggrConfig {
    fn default() -> Self {
        Self {
            articles_sample_size: 20000,
            return_info: ReturnInfo::default(),
        }
    }
}

/// Sources publishing the matching articles
#[derive(Debug, Clone, PartialEq)]
pub struct RequestArticlesSourceAggr {
    params: ParamMap,
}

impl RequestArticlesSourceAggr {
    pub const RESULT_TYPE: &'static str = "sourceAggr";

    pub fn new(config: SourceAggrConfig) -> Result<Self, QueryError> {
        check_max(
            config.articles_sample_size,
            1_000_000,
            "articles can be used for computation sample",
        )?;

        let mut params = ParamMap::new();
        params.set_val("sourceAggrSampleSize", config.articles_sample_size);
        params.extend(config.return_info.get_params("sourceAggr"));
        Ok(Self { params })
    }
}

// ===== KeywordAggr =====

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KeywordAggrConfig {
    pub lang: String,
    #[serde(alias = "sampleSize")]
    pub articles_sample_size: u32,
}

impl Default for KeywordAggrConfig {
    fn default() -> Self {
        Self {
            lang: "eng".to_string(),
            articles_sample_size: 2000,
        }
    }
}

/// Top keywords of the matching articles
#[derive(Debug, Clone, PartialEq)]
pub struct RequestArticlesKeywordAggr {
    params: ParamMap,
}

impl RequestArticlesKeywordAggr {
    pub const RESULT_TYPE: &'static str = "keywordAggr";

    pub fn new(config: KeywordAggrConfig) -> Result<Self, QueryError> {
        check_max(
            config.articles_sample_size,
            20000,
            "articles can be used for computation sample",
        )?;

        let mut params = ParamMap::new();
        params.set_val("keywordAggrLang", config.lang);
        params.set_val("keywordAggrSampleSize", config.articles_sample_size);
        Ok(Self { params })
    }
}

// ===== ConceptGraph =====

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConceptGraphConfig {
    pub concept_count: u32,
    pub link_count: u32,
    #[serde(alias = "sampleSize")]
    pub articles_sample_size: u32,
    pub return_info: ReturnInfo,
}

impl Default for ConceptGraphConfig {
    fn default() -> Self {
        Self {
            concept_count: 25,
            link_count: 50,
            articles_sample_size: 10000,
            return_info: ReturnInfo::default(),
        }
    }
}

/// Graph of concepts co-occurring in the matching articles
#[derive(Debug, Clone, PartialEq)]
pub struct RequestArticlesConceptGraph {
    params: ParamMap,
}

impl RequestArticlesConceptGraph {
    pub const RESULT_TYPE: &'static str = "conceptGraph";

    pub fn new(config: ConceptGraphConfig) -> Result<Self, QueryError> {
        check_max(config.concept_count, 1000, "concepts can be returned per call")?;
        check_max(config.link_count, 2000, "links can be returned per call")?;
        check_max(
            config.articles_sample_size,
            50000,
            "results can be used for computation sample",
        )?;

        let mut params = ParamMap::new();
        params.set_val("conceptGraphConceptCount", config.concept_count);
        params.set_val("conceptGraphLinkCount", config.link_count);
        params.set_val("conceptGraphSampleSize", config.articles_sample_size);
        params.extend(config.return_info.get_params("conceptGraph"));
        Ok(Self { params })
    }
}

// ===== ConceptMatrix =====

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConceptMatrixConfig {
    pub concept_count: u32,
    /// Co-occurrence measure: "pmi", "pairTfIdf" or "chiSquare"
    pub measure: String,
    #[serde(alias = "sampleSize")]
    pub articles_sample_size: u32,
    pub return_info: ReturnInfo,
}

impl Default for ConceptMatrixConfig {
    fn default() -> Self {
        Self {
            concept_count: 25,
            measure: "pmi".to_string(),
            articles_sample_size: 10000,
            return_info: ReturnInfo::default(),
        }
    }
}

/// Concept co-occurrence matrix
#[derive(Debug, Clone, PartialEq)]
pub struct RequestArticlesConceptMatrix {
    params: ParamMap,
}

impl RequestArticlesConceptMatrix {
    pub const RESULT_TYPE: &'static str = "conceptMatrix";

    pub fn new(config: ConceptMatrixConfig) -> Result<Self, QueryError> {
        check_max(config.concept_count, 200, "concepts can be returned per call")?;
        check_max(
            config.articles_sample_size,
            50000,
            "results can be used for computation sample",
        )?;

        let mut params = ParamMap::new();
        params.set_val("conceptMatrixConceptCount", config.concept_count);
        params.set_val("conceptMatrixMeasure", config.measure);
        params.set_val("conceptMatrixSampleSize", config.articles_sample_size);
        params.extend(config.return_info.get_params("conceptMatrix"));
        Ok(Self { params })
    }
}

// ===== ConceptTrends =====

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConceptTrendsConfig {
    /// Concepts to report; the top concepts are used when `None`
    pub concept_uris: Option<Vec<String>>,
    pub count: u32,
    #[serde(alias = "sampleSize")]
    pub articles_sample_size: u32,
    pub return_info: ReturnInfo,
}

impl Default for ConceptTrendsConfig {
    fn default() -> Self {
        Self {
            concept_uris: None,
            count: 25,
            articles_sample_size: 10000,
            return_info: ReturnInfo::default(),
        }
    }
}

/// Mention trends of concepts over time
#[derive(Debug, Clone, PartialEq)]
pub struct RequestArticlesConceptTrends {
    params: ParamMap,
}

impl RequestArticlesConceptTrends {
    pub const RESULT_TYPE: &'static str = "conceptTrends";

    pub fn new(config: ConceptTrendsConfig) -> Result<Self, QueryError> {
        check_max(config.count, 50, "concepts can be returned per call")?;
        check_max(
            config.articles_sample_size,
            50000,
            "results can be used for computation sample",
        )?;

        let mut params = ParamMap::new();
        if let Some(uris) = config.concept_uris {
            params.set_val("conceptTrendsConceptUri", uris);
        }
        params.set_val("conceptTrendsConceptCount", config.count);
        params.set_val("conceptTrendsSampleSize", config.articles_sample_size);
        params.extend(config.return_info.get_params("conceptTrends"));
        Ok(Self { params })
    }
}

// ===== RecentActivity =====

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RecentActivityConfig {
    pub max_article_count: u32,
    pub updates_after_tm: Option<TemporalValue>,
    pub updates_after_mins_ago: Option<u32>,
    pub lang: Option<Vec<String>>,
    pub mandatory_source_location: bool,
    pub return_info: ReturnInfo,
}

impl Default for RecentActivityConfig {
    fn default() -> Self {
        Self {
            max_article_count: 100,
            updates_after_tm: None,
            updates_after_mins_ago: None,
            lang: None,
            mandatory_source_location: false,
            return_info: ReturnInfo::default(),
        }
    }
}

/// Articles added since a point in time
#[derive(Debug, Clone, PartialEq)]
pub struct RequestArticlesRecentActivity {
    params: ParamMap,
}

impl RequestArticlesRecentActivity {
    pub const RESULT_TYPE: &'static str = "recentActivity";

    pub fn new(config: RecentActivityConfig) -> Result<Self, QueryError> {
        check_max(
            config.max_article_count,
            1000,
            "articles can be returned per call",
        )?;
        if config.updates_after_tm.is_some() && config.updates_after_mins_ago.is_some() {
            return Err(QueryError::InvalidArgument(
                "specify either updatesAfterTm or updatesAfterMinsAgo, but not both".to_string(),
            ));
        }

        let mut params = ParamMap::new();
        params.set_val(
            "recentActivityArticlesMaxArticleCount",
            config.max_article_count,
        );
        if let Some(tm) = &config.updates_after_tm {
            params.set_date_time_val("recentActivityArticlesUpdatesAfterTm", tm)?;
        }
        if let Some(mins) = config.updates_after_mins_ago {
            params.set_val("recentActivityEventsUpdatesAfterMinsAgo", mins);
        }
        if let Some(lang) = config.lang {
            params.set_val("recentActivityArticlesLang", lang);
        }
        params.set_val(
            "recentActivityArticlesMandatorySourceLocation",
            config.mandatory_source_location,
        );
        params.extend(config.return_info.get_params("recentActivityArticles"));
        Ok(Self { params })
    }
}

// ===== The closed set =====

/// The single result request carried by an article query
#[derive(Debug, Clone, PartialEq)]
pub enum RequestArticles {
    ArticlesInfo(RequestArticlesInfo),
    UriWgtList(RequestArticlesUriWgtList),
    TimeAggr(RequestArticlesTimeAggr),
    ConceptAggr(RequestArticlesConceptAggr),
    CategoryAggr(RequestArticlesCategoryAggr),
    SourceAggr(RequestArticlesSourceAggr),
    KeywordAggr(RequestArticlesKeywordAggr),
    ConceptGraph(RequestArticlesConceptGraph),
    ConceptMatrix(RequestArticlesConceptMatrix),
    ConceptTrends(RequestArticlesConceptTrends),
    DateMentionAggr(RequestArticlesDateMentionAggr),
    RecentActivity(RequestArticlesRecentActivity),
}

impl RequestArticles {
    /// Value of the `resultType` parameter
    pub fn result_type(&self) -> &'static str {
        match self {
            RequestArticles::ArticlesInfo(_) => RequestArticlesInfo::RESULT_TYPE,
            RequestArticles::UriWgtList(_) => RequestArticlesUriWgtList::RESULT_TYPE,
            RequestArticles::TimeAggr(_) => RequestArticlesTimeAggr::RESULT_TYPE,
            RequestArticles::ConceptAggr(_) => RequestArticlesConceptAggr::RESULT_TYPE,
            RequestArticles::CategoryAggr(_) => RequestArticlesCategoryAggr::RESULT_TYPE,
            RequestArticles::SourceAggr(_) => RequestArticlesSourceAggr::RESULT_TYPE,
            RequestArticles::KeywordAggr(_) => RequestArticlesKeywordAggr::RESULT_TYPE,
            RequestArticles::ConceptGraph(_) => RequestArticlesConceptGraph::RESULT_TYPE,
            RequestArticles::ConceptMatrix(_) => RequestArticlesConceptMatrix::RESULT_TYPE,
            RequestArticles::ConceptTrends(_) => RequestArticlesConceptTrends::RESULT_TYPE,
            RequestArticles::DateMentionAggr(_) => RequestArticlesDateMentionAggr::RESULT_TYPE,
            RequestArticles::RecentActivity(_) => RequestArticlesRecentActivity::RESULT_TYPE,
        }
    }

    /// Parameters contributed by this request
    pub fn params(&self) -> &ParamMap {
        match self {
            RequestArticles::ArticlesInfo(r) => &r.params,
            RequestArticles::UriWgtList(r) => &r.params,
            RequestArticles::TimeAggr(r) => &r.params,
            RequestArticles::ConceptAggr(r) => &r.params,
            RequestArticles::CategoryAggr(r) => &r.params,
            RequestArticles::SourceAggr(r) => &r.params,
            RequestArticles::KeywordAggr(r) => &r.params,
            RequestArticles::ConceptGraph(r) => &r.params,
            RequestArticles::ConceptMatrix(r) => &r.params,
            RequestArticles::ConceptTrends(r) => &r.params,
            RequestArticles::DateMentionAggr(r) => &r.params,
            RequestArticles::RecentActivity(r) => &r.params,
        }
    }

    /// Decode a `{"resultType": ..., <options>}` description.
    ///
    /// Options use the same camelCase names and defaults as the `*Config`
    /// structs. Anything that is not a known result request is rejected.
    pub fn from_value(value: Value) -> Result<Self, QueryError> {
        let tagged: TaggedRequest = serde_json::from_value(value)
            .map_err(|e| QueryError::UnsupportedResult(e.to_string()))?;

        Ok(match tagged {
            TaggedRequest::Articles(c) => RequestArticlesInfo::new(c)?.into(),
            TaggedRequest::UriWgtList(c) => RequestArticlesUriWgtList::new(c)?.into(),
            TaggedRequest::TimeAggr => RequestArticlesTimeAggr::new().into(),
            TaggedRequest::ConceptAggr(c) => RequestArticlesConceptAggr::new(c)?.into(),
            TaggedRequest::CategoryAggr(c) => RequestArticlesCategoryAggr::new(c)?.into(),
            TaggedRequest::SourceAggr(c) => RequestArticlesSourceAggr::new(c)?.into(),
            TaggedRequest::KeywordAggr(c) => RequestArticlesKeywordAggr::new(c)?.into(),
            TaggedRequest::ConceptGraph(c) => RequestArticlesConceptGraph::new(c)?.into(),
            TaggedRequest::ConceptMatrix(c) => RequestArticlesConceptMatrix::new(c)?.into(),
            TaggedRequest::ConceptTrends(c) => RequestArticlesConceptTrends::new(c)?.into(),
            TaggedRequest::DateMentionAggr => RequestArticlesDateMentionAggr::new().into(),
            TaggedRequest::RecentActivity(c) => RequestArticlesRecentActivity::new(c)?.into(),
        })
    }
}

impl Default for RequestArticles {
    /// Article details with default paging and sorting
    fn default() -> Self {
        RequestArticles::ArticlesInfo(RequestArticlesInfo::populate(
            ArticlesInfoConfig::default(),
        ))
    }
}

#[derive(Deserialize)]
#[serde(tag = "resultType", rename_all = "camelCase")]
enum TaggedRequest {
    Articles(ArticlesInfoConfig),
    UriWgtList(UriWgtListConfig),
    TimeAggr,
    ConceptAggr(ConceptAggrConfig),
    CategoryAggr(CategoryAggrConfig),
    SourceAggr(SourceAggrConfig),
    KeywordAggr(KeywordAggrConfig),
    ConceptGraph(ConceptGraphConfig),
    ConceptMatrix(ConceptMatrixConfig),
    ConceptTrends(ConceptTrendsConfig),
    DateMentionAggr,
    RecentActivity(RecentActivityConfig),
}

impl From<RequestArticlesInfo> for RequestArticles {
    fn from(r: RequestArticlesInfo) -> Self {
        RequestArticles::ArticlesInfo(r)
    }
}

impl From<RequestArticlesUriWgtList> for RequestArticles {
    fn from(r: RequestArticlesUriWgtList) -> Self {
        RequestArticles::UriWgtList(r)
    }
}

impl From<RequestArticlesTimeAggr> for RequestArticles {
    fn from(r: RequestArticlesTimeAggr) -> Self {
        RequestArticles::TimeAggr(r)
    }
}

impl From<RequestArticlesConceptAggr> for RequestArticles {
    fn from(r: RequestArticlesConceptAggr) -> Self {
        RequestArticles::ConceptAggr(r)
    }
}

impl From<RequestArticlesCategoryAggr> for RequestArticles {
    fn from(r: RequestArticlesCategoryAggr) -> Self {
        RequestArticles::CategoryAggr(r)
    }
}

impl From<RequestArticlesSourceAggr> for RequestArticles {
    fn from(r: RequestArticlesSourceAggr) -> Self {
        RequestArticles::SourceAggr(r)
    }
}

impl From<RequestArticlesKeywordAggr> for RequestArticles {
    fn from(r: RequestArticlesKeywordAggr) -> Self {
        RequestArticles::KeywordAggr(r)
    }
}

impl From<RequestArticlesConceptGraph> for RequestArticles {
    fn from(r: RequestArticlesConceptGraph) -> Self {
        RequestArticles::ConceptGraph(r)
    }
}

impl From<RequestArticlesConceptMatrix> for RequestArticles {
    fn from(r: RequestArticlesConceptMatrix) -> Self {
        RequestArticles::ConceptMatrix(r)
    }
}

impl From<RequestArticlesConceptTrends> for RequestArticles {
    fn from(r: RequestArticlesConceptTrends) -> Self {
        RequestArticles::ConceptTrends(r)
    }
}

impl From<RequestArticlesDateMentionAggr> for RequestArticles {
    fn from(r: RequestArticlesDateMentionAggr) -> Self {
        RequestArticles::DateMentionAggr(r)
    }
}

impl From<RequestArticlesRecentActivity> for RequestArticles {
    fn from(r: RequestArticlesRecentActivity) -> Self {
        RequestArticles::RecentActivity(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_articles_info_bounds() {
        let page_zero = RequestArticlesInfo::new(ArticlesInfoConfig {
            page: 0,
            ..Default::default()
        });
        assert!(matches!(page_zero, Err(QueryError::OutOfRange(_))));

        let too_many = RequestArticlesInfo::new(ArticlesInfoConfig {
            count: 201,
            ..Default::default()
        });
        assert!(matches!(too_many, Err(QueryError::OutOfRange(_))));
    }

    #[test]
    fn test_articles_info_params() {
        let request = RequestArticlesInfo::new(ArticlesInfoConfig {
            page: 1,
            count: 200,
            ..Default::default()
        })
        .unwrap();

        let keys: Vec<_> = request.params.keys().collect();
        assert_eq!(
            keys,
            vec!["articlesCount", "articlesPage", "articlesSortBy", "articlesSortByAsc"]
        );
        assert_eq!(request.params.get("articlesSortBy"), Some(&json!("date")));
    }

    #[test]
    fn test_default_matches_default_config() {
        let built = RequestArticlesInfo::new(ArticlesInfoConfig::default()).unwrap();
        assert_eq!(RequestArticles::default(), RequestArticles::ArticlesInfo(built));
    }

    #[test]
    fn test_articles_info_merges_return_info() {
        let request = RequestArticlesInfo::new(ArticlesInfoConfig {
            return_info: ReturnInfo::new().flag("includeArticleConcepts", true),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(
            request.params.get("articlesIncludeArticleConcepts"),
            Some(&json!(true))
        );
    }

    #[test]
    fn test_uri_wgt_list_set_page() {
        let mut request = RequestArticlesUriWgtList::new(UriWgtListConfig::default()).unwrap();
        assert_eq!(request.params.get("uriWgtListCount"), Some(&json!(10000)));

        request.set_page(3).unwrap();
        assert_eq!(request.params.get("uriWgtListPage"), Some(&json!(3)));

        assert!(request.set_page(0).is_err());
        assert_eq!(request.params.get("uriWgtListPage"), Some(&json!(3)));

        let too_many = RequestArticlesUriWgtList::new(UriWgtListConfig {
            count: 50001,
            ..Default::default()
        });
        assert!(too_many.is_err());
    }

    #[test]
    fn test_aggregate_bounds() {
        assert!(RequestArticlesConceptAggr::new(ConceptAggrConfig {
            concept_count: 501,
            ..Default::default()
        })
        .is_err());
        assert!(RequestArticlesConceptAggr::new(ConceptAggrConfig {
            articles_sample_size: 20001,
            ..Default::default()
        })
        .is_err());
        assert!(RequestArticlesCategoryAggr::new(CategoryAggrConfig {
            articles_sample_size: 50001,
            ..Default::default()
        })
        .is_err());
        assert!(RequestArticlesSourceAggr::new(SourceAggrConfig {
            articles_sample_size: 1_000_000,
            ..Default::default()
        })
        .is_ok());
        assert!(RequestArticlesSourceAggr::new(SourceAggrConfig {
            articles_sample_size: 1_000_001,
            ..Default::default()
        })
        .is_err());
        assert!(RequestArticlesKeywordAggr::new(KeywordAggrConfig {
            articles_sample_size: 20001,
            ..Default::default()
        })
        .is_err());
    }

    #[test]
    fn test_concept_graph_and_matrix_bounds() {
        assert!(RequestArticlesConceptGraph::new(ConceptGraphConfig {
            concept_count: 1001,
            ..Default::default()
        })
        .is_err());
        assert!(RequestArticlesConceptGraph::new(ConceptGraphConfig {
            link_count: 2001,
            ..Default::default()
        })
        .is_err());
        assert!(RequestArticlesConceptGraph::new(ConceptGraphConfig {
            articles_sample_size: 50001,
            ..Default::default()
        })
        .is_err());
        assert!(RequestArticlesConceptMatrix::new(ConceptMatrixConfig {
            concept_count: 201,
            ..Default::default()
        })
        .is_err());

        let matrix = RequestArticlesConceptMatrix::new(ConceptMatrixConfig::default()).unwrap();
        assert_eq!(matrix.params.get("conceptMatrixMeasure"), Some(&json!("pmi")));
    }

    #[test]
    fn test_concept_trends() {
        assert!(RequestArticlesConceptTrends::new(ConceptTrendsConfig {
            count: 51,
            ..Default::default()
        })
        .is_err());

        let default = RequestArticlesConceptTrends::new(ConceptTrendsConfig::default()).unwrap();
        assert!(!default.params.contains_key("conceptTrendsConceptUri"));

        let with_uris = RequestArticlesConceptTrends::new(ConceptTrendsConfig {
            concept_uris: Some(vec!["http://en.wikipedia.org/wiki/Rust".to_string()]),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(
            with_uris.params.get("conceptTrendsConceptUri"),
            Some(&json!(["http://en.wikipedia.org/wiki/Rust"]))
        );
    }

    #[test]
    fn test_recent_activity_exclusive_window() {
        let both = RequestArticlesRecentActivity::new(RecentActivityConfig {
            updates_after_tm: Some("2024-03-01T10:00:00".into()),
            updates_after_mins_ago: Some(10),
            ..Default::default()
        });
        assert!(matches!(both, Err(QueryError::InvalidArgument(_))));

        let too_many = RequestArticlesRecentActivity::new(RecentActivityConfig {
            max_article_count: 1001,
            ..Default::default()
        });
        assert!(matches!(too_many, Err(QueryError::OutOfRange(_))));
    }

    #[test]
    fn test_recent_activity_params() {
        let request = RequestArticlesRecentActivity::new(RecentActivityConfig {
            updates_after_tm: Some("2024-03-01T10:00:00Z".into()),
            lang: Some(vec!["eng".to_string()]),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(
            request.params.get("recentActivityArticlesUpdatesAfterTm"),
            Some(&json!("2024-03-01T10:00:00"))
        );
        assert_eq!(
            request.params.get("recentActivityArticlesMandatorySourceLocation"),
            Some(&json!(false))
        );
        assert!(!request
            .params
            .contains_key("recentActivityEventsUpdatesAfterMinsAgo"));
    }

    #[test]
    fn test_from_value() {
        let request = RequestArticles::from_value(json!({
            "resultType": "conceptAggr",
            "conceptCount": 50,
            "returnInfo": {"includeConceptImage": true}
        }))
        .unwrap();

        assert_eq!(request.result_type(), "conceptAggr");
        assert_eq!(request.params().get("conceptAggrConceptCount"), Some(&json!(50)));
        assert_eq!(request.params().get("conceptAggrSampleSize"), Some(&json!(10000)));
        assert_eq!(
            request.params().get("conceptAggrIncludeConceptImage"),
            Some(&json!(true))
        );

        let time = RequestArticles::from_value(json!({"resultType": "timeAggr"})).unwrap();
        assert_eq!(time.result_type(), "timeAggr");
        assert!(time.params().is_empty());
    }

    #[test]
    fn test_from_value_rejects_unknown_shapes() {
        for value in [
            json!({"page": 1}),
            json!({"resultType": "events"}),
            json!("articles"),
            json!(42),
            json!(null),
        ] {
            assert!(matches!(
                RequestArticles::from_value(value),
                Err(QueryError::UnsupportedResult(_))
            ));
        }
    }

    #[test]
    fn test_from_value_validates_bounds() {
        let result = RequestArticles::from_value(json!({"resultType": "articles", "count": 500}));
        assert!(matches!(result, Err(QueryError::OutOfRange(_))));
    }
}
