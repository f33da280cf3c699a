//! Filter policy enums sent alongside article queries.

use serde::{Deserialize, Serialize};

/// Where keywords are searched for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KeywordLoc {
    #[default]
    Body,
    Title,
    #[serde(rename = "body,title")]
    BodyTitle,
}

impl KeywordLoc {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeywordLoc::Body => "body",
            KeywordLoc::Title => "title",
            KeywordLoc::BodyTitle => "body,title",
        }
    }
}

/// How articles that are duplicates of another article are handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IsDuplicateFilter {
    #[default]
    KeepAll,
    SkipDuplicates,
    KeepOnlyDuplicates,
}

impl IsDuplicateFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            IsDuplicateFilter::KeepAll => "keepAll",
            IsDuplicateFilter::SkipDuplicates => "skipDuplicates",
            IsDuplicateFilter::KeepOnlyDuplicates => "keepOnlyDuplicates",
        }
    }
}

/// How articles that have duplicates elsewhere are handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HasDuplicateFilter {
    #[default]
    KeepAll,
    SkipHasDuplicates,
    KeepOnlyHasDuplicates,
}

impl HasDuplicateFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            HasDuplicateFilter::KeepAll => "keepAll",
            HasDuplicateFilter::SkipHasDuplicates => "skipHasDuplicates",
            HasDuplicateFilter::KeepOnlyHasDuplicates => "keepOnlyHasDuplicates",
        }
    }
}

/// How articles are filtered by their event linkage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventFilter {
    #[default]
    KeepAll,
    SkipArticlesWithoutEvent,
    KeepOnlyArticlesWithoutEvent,
}

impl EventFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventFilter::KeepAll => "keepAll",
            EventFilter::SkipArticlesWithoutEvent => "skipArticlesWithoutEvent",
            EventFilter::KeepOnlyArticlesWithoutEvent => "keepOnlyArticlesWithoutEvent",
        }
    }
}

/// Kind of content to search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    #[default]
    News,
    Pr,
    Blog,
}

impl DataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::News => "news",
            DataType::Pr => "pr",
            DataType::Blog => "blog",
        }
    }
}
