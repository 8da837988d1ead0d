use serde::Serialize;

use crate::core::FeedSource;

/// One headline. `related` is empty when no instrument could be attached;
/// the lowercased 50-char headline prefix is the dedup identity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewsItem {
    pub headline: String,
    pub category: String,
    pub related: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Unix seconds; missing sorts as oldest.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datetime: Option<i64>,
}

/// The news aggregator's self-describing response. `message` hints at the
/// missing-token mode; `error` marks a failed live fetch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewsResponse {
    pub headlines: Vec<NewsItem>,
    pub source: FeedSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
