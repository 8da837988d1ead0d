use serde::Serialize;

use crate::core::FeedSource;

/// One currently-known price snapshot for an instrument.
///
/// Snapshots are replaced wholesale on every successful refresh, never
/// merged field-by-field. A quote only enters the cache with `price > 0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change: f64,
    #[serde(rename = "changePercent")]
    pub change_percent: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open: Option<f64>,
    #[serde(rename = "prevClose", skip_serializing_if = "Option::is_none")]
    pub prev_close: Option<f64>,
}

/// The quote aggregator's self-describing response.
///
/// `cache_age` and `next_refresh` are whole-minute strings ("3m") when the
/// snapshot came from or entered the cache; `stale` marks an aged snapshot
/// served because a refresh could not start.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuotesResponse {
    pub quotes: Vec<Quote>,
    pub source: FeedSource,
    pub cached: bool,
    #[serde(rename = "cacheAge", skip_serializing_if = "Option::is_none")]
    pub cache_age: Option<String>,
    #[serde(rename = "nextRefresh", skip_serializing_if = "Option::is_none")]
    pub next_refresh: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stale: Option<bool>,
}
