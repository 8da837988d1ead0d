use serde::Deserialize;

/// Finnhub `/quote` payload, keyed by the provider's short field names.
#[derive(Deserialize)]
pub(crate) struct QuoteNode {
    #[serde(rename = "c")]
    pub(crate) current: Option<f64>,
    #[serde(rename = "d")]
    pub(crate) change: Option<f64>,
    #[serde(rename = "dp")]
    pub(crate) change_percent: Option<f64>,
    #[serde(rename = "h")]
    pub(crate) high: Option<f64>,
    #[serde(rename = "l")]
    pub(crate) low: Option<f64>,
    #[serde(rename = "o")]
    pub(crate) open: Option<f64>,
    #[serde(rename = "pc")]
    pub(crate) prev_close: Option<f64>,
}
