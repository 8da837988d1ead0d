use serde::Deserialize;

/// One element of the provider's news array; the same shape serves both the
/// category and company-news endpoints.
#[derive(Deserialize)]
pub(crate) struct NewsNode {
    pub(crate) headline: Option<String>,
    pub(crate) category: Option<String>,
    pub(crate) related: Option<String>,
    pub(crate) source: Option<String>,
    pub(crate) url: Option<String>,
    pub(crate) image: Option<String>,
    pub(crate) datetime: Option<i64>,
}
