use serde::Serialize;

/// Whether a response carries live provider data or the fixed fallback set.
///
/// `Fallback` is a first-class degraded mode (missing token, total upstream
/// failure), not an error; the presentation layer shows a banner and keeps
/// rotating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedSource {
    Live,
    Fallback,
}
