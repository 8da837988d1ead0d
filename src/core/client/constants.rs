//! Centralized constants for default endpoints, UA, and configuration.

use std::time::Duration;

/// Default desktop UA to avoid trivial bot blocking.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// Finnhub v1 API base (endpoint path is appended).
pub(crate) const DEFAULT_BASE_API: &str = "https://finnhub.io/api/v1/";

/// Environment variable holding the Finnhub access token.
pub(crate) const TOKEN_ENV_VAR: &str = "FINNHUB_API_KEY";

/// Overall per-request deadline; a timed-out call counts as an upstream
/// failure, never as a stall.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
