//! Public client surface + builder.

mod constants;

use std::time::Duration;

use constants::{DEFAULT_BASE_API, DEFAULT_TIMEOUT, TOKEN_ENV_VAR, USER_AGENT};
use reqwest::Client;
use url::Url;

use crate::core::FeedError;

/// Shared HTTP surface for both aggregators. Cheap to clone.
///
/// Holds the provider base URL (overridable for tests) and the optional
/// access token. An absent token puts every aggregator built on this client
/// into permanent fallback mode; that is a supported configuration, not an
/// error.
#[derive(Debug, Clone)]
pub struct FeedClient {
    http: Client,
    base_api: Url,
    token: Option<String>,
}

impl Default for FeedClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl FeedClient {
    /// Create a new builder.
    pub fn builder() -> FeedClientBuilder {
        FeedClientBuilder::default()
    }

    /// Build a default client whose token is read from `FINNHUB_API_KEY`.
    ///
    /// A missing or empty variable leaves the token unset (fallback mode).
    ///
    /// # Errors
    ///
    /// Returns a `FeedError` if the underlying HTTP client cannot be built.
    pub fn from_env() -> Result<Self, FeedError> {
        let mut builder = Self::builder();
        if let Ok(token) = std::env::var(TOKEN_ENV_VAR)
            && !token.is_empty()
        {
            builder = builder.token(token);
        }
        builder.build()
    }

    /* -------- internal getters used by the aggregators -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn base_api(&self) -> &Url {
        &self.base_api
    }

    pub(crate) fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct FeedClientBuilder {
    user_agent: Option<String>,
    base_api: Option<Url>,
    token: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl FeedClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the provider API base (e.g., `https://finnhub.io/api/v1/`).
    /// Useful for pointing tests at a mock server.
    #[must_use]
    pub fn base_api(mut self, url: Url) -> Self {
        self.base_api = Some(url);
        self
    }

    /// Set the provider access token.
    #[must_use]
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the overall per-request timeout. Default: 10 seconds.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns a `FeedError` if the base URL is invalid or the HTTP client
    /// cannot be constructed.
    pub fn build(self) -> Result<FeedClient, FeedError> {
        let base_api = match self.base_api {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_API)?,
        };

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT));

        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(FeedClient {
            http,
            base_api,
            token: self.token,
        })
    }
}
