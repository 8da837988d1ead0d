//! Quote aggregation: tracked instruments, snapshot cache, fallback set.

mod api;
mod cache;
mod model;
mod wire;

pub use model::{Quote, QuotesResponse};

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;

use crate::core::{Clock, FeedClient, FeedError, FeedSource, SystemClock};
use cache::QuoteCache;

/// Minutes a quote snapshot stays fresh.
const TTL_MINUTES: u64 = 15;

/// How long a quote snapshot stays fresh before the next fan-out.
pub const CACHE_TTL: Duration = Duration::from_secs(TTL_MINUTES * 60);

/// One tracked instrument, mapped into the provider's symbol namespace.
struct Instrument {
    symbol: &'static str,
    name: &'static str,
    provider_symbol: &'static str,
}

/// The fixed instrument set, priced via Binance pairs on the provider side.
static TRACKED: [Instrument; 4] = [
    Instrument {
        symbol: "BTC",
        name: "Bitcoin",
        provider_symbol: "BINANCE:BTCUSDT",
    },
    Instrument {
        symbol: "ETH",
        name: "Ethereum",
        provider_symbol: "BINANCE:ETHUSDT",
    },
    Instrument {
        symbol: "SOL",
        name: "Solana",
        provider_symbol: "BINANCE:SOLUSDT",
    },
    Instrument {
        symbol: "XRP",
        name: "XRP",
        provider_symbol: "BINANCE:XRPUSDT",
    },
];

fn fallback_quotes() -> Vec<Quote> {
    let defaults = [
        ("BTC", "Bitcoin", 94521.00, 2340.0, 2.54),
        ("ETH", "Ethereum", 3245.50, -45.20, -1.37),
        ("SOL", "Solana", 187.25, 8.50, 4.75),
        ("XRP", "XRP", 2.34, 0.12, 5.41),
    ];
    defaults
        .into_iter()
        .map(|(symbol, name, price, change, change_percent)| Quote {
            symbol: symbol.to_string(),
            name: name.to_string(),
            price,
            change,
            change_percent,
            high: None,
            low: None,
            open: None,
            prev_close: None,
        })
        .collect()
}

/// Rounded to whole minutes, matching what the display shows.
fn round_minutes(age: Duration) -> u64 {
    (age.as_secs_f64() / 60.0).round() as u64
}

/// Aggregates current quotes for the tracked instruments.
///
/// Owns the process-wide snapshot cache; clones share it, so one `QuoteFeed`
/// per upstream client is the intended shape. The response is infallible:
/// upstream trouble degrades to the stale snapshot or the fallback set.
#[derive(Clone)]
pub struct QuoteFeed {
    client: FeedClient,
    cache: Arc<QuoteCache>,
    clock: Arc<dyn Clock>,
}

impl QuoteFeed {
    /// Creates a feed over the given client, using real time.
    pub fn new(client: &FeedClient) -> Self {
        Self::with_clock(client, Arc::new(SystemClock))
    }

    /// Creates a feed with an injected clock (deterministic cache tests).
    pub fn with_clock(client: &FeedClient, clock: Arc<dyn Clock>) -> Self {
        Self {
            client: client.clone(),
            cache: Arc::new(QuoteCache::default()),
            clock,
        }
    }

    /// Returns the current quote set.
    ///
    /// Resolution order: no token -> fallback; fresh cache -> cached
    /// snapshot; otherwise a concurrent per-instrument refresh. A refresh
    /// that yields nothing valid falls back without touching the cache; a
    /// refresh that cannot start at all prefers the stale snapshot, however
    /// old, over synthetic defaults.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub async fn fetch(&self) -> QuotesResponse {
        let Some(token) = self.client.token() else {
            return Self::fallback_response();
        };

        let now = self.clock.now();
        if let Some(snap) = self.cache.read().await
            && now.duration_since(snap.fetched_at) < CACHE_TTL
        {
            let age = round_minutes(now.duration_since(snap.fetched_at));
            return QuotesResponse {
                quotes: snap.quotes,
                source: FeedSource::Live,
                cached: true,
                cache_age: Some(format!("{age}m")),
                next_refresh: Some(format!("{}m", TTL_MINUTES.saturating_sub(age))),
                stale: None,
            };
        }

        match self.fetch_live(token).await {
            Ok(quotes) if quotes.is_empty() => Self::fallback_response(),
            Ok(quotes) => {
                self.cache.replace(quotes.clone(), now).await;
                QuotesResponse {
                    quotes,
                    source: FeedSource::Live,
                    cached: false,
                    cache_age: Some("0m".to_string()),
                    next_refresh: Some(format!("{TTL_MINUTES}m")),
                    stale: None,
                }
            }
            Err(_) => match self.cache.read().await {
                Some(snap) => QuotesResponse {
                    quotes: snap.quotes,
                    source: FeedSource::Live,
                    cached: true,
                    cache_age: None,
                    next_refresh: None,
                    stale: Some(true),
                },
                None => Self::fallback_response(),
            },
        }
    }

    /// Fan out one quote call per instrument and keep the valid results.
    ///
    /// URL construction is hoisted ahead of the fan-out: a bad base fails the
    /// whole refresh, while network and status failures stay local to their
    /// instrument.
    async fn fetch_live(&self, token: &str) -> Result<Vec<Quote>, FeedError> {
        let mut calls = Vec::with_capacity(TRACKED.len());
        for inst in &TRACKED {
            calls.push((
                inst,
                api::quote_url(&self.client, inst.provider_symbol, token)?,
            ));
        }

        let client = &self.client;
        let results = join_all(calls.into_iter().map(|(inst, url)| async move {
            let node = api::fetch_quote(client, url).await.ok()?;
            let price = node.current?;
            if price <= 0.0 {
                return None;
            }
            Some(Quote {
                symbol: inst.symbol.to_string(),
                name: inst.name.to_string(),
                price,
                change: node.change.unwrap_or(0.0),
                change_percent: node.change_percent.unwrap_or(0.0),
                high: node.high,
                low: node.low,
                open: node.open,
                prev_close: node.prev_close,
            })
        }))
        .await;

        Ok(results.into_iter().flatten().collect())
    }

    fn fallback_response() -> QuotesResponse {
        QuotesResponse {
            quotes: fallback_quotes(),
            source: FeedSource::Fallback,
            cached: false,
            cache_age: None,
            next_refresh: None,
            stale: None,
        }
    }
}
