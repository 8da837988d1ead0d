//! News aggregation: merge, tag, dedup, prioritize, cap.

mod api;
mod model;
mod tagger;
mod wire;

pub use model::{NewsItem, NewsResponse};

use std::collections::HashSet;

use futures::future::join_all;

use crate::core::{FeedClient, FeedError, FeedSource};
use wire::NewsNode;

/// Instruments worth a dedicated company-news query, best first.
const KEY_TICKERS: [&str; 10] = [
    "NVDA", "AAPL", "TSLA", "MSFT", "META", "AMZN", "GOOGL", "AMD", "NFLX", "COIN",
];

/// Company-news queries issued per request, bounding upstream load.
const COMPANY_QUERY_LIMIT: usize = 5;
/// Top slice of each company-news response that enters the merge.
const COMPANY_TAKE: usize = 2;
/// Top slice of the crypto-category response that enters the merge.
const CRYPTO_TAKE: usize = 6;
/// Top slice of the general-category response that enters the merge.
const GENERAL_TAKE: usize = 10;
/// Ticker-bearing items admitted before general fill.
const TICKER_QUOTA: usize = 5;
/// Total result cap.
const RESULT_CAP: usize = 8;
/// Headline prefix length for the dedup key.
const DEDUP_PREFIX_CHARS: usize = 50;

fn fallback_headlines() -> Vec<NewsItem> {
    let defaults = [
        (
            "NVDA surges 8% as AI chip demand hits all-time high",
            "technology",
            "NVDA",
        ),
        (
            "Federal Reserve signals potential rate cut amid cooling inflation",
            "economy",
            "",
        ),
        (
            "BTC breaks through $95,000 resistance level on ETF inflows",
            "crypto",
            "BTC",
        ),
        (
            "AAPL announces record $110B stock buyback program",
            "technology",
            "AAPL",
        ),
        (
            "AMZN AWS revenue beats Wall Street estimates by 15%",
            "technology",
            "AMZN",
        ),
        ("TSLA shares drop 5% on Q4 delivery miss", "technology", "TSLA"),
        (
            "ETH staking yields surge following network upgrade",
            "crypto",
            "ETH",
        ),
        (
            "MSFT Azure growth accelerates to 31% year-over-year",
            "technology",
            "MSFT",
        ),
    ];
    defaults
        .into_iter()
        .map(|(headline, category, related)| NewsItem {
            headline: headline.to_string(),
            category: category.to_string(),
            related: related.to_string(),
            source: None,
            url: None,
            image: None,
            datetime: None,
        })
        .collect()
}

/// Aggregates general, crypto, and per-company headlines into one capped,
/// ticker-prioritized list. Computed fresh per call; never cached.
#[derive(Clone)]
pub struct NewsFeed {
    client: FeedClient,
}

impl NewsFeed {
    /// Creates a feed over the given client.
    pub fn new(client: &FeedClient) -> Self {
        Self {
            client: client.clone(),
        }
    }

    /// Returns the merged headline list (at most 8 items).
    ///
    /// A failed general-category query fails the whole request to the
    /// fallback list with `error` set; a failed crypto-category or
    /// company-news query just contributes nothing.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub async fn fetch(&self) -> NewsResponse {
        let Some(token) = self.client.token() else {
            return NewsResponse {
                headlines: fallback_headlines(),
                source: FeedSource::Fallback,
                message: Some("Set FINNHUB_API_KEY for live news".to_string()),
                error: None,
            };
        };

        match self.fetch_live(token).await {
            Ok(headlines) => NewsResponse {
                headlines,
                source: FeedSource::Live,
                message: None,
                error: None,
            },
            Err(_) => NewsResponse {
                headlines: fallback_headlines(),
                source: FeedSource::Fallback,
                message: None,
                error: Some("Failed to fetch live news".to_string()),
            },
        }
    }

    async fn fetch_live(&self, token: &str) -> Result<Vec<NewsItem>, FeedError> {
        let client = &self.client;

        let general_fut = api::market_news(client, "general", token);
        let crypto_fut = api::market_news(client, "crypto", token);
        let company_fut = join_all(KEY_TICKERS.iter().take(COMPANY_QUERY_LIMIT).map(
            |symbol| async move {
                // a failed company query contributes nothing
                let items = api::company_news(client, symbol, token)
                    .await
                    .unwrap_or_default();
                (*symbol, items)
            },
        ));

        let (general, crypto, company) = tokio::join!(general_fut, crypto_fut, company_fut);

        // the general feed is the backbone; without it the request fails
        let general = general?;
        let crypto = crypto.unwrap_or_default();

        Ok(assemble(crypto, company, general))
    }
}

/// Build the merged candidate list (crypto, then company, then general),
/// dedup it, and apply the ticker-first capping.
fn assemble(
    crypto: Vec<NewsNode>,
    company: Vec<(&'static str, Vec<NewsNode>)>,
    general: Vec<NewsNode>,
) -> Vec<NewsItem> {
    let mut merged: Vec<NewsItem> = Vec::new();

    for node in crypto.into_iter().take(CRYPTO_TAKE) {
        let headline = node.headline.unwrap_or_default();
        let related = tagger::tag_instrument(&headline).to_string();
        merged.push(NewsItem {
            headline,
            category: "crypto".to_string(),
            related,
            source: node.source,
            url: node.url,
            image: node.image,
            datetime: node.datetime,
        });
    }

    for (symbol, items) in company {
        for node in items.into_iter().take(COMPANY_TAKE) {
            let Some(headline) = node.headline.filter(|h| !h.is_empty()) else {
                continue;
            };
            merged.push(NewsItem {
                headline,
                category: node.category.unwrap_or_else(|| "company".to_string()),
                // the ticker is known from the query, whatever upstream says
                related: symbol.to_string(),
                source: node.source,
                url: node.url,
                image: node.image,
                datetime: node.datetime,
            });
        }
    }

    for node in general.into_iter().take(GENERAL_TAKE) {
        merged.push(NewsItem {
            headline: node.headline.unwrap_or_default(),
            category: node.category.unwrap_or_else(|| "general".to_string()),
            related: node.related.unwrap_or_default(),
            source: node.source,
            url: node.url,
            image: node.image,
            datetime: node.datetime,
        });
    }

    prioritize(dedup_by_prefix(merged))
}

/// Keep the first item per lowercased 50-char headline prefix, preserving
/// relative order among survivors.
fn dedup_by_prefix(items: Vec<NewsItem>) -> Vec<NewsItem> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| {
            let key: String = item
                .headline
                .to_lowercase()
                .chars()
                .take(DEDUP_PREFIX_CHARS)
                .collect();
            seen.insert(key)
        })
        .collect()
}

/// Up to 5 ticker-bearing items, newest first, then general fill to 8.
fn prioritize(items: Vec<NewsItem>) -> Vec<NewsItem> {
    let (mut with_tickers, mut without_tickers): (Vec<_>, Vec<_>) =
        items.into_iter().partition(|item| !item.related.is_empty());

    with_tickers.sort_by_key(|item| std::cmp::Reverse(item.datetime.unwrap_or(0)));
    without_tickers.sort_by_key(|item| std::cmp::Reverse(item.datetime.unwrap_or(0)));

    let ticker_count = with_tickers.len().min(TICKER_QUOTA);
    let mut result: Vec<NewsItem> = with_tickers.into_iter().take(ticker_count).collect();
    result.extend(without_tickers.into_iter().take(RESULT_CAP - ticker_count));
    result
}
