//! tickerfeed: Finnhub-backed aggregation for a retro terminal ticker display.
//!
//! Two independent surfaces sit behind the presentation client:
//!
//! - [`QuoteFeed`] fetches current prices for a fixed set of crypto
//!   instruments, behind a 15-minute snapshot cache with a stale fallback.
//! - [`NewsFeed`] merges general, crypto, and per-company headlines into a
//!   single deduplicated, ticker-prioritized list of at most 8 items.
//!
//! Both degrade to a fixed payload when no `FINNHUB_API_KEY` is configured;
//! neither ever surfaces an error to the caller.

pub mod core;
pub mod news;
pub mod quote;

pub use crate::core::clock::{Clock, SystemClock};
pub use crate::core::{FeedClient, FeedClientBuilder, FeedError, FeedSource};
pub use crate::news::{NewsFeed, NewsItem, NewsResponse};
pub use crate::quote::{Quote, QuoteFeed, QuotesResponse};
