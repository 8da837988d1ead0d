use chrono::{Days, Utc};
use url::Url;

use crate::{
    core::{FeedClient, FeedError},
    news::wire::NewsNode,
};

/// Trailing window for company-news queries.
const COMPANY_NEWS_WINDOW_DAYS: u64 = 3;

/// Category news: `general` or `crypto`.
pub(super) async fn market_news(
    client: &FeedClient,
    category: &str,
    token: &str,
) -> Result<Vec<NewsNode>, FeedError> {
    let mut url = client.base_api().join("news")?;
    url.query_pairs_mut()
        .append_pair("category", category)
        .append_pair("token", token);
    fetch_list(client, url).await
}

/// Per-symbol news over the trailing 3-day window (ISO dates, `to` = today).
pub(super) async fn company_news(
    client: &FeedClient,
    symbol: &str,
    token: &str,
) -> Result<Vec<NewsNode>, FeedError> {
    let to = Utc::now().date_naive();
    let from = to - Days::new(COMPANY_NEWS_WINDOW_DAYS);

    let mut url = client.base_api().join("company-news")?;
    url.query_pairs_mut()
        .append_pair("symbol", symbol)
        .append_pair("from", &from.format("%Y-%m-%d").to_string())
        .append_pair("to", &to.format("%Y-%m-%d").to_string())
        .append_pair("token", token);
    fetch_list(client, url).await
}

async fn fetch_list(client: &FeedClient, url: Url) -> Result<Vec<NewsNode>, FeedError> {
    let resp = client
        .http()
        .get(url)
        .header("accept", "application/json")
        .send()
        .await?;

    if !resp.status().is_success() {
        return Err(FeedError::Status {
            status: resp.status().as_u16(),
            url: resp.url().to_string(),
        });
    }

    let body = resp.text().await?;
    let nodes: Vec<NewsNode> = serde_json::from_str(&body)?;
    Ok(nodes)
}
