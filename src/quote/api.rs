use url::Url;

use crate::{
    core::{FeedClient, FeedError},
    quote::wire,
};

pub(super) fn quote_url(
    client: &FeedClient,
    provider_symbol: &str,
    token: &str,
) -> Result<Url, FeedError> {
    let mut url = client.base_api().join("quote")?;
    url.query_pairs_mut()
        .append_pair("symbol", provider_symbol)
        .append_pair("token", token);
    Ok(url)
}

/// One upstream quote call. Any failure here is isolated to its instrument
/// by the caller.
pub(super) async fn fetch_quote(
    client: &FeedClient,
    url: Url,
) -> Result<wire::QuoteNode, FeedError> {
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
    let node: wire::QuoteNode = serde_json::from_str(&body)?;
    Ok(node)
}
