use tickerfeed::{FeedSource, NewsFeed};

use crate::common::{
    client_for, client_without_token, mock_company_news, mock_market_news,
    mock_market_news_failure, news_item, setup_server,
};

#[tokio::test]
async fn no_token_serves_the_fallback_list_with_a_hint() {
    let feed = NewsFeed::new(&client_without_token());

    let resp = feed.fetch().await;
    assert_eq!(resp.source, FeedSource::Fallback);
    assert_eq!(resp.headlines.len(), 8);
    assert!(resp.message.as_deref().unwrap().contains("FINNHUB_API_KEY"));
    assert!(resp.error.is_none());
    assert_eq!(resp.headlines[0].related, "NVDA");
    assert_eq!(resp.headlines[1].category, "economy");
}

#[tokio::test]
async fn merges_tags_dedups_and_prioritizes_across_sources() {
    let server = setup_server();

    let general = mock_market_news(
        &server,
        "general",
        vec![
            news_item("Markets open mixed ahead of jobs data", 400),
            // same 50-char prefix as the crypto item below; merge order
            // keeps the crypto copy
            news_item("SOLANA HITS FRESH HIGH AS VOLUMES CLIMB", 999),
            news_item("Fed watchers split on next move", 50),
        ],
    );
    let crypto = mock_market_news(
        &server,
        "crypto",
        vec![
            news_item("Solana hits fresh high as volumes climb", 100),
            news_item("Bitcoin steadies after volatile week", 200),
        ],
    );
    let nvda = mock_company_news(&server, "NVDA", vec![news_item("Chip demand soars", 300)]);
    let aapl = mock_company_news(&server, "AAPL", vec![]);
    // TSLA/MSFT/META queries hit no mock (404) and must be tolerated

    let feed = NewsFeed::new(&client_for(&server, crate::common::TEST_TOKEN));
    let resp = feed.fetch().await;

    general.assert();
    crypto.assert();
    nvda.assert();
    aapl.assert();

    assert_eq!(resp.source, FeedSource::Live);
    assert!(resp.error.is_none());

    let heads: Vec<&str> = resp.headlines.iter().map(|h| h.headline.as_str()).collect();
    assert_eq!(
        heads,
        [
            // ticker partition, newest first
            "Chip demand soars",
            "Bitcoin steadies after volatile week",
            "Solana hits fresh high as volumes climb",
            // general fill, newest first
            "Markets open mixed ahead of jobs data",
            "Fed watchers split on next move",
        ]
    );

    assert_eq!(resp.headlines[0].related, "NVDA");
    assert_eq!(resp.headlines[0].category, "company");
    assert_eq!(resp.headlines[1].related, "BTC");
    assert_eq!(resp.headlines[2].related, "SOL");
    assert_eq!(resp.headlines[2].category, "crypto");
    assert_eq!(resp.headlines[3].related, "");
    assert_eq!(resp.headlines[3].category, "general");
}

#[tokio::test]
async fn general_failure_degrades_the_whole_request() {
    let server = setup_server();
    let _general = mock_market_news_failure(&server, "general", 500);
    let _crypto = mock_market_news(
        &server,
        "crypto",
        vec![news_item("Bitcoin steadies after volatile week", 200)],
    );
    let _nvda = mock_company_news(&server, "NVDA", vec![news_item("Chip demand soars", 300)]);

    let feed = NewsFeed::new(&client_for(&server, crate::common::TEST_TOKEN));
    let resp = feed.fetch().await;

    assert_eq!(resp.source, FeedSource::Fallback);
    assert_eq!(resp.error.as_deref(), Some("Failed to fetch live news"));
    assert!(resp.message.is_none());
    assert_eq!(resp.headlines.len(), 8);
    assert_eq!(resp.headlines[0].related, "NVDA");
}

#[tokio::test]
async fn crypto_failure_is_tolerated_as_an_empty_feed() {
    let server = setup_server();
    let _general = mock_market_news(
        &server,
        "general",
        vec![
            news_item("Markets open mixed ahead of jobs data", 400),
            news_item("Fed watchers split on next move", 50),
        ],
    );
    let _crypto = mock_market_news_failure(&server, "crypto", 500);

    let feed = NewsFeed::new(&client_for(&server, crate::common::TEST_TOKEN));
    let resp = feed.fetch().await;

    assert_eq!(resp.source, FeedSource::Live);
    assert!(resp.error.is_none());
    let heads: Vec<&str> = resp.headlines.iter().map(|h| h.headline.as_str()).collect();
    assert_eq!(
        heads,
        [
            "Markets open mixed ahead of jobs data",
            "Fed watchers split on next move",
        ]
    );
}

#[tokio::test]
async fn company_queries_carry_the_date_window_and_cap_at_two() {
    let server = setup_server();
    let _general = mock_market_news(&server, "general", vec![]);
    let _crypto = mock_market_news(&server, "crypto", vec![]);
    // three recent NVDA stories; only the top two may survive
    let nvda = mock_company_news(
        &server,
        "NVDA",
        vec![
            news_item("Chip demand soars", 300),
            news_item("Data center orders pile up", 290),
            news_item("Analysts lift targets again", 280),
        ],
    );

    let feed = NewsFeed::new(&client_for(&server, crate::common::TEST_TOKEN));
    let resp = feed.fetch().await;

    // the mock only matches when from/to query params are present
    nvda.assert();
    assert_eq!(resp.source, FeedSource::Live);
    let heads: Vec<&str> = resp.headlines.iter().map(|h| h.headline.as_str()).collect();
    assert_eq!(heads, ["Chip demand soars", "Data center orders pile up"]);
    assert!(resp.headlines.iter().all(|h| h.related == "NVDA"));
}

#[tokio::test]
async fn response_serializes_with_the_wire_field_names() {
    let value = serde_json::to_value(NewsFeed::new(&client_without_token()).fetch().await).unwrap();
    assert_eq!(value["source"], "fallback");
    assert!(value["message"].is_string());
    assert!(value.get("error").is_none());
    assert_eq!(value["headlines"][0]["related"], "NVDA");
    assert!(value["headlines"][0].get("datetime").is_none());
}
