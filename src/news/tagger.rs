use std::sync::LazyLock;

use regex::Regex;

/// Ordered whole-word patterns. Rare or specific terms come before the broad
/// bitcoin catch-all so it cannot shadow them; first match wins.
static PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"(?i)\b(xrp|ripple)\b", "XRP"),
        (r"(?i)\b(solana|sol)\b", "SOL"),
        (r"(?i)\b(doge|dogecoin)\b", "DOGE"),
        (r"(?i)\b(ethereum|eth)\b", "ETH"),
        (r"(?i)\b(bitcoin|btc)\b", "BTC"),
    ]
    .into_iter()
    .map(|(pattern, ticker)| (Regex::new(pattern).expect("static pattern"), ticker))
    .collect()
});

/// Guess the instrument a crypto headline is about. No match leaves the
/// instrument empty.
pub(super) fn tag_instrument(headline: &str) -> &'static str {
    PATTERNS
        .iter()
        .find(|(re, _)| re.is_match(headline))
        .map_or("", |(_, ticker)| ticker)
}
