use std::time::Instant;

use tokio::sync::RwLock;

use super::model::Quote;

#[derive(Debug, Clone)]
pub(super) struct Snapshot {
    pub(super) quotes: Vec<Quote>,
    pub(super) fetched_at: Instant,
}

/// Single-snapshot store: at most one entry, replaced wholesale, never
/// cleared on failure. Concurrent refreshes are last-writer-wins.
#[derive(Debug, Default)]
pub(super) struct QuoteCache {
    slot: RwLock<Option<Snapshot>>,
}

impl QuoteCache {
    pub(super) async fn read(&self) -> Option<Snapshot> {
        self.slot.read().await.clone()
    }

    pub(super) async fn replace(&self, quotes: Vec<Quote>, fetched_at: Instant) {
        let mut guard = self.slot.write().await;
        *guard = Some(Snapshot { quotes, fetched_at });
    }
}
