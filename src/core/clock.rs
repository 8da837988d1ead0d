use std::time::Instant;

/// Source of monotonic time for cache freshness checks.
///
/// The quote cache measures its age through this seam so tests can drive
/// time deterministically instead of sleeping through the TTL.
pub trait Clock: Send + Sync {
    /// The current instant.
    fn now(&self) -> Instant;
}

/// Default clock backed by [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}
