// src/crawl/throttle.rs
// =============================================================================
// Pauses between page requests.
//
// The crawler calls `pause()` after every fetch attempt. In production the
// pause is a random duration in [min, max) (1-2 seconds by default); tests plug
// in `NoDelay` so they run instantly.
// =============================================================================

use std::time::Duration;

use async_trait::async_trait;

#[async_trait]
pub trait Throttle: Send + Sync {
    /// Wait before the next request is allowed to go out
    async fn pause(&self);
}

// Sleeps for a uniformly random duration in [min, max)
#[derive(Debug, Clone)]
pub struct RandomDelay {
    min: Duration,
    max: Duration,
}

impl RandomDelay {
    pub fn new(min: Duration, max: Duration) -> Self {
        // A reversed range would make next_delay() meaningless; treat it as fixed
        let max = max.max(min);
        Self { min, max }
    }

    pub fn next_delay(&self) -> Duration {
        let span = u64::try_from((self.max - self.min).as_nanos()).unwrap_or(u64::MAX);
        if span == 0 {
            return self.min;
        }
        self.min + Duration::from_nanos(fastrand::u64(..span))
    }
}

#[async_trait]
impl Throttle for RandomDelay {
    async fn pause(&self) {
        let delay = self.next_delay();
        tracing::trace!(?delay, "throttling before next request");
        tokio::time::sleep(delay).await;
    }
}

// Doesn't wait at all
#[cfg(test)]
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

#[cfg(test)]
#[async_trait]
impl Throttle for NoDelay {
    async fn pause(&self) {}
}
