// src/crawl/mod.rs
// =============================================================================
// This module handles crawling a website for email addresses.
//
// Features:
// - Breadth-first crawling starting from a seed URL
// - Same-host restriction (exact hostname match, scheme ignored)
// - Hard cap: stops once more than 500 pages are waiting to be fetched
// - Random 1-2 second pause after every request
// - Random browser User-Agent per request
// - A page that fails to load is logged and skipped, never fatal
//
// Submodules:
// - engine: the crawl loop itself
// - frontier: queue of pending URLs + set of visited ones
// - fetch: downloading pages (trait + reqwest implementation)
// - throttle: the pause between requests
// - identity: the User-Agent pool
// =============================================================================

mod engine;
mod fetch;
mod frontier;
mod identity;
mod throttle;

pub use engine::{seed_url, CrawlOutcome, Crawler, EmailSet};

#[cfg(test)]
pub(crate) use fetch::{testing::StaticFetcher, Page, PageFetcher};
#[cfg(test)]
pub(crate) use throttle::NoDelay;
