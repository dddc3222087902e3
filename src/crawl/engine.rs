// src/crawl/engine.rs
// =============================================================================
// The crawl loop: start at a seed URL, follow same-host links, collect every
// email address found along the way.
//
// How it works:
// 1. Frontier = {seed}
// 2. Take the next URL off the frontier (it becomes visited)
// 3. GET it with a random User-Agent, then pause 1-2 seconds
//    - transport failure: log it, skip the page, keep going
// 4. Scan the page's <a> elements: mailto: hrefs become addresses, every
//    other href is resolved against the SEED url and queued if its host is
//    exactly the seed's host
// 5. If more than `max_frontier` URLs are now queued, stop right away
// 6. Repeat until the frontier is empty
//
// Pages are fetched one after another, never in parallel; the pause between
// requests is the throttle. All crawl state is local to one `run()` call, so
// a single Crawler can serve many concurrent crawls.
// =============================================================================

use std::sync::Arc;

use indexmap::IndexSet;
use tracing::{debug, info, warn};
use url::Url;

use super::fetch::{HttpFetcher, PageFetcher};
use super::frontier::Frontier;
use super::identity::random_user_agent;
use super::throttle::{RandomDelay, Throttle};
use crate::config::CrawlConfig;
use crate::extract::scan_page;

/// Distinct addresses in the order they were first seen.
pub type EmailSet = IndexSet<String>;

// Scheme the CLI and the API put in front of a bare domain
const DEFAULT_SCHEME: &str = "http://";

// What a finished crawl produced
#[derive(Debug, Default, Clone)]
pub struct CrawlOutcome {
    pub emails: EmailSet,
    /// Pages taken off the frontier, including the ones that failed
    pub pages_visited: usize,
    pub pages_failed: usize,
    /// True if the crawl stopped because the frontier grew past the cap
    pub capped: bool,
}

#[derive(Clone)]
pub struct Crawler {
    fetcher: Arc<dyn PageFetcher>,
    throttle: Arc<dyn Throttle>,
    config: CrawlConfig,
}

impl Crawler {
    // Crawler that talks to the network and sleeps between requests
    pub fn new(config: CrawlConfig) -> anyhow::Result<Self> {
        let fetcher = HttpFetcher::new(config.request_timeout)?;
        let throttle = RandomDelay::new(config.min_delay, config.max_delay);
        Ok(Self::with_parts(Arc::new(fetcher), Arc::new(throttle), config))
    }

    pub fn with_parts(
        fetcher: Arc<dyn PageFetcher>,
        throttle: Arc<dyn Throttle>,
        config: CrawlConfig,
    ) -> Self {
        Self {
            fetcher,
            throttle,
            config,
        }
    }

    pub fn config(&self) -> &CrawlConfig {
        &self.config
    }

    /// Crawls from `seed` and returns every distinct address found.
    ///
    /// Never fails: pages that can't be fetched are skipped, so a crawl where
    /// every request fails just returns an empty set.
    pub async fn crawl(&self, seed: &Url) -> EmailSet {
        self.run(seed).await.emails
    }

    /// Same as `crawl`, plus counters describing how the crawl went.
    pub async fn run(&self, seed: &Url) -> CrawlOutcome {
        info!(seed = %seed, max_frontier = self.config.max_frontier, "starting crawl");

        let mut frontier = Frontier::with_seed(seed.clone());
        let mut outcome = CrawlOutcome::default();

        while let Some(page) = frontier.next() {
            let user_agent = random_user_agent();
            debug!(url = %page, user_agent, "fetching page");

            let result = self.fetcher.fetch(&page, user_agent).await;
            self.throttle.pause().await;

            let body = match result {
                Ok(fetched) => {
                    debug!(url = %page, status = fetched.status, bytes = fetched.body.len(), "page fetched");
                    fetched.body
                }
                Err(e) => {
                    warn!(url = %page, error = %e, "error accessing page, skipping");
                    outcome.pages_failed += 1;
                    continue;
                }
            };

            // Links resolve against the seed, not against `page`
            let scan = scan_page(&body, seed, self.config.scan_text);

            for email in scan.emails {
                if outcome.emails.insert(email.clone()) {
                    debug!(email = %email, url = %page, "found address");
                }
            }

            for link in scan.links {
                if is_same_host(&link, seed) {
                    frontier.push(link);
                }
            }

            if frontier.len() > self.config.max_frontier {
                warn!(
                    queued = frontier.len(),
                    "More than {} subpages have been found. Terminating.",
                    self.config.max_frontier
                );
                outcome.capped = true;
                break;
            }
        }

        outcome.pages_visited = frontier.visited_count();
        info!(
            pages_visited = outcome.pages_visited,
            pages_failed = outcome.pages_failed,
            emails = outcome.emails.len(),
            capped = outcome.capped,
            "crawl finished"
        );
        outcome
    }
}

// Exact hostname match; scheme and port are ignored. URLs without a host
// (mailto:, javascript:, ...) never match.
fn is_same_host(link: &Url, seed: &Url) -> bool {
    match (link.host_str(), seed.host_str()) {
        (Some(link_host), Some(seed_host)) => link_host == seed_host,
        _ => false,
    }
}

// Builds the seed URL for a bare domain such as "example.com"
pub fn seed_url(domain: &str) -> Result<Url, url::ParseError> {
    Url::parse(&format!("{}{}", DEFAULT_SCHEME, domain))
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why Arc<dyn PageFetcher> instead of a reqwest::Client?
//    - dyn Trait lets the crawler use any fetcher: the real one, or an
//      in-memory one in tests
//    - Arc makes the Crawler cheap to clone and share between server tasks
//
// 2. Why IndexSet instead of HashSet for the addresses?
//    - Same O(1) de-duplication as HashSet
//    - But iteration follows insertion order, so the output is stable
//
// 3. Why is the pause after the fetch and not inside the fetcher?
//    - Throttling is crawl policy; a fetcher only downloads one page
//    - It also keeps the pause in place when a fetch fails
// -----------------------------------------------------------------------------
