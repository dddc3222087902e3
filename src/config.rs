// src/config.rs
// =============================================================================
// Runtime settings for the crawler and the HTTP server.
//
// The values are filled in from command-line flags (see cli.rs), which in turn
// fall back to environment variables. Everything here has a sensible default
// so tests can just use `CrawlConfig::default()`.
// =============================================================================

use std::time::Duration;

/// Crawl stops once more than this many pages are waiting in the frontier.
pub const DEFAULT_MAX_FRONTIER: usize = 500;

/// Port the API server listens on unless told otherwise.
pub const DEFAULT_PORT: u16 = 5000;

// Settings that control a single crawl
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Terminate as soon as the frontier holds more than this many URLs
    pub max_frontier: usize,
    /// Lower bound of the randomized pause after each request
    pub min_delay: Duration,
    /// Upper bound (exclusive) of the randomized pause
    pub max_delay: Duration,
    /// Transport timeout for a single page request
    pub request_timeout: Duration,
    /// Also look for addresses in the page text, not only in mailto: links
    pub scan_text: bool,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            max_frontier: DEFAULT_MAX_FRONTIER,
            min_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(2),
            request_timeout: Duration::from_secs(10),
            scan_text: false,
        }
    }
}

// Settings for the API server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Upper bound on how long one /emails request may spend crawling
    pub crawl_timeout: Duration,
}

impl ServerConfig {
    // "host:port" string for TcpListener::bind
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            crawl_timeout: Duration::from_secs(600),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_crawl_config() {
        let config = CrawlConfig::default();
        assert_eq!(config.max_frontier, 500);
        assert_eq!(config.min_delay, Duration::from_secs(1));
        assert_eq!(config.max_delay, Duration::from_secs(2));
        assert!(!config.scan_text);
    }

    #[test]
    fn test_bind_addr() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:5000");
    }
}
