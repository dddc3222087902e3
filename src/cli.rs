// src/cli.rs
// =============================================================================
// Command-line interface, defined with clap's derive API.
//
//   email-finder --domain example.com     crawl once and print the addresses
//   email-finder --server                 run the HTTP API instead
//
// With neither flag the program prints a usage hint and exits cleanly.
// Tuning flags also read from EMAIL_FINDER_* environment variables (a .env
// file is loaded at startup, see main.rs).
// =============================================================================

use std::time::Duration;

use clap::Parser;

use crate::config::{CrawlConfig, ServerConfig, DEFAULT_MAX_FRONTIER, DEFAULT_PORT};

#[derive(Parser, Debug)]
#[command(
    name = "email-finder",
    version = "0.1.0",
    about = "Finds the email addresses a website links to",
    long_about = "email-finder crawls every page of a domain reachable from its home page and \
                  collects the addresses in mailto: links. It can run once from the command line \
                  or serve the same crawl over HTTP at GET /emails?domain=..."
)]
pub struct Cli {
    /// Domain to search, without a scheme (e.g. example.com); http:// is prepended
    #[arg(long)]
    pub domain: Option<String>,

    /// Run as an API server instead of crawling once
    #[arg(long)]
    pub server: bool,

    /// Address the API server binds to
    #[arg(long, env = "EMAIL_FINDER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port the API server listens on
    #[arg(long, env = "EMAIL_FINDER_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Give up on an API request whose crawl takes longer than this (seconds)
    #[arg(long, env = "EMAIL_FINDER_CRAWL_TIMEOUT_SECS", default_value_t = 600)]
    pub crawl_timeout_secs: u64,

    /// Stop crawling once more than this many pages are waiting to be fetched
    #[arg(long, env = "EMAIL_FINDER_MAX_FRONTIER", default_value_t = DEFAULT_MAX_FRONTIER)]
    pub max_frontier: usize,

    /// Per-request network timeout (seconds)
    #[arg(long, env = "EMAIL_FINDER_REQUEST_TIMEOUT_SECS", default_value_t = 10)]
    pub request_timeout_secs: u64,

    /// Also pick up addresses written in page text, not just mailto: links
    #[arg(long, env = "EMAIL_FINDER_SCAN_TEXT")]
    pub scan_text: bool,
}

impl Cli {
    pub fn crawl_config(&self) -> CrawlConfig {
        CrawlConfig {
            max_frontier: self.max_frontier,
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            scan_text: self.scan_text,
            ..CrawlConfig::default()
        }
    }

    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            host: self.host.clone(),
            port: self.port,
            crawl_timeout: Duration::from_secs(self.crawl_timeout_secs),
        }
    }
}
