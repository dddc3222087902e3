// src/main.rs
// =============================================================================
// Entry point.
//
// What happens here:
// 1. Load .env (if present) and set up logging to stderr
// 2. Parse command-line arguments using clap
// 3. Either crawl one domain and print the addresses, or start the API server
// 4. Exit with proper code (0 = success, 2 = error)
//
// stdout only ever carries the result listing; logs go to stderr so the
// output can be piped.
// =============================================================================

mod cli; // src/cli.rs - command-line parsing
mod config; // src/config.rs - crawl and server settings
mod crawl; // src/crawl/ - the crawler
mod error; // src/error.rs - typed errors
mod extract; // src/extract/ - pulling addresses and links out of HTML
mod server; // src/server/ - HTTP API

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::Cli;
use crawl::{seed_url, CrawlOutcome, Crawler, EmailSet};

#[tokio::main]
async fn main() {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,email_finder=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns the process exit code
async fn run() -> Result<i32> {
    let cli = Cli::parse();

    if cli.server {
        let crawler = Crawler::new(cli.crawl_config())?;
        server::serve(cli.server_config(), crawler).await?;
        return Ok(0);
    }

    match cli.domain.as_deref() {
        Some(domain) => handle_domain_scan(domain, &cli).await,
        None => {
            println!("Please provide a domain with --domain or use --server to run as an API.");
            Ok(0)
        }
    }
}

// Crawls one domain and prints what it found
async fn handle_domain_scan(domain: &str, cli: &Cli) -> Result<i32> {
    let crawler = Crawler::new(cli.crawl_config())?;
    let outcome = scan_domain(&crawler, domain).await;

    let stdout = std::io::stdout();
    write_emails(&mut stdout.lock(), &outcome.emails).context("Failed to print results")?;
    Ok(0)
}

// Runs the crawl for a bare domain. A domain that can't even form a URL is
// handled like a site where every request failed: nothing found, no error.
async fn scan_domain(crawler: &Crawler, domain: &str) -> CrawlOutcome {
    let seed = match seed_url(domain) {
        Ok(seed) => seed,
        Err(e) => {
            tracing::warn!("Error accessing '{}': {}", domain, e);
            return CrawlOutcome::default();
        }
    };

    tracing::info!(
        "Searching {} (cap: {} queued pages)",
        seed,
        crawler.config().max_frontier
    );

    let outcome = crawler.run(&seed).await;
    if outcome.capped {
        tracing::warn!("Crawl stopped early; results are partial");
    }
    tracing::info!(
        "Visited {} page(s), {} failed",
        outcome.pages_visited,
        outcome.pages_failed
    );
    outcome
}

// Header line, then one address per line
fn write_emails(out: &mut impl Write, emails: &EmailSet) -> std::io::Result<()> {
    writeln!(out, "Found these email addresses:")?;
    for email in emails {
        writeln!(out, "{}", email)?;
    }
    Ok(())
}
