// src/crawl/fetch.rs
// =============================================================================
// Downloading pages.
//
// The crawler talks to a `PageFetcher` rather than to reqwest directly, so the
// crawl loop can be tested against in-memory pages. `HttpFetcher` is the real
// implementation: one GET per call, with the User-Agent chosen by the caller.
//
// A non-2xx status is NOT an error here. Error pages are still HTML and may
// still carry mailto: links, so the body is returned along with the status.
// Only transport problems (DNS, refused connection, timeout, broken body)
// produce a FetchError.
// =============================================================================

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};
use url::Url;

use crate::error::FetchError;

// A downloaded page
#[derive(Debug, Clone)]
pub struct Page {
    pub status: u16,
    pub body: String,
}

#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// GET `url`, identifying as `user_agent`
    async fn fetch(&self, url: &Url, user_agent: &str) -> Result<Page, FetchError>;
}

// reqwest-backed fetcher. The Client is reused for connection pooling.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url, user_agent: &str) -> Result<Page, FetchError> {
        if !matches!(url.scheme(), "http" | "https") {
            return Err(FetchError::Unreachable(format!(
                "unsupported scheme '{}'",
                url.scheme()
            )));
        }

        let response = self
            .client
            .get(url.clone())
            .header(header::USER_AGENT, user_agent)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(FetchError::Body)?;

        Ok(Page { status, body })
    }
}


#[cfg(test)]
mod tests {
    use super::testing::StaticFetcher;
    use super::*;

    #[tokio::test]
    async fn test_static_fetcher_serves_known_pages() {
        let fetcher = StaticFetcher::new().page("http://seed.example/", "<p>hi</p>");
        let url = Url::parse("http://seed.example/").unwrap();

        let page = fetcher.fetch(&url, "agent").await.unwrap();
        assert_eq!(page.status, 200);
        assert_eq!(page.body, "<p>hi</p>");
    }

    #[tokio::test]
    async fn test_static_fetcher_fails_unknown_pages() {
        let fetcher = StaticFetcher::new();
        let url = Url::parse("http://seed.example/missing").unwrap();

        let err = fetcher.fetch(&url, "agent").await.unwrap_err();
        assert!(matches!(err, FetchError::Unreachable(_)));
        assert_eq!(fetcher.fetched_urls(), vec!["http://seed.example/missing"]);
    }

    #[tokio::test]
    async fn test_http_fetcher_rejects_non_http_schemes() {
        let fetcher = HttpFetcher::new(Duration::from_secs(2)).unwrap();
        let url = Url::parse("ftp://seed.example/file").unwrap();

        let err = fetcher.fetch(&url, "agent").await.unwrap_err();
        assert!(matches!(err, FetchError::Unreachable(_)));
    }

    #[tokio::test]
    async fn test_http_fetcher_reports_transport_error() {
        // Grab a free port, then release it so the connection is refused
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let fetcher = HttpFetcher::new(Duration::from_secs(2)).unwrap();
        let url = Url::parse(&format!("http://127.0.0.1:{}/", port)).unwrap();

        let err = fetcher.fetch(&url, "agent").await.unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
    }

    #[tokio::test]
    async fn test_http_fetcher_returns_error_pages_with_agent() {
        use axum::{http::HeaderMap, http::StatusCode, routing::get, Router};

        // Local server answering 404 and echoing the User-Agent it received
        let app = Router::new().route(
            "/",
            get(|headers: HeaderMap| async move {
                let agent = headers
                    .get("user-agent")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                (StatusCode::NOT_FOUND, format!("<a href=\"mailto:{}\">", agent))
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let fetcher = HttpFetcher::new(Duration::from_secs(5)).unwrap();
        let url = Url::parse(&format!("http://{}/", addr)).unwrap();

        let page = fetcher.fetch(&url, "test-agent/1.0").await.unwrap();
        assert_eq!(page.status, 404);
        assert_eq!(page.body, r#"<a href="mailto:test-agent/1.0">"#);
    }
}
