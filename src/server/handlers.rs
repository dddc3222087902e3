// src/server/handlers.rs
// =============================================================================
// Request handlers.
//
// GET /emails?domain=example.com
//   200 {"emails": ["info@example.com", ...]}
//   400 {"error": "Domain parameter is required"}   (missing or empty domain)
//   400 {"error": "Invalid domain: ..."}            (can't form a URL)
//   504 {"error": "Crawl did not finish within ..."}
//
// GET /health
//   200 {"status": "ok"}
// =============================================================================

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::AppState;
use crate::crawl::seed_url;
use crate::error::ServerError;

#[derive(Debug, Deserialize)]
pub struct EmailsQuery {
    pub domain: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EmailsResponse {
    pub emails: Vec<String>,
}

pub async fn find_emails(
    State(state): State<AppState>,
    Query(query): Query<EmailsQuery>,
) -> Result<Json<EmailsResponse>, ServerError> {
    let domain = query
        .domain
        .filter(|domain| !domain.is_empty())
        .ok_or(ServerError::MissingDomain)?;

    let seed = seed_url(&domain).map_err(|e| {
        tracing::debug!(%domain, error = %e, "rejecting domain");
        ServerError::InvalidDomain(domain.clone())
    })?;

    tracing::info!(%domain, "crawl requested");

    // Own task per request; the handle is aborted if the crawl overruns
    let crawler = state.crawler.clone();
    let mut task = tokio::spawn(async move { crawler.crawl(&seed).await });

    let emails = match tokio::time::timeout(state.crawl_timeout, &mut task).await {
        Ok(Ok(emails)) => emails,
        Ok(Err(e)) => return Err(ServerError::Internal(e.to_string())),
        Err(_) => {
            task.abort();
            tracing::warn!(%domain, timeout = ?state.crawl_timeout, "crawl timed out");
            return Err(ServerError::Timeout(state.crawl_timeout));
        }
    };

    Ok(Json(EmailsResponse {
        emails: emails.into_iter().collect(),
    }))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        Router,
    };
    use tower::ServiceExt;
    use url::Url;

    use super::*;
    use crate::config::CrawlConfig;
    use crate::crawl::{Crawler, NoDelay, Page, PageFetcher, StaticFetcher};
    use crate::error::FetchError;
    use crate::server::create_routes;

    fn app_with(fetcher: Arc<dyn PageFetcher>, crawl_timeout: Duration) -> Router {
        let crawler = Crawler::with_parts(fetcher, Arc::new(NoDelay), CrawlConfig::default());
        create_routes(AppState {
            crawler: Arc::new(crawler),
            crawl_timeout,
        })
    }

    fn app() -> Router {
        let fetcher = StaticFetcher::new().page(
            "http://example.com/",
            r#"<a href="mailto:info@example.com">Info</a><a href="/team">Team</a>"#,
        ).page(
            "http://example.com/team",
            r#"<a href="mailto:jane@example.com">Jane</a>"#,
        );
        app_with(Arc::new(fetcher), Duration::from_secs(30))
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_missing_domain_is_rejected() {
        let (status, body) = get(app(), "/emails").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Domain parameter is required" }));
    }

    #[tokio::test]
    async fn test_empty_domain_is_rejected() {
        let (status, body) = get(app(), "/emails?domain=").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Domain parameter is required" }));
    }

    #[tokio::test]
    async fn test_invalid_domain_is_rejected() {
        let (status, body) = get(app(), "/emails?domain=bad%20host").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Invalid domain: bad host" }));
    }

    #[tokio::test]
    async fn test_emails_are_returned() {
        let (status, body) = get(app(), "/emails?domain=example.com").await;
        assert_eq!(status, StatusCode::OK);

        let response: EmailsResponse = serde_json::from_value(body).unwrap();
        let mut emails = response.emails;
        emails.sort();
        assert_eq!(emails, vec!["info@example.com", "jane@example.com"]);
    }

    #[tokio::test]
    async fn test_unreachable_domain_returns_empty_list() {
        let (status, body) = get(app(), "/emails?domain=nowhere.example").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "emails": [] }));
    }

    // Never answers within the test's patience
    struct HangingFetcher;

    #[async_trait]
    impl PageFetcher for HangingFetcher {
        async fn fetch(&self, _url: &Url, _user_agent: &str) -> Result<Page, FetchError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Err(FetchError::Unreachable("gave up".to_string()))
        }
    }

    #[tokio::test]
    async fn test_slow_crawl_times_out() {
        let app = app_with(Arc::new(HangingFetcher), Duration::from_millis(50));
        let (status, body) = get(app, "/emails?domain=example.com").await;
        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
        assert!(body["error"].as_str().unwrap().starts_with("Crawl did not finish"));
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get(app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "ok" }));
    }
}
