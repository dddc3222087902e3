// src/error.rs
// =============================================================================
// Typed errors used at module boundaries.
//
// - FetchError: a single page could not be downloaded. The crawler logs it and
//   moves on to the next page; it never reaches the caller of a crawl.
// - ServerError: everything the /emails endpoint can answer with other than a
//   list of addresses. Converts itself into a JSON `{"error": ...}` response.
//
// Application plumbing (startup, binding a port) uses anyhow instead.
// =============================================================================

use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    /// DNS failure, refused connection, timeout, TLS problem...
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// Headers arrived but the body could not be read or decoded
    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),

    /// The URL can't be fetched at all (e.g. an ftp:// link on the same host)
    #[error("{0}")]
    Unreachable(String),
}

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Domain parameter is required")]
    MissingDomain,

    #[error("Invalid domain: {0}")]
    InvalidDomain(String),

    #[error("Crawl did not finish within {0:?}")]
    Timeout(Duration),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ServerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::MissingDomain | ServerError::InvalidDomain(_) => StatusCode::BAD_REQUEST,
            ServerError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
