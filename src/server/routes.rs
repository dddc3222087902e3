use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::{handlers, AppState};

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/emails", get(handlers::find_emails))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
