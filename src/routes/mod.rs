//! HTTP route handlers and the route table.
//!
//! - `books`: the `/api/books` CRUD endpoints
//! - `health`: liveness, readiness, version and metrics endpoints

pub mod books;
pub mod health;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn_with_state;
use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::security_headers::{security_headers_middleware, SecurityHeaders};
use crate::state::AppState;

/// Builds the full application router with its middleware stack.
pub fn router(state: AppState) -> Router {
    let security = Arc::new(SecurityHeaders::from_config(state.config.security.as_ref()));
    let max_body_bytes = state.config.server.max_body_bytes;

    let app = Router::new()
        .route("/healthz", get(health::healthz))
        .route("/readyz", get(health::readyz))
        .route("/metrics", get(health::metrics))
        .route("/metrics/prometheus", get(health::metrics_prometheus))
        .route("/version", get(health::version))
        .route("/api/books", get(books::list_books).post(books::create_book))
        .route(
            "/api/books/{id}",
            get(books::get_book).put(books::update_book).delete(books::delete_book),
        )
        .with_state(state)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(from_fn_with_state(security, security_headers_middleware));

    // Debug builds accept any origin so browser clients on other ports can call the API
    if cfg!(debug_assertions) {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}
