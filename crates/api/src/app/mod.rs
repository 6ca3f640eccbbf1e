//! HTTP application wiring (Axum router + error boundary).
//!
//! - `errors.rs`: exception translation into error envelopes
//! - `response.rs`: success envelopes as HTTP responses
//! - `extract.rs`: extractors whose rejections follow the envelope contract
//! - `routes/`: service-level routes (health, fallback)

use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;

use crate::config::ServerConfig;
use crate::middleware;

pub mod errors;
pub mod extract;
pub mod response;
pub mod routes;

/// Build the full HTTP router around the given resource routes.
///
/// Resources are mounted beside `/health` under the configured API prefix.
/// Every response, including unmatched routes and router-level 405s, passes
/// through the exception translator. A panicking handler is answered with the
/// bare 500 envelope instead of a dropped connection.
pub fn build_app(config: &ServerConfig, resources: Router) -> Router {
    let api = routes::router().merge(resources);

    let app = match config.api_prefix() {
        Some(prefix) => Router::new().nest(prefix, api),
        None => api,
    };

    app.fallback(routes::system::fallback)
        .layer(axum::middleware::from_fn(middleware::translate_exceptions))
        .layer(CatchPanicLayer::custom(errors::panic_response))
}
