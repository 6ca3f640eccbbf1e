use axum::{Router, routing::get};

pub mod system;

/// Routes the service always exposes, independent of mounted resources.
pub fn router() -> Router {
    Router::new().route("/health", get(system::health))
}
