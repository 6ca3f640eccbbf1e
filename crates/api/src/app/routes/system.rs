use axum::{Extension, http::Uri};
use serde_json::Value;

use enigma_core::{DomainException, ErrorKind, SuccessEnvelope};

use crate::app::errors::{ApiError, ApiResult};
use crate::context::RequestContext;

pub async fn health() -> ApiResult<Value> {
    Ok(SuccessEnvelope::success("Application is running", None).into())
}

/// Catch-all for unmatched routes.
pub async fn fallback(context: Option<Extension<RequestContext>>, uri: Uri) -> ApiError {
    let path = context
        .map(|Extension(ctx)| ctx.path().to_string())
        .unwrap_or_else(|| uri.path().to_string());
    DomainException::routing(ErrorKind::NotFound, format!("Route {path} was not found.")).into()
}
