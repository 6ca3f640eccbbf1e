use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use enigma_core::SuccessEnvelope;

/// A success envelope sent with its own status code.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T>(pub SuccessEnvelope<T>);

impl<T> From<SuccessEnvelope<T>> for ApiResponse<T> {
    fn from(envelope: SuccessEnvelope<T>) -> Self {
        Self(envelope)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        // Envelope codes all come from the status table, so this only
        // falls back if the table and `http` ever disagree.
        let status = StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::OK);
        (status, Json(self.0)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[tokio::test]
    async fn created_envelope_sets_status_and_body() {
        let response = ApiResponse::from(SuccessEnvelope::created(
            "User created successfully.",
            Some(json!({"slug": "A1"})),
        ))
        .into_response();
        assert_eq!(response.status(), StatusCode::CREATED);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["statusMessage"], "Created");
        assert_eq!(body["data"]["slug"], "A1");
    }
}
