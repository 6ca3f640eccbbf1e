//! Exception translation: the single catch point for raised failures.
//!
//! Handlers return [`ApiResult`]. A failure becomes an [`ApiError`], whose
//! response carries the raised [`DomainException`] in its extensions. The
//! `translate_exceptions` middleware takes it out and hands it to an
//! [`ExceptionTranslator`], which logs it and renders the error envelope.

use axum::{
    body::Body,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::{SecondsFormat, Utc};
use serde_json::Value;
use std::any::Any;

use enigma_core::{
    DomainException, ErrorEnvelope, ErrorKind, Signal, envelope::GENERIC_ERROR_MESSAGE,
    error::UNEXPECTED_FAULT_MESSAGE,
};

use crate::app::response::ApiResponse;
use crate::context::RequestContext;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<ApiResponse<T>, ApiError>;

/// Body sent when even the error envelope cannot be produced.
const BARE_500: &str = concat!(
    r#"{"statusCode":500,"statusMessage":"Internal Server Error","#,
    r#""message":"An unexpected error occurred.","data":null}"#,
);

/// A raised failure on its way to the boundary.
#[derive(Debug)]
pub struct ApiError(DomainException);

impl ApiError {
    pub fn exception(&self) -> &DomainException {
        &self.0
    }

    pub fn into_exception(self) -> DomainException {
        self.0
    }
}

impl From<DomainException> for ApiError {
    fn from(err: DomainException) -> Self {
        Self(err)
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self(DomainException::from(err))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let message = rejection.body_text();
        let err = if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            DomainException::payload_too_large(message)
        } else {
            DomainException::bad_request(message)
        };
        Self(err)
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self(DomainException::bad_request(rejection.body_text()))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self(DomainException::bad_request(rejection.body_text()))
    }
}

/// Marker carried in response extensions until the middleware consumes it.
#[derive(Debug, Clone)]
pub(crate) struct Raised(pub(crate) DomainException);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Without the middleware the client still gets a valid envelope.
        let mut response = bare_internal_error();
        response.extensions_mut().insert(Raised(self.0));
        response
    }
}

/// Pick the error kind for a raised failure.
///
/// Signals outside the closed set fall back to internal server error. A
/// conflict signal, or any message containing "exists", is forced to
/// conflict: some lower layers report duplicates only through message text.
/// Routing signals are exempt from the text check since their messages
/// echo the client-chosen path.
pub fn resolve_kind(signal: &Signal, message: &str) -> ErrorKind {
    if let Signal::Routing(kind) = signal {
        return *kind;
    }
    let kind = signal.resolve().unwrap_or(ErrorKind::InternalServerError);
    if kind == ErrorKind::Conflict || message.contains("exists") {
        ErrorKind::Conflict
    } else {
        kind
    }
}

/// Converts one raised failure into one HTTP response.
///
/// Created armed for a request; [`translate`](Self::translate) consumes it,
/// so a translator can never dispatch twice.
#[derive(Debug)]
pub struct ExceptionTranslator {
    context: RequestContext,
}

impl ExceptionTranslator {
    pub fn arm(context: RequestContext) -> Self {
        Self { context }
    }

    /// Log the failure and render its error envelope. Never panics; any
    /// rendering fault degrades to a bare 500.
    pub fn translate(self, exception: DomainException) -> Response {
        let (signal, message, data, cause) = exception.into_parts();

        let kind = resolve_kind(&signal, &message);
        let message = if message.trim().is_empty() {
            UNEXPECTED_FAULT_MESSAGE.to_string()
        } else {
            message
        };
        let envelope = ErrorEnvelope::for_kind(kind, message, data);

        let data_text = envelope.data().map(Value::to_string).unwrap_or_default();
        tracing::error!(
            status_code = envelope.status_code(),
            status_message = envelope.status_message(),
            path = self.context.path(),
            method = %self.context.method(),
            timestamp = %Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            data = %data_text,
            signal = %signal,
            cause = cause.as_deref().unwrap_or(""),
            "{}",
            envelope.message()
        );

        render(&envelope)
    }
}

fn render(envelope: &ErrorEnvelope<Value>) -> Response {
    let Ok(status) = StatusCode::from_u16(envelope.status_code()) else {
        return bare_internal_error();
    };
    let Ok(bytes) = serde_json::to_vec(envelope) else {
        return bare_internal_error();
    };

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    response
}

/// Response for a handler that panicked, installed with `CatchPanicLayer`.
///
/// The payload is logged; the client only sees the bare 500 envelope.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(text) = panic.downcast_ref::<&str>() {
        *text
    } else if let Some(text) = panic.downcast_ref::<String>() {
        text.as_str()
    } else {
        "non-string panic payload"
    };
    tracing::error!(
        status_code = 500,
        timestamp = %Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        panic = detail,
        "handler panicked"
    );
    bare_internal_error()
}

fn bare_internal_error() -> Response {
    debug_assert!(BARE_500.contains(GENERIC_ERROR_MESSAGE));
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONTENT_TYPE, "application/json")],
        BARE_500,
    )
        .into_response()
}
