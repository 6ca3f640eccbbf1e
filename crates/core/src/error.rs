//! Domain failure model.
//!
//! Business logic reports a recoverable failure by returning a
//! [`DomainException`]. It is never caught by the code that raised it; the
//! HTTP boundary consumes it exactly once and turns it into an error
//! envelope.

use core::str::FromStr;

use serde_json::Value;
use thiserror::Error;

use crate::status::Status;

/// Result type used across business logic.
pub type DomainResult<T> = Result<T, DomainException>;

/// Closed set of failure categories, mapped 1:1 to HTTP statuses.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    MethodNotAllowed,
    RequestTimeout,
    Conflict,
    PayloadTooLarge,
    TooManyRequests,
    InternalServerError,
    NotImplemented,
    ServiceUnavailable,
}

/// Kind -> (status, wire name). The single source of truth for the mapping.
const KINDS: [(ErrorKind, Status, &str); 12] = [
    (ErrorKind::BadRequest, Status::BAD_REQUEST, "badRequest"),
    (ErrorKind::Unauthorized, Status::UNAUTHORIZED, "unauthorized"),
    (ErrorKind::Forbidden, Status::FORBIDDEN, "forbidden"),
    (ErrorKind::NotFound, Status::NOT_FOUND, "notFound"),
    (ErrorKind::MethodNotAllowed, Status::METHOD_NOT_ALLOWED, "methodNotAllowed"),
    (ErrorKind::RequestTimeout, Status::REQUEST_TIMEOUT, "requestTimeout"),
    (ErrorKind::Conflict, Status::CONFLICT, "conflict"),
    (ErrorKind::PayloadTooLarge, Status::PAYLOAD_TOO_LARGE, "payloadTooLarge"),
    (ErrorKind::TooManyRequests, Status::TOO_MANY_REQUESTS, "tooManyRequests"),
    (ErrorKind::InternalServerError, Status::INTERNAL_SERVER_ERROR, "internalServerError"),
    (ErrorKind::NotImplemented, Status::NOT_IMPLEMENTED, "notImplemented"),
    (ErrorKind::ServiceUnavailable, Status::SERVICE_UNAVAILABLE, "serviceUnavailable"),
];

/// A kind name that does not belong to [`ErrorKind`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown error kind: {0}")]
pub struct UnknownErrorKind(pub String);

impl ErrorKind {
    pub const ALL: [ErrorKind; 12] = [
        ErrorKind::BadRequest,
        ErrorKind::Unauthorized,
        ErrorKind::Forbidden,
        ErrorKind::NotFound,
        ErrorKind::MethodNotAllowed,
        ErrorKind::RequestTimeout,
        ErrorKind::Conflict,
        ErrorKind::PayloadTooLarge,
        ErrorKind::TooManyRequests,
        ErrorKind::InternalServerError,
        ErrorKind::NotImplemented,
        ErrorKind::ServiceUnavailable,
    ];

    fn entry(self) -> (ErrorKind, Status, &'static str) {
        // KINDS is indexed in declaration order.
        KINDS[self as usize]
    }

    pub fn status(self) -> Status {
        self.entry().1
    }

    pub fn as_str(self) -> &'static str {
        self.entry().2
    }

    /// Reverse lookup: the kind registered for `code`, if any.
    pub fn from_status(code: u16) -> Option<ErrorKind> {
        KINDS
            .iter()
            .find(|(_, status, _)| status.code() == code)
            .map(|(kind, _, _)| *kind)
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorKind {
    type Err = UnknownErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KINDS
            .iter()
            .find(|(_, _, name)| *name == s)
            .map(|(kind, _, _)| *kind)
            .ok_or_else(|| UnknownErrorKind(s.to_string()))
    }
}

/// What the raiser attached to identify the failure category.
///
/// Most code raises a typed [`ErrorKind`]. Lower layers that only speak raw
/// status codes or kind names are accepted as-is and resolved at the
/// boundary, where anything unrecognised falls back to
/// [`ErrorKind::InternalServerError`].
///
/// [`Signal::Routing`] marks failures produced by the HTTP layer itself
/// (unmatched route, wrong method). Their messages quote the request path, so
/// the boundary takes the kind as-is and never reinterprets the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    Kind(ErrorKind),
    Status(u16),
    Label(String),
    Routing(ErrorKind),
}

impl Signal {
    /// The kind this signal maps to, or `None` when it is outside the closed set.
    pub fn resolve(&self) -> Option<ErrorKind> {
        match self {
            Signal::Kind(kind) | Signal::Routing(kind) => Some(*kind),
            Signal::Status(code) => ErrorKind::from_status(*code),
            Signal::Label(label) => label.parse().ok(),
        }
    }
}

impl core::fmt::Display for Signal {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Signal::Kind(kind) => write!(f, "{kind}"),
            Signal::Status(code) => write!(f, "status {code}"),
            Signal::Label(label) => write!(f, "{label}"),
            Signal::Routing(kind) => write!(f, "routing {kind}"),
        }
    }
}

/// A typed failure raised by business logic.
///
/// `data` is client-facing: it is echoed in the error envelope and must only
/// hold what the raiser intends to expose. `cause` is internal detail that
/// is logged at the boundary and never serialized to clients.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{signal}: {message}")]
pub struct DomainException {
    signal: Signal,
    message: String,
    data: Option<Value>,
    cause: Option<String>,
}

impl DomainException {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self::raw(Signal::Kind(kind), message)
    }

    /// Raise with a raw status code from a layer that does not know [`ErrorKind`].
    pub fn with_status(code: u16, message: impl Into<String>) -> Self {
        Self::raw(Signal::Status(code), message)
    }

    /// Raise with a kind name such as `"conflict"`; unknown names are kept verbatim.
    pub fn with_label(label: impl Into<String>, message: impl Into<String>) -> Self {
        Self::raw(Signal::Label(label.into()), message)
    }

    /// Raise from the router layer; the message is reported verbatim.
    pub fn routing(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self::raw(Signal::Routing(kind), message)
    }

    fn raw(signal: Signal, message: impl Into<String>) -> Self {
        Self {
            signal,
            message: message.into(),
            data: None,
            cause: None,
        }
    }

    /// Attach client-facing structured data (e.g. a list of invalid fields).
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Attach internal detail for the boundary log only.
    pub fn with_cause(mut self, cause: impl Into<String>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    pub fn signal(&self) -> &Signal {
        &self.signal
    }

    /// The resolved kind, or `None` if the raiser used a code or name outside the closed set.
    pub fn kind(&self) -> Option<ErrorKind> {
        self.signal.resolve()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    pub fn cause(&self) -> Option<&str> {
        self.cause.as_deref()
    }

    /// Split into owned parts; used by the boundary that consumes the exception.
    pub fn into_parts(self) -> (Signal, String, Option<Value>, Option<String>) {
        (self.signal, self.message, self.data, self.cause)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::BadRequest, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthorized, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Forbidden, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    pub fn method_not_allowed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MethodNotAllowed, message)
    }

    pub fn request_timeout(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RequestTimeout, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    pub fn payload_too_large(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::PayloadTooLarge, message)
    }

    pub fn too_many_requests(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::TooManyRequests, message)
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InternalServerError, message)
    }

    pub fn not_implemented(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotImplemented, message)
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ServiceUnavailable, message)
    }
}

/// Message used when an unexpected fault is coerced into an internal error.
pub const UNEXPECTED_FAULT_MESSAGE: &str = "An unexpected error occurred. Try again.";

impl From<anyhow::Error> for DomainException {
    fn from(err: anyhow::Error) -> Self {
        Self::internal_server_error(UNEXPECTED_FAULT_MESSAGE).with_cause(format!("{err:#}"))
    }
}
