use axum::http::Method;

/// Per-request context captured by the exception-translation middleware.
///
/// Handlers can read it with `Extension<RequestContext>`; the translator uses
/// it to report where a failure surfaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    method: Method,
    path: String,
}

impl RequestContext {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}
