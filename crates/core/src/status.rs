//! Status taxonomy: the closed set of HTTP status codes this service emits.
//!
//! Every envelope derives its `statusMessage` from this table, so two
//! envelopes carrying the same code always carry byte-identical reason
//! phrases. Codes outside the table are rejected with [`UnknownStatusCode`].

use thiserror::Error;

/// A registered status code together with its canonical reason phrase.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Status {
    code: u16,
    reason: &'static str,
}

/// A status code that is not part of the supported set.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
#[error("unknown status code: {0}")]
pub struct UnknownStatusCode(pub u16);

impl Status {
    pub const OK: Status = Status::new(200, "OK");
    pub const CREATED: Status = Status::new(201, "Created");
    pub const ACCEPTED: Status = Status::new(202, "Accepted");
    pub const NO_CONTENT: Status = Status::new(204, "No Content");
    pub const RESET_CONTENT: Status = Status::new(205, "Reset Content");
    pub const PARTIAL_CONTENT: Status = Status::new(206, "Partial Content");
    pub const MULTI_STATUS: Status = Status::new(207, "Multi-Status");

    pub const MOVED_PERMANENTLY: Status = Status::new(301, "Moved Permanently");
    pub const FOUND: Status = Status::new(302, "Found");
    pub const SEE_OTHER: Status = Status::new(303, "See Other");
    pub const NOT_MODIFIED: Status = Status::new(304, "Not Modified");
    pub const TEMPORARY_REDIRECT: Status = Status::new(307, "Temporary Redirect");
    pub const PERMANENT_REDIRECT: Status = Status::new(308, "Permanent Redirect");

    pub const BAD_REQUEST: Status = Status::new(400, "Bad Request");
    pub const UNAUTHORIZED: Status = Status::new(401, "Unauthorized");
    pub const FORBIDDEN: Status = Status::new(403, "Forbidden");
    pub const NOT_FOUND: Status = Status::new(404, "Not Found");
    pub const METHOD_NOT_ALLOWED: Status = Status::new(405, "Method Not Allowed");
    pub const REQUEST_TIMEOUT: Status = Status::new(408, "Request Timeout");
    pub const CONFLICT: Status = Status::new(409, "Conflict");
    pub const PAYLOAD_TOO_LARGE: Status = Status::new(413, "Payload Too Large");
    pub const TOO_MANY_REQUESTS: Status = Status::new(429, "Too Many Requests");

    pub const INTERNAL_SERVER_ERROR: Status = Status::new(500, "Internal Server Error");
    pub const NOT_IMPLEMENTED: Status = Status::new(501, "Not Implemented");
    pub const SERVICE_UNAVAILABLE: Status = Status::new(503, "Service Unavailable");

    /// All supported statuses, ordered by code.
    pub const ALL: &'static [Status] = &[
        Status::OK,
        Status::CREATED,
        Status::ACCEPTED,
        Status::NO_CONTENT,
        Status::RESET_CONTENT,
        Status::PARTIAL_CONTENT,
        Status::MULTI_STATUS,
        Status::MOVED_PERMANENTLY,
        Status::FOUND,
        Status::SEE_OTHER,
        Status::NOT_MODIFIED,
        Status::TEMPORARY_REDIRECT,
        Status::PERMANENT_REDIRECT,
        Status::BAD_REQUEST,
        Status::UNAUTHORIZED,
        Status::FORBIDDEN,
        Status::NOT_FOUND,
        Status::METHOD_NOT_ALLOWED,
        Status::REQUEST_TIMEOUT,
        Status::CONFLICT,
        Status::PAYLOAD_TOO_LARGE,
        Status::TOO_MANY_REQUESTS,
        Status::INTERNAL_SERVER_ERROR,
        Status::NOT_IMPLEMENTED,
        Status::SERVICE_UNAVAILABLE,
    ];

    const fn new(code: u16, reason: &'static str) -> Self {
        Self { code, reason }
    }

    /// Find the registered entry for `code`.
    pub fn lookup(code: u16) -> Result<Status, UnknownStatusCode> {
        Self::ALL
            .iter()
            .copied()
            .find(|s| s.code == code)
            .ok_or(UnknownStatusCode(code))
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn reason(&self) -> &'static str {
        self.reason
    }

    pub fn is_success(&self) -> bool {
        (200..400).contains(&self.code)
    }

    pub fn is_error(&self) -> bool {
        self.code >= 400
    }
}

impl core::fmt::Display for Status {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.code, self.reason)
    }
}

/// Canonical reason phrase for a supported status code.
pub fn reason_phrase(code: u16) -> Result<&'static str, UnknownStatusCode> {
    Status::lookup(code).map(|s| s.reason)
}
