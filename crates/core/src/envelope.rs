//! Response envelopes.
//!
//! Every handler result leaves the service as one of two JSON shapes:
//!
//! ```text
//! { "statusCode": 200, "statusMessage": "OK", "message": "...", "data": ... }
//! ```
//!
//! [`SuccessEnvelope`] and [`ErrorEnvelope`] serialize identically; the split
//! keeps success and failure constructors from being mixed up at call sites.
//! `statusMessage` is always taken from the status table, never passed in.

use serde::Serialize;

use crate::error::ErrorKind;
use crate::pagination::{Page, paginate};
use crate::status::{Status, UnknownStatusCode};

/// Message used by [`ErrorEnvelope::generic`].
pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred.";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct Body<T> {
    status_code: u16,
    status_message: &'static str,
    message: String,
    data: Option<T>,
}

impl<T> Body<T> {
    fn new(status: Status, message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            status_code: status.code(),
            status_message: status.reason(),
            message: message.into(),
            data,
        }
    }
}

macro_rules! envelope_accessors {
    ($t:ident) => {
        impl<T> $t<T> {
            pub fn status_code(&self) -> u16 {
                self.0.status_code
            }

            pub fn status_message(&self) -> &'static str {
                self.0.status_message
            }

            pub fn message(&self) -> &str {
                &self.0.message
            }

            pub fn data(&self) -> Option<&T> {
                self.0.data.as_ref()
            }

            pub fn into_data(self) -> Option<T> {
                self.0.data
            }
        }
    };
}

/// Envelope for a successful (2xx/3xx) result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SuccessEnvelope<T>(Body<T>);

/// Envelope for a failed (4xx/5xx) result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ErrorEnvelope<T>(Body<T>);

envelope_accessors!(SuccessEnvelope);
envelope_accessors!(ErrorEnvelope);

impl<T> SuccessEnvelope<T> {
    fn build(status: Status, message: impl Into<String>, data: Option<T>) -> Self {
        Self(Body::new(status, message, data))
    }

    /// Build with an explicit code. Fails for codes outside the status table.
    pub fn with_status(
        code: u16,
        message: impl Into<String>,
        data: Option<T>,
    ) -> Result<Self, UnknownStatusCode> {
        let status = Status::lookup(code)?;
        Ok(Self::build(status, message, data))
    }

    /// 200 OK.
    pub fn success(message: impl Into<String>, data: Option<T>) -> Self {
        Self::build(Status::OK, message, data)
    }

    pub fn created(message: impl Into<String>, data: Option<T>) -> Self {
        Self::build(Status::CREATED, message, data)
    }

    pub fn accepted(message: impl Into<String>, data: Option<T>) -> Self {
        Self::build(Status::ACCEPTED, message, data)
    }

    pub fn no_content(message: impl Into<String>, data: Option<T>) -> Self {
        Self::build(Status::NO_CONTENT, message, data)
    }

    pub fn reset_content(message: impl Into<String>, data: Option<T>) -> Self {
        Self::build(Status::RESET_CONTENT, message, data)
    }

    pub fn partial_content(message: impl Into<String>, data: Option<T>) -> Self {
        Self::build(Status::PARTIAL_CONTENT, message, data)
    }

    pub fn multi_status(message: impl Into<String>, data: Option<T>) -> Self {
        Self::build(Status::MULTI_STATUS, message, data)
    }

    pub fn not_modified(message: impl Into<String>, data: Option<T>) -> Self {
        Self::build(Status::NOT_MODIFIED, message, data)
    }

    pub fn moved_permanently(message: impl Into<String>, data: Option<T>) -> Self {
        Self::build(Status::MOVED_PERMANENTLY, message, data)
    }

    pub fn found(message: impl Into<String>, data: Option<T>) -> Self {
        Self::build(Status::FOUND, message, data)
    }

    pub fn see_other(message: impl Into<String>, data: Option<T>) -> Self {
        Self::build(Status::SEE_OTHER, message, data)
    }

    pub fn temporary_redirect(message: impl Into<String>, data: Option<T>) -> Self {
        Self::build(Status::TEMPORARY_REDIRECT, message, data)
    }

    pub fn permanent_redirect(message: impl Into<String>, data: Option<T>) -> Self {
        Self::build(Status::PERMANENT_REDIRECT, message, data)
    }
}

impl<T> SuccessEnvelope<Page<T>> {
    /// 200 OK carrying one page of `result` and its computed metadata.
    ///
    /// `page` and `size` must be at least 1; see [`paginate`].
    pub fn paginated(
        message: impl Into<String>,
        result: Vec<T>,
        page: u64,
        size: u64,
        total: u64,
    ) -> Self {
        let pagination = paginate(total, page, size);
        Self::success(message, Some(Page { result, pagination }))
    }
}

impl<T> ErrorEnvelope<T> {
    /// Build the envelope registered for `kind`.
    pub fn for_kind(kind: ErrorKind, message: impl Into<String>, data: Option<T>) -> Self {
        Self(Body::new(kind.status(), message, data))
    }

    /// Bare 500 with a fixed message and no data.
    pub fn generic() -> Self {
        Self::for_kind(ErrorKind::InternalServerError, GENERIC_ERROR_MESSAGE, None)
    }

    pub fn bad_request(message: impl Into<String>, data: Option<T>) -> Self {
        Self::for_kind(ErrorKind::BadRequest, message, data)
    }

    pub fn unauthorized(message: impl Into<String>, data: Option<T>) -> Self {
        Self::for_kind(ErrorKind::Unauthorized, message, data)
    }

    pub fn forbidden(message: impl Into<String>, data: Option<T>) -> Self {
        Self::for_kind(ErrorKind::Forbidden, message, data)
    }

    pub fn not_found(message: impl Into<String>, data: Option<T>) -> Self {
        Self::for_kind(ErrorKind::NotFound, message, data)
    }

    pub fn method_not_allowed(message: impl Into<String>, data: Option<T>) -> Self {
        Self::for_kind(ErrorKind::MethodNotAllowed, message, data)
    }

    pub fn request_timeout(message: impl Into<String>, data: Option<T>) -> Self {
        Self::for_kind(ErrorKind::RequestTimeout, message, data)
    }

    pub fn conflict(message: impl Into<String>, data: Option<T>) -> Self {
        Self::for_kind(ErrorKind::Conflict, message, data)
    }

    pub fn payload_too_large(message: impl Into<String>, data: Option<T>) -> Self {
        Self::for_kind(ErrorKind::PayloadTooLarge, message, data)
    }

    pub fn too_many_requests(message: impl Into<String>, data: Option<T>) -> Self {
        Self::for_kind(ErrorKind::TooManyRequests, message, data)
    }

    pub fn internal_server_error(message: impl Into<String>, data: Option<T>) -> Self {
        Self::for_kind(ErrorKind::InternalServerError, message, data)
    }

    pub fn not_implemented(message: impl Into<String>, data: Option<T>) -> Self {
        Self::for_kind(ErrorKind::NotImplemented, message, data)
    }

    pub fn service_unavailable(message: impl Into<String>, data: Option<T>) -> Self {
        Self::for_kind(ErrorKind::ServiceUnavailable, message, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn success_serializes_to_canonical_shape() {
        let env =
            SuccessEnvelope::success("User retrieved successfully.", Some(json!({"id": 7})));
        let json = serde_json::to_value(&env).unwrap();
        assert_eq!(
            json,
            json!({
                "statusCode": 200,
                "statusMessage": "OK",
                "message": "User retrieved successfully.",
                "data": {"id": 7},
            })
        );
    }

    #[test]
    fn bodyless_result_serializes_null_data() {
        let env: SuccessEnvelope<Value> =
            SuccessEnvelope::success("User deleted successfully.", None);
        let json = serde_json::to_value(&env).unwrap();
        assert_eq!(json["data"], Value::Null);
        assert_eq!(json.as_object().unwrap().len(), 4);
    }

    #[test]
    fn not_found_envelope() {
        let env: ErrorEnvelope<Value> = ErrorEnvelope::not_found("x not found", None);
        assert_eq!(
            serde_json::to_value(&env).unwrap(),
            json!({
                "statusCode": 404,
                "statusMessage": "Not Found",
                "message": "x not found",
                "data": null,
            })
        );
    }

    #[test]
    fn success_family_pins_codes() {
        let cases: Vec<(SuccessEnvelope<()>, u16, &str)> = vec![
            (SuccessEnvelope::created("m", None), 201, "Created"),
            (SuccessEnvelope::accepted("m", None), 202, "Accepted"),
            (SuccessEnvelope::no_content("m", None), 204, "No Content"),
            (SuccessEnvelope::not_modified("m", None), 304, "Not Modified"),
            (SuccessEnvelope::moved_permanently("m", None), 301, "Moved Permanently"),
            (SuccessEnvelope::found("m", None), 302, "Found"),
            (SuccessEnvelope::see_other("m", None), 303, "See Other"),
            (SuccessEnvelope::temporary_redirect("m", None), 307, "Temporary Redirect"),
            (SuccessEnvelope::permanent_redirect("m", None), 308, "Permanent Redirect"),
        ];
        for (env, code, phrase) in cases {
            assert_eq!(env.status_code(), code);
            assert_eq!(env.status_message(), phrase);
        }
    }

    #[test]
    fn error_family_uses_kind_table() {
        for kind in ErrorKind::ALL {
            let env: ErrorEnvelope<()> = ErrorEnvelope::for_kind(kind, "m", None);
            assert_eq!(env.status_code(), kind.status().code());
            assert_eq!(env.status_message(), kind.status().reason());
        }
        let env: ErrorEnvelope<()> = ErrorEnvelope::too_many_requests("slow down", None);
        assert_eq!(env.status_code(), 429);
        assert_eq!(env.status_message(), "Too Many Requests");
    }

    #[test]
    fn explicit_status_must_be_registered() {
        let ok = SuccessEnvelope::<()>::with_status(307, "moved", None).unwrap();
        assert_eq!(ok.status_message(), "Temporary Redirect");

        let err = SuccessEnvelope::<()>::with_status(299, "custom", None).unwrap_err();
        assert_eq!(err, UnknownStatusCode(299));
    }

    #[test]
    fn equal_codes_share_phrase() {
        let a: ErrorEnvelope<()> = ErrorEnvelope::conflict("one", None);
        let b: ErrorEnvelope<()> = ErrorEnvelope::for_kind(ErrorKind::Conflict, "two", None);
        assert_eq!(a.status_code(), b.status_code());
        assert_eq!(a.status_message(), b.status_message());
    }

    #[test]
    fn paginated_nests_result_and_metadata() {
        let env =
            SuccessEnvelope::paginated("Users retrieved successfully.", vec!["a", "b"], 3, 20, 45);
        assert_eq!(env.status_code(), 200);

        let json = serde_json::to_value(&env).unwrap();
        assert_eq!(json["data"]["result"], json!(["a", "b"]));
        assert_eq!(
            json["data"]["pagination"],
            json!({
                "page": 3,
                "size": 20,
                "pages": 3,
                "total": 45,
                "hasNext": false,
                "hasPrevious": true,
            })
        );
    }

    #[test]
    fn generic_error_is_bare_500() {
        let env: ErrorEnvelope<Value> = ErrorEnvelope::generic();
        assert_eq!(env.status_code(), 500);
        assert_eq!(env.status_message(), "Internal Server Error");
        assert_eq!(env.message(), GENERIC_ERROR_MESSAGE);
        assert!(env.data().is_none());
    }
}
