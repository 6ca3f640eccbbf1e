//! `enigma-core` — the response/error contract shared by every handler.
//!
//! Framework-free: status taxonomy, pagination arithmetic, response
//! envelopes, and the typed failure raised by business logic.

pub mod envelope;
pub mod error;
pub mod pagination;
pub mod status;

pub use envelope::{ErrorEnvelope, SuccessEnvelope};
pub use error::{DomainException, DomainResult, ErrorKind, Signal, UnknownErrorKind};
pub use pagination::{Page, PaginationMeta, paginate};
pub use status::{Status, UnknownStatusCode, reason_phrase};
