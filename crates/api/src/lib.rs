//! HTTP API: the response/error contract at the HTTP boundary.

pub mod app;
pub mod config;
pub mod context;
pub mod middleware;

pub use app::errors::{ApiError, ApiResult, ExceptionTranslator};
pub use app::extract::{ApiJson, ApiPath, Listing};
pub use app::response::ApiResponse;
pub use config::ServerConfig;
