//! Request extractors whose rejections follow the error-envelope contract.

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

use enigma_core::DomainException;

use crate::app::errors::ApiError;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 20;

/// JSON body extractor; malformed bodies become a 400 envelope.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Path parameter extractor; segments that fail to parse become a 400 envelope.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

#[derive(Debug, Default, Deserialize)]
struct ListingParams {
    page: Option<u64>,
    limit: Option<u64>,
}

/// The `?page=&limit=` window of a listing request.
///
/// Both values are 1-based and default to page 1 of 20. Zero is rejected
/// here so that pagination arithmetic downstream never sees it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Listing {
    pub page: u64,
    pub size: u64,
}

impl Listing {
    /// Rows to skip before this window.
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.size)
    }

    fn from_params(params: ListingParams) -> Result<Self, DomainException> {
        let page = params.page.unwrap_or(DEFAULT_PAGE);
        let size = params.limit.unwrap_or(DEFAULT_LIMIT);
        if page == 0 {
            return Err(DomainException::bad_request("page must be at least 1."));
        }
        if size == 0 {
            return Err(DomainException::bad_request("limit must be at least 1."));
        }
        Ok(Self { page, size })
    }
}

impl Default for Listing {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_LIMIT,
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Listing
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<ListingParams>::from_request_parts(parts, state).await?;
        Ok(Self::from_params(params)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_absent() {
        let listing = Listing::from_params(ListingParams::default()).unwrap();
        assert_eq!(listing, Listing::default());
        assert_eq!(listing.offset(), 0);
    }

    #[test]
    fn offset_skips_previous_pages() {
        let listing = Listing::from_params(ListingParams {
            page: Some(3),
            limit: Some(20),
        })
        .unwrap();
        assert_eq!(listing.offset(), 40);
    }

    #[test]
    fn zero_values_are_bad_requests() {
        let err = Listing::from_params(ListingParams {
            page: Some(0),
            limit: None,
        })
        .unwrap_err();
        assert_eq!(err.kind(), Some(enigma_core::ErrorKind::BadRequest));

        let err = Listing::from_params(ListingParams {
            page: None,
            limit: Some(0),
        })
        .unwrap_err();
        assert_eq!(err.message(), "limit must be at least 1.");
    }
}
