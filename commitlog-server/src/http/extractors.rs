//! Custom Axum extractors

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;

use super::error::ApiError;
use crate::models::{CommitListParams, PageRequest, ValidationError};

/// Extract and validate commit listing parameters from the query string
pub struct ValidPageRequest(pub PageRequest);

impl<S> FromRequestParts<S> for ValidPageRequest
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params): Query<CommitListParams> = Query::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                ApiError::Validation(ValidationError::MalformedQuery {
                    reason: e.body_text(),
                })
            })?;

        let request = PageRequest::parse(&params)?;
        Ok(Self(request))
    }
}
