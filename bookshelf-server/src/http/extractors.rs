//! Custom Axum extractors

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Form;

use super::error::ApiError;
use crate::models::{BookForm, ValidationError};

/// Integer book id taken from the `{book_id}` path segment.
///
/// Non-integer segments are rejected with 422 rather than axum's default 400.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookId(pub i32);

impl<S> FromRequestParts<S> for BookId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::Missing { field: "book_id" }))?;

        let id = raw.parse::<i32>().map_err(|_| {
            ApiError::Validation(ValidationError::NotAnInteger {
                field: "book_id",
                value: raw.clone(),
            })
        })?;

        Ok(Self(id))
    }
}

/// Urlencoded book form with both fields present and non-empty.
///
/// Every way a form can fail (wrong or absent content type, undecodable
/// body, missing or empty field) is a 422.
#[derive(Debug, Clone)]
pub struct ValidBookForm(pub BookForm);

impl<S> FromRequest<S> for ValidBookForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(form) = Form::<BookForm>::from_request(req, state)
            .await
            .map_err(|rejection| {
                ApiError::Validation(ValidationError::InvalidForm {
                    reason: rejection.body_text(),
                })
            })?;

        form.validate()?;
        Ok(Self(form))
    }
}
