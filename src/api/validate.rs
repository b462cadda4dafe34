use std::collections::HashMap;

use async_trait::async_trait;
use axum::{
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Declared constraints of a request DTO, checked before it reaches a repository.
pub trait Validate {
    fn validate(&self) -> Result<(), ApiError>;
}

/// Collects per-field messages and turns them into a single validation error.
#[derive(Debug, Default)]
pub struct FieldErrors {
    errors: HashMap<String, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message` for `field` unless `ok` holds. First message per field wins.
    pub fn check(&mut self, ok: bool, field: &str, message: &str) -> &mut Self {
        if !ok {
            self.errors
                .entry(field.to_string())
                .or_insert_with(|| message.to_string());
        }
        self
    }

    pub fn into_result(self) -> Result<(), ApiError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ApiError::validation_error("Invalid request data", Some(self.errors)))
        }
    }
}

/// JSON body extractor that answers 400 on malformed input and runs [`Validate`].
pub struct ValidJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::invalid_json(rejection.body_text()))?;
        value.validate()?;
        Ok(Self(value))
    }
}

/// Query string extractor that answers 400 with the JSON error body on
/// unknown keys or unparsable values.
pub struct ApiQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_errors_collects_failures() {
        let mut errors = FieldErrors::new();
        errors
            .check(true, "name", "name is required")
            .check(false, "salary", "salary must be >= 0")
            .check(false, "salary", "second message");

        match errors.into_result() {
            Err(ApiError::ValidationError { field_errors: Some(fields), .. }) => {
                assert_eq!(fields.len(), 1);
                assert_eq!(fields["salary"], "salary must be >= 0");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn no_failures_is_ok() {
        let mut errors = FieldErrors::new();
        errors.check(true, "x", "y");
        assert!(errors.into_result().is_ok());
    }
}
