//! Deferred JSON extractor - parses and validates a request body without
//! rejecting the request.
//!
//! A bad body must not outrank the session checks, so the outcome is carried
//! into the handler and reported by the service once the caller is known.

use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use common::{AppError, AppResult};

/// JSON body that is either valid or the `VALIDATION_ERROR` it produced.
pub struct DeferredJson<T>(pub AppResult<T>);

impl<T> DeferredJson<T> {
    /// Map the parsed body, keeping any parse or rule failure
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> AppResult<U> {
        self.0.map(f)
    }
}

#[async_trait]
impl<S, T> FromRequest<S> for DeferredJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => value
                .validate()
                .map(|_| value)
                .map_err(|e| AppError::validation(format_validation_errors(&e))),
            Err(rejection) => Err(AppError::validation(rejection.body_text())),
        };

        Ok(DeferredJson(body))
    }
}

/// Join every field message, falling back to "<field> is invalid"
fn format_validation_errors(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}
