//! Access token extractor.

use std::convert::Infallible;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use domain::BEARER_TOKEN_PREFIX;

/// Raw access token from the `authorization` header.
///
/// Never rejects: a missing or unreadable header yields an empty token, which
/// the guard reports as not signed in. A `Bearer ` prefix is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessToken(pub String);

impl AccessToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AccessToken
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .map(|value| {
                value
                    .strip_prefix(BEARER_TOKEN_PREFIX)
                    .unwrap_or(value)
                    .trim()
                    .to_string()
            })
            .unwrap_or_default();

        Ok(AccessToken(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(header: Option<&str>) -> AccessToken {
        let mut builder = Request::builder().uri("/");
        if let Some(value) = header {
            builder = builder.header(AUTHORIZATION, value);
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();
        AccessToken::from_request_parts(&mut parts, &()).await.unwrap()
    }

    #[tokio::test]
    async fn test_bearer_prefix_is_stripped() {
        assert_eq!(extract(Some("Bearer abc123")).await.as_str(), "abc123");
    }

    #[tokio::test]
    async fn test_raw_token_is_accepted() {
        assert_eq!(extract(Some("abc123")).await.as_str(), "abc123");
    }

    #[tokio::test]
    async fn test_missing_header_is_empty_token() {
        assert_eq!(extract(None).await.as_str(), "");
    }
}
