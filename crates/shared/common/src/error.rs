//! Unified error handling.
//!
//! Provides the single error type returned by every forum operation and its
//! conversion into an HTTP response. Authorization and lookup failures carry
//! a stable code and a client-facing message; everything else is an internal
//! fault whose details are logged, never returned.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::DomainError;
use serde::Serialize;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication & Authorization
    #[error("User has not signed in")]
    NotSignedIn,

    #[error("User is signed out. Sign in first to {action}")]
    SignedOut { action: String },

    #[error("{0}")]
    Forbidden(String),

    // Referenced entities
    #[error("User with entered uuid does not exist")]
    UserNotFound,

    #[error("Entered answer uuid does not exist")]
    AnswerNotFound,

    #[error("{0}")]
    InvalidQuestion(String),

    // Validation
    #[error("{0}")]
    Validation(String),

    // External service errors
    #[cfg(feature = "database")]
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Failure kinds, independent of message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotSignedIn,
    SignedOut,
    Forbidden,
    UserNotFound,
    AnswerNotFound,
    InvalidQuestion,
    Validation,
    Database,
    Internal,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NotSignedIn => "NOT_SIGNED_IN",
            ErrorKind::SignedOut => "SIGNED_OUT",
            ErrorKind::Forbidden => "FORBIDDEN",
            ErrorKind::UserNotFound => "USER_NOT_FOUND",
            ErrorKind::AnswerNotFound => "ANSWER_NOT_FOUND",
            ErrorKind::InvalidQuestion => "INVALID_QUESTION",
            ErrorKind::Validation => "VALIDATION_ERROR",
            ErrorKind::Database => "DATABASE_ERROR",
            ErrorKind::Internal => "INTERNAL_ERROR",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error response body for HTTP
#[derive(Debug, Serialize)]
struct ErrorResponse {
    code: String,
    message: String,
}

impl AppError {
    /// Kind of failure
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::NotSignedIn => ErrorKind::NotSignedIn,
            AppError::SignedOut { .. } => ErrorKind::SignedOut,
            AppError::Forbidden(_) => ErrorKind::Forbidden,
            AppError::UserNotFound => ErrorKind::UserNotFound,
            AppError::AnswerNotFound => ErrorKind::AnswerNotFound,
            AppError::InvalidQuestion(_) => ErrorKind::InvalidQuestion,
            AppError::Validation(_) => ErrorKind::Validation,
            #[cfg(feature = "database")]
            AppError::Database(_) => ErrorKind::Database,
            AppError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self.kind() {
            ErrorKind::NotSignedIn => "ATHR-001",
            ErrorKind::SignedOut => "ATHR-002",
            ErrorKind::Forbidden => "ATHR-003",
            ErrorKind::UserNotFound => "USR-001",
            ErrorKind::AnswerNotFound => "ANS-001",
            ErrorKind::InvalidQuestion => "QUES-001",
            other => other.as_str(),
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::NotSignedIn | ErrorKind::SignedOut | ErrorKind::Forbidden => {
                StatusCode::UNAUTHORIZED
            }
            ErrorKind::UserNotFound | ErrorKind::AnswerNotFound | ErrorKind::InvalidQuestion => {
                StatusCode::NOT_FOUND
            }
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::Database | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            #[cfg(feature = "database")]
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
            _ => self.to_string(),
        }
    }
}

// =============================================================================
// HTTP Response (Axum)
// =============================================================================

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            code: self.code().to_string(),
            message: self.user_message(),
        };

        (status, Json(body)).into_response()
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::Validation(msg),
            DomainError::UnknownRole(role) => {
                AppError::Internal(format!("stored user has unknown role '{}'", role))
            }
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn signed_out(action: impl Into<String>) -> Self {
        AppError::SignedOut {
            action: action.into(),
        }
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        AppError::Forbidden(msg.into())
    }

    pub fn invalid_question(msg: impl Into<String>) -> Self {
        AppError::InvalidQuestion(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_taxonomy_codes() {
        assert_eq!(AppError::NotSignedIn.code(), "ATHR-001");
        assert_eq!(AppError::signed_out("edit an answer").code(), "ATHR-002");
        assert_eq!(AppError::forbidden("no").code(), "ATHR-003");
        assert_eq!(AppError::UserNotFound.code(), "USR-001");
        assert_eq!(AppError::AnswerNotFound.code(), "ANS-001");
        assert_eq!(AppError::invalid_question("no").code(), "QUES-001");
        assert_eq!(AppError::internal("boom").code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::NotSignedIn.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::signed_out("x").status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::forbidden("x").status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::UserNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::AnswerNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::invalid_question("x").status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::validation("x").status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::internal("x").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_signed_out_message_names_the_action() {
        let err = AppError::signed_out("delete an answer");
        assert_eq!(
            err.user_message(),
            "User is signed out. Sign in first to delete an answer"
        );
        assert_eq!(err.kind(), ErrorKind::SignedOut);
    }

    #[test]
    fn test_internal_details_are_hidden() {
        let err = AppError::internal("connection pool exhausted");
        assert_eq!(err.user_message(), "An internal error occurred");
    }

    #[test]
    fn test_unknown_role_is_internal_not_forbidden() {
        let err = AppError::from(DomainError::UnknownRole("root".to_string()));
        assert_eq!(err.kind(), ErrorKind::Internal);
    }

    #[tokio::test]
    async fn test_response_body_carries_code_and_message() {
        let response = AppError::forbidden("Only the answer owner can edit the answer")
            .into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["code"], "ATHR-003");
        assert_eq!(body["message"], "Only the answer owner can edit the answer");
    }
}
