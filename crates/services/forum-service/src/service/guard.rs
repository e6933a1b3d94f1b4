//! Authorization guard.
//!
//! Turns a token lookup plus the acting user's role and ownership into either
//! permission to proceed or a tagged failure. The order is fixed: token
//! existence, then session liveness, then role or ownership. Callers rely on
//! it so that an unauthenticated caller never learns whether a target exists.

use uuid::Uuid;

use common::{AppError, AppResult};
use domain::{Session, UserRole};

use crate::repository::SessionRepository;

/// Look up the session behind a token.
///
/// Fails with `NotSignedIn` when no session was ever issued for it.
pub async fn authenticate(sessions: &dyn SessionRepository, token: &str) -> AppResult<Session> {
    match sessions.find_by_token(token).await? {
        Some(session) => Ok(session),
        None => {
            tracing::debug!(code = AppError::NotSignedIn.code(), "Unknown access token");
            Err(AppError::NotSignedIn)
        }
    }
}

/// Look up the session behind a token and require it to be live.
///
/// `action` completes the signed-out message, e.g. "edit an answer".
pub async fn require_active_session(
    sessions: &dyn SessionRepository,
    token: &str,
    action: &str,
) -> AppResult<Session> {
    let session = authenticate(sessions, token).await?;
    ensure_active(session, action)
}

/// Reject a session the user has signed out of.
pub fn ensure_active(session: Session, action: &str) -> AppResult<Session> {
    if session.is_signed_out() {
        tracing::debug!(user_id = %session.user.id, "Signed-out session rejected");
        return Err(AppError::signed_out(action));
    }
    Ok(session)
}

/// Require the acting user to hold `role`.
pub fn require_role(session: &Session, role: UserRole, message: &str) -> AppResult<()> {
    if session.user.has_role(role) {
        return Ok(());
    }
    deny(session, message)
}

/// Require the acting user to be `owner_id`, with no role override.
pub fn require_owner(session: &Session, owner_id: Uuid, message: &str) -> AppResult<()> {
    if session.user.id == owner_id {
        return Ok(());
    }
    deny(session, message)
}

/// Require the acting user to be `owner_id` or to hold `role`.
pub fn require_owner_or_role(
    session: &Session,
    owner_id: Uuid,
    role: UserRole,
    message: &str,
) -> AppResult<()> {
    if session.user.id == owner_id || session.user.has_role(role) {
        return Ok(());
    }
    deny(session, message)
}

fn deny(session: &Session, message: &str) -> AppResult<()> {
    tracing::debug!(user_id = %session.user.id, role = %session.user.role, "Access denied");
    Err(AppError::forbidden(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use common::ErrorKind;
    use domain::User;
    use mockall::predicate::eq;

    use crate::repository::MockSessionRepository;

    fn user(role: UserRole) -> User {
        User {
            id: Uuid::new_v4(),
            role,
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            user_name: "tester".to_string(),
            email: "test@example.com".to_string(),
            country: None,
            about_me: None,
            dob: None,
            contact_number: None,
        }
    }

    fn session(role: UserRole, signed_out: bool) -> Session {
        Session {
            token: "token".to_string(),
            user: user(role),
            login_at: Utc::now(),
            logout_at: signed_out.then(Utc::now),
        }
    }

    #[tokio::test]
    async fn test_unknown_token_is_not_signed_in() {
        let mut sessions = MockSessionRepository::new();
        sessions
            .expect_find_by_token()
            .with(eq("missing"))
            .returning(|_| Ok(None));

        let err = require_active_session(&sessions, "missing", "edit an answer")
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotSignedIn);
        assert_eq!(err.code(), "ATHR-001");
    }

    #[tokio::test]
    async fn test_signed_out_session_is_rejected_with_action() {
        let mut sessions = MockSessionRepository::new();
        sessions
            .expect_find_by_token()
            .returning(|_| Ok(Some(session(UserRole::Admin, true))));

        let err = require_active_session(&sessions, "token", "get user details")
            .await
            .unwrap_err();

        assert_eq!(err.code(), "ATHR-002");
        assert_eq!(
            err.user_message(),
            "User is signed out. Sign in first to get user details"
        );
    }

    #[tokio::test]
    async fn test_active_session_passes() {
        let mut sessions = MockSessionRepository::new();
        sessions
            .expect_find_by_token()
            .times(1)
            .returning(|_| Ok(Some(session(UserRole::NonAdmin, false))));

        let session = require_active_session(&sessions, "token", "post an answer")
            .await
            .unwrap();

        assert!(session.is_active());
    }

    #[tokio::test]
    async fn test_store_fault_is_not_disguised() {
        let mut sessions = MockSessionRepository::new();
        sessions
            .expect_find_by_token()
            .returning(|_| Err(AppError::internal("connection reset")));

        let err = authenticate(&sessions, "token").await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Internal);
    }

    #[test]
    fn test_require_role() {
        let admin = session(UserRole::Admin, false);
        let member = session(UserRole::NonAdmin, false);

        assert!(require_role(&admin, UserRole::Admin, "admins only").is_ok());
        let err = require_role(&member, UserRole::Admin, "admins only").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Forbidden);
        assert_eq!(err.user_message(), "admins only");
    }

    #[test]
    fn test_require_owner_ignores_role() {
        let admin = session(UserRole::Admin, false);

        assert!(require_owner(&admin, admin.user.id, "owner only").is_ok());
        assert!(require_owner(&admin, Uuid::new_v4(), "owner only").is_err());
    }

    #[test]
    fn test_require_owner_or_role() {
        let admin = session(UserRole::Admin, false);
        let member = session(UserRole::NonAdmin, false);
        let someone_else = Uuid::new_v4();

        assert!(require_owner_or_role(&member, member.user.id, UserRole::Admin, "x").is_ok());
        assert!(require_owner_or_role(&admin, someone_else, UserRole::Admin, "x").is_ok());
        assert!(require_owner_or_role(&admin, admin.user.id, UserRole::Admin, "x").is_ok());

        let err =
            require_owner_or_role(&member, someone_else, UserRole::Admin, "x").unwrap_err();
        assert_eq!(err.code(), "ATHR-003");
    }
}
