//! Session record binding an opaque token to a signed-in user.

use chrono::{DateTime, Utc};

use crate::user::User;

/// A session issued at sign-in.
///
/// Once `logout_at` is set the session never authenticates again.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: User,
    pub login_at: DateTime<Utc>,
    pub logout_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Check if the session is still live
    pub fn is_active(&self) -> bool {
        self.logout_at.is_none()
    }

    /// Check if the user has signed out of this session
    pub fn is_signed_out(&self) -> bool {
        self.logout_at.is_some()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &"[REDACTED]")
            .field("user", &self.user.id)
            .field("login_at", &self.login_at)
            .field("logout_at", &self.logout_at)
            .finish()
    }
}
