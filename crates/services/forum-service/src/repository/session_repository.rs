//! Session lookup by access token.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseTransaction, EntityTrait, QueryFilter};

use super::entities::{user, user_auth};
use common::{AppError, AppResult};
use domain::{Session, User};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Session repository trait for dependency injection.
///
/// Signed-out sessions are returned as well; deciding what they may do is
/// the caller's job.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Find the session issued with this token
    async fn find_by_token(&self, token: &str) -> AppResult<Option<Session>>;
}

/// SeaORM session repository bound to a transaction
pub struct SessionStore<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> SessionStore<'a> {
    pub fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }
}

#[async_trait]
impl SessionRepository for SessionStore<'_> {
    async fn find_by_token(&self, token: &str) -> AppResult<Option<Session>> {
        let row = user_auth::Entity::find()
            .filter(user_auth::Column::AccessToken.eq(token))
            .find_also_related(user::Entity)
            .one(self.txn)
            .await?;

        let Some((auth, owner)) = row else {
            return Ok(None);
        };

        // The foreign key makes this unreachable short of a broken schema
        let owner = owner.ok_or_else(|| {
            AppError::internal(format!("session {} references a missing user", auth.id))
        })?;

        Ok(Some(Session {
            token: auth.access_token,
            user: User::try_from(owner)?,
            login_at: auth.login_at,
            logout_at: auth.logout_at,
        }))
    }
}
