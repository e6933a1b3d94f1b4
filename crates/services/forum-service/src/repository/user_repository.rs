//! User repository implementation.

use async_trait::async_trait;
use sea_orm::{DatabaseTransaction, EntityTrait};
use uuid::Uuid;

use super::entities::user::Entity as UserEntity;
use common::{AppError, AppResult};
use domain::User;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Permanently delete user; content they own goes with them
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// SeaORM user repository bound to a transaction
pub struct UserStore<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> UserStore<'a> {
    pub fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }
}

#[async_trait]
impl UserRepository for UserStore<'_> {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id).one(self.txn).await?;

        result
            .map(User::try_from)
            .transpose()
            .map_err(AppError::from)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = UserEntity::delete_by_id(id).exec(self.txn).await?;

        if result.rows_affected == 0 {
            return Err(AppError::UserNotFound);
        }

        Ok(())
    }
}
