//! Admin service - administrative user management.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::UserRole;

use super::guard;
use super::parse_id;
use crate::infra::UnitOfWork;

const ACTION_DELETE_USER: &str = "delete a user";
const NOT_AN_ADMIN: &str = "Unauthorized Access, Entered user is not an admin";

/// Admin service trait for dependency injection.
#[async_trait]
pub trait AdminService: Send + Sync {
    /// Delete a user account; admins only
    async fn delete_user(&self, user_id: &str, token: &str) -> AppResult<Uuid>;
}

/// Concrete implementation of AdminService using Unit of Work.
pub struct AdminManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> AdminManager<U> {
    /// Create new admin service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> AdminService for AdminManager<U> {
    async fn delete_user(&self, user_id: &str, token: &str) -> AppResult<Uuid> {
        let token = token.to_string();
        let user_id = user_id.to_string();

        let (deleted, admin_id) = self
            .uow
            .transaction_serializable(move |ctx| {
                Box::pin(async move {
                    let session =
                        guard::require_active_session(ctx.sessions(), &token, ACTION_DELETE_USER)
                            .await?;
                    guard::require_role(&session, UserRole::Admin, NOT_AN_ADMIN)?;

                    let target = match parse_id(&user_id) {
                        Some(id) => ctx.users().find_by_id(id).await?,
                        None => None,
                    };
                    let target = target.ok_or(AppError::UserNotFound)?;

                    ctx.users().delete(target.id).await?;
                    Ok((target.id, session.user.id))
                })
            })
            .await?;

        tracing::info!(user_id = %deleted, admin_id = %admin_id, "User deleted");
        Ok(deleted)
    }
}
