//! Profile service - read-only user details.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppError, AppResult};
use domain::UserProfile;

use super::guard;
use super::parse_id;
use crate::infra::UnitOfWork;
use crate::with_transaction;

const ACTION_GET_PROFILE: &str = "get user details";

/// Profile service trait for dependency injection.
#[async_trait]
pub trait ProfileService: Send + Sync {
    /// Any signed-in user may view any profile
    async fn get_profile(&self, user_id: &str, token: &str) -> AppResult<UserProfile>;
}

/// Concrete implementation of ProfileService using Unit of Work.
pub struct ProfileManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> ProfileManager<U> {
    /// Create new profile service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> ProfileService for ProfileManager<U> {
    async fn get_profile(&self, user_id: &str, token: &str) -> AppResult<UserProfile> {
        let token = token.to_string();
        let user_id = user_id.to_string();

        with_transaction!(self.uow, |ctx| {
            guard::require_active_session(ctx.sessions(), &token, ACTION_GET_PROFILE).await?;

            let user = match parse_id(&user_id) {
                Some(id) => ctx.users().find_by_id(id).await?,
                None => None,
            };
            user.map(UserProfile::from).ok_or(AppError::UserNotFound)
        })
    }
}
