//! Question lookups.

use async_trait::async_trait;
use sea_orm::{DatabaseTransaction, EntityTrait};
use uuid::Uuid;

use super::entities::question::Entity as QuestionEntity;
use common::AppResult;
use domain::Question;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Question repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Find question by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Question>>;
}

/// SeaORM question repository bound to a transaction
pub struct QuestionStore<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> QuestionStore<'a> {
    pub fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }
}

#[async_trait]
impl QuestionRepository for QuestionStore<'_> {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Question>> {
        let result = QuestionEntity::find_by_id(id).one(self.txn).await?;
        Ok(result.map(Question::from))
    }
}
