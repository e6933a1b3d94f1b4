//! Answer repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseTransaction, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::answer::{self, ActiveModel, Entity as AnswerEntity};
use common::{AppError, AppResult};
use domain::Answer;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Answer repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AnswerRepository: Send + Sync {
    /// Find answer by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Answer>>;

    /// Insert a new answer
    async fn create(&self, answer: Answer) -> AppResult<Answer>;

    /// Persist a changed answer's content
    async fn update(&self, answer: Answer) -> AppResult<Answer>;

    /// Delete answer by ID
    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// All answers to a question, oldest first
    async fn list_by_question(&self, question_id: Uuid) -> AppResult<Vec<Answer>>;
}

/// SeaORM answer repository bound to a transaction
pub struct AnswerStore<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> AnswerStore<'a> {
    pub fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }
}

#[async_trait]
impl AnswerRepository for AnswerStore<'_> {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Answer>> {
        let result = AnswerEntity::find_by_id(id).one(self.txn).await?;
        Ok(result.map(Answer::from))
    }

    async fn create(&self, answer: Answer) -> AppResult<Answer> {
        let model = ActiveModel::from(answer).insert(self.txn).await?;
        Ok(Answer::from(model))
    }

    async fn update(&self, answer: Answer) -> AppResult<Answer> {
        let existing = AnswerEntity::find_by_id(answer.id)
            .one(self.txn)
            .await?
            .ok_or(AppError::AnswerNotFound)?;

        // Only the content is mutable
        let mut active: ActiveModel = existing.into();
        active.content = Set(answer.content);

        let model = active.update(self.txn).await?;
        Ok(Answer::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = AnswerEntity::delete_by_id(id).exec(self.txn).await?;

        if result.rows_affected == 0 {
            return Err(AppError::AnswerNotFound);
        }

        Ok(())
    }

    async fn list_by_question(&self, question_id: Uuid) -> AppResult<Vec<Answer>> {
        let models = AnswerEntity::find()
            .filter(answer::Column::QuestionId.eq(question_id))
            .order_by_asc(answer::Column::CreatedAt)
            .order_by_asc(answer::Column::Id)
            .all(self.txn)
            .await?;

        Ok(models.into_iter().map(Answer::from).collect())
    }
}
