//! Answer service - create, edit, delete and list answers.
//!
//! Each operation runs inside a single transaction: the session check, the
//! existence check, the ownership check and the write all see one snapshot.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::{Answer, AnswerDetails, Question, UserRole};

use super::guard;
use super::parse_id;
use crate::infra::{TransactionContext, UnitOfWork};
use crate::with_transaction;

const ACTION_CREATE: &str = "post an answer";
const ACTION_EDIT: &str = "edit an answer";
const ACTION_DELETE: &str = "delete an answer";
const ACTION_LIST: &str = "get the answers";

const QUESTION_INVALID: &str = "The question entered is invalid";
const QUESTION_NOT_VIEWABLE: &str =
    "The question with entered uuid whose details are to be seen does not exist";
const ONLY_OWNER_CAN_EDIT: &str = "Only the answer owner can edit the answer";
const ONLY_OWNER_OR_ADMIN_CAN_DELETE: &str = "Only the answer owner or admin can delete the answer";

/// Answer service trait for dependency injection.
#[async_trait]
pub trait AnswerService: Send + Sync {
    /// Post an answer to a question; any signed-in user may answer.
    ///
    /// `content` may carry a request body failure; it is reported only after
    /// the session and question checks pass.
    async fn create_answer(
        &self,
        question_id: &str,
        content: AppResult<String>,
        token: &str,
    ) -> AppResult<Uuid>;

    /// Replace an answer's content; only its author may do so.
    ///
    /// A failed `content` is reported after the ownership check.
    async fn edit_answer(
        &self,
        answer_id: &str,
        content: AppResult<String>,
        token: &str,
    ) -> AppResult<Uuid>;

    /// Remove an answer; its author or an admin may do so
    async fn delete_answer(&self, answer_id: &str, token: &str) -> AppResult<Uuid>;

    /// All answers to a question in the order they were posted
    async fn list_answers(&self, question_id: &str, token: &str)
        -> AppResult<Vec<AnswerDetails>>;
}

/// Concrete implementation of AnswerService using Unit of Work.
pub struct AnswerManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> AnswerManager<U> {
    /// Create new answer service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> AnswerService for AnswerManager<U> {
    async fn create_answer(
        &self,
        question_id: &str,
        content: AppResult<String>,
        token: &str,
    ) -> AppResult<Uuid> {
        let token = token.to_string();
        let question_id = question_id.to_string();

        let answer = self
            .uow
            .transaction_serializable(move |ctx| {
                Box::pin(async move {
                    let session =
                        guard::require_active_session(ctx.sessions(), &token, ACTION_CREATE)
                            .await?;
                    let question = find_question(ctx, &question_id, QUESTION_INVALID).await?;

                    let answer = Answer::new(content?, session.user.id, question.id)?;
                    ctx.answers().create(answer).await
                })
            })
            .await?;

        tracing::info!(
            answer_id = %answer.id,
            question_id = %answer.question_id,
            author_id = %answer.author_id,
            "Answer created"
        );
        Ok(answer.id)
    }

    async fn edit_answer(
        &self,
        answer_id: &str,
        content: AppResult<String>,
        token: &str,
    ) -> AppResult<Uuid> {
        let token = token.to_string();
        let answer_id = answer_id.to_string();

        let answer = self
            .uow
            .transaction_serializable(move |ctx| {
                Box::pin(async move {
                    let session =
                        guard::require_active_session(ctx.sessions(), &token, ACTION_EDIT).await?;
                    let mut answer = find_answer(ctx, &answer_id).await?;

                    guard::require_owner(&session, answer.author_id, ONLY_OWNER_CAN_EDIT)?;

                    answer.revise(content?)?;
                    ctx.answers().update(answer).await
                })
            })
            .await?;

        tracing::info!(answer_id = %answer.id, "Answer edited");
        Ok(answer.id)
    }

    async fn delete_answer(&self, answer_id: &str, token: &str) -> AppResult<Uuid> {
        let token = token.to_string();
        let answer_id = answer_id.to_string();

        let (deleted, deleted_by) = self
            .uow
            .transaction_serializable(move |ctx| {
                Box::pin(async move {
                    let session =
                        guard::require_active_session(ctx.sessions(), &token, ACTION_DELETE)
                            .await?;
                    let answer = find_answer(ctx, &answer_id).await?;

                    guard::require_owner_or_role(
                        &session,
                        answer.author_id,
                        UserRole::Admin,
                        ONLY_OWNER_OR_ADMIN_CAN_DELETE,
                    )?;

                    ctx.answers().delete(answer.id).await?;
                    Ok((answer.id, session.user.id))
                })
            })
            .await?;

        tracing::info!(answer_id = %deleted, deleted_by = %deleted_by, "Answer deleted");
        Ok(deleted)
    }

    async fn list_answers(
        &self,
        question_id: &str,
        token: &str,
    ) -> AppResult<Vec<AnswerDetails>> {
        let token = token.to_string();
        let question_id = question_id.to_string();

        with_transaction!(self.uow, |ctx| {
            guard::require_active_session(ctx.sessions(), &token, ACTION_LIST).await?;
            let question = find_question(ctx, &question_id, QUESTION_NOT_VIEWABLE).await?;

            let answers = ctx.answers().list_by_question(question.id).await?;
            Ok(answers
                .into_iter()
                .map(|answer| AnswerDetails::new(answer, &question))
                .collect())
        })
    }
}

/// Resolve a question id, failing with `message` when it names no question.
async fn find_question(
    ctx: TransactionContext<'_>,
    raw_id: &str,
    message: &str,
) -> AppResult<Question> {
    let question = match parse_id(raw_id) {
        Some(id) => ctx.questions().find_by_id(id).await?,
        None => None,
    };
    question.ok_or_else(|| AppError::invalid_question(message))
}

/// Resolve an answer id, failing with `AnswerNotFound` when it names no answer.
async fn find_answer(ctx: TransactionContext<'_>, raw_id: &str) -> AppResult<Answer> {
    let answer = match parse_id(raw_id) {
        Some(id) => ctx.answers().find_by_id(id).await?,
        None => None,
    };
    answer.ok_or(AppError::AnswerNotFound)
}
