//! Unit of Work pattern implementation.
//!
//! Every forum operation runs its guard checks, existence checks and
//! mutation through one `TransactionContext`, so the whole check-then-act
//! sequence commits or rolls back as a unit.

use std::future::Future;
use std::pin::Pin;

use async_trait::async_trait;
use sea_orm::{AccessMode, DatabaseConnection, IsolationLevel, TransactionTrait};

use crate::repository::{
    AnswerRepository, AnswerStore, QuestionRepository, QuestionStore, SessionRepository,
    SessionStore, UserRepository, UserStore,
};
use common::{AppError, AppResult};

/// Boxed future returned by a transaction body.
pub type TxFuture<'a, T> = Pin<Box<dyn Future<Output = AppResult<T>> + Send + 'a>>;

/// Unit of Work trait for dependency injection.
///
/// Not object safe because of the generic closure; services take it as a
/// type parameter instead.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Execute a closure within a transaction.
    ///
    /// The transaction is committed on success or rolled back on error.
    /// Uses ReadCommitted isolation, enough for read-only operations.
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send;

    /// Execute a closure within a transaction with serializable isolation.
    ///
    /// Used by every mutating operation: a concurrent writer cannot change
    /// what the checks saw before the mutation lands.
    async fn transaction_serializable<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send;
}

/// Transaction context providing repository access within a transaction.
///
/// All repository operations performed through this context are part of the
/// same transaction.
#[derive(Clone, Copy)]
pub struct TransactionContext<'a> {
    sessions: &'a dyn SessionRepository,
    users: &'a dyn UserRepository,
    questions: &'a dyn QuestionRepository,
    answers: &'a dyn AnswerRepository,
}

impl<'a> TransactionContext<'a> {
    /// Bundle repositories that share one transaction
    pub fn new(
        sessions: &'a dyn SessionRepository,
        users: &'a dyn UserRepository,
        questions: &'a dyn QuestionRepository,
        answers: &'a dyn AnswerRepository,
    ) -> Self {
        Self {
            sessions,
            users,
            questions,
            answers,
        }
    }

    pub fn sessions(&self) -> &'a dyn SessionRepository {
        self.sessions
    }

    pub fn users(&self) -> &'a dyn UserRepository {
        self.users
    }

    pub fn questions(&self) -> &'a dyn QuestionRepository {
        self.questions
    }

    pub fn answers(&self) -> &'a dyn AnswerRepository {
        self.answers
    }
}

/// SeaORM implementation of UnitOfWork
pub struct Persistence {
    db: DatabaseConnection,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Internal transaction execution with configurable isolation level
    async fn execute_transaction<F, T>(&self, isolation: IsolationLevel, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send,
    {
        let txn = self
            .db
            .begin_with_config(Some(isolation), Some(AccessMode::ReadWrite))
            .await
            .map_err(AppError::from)?;

        let result = {
            let sessions = SessionStore::new(&txn);
            let users = UserStore::new(&txn);
            let questions = QuestionStore::new(&txn);
            let answers = AnswerStore::new(&txn);

            f(TransactionContext::new(&sessions, &users, &questions, &answers)).await
        };

        match result {
            Ok(value) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(value)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send,
    {
        self.execute_transaction(IsolationLevel::ReadCommitted, f).await
    }

    async fn transaction_serializable<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send,
    {
        self.execute_transaction(IsolationLevel::Serializable, f).await
    }
}

/// Shorthand for running a transaction body.
#[macro_export]
macro_rules! with_transaction {
    ($uow:expr, |$ctx:ident| $body:expr) => {
        $uow.transaction(move |$ctx| Box::pin(async move { $body })).await
    };
}
