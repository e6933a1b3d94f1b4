//! Shared fixtures: an in-memory unit of work and seeding helpers.

#![allow(dead_code)]

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use axum::Router;
use chrono::{Duration, Utc};
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::{Answer, Question, Session, User, UserRole};
use forum_service_lib::api::{create_router, AppState};
use forum_service_lib::infra::{TransactionContext, TxFuture, UnitOfWork};
use forum_service_lib::repository::{
    AnswerRepository, QuestionRepository, SessionRepository, UserRepository,
};
use forum_service_lib::service::{AdminManager, AnswerManager, ProfileManager, Services};

#[derive(Clone, Default)]
struct ForumData {
    sessions: Vec<Session>,
    users: Vec<User>,
    questions: Vec<Question>,
    answers: Vec<Answer>,
}

/// In-memory store implementing every repository and the unit of work.
///
/// A failed transaction restores the snapshot taken when it began, and user
/// deletion cascades the way the shipped schema does.
#[derive(Default)]
pub struct InMemoryForum {
    data: Mutex<ForumData>,
}

impl InMemoryForum {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn data(&self) -> MutexGuard<'_, ForumData> {
        self.data.lock().unwrap()
    }

    pub fn add_user(&self, role: UserRole, user_name: &str) -> User {
        let user = User {
            id: Uuid::new_v4(),
            role,
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            user_name: user_name.to_string(),
            email: format!("{}@example.com", user_name),
            country: Some("India".to_string()),
            about_me: None,
            dob: None,
            contact_number: Some("0123456789".to_string()),
        };
        self.data().users.push(user.clone());
        user
    }

    /// Issue a live session for the user and return its token
    pub fn sign_in(&self, user: &User) -> String {
        let token = format!("token-{}", Uuid::new_v4());
        self.data().sessions.push(Session {
            token: token.clone(),
            user: user.clone(),
            login_at: Utc::now(),
            logout_at: None,
        });
        token
    }

    pub fn sign_out(&self, token: &str) {
        let mut data = self.data();
        if let Some(session) = data.sessions.iter_mut().find(|s| s.token == token) {
            session.logout_at = Some(Utc::now());
        }
    }

    pub fn add_question(&self, author: &User, content: &str) -> Question {
        let question = Question {
            id: Uuid::new_v4(),
            content: content.to_string(),
            author_id: author.id,
            created_at: Utc::now(),
        };
        self.data().questions.push(question.clone());
        question
    }

    /// Store an answer directly, spacing timestamps so order is deterministic
    pub fn add_answer(&self, author: &User, question: &Question, content: &str) -> Answer {
        let mut data = self.data();
        let offset = Duration::milliseconds(data.answers.len() as i64);
        let answer = Answer {
            id: Uuid::new_v4(),
            content: content.to_string(),
            created_at: Utc::now() + offset,
            author_id: author.id,
            question_id: question.id,
        };
        data.answers.push(answer.clone());
        answer
    }

    pub fn answer(&self, id: Uuid) -> Option<Answer> {
        self.data().answers.iter().find(|a| a.id == id).cloned()
    }

    pub fn answer_count(&self) -> usize {
        self.data().answers.len()
    }

    pub fn user_exists(&self, id: Uuid) -> bool {
        self.data().users.iter().any(|u| u.id == id)
    }

    pub fn session_count(&self) -> usize {
        self.data().sessions.len()
    }
}

#[async_trait]
impl SessionRepository for InMemoryForum {
    async fn find_by_token(&self, token: &str) -> AppResult<Option<Session>> {
        Ok(self.data().sessions.iter().find(|s| s.token == token).cloned())
    }
}

#[async_trait]
impl UserRepository for InMemoryForum {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.data().users.iter().find(|u| u.id == id).cloned())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut data = self.data();
        let before = data.users.len();
        data.users.retain(|u| u.id != id);
        if data.users.len() == before {
            return Err(AppError::UserNotFound);
        }

        let orphaned: Vec<Uuid> = data
            .questions
            .iter()
            .filter(|q| q.author_id == id)
            .map(|q| q.id)
            .collect();
        data.sessions.retain(|s| s.user.id != id);
        data.questions.retain(|q| q.author_id != id);
        data.answers
            .retain(|a| a.author_id != id && !orphaned.contains(&a.question_id));
        Ok(())
    }
}

#[async_trait]
impl QuestionRepository for InMemoryForum {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Question>> {
        Ok(self.data().questions.iter().find(|q| q.id == id).cloned())
    }
}

#[async_trait]
impl AnswerRepository for InMemoryForum {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Answer>> {
        Ok(self.answer(id))
    }

    async fn create(&self, answer: Answer) -> AppResult<Answer> {
        self.data().answers.push(answer.clone());
        Ok(answer)
    }

    async fn update(&self, answer: Answer) -> AppResult<Answer> {
        let mut data = self.data();
        let existing = data
            .answers
            .iter_mut()
            .find(|a| a.id == answer.id)
            .ok_or(AppError::AnswerNotFound)?;
        existing.content = answer.content;
        Ok(existing.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut data = self.data();
        let before = data.answers.len();
        data.answers.retain(|a| a.id != id);
        if data.answers.len() == before {
            return Err(AppError::AnswerNotFound);
        }
        Ok(())
    }

    async fn list_by_question(&self, question_id: Uuid) -> AppResult<Vec<Answer>> {
        let mut answers: Vec<Answer> = self
            .data()
            .answers
            .iter()
            .filter(|a| a.question_id == question_id)
            .cloned()
            .collect();
        answers.sort_by_key(|a| a.created_at);
        Ok(answers)
    }
}

impl InMemoryForum {
    async fn run<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send,
    {
        let snapshot = self.data().clone();
        let result = f(TransactionContext::new(self, self, self, self)).await;
        if result.is_err() {
            *self.data() = snapshot;
        }
        result
    }
}

#[async_trait]
impl UnitOfWork for InMemoryForum {
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send,
    {
        self.run(f).await
    }

    async fn transaction_serializable<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send,
    {
        self.run(f).await
    }
}

/// Services wired over the in-memory store
pub fn services(forum: &Arc<InMemoryForum>) -> Services {
    Services::new(
        Arc::new(AnswerManager::new(forum.clone())),
        Arc::new(AdminManager::new(forum.clone())),
        Arc::new(ProfileManager::new(forum.clone())),
    )
}

/// Router wired over the in-memory store
pub fn app(forum: &Arc<InMemoryForum>) -> Router {
    create_router(AppState::from_container(&services(forum)))
}

/// A signed-in user together with their token
pub struct Actor {
    pub user: User,
    pub token: String,
}

pub fn signed_in(forum: &InMemoryForum, role: UserRole, user_name: &str) -> Actor {
    let user = forum.add_user(role, user_name);
    let token = forum.sign_in(&user);
    Actor { user, token }
}
