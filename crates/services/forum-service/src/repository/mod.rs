//! Repository layer for data access.
//!
//! Each repository trait is the contract the service layer depends on; the
//! SeaORM stores implement them against one open transaction.

mod answer_repository;
pub mod entities;
mod question_repository;
mod session_repository;
mod user_repository;

pub use answer_repository::{AnswerRepository, AnswerStore};
pub use question_repository::{QuestionRepository, QuestionStore};
pub use session_repository::{SessionRepository, SessionStore};
pub use user_repository::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use answer_repository::MockAnswerRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use question_repository::MockQuestionRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use session_repository::MockSessionRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
