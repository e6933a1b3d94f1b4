//! Domain layer - Forum entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Records here are shared by the service layer, the repositories and the
//! HTTP adapter.

pub mod answer;
pub mod constants;
pub mod error;
pub mod question;
pub mod session;
pub mod user;

pub use answer::{Answer, AnswerDetails};
pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use question::Question;
pub use session::Session;
pub use user::{User, UserProfile, UserRole};
