//! Forum services layer - use cases behind every endpoint.
//!
//! Each service runs the guard, the existence checks and the mutation inside
//! one unit-of-work transaction.

mod admin_service;
mod answer_service;
pub mod container;
pub mod guard;
mod profile_service;

use uuid::Uuid;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use admin_service::{AdminManager, AdminService};
pub use answer_service::{AnswerManager, AnswerService};
pub use profile_service::{ProfileManager, ProfileService};

/// Ids arrive as raw path text; one that is not a UUID names nothing.
pub(crate) fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw.trim()).ok()
}
