//! Application state - dependency injection container.

use std::sync::Arc;

use crate::infra::Database;
use crate::service::{AdminService, AnswerService, ProfileService, ServiceContainer, Services};

/// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    /// Answer service
    pub answer_service: Arc<dyn AnswerService>,
    /// Admin service
    pub admin_service: Arc<dyn AdminService>,
    /// Profile service
    pub profile_service: Arc<dyn ProfileService>,
    /// Database handle for health checks; absent when services are injected
    pub database: Option<Arc<Database>>,
}

impl AppState {
    /// Create application state backed by the database.
    pub fn from_database(database: Arc<Database>) -> Self {
        let container = Services::from_connection(database.get_connection());

        Self {
            database: Some(database),
            ..Self::from_container(&container)
        }
    }

    /// Create application state from any service container.
    pub fn from_container(container: &dyn ServiceContainer) -> Self {
        Self {
            answer_service: container.answers(),
            admin_service: container.admin(),
            profile_service: container.profiles(),
            database: None,
        }
    }
}
