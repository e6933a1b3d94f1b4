//! Service Container - centralized service access.

use std::sync::Arc;

use super::{AdminService, AnswerService, ProfileService};
use crate::infra::Persistence;

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get answer service
    fn answers(&self) -> Arc<dyn AnswerService>;

    /// Get admin service
    fn admin(&self) -> Arc<dyn AdminService>;

    /// Get profile service
    fn profiles(&self) -> Arc<dyn ProfileService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    answer_service: Arc<dyn AnswerService>,
    admin_service: Arc<dyn AdminService>,
    profile_service: Arc<dyn ProfileService>,
}

impl Services {
    /// Create a new service container from already built services
    pub fn new(
        answer_service: Arc<dyn AnswerService>,
        admin_service: Arc<dyn AdminService>,
        profile_service: Arc<dyn ProfileService>,
    ) -> Self {
        Self {
            answer_service,
            admin_service,
            profile_service,
        }
    }

    /// Create service container from a database connection.
    ///
    /// All services share one `Persistence` unit of work.
    pub fn from_connection(db: sea_orm::DatabaseConnection) -> Self {
        use super::{AdminManager, AnswerManager, ProfileManager};

        let uow = Arc::new(Persistence::new(db));

        Self {
            answer_service: Arc::new(AnswerManager::new(uow.clone())),
            admin_service: Arc::new(AdminManager::new(uow.clone())),
            profile_service: Arc::new(ProfileManager::new(uow)),
        }
    }
}

impl ServiceContainer for Services {
    fn answers(&self) -> Arc<dyn AnswerService> {
        self.answer_service.clone()
    }

    fn admin(&self) -> Arc<dyn AdminService> {
        self.admin_service.clone()
    }

    fn profiles(&self) -> Arc<dyn ProfileService> {
        self.profile_service.clone()
    }
}
