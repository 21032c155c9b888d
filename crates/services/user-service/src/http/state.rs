//! Application state for dependency injection.

use std::sync::Arc;

use common::AppResult;

use crate::infra::SessionProvider;
use crate::repository::UserStore;
use crate::service::UserManager;

/// Application state shared across handlers.
///
/// The session provider is the only injected dependency; repositories
/// and services are assembled per request on top of the session it yields.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<dyn SessionProvider>,
}

impl AppState {
    /// Create new app state.
    pub fn new(sessions: Arc<dyn SessionProvider>) -> Self {
        Self { sessions }
    }

    /// Build a user service over a fresh session.
    pub async fn user_service(&self) -> AppResult<UserManager> {
        let session = self.sessions.session().await?;
        Ok(UserManager::new(Arc::new(UserStore::new(session))))
    }
}
