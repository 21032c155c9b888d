//! Per-request database session source.
//!
//! Handlers acquire sessions through the `SessionProvider` held in
//! `AppState`. The pool-backed `Database` is the production provider.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};

use common::AppResult;

use super::Database;

/// Source of database sessions for request handling.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Acquire a session for one unit of work.
    async fn session(&self) -> AppResult<Arc<DatabaseConnection>>;

    /// Check connectivity by executing a trivial statement on a fresh session.
    async fn ping(&self) -> AppResult<()> {
        let session = self.session().await?;
        session
            .execute(Statement::from_string(
                session.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }
}

#[async_trait]
impl SessionProvider for Database {
    async fn session(&self) -> AppResult<Arc<DatabaseConnection>> {
        Ok(self.get_connection())
    }
}
