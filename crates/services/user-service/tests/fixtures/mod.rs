//! Shared fixtures for user service integration tests.
//!
//! Three levels of substitution:
//! - a SeaORM mock session scripted to return the fixed user row
//! - a repository stand-in returning the fixed user for every lookup
//! - an HTTP app whose session provider hands out the mock session

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, MockExecResult};

use common::{AppError, AppResult};
use domain::User;
use user_service_lib::http::{create_app, AppState};
use user_service_lib::infra::SessionProvider;
use user_service_lib::repository::entities::UserModel;
use user_service_lib::repository::{UserRepository, UserStore};

pub const FIRST_NAME: &str = "Gabrielzim";
pub const EMAIL: &str = "talk@gabrielaranha.com";
pub const LICENSE_PLATE: &str = "ABC1D23";

pub fn fixed_user() -> User {
    User::new(FIRST_NAME, EMAIL).with_license_plate(LICENSE_PLATE)
}

/// Mock session whose next query resolves to `user` (or to no rows).
pub fn mocked_session(user: Option<&User>) -> Arc<DatabaseConnection> {
    let rows: Vec<UserModel> = user.map(UserModel::from_user).into_iter().collect();

    let session = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([rows])
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();
    Arc::new(session)
}

/// Repository over a mocked session.
pub fn user_repository_mocking_session() -> UserStore {
    UserStore::new(mocked_session(Some(&fixed_user())))
}

/// Repository stand-in that answers every lookup with the same user.
pub struct FixedUserRepository {
    user: User,
}

#[async_trait]
impl UserRepository for FixedUserRepository {
    async fn get_by_name(&self, _name: &str) -> AppResult<Option<User>> {
        Ok(Some(self.user.clone()))
    }

    async fn get_by_license_plate(&self, _plate: &str) -> AppResult<Option<User>> {
        Ok(Some(self.user.clone()))
    }
}

pub fn user_repository() -> FixedUserRepository {
    FixedUserRepository { user: fixed_user() }
}

/// Session provider handing out a fresh mock session per request.
pub struct FixedSessionProvider {
    user: Option<User>,
}

impl FixedSessionProvider {
    pub fn returning(user: User) -> Self {
        Self { user: Some(user) }
    }

    pub fn empty() -> Self {
        Self { user: None }
    }
}

#[async_trait]
impl SessionProvider for FixedSessionProvider {
    async fn session(&self) -> AppResult<Arc<DatabaseConnection>> {
        Ok(mocked_session(self.user.as_ref()))
    }
}

/// Session provider handing every request the same shared session, as the
/// pool-backed `Database` does.
pub struct SharedSessionProvider {
    session: Arc<DatabaseConnection>,
}

impl SharedSessionProvider {
    /// Shared session scripted to answer `lookups` queries with `user`.
    pub fn returning(user: User, lookups: usize) -> Self {
        let rows = (0..lookups).map(|_| vec![UserModel::from_user(&user)]);
        let session = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(rows)
            .into_connection();
        Self {
            session: Arc::new(session),
        }
    }
}

#[async_trait]
impl SessionProvider for SharedSessionProvider {
    async fn session(&self) -> AppResult<Arc<DatabaseConnection>> {
        Ok(Arc::clone(&self.session))
    }
}

/// Session provider that cannot reach the database.
pub struct UnreachableSessionProvider;

#[async_trait]
impl SessionProvider for UnreachableSessionProvider {
    async fn session(&self) -> AppResult<Arc<DatabaseConnection>> {
        Err(AppError::service_unavailable("database"))
    }
}

/// HTTP app with its session provider overridden to the fixed-user fake.
pub fn client() -> Router {
    client_with(FixedSessionProvider::returning(fixed_user()))
}

pub fn client_with(provider: impl SessionProvider + 'static) -> Router {
    create_app(AppState::new(Arc::new(provider)))
}
