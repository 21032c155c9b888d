//! User repository: read-only lookups over an injected SeaORM session.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use super::entities::user::{self, Entity as UserEntity};
use common::{AppError, AppResult};
use domain::{normalize_license_plate, User};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Lookups return the first matching row, or `None` when nothing matches.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by first name
    async fn get_by_name(&self, name: &str) -> AppResult<Option<User>>;

    /// Find a user by license plate (compared in normalized form)
    async fn get_by_license_plate(&self, plate: &str) -> AppResult<Option<User>>;
}

/// Concrete implementation of UserRepository backed by a database session
pub struct UserStore {
    db: Arc<DatabaseConnection>,
}

impl UserStore {
    /// Create new repository instance over the given session
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn get_by_name(&self, name: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::FirstName.eq(name))
            .one(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        tracing::debug!(found = result.is_some(), "user lookup by name");
        Ok(result.map(User::from))
    }

    async fn get_by_license_plate(&self, plate: &str) -> AppResult<Option<User>> {
        let plate = normalize_license_plate(plate);
        let result = UserEntity::find()
            .filter(user::Column::LicensePlate.eq(plate))
            .one(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        tracing::debug!(found = result.is_some(), "user lookup by license plate");
        Ok(result.map(User::from))
    }
}
