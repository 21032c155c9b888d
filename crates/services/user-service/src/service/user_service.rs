//! User service - Handles user lookup use cases.
//!
//! SOLID (SRP): Handles user-related use cases only. All query
//! construction stays in the repository.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppResult, OptionExt};
use domain::{validate_first_name, validate_license_plate, User};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get user by first name
    async fn get_user(&self, name: &str) -> AppResult<User>;

    /// Get user by license plate
    async fn get_user_by_license_plate(&self, plate: &str) -> AppResult<User>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn get_user(&self, name: &str) -> AppResult<User> {
        let name = validate_first_name(name)?;
        self.repo.get_by_name(name).await?.ok_or_not_found()
    }

    async fn get_user_by_license_plate(&self, plate: &str) -> AppResult<User> {
        let plate = validate_license_plate(plate)?;
        self.repo
            .get_by_license_plate(&plate)
            .await?
            .ok_or_not_found()
    }
}
