//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::User;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub first_name: String,
    #[sea_orm(unique)]
    pub email: String,
    /// Stored normalized (see `domain::normalize_license_plate`)
    #[sea_orm(unique)]
    pub license_plate: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for User {
    fn from(model: Model) -> Self {
        User {
            first_name: model.first_name,
            email: model.email,
            license_plate: model.license_plate,
        }
    }
}

impl Model {
    /// Build a row for a domain user with a fresh id and timestamps.
    pub fn from_user(user: &User) -> Self {
        let now = chrono::Utc::now();
        Self {
            id: Uuid::new_v4(),
            first_name: user.first_name.clone(),
            email: user.email.clone(),
            license_plate: user.license_plate.clone(),
            created_at: now,
            updated_at: now,
        }
    }
}
