//! User domain entity and lookup key helpers.

use serde::{Deserialize, Serialize};

use crate::constants::{LICENSE_PLATE_SEPARATORS, MAX_FIRST_NAME_LENGTH, MAX_LICENSE_PLATE_LENGTH};
use crate::error::{DomainError, DomainResult};

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct User {
    /// Given name, also used as a lookup key
    #[cfg_attr(feature = "openapi", schema(example = "Gabrielzim"))]
    pub first_name: String,
    /// Contact email address
    #[cfg_attr(feature = "openapi", schema(example = "talk@gabrielaranha.com"))]
    pub email: String,
    /// Registered vehicle plate, stored normalized
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "openapi", schema(example = "ABC1D23"))]
    pub license_plate: Option<String>,
}

impl User {
    /// Create a user without a registered plate
    pub fn new(first_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            email: email.into(),
            license_plate: None,
        }
    }

    /// Attach a license plate (normalized)
    pub fn with_license_plate(mut self, plate: &str) -> Self {
        self.license_plate = Some(normalize_license_plate(plate));
        self
    }
}

/// Canonical form of a license plate: separators removed, ASCII uppercased.
pub fn normalize_license_plate(plate: &str) -> String {
    plate
        .trim()
        .chars()
        .filter(|c| !LICENSE_PLATE_SEPARATORS.contains(c))
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Check a first name before it is used as a lookup key.
pub fn validate_first_name(name: &str) -> DomainResult<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(DomainError::validation("Name is required"));
    }
    if name.chars().count() > MAX_FIRST_NAME_LENGTH {
        return Err(DomainError::validation(format!(
            "Name must be at most {} characters",
            MAX_FIRST_NAME_LENGTH
        )));
    }
    Ok(name)
}

/// Normalize and check a license plate before it is used as a lookup key.
pub fn validate_license_plate(plate: &str) -> DomainResult<String> {
    let plate = normalize_license_plate(plate);
    if plate.is_empty() {
        return Err(DomainError::validation("License plate is required"));
    }
    if plate.len() > MAX_LICENSE_PLATE_LENGTH {
        return Err(DomainError::validation(format!(
            "License plate must be at most {} characters",
            MAX_LICENSE_PLATE_LENGTH
        )));
    }
    if !plate.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(DomainError::validation(
            "License plate may only contain letters and digits",
        ));
    }
    Ok(plate)
}
