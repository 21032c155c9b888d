//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Lookup keys
// =============================================================================

/// Maximum accepted length of a first name used as a lookup key
pub const MAX_FIRST_NAME_LENGTH: usize = 100;

/// Maximum accepted length of a license plate (after normalization)
pub const MAX_LICENSE_PLATE_LENGTH: usize = 16;

/// Characters stripped from license plates before comparison
pub const LICENSE_PLATE_SEPARATORS: &[char] = &[' ', '-'];
