//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// User Roles
// =============================================================================

/// Stored value of the administrator role
pub const ROLE_ADMIN: &str = "admin";

/// Stored value of the regular member role
pub const ROLE_NON_ADMIN: &str = "nonadmin";

// =============================================================================
// Validation
// =============================================================================

/// Maximum answer length (matches the `answers.content` column)
pub const MAX_ANSWER_LENGTH: usize = 255;

// =============================================================================
// Authentication
// =============================================================================

/// Optional prefix stripped from the `authorization` header
pub const BEARER_TOKEN_PREFIX: &str = "Bearer ";
