//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Age Categories
// =============================================================================

/// Upper bound (inclusive) of the CHILDREN band
pub const CHILDREN_MAX_AGE: i32 = 18;

/// Upper bound (inclusive) of the YOUNG_ADULT band
pub const YOUNG_ADULT_MAX_AGE: i32 = 35;

/// Upper bound (inclusive) of the MIDDLE_AGE band
pub const MIDDLE_AGE_MAX_AGE: i32 = 55;

pub const CATEGORY_CHILDREN: &str = "CHILDREN";
pub const CATEGORY_YOUNG_ADULT: &str = "YOUNG_ADULT";
pub const CATEGORY_MIDDLE_AGE: &str = "MIDDLE_AGE";
pub const CATEGORY_ELDERLY: &str = "ELDERLY";

// =============================================================================
// Passwords
// =============================================================================

/// bcrypt cost factor used for every stored password
pub const BCRYPT_COST: u32 = 10;

// =============================================================================
// Authentication
// =============================================================================

/// Default JWT token expiration in hours
pub const DEFAULT_JWT_EXPIRATION_HOURS: i64 = 24;

/// Longest accepted JWT token expiration in hours (one year)
pub const MAX_JWT_EXPIRATION_HOURS: i64 = 24 * 365;

/// Minimum JWT secret length (security requirement)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Authorization header prefix for Bearer tokens
pub const BEARER_TOKEN_PREFIX: &str = "Bearer ";

// =============================================================================
// Client-facing messages
// =============================================================================

pub const MSG_INVALID_AGE: &str = "Invalid age";
pub const MSG_KEY_NOT_FOUND: &str = "Key not found";
