//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{
    CATEGORY_CHILDREN, CATEGORY_ELDERLY, CATEGORY_MIDDLE_AGE, CATEGORY_YOUNG_ADULT,
    CHILDREN_MAX_AGE, MIDDLE_AGE_MAX_AGE, YOUNG_ADULT_MAX_AGE,
};
use crate::error::{DomainError, DomainResult};

/// Age band a user falls into.
///
/// Ordered from youngest to oldest. Each upper bound is inclusive, so an age
/// sitting exactly on a boundary belongs to the lower band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AgeCategory {
    Children,
    YoungAdult,
    MiddleAge,
    Elderly,
}

impl AgeCategory {
    /// Stable string form, as stored in the `role` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeCategory::Children => CATEGORY_CHILDREN,
            AgeCategory::YoungAdult => CATEGORY_YOUNG_ADULT,
            AgeCategory::MiddleAge => CATEGORY_MIDDLE_AGE,
            AgeCategory::Elderly => CATEGORY_ELDERLY,
        }
    }

    /// Parse the stored string form. Unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            CATEGORY_CHILDREN => Some(AgeCategory::Children),
            CATEGORY_YOUNG_ADULT => Some(AgeCategory::YoungAdult),
            CATEGORY_MIDDLE_AGE => Some(AgeCategory::MiddleAge),
            CATEGORY_ELDERLY => Some(AgeCategory::Elderly),
            _ => None,
        }
    }
}

impl std::fmt::Display for AgeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map an age to its category.
///
/// `[0,18]` CHILDREN, `(18,35]` YOUNG_ADULT, `(35,55]` MIDDLE_AGE,
/// `(55,∞)` ELDERLY. Negative ages are rejected with [`DomainError::InvalidAge`].
pub fn classify_age(age: i32) -> DomainResult<AgeCategory> {
    match age {
        a if a < 0 => Err(DomainError::InvalidAge(a)),
        0..=CHILDREN_MAX_AGE => Ok(AgeCategory::Children),
        a if a <= YOUNG_ADULT_MAX_AGE => Ok(AgeCategory::YoungAdult),
        a if a <= MIDDLE_AGE_MAX_AGE => Ok(AgeCategory::MiddleAge),
        _ => Ok(AgeCategory::Elderly),
    }
}

/// User domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub age: i32,
    pub role: Option<AgeCategory>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a freshly generated id.
    pub fn new(email: String, password_hash: String, age: i32, role: Option<AgeCategory>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            age,
            role,
            created_at: Utc::now(),
        }
    }
}

/// Data needed to insert a user. The password is already hashed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub age: i32,
    pub role: Option<AgeCategory>,
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// Unique user identifier
    pub id: Uuid,
    /// User email address
    pub email: String,
    /// User age in years
    pub age: i32,
    /// Age category assigned at registration
    pub role: Option<AgeCategory>,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            age: user.age,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            age: user.age,
            role: user.role,
            created_at: user.created_at,
        }
    }
}
