//! Auth service configuration.

use std::env;

use chrono::Duration;

use common::ConfigError;
use domain::{DEFAULT_JWT_EXPIRATION_HOURS, MAX_JWT_EXPIRATION_HOURS, MIN_JWT_SECRET_LENGTH};

use crate::service::SigningSecret;

/// Secret used by debug builds when `JWT_SECRET` is not set.
const DEV_JWT_SECRET: &str = "dev-secret-key-minimum-32-chars!!";

/// Auth service configuration.
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// JWT secret for signing tokens (min 32 characters)
    pub jwt_secret: SigningSecret,
    /// JWT token expiration in hours
    pub jwt_expiration_hours: i64,
}

impl AuthServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// `JWT_SECRET` is required in release builds. Debug builds fall back to
    /// an insecure development secret with a warning.
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret = match env::var("JWT_SECRET") {
            Ok(secret) => secret,
            Err(_) if cfg!(debug_assertions) => {
                tracing::warn!("JWT_SECRET not set, using insecure default for development");
                DEV_JWT_SECRET.to_string()
            }
            Err(_) => return Err(ConfigError::Missing("JWT_SECRET")),
        };

        let jwt_expiration_hours = match env::var("JWT_EXPIRATION_HOURS") {
            Ok(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: "JWT_EXPIRATION_HOURS",
                reason: format!("'{}' is not a whole number of hours", value),
            })?,
            Err(_) => DEFAULT_JWT_EXPIRATION_HOURS,
        };

        Self::new(secret, jwt_expiration_hours)
    }

    /// Build a configuration, enforcing the minimum secret length and a
    /// token lifetime between one hour and [`MAX_JWT_EXPIRATION_HOURS`].
    pub fn new(secret: impl Into<String>, jwt_expiration_hours: i64) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(ConfigError::Invalid {
                name: "JWT_SECRET",
                reason: format!("must be at least {} characters long", MIN_JWT_SECRET_LENGTH),
            });
        }

        if !(1..=MAX_JWT_EXPIRATION_HOURS).contains(&jwt_expiration_hours) {
            return Err(ConfigError::Invalid {
                name: "JWT_EXPIRATION_HOURS",
                reason: format!(
                    "must be between 1 and {} hours, got {}",
                    MAX_JWT_EXPIRATION_HOURS, jwt_expiration_hours
                ),
            });
        }

        Ok(Self {
            jwt_secret: SigningSecret::new(secret),
            jwt_expiration_hours,
        })
    }

    /// Token lifetime as a duration.
    pub fn token_lifetime(&self) -> Duration {
        Duration::hours(self.jwt_expiration_hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_secret_rejected() {
        let result = AuthServiceConfig::new("too-short", 24);
        assert!(matches!(
            result,
            Err(ConfigError::Invalid { name: "JWT_SECRET", .. })
        ));
    }

    #[test]
    fn test_non_positive_lifetime_rejected() {
        for hours in [0, -5] {
            let result = AuthServiceConfig::new("test-secret-key-for-testing-only-32chars", hours);
            assert!(matches!(
                result,
                Err(ConfigError::Invalid { name: "JWT_EXPIRATION_HOURS", .. })
            ));
        }
    }

    #[test]
    fn test_oversized_lifetime_rejected() {
        let secret = "test-secret-key-for-testing-only-32chars";
        assert!(AuthServiceConfig::new(secret, MAX_JWT_EXPIRATION_HOURS).is_ok());
        assert!(matches!(
            AuthServiceConfig::new(secret, MAX_JWT_EXPIRATION_HOURS + 1),
            Err(ConfigError::Invalid { name: "JWT_EXPIRATION_HOURS", .. })
        ));
        assert!(matches!(
            AuthServiceConfig::new(secret, 2_000_000_000_000),
            Err(ConfigError::Invalid { name: "JWT_EXPIRATION_HOURS", .. })
        ));
    }

    #[test]
    fn test_token_lifetime() {
        let config = AuthServiceConfig::new("test-secret-key-for-testing-only-32chars", 24).unwrap();
        assert_eq!(config.token_lifetime(), Duration::hours(24));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = AuthServiceConfig::new("test-secret-key-for-testing-only-32chars", 24).unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("test-secret-key"));
    }
}
