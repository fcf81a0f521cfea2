//! Configuration service - resolves configuration keys for clients.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppResult, OptionExt};
use domain::{ConfigEntry, MSG_KEY_NOT_FOUND};

use crate::repository::ConfigurationRepository;

/// Configuration service trait for dependency injection.
#[async_trait]
pub trait ConfigurationService: Send + Sync {
    /// Get the value stored under `key`, or `NotFound("Key not found")`
    async fn get_value(&self, key: &str) -> AppResult<ConfigEntry>;
}

/// Concrete implementation of ConfigurationService using repository.
pub struct ConfigurationLookup {
    repo: Arc<dyn ConfigurationRepository>,
}

impl ConfigurationLookup {
    pub fn new(repo: Arc<dyn ConfigurationRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl ConfigurationService for ConfigurationLookup {
    async fn get_value(&self, key: &str) -> AppResult<ConfigEntry> {
        self.repo
            .find_by_key(key)
            .await?
            .ok_or_not_found(MSG_KEY_NOT_FOUND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockConfigurationRepository;
    use common::AppError;

    #[tokio::test]
    async fn test_get_value_found() {
        let mut repo = MockConfigurationRepository::new();
        repo.expect_find_by_key()
            .withf(|key| key == "OPENAI_MODEL")
            .times(1)
            .returning(|key| Ok(Some(ConfigEntry::new(key, "gpt-3.5-turbo"))));

        let service = ConfigurationLookup::new(Arc::new(repo));
        let entry = service.get_value("OPENAI_MODEL").await.unwrap();

        assert_eq!(entry, ConfigEntry::new("OPENAI_MODEL", "gpt-3.5-turbo"));
    }

    #[tokio::test]
    async fn test_get_value_missing_key() {
        let mut repo = MockConfigurationRepository::new();
        repo.expect_find_by_key().returning(|_| Ok(None));

        let service = ConfigurationLookup::new(Arc::new(repo));
        let result = service.get_value("missing").await;

        assert!(matches!(result, Err(AppError::NotFound(msg)) if msg == "Key not found"));
    }

    #[tokio::test]
    async fn test_get_value_propagates_store_failure() {
        let mut repo = MockConfigurationRepository::new();
        repo.expect_find_by_key()
            .returning(|_| Err(AppError::internal("connection reset")));

        let service = ConfigurationLookup::new(Arc::new(repo));
        let result = service.get_value("any").await;

        assert!(matches!(result, Err(AppError::Internal(_))));
    }
}
