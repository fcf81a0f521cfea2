//! Configuration repository - key-value lookups.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};

use super::entities::configuration::Entity as ConfigurationEntity;
use common::{AppError, AppResult};
use domain::ConfigEntry;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Configuration repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ConfigurationRepository: Send + Sync {
    /// Find an entry by its exact key name
    async fn find_by_key(&self, key: &str) -> AppResult<Option<ConfigEntry>>;
}

/// Concrete implementation of ConfigurationRepository
pub struct ConfigurationStore {
    db: DatabaseConnection,
}

impl ConfigurationStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ConfigurationRepository for ConfigurationStore {
    async fn find_by_key(&self, key: &str) -> AppResult<Option<ConfigEntry>> {
        let result = ConfigurationEntity::find_by_id(key.to_string())
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(ConfigEntry::from))
    }
}
