//! Gateway configuration.

use analysis_service_lib::config::OpenAiConfig;
use auth_service_lib::config::AuthServiceConfig;
use common::{ConfigError, ServiceConfig};
use store_service_lib::config::StoreConfig;

/// Everything the gateway process needs, loaded once at startup.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Bind address and runtime environment
    pub service: ServiceConfig,
    pub store: StoreConfig,
    pub auth: AuthServiceConfig,
    pub openai: OpenAiConfig,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            service: ServiceConfig::from_env(),
            store: StoreConfig::from_env(),
            auth: AuthServiceConfig::from_env()?,
            openai: OpenAiConfig::from_env()?,
        })
    }

    /// Override the bind address from the command line.
    pub fn with_addr(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.service.host = host;
        }
        if let Some(port) = port {
            self.service.port = port;
        }
        self
    }
}
