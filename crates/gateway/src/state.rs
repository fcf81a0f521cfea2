//! Application state for dependency injection.

use std::sync::Arc;

use analysis_service_lib::service::SummaryService;
use auth_service_lib::service::AuthService;
use store_service_lib::infra::Database;
use store_service_lib::service::ConfigurationService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthService>,
    pub configuration: Arc<dyn ConfigurationService>,
    pub summarizer: Arc<dyn SummaryService>,
    pub database: Database,
}

impl AppState {
    /// Create new app state.
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        configuration: Arc<dyn ConfigurationService>,
        summarizer: Arc<dyn SummaryService>,
        database: Database,
    ) -> Self {
        Self {
            auth_service,
            configuration,
            summarizer,
            database,
        }
    }
}
