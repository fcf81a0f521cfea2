//! HTTP handlers.

pub mod analysis_handler;
pub mod auth_handler;
pub mod configuration_handler;
pub mod health_handler;

pub use analysis_handler::analysis_routes;
pub use auth_handler::auth_routes;
pub use configuration_handler::configuration_routes;
pub use health_handler::health_routes;
