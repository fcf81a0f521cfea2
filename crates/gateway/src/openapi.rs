//! OpenAPI documentation.

use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::handlers::analysis_handler::{SummarizeRequest, SummarizeResponse};
use crate::handlers::auth_handler::{
    LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
};
use crate::handlers::health_handler::{BannerResponse, HealthResponse};
use domain::{AgeCategory, AnalysisDetails, ConfigEntry, HealthAnalysis, UserResponse};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health_handler::root,
        crate::handlers::health_handler::health_check,
        crate::handlers::auth_handler::register,
        crate::handlers::auth_handler::login,
        crate::handlers::configuration_handler::get_configuration,
        crate::handlers::analysis_handler::summarize,
    ),
    components(
        schemas(
            BannerResponse,
            HealthResponse,
            RegisterRequest,
            RegisterResponse,
            LoginRequest,
            LoginResponse,
            UserResponse,
            AgeCategory,
            ConfigEntry,
            SummarizeRequest,
            SummarizeResponse,
            HealthAnalysis,
            AnalysisDetails,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Service banner and health check"),
        (name = "Authentication", description = "Registration and login"),
        (name = "Configuration", description = "Key-value configuration lookup"),
        (name = "Analysis", description = "Health analysis of free text"),
    )
)]
pub struct ApiDoc;

/// Security scheme modifier.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
