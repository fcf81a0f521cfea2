//! Configuration lookup handlers.

use axum::{
    extract::{Extension, Path, State},
    response::Json,
    routing::get,
    Router,
};

use common::AppResult;
use domain::ConfigEntry;

use crate::middleware::CurrentUser;
use crate::state::AppState;

/// Create configuration routes
pub fn configuration_routes() -> Router<AppState> {
    Router::new().route("/:key", get(get_configuration))
}

/// Look up a configuration value by key
#[utoipa::path(
    get,
    path = "/api/configuration/{key}",
    tag = "Configuration",
    security(("bearer_auth" = [])),
    params(
        ("key" = String, Path, description = "Configuration key")
    ),
    responses(
        (status = 200, description = "Configuration entry", body = ConfigEntry),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Key not found")
    )
)]
pub async fn get_configuration(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<Json<ConfigEntry>> {
    tracing::debug!(user_id = %current_user.id, key = %key, "Configuration lookup");

    let entry = state.configuration.get_value(&key).await?;
    Ok(Json(entry))
}
