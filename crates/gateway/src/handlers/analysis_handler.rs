//! Text-analysis handlers.

use axum::{
    extract::{Extension, State},
    response::Json,
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use common::AppResult;
use domain::HealthAnalysis;

use crate::extractors::ValidatedJson;
use crate::middleware::CurrentUser;
use crate::state::AppState;

/// Summarize request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SummarizeRequest {
    /// Conversation or note to analyze
    #[validate(
        required(message = "Text is required"),
        length(min = 1, message = "Text is required")
    )]
    #[schema(example = "I've had a dull headache for three days.")]
    pub text: Option<String>,
}

/// Summarize response
#[derive(Debug, Serialize, ToSchema)]
pub struct SummarizeResponse {
    #[schema(example = "Text successfully summarized")]
    pub message: String,
    pub content: HealthAnalysis,
}

/// Create text-analysis routes
pub fn analysis_routes() -> Router<AppState> {
    Router::new().route("/summarize", post(summarize))
}

/// Analyze text for health-related content
#[utoipa::path(
    post,
    path = "/api/openai/summarize",
    tag = "Analysis",
    security(("bearer_auth" = [])),
    request_body = SummarizeRequest,
    responses(
        (status = 200, description = "Analysis recovered", body = SummarizeResponse),
        (status = 400, description = "Text is required"),
        (status = 401, description = "Missing or invalid token"),
        (status = 502, description = "Provider failed or returned unusable output")
    )
)]
pub async fn summarize(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SummarizeRequest>,
) -> AppResult<Json<SummarizeResponse>> {
    tracing::debug!(user_id = %current_user.id, "Summarize request");

    let content = state
        .summarizer
        .summarize(payload.text.as_deref().unwrap_or_default())
        .await?;

    Ok(Json(SummarizeResponse {
        message: "Text successfully summarized".to_string(),
        content,
    }))
}
