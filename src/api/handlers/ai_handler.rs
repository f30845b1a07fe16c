//! AI content generation handlers.

use axum::{extract::State, response::Json, routing::post, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::errors::{AppError, AppResult};
use crate::services::ContentKind;

/// Content generation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct GenerateRequest {
    /// What to generate: "description", "faqs" or "schedule"
    #[schema(example = "description")]
    pub kind: String,
    /// Event or service the content is about
    #[validate(length(min = 1, message = "Topic is required"))]
    #[schema(example = "Open-air jazz festival for 500 guests")]
    pub topic: String,
    /// Optional additional context for the prompt
    pub extra: Option<String>,
}

/// Content generation response
#[derive(Debug, Serialize, ToSchema)]
pub struct GenerateResponse {
    /// Generated text
    pub content: String,
}

/// Create AI routes
pub fn ai_routes() -> Router<AppState> {
    Router::new().route("/generate", post(generate))
}

/// Generate event content through the completion API
#[utoipa::path(
    post,
    path = "/api/ai/generate",
    tag = "AI",
    security(("bearer_auth" = [])),
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Generated content", body = GenerateResponse),
        (status = 400, description = "Unknown content kind"),
        (status = 401, description = "Unauthorized"),
        (status = 502, description = "Completion API unavailable")
    )
)]
pub async fn generate(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<GenerateRequest>,
) -> AppResult<Json<GenerateResponse>> {
    let kind = ContentKind::parse(&payload.kind).ok_or_else(|| {
        AppError::BadRequest(format!(
            "Unknown content kind '{}'; expected description, faqs or schedule",
            payload.kind
        ))
    })?;

    let content = state
        .content_service
        .generate(kind, payload.topic, payload.extra)
        .await?;

    Ok(Json(GenerateResponse { content }))
}
