use crate::auth::models::UserContext;
use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::handlers::{DeleteMediaRequest, DeleteMediaResponse};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use medley_core::models::MediaType;
use medley_core::AppError;
use std::sync::Arc;

#[utoipa::path(
    delete,
    path = "/api/v0/images",
    tag = "images",
    request_body = DeleteMediaRequest,
    responses(
        (status = 200, description = "Image deleted successfully", body = DeleteMediaResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 404, description = "Image not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(
    skip(state, request),
    fields(owner_id = %user.user_id, operation = "delete_image")
)]
pub async fn delete_image(
    State(state): State<Arc<AppState>>,
    user: UserContext,
    ValidatedJson(request): ValidatedJson<DeleteMediaRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    if request.content_id.trim().is_empty() {
        return Err(AppError::InvalidInput("Missing content_id".to_string()).into());
    }

    let removed = state
        .media
        .repository
        .delete_image(&user.user_id, &request.content_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Image not found".to_string()))?;

    if let Err(e) = state
        .media
        .cloud
        .destroy(MediaType::Image, &removed.content_id)
        .await
    {
        tracing::warn!(
            error = %e,
            content_id = %removed.content_id,
            "Asset discard failed after metadata removal"
        );
        return Err(AppError::from(e).into());
    }

    Ok(Json(DeleteMediaResponse {
        message: "Image deleted successfully".to_string(),
    }))
}
