use crate::auth::models::UserContext;
use crate::error::{ErrorResponse, HttpAppError};
use crate::handlers::image_response;
use crate::services::upload::MediaUploadService;
use crate::state::AppState;
use axum::{
    extract::{Multipart, State},
    response::IntoResponse,
    Json,
};
use medley_core::models::ImageResponse;
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/api/v0/images",
    tag = "images",
    responses(
        (status = 200, description = "Image uploaded successfully", body = ImageResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(
    skip(state, multipart),
    fields(owner_id = %user.user_id, operation = "upload_image")
)]
pub async fn upload_image(
    State(state): State<Arc<AppState>>,
    user: UserContext,
    multipart: Multipart,
) -> Result<impl IntoResponse, HttpAppError> {
    let service = MediaUploadService::new(&state);
    let image = service.upload_image(&user.user_id, multipart).await?;

    Ok(Json(image_response(image, &state.media.delivery)))
}
