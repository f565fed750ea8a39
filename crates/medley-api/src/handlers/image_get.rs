use crate::auth::models::UserContext;
use crate::error::{ErrorResponse, HttpAppError};
use crate::handlers::image_response;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use medley_core::models::ImageResponse;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/v0/images",
    tag = "images",
    responses(
        (status = 200, description = "All images owned by the caller, most recent first", body = Vec<ImageResponse>),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(
    skip(state),
    fields(owner_id = %user.user_id, operation = "list_images")
)]
pub async fn list_images(
    State(state): State<Arc<AppState>>,
    user: UserContext,
) -> Result<impl IntoResponse, HttpAppError> {
    let images = state.media.repository.list_images(&user.user_id).await?;

    let responses: Vec<ImageResponse> = images
        .into_iter()
        .map(|image| image_response(image, &state.media.delivery))
        .collect();

    Ok(Json(responses))
}
