use crate::auth::models::UserContext;
use crate::error::{ErrorResponse, HttpAppError};
use crate::handlers::video_response;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use medley_core::models::VideoResponse;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/v0/videos",
    tag = "videos",
    responses(
        (status = 200, description = "All videos owned by the caller, most recent first", body = Vec<VideoResponse>),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(
    skip(state),
    fields(owner_id = %user.user_id, operation = "list_videos")
)]
pub async fn list_videos(
    State(state): State<Arc<AppState>>,
    user: UserContext,
) -> Result<impl IntoResponse, HttpAppError> {
    let videos = state.media.repository.list_videos(&user.user_id).await?;

    let responses: Vec<VideoResponse> = videos
        .into_iter()
        .map(|video| video_response(video, &state.media.delivery))
        .collect();

    Ok(Json(responses))
}
