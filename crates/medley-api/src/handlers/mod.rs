pub mod image_delete;
pub mod image_get;
pub mod image_upload;
pub mod video_delete;
pub mod video_get;
pub mod video_upload;

use medley_cloud::DeliveryUrls;
use medley_core::models::{Image, ImageResponse, MediaType, Video, VideoResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Deletion request body: the media service's content identifier.
#[derive(Debug, Deserialize, ToSchema)]
pub struct DeleteMediaRequest {
    pub content_id: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteMediaResponse {
    pub message: String,
}

/// Build the API video payload, deriving display URLs from the content id.
pub(crate) fn video_response(video: Video, delivery: &DeliveryUrls) -> VideoResponse {
    let compression_pct = video.compression_percentage();
    let thumbnail_url = delivery.thumbnail(MediaType::Video, &video.content_id);
    let download_url = delivery.full_resolution(MediaType::Video, &video.content_id);
    let preview_url = delivery.video_preview(&video.content_id);
    VideoResponse {
        id: video.id,
        content_id: video.content_id,
        title: video.title,
        description: video.description,
        original_size_bytes: video.original_size_bytes,
        compressed_size_bytes: video.compressed_size_bytes,
        duration_seconds: video.duration_seconds,
        compression_pct,
        thumbnail_url,
        download_url,
        preview_url,
        created_at: video.created_at,
        updated_at: video.updated_at,
    }
}

/// Build the API image payload.
pub(crate) fn image_response(image: Image, delivery: &DeliveryUrls) -> ImageResponse {
    let thumbnail_url = delivery.thumbnail(MediaType::Image, &image.content_id);
    let download_url = delivery.full_resolution(MediaType::Image, &image.content_id);
    ImageResponse {
        id: image.id,
        content_id: image.content_id,
        title: image.title,
        original_size_bytes: image.original_size_bytes,
        thumbnail_url,
        download_url,
        created_at: image.created_at,
        updated_at: image.updated_at,
    }
}
