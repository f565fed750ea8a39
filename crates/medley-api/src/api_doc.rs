//! OpenAPI document for the media routes, served at `/api/openapi.json`
//! and rendered at `/docs`.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::video_get::list_videos,
        crate::handlers::video_upload::upload_video,
        crate::handlers::video_delete::delete_video,
        crate::handlers::image_get::list_images,
        crate::handlers::image_upload::upload_image,
        crate::handlers::image_delete::delete_image,
    ),
    components(schemas(
        medley_core::models::VideoResponse,
        medley_core::models::ImageResponse,
        crate::handlers::DeleteMediaRequest,
        crate::handlers::DeleteMediaResponse,
        crate::error::ErrorResponse,
    )),
    tags(
        (name = "videos", description = "Video upload, listing and deletion"),
        (name = "images", description = "Image upload, listing and deletion")
    )
)]
pub struct ApiDoc;
