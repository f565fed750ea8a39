//! Unified media upload pipeline
//!
//! Workflow: extract → validate → directive → ingest → persist. Validation
//! happens before any network call; a record is created only after the media
//! service confirms the upload, so records never exist speculatively.

use std::sync::Arc;

use axum::extract::Multipart;
use medley_cloud::CloudUpload;
use medley_core::models::{Image, MediaType, QualityTier, Video};
use medley_core::AppError;
use medley_db::{NewImage, NewVideo};

use crate::state::AppState;
use crate::utils::upload::{extract_upload_form, validate_file_size, MediaUploadForm};

/// Upload pipeline for all media kinds.
pub struct MediaUploadService {
    state: Arc<AppState>,
}

impl MediaUploadService {
    pub fn new(state: &Arc<AppState>) -> Self {
        Self {
            state: state.clone(),
        }
    }

    /// Upload a video: bytes plus title/description and a quality tier that
    /// selects the transcoding directive forwarded to the media service.
    pub async fn upload_video(
        &self,
        owner_id: &str,
        multipart: Multipart,
    ) -> Result<Video, AppError> {
        let form = extract_upload_form(multipart).await?;
        validate_file_size(form.data.len(), self.state.media.video_max_bytes)?;

        let title = required_title(&form)?;
        let quality = match form.quality.as_deref() {
            Some(q) => QualityTier::parse(q)?,
            None => QualityTier::Original,
        };
        let original_size = resolve_original_size(form.original_size.as_deref(), form.data.len())?;
        let description = form.description.filter(|d| !d.trim().is_empty());

        tracing::info!(
            owner_id = %owner_id,
            size_bytes = form.data.len(),
            quality = %quality,
            "Processing video upload"
        );

        let receipt = self
            .state
            .media
            .cloud
            .upload(CloudUpload {
                kind: MediaType::Video,
                filename: form.filename,
                content_type: form.content_type,
                data: form.data,
                directive: quality.transcode_directive(),
            })
            .await?;

        let new_video = NewVideo {
            owner_id: owner_id.to_string(),
            content_id: receipt.content_id.clone(),
            title,
            description,
            original_size_bytes: original_size,
            compressed_size_bytes: receipt.bytes.to_string(),
            duration_seconds: receipt.duration.unwrap_or(0.0),
        };

        match self.state.media.repository.create_video(new_video).await {
            Ok(video) => Ok(video),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    content_id = %receipt.content_id,
                    "Failed to persist video after ingest"
                );
                self.discard_orphan(MediaType::Video, receipt.content_id);
                Err(e)
            }
        }
    }

    /// Upload an image in a single server-side operation: ingest and persist
    /// happen within one request, so no asset exists without metadata from
    /// the caller's perspective.
    pub async fn upload_image(
        &self,
        owner_id: &str,
        multipart: Multipart,
    ) -> Result<Image, AppError> {
        let form = extract_upload_form(multipart).await?;
        validate_file_size(form.data.len(), self.state.media.image_max_bytes)?;

        let original_size = resolve_original_size(form.original_size.as_deref(), form.data.len())?;
        let title = form.title.filter(|t| !t.trim().is_empty());

        tracing::info!(
            owner_id = %owner_id,
            size_bytes = form.data.len(),
            "Processing image upload"
        );

        let receipt = self
            .state
            .media
            .cloud
            .upload(CloudUpload {
                kind: MediaType::Image,
                filename: form.filename,
                content_type: form.content_type,
                data: form.data,
                directive: None,
            })
            .await?;

        let new_image = NewImage {
            owner_id: owner_id.to_string(),
            content_id: receipt.content_id.clone(),
            title,
            original_size_bytes: original_size,
        };

        match self.state.media.repository.create_image(new_image).await {
            Ok(image) => Ok(image),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    content_id = %receipt.content_id,
                    "Failed to persist image after ingest"
                );
                self.discard_orphan(MediaType::Image, receipt.content_id);
                Err(e)
            }
        }
    }

    /// Best-effort discard of an asset whose metadata write failed. The
    /// request has already failed; a discard failure here only widens the
    /// known orphan window and is logged, not surfaced.
    fn discard_orphan(&self, kind: MediaType, content_id: String) {
        let cloud = self.state.media.cloud.clone();
        tokio::spawn(async move {
            if let Err(cleanup_err) = cloud.destroy(kind, &content_id).await {
                tracing::debug!(
                    error = %cleanup_err,
                    content_id = %content_id,
                    "Failed to discard asset after persist error"
                );
            }
        });
    }
}

fn required_title(form: &MediaUploadForm) -> Result<String, AppError> {
    form.title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .ok_or_else(|| AppError::InvalidInput("Missing title".to_string()))
}

/// The client may report the pre-upload source size; fall back to the byte
/// count actually received.
fn resolve_original_size(reported: Option<&str>, received_len: usize) -> Result<String, AppError> {
    match reported.map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) => {
            s.parse::<u64>().map_err(|_| {
                AppError::InvalidInput("originalSize must be a numeric string".to_string())
            })?;
            Ok(s.to_string())
        }
        None => Ok(received_len.to_string()),
    }
}
