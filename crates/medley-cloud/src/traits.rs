//! Media service abstraction trait
//!
//! Defines the `MediaCloud` trait implemented by the hosted service client.
//! Pipelines depend on the trait so tests can substitute a recording stub.

use async_trait::async_trait;
use medley_core::models::{MediaType, TranscodeDirective};
use medley_core::AppError;
use thiserror::Error;

/// Media service operation errors
#[derive(Debug, Error)]
pub enum CloudError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("Invalid service response: {0}")]
    InvalidResponse(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type for media service operations
pub type CloudResult<T> = Result<T, CloudError>;

impl From<CloudError> for AppError {
    fn from(err: CloudError) -> Self {
        match err {
            CloudError::UploadFailed(msg) => AppError::Cloud(msg),
            CloudError::DeleteFailed(msg) => AppError::Cloud(msg),
            CloudError::InvalidResponse(msg) => AppError::Cloud(msg),
            CloudError::ConfigError(msg) => AppError::Internal(msg),
            CloudError::Http(err) => AppError::Cloud(err.to_string()),
        }
    }
}

/// One upload request: raw bytes plus the transcoding directive for the tier.
#[derive(Debug, Clone)]
pub struct CloudUpload {
    pub kind: MediaType,
    pub filename: String,
    pub content_type: String,
    pub data: Vec<u8>,
    pub directive: Option<TranscodeDirective>,
}

/// What the service hands back once ingest and transcoding finish.
#[derive(Debug, Clone)]
pub struct UploadReceipt {
    /// Opaque identifier for the stored asset; never empty.
    pub content_id: String,
    /// Final byte size after any transcoding.
    pub bytes: i64,
    /// Media duration in seconds (videos only).
    pub duration: Option<f64>,
}

/// Hosted media service abstraction
///
/// The client is constructed explicitly from configuration and injected into
/// every pipeline; there is no ambient global state.
#[async_trait]
pub trait MediaCloud: Send + Sync {
    /// Send raw bytes (and an optional transcoding directive) to the service
    /// and wait for the ingest result.
    async fn upload(&self, upload: CloudUpload) -> CloudResult<UploadReceipt>;

    /// Discard the asset identified by `content_id`. Discarding an asset the
    /// service no longer knows about is not an error.
    async fn destroy(&self, kind: MediaType, content_id: &str) -> CloudResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_failed_maps_to_cloud_error() {
        let err: AppError = CloudError::UploadFailed("status 502".to_string()).into();
        assert!(matches!(err, AppError::Cloud(msg) if msg.contains("502")));
    }

    #[test]
    fn test_config_error_maps_to_internal() {
        let err: AppError = CloudError::ConfigError("missing key".to_string()).into();
        assert!(matches!(err, AppError::Internal(_)));
    }

    #[test]
    fn test_invalid_response_maps_to_cloud_error() {
        let err: AppError = CloudError::InvalidResponse("no public_id".to_string()).into();
        assert!(matches!(err, AppError::Cloud(_)));
    }
}
