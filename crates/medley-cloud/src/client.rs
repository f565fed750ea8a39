//! Hosted media service client
//!
//! Talks to the media service's ingest/discard API over HTTPS. Uploads are
//! multipart (`file` part plus an optional `transformation` JSON part
//! carrying the transcoding directive); discards are DELETE by content id.
//! Single-attempt semantics: no retries at this layer.

use crate::delivery::DeliveryUrls;
use crate::traits::{CloudError, CloudResult, CloudUpload, MediaCloud, UploadReceipt};
use async_trait::async_trait;
use medley_core::models::MediaType;
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;

/// Credentials and endpoints for the hosted media service.
#[derive(Debug, Clone)]
pub struct CloudConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    pub api_url: String,
    pub delivery_url: String,
    pub upload_timeout: Duration,
}

/// Media service client over HTTP.
#[derive(Clone)]
pub struct CloudClient {
    http: reqwest::Client,
    config: CloudConfig,
}

/// Ingest result body returned by the service.
#[derive(Debug, Deserialize)]
struct IngestResponse {
    public_id: String,
    bytes: i64,
    duration: Option<f64>,
}

impl CloudClient {
    pub fn new(config: CloudConfig) -> CloudResult<Self> {
        if config.cloud_name.is_empty() || config.api_key.is_empty() || config.api_secret.is_empty()
        {
            return Err(CloudError::ConfigError(
                "Media service credentials not found".to_string(),
            ));
        }

        let http = reqwest::Client::builder()
            .timeout(config.upload_timeout)
            .build()
            .map_err(|e| CloudError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(CloudClient { http, config })
    }

    /// Delivery URL deriver bound to this client's cloud name.
    pub fn delivery_urls(&self) -> DeliveryUrls {
        DeliveryUrls::new(&self.config.delivery_url, &self.config.cloud_name)
    }

    fn ingest_url(&self, kind: MediaType) -> String {
        format!(
            "{}/v1/{}/{}/upload",
            self.config.api_url.trim_end_matches('/'),
            self.config.cloud_name,
            kind.as_path_segment()
        )
    }

    fn asset_url(&self, kind: MediaType, content_id: &str) -> String {
        format!(
            "{}/v1/{}/{}/{}",
            self.config.api_url.trim_end_matches('/'),
            self.config.cloud_name,
            kind.as_path_segment(),
            urlencoding::encode(content_id)
        )
    }
}

/// Short preview of an error response body for diagnostics.
async fn body_preview(response: reqwest::Response) -> String {
    match response.text().await {
        Ok(body) => body.chars().take(512).collect(),
        Err(_) => String::new(),
    }
}

#[async_trait]
impl MediaCloud for CloudClient {
    async fn upload(&self, upload: CloudUpload) -> CloudResult<UploadReceipt> {
        let url = self.ingest_url(upload.kind);
        let size = upload.data.len();
        let start = std::time::Instant::now();

        let file_part = Part::bytes(upload.data)
            .file_name(upload.filename.clone())
            .mime_str(&upload.content_type)
            .map_err(|e| {
                CloudError::UploadFailed(format!(
                    "Invalid content type '{}': {}",
                    upload.content_type, e
                ))
            })?;

        let mut form = Form::new().part("file", file_part);
        if let Some(ref directive) = upload.directive {
            let directive_json = serde_json::to_string(directive)
                .map_err(|e| CloudError::UploadFailed(format!("Invalid directive: {}", e)))?;
            form = form.text("transformation", directive_json);
        }

        let response = self
            .http
            .post(&url)
            .basic_auth(&self.config.api_key, Some(&self.config.api_secret))
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let preview = body_preview(response).await;
            return Err(CloudError::UploadFailed(format!(
                "status {}: {}",
                status.as_u16(),
                preview
            )));
        }

        let ingest: IngestResponse = response
            .json()
            .await
            .map_err(|e| CloudError::InvalidResponse(e.to_string()))?;

        if ingest.public_id.is_empty() {
            return Err(CloudError::InvalidResponse(
                "Service returned an empty content id".to_string(),
            ));
        }

        tracing::info!(
            content_id = %ingest.public_id,
            kind = %upload.kind,
            size_bytes = size,
            final_bytes = ingest.bytes,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Media service upload successful"
        );

        Ok(UploadReceipt {
            content_id: ingest.public_id,
            bytes: ingest.bytes,
            duration: ingest.duration,
        })
    }

    async fn destroy(&self, kind: MediaType, content_id: &str) -> CloudResult<()> {
        let url = self.asset_url(kind, content_id);

        let response = self
            .http
            .delete(&url)
            .basic_auth(&self.config.api_key, Some(&self.config.api_secret))
            .send()
            .await?;

        let status = response.status();

        // Already gone: the discard is idempotent.
        if status == StatusCode::NOT_FOUND {
            tracing::debug!(content_id = %content_id, "Asset already absent from media service");
            return Ok(());
        }

        if !status.is_success() {
            let preview = body_preview(response).await;
            return Err(CloudError::DeleteFailed(format!(
                "status {}: {} [content_id={}]",
                status.as_u16(),
                preview,
                content_id
            )));
        }

        tracing::info!(content_id = %content_id, kind = %kind, "Media service discard successful");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> CloudConfig {
        CloudConfig {
            cloud_name: "demo".to_string(),
            api_key: "key".to_string(),
            api_secret: "secret".to_string(),
            api_url: "https://api.mediacloud.io/".to_string(),
            delivery_url: "https://media.mediacloud.io".to_string(),
            upload_timeout: Duration::from_secs(120),
        }
    }

    #[test]
    fn test_missing_credentials_rejected() {
        let mut cfg = config();
        cfg.api_key = String::new();
        assert!(matches!(
            CloudClient::new(cfg),
            Err(CloudError::ConfigError(_))
        ));
    }

    #[test]
    fn test_ingest_url_shape() {
        let client = CloudClient::new(config()).unwrap();
        assert_eq!(
            client.ingest_url(MediaType::Video),
            "https://api.mediacloud.io/v1/demo/video/upload"
        );
    }

    #[test]
    fn test_asset_url_encodes_content_id() {
        let client = CloudClient::new(config()).unwrap();
        assert_eq!(
            client.asset_url(MediaType::Image, "gallery/a b"),
            "https://api.mediacloud.io/v1/demo/image/gallery%2Fa%20b"
        );
    }
}
