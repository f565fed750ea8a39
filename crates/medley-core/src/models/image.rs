use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A stored image record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub id: Uuid,
    pub owner_id: String,
    pub content_id: String,
    pub title: Option<String>,
    pub original_size_bytes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Image payload returned by the API.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ImageResponse {
    pub id: Uuid,
    pub content_id: String,
    pub title: Option<String>,
    pub original_size_bytes: String,
    pub thumbnail_url: String,
    /// Full-resolution URL, used for download and share.
    pub download_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
