use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A stored video record. Read-only after creation except for deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    pub id: Uuid,
    pub owner_id: String,
    /// Opaque identifier assigned by the media service; all delivery URLs
    /// derive from it.
    pub content_id: String,
    pub title: String,
    pub description: Option<String>,
    /// Size of the source upload, as a numeric string.
    pub original_size_bytes: String,
    /// Size after transcoding, as a numeric string.
    pub compressed_size_bytes: String,
    pub duration_seconds: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Video {
    /// Percentage saved by transcoding, rounded to the nearest integer.
    /// `None` when either size is missing/non-numeric or the original is zero.
    pub fn compression_percentage(&self) -> Option<i64> {
        let original: f64 = self.original_size_bytes.trim().parse().ok()?;
        let compressed: f64 = self.compressed_size_bytes.trim().parse().ok()?;
        if original <= 0.0 {
            return None;
        }
        Some(((1.0 - compressed / original) * 100.0).round() as i64)
    }
}

/// Video payload returned by the API, with delivery URLs derived from the
/// content identifier.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VideoResponse {
    pub id: Uuid,
    pub content_id: String,
    pub title: String,
    pub description: Option<String>,
    pub original_size_bytes: String,
    pub compressed_size_bytes: String,
    pub duration_seconds: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compression_pct: Option<i64>,
    pub thumbnail_url: String,
    /// Full-resolution URL, used for download and share.
    pub download_url: String,
    /// Hover-preview URL; may be unplayable, clients fall back on render error.
    pub preview_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(original: &str, compressed: &str) -> Video {
        Video {
            id: Uuid::new_v4(),
            owner_id: "user_1".to_string(),
            content_id: "gallery/abc".to_string(),
            title: "clip".to_string(),
            description: None,
            original_size_bytes: original.to_string(),
            compressed_size_bytes: compressed.to_string(),
            duration_seconds: 12.0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_compression_percentage_halved() {
        // 50 MiB source transcoded down to 25 MiB
        let v = video("52428800", "26214400");
        assert_eq!(v.compression_percentage(), Some(50));
    }

    #[test]
    fn test_compression_percentage_rounds() {
        let v = video("3000", "1000");
        assert_eq!(v.compression_percentage(), Some(67));
    }

    #[test]
    fn test_compression_percentage_zero_original() {
        let v = video("0", "100");
        assert_eq!(v.compression_percentage(), None);
    }

    #[test]
    fn test_compression_percentage_non_numeric() {
        let v = video("lots", "100");
        assert_eq!(v.compression_percentage(), None);
    }
}
