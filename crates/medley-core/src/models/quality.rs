use crate::AppError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use utoipa::ToSchema;

/// Requested quality tier for a video upload.
///
/// `Original` sends the bytes through untouched; `Medium` and `Low` attach a
/// transcoding directive that the media service applies during ingest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum QualityTier {
    Original,
    Medium,
    Low,
}

/// Transcoding directive forwarded to the media service alongside the bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscodeDirective {
    pub quality: &'static str,
    pub fetch_format: &'static str,
}

impl QualityTier {
    /// Parse the multipart `quality` field.
    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value.to_lowercase().as_str() {
            "original" => Ok(QualityTier::Original),
            "medium" => Ok(QualityTier::Medium),
            "low" => Ok(QualityTier::Low),
            _ => Err(AppError::InvalidInput(
                "Invalid quality parameter. Must be 'original', 'medium', or 'low'".to_string(),
            )),
        }
    }

    /// Directive sent with the upload. `Original` attaches none.
    pub fn transcode_directive(&self) -> Option<TranscodeDirective> {
        match self {
            QualityTier::Original => None,
            QualityTier::Medium => Some(TranscodeDirective {
                quality: "auto:eco",
                fetch_format: "mp4",
            }),
            QualityTier::Low => Some(TranscodeDirective {
                quality: "auto:low",
                fetch_format: "mp4",
            }),
        }
    }
}

impl Display for QualityTier {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            QualityTier::Original => write!(f, "original"),
            QualityTier::Medium => write!(f, "medium"),
            QualityTier::Low => write!(f, "low"),
        }
    }
}
