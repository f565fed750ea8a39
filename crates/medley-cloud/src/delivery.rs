//! Delivery URL derivation
//!
//! Builds rendering URLs from a content identifier, with operations encoded
//! as `/-/` separated path segments. Derivation is a pure function of
//! `(content_id, intent)`: no network round trip, no caching layer; the
//! media service renders and caches the actual variants.

use medley_core::models::MediaType;

// Gallery card rendering intents.
const THUMB_WIDTH: u32 = 400;
const THUMB_HEIGHT: u32 = 225;
const FULL_WIDTH: u32 = 1920;
const FULL_HEIGHT: u32 = 1080;
const PREVIEW_DURATION_SECS: u32 = 15;
const PREVIEW_MAX_SEGMENTS: u32 = 9;
const PREVIEW_MIN_SEGMENT_SECS: u32 = 1;

/// Derives delivery URLs for one cloud account.
#[derive(Debug, Clone)]
pub struct DeliveryUrls {
    base: String,
    cloud_name: String,
}

impl DeliveryUrls {
    pub fn new(base: impl Into<String>, cloud_name: impl Into<String>) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        DeliveryUrls {
            base,
            cloud_name: cloud_name.into(),
        }
    }

    /// Start a URL for one asset with no operations applied.
    pub fn builder(&self, kind: MediaType, content_id: &str) -> DeliveryUrlBuilder {
        DeliveryUrlBuilder::new(&self.base, &self.cloud_name, kind, content_id)
    }

    /// Small card thumbnail: fixed dimensions, gravity-aware fill crop,
    /// low-bandwidth format.
    pub fn thumbnail(&self, kind: MediaType, content_id: &str) -> String {
        self.builder(kind, content_id)
            .resize(THUMB_WIDTH, THUMB_HEIGHT)
            .crop("fill")
            .gravity("auto")
            .format("jpg")
            .quality("auto")
            .build()
    }

    /// Full-resolution rendering, used for download and share links.
    pub fn full_resolution(&self, kind: MediaType, content_id: &str) -> String {
        self.builder(kind, content_id)
            .resize(FULL_WIDTH, FULL_HEIGHT)
            .build()
    }

    /// Bounded segment-sampled hover preview (videos only). The rendered
    /// clip may be unavailable for short sources; clients fall back on
    /// render error and never retry.
    pub fn video_preview(&self, content_id: &str) -> String {
        self.builder(MediaType::Video, content_id)
            .resize(THUMB_WIDTH, THUMB_HEIGHT)
            .preview(
                PREVIEW_DURATION_SECS,
                PREVIEW_MAX_SEGMENTS,
                PREVIEW_MIN_SEGMENT_SECS,
            )
            .build()
    }
}

/// Fluent builder for delivery URLs with `/-/` operation segments.
#[derive(Debug, Clone)]
pub struct DeliveryUrlBuilder {
    prefix: String,
    operations: Vec<String>,
}

impl DeliveryUrlBuilder {
    fn new(base: &str, cloud_name: &str, kind: MediaType, content_id: &str) -> Self {
        DeliveryUrlBuilder {
            prefix: format!(
                "{}/{}/{}/{}",
                base,
                cloud_name,
                kind.as_path_segment(),
                content_id.trim_matches('/')
            ),
            operations: Vec::new(),
        }
    }

    /// Target dimensions in pixels.
    pub fn resize(mut self, width: u32, height: u32) -> Self {
        self.operations.push(format!("resize/{}x{}", width, height));
        self
    }

    /// Crop mode: "fill", "fit", or "scale".
    pub fn crop(mut self, mode: &str) -> Self {
        self.operations.push(format!("crop/{}", mode));
        self
    }

    /// Crop gravity: "auto", "center", "faces".
    pub fn gravity(mut self, gravity: &str) -> Self {
        self.operations.push(format!("gravity/{}", gravity));
        self
    }

    /// Output format: "jpg", "png", "webp", "mp4", or "auto".
    pub fn format(mut self, format: &str) -> Self {
        self.operations.push(format!("format/{}", format));
        self
    }

    /// Quality preset: "auto", "low", "eco", "best".
    pub fn quality(mut self, quality: &str) -> Self {
        self.operations.push(format!("quality/{}", quality));
        self
    }

    /// Segment-sampled preview directive (videos).
    pub fn preview(mut self, duration_secs: u32, max_segments: u32, min_segment_secs: u32) -> Self {
        self.operations.push(format!(
            "preview/duration/{}/segments/{}/min_segment/{}",
            duration_secs, max_segments, min_segment_secs
        ));
        self
    }

    pub fn build(self) -> String {
        if self.operations.is_empty() {
            return format!("{}/", self.prefix);
        }
        format!("{}/-/{}/", self.prefix, self.operations.join("/-/"))
    }
}
