pub mod image;
pub mod media;
pub mod quality;
pub mod video;

pub use image::{Image, ImageResponse};
pub use media::MediaType;
pub use quality::{QualityTier, TranscodeDirective};
pub use video::{Video, VideoResponse};
