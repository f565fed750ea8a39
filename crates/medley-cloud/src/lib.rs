//! Medley Cloud Library
//!
//! Client for the hosted media storage/transcoding service. The service
//! ingests raw bytes, applies an optional transcoding directive, and hands
//! back an opaque content identifier plus derived attributes (final byte
//! size, duration). Delivery URLs are derived locally from the content
//! identifier without any network round trip; the service renders and caches
//! the actual variants.

pub mod client;
pub mod delivery;
pub mod traits;

// Re-export commonly used types
pub use client::{CloudClient, CloudConfig};
pub use delivery::{DeliveryUrlBuilder, DeliveryUrls};
pub use traits::{CloudError, CloudResult, CloudUpload, MediaCloud, UploadReceipt};
