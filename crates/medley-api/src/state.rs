//! Application state shared across request handlers.

use medley_cloud::{DeliveryUrls, MediaCloud};
use medley_core::Config;
use medley_db::MediaRepository;
use sqlx::PgPool;
use std::sync::Arc;

/// Media pipeline dependencies: repository, injected media service client,
/// delivery URL deriver, and per-kind upload ceilings.
#[derive(Clone)]
pub struct MediaState {
    pub repository: MediaRepository,
    pub cloud: Arc<dyn MediaCloud>,
    pub delivery: DeliveryUrls,
    pub video_max_bytes: usize,
    pub image_max_bytes: usize,
}

/// Main application state, shared via `Arc` by all in-flight requests.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub media: MediaState,
    pub config: Config,
    pub is_production: bool,
}

fn _assert_app_state_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<AppState>();
    assert_sync::<AppState>();
}
