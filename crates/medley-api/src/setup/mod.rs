//! Application setup and initialization
//!
//! All application initialization logic lives here, extracted from main.rs
//! for better organization and testability.

pub mod database;
pub mod routes;
pub mod server;

use crate::state::{AppState, MediaState};
use anyhow::{Context, Result};
use medley_cloud::{CloudClient, CloudConfig};
use medley_core::Config;
use medley_db::MediaRepository;
use std::sync::Arc;
use std::time::Duration;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Validate configuration first - fail fast on misconfiguration
    config
        .validate()
        .context("Configuration validation failed")?;

    crate::telemetry::init_tracing();
    tracing::info!("Configuration loaded and validated successfully");

    // Setup database
    let pool = database::setup_database(&config).await?;

    // One explicitly constructed media service client per process, injected
    // into every pipeline.
    let cloud = CloudClient::new(CloudConfig {
        cloud_name: config.cloud_name.clone(),
        api_key: config.cloud_api_key.clone(),
        api_secret: config.cloud_api_secret.clone(),
        api_url: config.cloud_api_url.clone(),
        delivery_url: config.cloud_delivery_url.clone(),
        upload_timeout: Duration::from_secs(config.cloud_upload_timeout_seconds),
    })
    .map_err(|e| anyhow::anyhow!("Failed to build media service client: {}", e))?;
    let delivery = cloud.delivery_urls();

    let state = Arc::new(AppState {
        pool: pool.clone(),
        media: MediaState {
            repository: MediaRepository::new(pool),
            cloud: Arc::new(cloud),
            delivery,
            video_max_bytes: config.max_video_size_bytes,
            image_max_bytes: config.max_image_size_bytes,
        },
        is_production: config.is_production(),
        config,
    });

    // Setup routes
    let router = routes::setup_routes(&state.config, state.clone()).await?;

    Ok((state, router))
}
