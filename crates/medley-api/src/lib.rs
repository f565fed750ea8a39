//! Medley API
//!
//! HTTP surface for the media gallery: authenticated upload, listing and
//! deletion pipelines over the metadata store and the hosted media service.

pub mod api_doc;
pub mod auth;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod services;
pub mod setup;
pub mod state;
pub mod telemetry;
pub mod utils;
