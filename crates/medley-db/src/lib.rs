//! Medley Database Library
//!
//! Postgres persistence for media records. One pooled connection set is
//! shared by all in-flight requests; every query is owner-scoped.

pub mod media;

pub use media::{MediaRepository, MediaRow, NewImage, NewVideo};
