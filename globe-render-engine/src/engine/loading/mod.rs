//! Asset loading pipeline for the globe scene.
//!
//! Manages the staged loading flow from manifest parsing through dataset
//! ingestion and texture configuration, with progress tracking for the
//! embedding frontend.

/// Dataset polling, wholesale session replacement, and the retry path.
pub mod dataset_ingest;

/// Scene manifest loading; kicks off the dataset and texture fetches.
pub mod manifest_loader;

/// Loading progress tracking resource and its frontend payload.
pub mod progress;

/// Texture load-state monitoring for the globe surface and backdrop.
pub mod texture_loader;
