//! Asset types for the globe scene.
//!
//! Covers the scene manifest, the delimited population dataset and its
//! loader, and the handle set tying asset lifetimes to the session.

/// Delimited population dataset loader registered with the asset server.
///
/// Parses header-addressed CSV into typed point records, skipping malformed
/// rows instead of failing the whole ingest.
pub mod dataset_loader;

/// Handle set owned by the session; swapping or dropping a handle abandons
/// the in-flight load.
pub mod globe_assets;

/// Scene manifest loaded from JSON configuration.
///
/// Names the dataset endpoint, texture paths, and the camera policy variant.
pub mod manifest;

/// Population point records and the dataset asset they aggregate into.
pub mod population;
