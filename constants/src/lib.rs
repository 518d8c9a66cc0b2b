//! Calibrated constants and pure numeric mappings shared across the engine.
//!
//! Everything in this crate is computable without a rendering surface:
//! population tier classification, geodetic coordinate conversion, scene
//! settings, and camera control policies.

/// Camera control policy presets (auto-rotation, zoom, rotate, pan).
pub mod camera_policy;

/// Geodetic latitude/longitude to world-space conversion.
pub mod coordinate_system;

/// Relative asset paths for the manifest, dataset, and textures.
pub mod path;

/// Globe, lighting, glow, and marker settings.
pub mod scene_settings;

/// Population tier classification and marker altitude encoding.
pub mod tier;
