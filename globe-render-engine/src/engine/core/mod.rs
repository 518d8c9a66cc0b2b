//! Core application setup and session state management.
//!
//! Handles application lifecycle, window configuration, the loading/ready
//! state machine, and plugin initialisation for both native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Creates the main app with asset loaders, the scene composition pipeline,
/// and platform-specific configuration.
pub mod app_setup;

/// Application state machine and the settle-delay ready transition.
pub mod app_state;

/// Single-owner session state: point collection and ready flag.
pub mod session;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;
