//! Scene graph composition for the globe session.
//!
//! Provides the globe and backdrop geometry, the per-point marker columns,
//! and the one-shot composition sequence that replaces the surface's stock
//! lighting, requests the glow halo, and applies the camera policy.

/// One-shot, idempotently guarded scene composition sequence.
pub mod composer;

/// Globe sphere, starfield backdrop, and the surface's stock light.
pub mod globe;

/// Atmospheric halo billboard and its camera-facing system.
pub mod glow;

/// Stock light removal and scene lighting installation.
pub mod lighting;

/// Per-point marker columns encoding tier colour and altitude.
pub mod markers;
