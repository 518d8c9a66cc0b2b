use bevy::prelude::*;

/// Globe radius in world units; marker altitudes are fractions of this.
pub const GLOBE_RADIUS: f32 = 100.0;

/// Fixed marker footprint, shared by every point regardless of tier.
pub const MARKER_RADIUS: f32 = 0.35;

/// Longitude/latitude segment counts for the globe sphere mesh.
pub const GLOBE_MESH_SECTORS: usize = 64;
pub const GLOBE_MESH_STACKS: usize = 32;

/// Floor for marker column height so zero-altitude points still render as
/// flat dots instead of degenerate geometry.
pub const MARKER_MIN_HEIGHT: f32 = 0.05;

/// Radius of the starfield backdrop sphere.
pub const BACKDROP_RADIUS: f32 = 2_000.0;

/// Deep-space clear colour behind the globe when no backdrop texture loads.
pub const SPACE_CLEAR_COLOUR: Color = Color::srgb(0.004, 0.006, 0.016);

/// Flat ocean tint used until the surface texture finishes loading.
pub const OCEAN_FALLBACK_COLOUR: Color = Color::srgb(0.05, 0.12, 0.30);

/// Uniform fill light installed by the scene composer. Low intensity so the
/// night side stays legible without flattening the shading.
pub const AMBIENT_LIGHT_COLOUR: Color = Color::srgb(0.533, 0.533, 0.533);
pub const AMBIENT_LIGHT_BRIGHTNESS: f32 = 300.0;

/// Key light position. Off-axis in all three components so the globe and the
/// marker columns shade asymmetrically.
pub const DIRECTIONAL_LIGHT_POSITION: Vec3 = Vec3::new(500.0, 300.0, 500.0);
pub const DIRECTIONAL_LIGHT_ILLUMINANCE: f32 = 5_000.0;

#[derive(Debug, Clone, Copy)]
pub struct GlowSettings {
    pub rgb: [f32; 3],
    pub opacity: f32,
    /// Edge length of the billboard quad, in world units.
    pub scale: f32,
}

/// Atmospheric halo billboard: brand violet, semi-transparent, sized to
/// roughly the globe diameter.
pub const GLOW_SETTINGS: GlowSettings = GlowSettings {
    rgb: [0.4706, 0.3176, 0.6627],
    opacity: 0.5,
    scale: GLOBE_RADIUS * 2.4,
};

impl GlowSettings {
    pub fn colour(&self) -> Color {
        Color::srgba(self.rgb[0], self.rgb[1], self.rgb[2], self.opacity)
    }
}

/// Seconds between scene composition and the session reporting ready.
///
/// Presentation heuristic that masks early layout shift while the first
/// frames settle. It is not a readiness proof; nothing may gate on it.
pub const READY_SETTLE_SECS: f32 = 1.5;

/// Initial camera distance from the globe centre, in globe radii.
pub const CAMERA_START_DISTANCE: f32 = GLOBE_RADIUS * 3.5;
pub const CAMERA_MIN_DISTANCE: f32 = GLOBE_RADIUS * 1.2;
pub const CAMERA_MAX_DISTANCE: f32 = GLOBE_RADIUS * 8.0;
