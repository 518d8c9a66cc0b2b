/// Camera-control policy applied once the scene is composed.
///
/// Variants only differ in rotation speed and whether panning is permitted;
/// the controller itself contains no per-policy logic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPolicy {
    pub auto_rotate: bool,
    /// Continuous yaw speed in degrees per second.
    pub auto_rotate_speed_deg: f32,
    pub zoom_enabled: bool,
    pub rotate_enabled: bool,
    pub pan_enabled: bool,
}

/// Default presentation policy: slow continuous spin, panning locked so the
/// globe stays centred.
pub const SHOWCASE_POLICY: CameraPolicy = CameraPolicy {
    auto_rotate: true,
    auto_rotate_speed_deg: 3.0,
    zoom_enabled: true,
    rotate_enabled: true,
    pan_enabled: false,
};

/// Free-look variant for debugging marker placement.
pub const INSPECT_POLICY: CameraPolicy = CameraPolicy {
    auto_rotate: true,
    auto_rotate_speed_deg: 9.0,
    zoom_enabled: true,
    rotate_enabled: true,
    pan_enabled: true,
};

impl CameraPolicy {
    /// Resolve a manifest policy name, falling back to the showcase preset.
    pub fn from_name(name: &str) -> CameraPolicy {
        match name {
            "inspect" => INSPECT_POLICY,
            _ => SHOWCASE_POLICY,
        }
    }
}
