use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use constants::camera_policy::{CameraPolicy, SHOWCASE_POLICY};
use constants::scene_settings::{CAMERA_MAX_DISTANCE, CAMERA_MIN_DISTANCE, CAMERA_START_DISTANCE};

/// Orbit rig around the globe centre.
///
/// The policy decides which inputs are honoured; the controller itself has
/// no per-policy branching beyond those flags.
#[derive(Resource)]
pub struct OrbitCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub focus_point: Vec3,
    pub policy: CameraPolicy,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: -0.35,
            distance: CAMERA_START_DISTANCE,
            focus_point: Vec3::ZERO,
            policy: SHOWCASE_POLICY,
        }
    }
}

impl OrbitCamera {
    /// Continuous presentation spin, applied every frame while enabled.
    pub fn advance_auto_rotation(&mut self, delta_secs: f32) {
        if self.policy.auto_rotate {
            self.yaw += self.policy.auto_rotate_speed_deg.to_radians() * delta_secs;
        }
    }

    /// Camera pose for the current rig state.
    pub fn eye_transform(&self) -> Transform {
        let rotation = Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0);
        let eye = self.focus_point + rotation * (Vec3::Z * self.distance);
        Transform::from_translation(eye).looking_at(self.focus_point, Vec3::Y)
    }
}

pub fn spawn_camera(commands: &mut Commands) {
    let rig = OrbitCamera::default();
    commands.spawn((Camera3d::default(), rig.eye_transform()));
}

pub fn camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut rig: ResMut<OrbitCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    time: Res<Time>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    rig.advance_auto_rotation(time.delta_secs());

    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();

    // Left drag orbits the globe.
    if rig.policy.rotate_enabled && mouse_button.pressed(MouseButton::Left) && mouse_delta != Vec2::ZERO
    {
        let yaw_sens = 0.0035;
        let pitch_sens = 0.0030;
        rig.yaw -= mouse_delta.x * yaw_sens;
        rig.pitch = (rig.pitch - mouse_delta.y * pitch_sens).clamp(-1.45, 1.45);
    }

    // Right drag pans the focus point when the policy permits it.
    if rig.policy.pan_enabled && mouse_button.pressed(MouseButton::Right) && mouse_delta != Vec2::ZERO
    {
        let rotation = Quat::from_euler(EulerRot::YXZ, rig.yaw, rig.pitch, 0.0);
        let right = rotation * Vec3::X;
        let up = rotation * Vec3::Y;
        let pan_speed = rig.distance * 0.001;
        let panned = rig.focus_point - right * mouse_delta.x * pan_speed
            + up * mouse_delta.y * pan_speed;
        rig.focus_point = panned;
    }

    // Scroll dollies along the view axis.
    if rig.policy.zoom_enabled {
        let mut scroll_accum = 0.0;
        for ev in scroll_events.read() {
            scroll_accum += match ev.unit {
                MouseScrollUnit::Line => ev.y * 1.0,
                MouseScrollUnit::Pixel => ev.y * 0.05,
            };
        }
        if scroll_accum.abs() > f32::EPSILON {
            let dolly_speed = (rig.distance * 0.1).clamp(1.0, 100.0);
            rig.distance = (rig.distance - scroll_accum * dolly_speed)
                .clamp(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE);
        }
    } else {
        scroll_events.clear();
    }

    // Smooth toward the target pose, frame-rate independent.
    let target = rig.eye_transform();
    let lerp_speed = (12.0 * time.delta_secs()).min(1.0);
    camera_transform.translation = camera_transform
        .translation
        .lerp(target.translation, lerp_speed);
    camera_transform.rotation = camera_transform.rotation.slerp(target.rotation, lerp_speed);
}

#[cfg(test)]
mod tests {
    use super::*;
    use constants::camera_policy::INSPECT_POLICY;

    #[test]
    fn auto_rotation_advances_yaw_at_policy_speed() {
        let mut rig = OrbitCamera::default();
        let before = rig.yaw;
        rig.advance_auto_rotation(2.0);
        let expected = SHOWCASE_POLICY.auto_rotate_speed_deg.to_radians() * 2.0;
        assert!((rig.yaw - before - expected).abs() < 1e-6);
    }

    #[test]
    fn auto_rotation_respects_the_policy_flag() {
        let mut rig = OrbitCamera::default();
        rig.policy.auto_rotate = false;
        rig.advance_auto_rotation(2.0);
        assert_eq!(rig.yaw, 0.0);
    }

    #[test]
    fn eye_keeps_the_configured_distance() {
        let mut rig = OrbitCamera::default();
        rig.policy = INSPECT_POLICY;
        rig.yaw = 1.2;
        rig.pitch = -0.4;
        let transform = rig.eye_transform();
        assert!(
            (transform.translation.distance(rig.focus_point) - rig.distance).abs() < 1e-3
        );
    }
}
