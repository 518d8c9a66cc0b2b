use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use constants::scene_settings::MARKER_RADIUS;

use crate::engine::assets::population::PopulationPoint;
use crate::engine::scene::markers::PopulationMarker;

/// A marker was picked under the cursor; carries the backing record.
#[derive(Event, Debug, Clone)]
pub struct PointPickedEvent {
    pub point: PopulationPoint,
}

/// Cast the viewport ray on click and test every marker volume, keeping the
/// nearest hit.
pub fn pick_population_point(
    mouse_button: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    markers: Query<(&PopulationMarker, &GlobalTransform)>,
    mut picked: EventWriter<PointPickedEvent>,
) {
    if !mouse_button.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor_pos) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(camera_transform, cursor_pos) else {
        return;
    };

    let mut nearest: Option<(f32, &PopulationMarker)> = None;
    for (marker, transform) in markers.iter() {
        let Some(distance) = ray_hits_marker(ray.origin, *ray.direction, transform) else {
            continue;
        };
        if nearest
            .as_ref()
            .map_or(true, |(best, _)| distance < *best)
        {
            nearest = Some((distance, marker));
        }
    }

    if let Some((_, marker)) = nearest {
        picked.write(PointPickedEvent {
            point: marker.point.clone(),
        });
    }
}

/// Slab test in the marker's local space. The marker mesh is a unit-height
/// column with its radius baked into the mesh, so the local box is fixed
/// and per-marker height arrives through the transform scale. Returns the
/// world-space distance to the hit so hits compare across markers.
fn ray_hits_marker(origin: Vec3, direction: Vec3, transform: &GlobalTransform) -> Option<f32> {
    let matrix = transform.compute_matrix();
    let inverse = matrix.inverse();
    let local_origin = inverse.transform_point3(origin);
    let local_direction = inverse.transform_vector3(direction);

    let half = Vec3::new(MARKER_RADIUS, 0.5, MARKER_RADIUS);
    let t = ray_aabb_hit_t(local_origin, local_direction, -half, half)?;
    let world_hit = matrix.transform_point3(local_origin + local_direction * t);
    Some((world_hit - origin).length())
}

// Slab-method ray/AABB intersection, returns the entry parameter or the
// exit when the ray starts inside the box.
fn ray_aabb_hit_t(origin: Vec3, direction: Vec3, min: Vec3, max: Vec3) -> Option<f32> {
    let mut t_enter = f32::NEG_INFINITY;
    let mut t_exit = f32::INFINITY;

    for axis in 0..3 {
        let o = origin[axis];
        let d = direction[axis];
        if d.abs() < 1e-8 {
            if o < min[axis] || o > max[axis] {
                return None;
            }
            continue;
        }
        let inv = 1.0 / d;
        let (mut t0, mut t1) = ((min[axis] - o) * inv, (max[axis] - o) * inv);
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        t_enter = t_enter.max(t0);
        t_exit = t_exit.min(t1);
        if t_enter > t_exit {
            return None;
        }
    }

    if t_exit < 0.0 {
        return None;
    }
    Some(if t_enter >= 0.0 { t_enter } else { t_exit })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HALF: Vec3 = Vec3::new(1.0, 1.0, 1.0);

    #[test]
    fn straight_on_ray_hits_the_box() {
        let t = ray_aabb_hit_t(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z, -HALF, HALF);
        assert!((t.unwrap() - 4.0).abs() < 1e-5);
    }

    #[test]
    fn offset_ray_misses_the_box() {
        let t = ray_aabb_hit_t(Vec3::new(3.0, 0.0, 5.0), Vec3::NEG_Z, -HALF, HALF);
        assert!(t.is_none());
    }

    #[test]
    fn ray_behind_the_box_misses() {
        let t = ray_aabb_hit_t(Vec3::new(0.0, 0.0, 5.0), Vec3::Z, -HALF, HALF);
        assert!(t.is_none());
    }

    #[test]
    fn ray_starting_inside_reports_the_exit() {
        let t = ray_aabb_hit_t(Vec3::ZERO, Vec3::X, -HALF, HALF);
        assert!((t.unwrap() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn axis_parallel_ray_outside_the_slab_misses() {
        let t = ray_aabb_hit_t(Vec3::new(0.0, 2.0, 5.0), Vec3::NEG_Z, -HALF, HALF);
        assert!(t.is_none());
    }
}
