use bevy::prelude::*;
use constants::coordinate_system::{geo_to_world, surface_normal};
use constants::scene_settings::{GLOBE_RADIUS, MARKER_MIN_HEIGHT, MARKER_RADIUS};
use constants::tier::{PopulationTier, TIER_MAP};

use crate::engine::assets::population::PopulationPoint;

/// Marker column backing one rendered point; carries its record for picks.
#[derive(Component)]
pub struct PopulationMarker {
    pub point: PopulationPoint,
}

/// Despawn the previous marker generation and spawn one column per point.
///
/// The swap is wholesale, mirroring the session collection replacement, so
/// a re-ingest never leaves a mixed generation on screen.
pub fn spawn_population_markers(
    commands: &mut Commands,
    existing: &Query<Entity, With<PopulationMarker>>,
    points: &[PopulationPoint],
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) {
    for entity in existing.iter() {
        commands.entity(entity).despawn();
    }

    // One shared material per tier rather than one per marker.
    let tier_materials: Vec<(PopulationTier, Handle<StandardMaterial>)> = TIER_MAP
        .iter()
        .map(|info| {
            (
                info.tier,
                materials.add(StandardMaterial {
                    base_color: info.colour(),
                    perceptual_roughness: 0.9,
                    ..default()
                }),
            )
        })
        .collect();

    // Unit-height column scaled per marker; radius lives in the mesh.
    let unit_column = meshes.add(Cylinder::new(MARKER_RADIUS, 1.0));

    for point in points {
        let material = tier_materials
            .iter()
            .find(|(tier, _)| *tier == point.tier)
            .map(|(_, handle)| handle.clone())
            .unwrap_or_default();

        let height = (point.render_altitude * GLOBE_RADIUS).max(MARKER_MIN_HEIGHT);
        let normal = surface_normal(point.latitude, point.longitude);
        let base = geo_to_world(point.latitude, point.longitude, GLOBE_RADIUS);

        commands.spawn((
            PopulationMarker {
                point: point.clone(),
            },
            Mesh3d(unit_column.clone()),
            MeshMaterial3d(material),
            Transform {
                translation: base + normal * (height * 0.5),
                rotation: Quat::from_rotation_arc(Vec3::Y, normal),
                scale: Vec3::new(1.0, height, 1.0),
            },
        ));
    }
}
