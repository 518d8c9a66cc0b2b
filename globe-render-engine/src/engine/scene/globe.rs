use bevy::prelude::*;
use constants::scene_settings::{
    BACKDROP_RADIUS, GLOBE_MESH_SECTORS, GLOBE_MESH_STACKS, GLOBE_RADIUS, OCEAN_FALLBACK_COLOUR,
    SPACE_CLEAR_COLOUR,
};

#[derive(Component)]
pub struct Globe;

#[derive(Component)]
pub struct Backdrop;

/// Spawn the rendering surface's own scene content: the globe sphere, the
/// starfield backdrop, and a stock fill light.
///
/// The stock light only exists so the surface is never pitch black before
/// composition; the composer strips it along with any other light it finds.
pub fn spawn_globe(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) {
    let globe_material = materials.add(StandardMaterial {
        base_color: OCEAN_FALLBACK_COLOUR,
        perceptual_roughness: 1.0,
        ..default()
    });
    commands.spawn((
        Globe,
        Mesh3d(meshes.add(
            Sphere::new(GLOBE_RADIUS)
                .mesh()
                .uv(GLOBE_MESH_SECTORS as u32, GLOBE_MESH_STACKS as u32),
        )),
        MeshMaterial3d(globe_material),
        Transform::default(),
    ));

    // Inside-out sphere carrying the starfield; hidden until its texture
    // arrives so the clear colour shows through in the meantime.
    let backdrop_material = materials.add(StandardMaterial {
        base_color: SPACE_CLEAR_COLOUR,
        unlit: true,
        cull_mode: None,
        ..default()
    });
    commands.spawn((
        Backdrop,
        Mesh3d(meshes.add(Sphere::new(BACKDROP_RADIUS).mesh().uv(32, 16))),
        MeshMaterial3d(backdrop_material),
        Transform::default(),
        Visibility::Hidden,
    ));

    commands.spawn((
        PointLight {
            intensity: 2_000_000.0,
            range: 2_000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 400.0),
    ));
}
