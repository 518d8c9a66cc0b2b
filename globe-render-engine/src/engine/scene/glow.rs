use bevy::asset::LoadState;
use bevy::prelude::*;
use constants::scene_settings::GLOW_SETTINGS;

use crate::engine::assets::globe_assets::GlobeAssets;
use crate::engine::scene::composer::{GlowStage, SceneComposition};

#[derive(Component)]
pub struct GlowSprite;

/// Spawn the halo billboard once its texture arrives.
///
/// Runs in every state because the fetch is independent of the settle
/// timer. A failed fetch latches `Unavailable` so the session continues
/// without a halo and nothing is left pending.
pub fn spawn_glow_when_loaded(
    mut composition: ResMut<SceneComposition>,
    globe_assets: Res<GlobeAssets>,
    asset_server: Res<AssetServer>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if composition.glow != GlowStage::Loading {
        return;
    }

    match asset_server.get_load_state(&globe_assets.glow_texture) {
        Some(LoadState::Loaded) => {
            let material = materials.add(StandardMaterial {
                // Alpha blending keeps the quad out of the depth buffer, so
                // the halo composites over the globe without occluding it.
                base_color: GLOW_SETTINGS.colour(),
                base_color_texture: Some(globe_assets.glow_texture.clone()),
                unlit: true,
                alpha_mode: AlphaMode::Blend,
                cull_mode: None,
                ..default()
            });
            commands.spawn((
                GlowSprite,
                Mesh3d(meshes.add(Rectangle::new(GLOW_SETTINGS.scale, GLOW_SETTINGS.scale))),
                MeshMaterial3d(material),
                Transform::default(),
            ));
            composition.glow = GlowStage::Spawned;
            println!("✓ Glow billboard spawned");
        }
        Some(LoadState::Failed(_)) => {
            composition.glow = GlowStage::Unavailable;
            warn!("glow texture unavailable, continuing without halo");
        }
        _ => {}
    }
}

/// Keep the halo facing the camera. Orientation only; the billboard stays
/// centred on the globe.
pub fn face_glow_to_camera(
    cameras: Query<&Transform, (With<Camera3d>, Without<GlowSprite>)>,
    mut glows: Query<&mut Transform, With<GlowSprite>>,
) {
    let Ok(camera_transform) = cameras.single() else {
        return;
    };
    for mut transform in glows.iter_mut() {
        transform.rotation = camera_transform.rotation;
    }
}
