use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::engine::assets::globe_assets::GlobeAssets;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::globe::{Backdrop, Globe};

/// Attach textures to the globe and backdrop once their fetches complete.
///
/// Failure is non-fatal: the globe keeps its flat ocean tint and the
/// backdrop stays hidden over the clear colour.
pub fn configure_loaded_textures(
    mut progress: ResMut<LoadingProgress>,
    globe_assets: Res<GlobeAssets>,
    asset_server: Res<AssetServer>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    globe_query: Query<&MeshMaterial3d<StandardMaterial>, With<Globe>>,
    mut backdrop_query: Query<
        (&MeshMaterial3d<StandardMaterial>, &mut Visibility),
        With<Backdrop>,
    >,
) {
    if !progress.manifest_applied {
        return;
    }

    if !progress.surface_textured {
        match asset_server.get_load_state(&globe_assets.surface_texture) {
            Some(LoadState::Loaded) => {
                if let Ok(material_handle) = globe_query.single() {
                    if let Some(material) = materials.get_mut(&material_handle.0) {
                        material.base_color = Color::WHITE;
                        material.base_color_texture = Some(globe_assets.surface_texture.clone());
                        progress.surface_textured = true;
                        println!("✓ Globe surface texture applied");
                    }
                }
            }
            Some(LoadState::Failed(_)) => {
                warn!("surface texture unavailable, keeping flat ocean tint");
                progress.surface_textured = true;
            }
            _ => {}
        }
    }

    if !progress.backdrop_textured {
        match asset_server.get_load_state(&globe_assets.backdrop_texture) {
            Some(LoadState::Loaded) => {
                if let Ok((material_handle, mut visibility)) = backdrop_query.single_mut() {
                    if let Some(material) = materials.get_mut(&material_handle.0) {
                        material.base_color = Color::WHITE;
                        material.base_color_texture =
                            Some(globe_assets.backdrop_texture.clone());
                        *visibility = Visibility::Visible;
                        progress.backdrop_textured = true;
                        println!("✓ Starfield backdrop applied");
                    }
                }
            }
            Some(LoadState::Failed(_)) => {
                warn!("backdrop texture unavailable, keeping clear colour");
                progress.backdrop_textured = true;
            }
            _ => {}
        }
    }
}
