use bevy::asset::LoadState;
use bevy::prelude::*;
use constants::path::RELATIVE_MANIFEST_PATH;

use crate::engine::assets::globe_assets::GlobeAssets;
use crate::engine::assets::manifest::GlobeManifest;
use crate::engine::loading::progress::LoadingProgress;

#[derive(Resource, Default)]
pub struct ManifestLoader {
    handle: Option<Handle<GlobeManifest>>,
}

/// Start the loading process by requesting the scene manifest.
pub fn start_loading(
    mut manifest_loader: ResMut<ManifestLoader>,
    mut globe_assets: ResMut<GlobeAssets>,
    asset_server: Res<AssetServer>,
) {
    println!("Loading scene manifest from: {RELATIVE_MANIFEST_PATH}");
    let handle = asset_server.load(RELATIVE_MANIFEST_PATH);
    globe_assets.manifest = handle.clone();
    manifest_loader.handle = Some(handle);
}

/// Apply the manifest once parsed, then kick off the dataset and surface
/// texture fetches. A manifest that fails to load degrades to defaults so
/// the session still comes up.
pub fn apply_manifest(
    mut progress: ResMut<LoadingProgress>,
    manifest_loader: Res<ManifestLoader>,
    mut globe_assets: ResMut<GlobeAssets>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    manifests: Res<Assets<GlobeManifest>>,
) {
    if progress.manifest_applied {
        return;
    }
    let Some(handle) = manifest_loader.handle.as_ref() else {
        return;
    };

    let manifest = match asset_server.get_load_state(handle) {
        Some(LoadState::Failed(error)) => {
            warn!("scene manifest unavailable ({error}), continuing with defaults");
            GlobeManifest::default()
        }
        _ => match manifests.get(handle) {
            Some(manifest) => manifest.clone(),
            None => return,
        },
    };

    globe_assets.dataset_path = manifest.dataset.clone();
    globe_assets.dataset = asset_server.load(manifest.dataset.as_str());
    globe_assets.surface_texture = asset_server.load(manifest.textures.surface.as_str());
    globe_assets.backdrop_texture = asset_server.load(manifest.textures.backdrop.as_str());

    commands.insert_resource(manifest);
    progress.manifest_applied = true;
    println!("✓ Scene manifest applied");
}
