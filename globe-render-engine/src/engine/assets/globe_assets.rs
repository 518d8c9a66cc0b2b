use bevy::prelude::*;

use crate::engine::assets::manifest::GlobeManifest;
use crate::engine::assets::population::PopulationDataset;

/// Every asset handle the session holds.
///
/// Handle ownership ties load lifetimes to the session: swapping a handle
/// (dataset retry) or dropping the resource (teardown) abandons the
/// in-flight load, so a late-arriving result is never applied to a session
/// that no longer expects it.
#[derive(Resource, Default)]
pub struct GlobeAssets {
    pub manifest: Handle<GlobeManifest>,
    pub dataset: Handle<PopulationDataset>,
    pub surface_texture: Handle<Image>,
    pub backdrop_texture: Handle<Image>,
    pub glow_texture: Handle<Image>,
    /// Manifest-resolved dataset path, kept for retry requests.
    pub dataset_path: String,
}
