use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::engine::assets::globe_assets::GlobeAssets;
use crate::engine::assets::population::PopulationDataset;
use crate::engine::core::session::GlobeSession;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::markers::{spawn_population_markers, PopulationMarker};
use crate::rpc::web_rpc::WebRpcInterface;

/// Frontend or keyboard request to retry a failed dataset fetch.
#[derive(Event, Debug, Default)]
pub struct ReloadDatasetEvent;

/// Poll the dataset handle and ingest on completion.
///
/// Runs in every state: ingestion and scene composition are independent and
/// a slow fetch may land after the session is already presenting. Only the
/// handle currently held in `GlobeAssets` is ever read, so a result for a
/// stale handle is discarded rather than applied.
pub fn ingest_dataset(
    mut progress: ResMut<LoadingProgress>,
    mut session: ResMut<GlobeSession>,
    globe_assets: Res<GlobeAssets>,
    asset_server: Res<AssetServer>,
    datasets: Res<Assets<PopulationDataset>>,
    mut rpc: ResMut<WebRpcInterface>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    existing_markers: Query<Entity, With<PopulationMarker>>,
) {
    if !progress.manifest_applied || progress.dataset_loaded {
        return;
    }

    match asset_server.get_load_state(&globe_assets.dataset) {
        Some(LoadState::Failed(error)) => {
            if progress.dataset_error.is_none() {
                let message = format!(
                    "dataset `{}` failed to load: {error}",
                    globe_assets.dataset_path
                );
                warn!("{message}");
                rpc.send_notification(
                    "dataset_error",
                    serde_json::json!({
                        "message": message,
                        "retry_method": "reload_dataset",
                    }),
                );
                progress.dataset_error = Some(message);
            }
        }
        _ => {
            let Some(dataset) = datasets.get(&globe_assets.dataset) else {
                return;
            };
            if dataset.skipped_rows > 0 {
                warn!("skipped {} malformed dataset rows", dataset.skipped_rows);
            }
            session.replace_points(dataset.points.clone(), dataset.skipped_rows);
            spawn_population_markers(
                &mut commands,
                &existing_markers,
                session.points(),
                &mut meshes,
                &mut materials,
            );
            progress.dataset_loaded = true;
            progress.dataset_error = None;
            progress.skipped_rows = dataset.skipped_rows;
            println!("✓ Dataset ingested: {} points", session.points().len());
        }
    }
}

/// Swap in a fresh handle on retry. The previous fetch, if somehow still in
/// flight, resolves against the replaced handle and is dropped unapplied.
/// At most one dataset request is in flight per session.
pub fn handle_reload_requests(
    mut events: EventReader<ReloadDatasetEvent>,
    mut progress: ResMut<LoadingProgress>,
    mut globe_assets: ResMut<GlobeAssets>,
    asset_server: Res<AssetServer>,
) {
    if events.is_empty() {
        return;
    }
    events.clear();

    if !progress.manifest_applied {
        return;
    }
    // Ignore retries while the first request is still pending.
    if progress.dataset_error.is_none() && !progress.dataset_loaded {
        return;
    }

    let path = globe_assets.dataset_path.clone();
    println!("Reloading dataset from: {path}");
    asset_server.reload(path.as_str());
    globe_assets.dataset = asset_server.load(path.as_str());
    progress.dataset_loaded = false;
    progress.dataset_error = None;
}
