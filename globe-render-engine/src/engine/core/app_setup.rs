use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;
use constants::scene_settings::SPACE_CLEAR_COLOUR;

use crate::engine::assets::dataset_loader::PopulationDatasetPlugin;
use crate::engine::assets::globe_assets::GlobeAssets;
use crate::engine::assets::manifest::GlobeManifest;
use crate::engine::camera::orbit_camera::{camera_controller, spawn_camera, OrbitCamera};
use crate::engine::core::app_state::{transition_to_ready, update_loading_frontend, AppState};
use crate::engine::core::session::GlobeSession;
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::dataset_ingest::{
    handle_reload_requests, ingest_dataset, ReloadDatasetEvent,
};
use crate::engine::loading::manifest_loader::{apply_manifest, start_loading, ManifestLoader};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::loading::texture_loader::configure_loaded_textures;
use crate::engine::scene::composer::{
    compose_scene, emit_surface_ready, SceneComposition, SurfaceReadyEvent,
};
use crate::engine::scene::globe::spawn_globe;
use crate::engine::scene::glow::{face_glow_to_camera, spawn_glow_when_loaded};
use crate::rpc::web_rpc::WebRpcPlugin;
use crate::tools::interaction::{deliver_pick_summaries, PickSummaryEvent};
use crate::tools::point_picker::{pick_population_point, PointPickedEvent};

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers GlobeManifest as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<GlobeManifest>::new(&["manifest.json"]))
        .add_plugins(PopulationDatasetPlugin::new(&["csv"]))
        .add_plugins(WebRpcPlugin)
        .insert_resource(ClearColor(SPACE_CLEAR_COLOUR));

    // Initialise session resources early.
    app.init_resource::<GlobeSession>()
        .init_resource::<LoadingProgress>()
        .init_resource::<ManifestLoader>()
        .init_resource::<GlobeAssets>()
        .init_resource::<SceneComposition>()
        .init_resource::<OrbitCamera>()
        .add_event::<SurfaceReadyEvent>()
        .add_event::<PointPickedEvent>()
        .add_event::<PickSummaryEvent>()
        .add_event::<ReloadDatasetEvent>();

    app.add_systems(Startup, (setup, start_loading).chain());

    // Loading pipeline. Ingestion and texture configuration keep running
    // after the ready transition: the fetches are independent of the settle
    // timer and may land on either side of it.
    app.add_systems(
        Update,
        (
            apply_manifest,
            ingest_dataset,
            handle_reload_requests,
            configure_loaded_textures,
            spawn_glow_when_loaded,
            update_loading_frontend,
        )
            .chain(),
    );

    // One-shot composition sequence with strict step ordering, then the
    // single Loading → Ready transition.
    app.add_systems(
        Update,
        (emit_surface_ready, compose_scene, transition_to_ready)
            .chain()
            .run_if(in_state(AppState::Loading)),
    );

    // Camera and billboard orientation run in every state.
    app.add_systems(Update, (camera_controller, face_glow_to_camera).chain());

    // Interaction systems - only run when the session presents.
    app.add_systems(
        Update,
        (pick_population_point, deliver_pick_summaries)
            .chain()
            .run_if(in_state(AppState::Ready)),
    );

    #[cfg(not(target_arch = "wasm32"))]
    app.add_systems(Update, crate::tools::interaction::update_summary_overlay);

    app
}

/// Startup only spawns the surface's own content; lighting and camera
/// policy wait for the composition sequence.
fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    println!("=== POPULATION GLOBE RENDER ENGINE ===");
    spawn_globe(&mut commands, &mut meshes, &mut materials);
    spawn_camera(&mut commands);

    #[cfg(not(target_arch = "wasm32"))]
    crate::tools::interaction::create_summary_overlay(&mut commands);
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
