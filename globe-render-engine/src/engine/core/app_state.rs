use bevy::prelude::*;

use crate::engine::core::session::GlobeSession;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::composer::SceneComposition;
use crate::rpc::web_rpc::WebRpcInterface;

/// Session lifecycle. A single transition, driven by the settle timer the
/// scene composer starts; there is no way back to `Loading`.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Ready,
}

/// Tick the settle timer and flip the session to ready exactly once.
///
/// The delay is a presentation heuristic masking early layout shift while
/// the first frames settle; dataset ingestion and the glow fetch keep
/// running independently and may complete on either side of it.
pub fn transition_to_ready(
    time: Res<Time>,
    mut composition: ResMut<SceneComposition>,
    mut session: ResMut<GlobeSession>,
    mut next_state: ResMut<NextState<AppState>>,
    mut rpc: ResMut<WebRpcInterface>,
) {
    let Some(timer) = composition.settle.as_mut() else {
        return;
    };
    if !timer.tick(time.delta()).just_finished() {
        return;
    }
    composition.settle = None;

    if session.mark_ready() {
        println!("→ Session ready, transitioning to Ready state");
        next_state.set(AppState::Ready);
        rpc.send_notification(
            "session_ready",
            serde_json::json!({ "points": session.points().len() }),
        );
    }
}

/// Push loading progress to the embedding frontend whenever it changes.
pub fn update_loading_frontend(
    progress: Res<LoadingProgress>,
    mut rpc: ResMut<WebRpcInterface>,
) {
    if !progress.is_changed() {
        return;
    }
    rpc.send_notification("loading_progress", progress.to_frontend_payload());
}
