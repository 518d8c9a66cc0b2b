use bevy::prelude::*;
use constants::camera_policy::SHOWCASE_POLICY;
use constants::path::DEFAULT_GLOW_TEXTURE_PATH;
use constants::scene_settings::READY_SETTLE_SECS;

use crate::engine::assets::globe_assets::GlobeAssets;
use crate::engine::assets::manifest::GlobeManifest;
use crate::engine::camera::orbit_camera::OrbitCamera;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::globe::Globe;
use crate::engine::scene::lighting::{install_scene_lighting, strip_stock_lights, StockLightFilter};

/// One-time signal that the surface finished its own setup (globe, camera,
/// configuration) and is safe to configure further.
#[derive(Event, Debug, Default)]
pub struct SurfaceReadyEvent;

/// Glow billboard lifecycle. `Unavailable` latches on fetch failure so no
/// pending reference is left behind.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum GlowStage {
    #[default]
    NotRequested,
    Loading,
    Spawned,
    Unavailable,
}

/// Composition progress. Every step latches a flag here, which is what makes
/// a repeated surface-ready signal a no-op instead of a duplicate scene.
#[derive(Resource, Default)]
pub struct SceneComposition {
    pub lights_installed: bool,
    pub glow: GlowStage,
    pub controls_configured: bool,
    /// Settle timer started by the final composition step; consumed by the
    /// ready transition.
    pub settle: Option<Timer>,
    surface_announced: bool,
}

impl SceneComposition {
    pub fn is_composed(&self) -> bool {
        self.lights_installed && self.controls_configured
    }
}

/// Announce the surface exactly once, after its own setup has produced the
/// globe, the camera, and the resolved configuration.
pub fn emit_surface_ready(
    mut composition: ResMut<SceneComposition>,
    progress: Res<LoadingProgress>,
    globes: Query<(), With<Globe>>,
    cameras: Query<(), With<Camera3d>>,
    mut ready_events: EventWriter<SurfaceReadyEvent>,
) {
    if composition.surface_announced {
        return;
    }
    if globes.is_empty() || cameras.is_empty() || !progress.manifest_applied {
        return;
    }
    composition.surface_announced = true;
    ready_events.write(SurfaceReadyEvent);
}

/// The ordered composition sequence, run on the surface-ready signal:
/// strip stock lights, install scene lighting, request the glow texture,
/// apply the camera policy, and start the settle timer.
pub fn compose_scene(
    mut ready_events: EventReader<SurfaceReadyEvent>,
    mut composition: ResMut<SceneComposition>,
    mut progress: ResMut<LoadingProgress>,
    mut commands: Commands,
    mut globe_assets: ResMut<GlobeAssets>,
    asset_server: Res<AssetServer>,
    manifest: Option<Res<GlobeManifest>>,
    mut orbit_camera: ResMut<OrbitCamera>,
    stock_lights: Query<Entity, StockLightFilter>,
) {
    if ready_events.is_empty() {
        return;
    }
    ready_events.clear();

    if composition.lights_installed {
        return;
    }

    strip_stock_lights(&mut commands, &stock_lights);
    install_scene_lighting(&mut commands);
    composition.lights_installed = true;

    // The glow fetch is asynchronous; the billboard spawns on completion
    // and a failure degrades to no halo.
    let glow_path = manifest
        .as_ref()
        .map(|m| m.textures.glow.clone())
        .unwrap_or_else(|| DEFAULT_GLOW_TEXTURE_PATH.to_string());
    globe_assets.glow_texture = asset_server.load(glow_path);
    composition.glow = GlowStage::Loading;

    // Camera behaviour is configuration, not logic: the policy decides
    // rotation speed and whether panning is permitted.
    orbit_camera.policy = manifest
        .as_ref()
        .map(|m| m.camera_policy())
        .unwrap_or(SHOWCASE_POLICY);
    composition.controls_configured = true;

    composition.settle = Some(Timer::from_seconds(READY_SETTLE_SECS, TimerMode::Once));
    progress.scene_composed = true;
    println!("✓ Scene composed: lighting installed, glow requested, camera policy applied");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::scene::lighting::SceneLight;
    use bevy::ecs::system::RunSystemOnce;

    // The full compose system needs a live asset server, so the tests drive
    // the lighting steps through the same guard the system uses.
    fn run_guarded_lighting(world: &mut World, composition: &mut SceneComposition) {
        if composition.lights_installed {
            return;
        }
        world
            .run_system_once(
                |mut commands: Commands, lights: Query<Entity, StockLightFilter>| {
                    strip_stock_lights(&mut commands, &lights);
                    install_scene_lighting(&mut commands);
                },
            )
            .unwrap();
        composition.lights_installed = true;
    }

    fn count_directional(world: &mut World) -> usize {
        let mut query = world.query_filtered::<(), With<DirectionalLight>>();
        query.iter(world).count()
    }

    fn count_point(world: &mut World) -> usize {
        let mut query = world.query_filtered::<(), With<PointLight>>();
        query.iter(world).count()
    }

    fn count_scene_lights(world: &mut World) -> usize {
        let mut query = world.query_filtered::<(), With<SceneLight>>();
        query.iter(world).count()
    }

    #[test]
    fn repeated_signals_install_lighting_exactly_once() {
        let mut world = World::new();
        // Surface-created stock lights.
        world.spawn(PointLight::default());
        world.spawn(PointLight::default());

        let mut composition = SceneComposition::default();
        run_guarded_lighting(&mut world, &mut composition);
        run_guarded_lighting(&mut world, &mut composition);

        assert_eq!(count_directional(&mut world), 1);
        assert_eq!(count_point(&mut world), 0);
        assert!(world.get_resource::<AmbientLight>().is_some());
    }

    #[test]
    fn stripping_clears_every_stock_light_kind() {
        let mut world = World::new();
        world.spawn(PointLight::default());
        world.spawn(SpotLight::default());
        world.spawn(DirectionalLight::default());

        let mut composition = SceneComposition::default();
        run_guarded_lighting(&mut world, &mut composition);

        // Only the freshly installed key light survives.
        assert_eq!(count_directional(&mut world), 1);
        assert_eq!(count_scene_lights(&mut world), 1);
    }

    #[test]
    fn glow_stage_latches() {
        let mut composition = SceneComposition::default();
        assert_eq!(composition.glow, GlowStage::NotRequested);
        assert!(!composition.is_composed());

        composition.lights_installed = true;
        composition.glow = GlowStage::Loading;
        composition.controls_configured = true;
        assert!(composition.is_composed());

        // Failure latches; nothing re-polls an unavailable glow.
        composition.glow = GlowStage::Unavailable;
        assert_eq!(composition.glow, GlowStage::Unavailable);
    }
}
