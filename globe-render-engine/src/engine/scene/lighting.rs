use bevy::prelude::*;
use constants::scene_settings::{
    AMBIENT_LIGHT_BRIGHTNESS, AMBIENT_LIGHT_COLOUR, DIRECTIONAL_LIGHT_ILLUMINANCE,
    DIRECTIONAL_LIGHT_POSITION,
};

/// Query filter matching every light entity the surface may have created.
pub type StockLightFilter = Or<(With<PointLight>, With<DirectionalLight>, With<SpotLight>)>;

/// Marks lighting installed by the composer.
#[derive(Component)]
pub struct SceneLight;

/// Composition step one: remove every light the surface created for itself.
pub fn strip_stock_lights(commands: &mut Commands, lights: &Query<Entity, StockLightFilter>) {
    for entity in lights.iter() {
        commands.entity(entity).despawn();
    }
}

/// Composition steps two and three: a uniform low-intensity fill plus one
/// off-axis key light so the globe and marker columns shade asymmetrically.
pub fn install_scene_lighting(commands: &mut Commands) {
    commands.insert_resource(AmbientLight {
        color: AMBIENT_LIGHT_COLOUR,
        brightness: AMBIENT_LIGHT_BRIGHTNESS,
        ..default()
    });
    commands.spawn((
        SceneLight,
        DirectionalLight {
            illuminance: DIRECTIONAL_LIGHT_ILLUMINANCE,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(DIRECTIONAL_LIGHT_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
