use bevy::prelude::*;
use constants::render_settings::{
    AMBIENT_LIGHT_BRIGHTNESS, DIRECTIONAL_LIGHT_ILLUMINANCE, DIRECTIONAL_LIGHT_POSITION,
};

use crate::engine::core::app_state::ViewerEntity;

pub fn spawn_lighting(commands: &mut Commands) {
    commands.insert_resource(AmbientLight {
        brightness: AMBIENT_LIGHT_BRIGHTNESS,
        ..default()
    });

    commands.spawn((
        ViewerEntity,
        DirectionalLight {
            illuminance: DIRECTIONAL_LIGHT_ILLUMINANCE,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(DIRECTIONAL_LIGHT_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

pub fn reset_ambient_light(mut commands: Commands) {
    commands.insert_resource(AmbientLight::default());
}
