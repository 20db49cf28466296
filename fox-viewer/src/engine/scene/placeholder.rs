use bevy::prelude::*;
use constants::model::PLACEHOLDER_SIZE;
use constants::render_settings::PLACEHOLDER_COLOUR;

use crate::engine::core::app_state::ViewerEntity;

/// Cube shown at the origin until the model is attached.
#[derive(Component)]
pub struct Placeholder;

pub fn spawn_placeholder(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    commands.spawn((
        Placeholder,
        ViewerEntity,
        Name::new("Placeholder"),
        Mesh3d(meshes.add(Cuboid::from_length(PLACEHOLDER_SIZE))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: PLACEHOLDER_COLOUR,
            perceptual_roughness: 0.8,
            ..default()
        })),
        Transform::IDENTITY,
    ));
}
