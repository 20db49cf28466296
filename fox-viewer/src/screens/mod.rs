//! Screens and navigation between them.
//!
//! Each screen spawns its own entities on enter and despawns them on exit.

/// Loading screen shown until the viewer config resolves.
pub mod loading;

/// Home screen with the entry button for the viewer.
pub mod home;

/// Navigation history, back handling and the gesture lock.
pub mod navigation;

/// 3D model viewer screen.
pub mod viewer;

use bevy::prelude::*;

pub fn despawn_screen<T: Component>(mut commands: Commands, query: Query<Entity, With<T>>) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
}
