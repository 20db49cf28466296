use bevy::prelude::*;

use super::orbit::OrbitController;
use crate::engine::input::pan_gesture::{PanGestureEvent, PanGestureState};

#[derive(Component)]
pub struct OrbitCamera;

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomAction {
    In,
    Out,
}

/// Feed pan gestures into the orbit controller.
pub fn apply_pan_gestures(
    mut pan_events: EventReader<PanGestureEvent>,
    mut controller: ResMut<OrbitController>,
) {
    for event in pan_events.read() {
        match event.state {
            PanGestureState::Began => debug!("Pan began - ready to track"),
            PanGestureState::Active => trace!(
                "Pan active at ({:.0}, {:.0})",
                event.absolute.x, event.absolute.y
            ),
            PanGestureState::End => debug!("Pan ended - rotation preserved"),
            PanGestureState::Cancelled | PanGestureState::Failed => {
                debug!("Pan {:?}", event.state)
            }
            PanGestureState::Undetermined => {}
        }
        controller.handle_pan(event);
    }
}

pub fn apply_zoom_actions(
    mut zoom_actions: EventReader<ZoomAction>,
    mut controller: ResMut<OrbitController>,
) {
    for action in zoom_actions.read() {
        match action {
            ZoomAction::In => controller.zoom_in(),
            ZoomAction::Out => controller.zoom_out(),
        }
        info!(
            "Zoom {:?} - target radius {:.1}",
            action, controller.zoom.target_radius
        );
    }
}

/// Advance momentum and smoothing, then place the camera looking at the origin.
pub fn update_orbit_camera(
    time: Res<Time>,
    mut controller: ResMut<OrbitController>,
    mut camera_query: Query<&mut Transform, With<OrbitCamera>>,
) {
    let position = controller.advance(time.delta_secs());

    for mut transform in &mut camera_query {
        *transform = Transform::from_translation(position).looking_at(Vec3::ZERO, Vec3::Y);
    }
}
