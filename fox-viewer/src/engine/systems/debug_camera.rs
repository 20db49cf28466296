use bevy::prelude::*;

use crate::engine::camera::orbit::OrbitController;

/// F1 dumps the orbit controller as JSON.
pub fn debug_orbit_state(controller: Res<OrbitController>, keyboard: Res<ButtonInput<KeyCode>>) {
    if !keyboard.just_pressed(KeyCode::F1) {
        return;
    }

    match serde_json::to_string_pretty(&*controller) {
        Ok(json) => info!("=== ORBIT CONTROLLER STATE ===\n{}", json),
        Err(e) => error!("Failed to serialize orbit state: {}", e),
    }
}
