use bevy::prelude::*;
use std::collections::HashMap;

use super::pointer::{PointerEvent, PointerPhase};
use crate::engine::assets::viewer_config::GestureSettings;

#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct TapGestureEvent {
    pub position: Vec2,
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    start: Vec2,
    pressed_at: f32,
    valid: bool,
}

/// Recognises short single-pointer taps. Runs alongside the pan recognizer on the
/// same pointer stream without either one cancelling the other.
#[derive(Resource, Debug)]
pub struct TapRecognizer {
    settings: GestureSettings,
    candidates: HashMap<u64, Candidate>,
}

impl TapRecognizer {
    pub fn new(settings: GestureSettings) -> Self {
        Self {
            settings,
            candidates: HashMap::new(),
        }
    }

    pub fn process(&mut self, event: &PointerEvent) -> Option<TapGestureEvent> {
        match event.phase {
            PointerPhase::Pressed => {
                let alone = self.candidates.is_empty();
                // Multi-finger contact is never a tap.
                for candidate in self.candidates.values_mut() {
                    candidate.valid = false;
                }
                self.candidates.insert(
                    event.id,
                    Candidate {
                        start: event.position,
                        pressed_at: event.timestamp,
                        valid: alone,
                    },
                );
                None
            }
            PointerPhase::Moved => {
                let max_distance = self.settings.tap_max_distance;
                if let Some(candidate) = self.candidates.get_mut(&event.id) {
                    if candidate.start.distance(event.position) > max_distance {
                        candidate.valid = false;
                    }
                }
                None
            }
            PointerPhase::Released => {
                let candidate = self.candidates.remove(&event.id)?;
                let held = event.timestamp - candidate.pressed_at;
                let travelled = candidate.start.distance(event.position);

                (candidate.valid
                    && held <= self.settings.tap_max_duration_secs
                    && travelled <= self.settings.tap_max_distance)
                    .then_some(TapGestureEvent {
                        position: event.position,
                    })
            }
            PointerPhase::Cancelled => {
                self.candidates.remove(&event.id);
                None
            }
        }
    }
}

pub fn recognize_tap_gestures(
    mut pointer_events: EventReader<PointerEvent>,
    mut recognizer: ResMut<TapRecognizer>,
    mut tap_events: EventWriter<TapGestureEvent>,
) {
    for event in pointer_events.read() {
        if let Some(tap) = recognizer.process(event) {
            debug!("Tap at ({:.0}, {:.0})", tap.position.x, tap.position.y);
            tap_events.write(tap);
        }
    }
}
