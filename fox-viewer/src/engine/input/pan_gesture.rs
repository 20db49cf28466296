use bevy::prelude::*;
use std::collections::HashSet;

use super::pointer::{PointerEvent, PointerPhase};
use crate::engine::assets::viewer_config::GestureSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanGestureState {
    Undetermined,
    Began,
    Active,
    End,
    Cancelled,
    Failed,
}

/// Single-pointer pan, reported with translation accumulated since the press.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct PanGestureEvent {
    pub translation: Vec2,
    pub absolute: Vec2,
    pub state: PanGestureState,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Tracking {
    Idle,
    Pointer { id: u64, start: Vec2, active: bool },
    /// Gesture failed; wait for every pointer to lift before starting another.
    Blocked,
}

/// Recognises a one-finger pan from the pointer stream.
#[derive(Resource, Debug)]
pub struct PanRecognizer {
    settings: GestureSettings,
    tracking: Tracking,
    pressed: HashSet<u64>,
}

impl PanRecognizer {
    pub fn new(settings: GestureSettings) -> Self {
        Self {
            settings,
            tracking: Tracking::Idle,
            pressed: HashSet::new(),
        }
    }

    pub fn process(&mut self, event: &PointerEvent) -> Option<PanGestureEvent> {
        match event.phase {
            PointerPhase::Pressed => self.on_press(event),
            PointerPhase::Moved => self.on_move(event),
            PointerPhase::Released | PointerPhase::Cancelled => self.on_lift(event),
        }
    }

    fn on_press(&mut self, event: &PointerEvent) -> Option<PanGestureEvent> {
        self.pressed.insert(event.id);

        match self.tracking {
            Tracking::Idle if self.pressed.len() == 1 => {
                self.tracking = Tracking::Pointer {
                    id: event.id,
                    start: event.position,
                    active: false,
                };
                Some(self.emit(Vec2::ZERO, event.position, PanGestureState::Began))
            }
            Tracking::Pointer { start, .. } => {
                // A second finger exceeds the one-pointer limit.
                self.tracking = Tracking::Blocked;
                Some(self.emit(
                    event.position - start,
                    event.position,
                    PanGestureState::Failed,
                ))
            }
            Tracking::Idle | Tracking::Blocked => None,
        }
    }

    fn on_move(&mut self, event: &PointerEvent) -> Option<PanGestureEvent> {
        let Tracking::Pointer { id, start, active } = self.tracking else {
            return None;
        };
        if id != event.id {
            return None;
        }

        let translation = event.position - start;
        if active {
            return Some(self.emit(translation, event.position, PanGestureState::Active));
        }

        let fail = self.settings.fail_offset;
        if translation.x.abs() > fail || translation.y.abs() > fail {
            self.tracking = Tracking::Blocked;
            return Some(self.emit(translation, event.position, PanGestureState::Failed));
        }

        let offset = self.settings.active_offset;
        if translation.x.abs() > offset || translation.y.abs() > offset {
            self.tracking = Tracking::Pointer {
                id,
                start,
                active: true,
            };
            return Some(self.emit(translation, event.position, PanGestureState::Active));
        }

        None
    }

    fn on_lift(&mut self, event: &PointerEvent) -> Option<PanGestureEvent> {
        self.pressed.remove(&event.id);

        let result = match self.tracking {
            Tracking::Pointer { id, start, active } if id == event.id => {
                let state = match (event.phase, active) {
                    (PointerPhase::Cancelled, _) => PanGestureState::Cancelled,
                    (_, true) => PanGestureState::End,
                    (_, false) => PanGestureState::Failed,
                };
                self.tracking = Tracking::Blocked;
                Some(self.emit(event.position - start, event.position, state))
            }
            _ => None,
        };

        if self.pressed.is_empty() {
            self.tracking = Tracking::Idle;
        }
        result
    }

    fn emit(&self, translation: Vec2, absolute: Vec2, state: PanGestureState) -> PanGestureEvent {
        PanGestureEvent {
            translation,
            absolute,
            state,
        }
    }
}

pub fn recognize_pan_gestures(
    mut pointer_events: EventReader<PointerEvent>,
    mut recognizer: ResMut<PanRecognizer>,
    mut pan_events: EventWriter<PanGestureEvent>,
) {
    for event in pointer_events.read() {
        if let Some(pan) = recognizer.process(event) {
            pan_events.write(pan);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pointer(id: u64, phase: PointerPhase, x: f32, y: f32) -> PointerEvent {
        PointerEvent {
            id,
            phase,
            position: Vec2::new(x, y),
            timestamp: 0.0,
        }
    }

    fn states(recognizer: &mut PanRecognizer, events: &[PointerEvent]) -> Vec<PanGestureState> {
        events
            .iter()
            .filter_map(|e| recognizer.process(e))
            .map(|pan| pan.state)
            .collect()
    }

    #[test]
    fn drag_goes_through_began_active_end() {
        let mut recognizer = PanRecognizer::new(GestureSettings::default());
        let got = states(
            &mut recognizer,
            &[
                pointer(0, PointerPhase::Pressed, 100.0, 100.0),
                pointer(0, PointerPhase::Moved, 101.0, 101.0),
                pointer(0, PointerPhase::Moved, 110.0, 100.0),
                pointer(0, PointerPhase::Moved, 130.0, 90.0),
                pointer(0, PointerPhase::Released, 130.0, 90.0),
            ],
        );

        assert_eq!(
            got,
            vec![
                PanGestureState::Began,
                PanGestureState::Active,
                PanGestureState::Active,
                PanGestureState::End,
            ]
        );
    }

    #[test]
    fn translation_is_cumulative_from_press() {
        let mut recognizer = PanRecognizer::new(GestureSettings::default());
        recognizer.process(&pointer(0, PointerPhase::Pressed, 50.0, 60.0));
        recognizer.process(&pointer(0, PointerPhase::Moved, 60.0, 60.0));
        let pan = recognizer
            .process(&pointer(0, PointerPhase::Moved, 75.0, 40.0))
            .unwrap();

        assert_eq!(pan.translation, Vec2::new(25.0, -20.0));
        assert_eq!(pan.absolute, Vec2::new(75.0, 40.0));
    }

    #[test]
    fn release_before_activation_fails() {
        let mut recognizer = PanRecognizer::new(GestureSettings::default());
        let got = states(
            &mut recognizer,
            &[
                pointer(0, PointerPhase::Pressed, 10.0, 10.0),
                pointer(0, PointerPhase::Moved, 11.0, 12.0),
                pointer(0, PointerPhase::Released, 11.0, 12.0),
            ],
        );
        assert_eq!(got, vec![PanGestureState::Began, PanGestureState::Failed]);
    }

    #[test]
    fn second_pointer_fails_until_all_lift() {
        let mut recognizer = PanRecognizer::new(GestureSettings::default());
        let got = states(
            &mut recognizer,
            &[
                pointer(0, PointerPhase::Pressed, 10.0, 10.0),
                pointer(0, PointerPhase::Moved, 40.0, 10.0),
                pointer(1, PointerPhase::Pressed, 200.0, 200.0),
                pointer(0, PointerPhase::Moved, 60.0, 10.0),
                pointer(0, PointerPhase::Released, 60.0, 10.0),
                pointer(1, PointerPhase::Moved, 260.0, 200.0),
                pointer(1, PointerPhase::Released, 260.0, 200.0),
                pointer(2, PointerPhase::Pressed, 0.0, 0.0),
            ],
        );

        assert_eq!(
            got,
            vec![
                PanGestureState::Began,
                PanGestureState::Active,
                PanGestureState::Failed,
                PanGestureState::Began,
            ]
        );
    }

    #[test]
    fn large_jump_before_activation_fails() {
        let settings = GestureSettings {
            active_offset: 50.0,
            fail_offset: 100.0,
            ..GestureSettings::default()
        };
        let mut recognizer = PanRecognizer::new(settings);
        let got = states(
            &mut recognizer,
            &[
                pointer(0, PointerPhase::Pressed, 0.0, 0.0),
                pointer(0, PointerPhase::Moved, 0.0, 150.0),
                pointer(0, PointerPhase::Moved, 0.0, 160.0),
            ],
        );
        assert_eq!(got, vec![PanGestureState::Began, PanGestureState::Failed]);
    }

    #[test]
    fn cancel_is_reported_as_cancelled() {
        let mut recognizer = PanRecognizer::new(GestureSettings::default());
        let got = states(
            &mut recognizer,
            &[
                pointer(4, PointerPhase::Pressed, 0.0, 0.0),
                pointer(4, PointerPhase::Moved, 20.0, 0.0),
                pointer(4, PointerPhase::Cancelled, 20.0, 0.0),
                pointer(5, PointerPhase::Pressed, 0.0, 0.0),
            ],
        );
        assert_eq!(
            got,
            vec![
                PanGestureState::Began,
                PanGestureState::Active,
                PanGestureState::Cancelled,
                PanGestureState::Began,
            ]
        );
    }
}
