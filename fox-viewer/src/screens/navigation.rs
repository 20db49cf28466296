use bevy::prelude::*;

use crate::engine::assets::viewer_config::{GestureSettings, ViewerConfig};
use crate::engine::core::app_state::AppState;
use crate::engine::input::pointer::{PointerEvent, PointerPhase};

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigateEvent {
    To(AppState),
    Back,
}

/// Screens visited before the current one, most recent last.
#[derive(Resource, Debug, Default)]
pub struct NavigationHistory {
    stack: Vec<AppState>,
}

impl NavigationHistory {
    /// Record leaving `current` for `destination`. Returns the state to switch to.
    pub fn push(&mut self, current: AppState, destination: AppState) -> Option<AppState> {
        if current == destination {
            return None;
        }
        self.stack.push(current);
        Some(destination)
    }

    pub fn back(&mut self) -> Option<AppState> {
        self.stack.pop()
    }

    pub fn can_go_back(&self) -> bool {
        !self.stack.is_empty()
    }
}

/// Whether ambient navigation gestures (edge swipe-back) may fire.
///
/// The viewer disables them while its own pan gesture owns the screen.
#[derive(Resource, Debug)]
pub struct NavigationGestures {
    enabled: bool,
}

impl Default for NavigationGestures {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl NavigationGestures {
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    /// Re-enable unconditionally.
    pub fn restore(&mut self) {
        self.enabled = true;
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }
}

/// Swipe from the left screen edge to go back.
#[derive(Debug, Default)]
pub struct EdgeSwipeRecognizer {
    tracking: Option<(u64, Vec2)>,
}

impl EdgeSwipeRecognizer {
    /// Returns true when a swipe-back completes.
    pub fn process(
        &mut self,
        event: &PointerEvent,
        settings: &GestureSettings,
        enabled: bool,
    ) -> bool {
        if !enabled {
            self.tracking = None;
            return false;
        }

        match event.phase {
            PointerPhase::Pressed => {
                if self.tracking.is_none() && event.position.x <= settings.edge_swipe_width {
                    self.tracking = Some((event.id, event.position));
                }
                false
            }
            PointerPhase::Moved => {
                let Some((id, start)) = self.tracking else {
                    return false;
                };
                if id != event.id {
                    return false;
                }
                let travel = event.position - start;
                if travel.x >= settings.edge_swipe_distance && travel.x > travel.y.abs() {
                    self.tracking = None;
                    return true;
                }
                false
            }
            PointerPhase::Released | PointerPhase::Cancelled => {
                if matches!(self.tracking, Some((id, _)) if id == event.id) {
                    self.tracking = None;
                }
                false
            }
        }
    }
}

pub fn recognize_edge_swipe(
    mut pointer_events: EventReader<PointerEvent>,
    mut recognizer: Local<EdgeSwipeRecognizer>,
    gestures: Res<NavigationGestures>,
    config: Res<ViewerConfig>,
    mut navigate: EventWriter<NavigateEvent>,
) {
    for event in pointer_events.read() {
        if recognizer.process(event, &config.gesture, gestures.enabled()) {
            debug!("Edge swipe-back recognised");
            navigate.write(NavigateEvent::Back);
        }
    }
}

pub fn handle_navigation(
    mut events: EventReader<NavigateEvent>,
    mut history: ResMut<NavigationHistory>,
    current: Res<State<AppState>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    for event in events.read() {
        let target = match event {
            NavigateEvent::To(destination) => history.push(*current.get(), *destination),
            NavigateEvent::Back => {
                if !history.can_go_back() {
                    debug!("Back requested with no previous screen");
                }
                history.back()
            }
        };

        if let Some(state) = target {
            info!("→ Navigating to {:?}", state);
            next_state.set(state);
            // One transition per frame; later events would read a stale current state.
            break;
        }
    }
}

pub fn disable_navigation_gestures(mut gestures: ResMut<NavigationGestures>) {
    gestures.disable();
    debug!("Navigation gestures disabled");
}

pub fn restore_navigation_gestures(mut gestures: ResMut<NavigationGestures>) {
    gestures.restore();
    debug!("Navigation gestures restored");
}

#[cfg(not(target_arch = "wasm32"))]
pub fn navigate_back_on_escape(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut navigate: EventWriter<NavigateEvent>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        navigate.write(NavigateEvent::Back);
    }
}
