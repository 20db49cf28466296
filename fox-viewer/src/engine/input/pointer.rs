use bevy::input::touch::{TouchInput, TouchPhase};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use constants::gesture::MOUSE_POINTER_ID;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Pressed,
    Moved,
    Released,
    Cancelled,
}

/// One touch or left-mouse sample in logical window pixels (y grows downward).
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub id: u64,
    pub phase: PointerPhase,
    pub position: Vec2,
    /// Seconds since startup when the sample was collected.
    pub timestamp: f32,
}

/// Marks UI nodes that own any pointer pressed on them.
#[derive(Component)]
pub struct OverlayButton;

/// Tracks which pointers went down on an overlay and must not reach the recognizers.
#[derive(Debug, Default)]
pub struct PointerCapture {
    captured: HashSet<u64>,
    mouse_down: bool,
}

impl PointerCapture {
    /// Record a press. Returns whether it should be forwarded to the recognizers.
    pub fn begin(&mut self, id: u64, over_overlay: bool) -> bool {
        if over_overlay {
            self.captured.insert(id);
            false
        } else {
            self.captured.remove(&id);
            true
        }
    }

    pub fn forwards(&self, id: u64) -> bool {
        !self.captured.contains(&id)
    }

    /// Record a release or cancel. Returns whether it should be forwarded.
    pub fn end(&mut self, id: u64) -> bool {
        !self.captured.remove(&id)
    }

    /// Left-button samples for one frame, in emission order.
    ///
    /// Moves read in the same frame as the press are dropped: the press already sits
    /// at the latest cursor position, and earlier samples would pull the drag backwards.
    pub fn mouse_frame(&mut self, frame: &MouseFrame) -> Vec<(PointerPhase, Vec2)> {
        let mut samples = Vec::new();

        if frame.just_pressed {
            if let Some(position) = frame.cursor {
                self.mouse_down = true;
                if self.begin(MOUSE_POINTER_ID, frame.over_overlay) {
                    samples.push((PointerPhase::Pressed, position));
                }
            }
        } else if self.mouse_down && self.forwards(MOUSE_POINTER_ID) {
            samples.extend(frame.moves.iter().map(|&position| (PointerPhase::Moved, position)));
        }

        if self.mouse_down && frame.just_released {
            self.mouse_down = false;
            let forwarded = self.end(MOUSE_POINTER_ID);
            // Cursor left the window mid-drag: the gesture is cancelled rather than ended.
            let sample = match frame.cursor {
                Some(position) => (PointerPhase::Released, position),
                None => (PointerPhase::Cancelled, Vec2::ZERO),
            };
            if forwarded {
                samples.push(sample);
            }
        }

        samples
    }
}

/// Left mouse button state gathered over one frame.
#[derive(Debug, Default)]
pub struct MouseFrame<'a> {
    pub just_pressed: bool,
    pub just_released: bool,
    pub cursor: Option<Vec2>,
    /// Whether `cursor` lies on an overlay button.
    pub over_overlay: bool,
    pub moves: &'a [Vec2],
}

/// Logical-pixel bounds of every overlay button.
fn overlay_bounds<'a>(
    overlay: impl Iterator<Item = (&'a ComputedNode, &'a GlobalTransform, &'a InheritedVisibility)>,
) -> Vec<Rect> {
    overlay
        .filter(|(_, _, visibility)| visibility.get())
        .map(|(node, transform, _)| {
            // Layout is in physical pixels; pointer positions are logical.
            let scale = node.inverse_scale_factor();
            Rect::from_center_size(
                transform.translation().truncate() * scale,
                node.size() * scale,
            )
        })
        .collect()
}

fn hits_overlay(bounds: &[Rect], position: Vec2) -> bool {
    bounds.iter().any(|rect| rect.contains(position))
}

/// Merge touch input and the left mouse button into one `PointerEvent` stream.
pub fn collect_pointer_events(
    mut touches: EventReader<TouchInput>,
    mut cursor_moved: EventReader<CursorMoved>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    overlay: Query<(&ComputedNode, &GlobalTransform, &InheritedVisibility), With<OverlayButton>>,
    time: Res<Time>,
    mut capture: Local<PointerCapture>,
    mut pointer_events: EventWriter<PointerEvent>,
) {
    let timestamp = time.elapsed_secs();
    let bounds = overlay_bounds(overlay.iter());

    for touch in touches.read() {
        let phase = match touch.phase {
            TouchPhase::Started => {
                if !capture.begin(touch.id, hits_overlay(&bounds, touch.position)) {
                    continue;
                }
                PointerPhase::Pressed
            }
            TouchPhase::Moved => {
                if !capture.forwards(touch.id) {
                    continue;
                }
                PointerPhase::Moved
            }
            TouchPhase::Ended => {
                if !capture.end(touch.id) {
                    continue;
                }
                PointerPhase::Released
            }
            TouchPhase::Canceled => {
                if !capture.end(touch.id) {
                    continue;
                }
                PointerPhase::Cancelled
            }
        };

        pointer_events.write(PointerEvent {
            id: touch.id,
            phase,
            position: touch.position,
            timestamp,
        });
    }

    let cursor = windows
        .single()
        .ok()
        .and_then(|window| window.cursor_position());
    let moves: Vec<Vec2> = cursor_moved.read().map(|moved| moved.position).collect();

    let frame = MouseFrame {
        just_pressed: mouse_button.just_pressed(MouseButton::Left),
        just_released: mouse_button.just_released(MouseButton::Left),
        cursor,
        over_overlay: cursor.is_some_and(|position| hits_overlay(&bounds, position)),
        moves: &moves,
    };

    for (phase, position) in capture.mouse_frame(&frame) {
        pointer_events.write(PointerEvent {
            id: MOUSE_POINTER_ID,
            phase,
            position,
            timestamp,
        });
    }
}

/// Drop pointer samples buffered before the viewer mounted, such as the press on
/// the button that opened it.
pub fn clear_pending_pointer_events(mut pointer_events: ResMut<Events<PointerEvent>>) {
    pointer_events.clear();
}
