use bevy::prelude::*;
use serde::Serialize;
use std::f32::consts::PI;

use crate::engine::assets::viewer_config::CameraSettings;
use crate::engine::input::pan_gesture::{PanGestureEvent, PanGestureState};

/// Target orientation around the origin, set directly by gesture input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RotationState {
    /// Azimuth in radians, unbounded.
    pub theta: f32,
    /// Polar angle in radians, kept inside `[margin, PI - margin]`.
    pub phi: f32,
}

impl RotationState {
    /// Turn by the given angles. Positive `d_phi` tilts the camera toward the upper pole.
    pub fn rotate(&mut self, d_theta: f32, d_phi: f32, phi_margin: f32) {
        self.theta += d_theta;
        self.phi = clamp_phi(self.phi - d_phi, phi_margin);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZoomState {
    pub target_radius: f32,
    pub current_radius: f32,
}

impl ZoomState {
    pub fn zoom_in(&mut self, step: f32, min_radius: f32) {
        self.target_radius = (self.target_radius - step).max(min_radius);
    }

    pub fn zoom_out(&mut self, step: f32, max_radius: f32) {
        self.target_radius = (self.target_radius + step).min(max_radius);
    }

    /// Ease the current radius toward the target and return it.
    pub fn smooth(&mut self, factor: f32) -> f32 {
        self.current_radius += (self.target_radius - self.current_radius) * factor;
        self.current_radius
    }
}

/// Residual rotation per frame (radians at the baseline frame rate).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct VelocityState {
    pub vx: f32,
    pub vy: f32,
}

impl VelocityState {
    pub fn decay(&mut self, damping: f32) {
        self.vx *= damping;
        self.vy *= damping;
    }

    /// Zero any component whose magnitude is below `epsilon`.
    pub fn snap(&mut self, epsilon: f32) {
        if self.vx.abs() < epsilon {
            self.vx = 0.0;
        }
        if self.vy.abs() < epsilon {
            self.vy = 0.0;
        }
    }

    pub fn is_at_rest(&self) -> bool {
        self.vx == 0.0 && self.vy == 0.0
    }
}

/// Previous cumulative pan translation, used to derive per-event deltas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct LastTranslation {
    pub x: f32,
    pub y: f32,
}

/// Camera angles actually rendered, eased toward the rotation targets every frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SmoothedOrbit {
    pub theta: f32,
    pub phi: f32,
}

/// Shared state between the gesture systems and the per-frame camera update.
///
/// Inserted when the viewer opens and removed when it closes. Gesture and zoom systems
/// write targets; `advance` reads them once per frame and returns the camera position.
#[derive(Resource, Debug, Clone, Serialize)]
pub struct OrbitController {
    settings: CameraSettings,
    pub rotation: RotationState,
    pub zoom: ZoomState,
    pub velocity: VelocityState,
    pub last_translation: LastTranslation,
    pub dragging: bool,
    pub smoothed: SmoothedOrbit,
}

impl OrbitController {
    pub fn new(settings: &CameraSettings) -> Self {
        let radius = settings
            .initial_radius
            .clamp(settings.min_radius, settings.max_radius);
        let rotation = RotationState {
            theta: settings.initial_theta,
            phi: clamp_phi(settings.initial_phi, settings.phi_margin),
        };

        Self {
            settings: *settings,
            rotation,
            zoom: ZoomState {
                target_radius: radius,
                current_radius: radius,
            },
            velocity: VelocityState::default(),
            last_translation: LastTranslation::default(),
            dragging: false,
            smoothed: SmoothedOrbit {
                theta: rotation.theta,
                phi: rotation.phi,
            },
        }
    }

    /// Apply one pan gesture event. States other than the ones matched are ignored.
    pub fn handle_pan(&mut self, event: &PanGestureEvent) {
        match event.state {
            PanGestureState::Began => {
                self.last_translation = LastTranslation::default();
                self.velocity = VelocityState::default();
                self.dragging = true;
            }
            PanGestureState::Active => {
                self.dragging = true;
                let dx = event.translation.x - self.last_translation.x;
                let dy = event.translation.y - self.last_translation.y;
                let threshold = self.settings.jitter_threshold;
                if dx.abs() <= threshold && dy.abs() <= threshold {
                    return;
                }

                let d_theta = dx * self.settings.rotate_sensitivity;
                let d_phi = dy * self.settings.rotate_sensitivity;
                self.rotation.rotate(d_theta, d_phi, self.settings.phi_margin);

                if self.settings.momentum {
                    self.velocity = VelocityState {
                        vx: d_theta,
                        vy: d_phi,
                    };
                }

                self.last_translation = LastTranslation {
                    x: event.translation.x,
                    y: event.translation.y,
                };
            }
            PanGestureState::End | PanGestureState::Cancelled | PanGestureState::Failed => {
                self.last_translation = LastTranslation::default();
                self.dragging = false;
            }
            PanGestureState::Undetermined => {}
        }
    }

    pub fn zoom_in(&mut self) {
        self.zoom
            .zoom_in(self.settings.zoom_step, self.settings.min_radius);
    }

    pub fn zoom_out(&mut self) {
        self.zoom
            .zoom_out(self.settings.zoom_step, self.settings.max_radius);
    }

    /// Decay velocity and carry it into the rotation while no drag is in progress.
    pub fn apply_momentum(&mut self, delta_secs: f32) {
        if self.dragging || !self.settings.momentum || self.velocity.is_at_rest() {
            return;
        }

        self.velocity.decay(self.settings.damping);

        let scale = delta_secs * self.settings.frame_rate_baseline;
        self.rotation.rotate(
            self.velocity.vx * scale,
            self.velocity.vy * scale,
            self.settings.phi_margin,
        );

        self.velocity.snap(self.settings.velocity_epsilon);
    }

    /// Ease radius and angles one frame toward their targets.
    pub fn smooth(&mut self) {
        self.zoom.smooth(self.settings.zoom_smoothing);

        let factor = self.settings.rotation_smoothing;
        self.smoothed.theta += (self.rotation.theta - self.smoothed.theta) * factor;
        self.smoothed.phi += (self.rotation.phi - self.smoothed.phi) * factor;
    }

    /// Run one frame of momentum and smoothing, returning the new camera position.
    pub fn advance(&mut self, delta_secs: f32) -> Vec3 {
        self.apply_momentum(delta_secs);
        self.smooth();
        self.camera_position()
    }

    pub fn camera_position(&self) -> Vec3 {
        spherical_to_cartesian(
            self.zoom.current_radius,
            self.smoothed.theta,
            self.smoothed.phi,
        )
    }
}

pub fn clamp_phi(phi: f32, margin: f32) -> f32 {
    phi.clamp(margin, PI - margin)
}

/// Y-up spherical coordinates: phi is measured from +Y, theta from +X toward +Z.
pub fn spherical_to_cartesian(radius: f32, theta: f32, phi: f32) -> Vec3 {
    let (sin_phi, cos_phi) = phi.sin_cos();
    let (sin_theta, cos_theta) = theta.sin_cos();
    Vec3::new(
        radius * sin_phi * cos_theta,
        radius * cos_phi,
        radius * sin_phi * sin_theta,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_4;

    const EPS: f32 = 1e-5;

    fn controller() -> OrbitController {
        OrbitController::new(&CameraSettings::default())
    }

    fn pan(state: PanGestureState, x: f32, y: f32) -> PanGestureEvent {
        PanGestureEvent {
            translation: Vec2::new(x, y),
            absolute: Vec2::new(100.0 + x, 100.0 + y),
            state,
        }
    }

    /// Deterministic spread of deltas, large and small, both signs.
    fn delta_sequence(len: usize) -> Vec<f32> {
        let mut seed: u32 = 0x2545_f491;
        (0..len)
            .map(|_| {
                seed ^= seed << 13;
                seed ^= seed >> 17;
                seed ^= seed << 5;
                (seed % 4001) as f32 / 10.0 - 200.0
            })
            .collect()
    }

    #[test]
    fn starts_at_configured_orbit() {
        let c = controller();
        assert_eq!(c.rotation.theta, 0.0);
        assert!((c.rotation.phi - FRAC_PI_4).abs() < EPS);
        assert_eq!(c.zoom.target_radius, 8.0);
        assert_eq!(c.zoom.current_radius, 8.0);
        assert!(c.velocity.is_at_rest());
    }

    #[test]
    fn single_horizontal_pan_turns_theta_only() {
        let mut c = controller();
        c.handle_pan(&pan(PanGestureState::Began, 0.0, 0.0));
        c.handle_pan(&pan(PanGestureState::Active, 10.0, 0.0));

        assert!((c.rotation.theta - 0.1).abs() < EPS);
        assert!((c.rotation.phi - FRAC_PI_4).abs() < EPS);
        assert_eq!(c.last_translation, LastTranslation { x: 10.0, y: 0.0 });
    }

    #[test]
    fn deltas_are_relative_to_last_translation() {
        let mut c = controller();
        c.handle_pan(&pan(PanGestureState::Began, 0.0, 0.0));
        c.handle_pan(&pan(PanGestureState::Active, 10.0, 0.0));
        c.handle_pan(&pan(PanGestureState::Active, 30.0, 0.0));

        assert!((c.rotation.theta - 0.3).abs() < EPS);
    }

    #[test]
    fn vertical_pan_lowers_phi() {
        let mut c = controller();
        c.handle_pan(&pan(PanGestureState::Began, 0.0, 0.0));
        c.handle_pan(&pan(PanGestureState::Active, 0.0, 20.0));

        assert!((c.rotation.phi - (FRAC_PI_4 - 0.2)).abs() < EPS);
    }

    #[test]
    fn sub_threshold_input_leaves_rotation_unchanged() {
        let mut c = controller();
        let before = c.rotation;
        c.handle_pan(&pan(PanGestureState::Began, 0.0, 0.0));
        c.handle_pan(&pan(PanGestureState::Active, 0.005, -0.01));
        c.handle_pan(&pan(PanGestureState::Active, 0.0, 0.0));

        assert_eq!(c.rotation, before);
        assert_eq!(c.last_translation, LastTranslation::default());
    }

    #[test]
    fn phi_stays_clamped_for_any_delta_sequence() {
        let mut c = controller();
        let deltas = delta_sequence(400);
        let (min, max) = (0.1, PI - 0.1);

        c.handle_pan(&pan(PanGestureState::Began, 0.0, 0.0));
        let mut translation = Vec2::ZERO;
        for pair in deltas.chunks(2) {
            translation += Vec2::new(pair[0], pair[1] * 5.0);
            c.handle_pan(&pan(PanGestureState::Active, translation.x, translation.y));
            assert!(c.rotation.phi >= min && c.rotation.phi <= max);
        }

        c.handle_pan(&pan(PanGestureState::End, translation.x, translation.y));
        for _ in 0..200 {
            c.advance(1.0 / 30.0);
            assert!(c.rotation.phi >= min && c.rotation.phi <= max);
        }
    }

    #[test]
    fn gesture_end_resets_bookkeeping_but_keeps_rotation() {
        for end_state in [
            PanGestureState::End,
            PanGestureState::Cancelled,
            PanGestureState::Failed,
        ] {
            let mut c = controller();
            c.handle_pan(&pan(PanGestureState::Began, 0.0, 0.0));
            c.handle_pan(&pan(PanGestureState::Active, 50.0, 0.0));
            let rotated = c.rotation;
            c.handle_pan(&pan(end_state, 50.0, 0.0));

            assert_eq!(c.rotation, rotated);
            assert_eq!(c.last_translation, LastTranslation::default());
            assert!(!c.dragging);
        }
    }

    #[test]
    fn undetermined_state_is_ignored() {
        let mut c = controller();
        let before = c.clone();
        c.handle_pan(&pan(PanGestureState::Undetermined, 500.0, 500.0));

        assert_eq!(c.rotation, before.rotation);
        assert_eq!(c.last_translation, before.last_translation);
        assert_eq!(c.dragging, before.dragging);
    }

    #[test]
    fn zoom_in_steps_and_clamps_at_minimum() {
        let mut c = controller();
        c.zoom_in();
        assert_eq!(c.zoom.target_radius, 7.0);

        for _ in 0..20 {
            c.zoom_in();
            assert!(c.zoom.target_radius >= 3.0);
        }
        assert_eq!(c.zoom.target_radius, 3.0);
    }

    #[test]
    fn zoom_out_clamps_at_maximum() {
        let mut c = controller();
        for _ in 0..1000 {
            c.zoom_out();
            assert!(c.zoom.target_radius <= 500.0);
        }
        assert_eq!(c.zoom.target_radius, 500.0);

        c.zoom_in();
        assert_eq!(c.zoom.target_radius, 499.0);
    }

    #[test]
    fn zoom_actions_leave_current_radius_to_the_smoother() {
        let mut c = controller();
        c.zoom_in();
        assert_eq!(c.zoom.current_radius, 8.0);
    }

    #[test]
    fn radius_smoothing_covers_a_tenth_per_frame() {
        let mut zoom = ZoomState {
            target_radius: 3.0,
            current_radius: 8.0,
        };
        let radius = zoom.smooth(0.1);
        assert!((radius - 7.5).abs() < EPS);
    }

    #[test]
    fn angles_ease_toward_targets() {
        let mut c = controller();
        c.rotation.theta = 1.0;
        c.smooth();
        assert!((c.smoothed.theta - 0.12).abs() < EPS);

        for _ in 0..200 {
            c.smooth();
        }
        assert!((c.smoothed.theta - 1.0).abs() < 1e-3);
    }

    #[test]
    fn tiny_velocity_is_zero_after_one_decay_step() {
        let mut c = controller();
        c.velocity = VelocityState {
            vx: 5e-5,
            vy: -9e-5,
        };
        c.apply_momentum(1.0 / 60.0);

        assert_eq!(c.velocity.vx, 0.0);
        assert_eq!(c.velocity.vy, 0.0);
    }

    #[test]
    fn momentum_continues_after_release_and_comes_to_rest() {
        let mut c = controller();
        c.handle_pan(&pan(PanGestureState::Began, 0.0, 0.0));
        c.handle_pan(&pan(PanGestureState::Active, 10.0, 0.0));
        assert!((c.velocity.vx - 0.1).abs() < EPS);

        c.handle_pan(&pan(PanGestureState::End, 10.0, 0.0));
        let released_at = c.rotation.theta;
        c.apply_momentum(1.0 / 60.0);
        assert!((c.rotation.theta - (released_at + 0.1 * 0.95)).abs() < EPS);

        let mut frames = 0;
        while !c.velocity.is_at_rest() {
            c.apply_momentum(1.0 / 60.0);
            frames += 1;
            assert!(frames < 1000, "momentum never settled");
        }
    }

    #[test]
    fn momentum_is_held_while_dragging() {
        let mut c = controller();
        c.handle_pan(&pan(PanGestureState::Began, 0.0, 0.0));
        c.handle_pan(&pan(PanGestureState::Active, 10.0, 0.0));
        let theta = c.rotation.theta;
        c.apply_momentum(1.0 / 60.0);

        assert_eq!(c.rotation.theta, theta);
        assert!((c.velocity.vx - 0.1).abs() < EPS);
    }

    #[test]
    fn new_gesture_stops_previous_momentum() {
        let mut c = controller();
        c.velocity = VelocityState { vx: 0.2, vy: 0.0 };
        c.handle_pan(&pan(PanGestureState::Began, 0.0, 0.0));
        assert!(c.velocity.is_at_rest());
    }

    #[test]
    fn momentum_can_be_disabled() {
        let settings = CameraSettings {
            momentum: false,
            ..CameraSettings::default()
        };
        let mut c = OrbitController::new(&settings);
        c.handle_pan(&pan(PanGestureState::Began, 0.0, 0.0));
        c.handle_pan(&pan(PanGestureState::Active, 10.0, 0.0));
        c.handle_pan(&pan(PanGestureState::End, 10.0, 0.0));
        let theta = c.rotation.theta;
        c.apply_momentum(1.0 / 60.0);

        assert!(c.velocity.is_at_rest());
        assert_eq!(c.rotation.theta, theta);
    }

    #[test]
    fn spherical_conversion_matches_axes() {
        let p = spherical_to_cartesian(2.0, 0.0, PI / 2.0);
        assert!((p - Vec3::new(2.0, 0.0, 0.0)).length() < EPS);

        let p = spherical_to_cartesian(2.0, PI / 2.0, PI / 2.0);
        assert!((p - Vec3::new(0.0, 0.0, 2.0)).length() < EPS);

        let p = spherical_to_cartesian(3.0, 1.3, 0.0);
        assert!((p - Vec3::new(0.0, 3.0, 0.0)).length() < EPS);
    }

    #[test]
    fn camera_position_keeps_the_smoothed_radius() {
        let mut c = controller();
        c.zoom_in();
        let position = c.advance(1.0 / 60.0);
        assert!((position.length() - c.zoom.current_radius).abs() < 1e-4);
        assert!((c.zoom.current_radius - 7.9).abs() < EPS);
    }

    #[test]
    fn initial_values_are_brought_inside_bounds() {
        let settings = CameraSettings {
            initial_radius: 900.0,
            initial_phi: 0.0,
            ..CameraSettings::default()
        };
        let c = OrbitController::new(&settings);
        assert_eq!(c.zoom.target_radius, 500.0);
        assert!((c.rotation.phi - 0.1).abs() < EPS);
    }
}
