use bevy::prelude::*;
use constants::{camera, gesture, model};
use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_2;

/// Error types for viewer configuration loading and validation.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    LoadFailed(String),
    EmptyModelPath,
    NonPositive { field: &'static str, value: f32 },
    InvalidZoomRange { min: f32, max: f32 },
    InvalidPhiMargin(f32),
    FactorOutOfRange { field: &'static str, value: f32 },
    InvalidGestureOffsets { active: f32, fail: f32 },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::LoadFailed(e) => write!(f, "Viewer config failed to load: {}", e),
            ConfigError::EmptyModelPath => write!(f, "model_path must not be empty"),
            ConfigError::NonPositive { field, value } => {
                write!(f, "{} must be greater than zero (got {})", field, value)
            }
            ConfigError::InvalidZoomRange { min, max } => {
                write!(f, "zoom range [{}, {}] is empty or non-positive", min, max)
            }
            ConfigError::InvalidPhiMargin(margin) => {
                write!(f, "phi_margin must lie in (0, PI/2) (got {})", margin)
            }
            ConfigError::FactorOutOfRange { field, value } => {
                write!(f, "{} is outside its allowed range (got {})", field, value)
            }
            ConfigError::InvalidGestureOffsets { active, fail } => write!(
                f,
                "gesture offsets need 0 <= active_offset < fail_offset (got {} and {})",
                active, fail
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Which clip the model auto-plays: `{"index": 1}` or `{"name": "Walk"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationSelection {
    Index(usize),
    Name(String),
}

impl Default for AnimationSelection {
    fn default() -> Self {
        Self::Index(model::DEFAULT_ANIMATION_INDEX)
    }
}

/// Orbit camera tunables.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub initial_radius: f32,
    pub initial_theta: f32,
    pub initial_phi: f32,
    pub zoom_step: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    pub phi_margin: f32,
    pub rotate_sensitivity: f32,
    pub jitter_threshold: f32,
    pub rotation_smoothing: f32,
    pub zoom_smoothing: f32,
    pub damping: f32,
    pub velocity_epsilon: f32,
    pub frame_rate_baseline: f32,
    pub momentum: bool,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            initial_radius: camera::INITIAL_ZOOM_DISTANCE,
            initial_theta: camera::INITIAL_THETA,
            initial_phi: camera::INITIAL_PHI,
            zoom_step: camera::ZOOM_STEP_DISTANCE,
            min_radius: camera::MIN_ZOOM_DISTANCE,
            max_radius: camera::MAX_ZOOM_DISTANCE,
            phi_margin: camera::PHI_MARGIN,
            rotate_sensitivity: camera::ROTATE_SENSITIVITY,
            jitter_threshold: camera::JITTER_THRESHOLD,
            rotation_smoothing: camera::ROTATION_SMOOTHING,
            zoom_smoothing: camera::ZOOM_SMOOTHING,
            damping: camera::MOMENTUM_DAMPING,
            velocity_epsilon: camera::VELOCITY_EPSILON,
            frame_rate_baseline: camera::FRAME_RATE_BASELINE,
            momentum: true,
        }
    }
}

/// Pointer gesture thresholds, all in logical pixels except the tap duration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureSettings {
    pub active_offset: f32,
    pub fail_offset: f32,
    pub tap_max_distance: f32,
    pub tap_max_duration_secs: f32,
    pub edge_swipe_width: f32,
    pub edge_swipe_distance: f32,
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            active_offset: gesture::PAN_ACTIVE_OFFSET,
            fail_offset: gesture::PAN_FAIL_OFFSET,
            tap_max_distance: gesture::TAP_MAX_DISTANCE,
            tap_max_duration_secs: gesture::TAP_MAX_DURATION_SECS,
            edge_swipe_width: gesture::EDGE_SWIPE_WIDTH,
            edge_swipe_distance: gesture::EDGE_SWIPE_DISTANCE,
        }
    }
}

/// Viewer configuration, loaded from `config/fox.viewer.json` and kept as a resource.
///
/// Any field missing from the file takes its default from the `constants` crate.
#[derive(Asset, TypePath, Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub model_path: String,
    pub animation: AnimationSelection,
    pub model_scale: f32,
    pub model_offset: [f32; 3],
    /// Log node, material, clip and scene-graph details once the model loads.
    pub debug_model_info: bool,
    pub show_fps: bool,
    pub camera: CameraSettings,
    pub gesture: GestureSettings,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            model_path: model::MODEL_PATH.to_string(),
            animation: AnimationSelection::default(),
            model_scale: model::MODEL_SCALE,
            model_offset: model::MODEL_OFFSET,
            debug_model_info: false,
            show_fps: true,
            camera: CameraSettings::default(),
            gesture: GestureSettings::default(),
        }
    }
}

impl ViewerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.model_path.trim().is_empty() {
            return Err(ConfigError::EmptyModelPath);
        }
        positive("model_scale", self.model_scale)?;

        let camera = &self.camera;
        if !(camera.min_radius > 0.0 && camera.min_radius <= camera.max_radius) {
            return Err(ConfigError::InvalidZoomRange {
                min: camera.min_radius,
                max: camera.max_radius,
            });
        }
        if !(camera.phi_margin > 0.0 && camera.phi_margin < FRAC_PI_2) {
            return Err(ConfigError::InvalidPhiMargin(camera.phi_margin));
        }
        positive("zoom_step", camera.zoom_step)?;
        positive("rotate_sensitivity", camera.rotate_sensitivity)?;
        positive("frame_rate_baseline", camera.frame_rate_baseline)?;
        unit_factor("rotation_smoothing", camera.rotation_smoothing)?;
        unit_factor("zoom_smoothing", camera.zoom_smoothing)?;
        if !(0.0..1.0).contains(&camera.damping) {
            return Err(ConfigError::FactorOutOfRange {
                field: "damping",
                value: camera.damping,
            });
        }
        if !(camera.jitter_threshold >= 0.0) {
            return Err(ConfigError::FactorOutOfRange {
                field: "jitter_threshold",
                value: camera.jitter_threshold,
            });
        }
        if !(camera.velocity_epsilon >= 0.0) {
            return Err(ConfigError::FactorOutOfRange {
                field: "velocity_epsilon",
                value: camera.velocity_epsilon,
            });
        }

        let gesture = &self.gesture;
        if !(gesture.active_offset >= 0.0 && gesture.active_offset < gesture.fail_offset) {
            return Err(ConfigError::InvalidGestureOffsets {
                active: gesture.active_offset,
                fail: gesture.fail_offset,
            });
        }
        positive("tap_max_duration_secs", gesture.tap_max_duration_secs)?;
        positive("edge_swipe_distance", gesture.edge_swipe_distance)?;

        Ok(())
    }

    pub fn model_transform(&self) -> Transform {
        Transform::from_translation(Vec3::from_array(self.model_offset))
            .with_scale(Vec3::splat(self.model_scale))
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

/// Smoothing factors must cover some, but at most all, of the remaining distance.
fn unit_factor(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::FactorOutOfRange { field, value })
    }
}
