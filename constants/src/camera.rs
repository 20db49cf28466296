use std::f32::consts::FRAC_PI_4;

/// Orbit radius the viewer opens at
pub const INITIAL_ZOOM_DISTANCE: f32 = 8.0;

/// Distance a single zoom action moves the target radius
pub const ZOOM_STEP_DISTANCE: f32 = 1.0;

/// Closest the camera may orbit
pub const MIN_ZOOM_DISTANCE: f32 = 3.0;

/// Furthest the camera may orbit
pub const MAX_ZOOM_DISTANCE: f32 = 500.0;

/// Initial azimuth (radians)
pub const INITIAL_THETA: f32 = 0.0;

/// Initial polar angle (radians)
pub const INITIAL_PHI: f32 = FRAC_PI_4;

/// Keeps phi inside [margin, PI - margin] so the camera never flips over a pole
pub const PHI_MARGIN: f32 = 0.1;

/// Radians of rotation per pixel of pan translation
pub const ROTATE_SENSITIVITY: f32 = 0.01;

/// Pan deltas at or below this (pixels, per axis) are treated as jitter
pub const JITTER_THRESHOLD: f32 = 0.01;

/// Fraction of the remaining angle covered per frame
pub const ROTATION_SMOOTHING: f32 = 0.12;

/// Fraction of the remaining radius covered per frame
pub const ZOOM_SMOOTHING: f32 = 0.1;

/// Per-frame velocity multiplier once the drag has ended (0.9-0.98 feels right)
pub const MOMENTUM_DAMPING: f32 = 0.95;

/// Velocity components smaller than this snap to zero
pub const VELOCITY_EPSILON: f32 = 1e-4;

/// Momentum is authored against this frame rate and scaled by frame time
pub const FRAME_RATE_BASELINE: f32 = 60.0;
