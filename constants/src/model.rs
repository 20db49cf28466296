/// Viewer configuration file, relative to the asset root
pub const CONFIG_PATH: &str = "config/fox.viewer.json";

/// Model shown in the viewer, relative to the asset root
pub const MODEL_PATH: &str = "models/Fox.glb";

/// Uniform scale applied to the model root
pub const MODEL_SCALE: f32 = 0.5;

/// Translation applied to the model root
pub const MODEL_OFFSET: [f32; 3] = [0.0, -1.0, 0.0];

/// Clip auto-played when the configuration does not name one
pub const DEFAULT_ANIMATION_INDEX: usize = 1;

/// Scale the model eases to while emphasised by a tap
pub const EMPHASIS_SCALE: f32 = 1.5;

/// Fraction of the remaining emphasis scale covered per frame
pub const EMPHASIS_SMOOTHING: f32 = 0.15;

/// Edge length of the placeholder cube shown while the model loads
pub const PLACEHOLDER_SIZE: f32 = 1.0;
