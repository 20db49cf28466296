/// Pan becomes active once translation exceeds this on either axis (pixels)
pub const PAN_ACTIVE_OFFSET: f32 = 2.0;

/// Pan fails if translation exceeds this on either axis before activating (pixels)
pub const PAN_FAIL_OFFSET: f32 = 1000.0;

/// Largest press-to-release travel still recognised as a tap (pixels)
pub const TAP_MAX_DISTANCE: f32 = 10.0;

/// Longest press still recognised as a tap (seconds)
pub const TAP_MAX_DURATION_SECS: f32 = 0.5;

/// Width of the left screen edge that starts a swipe-back (pixels)
pub const EDGE_SWIPE_WIDTH: f32 = 24.0;

/// Horizontal travel that completes a swipe-back (pixels)
pub const EDGE_SWIPE_DISTANCE: f32 = 80.0;

/// Pointer id used for the mouse, kept clear of touch ids
pub const MOUSE_POINTER_ID: u64 = u64::MAX;
