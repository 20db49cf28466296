//! Orbit camera for inspecting a model around the origin.
//!
//! Gesture input sets rotation targets, zoom buttons set a radius target, and a
//! per-frame system eases the camera toward both with momentum after release.

/// Pure orbit state: rotation, zoom, velocity and smoothing.
pub mod orbit;

/// Bevy systems connecting gestures, zoom actions and the camera transform.
pub mod orbit_camera;
