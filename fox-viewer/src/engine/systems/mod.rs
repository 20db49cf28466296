//! Diagnostics for the viewer.
//!
//! FPS overlay, the F1 orbit dump and optional model introspection logging.

/// Orbit controller state dump for native debugging.
pub mod debug_camera;

/// glTF contents and spawned scene-graph logging, gated by config.
pub mod debug_model;

/// FPS overlay text driven by frame time diagnostics.
pub mod fps_tracking;
