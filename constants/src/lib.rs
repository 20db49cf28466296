//! Shared tunables for the fox viewer.
//!
//! Every value here is a default. The runtime reads its effective settings from
//! `ViewerConfig`, which falls back to these when a field is missing.

pub mod camera;
pub mod gesture;
pub mod model;
pub mod render_settings;
