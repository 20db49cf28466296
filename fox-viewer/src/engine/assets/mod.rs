//! Asset types for the viewer.
//!
//! The viewer configuration is itself a JSON asset, loaded before the model.

/// Viewer configuration asset, its defaults and validation.
pub mod viewer_config;
