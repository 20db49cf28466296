//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration, state transitions,
//! and plugin initialisation for both native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Creates the main app with config loading, viewer system ordering
/// and platform-specific configurations.
pub mod app_setup;

/// Application state machine, shared markers and viewer system sets.
pub mod app_state;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration and touch behaviour for web targets.
pub mod window_config;
