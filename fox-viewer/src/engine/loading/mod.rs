//! Loading pipeline: viewer config first, then the model in the background.
//!
//! The app leaves the loading screen once the config resolves. The model keeps
//! loading and replaces the viewer's placeholder when it is ready.

/// Viewer config loading, validation and default fallback.
///
/// Requests the model as soon as the config is known.
pub mod config_loader;

/// glTF model attachment, clip selection and animation playback.
pub mod model_loader;

/// Loading progress tracking resource for state transitions.
pub mod progress;
