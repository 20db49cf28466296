//! Viewer scene contents: lighting, the loading placeholder and the model hierarchy.

/// Ambient and directional light setup.
pub mod lighting;

/// Model root, tap-driven emphasis spring and its animation.
pub mod model;

/// Loading-state cube shown until the model attaches.
pub mod placeholder;
