//! On-screen controls shared by the screens.

/// Screen header with title and back button.
pub mod header;

/// Zoom overlay buttons and native keyboard shortcuts.
pub mod zoom_controls;
