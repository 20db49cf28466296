//! Pointer collection and gesture recognition.
//!
//! Merges touch and mouse input into one pointer stream, then feeds it to the
//! pan and tap recognizers that drive the orbit camera and model emphasis.

/// Touch and left-mouse sampling with overlay capture.
pub mod pointer;

/// One-pointer pan recognizer producing cumulative translations.
pub mod pan_gesture;

/// Short press-and-release tap recognizer.
pub mod tap_gesture;
