//! Pointer interaction for the globe session.
//!
//! Picks resolve against marker volumes with a viewport ray; the resulting
//! summary is delivered as an event value so the presentation layer (RPC
//! frontend or the native overlay) decides how to show it. Nothing here
//! blocks the render loop.

/// Pick summary formatting and delivery to the presentation layer.
pub mod interaction;

/// Cursor ray casting against marker volumes.
pub mod point_picker;
