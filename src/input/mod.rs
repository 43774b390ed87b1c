//! Input handling: the per-frame snapshot the controller reads.
//!
//! The host forwards raw winit events in, the controller queries key and
//! mouse state out. Nothing here interprets input; that is the
//! controller's job.

/// Per-frame key/mouse/scroll snapshot accumulated from winit events.
pub mod state;

pub use state::InputState;
