//! Spectator camera: the transform handle and the per-frame controller.
//!
//! The host owns the [`Transform`] (it is whatever feeds the view matrix);
//! the [`SpectatorController`] only mutates it once per frame.

/// Free-fly controller applying input to a transform each frame.
pub mod controller;
/// Position/orientation handle with local basis and Euler views.
pub mod transform;

pub use controller::SpectatorController;
pub use transform::Transform;
