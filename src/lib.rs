// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Free-fly spectator camera controller for winit-driven 3D applications.
//!
//! The crate does exactly one thing: each frame it reads an input snapshot
//! (mouse deltas, scroll, key state) and mutates an externally owned camera
//! [`Transform`](camera::Transform) — scroll zoom, WASD+QE flight with an
//! optional boost key and acceleration ramp, mouse look, and a
//! reset-to-start shortcut.
//!
//! # Key entry points
//!
//! - [`camera::SpectatorController`] - the per-frame update routine
//! - [`camera::Transform`] - the position/orientation handle it drives
//! - [`input::InputState`] - per-frame snapshot fed from winit events
//! - [`options::Options`] - runtime configuration (flags, speeds, keys)
//!
//! # Integration
//!
//! The host owns the event loop and the render clock. Forward window and
//! device events into an [`input::InputState`], call
//! [`SpectatorController::update`](camera::SpectatorController::update)
//! once per frame with the elapsed seconds, then call
//! [`InputState::end_frame`](input::InputState::end_frame). Nothing here
//! blocks, spawns, or allocates per frame.

pub mod camera;
pub mod error;
pub mod input;
pub mod options;

pub use camera::{SpectatorController, Transform};
pub use error::FreecamError;
pub use input::InputState;
pub use options::Options;
