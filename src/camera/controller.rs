use glam::{Quat, Vec3};
use log::{debug, warn};
use winit::keyboard::KeyCode;
use winit::window::{CursorGrabMode, Window};

use crate::camera::transform::Transform;
use crate::input::InputState;
use crate::options::Options;

/// Free-fly spectator camera controller.
///
/// Construction captures the transform's current pose as the reset
/// target; after that, [`update`](Self::update) is the only thing that
/// touches the transform. One call per rendered frame, driven by the
/// host's loop — the controller never blocks, spawns, or keeps time
/// itself.
///
/// Per frame, in order:
///
/// 1. scroll-wheel translation along the local forward axis;
/// 2. W/A/S/D plus up/down key movement, scaled by the base or boosted
///    speed and the acceleration ramp;
/// 3. mouse-look rotation (pitch, then yaw);
/// 4. edge-triggered reset to the captured start pose.
///
/// Movement direction is the plain sum of held-axis basis vectors and is
/// deliberately not normalized, so diagonal flight is faster than
/// axis-aligned flight. Hosts rely on that behavior; do not normalize.
pub struct SpectatorController {
    options: Options,
    init_position: Vec3,
    /// Start orientation as `(pitch, yaw, roll)` degrees.
    init_rotation: Vec3,
    /// Accumulated acceleration term. Grows while a movement key is held,
    /// zeroed on the first non-moving frame.
    speed_ramp: f32,
}

impl SpectatorController {
    /// Create a controller, capturing `transform`'s current pose as the
    /// reset target. The capture happens exactly once, here.
    #[must_use]
    pub fn new(transform: &Transform, mut options: Options) -> Self {
        options.sanitize();
        let init_position = transform.position;
        let init_rotation = transform.euler_angles();
        debug!(
            "captured spectator start pose: position {init_position}, rotation {init_rotation}"
        );
        Self {
            options,
            init_position,
            init_rotation,
            speed_ramp: 0.0,
        }
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace the options, re-enforcing config invariants.
    pub fn set_options(&mut self, mut options: Options) {
        options.sanitize();
        self.options = options;
    }

    /// Advance one frame: apply `input` to `transform` over `dt` seconds.
    pub fn update(
        &mut self,
        transform: &mut Transform,
        input: &InputState,
        dt: f32,
    ) {
        if !self.options.spectator.active {
            return;
        }
        let keys = self.options.keybindings;

        // Scroll translation along the local forward axis
        if self.options.spectator.enable_translation {
            transform.position += transform.forward()
                * input.scroll_delta()
                * dt
                * self.options.spectator.translation_speed;
        }

        // Keyed movement. Opposing keys cancel via the vector sum, and
        // the sum is intentionally left unnormalized.
        if self.options.spectator.enable_movement {
            let mut direction = Vec3::ZERO;

            if input.held(KeyCode::KeyW) {
                direction += transform.forward();
            }
            if input.held(KeyCode::KeyS) {
                direction -= transform.forward();
            }
            if input.held(KeyCode::KeyA) {
                direction -= transform.right();
            }
            if input.held(KeyCode::KeyD) {
                direction += transform.right();
            }
            if input.held(keys.move_up) {
                direction += transform.up();
            }
            if input.held(keys.move_down) {
                direction -= transform.up();
            }

            let speed = if input.held(keys.boost) {
                self.options.spectator.boosted_speed
            } else {
                self.options.spectator.movement_speed
            };

            let ramp =
                self.acceleration_multiplier(dt, direction != Vec3::ZERO);
            transform.position += direction * speed * ramp;
        }

        // Mouse look. Pitch composes a local-space rotation about the
        // camera's right axis; yaw is a world-space Euler set that keeps
        // the current pitch/roll components. The asymmetry (and the roll
        // drift it produces at extreme pitch) is contractual.
        if self.options.spectator.enable_rotation {
            let delta = input.mouse_delta();
            let sense = self.options.spectator.mouse_sense;

            transform.rotate_local(Quat::from_axis_angle(
                Vec3::X,
                (-delta.y * sense).to_radians(),
            ));

            let mut angles = transform.euler_angles();
            angles.y += delta.x * sense;
            transform.set_euler_angles(angles);
        }

        // Return to the captured start pose
        if input.just_pressed(keys.reset) {
            debug!("spectator reset to start pose");
            transform.position = self.init_position;
            transform.set_euler_angles(self.init_rotation);
        }
    }

    /// Recompute the per-frame speed multiplier.
    ///
    /// While moving with acceleration enabled, the accumulated term grows
    /// by `dt * (factor - 1)` each frame and contributes cubically:
    /// `dt + ramp^3 * dt`. Any non-moving frame (or disabling
    /// acceleration) zeroes the ramp, so the boost falls off instantly on
    /// key release.
    fn acceleration_multiplier(&mut self, dt: f32, moving: bool) -> f32 {
        if !self.options.spectator.enable_acceleration || !moving {
            self.speed_ramp = 0.0;
            return dt;
        }

        self.speed_ramp +=
            dt * (self.options.spectator.acceleration_factor - 1.0);
        dt + self.speed_ramp.powi(3) * dt
    }

    /// Apply a cursor lock mode to the host window, hiding the cursor
    /// while locked.
    ///
    /// Not part of the per-frame contract — a convenience for hosts that
    /// want the usual "grab the mouse while flying" integration. Falls
    /// back to confining the cursor on platforms that reject `Locked`.
    pub fn apply_cursor_lock(window: &Window, locked: bool) {
        let result = if locked {
            window
                .set_cursor_grab(CursorGrabMode::Locked)
                .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined))
        } else {
            window.set_cursor_grab(CursorGrabMode::None)
        };
        if let Err(e) = result {
            warn!("cursor grab change failed: {e}");
        }
        window.set_cursor_visible(!locked);
    }
}
