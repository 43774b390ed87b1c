use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Spectator", inline)]
#[serde(default)]
/// Spectator camera flags and speed parameters.
///
/// Values are deliberately unvalidated beyond the boost clamp in
/// [`sanitize`](Self::sanitize): hosts that want a negative speed or a
/// zero sensitivity get exactly that.
pub struct SpectatorOptions {
    /// Whether the controller is active at all. When `false` the per-frame
    /// update is a no-op.
    pub active: bool,
    /// Camera rotation by mouse movement.
    pub enable_rotation: bool,
    /// Sensitivity of mouse rotation, in degrees per raw delta unit.
    #[schemars(title = "Mouse Sensitivity", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub mouse_sense: f32,
    /// Camera zooming in/out by scroll wheel.
    pub enable_translation: bool,
    /// Velocity of scroll-wheel zooming, in units per second per scroll line.
    #[schemars(title = "Zoom Speed", range(min = 1.0, max = 200.0), extend("step" = 1.0))]
    pub translation_speed: f32,
    /// Camera movement by the W/A/S/D and up/down keys.
    pub enable_movement: bool,
    /// Base camera movement speed, in units per second.
    #[schemars(title = "Movement Speed", range(min = 0.1, max = 100.0), extend("step" = 0.5))]
    pub movement_speed: f32,
    /// Movement speed while the boost key is held. Clamped to be at least
    /// [`movement_speed`](Self::movement_speed).
    #[schemars(title = "Boosted Speed", range(min = 0.1, max = 500.0), extend("step" = 0.5))]
    pub boosted_speed: f32,
    /// Speed ramp-up while a movement key is held continuously.
    pub enable_acceleration: bool,
    /// Rate applied while ramping up; 1.0 means no ramp.
    #[schemars(title = "Acceleration Factor", range(min = 1.0, max = 5.0), extend("step" = 0.1))]
    pub acceleration_factor: f32,
}

impl Default for SpectatorOptions {
    fn default() -> Self {
        Self {
            active: true,
            enable_rotation: true,
            mouse_sense: 1.8,
            enable_translation: true,
            translation_speed: 55.0,
            enable_movement: true,
            movement_speed: 10.0,
            boosted_speed: 50.0,
            enable_acceleration: true,
            acceleration_factor: 1.5,
        }
    }
}

impl SpectatorOptions {
    /// Enforce the single config invariant: boosting never moves slower
    /// than the base speed. Run whenever options are mutated or loaded.
    pub fn sanitize(&mut self) {
        if self.boosted_speed < self.movement_speed {
            self.boosted_speed = self.movement_speed;
        }
    }
}
