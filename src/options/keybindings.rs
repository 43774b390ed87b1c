use serde::{Deserialize, Serialize};
use winit::keyboard::KeyCode;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Rebindable keys for the spectator controller.
///
/// W/A/S/D movement is fixed; only the keys below are configurable.
/// `KeyCode` serializes as its physical-key name so TOML presets stay
/// readable:
///
/// ```toml
/// [keybindings]
/// boost = "ShiftLeft"
/// reset = "KeyR"
/// ```
pub struct KeybindingOptions {
    /// Held to move at [`boosted_speed`](super::SpectatorOptions::boosted_speed).
    pub boost: KeyCode,
    /// Held to move along the camera's local up axis.
    pub move_up: KeyCode,
    /// Held to move against the camera's local up axis.
    pub move_down: KeyCode,
    /// Pressed to snap back to the pose captured at startup.
    pub reset: KeyCode,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        Self {
            boost: KeyCode::ShiftLeft,
            move_up: KeyCode::KeyE,
            move_down: KeyCode::KeyQ,
            reset: KeyCode::KeyR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_serialize_as_readable_names() {
        let toml_str = toml::to_string(&KeybindingOptions::default()).unwrap();
        assert!(toml_str.contains("boost = \"ShiftLeft\""));
        assert!(toml_str.contains("reset = \"KeyR\""));
    }

    #[test]
    fn rebinding_round_trips() {
        let custom = KeybindingOptions {
            move_up: KeyCode::Space,
            move_down: KeyCode::ControlLeft,
            ..KeybindingOptions::default()
        };
        let toml_str = toml::to_string(&custom).unwrap();
        let parsed: KeybindingOptions = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, custom);
    }
}
