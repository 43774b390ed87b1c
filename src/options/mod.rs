//! Runtime configuration with TOML preset support.
//!
//! All tweakable settings (enable flags, speeds, sensitivities, key
//! bindings) are consolidated here. Options serialize to/from TOML so
//! hosts can ship presets; every section uses `#[serde(default)]` so a
//! partial file (e.g. only overriding `[keybindings]`) works.

mod keybindings;
mod spectator;

use std::path::Path;

pub use keybindings::KeybindingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use spectator::SpectatorOptions;

use crate::error::FreecamError;

/// Top-level options container.
///
/// Loading runs [`sanitize`](Self::sanitize) so the speed invariant holds
/// no matter what the file said.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Spectator flags and speed parameters.
    pub spectator: SpectatorOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Enforce config invariants across all sections.
    pub fn sanitize(&mut self) {
        self.spectator.sanitize();
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, FreecamError> {
        let content = std::fs::read_to_string(path).map_err(FreecamError::Io)?;
        let mut opts: Self = toml::from_str(&content)
            .map_err(|e| FreecamError::OptionsParse(e.to_string()))?;
        opts.sanitize();
        Ok(opts)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), FreecamError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FreecamError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(FreecamError::Io)?;
        }
        std::fs::write(path, content).map_err(FreecamError::Io)
    }
}

#[cfg(test)]
mod tests {
    use winit::keyboard::KeyCode;

    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[spectator]
movement_speed = 25.0

[keybindings]
reset = "Backquote"
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.spectator.movement_speed, 25.0);
        assert_eq!(opts.keybindings.reset, KeyCode::Backquote);
        // Everything else should be default
        assert_eq!(opts.spectator.mouse_sense, 1.8);
        assert_eq!(opts.keybindings.boost, KeyCode::ShiftLeft);
    }

    #[test]
    fn sanitize_restores_speed_invariant() {
        let toml_str = r"
[spectator]
movement_speed = 30.0
boosted_speed = 2.0
";
        let mut opts: Options = toml::from_str(toml_str).unwrap();
        opts.sanitize();
        assert_eq!(opts.spectator.boosted_speed, 30.0);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        // UI-exposed sections should be present
        assert!(props.contains_key("spectator"));
        // Keybindings are skipped (edited as raw TOML, not via schema UI)
        assert!(!props.contains_key("keybindings"));

        let spectator = &props["spectator"]["properties"];
        assert!(spectator.get("mouse_sense").is_some());
        assert!(spectator.get("boosted_speed").is_some());
        assert!(spectator.get("acceleration_factor").is_some());
    }
}
