//! Scenario and dataset settings

use super::ConfigError;
use crate::types::{Phase, WeaponKind};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HammerConfig {
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub scenario: ScenarioConfig,
}

impl HammerConfig {
    /// Check that every name needed to run the scenario is set
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dataset.path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "dataset.path must not be empty".to_string(),
            ));
        }
        for (field, value) in [
            ("scenario.faction", &self.scenario.faction),
            ("scenario.attacker", &self.scenario.attacker),
            ("scenario.target", &self.scenario.target),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "{} must not be empty",
                    field
                )));
            }
        }
        Ok(())
    }
}

/// Where the datasheets come from and how they are read
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Exported datasheet JSON
    #[serde(default = "default_dataset_path")]
    pub path: PathBuf,
    /// Kind of non-melee profiles listed under `rangedWeapons`
    #[serde(default = "default_ranged_profile_kind")]
    pub ranged_profile_kind: WeaponKind,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        DatasetConfig {
            path: default_dataset_path(),
            ranged_profile_kind: default_ranged_profile_kind(),
        }
    }
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("data_exported_data.json")
}

fn default_ranged_profile_kind() -> WeaponKind {
    WeaponKind::Ranged
}

/// Which units fight and with what
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    #[serde(default = "default_faction")]
    pub faction: String,
    #[serde(default = "default_unit")]
    pub attacker: String,
    #[serde(default = "default_unit")]
    pub target: String,
    #[serde(default)]
    pub phase: Phase,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        ScenarioConfig {
            faction: default_faction(),
            attacker: default_unit(),
            target: default_unit(),
            phase: Phase::Melee,
        }
    }
}

fn default_faction() -> String {
    "CSM".to_string()
}

fn default_unit() -> String {
    "Chaos Terminator Squad".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{default_config, parse_config};

    #[test]
    fn test_default_config() {
        let config = default_config();
        assert_eq!(config, HammerConfig::default());
        assert_eq!(config.scenario.attacker, config.scenario.target);
        assert_eq!(config.scenario.phase, Phase::Melee);
        assert_eq!(config.dataset.ranged_profile_kind, WeaponKind::Ranged);
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[dataset]
path = "exports/latest.json"
ranged_profile_kind = "melee"

[scenario]
faction = "WE"
attacker = "Khorne Berzerkers"
target = "Chaos Terminator Squad"
phase = "all"
"#;

        let config = parse_config(toml).unwrap();
        assert_eq!(config.dataset.path, PathBuf::from("exports/latest.json"));
        assert_eq!(config.dataset.ranged_profile_kind, WeaponKind::Melee);
        assert_eq!(config.scenario.faction, "WE");
        assert_eq!(config.scenario.attacker, "Khorne Berzerkers");
        assert_eq!(config.scenario.phase, Phase::All);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let toml = r#"
[scenario]
attacker = "Legionaries"
"#;

        let config = parse_config(toml).unwrap();
        assert_eq!(config.scenario.attacker, "Legionaries");
        assert_eq!(config.scenario.target, "Chaos Terminator Squad");
        assert_eq!(config.dataset, DatasetConfig::default());
    }

    #[test]
    fn test_empty_names_rejected() {
        let toml = r#"
[scenario]
target = "  "
"#;

        let err = parse_config(toml).unwrap_err();
        assert!(
            matches!(err, ConfigError::ValidationError(msg) if msg.contains("scenario.target"))
        );
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let toml = r#"
[dataset]
ranged_profile_kind = "psychic"
"#;

        assert!(matches!(parse_config(toml), Err(ConfigError::ParseError(_))));
    }
}
