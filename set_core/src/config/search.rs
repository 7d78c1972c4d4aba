//! Search tuning

use super::{default_defense_bonuses, ConfigError, DefenseBonusTable};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunable search settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Skill whose talismans are always eligible, even when not requested
    #[serde(default = "default_defense_skill")]
    pub defense_skill: String,
    /// Re-price defense with skill bonuses before ranking
    #[serde(default = "default_refine_defense")]
    pub refine_defense: bool,
    /// Largest cross-product a single search may enumerate
    #[serde(default = "default_max_combinations")]
    pub max_combinations: u64,
    #[serde(default = "default_defense_bonuses")]
    pub defense_bonuses: DefenseBonusTable,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            defense_skill: default_defense_skill(),
            refine_defense: default_refine_defense(),
            max_combinations: default_max_combinations(),
            defense_bonuses: default_defense_bonuses(),
        }
    }
}

fn default_defense_skill() -> String {
    "Defense Boost".to_string()
}

fn default_refine_defense() -> bool {
    true
}

fn default_max_combinations() -> u64 {
    20_000_000
}

impl SearchConfig {
    /// Load search settings from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config: SearchConfig = super::load_toml(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Load search settings from a TOML string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: SearchConfig = super::parse_toml(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.defense_skill.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "defense_skill must not be empty".to_string(),
            ));
        }
        if self.max_combinations == 0 {
            return Err(ConfigError::ValidationError(
                "max_combinations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
