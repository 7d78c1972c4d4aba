//! Talismans

use crate::config::ConfigError;
use crate::types::{SkillLevel, MAX_SKILL_LEVEL};
use serde::{Deserialize, Serialize};

/// Accessory granting exactly one skill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Talisman {
    pub name: String,
    pub skill: SkillLevel,
}

impl Talisman {
    pub fn new(name: impl Into<String>, skill: impl Into<String>, level: u32) -> Self {
        Talisman {
            name: name.into(),
            skill: SkillLevel::new(skill, level),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "talisman with empty name".to_string(),
            ));
        }
        if self.skill.level == 0 || self.skill.level > MAX_SKILL_LEVEL {
            return Err(ConfigError::ValidationError(format!(
                "talisman '{}' grants '{}' at level {}, expected 1-{}",
                self.name, self.skill.name, self.skill.level, MAX_SKILL_LEVEL
            )));
        }
        Ok(())
    }
}
