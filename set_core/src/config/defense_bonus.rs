//! Defense bonuses granted by skill levels

use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Bonus applied to a running defense total at one skill level
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DefenseBonus {
    /// Percentage of the current defense added (5.0 = +5%)
    #[serde(default)]
    pub percent: f64,
    /// Flat defense added after the percentage
    #[serde(default)]
    pub flat: u32,
}

impl DefenseBonus {
    /// Apply this bonus to a defense value
    pub fn apply(&self, defense: f64) -> f64 {
        defense + (self.percent / 100.0) * defense + self.flat as f64
    }
}

/// One skill's bonus rows as written in the config file
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SkillBonusEntry {
    name: String,
    levels: Vec<DefenseBonus>,
}

/// Container for defense bonus configurations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct DefenseBonusFile {
    #[serde(default)]
    skills: Vec<SkillBonusEntry>,
}

/// Skill name -> bonus per level
///
/// Row `n` applies at skill level `n`. Levels past the last row reuse it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "DefenseBonusFile", into = "DefenseBonusFile")]
pub struct DefenseBonusTable {
    bonuses: HashMap<String, Vec<DefenseBonus>>,
}

impl From<DefenseBonusFile> for DefenseBonusTable {
    fn from(file: DefenseBonusFile) -> Self {
        let mut table = DefenseBonusTable::new();
        for entry in file.skills {
            table.register(entry.name, entry.levels);
        }
        table
    }
}

impl From<DefenseBonusTable> for DefenseBonusFile {
    fn from(table: DefenseBonusTable) -> Self {
        let mut skills: Vec<SkillBonusEntry> = table
            .bonuses
            .into_iter()
            .map(|(name, levels)| SkillBonusEntry { name, levels })
            .collect();
        skills.sort_by(|a, b| a.name.cmp(&b.name));
        DefenseBonusFile { skills }
    }
}

impl DefenseBonusTable {
    /// Create an empty table
    pub fn new() -> Self {
        DefenseBonusTable {
            bonuses: HashMap::new(),
        }
    }

    /// Register the bonus rows for a skill, replacing any previous rows
    pub fn register(&mut self, skill: impl Into<String>, levels: Vec<DefenseBonus>) {
        self.bonuses.insert(skill.into(), levels);
    }

    /// Whether the skill has any defense bonus rows
    pub fn contains(&self, skill: &str) -> bool {
        self.bonuses.contains_key(skill)
    }

    /// Bonus for a skill at a level
    pub fn bonus(&self, skill: &str, level: u32) -> Option<DefenseBonus> {
        let levels = self.bonuses.get(skill)?;
        let index = (level as usize).min(levels.len().checked_sub(1)?);
        levels.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.bonuses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bonuses.is_empty()
    }

    /// Load a bonus table from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let file: DefenseBonusFile = super::load_toml(path)?;
        Ok(file.into())
    }

    /// Load a bonus table from a TOML string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let file: DefenseBonusFile = super::parse_toml(content)?;
        Ok(file.into())
    }
}

/// Get the default defense bonus table
pub fn default_defense_bonuses() -> DefenseBonusTable {
    let toml = include_str!("../../config/defense_bonuses.toml");
    DefenseBonusTable::parse(toml).unwrap_or_else(|err| {
        tracing::error!("embedded defense bonus table is invalid: {}", err);
        DefenseBonusTable::new()
    })
}
