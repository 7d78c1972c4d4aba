//! Core types shared by the catalog and the search

use serde::{Deserialize, Serialize};
use std::fmt;

/// Armor slot a piece is worn in
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArmorType {
    Head,
    Chest,
    Arm,
    Waist,
    Leg,
}

impl ArmorType {
    /// Number of armor slots in a loadout
    pub const COUNT: usize = 5;

    /// All armor types, in the order a loadout is filled
    pub fn all() -> &'static [ArmorType] {
        &[
            ArmorType::Head,
            ArmorType::Chest,
            ArmorType::Arm,
            ArmorType::Waist,
            ArmorType::Leg,
        ]
    }

    /// Position of this slot in [`ArmorType::all`]
    pub fn index(self) -> usize {
        match self {
            ArmorType::Head => 0,
            ArmorType::Chest => 1,
            ArmorType::Arm => 2,
            ArmorType::Waist => 3,
            ArmorType::Leg => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ArmorType::Head => "head",
            ArmorType::Chest => "chest",
            ArmorType::Arm => "arm",
            ArmorType::Waist => "waist",
            ArmorType::Leg => "leg",
        }
    }
}

impl fmt::Display for ArmorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What to maximise once the requested skills are settled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityMode {
    /// Highest total defense, then decoration score
    #[default]
    Defense,
    /// Highest decoration score, then defense
    Decorations,
}

impl fmt::Display for PriorityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriorityMode::Defense => f.write_str("defense"),
            PriorityMode::Decorations => f.write_str("decorations"),
        }
    }
}

impl std::str::FromStr for PriorityMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "defense" => Ok(PriorityMode::Defense),
            "decorations" => Ok(PriorityMode::Decorations),
            other => Err(format!(
                "unknown priority '{}', expected 'defense' or 'decorations'",
                other
            )),
        }
    }
}

/// Highest level a single piece may grant for one skill
pub const MAX_SKILL_LEVEL: u32 = 100;

/// A skill granted at a given level
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SkillLevel {
    /// Skill name, as listed in the skill cap table
    pub name: String,
    /// Levels granted by the piece
    pub level: u32,
}

impl SkillLevel {
    pub fn new(name: impl Into<String>, level: u32) -> Self {
        SkillLevel {
            name: name.into(),
            level,
        }
    }
}
