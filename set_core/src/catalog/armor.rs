//! Armor pieces

use crate::config::ConfigError;
use crate::types::{ArmorType, SkillLevel, MAX_SKILL_LEVEL};
use serde::{Deserialize, Serialize};

/// Most skills a single armor piece can carry
pub const MAX_PIECE_SKILLS: usize = 3;
/// Most decoration slots a single armor piece can carry
pub const MAX_DECORATION_SLOTS: usize = 3;
/// Largest decoration slot size
pub const MAX_DECORATION_SIZE: u8 = 3;
/// Highest base defense a single armor piece can carry
pub const MAX_PIECE_DEFENSE: u32 = 10_000;

/// One wearable armor piece
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmorPiece {
    pub name: String,
    pub armor_type: ArmorType,
    #[serde(default)]
    pub defense: u32,
    /// Skills granted by the piece (up to three)
    #[serde(default)]
    pub skills: Vec<SkillLevel>,
    /// Decoration slot sizes (up to three, each 1-3)
    #[serde(default)]
    pub decoration_slots: Vec<u8>,
}

impl ArmorPiece {
    pub fn new(name: impl Into<String>, armor_type: ArmorType, defense: u32) -> Self {
        ArmorPiece {
            name: name.into(),
            armor_type,
            defense,
            skills: Vec::new(),
            decoration_slots: Vec::new(),
        }
    }

    /// Builder: add a granted skill
    pub fn with_skill(mut self, name: impl Into<String>, level: u32) -> Self {
        self.skills.push(SkillLevel::new(name, level));
        self
    }

    /// Builder: add a decoration slot
    pub fn with_slot(mut self, size: u8) -> Self {
        self.decoration_slots.push(size);
        self
    }

    /// Whether any of this piece's skills is in `skills`
    pub fn grants_any<S: AsRef<str>>(&self, skills: &[S]) -> bool {
        self.skills
            .iter()
            .any(|granted| skills.iter().any(|s| s.as_ref() == granted.name))
    }

    /// Check the piece against the slot and skill limits
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "armor piece with empty name".to_string(),
            ));
        }
        if self.skills.len() > MAX_PIECE_SKILLS {
            return Err(ConfigError::ValidationError(format!(
                "armor '{}' has {} skills, at most {} allowed",
                self.name,
                self.skills.len(),
                MAX_PIECE_SKILLS
            )));
        }
        if self.defense > MAX_PIECE_DEFENSE {
            return Err(ConfigError::ValidationError(format!(
                "armor '{}' has {} defense, at most {} allowed",
                self.name, self.defense, MAX_PIECE_DEFENSE
            )));
        }
        if let Some(skill) = self
            .skills
            .iter()
            .find(|s| s.level == 0 || s.level > MAX_SKILL_LEVEL)
        {
            return Err(ConfigError::ValidationError(format!(
                "armor '{}' grants '{}' at level {}, expected 1-{}",
                self.name, skill.name, skill.level, MAX_SKILL_LEVEL
            )));
        }
        if self.decoration_slots.len() > MAX_DECORATION_SLOTS {
            return Err(ConfigError::ValidationError(format!(
                "armor '{}' has {} decoration slots, at most {} allowed",
                self.name,
                self.decoration_slots.len(),
                MAX_DECORATION_SLOTS
            )));
        }
        if let Some(size) = self
            .decoration_slots
            .iter()
            .find(|&&size| size == 0 || size > MAX_DECORATION_SIZE)
        {
            return Err(ConfigError::ValidationError(format!(
                "armor '{}' has a decoration slot of size {}, expected 1-{}",
                self.name, size, MAX_DECORATION_SIZE
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grants_any() {
        let helm = ArmorPiece::new("Iron Helm", ArmorType::Head, 10).with_skill("Focus", 1);
        assert!(helm.grants_any(&["Attack Boost", "Focus"]));
        assert!(!helm.grants_any(&["Attack Boost"]));
        assert!(!helm.grants_any::<&str>(&[]));
    }

    #[test]
    fn test_validate_limits() {
        let ok = ArmorPiece::new("Mail", ArmorType::Chest, 40)
            .with_skill("A", 1)
            .with_skill("B", 2)
            .with_skill("C", 1)
            .with_slot(1)
            .with_slot(3);
        assert!(ok.validate().is_ok());

        let too_many = ok.clone().with_skill("D", 1);
        assert!(too_many.validate().is_err());

        let bad_slot = ArmorPiece::new("Mail", ArmorType::Chest, 40).with_slot(4);
        assert!(bad_slot.validate().is_err());

        let zero_level = ArmorPiece::new("Mail", ArmorType::Chest, 40).with_skill("A", 0);
        assert!(zero_level.validate().is_err());

        let high_level =
            ArmorPiece::new("Mail", ArmorType::Chest, 40).with_skill("A", MAX_SKILL_LEVEL + 1);
        assert!(high_level.validate().is_err());

        let heavy = ArmorPiece::new("Mail", ArmorType::Chest, MAX_PIECE_DEFENSE + 1);
        assert!(heavy.validate().is_err());
        let at_limit = ArmorPiece::new("Mail", ArmorType::Chest, MAX_PIECE_DEFENSE);
        assert!(at_limit.validate().is_ok());
    }

    #[test]
    fn test_parse_piece_with_defaults() {
        let toml = r#"
name = "Leather Belt"
armor_type = "waist"
"#;
        let piece: ArmorPiece = toml::from_str(toml).unwrap();
        assert_eq!(piece.armor_type, ArmorType::Waist);
        assert_eq!(piece.defense, 0);
        assert!(piece.skills.is_empty());
        assert!(piece.decoration_slots.is_empty());
    }
}
