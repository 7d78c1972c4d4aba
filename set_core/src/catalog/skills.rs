//! Skill level caps

use crate::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A skill and the highest level it can stack to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCap {
    pub name: String,
    pub max_level: u32,
}

/// Skill name -> max level
///
/// Keeps the order skills were registered in for listing.
#[derive(Debug, Clone, Default)]
pub struct SkillCapTable {
    caps: HashMap<String, u32>,
    order: Vec<String>,
}

impl SkillCapTable {
    pub fn new() -> Self {
        SkillCapTable::default()
    }

    /// Build a table, rejecting duplicate names and zero caps
    pub fn from_caps(caps: Vec<SkillCap>) -> Result<Self, ConfigError> {
        let mut table = SkillCapTable::new();
        for cap in caps {
            table.insert(cap)?;
        }
        Ok(table)
    }

    /// Register one cap
    pub fn insert(&mut self, cap: SkillCap) -> Result<(), ConfigError> {
        if cap.max_level == 0 {
            return Err(ConfigError::ValidationError(format!(
                "skill '{}' has a max level of 0",
                cap.name
            )));
        }
        if self.caps.contains_key(&cap.name) {
            return Err(ConfigError::ValidationError(format!(
                "skill '{}' is listed more than once",
                cap.name
            )));
        }
        self.order.push(cap.name.clone());
        self.caps.insert(cap.name, cap.max_level);
        Ok(())
    }

    /// Max level of a skill, if known
    pub fn cap(&self, skill: &str) -> Option<u32> {
        self.caps.get(skill).copied()
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.caps.contains_key(skill)
    }

    /// Skill names in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cap(name: &str, max_level: u32) -> SkillCap {
        SkillCap {
            name: name.to_string(),
            max_level,
        }
    }

    #[test]
    fn test_lookup_and_order() {
        let table = SkillCapTable::from_caps(vec![cap("Focus", 5), cap("Attack Boost", 7)]).unwrap();
        assert_eq!(table.cap("Focus"), Some(5));
        assert_eq!(table.cap("Guard"), None);
        assert_eq!(table.names().collect::<Vec<_>>(), vec!["Focus", "Attack Boost"]);
    }

    #[test]
    fn test_rejects_duplicates_and_zero() {
        assert!(SkillCapTable::from_caps(vec![cap("Focus", 5), cap("Focus", 3)]).is_err());
        assert!(SkillCapTable::from_caps(vec![cap("Focus", 0)]).is_err());
    }
}
