//! Equipment and skill catalogs
//!
//! The catalogs are produced elsewhere and handed to the search fully
//! materialised. Three TOML files make up a catalog directory:
//!
//! - `armors.toml`: `[[armors]]` entries
//! - `talismans.toml`: `[[talismans]]` entries
//! - `skills.toml`: `[[skills]]` entries with `max_level`
//!
//! A single JSON document holding the same three arrays is accepted too.

mod armor;
mod skills;
mod talisman;

pub use armor::{
    ArmorPiece, MAX_DECORATION_SIZE, MAX_DECORATION_SLOTS, MAX_PIECE_DEFENSE, MAX_PIECE_SKILLS,
};
pub use skills::{SkillCap, SkillCapTable};
pub use talisman::Talisman;

use crate::config::{self, ConfigError};
use crate::error::RecommendError;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const ARMORS_FILE: &str = "armors.toml";
pub const TALISMANS_FILE: &str = "talismans.toml";
pub const SKILLS_FILE: &str = "skills.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ArmorsFile {
    #[serde(default)]
    armors: Vec<ArmorPiece>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct TalismansFile {
    #[serde(default)]
    talismans: Vec<Talisman>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SkillsFile {
    #[serde(default)]
    skills: Vec<SkillCap>,
}

/// All three tables in one document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    armors: Vec<ArmorPiece>,
    #[serde(default)]
    talismans: Vec<Talisman>,
    #[serde(default)]
    skills: Vec<SkillCap>,
}

/// In-memory armor, talisman and skill cap tables
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    armors: Vec<ArmorPiece>,
    talismans: Vec<Talisman>,
    skill_caps: SkillCapTable,
}

impl Catalog {
    /// Build a catalog, validating every piece
    pub fn new(
        armors: Vec<ArmorPiece>,
        talismans: Vec<Talisman>,
        skill_caps: SkillCapTable,
    ) -> Result<Self, ConfigError> {
        for armor in &armors {
            armor.validate()?;
        }
        for talisman in &talismans {
            talisman.validate()?;
        }
        Ok(Catalog {
            armors,
            talismans,
            skill_caps,
        })
    }

    /// Load `armors.toml`, `talismans.toml` and `skills.toml` from a directory
    pub fn load_dir(dir: &Path) -> Result<Self, ConfigError> {
        let armors: ArmorsFile = config::load_toml(&dir.join(ARMORS_FILE))?;
        let talismans: TalismansFile = config::load_toml(&dir.join(TALISMANS_FILE))?;
        let skills: SkillsFile = config::load_toml(&dir.join(SKILLS_FILE))?;

        let catalog = Catalog::new(
            armors.armors,
            talismans.talismans,
            SkillCapTable::from_caps(skills.skills)?,
        )?;
        tracing::debug!(
            "loaded catalog from {}: {} armors, {} talismans, {} skills",
            dir.display(),
            catalog.armors.len(),
            catalog.talismans.len(),
            catalog.skill_caps.len()
        );
        Ok(catalog)
    }

    /// Parse the three catalog tables from TOML strings
    pub fn from_toml_strs(armors: &str, talismans: &str, skills: &str) -> Result<Self, ConfigError> {
        let armors: ArmorsFile = config::parse_toml(armors)?;
        let talismans: TalismansFile = config::parse_toml(talismans)?;
        let skills: SkillsFile = config::parse_toml(skills)?;
        Catalog::new(
            armors.armors,
            talismans.talismans,
            SkillCapTable::from_caps(skills.skills)?,
        )
    }

    /// Load a single JSON document with `armors`, `talismans` and `skills`
    pub fn load_json(path: &Path) -> Result<Self, ConfigError> {
        let file: CatalogFile = config::load_json(path)?;
        Catalog::from_file(file)
    }

    /// Parse a single JSON document with `armors`, `talismans` and `skills`
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let file: CatalogFile = config::parse_json(content)?;
        Catalog::from_file(file)
    }

    fn from_file(file: CatalogFile) -> Result<Self, ConfigError> {
        Catalog::new(
            file.armors,
            file.talismans,
            SkillCapTable::from_caps(file.skills)?,
        )
    }

    pub fn armors(&self) -> &[ArmorPiece] {
        &self.armors
    }

    pub fn talismans(&self) -> &[Talisman] {
        &self.talismans
    }

    pub fn skill_caps(&self) -> &SkillCapTable {
        &self.skill_caps
    }

    /// Fail if any skill on any piece has no cap
    ///
    /// Reports the first offender in catalog order, armors before talismans.
    pub fn check_skill_caps(&self) -> Result<(), RecommendError> {
        for armor in &self.armors {
            for skill in &armor.skills {
                if !self.skill_caps.contains(&skill.name) {
                    return Err(RecommendError::UnknownSkillCap {
                        skill: skill.name.clone(),
                        origin: format!("armor '{}'", armor.name),
                    });
                }
            }
        }
        for talisman in &self.talismans {
            if !self.skill_caps.contains(&talisman.skill.name) {
                return Err(RecommendError::UnknownSkillCap {
                    skill: talisman.skill.name.clone(),
                    origin: format!("talisman '{}'", talisman.name),
                });
            }
        }
        Ok(())
    }
}
