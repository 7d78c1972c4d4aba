//! set_core - Armor set search and ranking
//!
//! This library provides:
//! - Catalog: armor, talisman and skill cap tables loaded from TOML or JSON
//! - CandidateSet: additive stat totals for one loadout
//! - Search pipeline: candidate filter, best-per-slot fillers, cross-product
//!   generation, skill cap validity, defense refinement and ranking
//! - Recommender: the whole pipeline behind a single `recommend` call

pub mod candidate;
pub mod catalog;
pub mod config;
pub mod defense;
pub mod error;
pub mod prelude;
pub mod recommend;
pub mod search;
pub mod source;
pub mod types;

// Re-export core types for convenience
pub use candidate::CandidateSet;
pub use catalog::{ArmorPiece, Catalog, SkillCap, SkillCapTable, Talisman};
pub use config::{ConfigError, DefenseBonus, DefenseBonusTable, SearchConfig};
pub use error::RecommendError;
pub use recommend::{Recommendation, Recommender};
pub use source::{LoadoutSource, ScoredArmor};
pub use types::{ArmorType, PriorityMode, SkillLevel, MAX_SKILL_LEVEL};
