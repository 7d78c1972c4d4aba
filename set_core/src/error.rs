//! Search errors

use thiserror::Error;

/// Reasons a recommendation could not be produced
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecommendError {
    #[error("no skills were selected")]
    EmptySelection,
    #[error("skill '{skill}' (from {origin}) has no max level in the skill table")]
    UnknownSkillCap { skill: String, origin: String },
    #[error("no combination satisfies the skill caps with the requested skills")]
    NoViableCombination,
    #[error("search would enumerate {count} combinations, limit is {limit}")]
    TooManyCombinations { count: u64, limit: u64 },
}
