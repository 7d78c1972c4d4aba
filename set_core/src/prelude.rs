//! Prelude module for convenient imports
//!
//! ```rust
//! use set_core::prelude::*;
//! ```

// Catalog
pub use crate::catalog::{ArmorPiece, Catalog, SkillCapTable, Talisman};

// Core types
pub use crate::candidate::CandidateSet;
pub use crate::types::{ArmorType, PriorityMode, SkillLevel};

// Search
pub use crate::recommend::{Recommendation, Recommender};
pub use crate::search::{best_per_slot, filter_candidates, select_best, SlotPools};
pub use crate::source::{augment_scores, LoadoutSource, ScoredArmor};

// Config and errors
pub use crate::config::SearchConfig;
pub use crate::error::RecommendError;
