//! LoadoutSource - Trait and implementations for pieces that feed a CandidateSet

mod armor;
mod talisman;

pub use armor::{augment_scores, decoration_score, ScoredArmor};

use crate::candidate::CandidateSet;

/// Anything that can be slotted into a loadout
///
/// `'a` is the catalog lifetime: names handed to the set borrow from it.
pub trait LoadoutSource<'a> {
    /// Add this piece's contribution to the set
    fn apply(&self, set: &mut CandidateSet<'a>);
}
