//! Defense refinement - re-price a loadout's defense with skill bonuses
//!
//! Bonuses are applied one skill at a time, in skill name order:
//! - `defense = defense + percent / 100 * defense + flat`
//! - the final value is rounded half to even
//!
//! Order matters because each percentage scales the total left by the
//! previous skill.

use crate::candidate::CandidateSet;
use crate::config::DefenseBonusTable;

/// Defense of `set` after every applicable skill bonus
///
/// # Arguments
/// * `set` - A loadout with its summed armor defense
/// * `table` - Bonus rows per skill and level
///
/// # Returns
/// The rounded defense; skills without rows leave it unchanged
pub fn refined_defense(set: &CandidateSet<'_>, table: &DefenseBonusTable) -> u32 {
    let mut defense = set.defense() as f64;

    // `skills()` yields names in sorted order
    for (skill, level) in set.skills() {
        if let Some(bonus) = table.bonus(skill, level) {
            defense = bonus.apply(defense);
        }
    }

    defense.round_ties_even().max(0.0) as u32
}

/// Replace the set's defense with its refined value
pub fn refine_defense(set: &mut CandidateSet<'_>, table: &DefenseBonusTable) {
    let defense = refined_defense(set, table);
    set.set_defense(defense);
}
