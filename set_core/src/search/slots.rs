//! Best-per-slot selector - one filler piece for every armor slot

use crate::source::ScoredArmor;
use crate::types::{ArmorType, PriorityMode};

/// Sort key of a filler piece under a priority mode
fn filler_key(armor: &ScoredArmor<'_>, mode: PriorityMode) -> (u32, u32) {
    match mode {
        PriorityMode::Defense => (armor.defense(), armor.decoration_score),
        PriorityMode::Decorations => (armor.decoration_score, armor.defense()),
    }
}

/// Top piece of each armor type, ignoring skills
///
/// Defense mode ranks by defense then decoration score, decorations mode the
/// other way round. Ties go to the earliest piece in catalog order. Returns one
/// piece per armor type present in `armors`, in slot order.
pub fn best_per_slot<'a>(armors: &[ScoredArmor<'a>], mode: PriorityMode) -> Vec<ScoredArmor<'a>> {
    let mut best: [Option<ScoredArmor<'a>>; ArmorType::COUNT] = [None; ArmorType::COUNT];

    for armor in armors {
        let slot = &mut best[armor.armor_type().index()];
        let better = match slot {
            Some(current) => filler_key(armor, mode) > filler_key(current, mode),
            None => true,
        };
        if better {
            *slot = Some(*armor);
        }
    }

    best.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ArmorPiece;
    use crate::source::augment_scores;

    fn names(pieces: &[ScoredArmor<'_>]) -> Vec<String> {
        pieces.iter().map(|p| p.piece.name.clone()).collect()
    }

    #[test]
    fn test_one_piece_per_type() {
        let armors = vec![
            ArmorPiece::new("Leg A", ArmorType::Leg, 3),
            ArmorPiece::new("Head A", ArmorType::Head, 5),
            ArmorPiece::new("Head B", ArmorType::Head, 8),
            ArmorPiece::new("Leg B", ArmorType::Leg, 2),
        ];
        let scored = augment_scores(&armors);
        let best = best_per_slot(&scored, PriorityMode::Defense);
        assert_eq!(names(&best), vec!["Head B", "Leg A"]);
    }

    #[test]
    fn test_decorations_mode_prefers_slots() {
        let armors = vec![
            ArmorPiece::new("Plain Helm", ArmorType::Head, 10),
            ArmorPiece::new("Socket Helm", ArmorType::Head, 10).with_slot(3),
        ];
        let scored = augment_scores(&armors);
        let best = best_per_slot(&scored, PriorityMode::Decorations);
        assert_eq!(names(&best), vec!["Socket Helm"]);
    }

    #[test]
    fn test_defense_mode_breaks_ties_on_decorations() {
        let armors = vec![
            ArmorPiece::new("Plain Helm", ArmorType::Head, 10),
            ArmorPiece::new("Socket Helm", ArmorType::Head, 10).with_slot(1),
            ArmorPiece::new("Weak Helm", ArmorType::Head, 9).with_slot(3).with_slot(3),
        ];
        let scored = augment_scores(&armors);
        let best = best_per_slot(&scored, PriorityMode::Defense);
        assert_eq!(names(&best), vec!["Socket Helm"]);
    }

    #[test]
    fn test_full_tie_keeps_catalog_order() {
        let armors = vec![
            ArmorPiece::new("First", ArmorType::Arm, 7).with_slot(2),
            ArmorPiece::new("Second", ArmorType::Arm, 7).with_slot(2),
        ];
        let scored = augment_scores(&armors);
        for mode in [PriorityMode::Defense, PriorityMode::Decorations] {
            assert_eq!(names(&best_per_slot(&scored, mode)), vec!["First"]);
        }
    }

    #[test]
    fn test_empty_catalog() {
        assert!(best_per_slot(&[], PriorityMode::Defense).is_empty());
    }
}
