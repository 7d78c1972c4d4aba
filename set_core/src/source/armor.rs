//! Armor pieces as loadout sources, with their decoration score

use crate::candidate::CandidateSet;
use crate::catalog::ArmorPiece;
use crate::source::LoadoutSource;
use crate::types::ArmorType;

/// An armor piece paired with its decoration score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredArmor<'a> {
    pub piece: &'a ArmorPiece,
    /// Sum of the piece's decoration slot sizes
    pub decoration_score: u32,
}

impl<'a> ScoredArmor<'a> {
    pub fn new(piece: &'a ArmorPiece) -> Self {
        ScoredArmor {
            piece,
            decoration_score: decoration_score(piece),
        }
    }

    pub fn armor_type(&self) -> ArmorType {
        self.piece.armor_type
    }

    pub fn defense(&self) -> u32 {
        self.piece.defense
    }

    /// Same catalog entry, not merely equal contents
    pub fn is_same_piece(&self, other: &ScoredArmor<'_>) -> bool {
        std::ptr::eq(self.piece, other.piece)
    }
}

/// Sum of slot sizes; missing slots count as 0
pub fn decoration_score(piece: &ArmorPiece) -> u32 {
    piece.decoration_slots.iter().map(|&size| size as u32).sum()
}

/// Score every piece of an armor catalog, keeping catalog order
pub fn augment_scores(armors: &[ArmorPiece]) -> Vec<ScoredArmor<'_>> {
    armors.iter().map(ScoredArmor::new).collect()
}

impl<'a> LoadoutSource<'a> for ScoredArmor<'a> {
    fn apply(&self, set: &mut CandidateSet<'a>) {
        let piece = self.piece;
        set.equip_armor(piece.armor_type, &piece.name);
        set.add_defense(piece.defense);

        for skill in &piece.skills {
            set.add_skill(&skill.name, skill.level);
        }

        for &size in &piece.decoration_slots {
            set.add_decoration_slot(size);
        }

        set.add_decoration_score(self.decoration_score);
    }
}
