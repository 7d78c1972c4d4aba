//! Combination generator - full cross-product of the slot pools

use crate::candidate::CandidateSet;
use crate::catalog::Talisman;
use crate::source::ScoredArmor;
use crate::types::ArmorType;

/// Five armor slots plus the talisman
pub const LOADOUT_SLOTS: usize = ArmorType::COUNT + 1;

/// Pieces available for each slot of a loadout
#[derive(Debug, Clone, Default)]
pub struct SlotPools<'a> {
    armor: [Vec<ScoredArmor<'a>>; ArmorType::COUNT],
    talismans: Vec<&'a Talisman>,
}

impl<'a> SlotPools<'a> {
    /// Group `filtered` followed by `fillers` by armor type
    ///
    /// A catalog entry present in both lists is only pooled once, at its
    /// first position.
    pub fn new(
        filtered: &[ScoredArmor<'a>],
        fillers: &[ScoredArmor<'a>],
        talismans: Vec<&'a Talisman>,
    ) -> Self {
        let mut armor: [Vec<ScoredArmor<'a>>; ArmorType::COUNT] = Default::default();
        for piece in filtered.iter().chain(fillers) {
            let pool = &mut armor[piece.armor_type().index()];
            if !pool.iter().any(|pooled| pooled.is_same_piece(piece)) {
                pool.push(*piece);
            }
        }
        SlotPools { armor, talismans }
    }

    pub fn pool(&self, armor_type: ArmorType) -> &[ScoredArmor<'a>] {
        &self.armor[armor_type.index()]
    }

    pub fn talismans(&self) -> &[&'a Talisman] {
        &self.talismans
    }

    fn slot_len(&self, slot: usize) -> usize {
        if slot < ArmorType::COUNT {
            self.armor[slot].len()
        } else {
            self.talismans.len()
        }
    }

    /// Number of combinations the cross-product holds (saturating)
    pub fn combination_count(&self) -> u64 {
        (0..LOADOUT_SLOTS).fold(1u64, |count, slot| {
            count.saturating_mul(self.slot_len(slot) as u64)
        })
    }

    /// Iterate every loadout, head outermost and talisman innermost
    pub fn combinations(&self) -> Combinations<'_, 'a> {
        Combinations::new(self)
    }

    /// Apply the `choice`-th piece of `slot` to a copy of `set`
    fn branch(&self, slot: usize, choice: usize, set: &CandidateSet<'a>) -> CandidateSet<'a> {
        if slot < ArmorType::COUNT {
            set.with(&self.armor[slot][choice])
        } else {
            set.with(&self.talismans[choice])
        }
    }
}

/// Odometer over the six slot pools
///
/// `prefixes[k]` holds the set built from the first `k` chosen pieces, so
/// advancing the last slot only rebuilds the talisman step.
pub struct Combinations<'p, 'a> {
    pools: &'p SlotPools<'a>,
    indices: [usize; LOADOUT_SLOTS],
    prefixes: [CandidateSet<'a>; LOADOUT_SLOTS + 1],
    /// First slot whose prefix is stale
    stale_from: usize,
    done: bool,
}

impl<'p, 'a> Combinations<'p, 'a> {
    fn new(pools: &'p SlotPools<'a>) -> Self {
        let done = (0..LOADOUT_SLOTS).any(|slot| pools.slot_len(slot) == 0);
        Combinations {
            pools,
            indices: [0; LOADOUT_SLOTS],
            prefixes: Default::default(),
            stale_from: 0,
            done,
        }
    }

    /// Move to the next index tuple; false once every tuple was visited
    fn advance(&mut self) -> bool {
        for slot in (0..LOADOUT_SLOTS).rev() {
            self.indices[slot] += 1;
            if self.indices[slot] < self.pools.slot_len(slot) {
                self.stale_from = slot;
                return true;
            }
            self.indices[slot] = 0;
        }
        false
    }
}

impl<'p, 'a> Iterator for Combinations<'p, 'a> {
    type Item = CandidateSet<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        for slot in self.stale_from..LOADOUT_SLOTS {
            let next = self
                .pools
                .branch(slot, self.indices[slot], &self.prefixes[slot]);
            self.prefixes[slot + 1] = next;
        }
        // The last prefix is always rebuilt on the next call.
        let combination = std::mem::take(&mut self.prefixes[LOADOUT_SLOTS]);

        if !self.advance() {
            self.done = true;
        }
        Some(combination)
    }
}
