//! CandidateSet - Running totals for one partial or complete loadout

use crate::source::LoadoutSource;
use crate::types::ArmorType;
use std::collections::BTreeMap;

/// Number of decoration slot sizes (1, 2 and 3)
pub const DECORATION_SIZES: usize = 3;

/// Accumulated stats of the pieces applied so far
///
/// Names borrow from the catalog, so sets are cheap to branch. Every
/// contribution is additive: applying a piece never lowers a total.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet<'a> {
    armor: [Option<&'a str>; ArmorType::COUNT],
    talisman: Option<&'a str>,
    defense: u32,
    /// Skill name -> summed level
    skills: BTreeMap<&'a str, u32>,
    /// Slot counts, index 0 = size 1
    decorations: [u32; DECORATION_SIZES],
    decoration_score: u32,
}

impl<'a> CandidateSet<'a> {
    /// Create an empty set
    pub fn new() -> Self {
        CandidateSet::default()
    }

    /// Copy this set and apply one more piece to the copy
    pub fn with<S: LoadoutSource<'a> + ?Sized>(&self, source: &S) -> Self {
        let mut next = self.clone();
        source.apply(&mut next);
        next
    }

    // === Mutators used by sources ===

    pub fn equip_armor(&mut self, armor_type: ArmorType, name: &'a str) {
        self.armor[armor_type.index()] = Some(name);
    }

    pub fn equip_talisman(&mut self, name: &'a str) {
        self.talisman = Some(name);
    }

    pub fn add_defense(&mut self, defense: u32) {
        self.defense = self.defense.saturating_add(defense);
    }

    pub fn add_skill(&mut self, skill: &'a str, level: u32) {
        let total = self.skills.entry(skill).or_insert(0);
        *total = total.saturating_add(level);
    }

    /// Count one decoration slot; sizes outside 1-3 are ignored
    pub fn add_decoration_slot(&mut self, size: u8) {
        if let Some(count) = (size as usize)
            .checked_sub(1)
            .and_then(|i| self.decorations.get_mut(i))
        {
            *count += 1;
        }
    }

    pub fn add_decoration_score(&mut self, score: u32) {
        self.decoration_score = self.decoration_score.saturating_add(score);
    }

    /// Overwrite the defense total (used by defense refinement)
    pub(crate) fn set_defense(&mut self, defense: u32) {
        self.defense = defense;
    }

    // === Accessors ===

    pub fn piece(&self, armor_type: ArmorType) -> Option<&'a str> {
        self.armor[armor_type.index()]
    }

    pub fn talisman(&self) -> Option<&'a str> {
        self.talisman
    }

    pub fn defense(&self) -> u32 {
        self.defense
    }

    /// Level of a skill, 0 if no piece grants it
    pub fn skill_level(&self, skill: &str) -> u32 {
        self.skills.get(skill).copied().unwrap_or(0)
    }

    /// Granted skills in name order
    pub fn skills(&self) -> impl Iterator<Item = (&'a str, u32)> + '_ {
        self.skills.iter().map(|(name, level)| (*name, *level))
    }

    /// Number of decoration slots of a size (1-3)
    pub fn decoration_count(&self, size: u8) -> u32 {
        (size as usize)
            .checked_sub(1)
            .and_then(|i| self.decorations.get(i))
            .copied()
            .unwrap_or(0)
    }

    pub fn decoration_score(&self) -> u32 {
        self.decoration_score
    }

    /// All five armor slots and the talisman are filled
    pub fn is_complete(&self) -> bool {
        self.talisman.is_some() && self.armor.iter().all(Option::is_some)
    }
}
