//! Talismans as loadout sources

use crate::candidate::CandidateSet;
use crate::catalog::Talisman;
use crate::source::LoadoutSource;

impl<'a> LoadoutSource<'a> for &'a Talisman {
    fn apply(&self, set: &mut CandidateSet<'a>) {
        let talisman: &'a Talisman = *self;
        set.equip_talisman(&talisman.name);
        set.add_skill(&talisman.skill.name, talisman.skill.level);
    }
}
