//! Best-combination selector

use crate::candidate::CandidateSet;
use crate::types::PriorityMode;

/// Lexicographic ranking key, larger is better
///
/// Requested skill levels come first, in the order the user asked for them,
/// then the mode's primary and secondary stat, then the size-1 slot count.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct RankKey {
    skills: Vec<u32>,
    primary: u32,
    secondary: u32,
    small_slots: u32,
}

impl RankKey {
    pub fn new<S: AsRef<str>>(set: &CandidateSet<'_>, desired: &[S], mode: PriorityMode) -> Self {
        let skills = desired
            .iter()
            .map(|skill| set.skill_level(skill.as_ref()))
            .collect();
        let (primary, secondary) = match mode {
            PriorityMode::Defense => (set.defense(), set.decoration_score()),
            PriorityMode::Decorations => (set.decoration_score(), set.defense()),
        };
        RankKey {
            skills,
            primary,
            secondary,
            small_slots: set.decoration_count(1),
        }
    }
}

/// First set holding the highest key
///
/// Returns `None` for an empty input.
pub fn select_best<'a, I, S>(sets: I, desired: &[S], mode: PriorityMode) -> Option<CandidateSet<'a>>
where
    I: IntoIterator<Item = CandidateSet<'a>>,
    S: AsRef<str>,
{
    let mut best: Option<(RankKey, CandidateSet<'a>)> = None;
    for set in sets {
        let key = RankKey::new(&set, desired, mode);
        let better = match &best {
            Some((best_key, _)) => key > *best_key,
            None => true,
        };
        if better {
            best = Some((key, set));
        }
    }
    best.map(|(_, set)| set)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(talisman: &'static str, defense: u32, skills: &[(&'static str, u32)], slots: &[u8]) -> CandidateSet<'static> {
        let mut set = CandidateSet::new();
        set.equip_talisman(talisman);
        set.add_defense(defense);
        for (skill, level) in skills {
            set.add_skill(*skill, *level);
        }
        for &size in slots {
            set.add_decoration_slot(size);
            set.add_decoration_score(size as u32);
        }
        set
    }

    #[test]
    fn test_requested_skills_dominate() {
        let sets = vec![
            set("tank", 500, &[("Guard", 1)], &[3, 3]),
            set("focus", 10, &[("Focus", 1)], &[]),
        ];
        let best = select_best(sets, &["Focus", "Guard"], PriorityMode::Defense).unwrap();
        assert_eq!(best.talisman(), Some("focus"));
    }

    #[test]
    fn test_skill_priority_follows_request_order() {
        let sets = vec![
            set("a", 10, &[("Focus", 2), ("Guard", 1)], &[]),
            set("b", 10, &[("Focus", 1), ("Guard", 3)], &[]),
        ];
        let best = select_best(sets.clone(), &["Focus", "Guard"], PriorityMode::Defense).unwrap();
        assert_eq!(best.talisman(), Some("a"));
        let best = select_best(sets, &["Guard", "Focus"], PriorityMode::Defense).unwrap();
        assert_eq!(best.talisman(), Some("b"));
    }

    #[test]
    fn test_mode_switches_primary_stat() {
        let sets = vec![
            set("armored", 100, &[], &[1]),
            set("socketed", 90, &[], &[3, 2]),
        ];
        let best = select_best(sets.clone(), &["Focus"], PriorityMode::Defense).unwrap();
        assert_eq!(best.talisman(), Some("armored"));
        let best = select_best(sets, &["Focus"], PriorityMode::Decorations).unwrap();
        assert_eq!(best.talisman(), Some("socketed"));
    }

    #[test]
    fn test_small_slots_break_remaining_tie() {
        let sets = vec![
            set("large", 50, &[], &[2]),
            set("small", 50, &[], &[1, 1]),
        ];
        let best = select_best(sets, &["Focus"], PriorityMode::Defense).unwrap();
        assert_eq!(best.talisman(), Some("small"));
    }

    #[test]
    fn test_full_tie_keeps_first() {
        let sets = vec![set("first", 50, &[], &[2]), set("second", 50, &[], &[2])];
        let best = select_best(sets, &["Focus"], PriorityMode::Decorations).unwrap();
        assert_eq!(best.talisman(), Some("first"));
    }

    #[test]
    fn test_empty_input() {
        assert!(select_best(Vec::new(), &["Focus"], PriorityMode::Defense).is_none());
    }
}
