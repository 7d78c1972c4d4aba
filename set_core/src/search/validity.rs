//! Validity filter - drop loadouts that stack a skill past its cap

use crate::candidate::CandidateSet;
use crate::catalog::SkillCapTable;

/// Every granted skill is at or below its cap
///
/// A skill missing from the cap table fails the check.
pub fn is_within_caps(set: &CandidateSet<'_>, caps: &SkillCapTable) -> bool {
    set.skills()
        .all(|(skill, level)| caps.cap(skill).is_some_and(|cap| level <= cap))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SkillCap;

    fn caps() -> SkillCapTable {
        SkillCapTable::from_caps(vec![
            SkillCap {
                name: "Focus".to_string(),
                max_level: 2,
            },
            SkillCap {
                name: "Guard".to_string(),
                max_level: 1,
            },
        ])
        .unwrap()
    }

    fn set_with(skills: &[(&'static str, u32)]) -> CandidateSet<'static> {
        let mut set = CandidateSet::new();
        for (skill, level) in skills {
            set.add_skill(*skill, *level);
        }
        set
    }

    #[test]
    fn test_at_cap_is_valid() {
        assert!(is_within_caps(&set_with(&[("Focus", 2), ("Guard", 1)]), &caps()));
        assert!(is_within_caps(&set_with(&[]), &caps()));
    }

    #[test]
    fn test_over_any_cap_is_invalid() {
        assert!(!is_within_caps(&set_with(&[("Focus", 3)]), &caps()));
        assert!(!is_within_caps(&set_with(&[("Focus", 1), ("Guard", 2)]), &caps()));
    }

    #[test]
    fn test_unknown_skill_fails_closed() {
        assert!(!is_within_caps(&set_with(&[("Mystery", 1)]), &caps()));
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let caps = caps();
        let sets = vec![
            set_with(&[("Focus", 1)]),
            set_with(&[("Focus", 3)]),
            set_with(&[("Guard", 1)]),
        ];
        let once: Vec<_> = sets.into_iter().filter(|set| is_within_caps(set, &caps)).collect();
        assert_eq!(once.len(), 2);
        let twice: Vec<_> = once.iter().filter(|set| is_within_caps(set, &caps)).cloned().collect();
        assert_eq!(once, twice);
    }
}
