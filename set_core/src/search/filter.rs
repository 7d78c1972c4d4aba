//! Candidate filter - keep only pieces relevant to the requested skills

use crate::catalog::Talisman;
use crate::source::ScoredArmor;
use std::collections::BTreeMap;

/// Pieces that can contribute to the requested skills
#[derive(Debug, Clone, Default)]
pub struct Candidates<'a> {
    /// Armor granting at least one requested skill, in catalog order
    pub armors: Vec<ScoredArmor<'a>>,
    /// Best talisman per eligible skill, ordered by skill name
    pub talismans: Vec<&'a Talisman>,
}

/// Reduce the catalog to pieces relevant to `desired`
///
/// Armor is kept when any of its skills is requested. Talismans are kept when
/// their skill is requested or is `defense_skill`; for each skill only the
/// highest level talisman survives, the first one in catalog order on a tie.
pub fn filter_candidates<'a, S: AsRef<str>>(
    desired: &[S],
    armors: &[ScoredArmor<'a>],
    talismans: &'a [Talisman],
    defense_skill: &str,
) -> Candidates<'a> {
    let relevant_armors: Vec<ScoredArmor<'a>> = armors
        .iter()
        .filter(|armor| armor.piece.grants_any(desired))
        .copied()
        .collect();

    let eligible = |skill: &str| skill == defense_skill || desired.iter().any(|s| s.as_ref() == skill);

    let mut best: BTreeMap<&'a str, &'a Talisman> = BTreeMap::new();
    for talisman in talismans.iter().filter(|t| eligible(t.skill.name.as_str())) {
        best.entry(talisman.skill.name.as_str())
            .and_modify(|current| {
                if talisman.skill.level > current.skill.level {
                    *current = talisman;
                }
            })
            .or_insert(talisman);
    }

    tracing::debug!(
        "candidate filter kept {} of {} armors and {} of {} talismans",
        relevant_armors.len(),
        armors.len(),
        best.len(),
        talismans.len()
    );

    Candidates {
        armors: relevant_armors,
        talismans: best.into_values().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ArmorPiece;
    use crate::source::augment_scores;
    use crate::types::ArmorType;

    fn armors() -> Vec<ArmorPiece> {
        vec![
            ArmorPiece::new("Focus Helm", ArmorType::Head, 10).with_skill("Focus", 1),
            ArmorPiece::new("Tank Helm", ArmorType::Head, 90),
            ArmorPiece::new("Guard Mail", ArmorType::Chest, 20)
                .with_skill("Attack Boost", 1)
                .with_skill("Guard", 2),
            ArmorPiece::new("Plain Belt", ArmorType::Waist, 5).with_skill("Speed", 1),
        ]
    }

    #[test]
    fn test_armor_kept_when_any_skill_matches() {
        let armors = armors();
        let scored = augment_scores(&armors);
        let candidates = filter_candidates(&["Guard", "Focus"], &scored, &[], "Defense Boost");

        let names: Vec<&str> = candidates.armors.iter().map(|a| a.piece.name.as_str()).collect();
        assert_eq!(names, vec!["Focus Helm", "Guard Mail"]);
    }

    #[test]
    fn test_high_defense_without_skill_is_dropped() {
        let armors = armors();
        let scored = augment_scores(&armors);
        let candidates = filter_candidates(&["Focus"], &scored, &[], "Defense Boost");
        assert!(candidates.armors.iter().all(|a| a.piece.name != "Tank Helm"));
    }

    #[test]
    fn test_one_talisman_per_skill_highest_level() {
        let talismans = vec![
            Talisman::new("Focus I", "Focus", 1),
            Talisman::new("Focus III", "Focus", 3),
            Talisman::new("Focus II", "Focus", 2),
            Talisman::new("Speed II", "Speed", 2),
            Talisman::new("Defense I", "Defense Boost", 1),
            Talisman::new("Defense II", "Defense Boost", 2),
        ];
        let candidates = filter_candidates(&["Focus"], &[], &talismans, "Defense Boost");

        let names: Vec<&str> = candidates.talismans.iter().map(|t| t.name.as_str()).collect();
        // ordered by skill name
        assert_eq!(names, vec!["Defense II", "Focus III"]);
    }

    #[test]
    fn test_talisman_tie_keeps_first_in_catalog() {
        let talismans = vec![
            Talisman::new("Guard Charm A", "Guard", 2),
            Talisman::new("Guard Charm B", "Guard", 2),
        ];
        let candidates = filter_candidates(&["Guard"], &[], &talismans, "Defense Boost");
        assert_eq!(candidates.talismans.len(), 1);
        assert_eq!(candidates.talismans[0].name, "Guard Charm A");
    }

    #[test]
    fn test_defense_talisman_always_eligible() {
        let talismans = vec![Talisman::new("Defense I", "Defense Boost", 1)];
        let candidates = filter_candidates(&["Focus"], &[], &talismans, "Defense Boost");
        assert_eq!(candidates.talismans.len(), 1);
    }
}
