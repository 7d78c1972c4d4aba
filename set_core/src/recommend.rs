//! Recommender - run the whole search for a list of requested skills

use crate::candidate::CandidateSet;
use crate::catalog::Catalog;
use crate::config::SearchConfig;
use crate::defense::refine_defense;
use crate::error::RecommendError;
use crate::search::{best_per_slot, filter_candidates, is_within_caps, select_best, SlotPools};
use crate::source::augment_scores;
use crate::types::{ArmorType, PriorityMode};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// The winning loadout, trimmed for display
///
/// Skills and decoration sizes the set does not have are left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub armor: BTreeMap<ArmorType, String>,
    pub talisman: String,
    pub defense: u32,
    pub decoration_score: u32,
    /// Skill name -> level, nonzero only
    pub skills: BTreeMap<String, u32>,
    /// Slot size -> count, nonzero only
    pub decorations: BTreeMap<u8, u32>,
}

impl Recommendation {
    /// Snapshot a completed set
    pub fn from_set(set: &CandidateSet<'_>) -> Self {
        let armor = ArmorType::all()
            .iter()
            .filter_map(|&armor_type| {
                set.piece(armor_type)
                    .map(|name| (armor_type, name.to_string()))
            })
            .collect();

        let skills = set
            .skills()
            .filter(|&(_, level)| level > 0)
            .map(|(name, level)| (name.to_string(), level))
            .collect();

        let decorations = (1..=3u8)
            .map(|size| (size, set.decoration_count(size)))
            .filter(|&(_, count)| count > 0)
            .collect();

        Recommendation {
            armor,
            talisman: set.talisman().unwrap_or_default().to_string(),
            defense: set.defense(),
            decoration_score: set.decoration_score(),
            skills,
            decorations,
        }
    }

    /// Name of the piece worn in a slot
    pub fn piece(&self, armor_type: ArmorType) -> Option<&str> {
        self.armor.get(&armor_type).map(String::as_str)
    }

    pub fn skill_level(&self, skill: &str) -> u32 {
        self.skills.get(skill).copied().unwrap_or(0)
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Armor pieces")?;
        for (armor_type, name) in &self.armor {
            writeln!(f, "  - {}: {}", armor_type, name)?;
        }
        writeln!(f, "  - talisman: {}", self.talisman)?;

        writeln!(f, "Skills")?;
        for (skill, level) in &self.skills {
            writeln!(f, "  - {}: level {}", skill, level)?;
        }

        writeln!(f, "Stats")?;
        writeln!(f, "  - defense: {}", self.defense)?;
        writeln!(f, "  - decoration score: {}", self.decoration_score)?;
        for (size, count) in &self.decorations {
            writeln!(f, "  - size {} decorations: {}", size, count)?;
        }
        Ok(())
    }
}

/// Holds the catalog and settings for repeated searches
#[derive(Debug, Clone)]
pub struct Recommender {
    catalog: Catalog,
    config: SearchConfig,
}

impl Recommender {
    pub fn new(catalog: Catalog, config: SearchConfig) -> Self {
        Recommender { catalog, config }
    }

    /// Recommender with the default search settings
    pub fn with_defaults(catalog: Catalog) -> Self {
        Recommender::new(catalog, SearchConfig::default())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Best loadout for `desired`, in display form
    pub fn recommend<S: AsRef<str>>(
        &self,
        desired: &[S],
        mode: PriorityMode,
    ) -> Result<Recommendation, RecommendError> {
        let best = self.search(desired, mode)?;
        let recommendation = Recommendation::from_set(&best);
        tracing::info!(
            "recommended {} piece set with {} defense, talisman '{}'",
            recommendation.armor.len(),
            recommendation.defense,
            recommendation.talisman
        );
        Ok(recommendation)
    }

    /// Best loadout for `desired` as a raw candidate set
    ///
    /// Skill names are matched exactly. Repeated names only count once, at
    /// their first position.
    pub fn search<S: AsRef<str>>(
        &self,
        desired: &[S],
        mode: PriorityMode,
    ) -> Result<CandidateSet<'_>, RecommendError> {
        if desired.is_empty() {
            tracing::warn!("search rejected: no skills selected");
            return Err(RecommendError::EmptySelection);
        }

        let mut skills: Vec<&str> = Vec::with_capacity(desired.len());
        for skill in desired {
            let skill = skill.as_ref();
            if !skills.contains(&skill) {
                skills.push(skill);
            }
        }

        self.check_caps(&skills)?;

        let scored = augment_scores(self.catalog.armors());
        let candidates = filter_candidates(
            &skills,
            &scored,
            self.catalog.talismans(),
            &self.config.defense_skill,
        );
        let fillers = best_per_slot(&scored, mode);
        let pools = SlotPools::new(&candidates.armors, &fillers, candidates.talismans);

        let count = pools.combination_count();
        tracing::debug!(
            "searching {} combinations for {:?} ({} priority)",
            count,
            skills,
            mode
        );
        if count > self.config.max_combinations {
            tracing::warn!(
                "search rejected: {} combinations exceeds limit of {}",
                count,
                self.config.max_combinations
            );
            return Err(RecommendError::TooManyCombinations {
                count,
                limit: self.config.max_combinations,
            });
        }

        let caps = self.catalog.skill_caps();
        let refine = self.config.refine_defense;
        let bonuses = &self.config.defense_bonuses;
        let valid = pools
            .combinations()
            .filter(|set| is_within_caps(set, caps))
            .map(|mut set| {
                if refine {
                    refine_defense(&mut set, bonuses);
                }
                set
            });

        select_best(valid, &skills, mode).ok_or_else(|| {
            tracing::warn!("search found no combination within the skill caps");
            RecommendError::NoViableCombination
        })
    }

    /// Fail closed on any skill without a cap
    fn check_caps(&self, desired: &[&str]) -> Result<(), RecommendError> {
        self.catalog.check_skill_caps()?;
        if let Some(skill) = desired
            .iter()
            .find(|skill| !self.catalog.skill_caps().contains(skill))
        {
            return Err(RecommendError::UnknownSkillCap {
                skill: skill.to_string(),
                origin: "requested skills".to_string(),
            });
        }
        Ok(())
    }
}
