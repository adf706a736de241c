//! Stat weight normalization over the candidate pool.

use crate::models::account::BonusSource;
use crate::models::artifact::Artifact;
use crate::models::hero::Hero;
use crate::models::stats::StatKind;
use crate::prefs::OptimizePreferences;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Multiplier applied to the summed raw weights for the preferred-set entry.
/// Large enough that the search all but always completes the set when it is
/// physically possible, while staying a soft constraint.
const PREFERRED_SET_FACTOR: f64 = 18.0;

/// Key of a weight entry handed to the search: either one of the eight
/// stats, or a set name for the preferred-set boost. A set named after a
/// stat ("Speed") stays distinct from the stat entry of the same name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum WeightKey {
    Stat(StatKind),
    Set(String),
}

/// One weighted term of the search objective.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeightEntry {
    pub key: WeightKey,
    pub value: f64,
}

impl WeightEntry {
    pub fn stat(kind: StatKind, value: f64) -> Self {
        Self { key: WeightKey::Stat(kind), value }
    }

    pub fn set(name: impl Into<String>, value: f64) -> Self {
        Self { key: WeightKey::Set(name.into()), value }
    }
}

/// Scales raw user weights by the best bonus any candidate offers per stat,
/// making weights comparable across stats of very different magnitudes.
#[derive(Debug)]
pub struct WeightNormalizer;

impl WeightNormalizer {
    /// The weight vector for the final candidate list.
    ///
    /// Per stat: the maximum single-candidate contribution is looked up via
    /// `bonuses`; stats whose maximum is zero are skipped outright, so no
    /// division by zero can occur and no dead entries pollute the output.
    /// The emitted weight is `raw_weight / maximum`, skipped when exactly
    /// zero. A preferred set appends one synthetic entry worth the sum of
    /// the emitted raw weights times [`PREFERRED_SET_FACTOR`].
    pub fn weights(
        candidates: &[Artifact],
        hero: &Hero,
        prefs: &OptimizePreferences,
        bonuses: &dyn BonusSource,
    ) -> Vec<WeightEntry> {
        let mut entries = Vec::new();
        let mut total_raw_weight = 0.0;

        for stat in StatKind::ALL {
            let baseline = Self::baseline(hero, stat);
            let max_bonus = candidates
                .iter()
                .map(|artifact| bonuses.bonus_value(artifact, baseline, stat))
                .fold(0.0, f64::max);
            if max_bonus == 0.0 {
                continue;
            }

            let raw_weight = prefs.weight(stat);
            let weight = raw_weight / max_bonus;
            if weight == 0.0 {
                continue;
            }

            total_raw_weight += raw_weight;
            entries.push(WeightEntry::stat(stat, weight));
        }

        if let Some(set) = prefs.preferred_set() {
            entries.push(WeightEntry::set(set, total_raw_weight * PREFERRED_SET_FACTOR));
        }

        debug!(entries = entries.len(), total_raw_weight, "normalized stat weights");
        entries
    }

    /// Reference value a percentage bonus is scaled against. The crit stats
    /// are bounded percentages, so a fixed 100 replaces the hero's value.
    fn baseline(hero: &Hero, stat: StatKind) -> f64 {
        match stat {
            StatKind::CriticalChance | StatKind::CriticalDamage => 100.0,
            _ => hero.stat(stat),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::account::Account;
    use crate::models::artifact::{ArtifactBonus, ArtifactSlot, Rank};

    fn hero() -> Hero {
        Hero {
            id: 1,
            name: "Test".to_string(),
            grade: 6,
            awaken_level: 6,
            health: 10000.0,
            attack: 1000.0,
            defense: 800.0,
            speed: 100.0,
            critical_chance: 0.5,
            critical_damage: 0.6,
            resistance: 30.0,
            accuracy: 40.0,
            artifacts: vec![],
        }
    }

    fn artifact(id: u32, bonus: ArtifactBonus) -> Artifact {
        Artifact { id, slot: ArtifactSlot::Boots, rank: Rank::new(5), primary_bonus: bonus }
    }

    #[test]
    fn weight_is_raw_weight_over_pool_maximum() {
        let candidates = vec![
            artifact(1, ArtifactBonus::absolute(StatKind::Speed, 20.0)),
            artifact(2, ArtifactBonus::absolute(StatKind::Speed, 40.0)),
        ];
        let mut prefs = OptimizePreferences::default();
        prefs.targets_mut(StatKind::Speed).weight = 10.0;

        let weights =
            WeightNormalizer::weights(&candidates, &hero(), &prefs, &Account::default());

        assert_eq!(weights, vec![WeightEntry::stat(StatKind::Speed, 10.0 / 40.0)]);
    }

    #[test]
    fn stats_without_candidate_bonus_are_omitted() {
        let candidates = vec![artifact(1, ArtifactBonus::absolute(StatKind::Speed, 20.0))];
        let mut prefs = OptimizePreferences::default();
        prefs.targets_mut(StatKind::Health).weight = 10.0;

        let weights =
            WeightNormalizer::weights(&candidates, &hero(), &prefs, &Account::default());

        assert!(weights.is_empty());
    }

    #[test]
    fn zero_raw_weight_stat_is_omitted() {
        let candidates = vec![artifact(1, ArtifactBonus::absolute(StatKind::Speed, 20.0))];
        let prefs = OptimizePreferences::default();

        let weights =
            WeightNormalizer::weights(&candidates, &hero(), &prefs, &Account::default());

        assert!(weights.is_empty());
    }

    #[test]
    fn crit_stats_use_fixed_baseline() {
        let candidates =
            vec![artifact(1, ArtifactBonus::percentage(StatKind::CriticalDamage, 0.8))];
        let mut prefs = OptimizePreferences::default();
        prefs.targets_mut(StatKind::CriticalDamage).weight = 8.0;

        let weights =
            WeightNormalizer::weights(&candidates, &hero(), &prefs, &Account::default());

        // max bonus = 0.8 * 100 = 80, not 0.8 * hero.critical_damage
        assert_eq!(weights, vec![WeightEntry::stat(StatKind::CriticalDamage, 0.1)]);
    }

    #[test]
    fn preferred_set_entry_scales_summed_raw_weights() {
        let candidates = vec![
            artifact(1, ArtifactBonus::absolute(StatKind::Speed, 40.0)),
            artifact(2, ArtifactBonus::absolute(StatKind::Attack, 100.0)),
        ];
        let mut prefs = OptimizePreferences::default();
        prefs.targets_mut(StatKind::Speed).weight = 10.0;
        prefs.targets_mut(StatKind::Attack).weight = 30.0;
        prefs.preferred_set = Some("Speed".to_string());

        let weights =
            WeightNormalizer::weights(&candidates, &hero(), &prefs, &Account::default());

        // total raw weight 40, boosted entry 40 * 18 = 720, keyed by the set
        // name even though a Speed stat entry exists too.
        assert_eq!(weights.last(), Some(&WeightEntry::set("Speed", 720.0)));
        assert!(weights.contains(&WeightEntry::stat(StatKind::Speed, 0.25)));
    }

    #[test]
    fn no_zero_valued_entries_are_emitted_for_stats() {
        let candidates = vec![
            artifact(1, ArtifactBonus::absolute(StatKind::Speed, 40.0)),
            artifact(2, ArtifactBonus::absolute(StatKind::Health, 2000.0)),
        ];
        let mut prefs = OptimizePreferences::default();
        prefs.targets_mut(StatKind::Speed).weight = 10.0;
        // Health weight stays 0.

        let weights =
            WeightNormalizer::weights(&candidates, &hero(), &prefs, &Account::default());

        assert!(weights.iter().all(|entry| entry.value != 0.0));
        assert_eq!(weights.len(), 1);
    }
}
