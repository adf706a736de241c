//! Translation of absolute stat targets into deltas over hero base stats.

use crate::models::hero::Hero;
use crate::models::stats::{StatKind, StatVector};

/// Converts user-entered absolute thresholds into per-stat deltas.
#[derive(Debug)]
pub struct TargetTranslator;

impl TargetTranslator {
    /// Delta vector for one threshold set.
    ///
    /// A stat gets an entry only when a threshold is set and at least the
    /// hero's base value; the entry is `threshold - base` (zero when equal).
    /// Stats below base or without a threshold are absent, not zero. The
    /// same translation serves minimum, cap and maximum targets.
    pub fn deltas<F>(hero: &Hero, threshold: F) -> StatVector
    where
        F: Fn(StatKind) -> Option<f64>,
    {
        StatKind::ALL
            .iter()
            .filter_map(|&stat| {
                let target = threshold(stat)?;
                let base = hero.stat(stat);
                (target >= base).then_some((stat, target - base))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero_with_speed(speed: f64) -> Hero {
        Hero {
            id: 1,
            name: "Test".to_string(),
            grade: 6,
            awaken_level: 6,
            health: 10000.0,
            attack: 1000.0,
            defense: 800.0,
            speed,
            critical_chance: 0.5,
            critical_damage: 0.6,
            resistance: 30.0,
            accuracy: 40.0,
            artifacts: vec![],
        }
    }

    #[test]
    fn threshold_below_base_is_absent() {
        let hero = hero_with_speed(100.0);
        let deltas = TargetTranslator::deltas(&hero, |stat| {
            (stat == StatKind::Speed).then_some(80.0)
        });

        assert!(deltas.is_empty());
    }

    #[test]
    fn threshold_above_base_becomes_delta() {
        let hero = hero_with_speed(100.0);
        let deltas = TargetTranslator::deltas(&hero, |stat| {
            (stat == StatKind::Speed).then_some(150.0)
        });

        assert_eq!(deltas.get(StatKind::Speed), Some(50.0));
        assert_eq!(deltas.len(), 1);
    }

    #[test]
    fn threshold_equal_to_base_is_a_zero_delta() {
        let hero = hero_with_speed(100.0);
        let deltas = TargetTranslator::deltas(&hero, |stat| {
            (stat == StatKind::Speed).then_some(100.0)
        });

        // A present zero is a real constraint, distinct from absence.
        assert_eq!(deltas.get(StatKind::Speed), Some(0.0));
    }

    #[test]
    fn unset_thresholds_produce_no_entries() {
        let hero = hero_with_speed(100.0);
        let deltas = TargetTranslator::deltas(&hero, |_| None);

        assert!(deltas.is_empty());
    }

    #[test]
    fn multiple_stats_translate_independently() {
        let hero = hero_with_speed(100.0);
        let deltas = TargetTranslator::deltas(&hero, |stat| match stat {
            StatKind::Health => Some(16000.0),
            StatKind::Attack => Some(500.0), // below base, dropped
            StatKind::Speed => Some(130.0),
            _ => None,
        });

        assert_eq!(deltas.get(StatKind::Health), Some(6000.0));
        assert_eq!(deltas.get(StatKind::Attack), None);
        assert_eq!(deltas.get(StatKind::Speed), Some(30.0));
    }
}
