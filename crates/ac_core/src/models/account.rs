//! Account container and the bonus-lookup capability trait.

use crate::models::artifact::Artifact;
use crate::models::hero::Hero;
use crate::models::stats::StatKind;
use serde::{Deserialize, Serialize};

/// A player's account: the full hero roster and artifact inventory.
///
/// An artifact is equipped on at most one hero; heroes reference artifacts
/// by id and the account keeps ownership of the artifact objects.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub heroes: Vec<Hero>,
    pub artifacts: Vec<Artifact>,
}

impl Account {
    pub fn hero(&self, id: u32) -> Option<&Hero> {
        self.heroes.iter().find(|hero| hero.id == id)
    }

    pub fn artifact(&self, id: u32) -> Option<&Artifact> {
        self.artifacts.iter().find(|artifact| artifact.id == id)
    }
}

/// Narrow lookup capability for "how much does this artifact contribute to
/// this stat, given a reference baseline".
///
/// The weight normalizer consumes this trait instead of the full [`Account`]
/// so it stays decoupled from roster and inventory concerns.
pub trait BonusSource {
    /// The artifact's contribution to `stat`: the raw bonus value when the
    /// bonus is absolute, `value * baseline` when it is a percentage, zero
    /// when the artifact's primary bonus targets a different stat.
    fn bonus_value(&self, artifact: &Artifact, baseline: f64, stat: StatKind) -> f64;
}

impl BonusSource for Account {
    fn bonus_value(&self, artifact: &Artifact, baseline: f64, stat: StatKind) -> f64 {
        let bonus = &artifact.primary_bonus;
        if bonus.kind != stat {
            return 0.0;
        }
        if bonus.is_absolute {
            bonus.value
        } else {
            bonus.value * baseline
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::artifact::{ArtifactBonus, ArtifactSlot, Rank};

    fn boots(id: u32, bonus: ArtifactBonus) -> Artifact {
        Artifact { id, slot: ArtifactSlot::Boots, rank: Rank::new(5), primary_bonus: bonus }
    }

    #[test]
    fn absolute_bonus_ignores_baseline() {
        let account = Account::default();
        let artifact = boots(1, ArtifactBonus::absolute(StatKind::Speed, 25.0));

        assert_eq!(account.bonus_value(&artifact, 98.0, StatKind::Speed), 25.0);
    }

    #[test]
    fn percentage_bonus_scales_with_baseline() {
        let account = Account::default();
        let artifact = boots(1, ArtifactBonus::percentage(StatKind::Health, 0.4));

        assert_eq!(account.bonus_value(&artifact, 15000.0, StatKind::Health), 6000.0);
    }

    #[test]
    fn mismatched_stat_contributes_nothing() {
        let account = Account::default();
        let artifact = boots(1, ArtifactBonus::absolute(StatKind::Speed, 25.0));

        assert_eq!(account.bonus_value(&artifact, 1200.0, StatKind::Attack), 0.0);
    }
}
