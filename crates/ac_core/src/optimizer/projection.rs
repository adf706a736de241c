//! Primary-bonus projection to the maximum upgrade level.
//!
//! The rank tables are externally fixed game-balance constants and must not
//! be replaced by formulas. Percentage bonuses on accessory slots and
//! CriticalDamage percentage bonuses have no known ceiling below rank 3, so
//! those ranks keep the original value.

use crate::models::artifact::{ArtifactBonus, ArtifactSlot, Rank};
use crate::models::stats::StatKind;

/// Max flat Health bonus by rank.
const MAX_FLAT_HEALTH: [f64; 7] = [0.0, 1340.0, 1820.0, 2300.0, 2840.0, 3480.0, 4080.0];
/// Max flat Accuracy/Resistance bonus by rank.
const MAX_FLAT_ACCURACY_RESISTANCE: [f64; 7] = [0.0, 26.0, 38.0, 49.0, 64.0, 78.0, 96.0];
/// Max flat bonus for the remaining stats by rank.
const MAX_FLAT_OTHER: [f64; 7] = [0.0, 90.0, 120.0, 155.0, 190.0, 225.0, 265.0];
/// Max percentage bonus on accessory slots, ranks 3..=6 only; the ceiling
/// for ranks 1 and 2 is unknown.
const MAX_PERCENT_ACCESSORY: [f64; 4] = [0.20, 0.25, 0.33, 0.40];
/// Max CriticalDamage percentage bonus on regular slots, ranks 3..=6 only.
const MAX_PERCENT_CRIT_DAMAGE: [f64; 4] = [0.40, 0.49, 0.65, 0.80];

/// Computes an artifact's primary bonus at the canonical max upgrade level.
#[derive(Debug)]
pub struct UpgradeProjector;

impl UpgradeProjector {
    /// Projected copy of `bonus` for an artifact of the given slot and rank.
    ///
    /// Pure: the input bonus is never modified, identical inputs yield
    /// identical outputs. Out-of-range ranks use table row 0, i.e. a
    /// projected value of 0.
    pub fn project(bonus: &ArtifactBonus, slot: ArtifactSlot, rank: Rank) -> ArtifactBonus {
        let value = if bonus.is_absolute {
            Self::projected_flat(bonus.kind, rank)
        } else {
            Self::projected_percentage(bonus, slot, rank)
        };
        ArtifactBonus { kind: bonus.kind, value, is_absolute: bonus.is_absolute }
    }

    fn projected_flat(kind: StatKind, rank: Rank) -> f64 {
        let index = rank.table_index();
        match kind {
            StatKind::Speed => {
                if index == 0 {
                    0.0
                } else {
                    15.0 + 5.0 * index as f64
                }
            }
            StatKind::Health => MAX_FLAT_HEALTH[index],
            StatKind::Accuracy | StatKind::Resistance => MAX_FLAT_ACCURACY_RESISTANCE[index],
            _ => MAX_FLAT_OTHER[index],
        }
    }

    fn projected_percentage(bonus: &ArtifactBonus, slot: ArtifactSlot, rank: Rank) -> f64 {
        let index = rank.table_index();
        if slot.is_accessory() {
            Self::percentage_with_unknown_low_ranks(&MAX_PERCENT_ACCESSORY, bonus.value, index)
        } else if bonus.kind == StatKind::CriticalDamage {
            Self::percentage_with_unknown_low_ranks(&MAX_PERCENT_CRIT_DAMAGE, bonus.value, index)
        } else {
            0.1 * index as f64
        }
    }

    /// Ranks 1 and 2 have no published ceiling for these tables; the bonus
    /// stays at its original value there.
    fn percentage_with_unknown_low_ranks(table: &[f64; 4], original: f64, index: usize) -> f64 {
        match index {
            0 => 0.0,
            1 | 2 => original,
            _ => table[index - 3],
        }
    }
}
