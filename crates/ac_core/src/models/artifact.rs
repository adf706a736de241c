//! Artifacts: equippable items carrying a primary stat bonus.

use crate::models::stats::StatKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Equipment slot an artifact occupies.
///
/// Ring, Cloak and Banner are the accessory slots gated by hero grade and
/// awakening level; they also carry set bonuses only, which matters for
/// upgrade projection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ArtifactSlot {
    Weapon,
    Helmet,
    Shield,
    Gloves,
    Chest,
    Boots,
    Ring,
    Cloak,
    Banner,
}

impl ArtifactSlot {
    /// All slots in display order.
    pub const ALL: [ArtifactSlot; 9] = [
        ArtifactSlot::Weapon,
        ArtifactSlot::Helmet,
        ArtifactSlot::Shield,
        ArtifactSlot::Gloves,
        ArtifactSlot::Chest,
        ArtifactSlot::Boots,
        ArtifactSlot::Ring,
        ArtifactSlot::Cloak,
        ArtifactSlot::Banner,
    ];

    /// Accessory slots whose artifacts grant set bonuses only.
    pub fn is_accessory(self) -> bool {
        matches!(self, ArtifactSlot::Ring | ArtifactSlot::Cloak | ArtifactSlot::Banner)
    }
}

impl fmt::Display for ArtifactSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArtifactSlot::Weapon => "Weapon",
            ArtifactSlot::Helmet => "Helmet",
            ArtifactSlot::Shield => "Shield",
            ArtifactSlot::Gloves => "Gloves",
            ArtifactSlot::Chest => "Chest",
            ArtifactSlot::Boots => "Boots",
            ArtifactSlot::Ring => "Ring",
            ArtifactSlot::Cloak => "Cloak",
            ArtifactSlot::Banner => "Banner",
        };
        f.write_str(name)
    }
}

/// Artifact tier. Canonical range is 1..=6; anything else falls back to the
/// zero row of the rank tables.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Rank(pub u8);

impl Rank {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    pub fn new(rank: u8) -> Self {
        Rank(rank)
    }

    pub fn is_valid(self) -> bool {
        (Rank::MIN..=Rank::MAX).contains(&self.0)
    }

    /// Index into the rank-keyed lookup tables. Out-of-range ranks map to
    /// row 0, which every table defines as the fallback value.
    pub fn table_index(self) -> usize {
        if self.is_valid() {
            self.0 as usize
        } else {
            0
        }
    }
}

/// The main stat modifier an artifact grants.
///
/// `is_absolute` distinguishes flat bonuses (+Speed points) from
/// percentage bonuses (+CriticalDamage %, stored as a fraction).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArtifactBonus {
    pub kind: StatKind,
    pub value: f64,
    pub is_absolute: bool,
}

impl ArtifactBonus {
    pub fn absolute(kind: StatKind, value: f64) -> Self {
        Self { kind, value, is_absolute: true }
    }

    pub fn percentage(kind: StatKind, value: f64) -> Self {
        Self { kind, value, is_absolute: false }
    }
}

/// An equippable item owned by the account.
///
/// `Clone` produces a full value copy including the primary bonus, so a
/// cloned candidate can be re-projected without touching the original.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Artifact {
    pub id: u32,
    pub slot: ArtifactSlot,
    pub rank: Rank,
    pub primary_bonus: ArtifactBonus,
}
