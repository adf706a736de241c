//! Stat kinds and the sparse per-stat value container.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The eight hero stats an artifact bonus or optimizer target can refer to.
///
/// The declaration order is fixed: rank tables and per-stat preference
/// storage are indexed by [`StatKind::index`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum StatKind {
    Health,
    Attack,
    Defense,
    Speed,
    CriticalChance,
    CriticalDamage,
    Resistance,
    Accuracy,
}

impl StatKind {
    /// All stat kinds in declaration order.
    pub const ALL: [StatKind; 8] = [
        StatKind::Health,
        StatKind::Attack,
        StatKind::Defense,
        StatKind::Speed,
        StatKind::CriticalChance,
        StatKind::CriticalDamage,
        StatKind::Resistance,
        StatKind::Accuracy,
    ];

    /// Stable index into per-stat lookup tables.
    pub fn index(self) -> usize {
        match self {
            StatKind::Health => 0,
            StatKind::Attack => 1,
            StatKind::Defense => 2,
            StatKind::Speed => 3,
            StatKind::CriticalChance => 4,
            StatKind::CriticalDamage => 5,
            StatKind::Resistance => 6,
            StatKind::Accuracy => 7,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            StatKind::Health => "Health",
            StatKind::Attack => "Attack",
            StatKind::Defense => "Defense",
            StatKind::Speed => "Speed",
            StatKind::CriticalChance => "CriticalChance",
            StatKind::CriticalDamage => "CriticalDamage",
            StatKind::Resistance => "Resistance",
            StatKind::Accuracy => "Accuracy",
        }
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StatKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| format!("unknown stat kind: {}", s))
    }
}

/// Sparse association from [`StatKind`] to a numeric value.
///
/// Absent entries are meaningful and distinct from zero: a target delta of
/// zero is a real constraint, a missing entry means "no constraint".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StatVector {
    values: [Option<f64>; 8],
}

impl StatVector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, stat: StatKind, value: f64) {
        self.values[stat.index()] = Some(value);
    }

    pub fn remove(&mut self, stat: StatKind) {
        self.values[stat.index()] = None;
    }

    pub fn get(&self, stat: StatKind) -> Option<f64> {
        self.values[stat.index()]
    }

    pub fn contains(&self, stat: StatKind) -> bool {
        self.values[stat.index()].is_some()
    }

    /// Number of present entries.
    pub fn len(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.values.iter().all(|v| v.is_none())
    }

    /// Iterate present entries in stat declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (StatKind, f64)> + '_ {
        StatKind::ALL
            .iter()
            .filter_map(move |&stat| self.get(stat).map(|value| (stat, value)))
    }
}

impl FromIterator<(StatKind, f64)> for StatVector {
    fn from_iter<I: IntoIterator<Item = (StatKind, f64)>>(iter: I) -> Self {
        let mut vector = StatVector::new();
        for (stat, value) in iter {
            vector.insert(stat, value);
        }
        vector
    }
}
