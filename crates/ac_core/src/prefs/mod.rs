//! User-adjustable optimizer preferences.
//!
//! One value object covering everything the optimize dialog lets the user
//! tune: the candidate filter mode, upgrade projection, a preferred set,
//! per-stat targets and the per-slot consider flags.

pub mod store;

pub use store::{GlobalPreferenceStore, MemoryPreferenceStore, PreferenceStore, StoreError};

use crate::models::artifact::ArtifactSlot;
use crate::models::stats::StatKind;
use serde::{Deserialize, Serialize};

/// Which artifacts are allowed into the candidate pool.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactFilter {
    /// Every artifact on the account, including ones equipped elsewhere.
    #[default]
    All,
    /// Only artifacts not equipped on another hero.
    Unequipped,
}

/// The three absolute-threshold target sets a user can enter per stat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Minimum,
    Cap,
    Maximum,
}

/// Per-stat user inputs: the raw priority weight and the three optional
/// absolute thresholds. Unset thresholds mean "no constraint".
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct StatTargets {
    #[serde(default)]
    pub weight: f64,
    #[serde(default)]
    pub minimum: Option<f64>,
    #[serde(default)]
    pub cap: Option<f64>,
    #[serde(default)]
    pub maximum: Option<f64>,
}

/// Per-slot "consider this slot" flags.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SlotFlags {
    pub weapon: bool,
    pub helmet: bool,
    pub shield: bool,
    pub gloves: bool,
    pub chest: bool,
    pub boots: bool,
    pub ring: bool,
    pub cloak: bool,
    pub banner: bool,
}

impl SlotFlags {
    pub fn consider(&self, slot: ArtifactSlot) -> bool {
        match slot {
            ArtifactSlot::Weapon => self.weapon,
            ArtifactSlot::Helmet => self.helmet,
            ArtifactSlot::Shield => self.shield,
            ArtifactSlot::Gloves => self.gloves,
            ArtifactSlot::Chest => self.chest,
            ArtifactSlot::Boots => self.boots,
            ArtifactSlot::Ring => self.ring,
            ArtifactSlot::Cloak => self.cloak,
            ArtifactSlot::Banner => self.banner,
        }
    }

    pub fn set(&mut self, slot: ArtifactSlot, value: bool) {
        match slot {
            ArtifactSlot::Weapon => self.weapon = value,
            ArtifactSlot::Helmet => self.helmet = value,
            ArtifactSlot::Shield => self.shield = value,
            ArtifactSlot::Gloves => self.gloves = value,
            ArtifactSlot::Chest => self.chest = value,
            ArtifactSlot::Boots => self.boots = value,
            ArtifactSlot::Ring => self.ring = value,
            ArtifactSlot::Cloak => self.cloak = value,
            ArtifactSlot::Banner => self.banner = value,
        }
    }
}

impl Default for SlotFlags {
    fn default() -> Self {
        Self {
            weapon: true,
            helmet: true,
            shield: true,
            gloves: true,
            chest: true,
            boots: true,
            ring: true,
            cloak: true,
            banner: true,
        }
    }
}

/// Everything the optimize dialog persists between sessions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OptimizePreferences {
    #[serde(default)]
    pub filter: ArtifactFilter,

    /// Project each candidate's primary bonus to the maximum upgrade level.
    #[serde(default)]
    pub project_to_max: bool,

    /// Set name the search should strongly prefer completing, if any.
    #[serde(default)]
    pub preferred_set: Option<String>,

    /// Per-stat targets, indexed by [`StatKind::index`].
    #[serde(default = "default_targets")]
    pub targets: [StatTargets; 8],

    #[serde(default)]
    pub slots: SlotFlags,
}

fn default_targets() -> [StatTargets; 8] {
    let mut targets = [StatTargets::default(); 8];
    // CriticalChance is a bounded percentage; the dialog starts it capped at 100.
    targets[StatKind::CriticalChance.index()].cap = Some(100.0);
    targets
}

impl Default for OptimizePreferences {
    fn default() -> Self {
        Self {
            filter: ArtifactFilter::All,
            project_to_max: false,
            preferred_set: None,
            targets: default_targets(),
            slots: SlotFlags::default(),
        }
    }
}

impl OptimizePreferences {
    pub fn targets(&self, stat: StatKind) -> &StatTargets {
        &self.targets[stat.index()]
    }

    pub fn targets_mut(&mut self, stat: StatKind) -> &mut StatTargets {
        &mut self.targets[stat.index()]
    }

    /// Raw user weight for a stat.
    pub fn weight(&self, stat: StatKind) -> f64 {
        self.targets(stat).weight
    }

    /// Absolute threshold of the given kind for a stat, if the user set one.
    pub fn threshold(&self, stat: StatKind, kind: TargetKind) -> Option<f64> {
        let targets = self.targets(stat);
        match kind {
            TargetKind::Minimum => targets.minimum,
            TargetKind::Cap => targets.cap,
            TargetKind::Maximum => targets.maximum,
        }
    }

    /// Sum of the eight raw stat weights, used by build validation.
    pub fn total_raw_weight(&self) -> f64 {
        StatKind::ALL.iter().map(|&stat| self.weight(stat)).sum()
    }

    /// Preferred set name, treating an empty string as unset.
    pub fn preferred_set(&self) -> Option<&str> {
        self.preferred_set.as_deref().filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_dialog_initial_state() {
        let prefs = OptimizePreferences::default();

        assert_eq!(prefs.filter, ArtifactFilter::All);
        assert!(!prefs.project_to_max);
        assert_eq!(prefs.preferred_set(), None);
        for slot in ArtifactSlot::ALL {
            assert!(prefs.slots.consider(slot));
        }
        assert_eq!(prefs.threshold(StatKind::CriticalChance, TargetKind::Cap), Some(100.0));
        assert_eq!(prefs.threshold(StatKind::Health, TargetKind::Cap), None);
        assert_eq!(prefs.total_raw_weight(), 0.0);
    }

    #[test]
    fn empty_preferred_set_counts_as_unset() {
        let mut prefs = OptimizePreferences::default();
        prefs.preferred_set = Some(String::new());
        assert_eq!(prefs.preferred_set(), None);

        prefs.preferred_set = Some("Speed".to_string());
        assert_eq!(prefs.preferred_set(), Some("Speed"));
    }

    #[test]
    fn slot_flags_round_trip() {
        let mut flags = SlotFlags::default();
        flags.set(ArtifactSlot::Banner, false);

        assert!(!flags.consider(ArtifactSlot::Banner));
        assert!(flags.consider(ArtifactSlot::Ring));
    }

    #[test]
    fn preferences_deserialize_with_missing_fields() {
        let prefs: OptimizePreferences = serde_json::from_str("{}").unwrap();
        assert_eq!(prefs, OptimizePreferences::default());

        let prefs: OptimizePreferences =
            serde_json::from_str(r#"{"filter":"unequipped","project_to_max":true}"#).unwrap();
        assert_eq!(prefs.filter, ArtifactFilter::Unequipped);
        assert!(prefs.project_to_max);
    }
}
