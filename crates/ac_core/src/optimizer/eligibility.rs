//! Candidate selection: which artifacts may be assigned to the hero.

use crate::models::account::Account;
use crate::models::artifact::{Artifact, ArtifactSlot};
use crate::models::hero::Hero;
use crate::prefs::{ArtifactFilter, OptimizePreferences};
use tracing::debug;

/// Grade (stars) required before a hero can equip a Ring.
const RING_GRADE_STARS: u8 = 4;
/// Awakening level required before a hero can equip a Cloak.
const CLOAK_AWAKEN_LEVEL: u8 = 5;
/// Awakening level required before a hero can equip a Banner.
const BANNER_AWAKEN_LEVEL: u8 = 6;

/// Selects the artifacts eligible for consideration by the optimizer.
#[derive(Debug)]
pub struct EligibilityFilter;

impl EligibilityFilter {
    /// Value copies of all eligible artifacts, in account inventory order.
    ///
    /// An artifact is excluded when any rule holds:
    /// 1. the filter mode is not [`ArtifactFilter::All`] and the artifact is
    ///    equipped on a different hero;
    /// 2. it is a Ring and the hero is below 4 stars;
    /// 3. it is a Cloak and the hero's awakening level is below 5;
    /// 4. it is a Banner and the hero's awakening level is below 6;
    /// 5. its slot's consider flag is off and it is not equipped on the
    ///    target hero (current equipment is always kept so the user can
    ///    compare against the status quo).
    ///
    /// An empty result is valid; the downstream search deals with it.
    pub fn candidates(
        account: &Account,
        hero: &Hero,
        prefs: &OptimizePreferences,
    ) -> Vec<Artifact> {
        let excluded: Vec<u32> = if prefs.filter == ArtifactFilter::All {
            Vec::new()
        } else {
            account
                .heroes
                .iter()
                .filter(|other| other.id != hero.id)
                .flat_map(|other| other.artifacts.iter().copied())
                .collect()
        };

        let candidates: Vec<Artifact> = account
            .artifacts
            .iter()
            .filter(|artifact| {
                Self::is_eligible(artifact, hero, prefs, &excluded)
            })
            .cloned()
            .collect();

        debug!(
            hero = hero.id,
            total = account.artifacts.len(),
            eligible = candidates.len(),
            "selected candidate artifacts"
        );
        candidates
    }

    fn is_eligible(
        artifact: &Artifact,
        hero: &Hero,
        prefs: &OptimizePreferences,
        excluded: &[u32],
    ) -> bool {
        if excluded.contains(&artifact.id) {
            return false;
        }

        match artifact.slot {
            ArtifactSlot::Ring if hero.grade < RING_GRADE_STARS => return false,
            ArtifactSlot::Cloak if hero.awaken_level < CLOAK_AWAKEN_LEVEL => return false,
            ArtifactSlot::Banner if hero.awaken_level < BANNER_AWAKEN_LEVEL => return false,
            _ => {}
        }

        prefs.slots.consider(artifact.slot) || hero.has_equipped(artifact.id)
    }
}
