//! Assembly of the final optimizer input from account, hero and preferences.

use crate::error::OptimizeError;
use crate::models::account::Account;
use crate::models::artifact::Artifact;
use crate::models::hero::Hero;
use crate::models::stats::StatVector;
use crate::optimizer::eligibility::EligibilityFilter;
use crate::optimizer::projection::UpgradeProjector;
use crate::optimizer::targets::TargetTranslator;
use crate::optimizer::weights::{WeightEntry, WeightNormalizer};
use crate::prefs::{OptimizePreferences, PreferenceStore, TargetKind};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Immutable input snapshot handed to the external search.
///
/// Candidates are value copies: projecting or otherwise mutating them never
/// touches the artifacts stored on the account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OptimizerSettings {
    pub account: Account,
    pub hero: Hero,
    pub candidates: Vec<Artifact>,
    pub weights: Vec<WeightEntry>,
    pub minimum: StatVector,
    pub cap: StatVector,
    pub maximum: StatVector,
}

impl OptimizerSettings {
    /// Run the full pipeline: validate weights, select candidates, project
    /// bonuses when requested, translate targets, normalize weights and
    /// persist the preference snapshot.
    ///
    /// The store write is fire-and-forget: a failure is logged and does not
    /// fail the build. The only build failure is
    /// [`OptimizeError::NoWeightSelected`], raised before any other work
    /// when every raw stat weight is zero.
    pub fn build(
        account: &Account,
        hero: &Hero,
        prefs: &OptimizePreferences,
        store: &dyn PreferenceStore,
    ) -> Result<Self, OptimizeError> {
        if prefs.total_raw_weight() == 0.0 {
            return Err(OptimizeError::NoWeightSelected);
        }

        let mut candidates = EligibilityFilter::candidates(account, hero, prefs);
        if prefs.project_to_max {
            for candidate in &mut candidates {
                candidate.primary_bonus = UpgradeProjector::project(
                    &candidate.primary_bonus,
                    candidate.slot,
                    candidate.rank,
                );
            }
        }

        let weights = WeightNormalizer::weights(&candidates, hero, prefs, account);
        let settings = Self {
            account: account.clone(),
            hero: hero.clone(),
            minimum: TargetTranslator::deltas(hero, |stat| {
                prefs.threshold(stat, TargetKind::Minimum)
            }),
            cap: TargetTranslator::deltas(hero, |stat| prefs.threshold(stat, TargetKind::Cap)),
            maximum: TargetTranslator::deltas(hero, |stat| {
                prefs.threshold(stat, TargetKind::Maximum)
            }),
            candidates,
            weights,
        };

        if let Err(err) = store.replace(prefs.clone()) {
            warn!(%err, "failed to persist preference snapshot");
        }

        debug!(
            hero = settings.hero.id,
            candidates = settings.candidates.len(),
            weights = settings.weights.len(),
            "built optimizer settings"
        );
        Ok(settings)
    }
}
