//! # ac_core - Artifact Optimizer Input Pipeline
//!
//! This library prepares the input configuration for the external
//! equipment-optimization search of the artifact companion tool.
//!
//! ## Features
//! - Candidate eligibility filtering over the account inventory
//! - Optional projection of primary bonuses to the max upgrade level
//! - Absolute stat targets translated into deltas over hero base stats
//! - Weight normalization against the candidate pool, with an optional
//!   preferred-set boost
//! - JSON API for easy frontend integration

pub mod api;
pub mod error;
pub mod models;
pub mod optimizer;
pub mod prefs;

// Re-export the JSON boundary
pub use api::{optimize_json, preferences_json, OptimizeRequest, OptimizeResponse};

// Re-export the domain model
pub use models::{
    grade_from_stars_str, Account, Artifact, ArtifactBonus, ArtifactSlot, BonusSource, Hero,
    Rank, StatKind, StatVector,
};

// Re-export the pipeline
pub use error::{OptimizeError, Result};
pub use optimizer::{
    EligibilityFilter, OptimizerSettings, TargetTranslator, UpgradeProjector, WeightEntry,
    WeightKey, WeightNormalizer,
};

// Re-export preferences and the store collaborator
pub use prefs::{
    ArtifactFilter, GlobalPreferenceStore, MemoryPreferenceStore, OptimizePreferences,
    PreferenceStore, SlotFlags, StatTargets, StoreError, TargetKind,
};
