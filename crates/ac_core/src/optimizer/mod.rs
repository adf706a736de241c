//! The optimizer input pipeline.
//!
//! Candidate eligibility filtering, optional max-upgrade projection, target
//! delta translation and weight normalization, assembled into the
//! [`OptimizerSettings`] snapshot handed to the external search.

pub mod builder;
pub mod eligibility;
pub mod projection;
pub mod targets;
pub mod weights;

pub use builder::OptimizerSettings;
pub use eligibility::EligibilityFilter;
pub use projection::UpgradeProjector;
pub use targets::TargetTranslator;
pub use weights::{WeightEntry, WeightKey, WeightNormalizer};
