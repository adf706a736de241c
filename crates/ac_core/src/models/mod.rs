//! Domain data model: stats, artifacts, heroes and the account container.

pub mod account;
pub mod artifact;
pub mod hero;
pub mod stats;

pub use account::{Account, BonusSource};
pub use artifact::{Artifact, ArtifactBonus, ArtifactSlot, Rank};
pub use hero::{grade_from_stars_str, Hero};
pub use stats::{StatKind, StatVector};
