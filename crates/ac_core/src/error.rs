//! Error types for the optimizer input pipeline.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OptimizeError {
    /// All eight raw stat weights are zero. The Display text is the
    /// user-facing notification shown by the dialog boundary.
    #[error("You need to specify at least one stat that you care about (use sliders)")]
    NoWeightSelected,

    /// The requested hero id is not on the account (boundary lookups only;
    /// the pipeline itself takes a hero reference).
    #[error("hero {id} is not on this account")]
    UnknownHero { id: u32 },
}

pub type Result<T> = std::result::Result<T, OptimizeError>;
