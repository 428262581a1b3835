//! Error types for the animation core.
//!
//! Animations never fail once built; every error here is raised while
//! validating configuration at construction time.

/// Rejected animation configuration.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    /// Lock-in probability outside `[0, 1]` (or NaN).
    #[error("lock probability must be within [0, 1], got {0}")]
    LockProbability(f64),

    /// A frame budget of zero would force every roll.
    #[error("frame budget must be at least 1")]
    ZeroFrameBudget,

    #[error("tick divisor must be at least 1")]
    ZeroTickDivisor,

    #[error("scramble alphabet is empty")]
    EmptyAlphabet,

    #[error("stage table is empty")]
    EmptyStageTable,

    #[error("duplicate stage name: {name}")]
    DuplicateStage { name: String },

    /// Stage delays must strictly increase in table order.
    #[error("stage {name} at {delay_ms}ms must come after the previous stage at {previous_ms}ms")]
    StageOrder {
        name: String,
        delay_ms: u32,
        previous_ms: u32,
    },

    /// The printer only understands its own stage names.
    #[error("unknown printer stage: {name}")]
    UnknownStage { name: String },
}
