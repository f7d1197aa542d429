use thiserror::Error;

/// Errors surfaced by the decision engine.
///
/// Spawn refusals from the platform are not errors; they come back as a
/// zero placed count and the policy falls back or moves on.
#[derive(Error, Debug)]
pub enum StrategyError {
    #[error("no candidate spawn locations were supplied")]
    EmptyCandidateSet,

    #[error("failed to parse game configuration: {0}")]
    Config(#[source] serde_json::Error),

    #[error("game configuration lists {found} unit kinds, expected at least {expected}")]
    MissingUnitInformation { expected: usize, found: usize },

    #[error("failed to parse action frame: {0}")]
    Frame(#[source] serde_json::Error),
}
