use thiserror::Error;

/// Errors raised while validating environment configuration.
///
/// All of these are fatal at construction time: an agent is never built on
/// top of an invalid physical configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The altitude ceiling is zero or negative; without it the
    /// out-of-bounds check is meaningless.
    #[error("altitude limit must be positive")]
    MissingAltitudeLimit,

    /// A numeric parameter that must be strictly positive was not.
    #[error("configuration field `{0}` must be positive")]
    NonPositive(&'static str),

    /// The checkpoint registry contains the same id twice.
    #[error("duplicate checkpoint id `{0}` in scene layout")]
    DuplicateCheckpoint(String),
}
