use thiserror::Error;

/// Returned when a string is not one of the single-letter flag codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown flag code '{code}' (expected one of A, S, B, C, E, P)")]
pub struct ParseFlagError {
    pub code: String,
}
