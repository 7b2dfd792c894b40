use std::fmt;

/// Errors returned while rendering a condition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A pattern predicate received an operand that is not textual.
    #[error("column not specified")]
    ColumnNotSpecified,
    #[error("raw sql has {placeholders} placeholders but {values} values were given")]
    PlaceholderMismatch { placeholders: usize, values: usize },
    /// The buffer refused a write.
    #[error("failed to write sql: {0}")]
    Format(#[from] fmt::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
