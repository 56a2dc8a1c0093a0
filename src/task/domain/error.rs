//! Error types for task domain validation.

use thiserror::Error;

/// Coarse classification shared by every error the task context produces.
///
/// Transport adapters map each kind onto a client-facing status without
/// inspecting individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A field violated its constraints.
    Validation,
    /// The caller supplied an unusable argument.
    InvalidArgument,
    /// The operation referenced an identifier that does not exist.
    NotFound,
    /// The operation collided with existing state.
    Conflict,
    /// The storage layer failed.
    Storage,
}

/// Field constraint violation raised while constructing domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is empty or whitespace-only.
    #[error("{field} must not be empty")]
    Empty {
        /// Name of the offending field.
        field: &'static str,
    },

    /// A field exceeds its maximum length in characters.
    #[error("{field} must be at most {max} characters, got {actual}")]
    TooLong {
        /// Name of the offending field.
        field: &'static str,
        /// Maximum permitted length.
        max: usize,
        /// Length of the rejected value.
        actual: usize,
    },
}

/// Errors returned by task and task list entities.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// A field failed validation at construction or mutation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A mutation received an argument it cannot apply.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl TaskDomainError {
    /// Returns the error classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
        }
    }
}
