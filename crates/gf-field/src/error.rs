//! Field-specific error types.

use thiserror::Error;

/// Borehole field validation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    /// The field has no boreholes.
    #[error("Borehole field is empty")]
    EmptyField,

    /// Segments per borehole must be at least one.
    #[error("Invalid segment count {count} (expected > 0)")]
    InvalidSegmentCount { count: usize },

    /// A borehole has a non-finite or non-physical dimension.
    #[error("Borehole {index}: {what}")]
    InvalidBorehole { index: usize, what: &'static str },
}

pub type FieldResult<T> = Result<T, FieldError>;
