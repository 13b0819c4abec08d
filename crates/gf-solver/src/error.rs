//! Error types for g-function solving.

use gf_core::GfError;
use gf_field::FieldError;
use gf_response::ResponseError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Problem setup error: {what}")]
    ProblemSetup { what: String },

    #[error("Numeric error: {0}")]
    Core(#[from] GfError),

    #[error("Field error: {0}")]
    Field(#[from] FieldError),

    #[error("Response factor error: {0}")]
    Response(#[from] ResponseError),

    /// The per-step system could not be factorized. Deterministic (degenerate
    /// geometry such as a zero-length segment or coincident segments), so it
    /// is never retried.
    #[error(
        "Singular system at step {step}: zero pivot in column {pivot} (rank deficiency {rank_deficiency})"
    )]
    SingularSystem {
        step: usize,
        pivot: usize,
        rank_deficiency: usize,
    },
}

pub type SolverResult<T> = Result<T, SolverError>;
