//! Error types for response-factor handling.

use gf_core::GfError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResponseError {
    #[error("Numeric error: {0}")]
    Core(#[from] GfError),

    #[error("Response tensor shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: [usize; 3],
        actual: [usize; 3],
    },

    #[error("Response factor h[{i}][{j}][0] = {value} (expected 0 at t = 0)")]
    AnchorViolation { i: usize, j: usize, value: f64 },

    #[error("Tabulated response times do not match reporting times: {what}")]
    TimeMismatch { what: String },
}

pub type ResponseResult<T> = Result<T, ResponseError>;
