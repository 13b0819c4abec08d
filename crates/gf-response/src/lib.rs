//! Segment-to-segment thermal response factors.
//!
//! This crate owns the step-response tensor `h[i][j][k]` consumed by the
//! g-function solver: its flat storage, the provider seam through which it is
//! produced, the ingestion checks, and the resampling onto per-step grids.

pub mod error;
pub mod provider;
pub mod resample;
pub mod tensor;

pub use error::{ResponseError, ResponseResult};
pub use provider::{ResponseProvider, TabulatedResponse, verify_response};
pub use resample::{ResampledResponse, resample};
pub use tensor::ResponseTensor;
