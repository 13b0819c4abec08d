//! gf-core: stable foundation for the g-function workspace.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (Real + tolerances + float helpers)
//! - interp (piecewise-linear interpolation over a sorted axis)
//! - timing (phase timers for the solver)
//! - error (shared error types)

pub mod error;
pub mod interp;
pub mod numeric;
pub mod timing;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{GfError, GfResult};
pub use interp::{Interp1d, interp1d, interp1d_scalar, linterp};
pub use numeric::*;
pub use units::*;
