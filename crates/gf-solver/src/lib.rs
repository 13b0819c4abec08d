//! Uniform borehole wall temperature g-function solver.
//!
//! Each borehole is split into finite line source segments. Given the
//! segment-to-segment step-response factors, the solver marches through the
//! reporting times; at every step it reconstructs the load history, superposes
//! its effect on every segment, and solves one dense system for the current
//! heat extraction rates and the common wall temperature. The wall
//! temperature sequence is the g-function.

pub mod error;
pub mod gfunction;
pub mod history;
pub mod load_history;
pub mod superposition;
pub mod system;
pub mod time_grid;

pub use error::{SolverError, SolverResult};
pub use gfunction::{
    GFunctionOptions, UniformTemperatureSolution, compute_g_function, uniform_temperature,
};
pub use history::HeatExtraction;
pub use load_history::LoadReconstruction;
pub use superposition::temporal_superposition;
pub use system::LinearSystem;
pub use time_grid::TimeGrid;
