//! Time axes derived from the reporting times.

use gf_core::numeric::ensure_strictly_increasing;

use crate::error::{SolverError, SolverResult};

/// Reporting times plus the zero-anchored axis and step sizes built from them.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeGrid {
    time: Vec<f64>,
    augmented: Vec<f64>,
    dt: Vec<f64>,
}

impl TimeGrid {
    /// `time` must be non-empty, finite, strictly increasing and start above 0.
    pub fn new(time: &[f64]) -> SolverResult<Self> {
        if time.is_empty() {
            return Err(SolverError::ProblemSetup {
                what: "no reporting times".to_string(),
            });
        }
        ensure_strictly_increasing(time, "reporting times")?;
        if time[0] <= 0.0 {
            return Err(SolverError::ProblemSetup {
                what: format!("first reporting time must be positive, got {}", time[0]),
            });
        }

        let mut augmented = Vec::with_capacity(time.len() + 1);
        augmented.push(0.0);
        augmented.extend_from_slice(time);

        let dt = augmented.windows(2).map(|w| w[1] - w[0]).collect();

        Ok(Self {
            time: time.to_vec(),
            augmented,
            dt,
        })
    }

    /// Number of time steps (reporting times).
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn reporting(&self) -> &[f64] {
        &self.time
    }

    /// `[0, time[0], .., time[nt-1]]`, the domain of the response factors.
    pub fn augmented(&self) -> &[f64] {
        &self.augmented
    }

    /// Step sizes: `dt[0] = time[0]`, `dt[p] = time[p] - time[p-1]`.
    pub fn dt(&self) -> &[f64] {
        &self.dt
    }
}
