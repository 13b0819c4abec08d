//! Piecewise-linear interpolation over a strictly increasing axis.
//!
//! Queries outside `[x[0], x[last]]` are rejected with
//! [`GfError::OutOfRange`]; there is no extrapolation. A query that falls
//! within [`NODE_TOLERANCE`] of a sample returns that sample's value exactly.
//!
//! The search keeps a monotonic cursor: every call site issues queries in
//! increasing order, so a batch costs `O(len(x) + len(xp))`. A query below
//! the cursor restarts the scan from the first sample.

use crate::error::{GfError, GfResult};
use crate::numeric::{NODE_TOLERANCE, Real, nearly_equal};

/// Straight-line interpolation between `(x0, y0)` and `(x1, y1)`.
#[inline]
pub fn linterp(xp: Real, x0: Real, y0: Real, x1: Real, y1: Real) -> Real {
    y0 + ((y1 - y0) / (x1 - x0)) * (xp - x0)
}

/// Interpolation table borrowing its axis and values.
#[derive(Clone, Debug)]
pub struct Interp1d<'a> {
    x: &'a [Real],
    y: &'a [Real],
    cursor: usize,
}

impl<'a> Interp1d<'a> {
    /// Build a table. `x` must be non-empty and strictly increasing, and `y`
    /// must have the same length.
    pub fn new(x: &'a [Real], y: &'a [Real]) -> GfResult<Self> {
        if x.is_empty() {
            return Err(GfError::InvalidArg {
                what: "interpolation axis is empty",
            });
        }
        if x.len() != y.len() {
            return Err(GfError::InvalidArg {
                what: "interpolation axis and values differ in length",
            });
        }
        if x.windows(2).any(|w| w[1] <= w[0]) {
            return Err(GfError::InvalidArg {
                what: "interpolation axis is not strictly increasing",
            });
        }
        Ok(Self { x, y, cursor: 0 })
    }

    pub fn lower(&self) -> Real {
        self.x[0]
    }

    pub fn upper(&self) -> Real {
        self.x[self.x.len() - 1]
    }

    /// Evaluate at a single point.
    pub fn at(&mut self, xp: Real) -> GfResult<Real> {
        if xp.is_nan() || xp < self.lower() || xp > self.upper() {
            return Err(GfError::OutOfRange {
                value: xp,
                lower: self.lower(),
                upper: self.upper(),
            });
        }

        if xp < self.x[self.cursor] {
            self.cursor = 0;
        }
        let last = self.x.len() - 1;
        while self.cursor < last && self.x[self.cursor + 1] < xp {
            self.cursor += 1;
        }

        // x[j] <= xp <= x[j+1]
        let j = self.cursor;
        if nearly_equal(xp, self.x[j], NODE_TOLERANCE) {
            return Ok(self.y[j]);
        }
        if j == last {
            return Ok(self.y[j]);
        }
        if nearly_equal(xp, self.x[j + 1], NODE_TOLERANCE) {
            return Ok(self.y[j + 1]);
        }
        Ok(linterp(
            xp,
            self.x[j],
            self.y[j],
            self.x[j + 1],
            self.y[j + 1],
        ))
    }

    /// Evaluate at every point of `xp`, writing into `yp`.
    pub fn eval_into(&mut self, xp: &[Real], yp: &mut [Real]) -> GfResult<()> {
        if xp.len() != yp.len() {
            return Err(GfError::InvalidArg {
                what: "query and output buffers differ in length",
            });
        }
        for (q, out) in xp.iter().zip(yp.iter_mut()) {
            *out = self.at(*q)?;
        }
        Ok(())
    }
}

/// Interpolate `(x, y)` at every point of `xp`.
pub fn interp1d(xp: &[Real], x: &[Real], y: &[Real]) -> GfResult<Vec<Real>> {
    let mut table = Interp1d::new(x, y)?;
    let mut yp = vec![0.0; xp.len()];
    table.eval_into(xp, &mut yp)?;
    Ok(yp)
}

/// Interpolate `(x, y)` at a single point.
pub fn interp1d_scalar(xp: Real, x: &[Real], y: &[Real]) -> GfResult<Real> {
    Interp1d::new(x, y)?.at(xp)
}
