use crate::GfError;

/// Floating point type used throughout system
pub type Real = f64;

/// Absolute plus relative tolerance pair.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

/// Tolerance under which a query coincides with a tabulated sample.
///
/// Shared by every interpolation call site and by the time-axis matching of
/// tabulated response providers.
pub const NODE_TOLERANCE: Tolerances = Tolerances {
    abs: 1e-7,
    rel: 1e-12,
};

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, GfError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(GfError::NonFinite { what, value: v })
    }
}

/// Check that `values` is finite and strictly increasing.
pub fn ensure_strictly_increasing(values: &[Real], what: &'static str) -> Result<(), GfError> {
    for &v in values {
        ensure_finite(v, what)?;
    }
    if values.windows(2).any(|w| w[1] <= w[0]) {
        return Err(GfError::InvalidArg { what });
    }
    Ok(())
}
