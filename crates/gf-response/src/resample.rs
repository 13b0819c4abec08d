//! Resampling of response factors onto the simulation's step grid.

use gf_core::interp::Interp1d;
use rayon::prelude::*;

use crate::error::{ResponseError, ResponseResult};
use crate::tensor::ResponseTensor;

/// Response factors derived from `h` for time marching.
#[derive(Clone, Debug, PartialEq)]
pub struct ResampledResponse {
    /// `h_dt[i][j][p]`: unit-step response after one step of length `dt[p]`.
    pub h_dt: ResponseTensor,
    /// `dh[i][j][k] = h[i][j][k+1] - h[i][j][k]`: response added during
    /// step `k` (so `dh[i][j][0] = h[i][j][1]`).
    pub dh: ResponseTensor,
}

/// Resample `h` (tabulated on `augmented_time`, which starts at 0) at every
/// step size in `dt`, and compute its increments.
///
/// Pure function of its inputs; pairs are processed in parallel.
pub fn resample(
    h: &ResponseTensor,
    augmented_time: &[f64],
    dt: &[f64],
) -> ResponseResult<ResampledResponse> {
    let n = h.n_sources();
    let n_k = h.n_k();
    let nt = dt.len();
    if augmented_time.len() != n_k || n_k != nt + 1 {
        return Err(ResponseError::ShapeMismatch {
            expected: [n, n, nt + 1],
            actual: [n, n, augmented_time.len()],
        });
    }

    let mut h_dt = ResponseTensor::zeros(n, nt);
    let mut dh = ResponseTensor::zeros(n, nt);
    if n == 0 || nt == 0 {
        return Ok(ResampledResponse { h_dt, dh });
    }

    h_dt.as_mut_slice()
        .par_chunks_mut(nt)
        .zip(dh.as_mut_slice().par_chunks_mut(nt))
        .zip(h.as_slice().par_chunks(n_k))
        .try_for_each(|((h_dt_ij, dh_ij), h_ij)| -> ResponseResult<()> {
            for (k, d) in dh_ij.iter_mut().enumerate() {
                *d = h_ij[k + 1] - h_ij[k];
            }
            let mut table = Interp1d::new(augmented_time, h_ij)?;
            table.eval_into(dt, h_dt_ij)?;
            Ok(())
        })?;

    tracing::debug!(n_sources = n, nt, "resampled response factors");
    Ok(ResampledResponse { h_dt, dh })
}
