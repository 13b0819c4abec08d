//! Temporal superposition of past loads.

use gf_response::ResponseTensor;
use rayon::prelude::*;

use crate::load_history::LoadReconstruction;

/// Wall temperature every segment would reach at the end of the current step
/// with zero extraction during that step:
///
/// `tb0[i] = sum_j sum_{k=1..=p} dh[i][j][k] * q[j][p-k]`
///
/// where `p` is the step `loads` was reconstructed for. The `k = 0` term
/// belongs to the unknown current-step rate and is left to the linear system.
pub fn temporal_superposition(tb0: &mut [f64], dh: &ResponseTensor, loads: &LoadReconstruction) {
    let p = loads.step();
    let n = dh.n_sources();
    debug_assert_eq!(tb0.len(), n);

    tb0.par_iter_mut().enumerate().for_each(|(i, t)| {
        let mut acc = 0.0;
        for j in 0..n {
            let dh_ij = dh.series(i, j);
            let q_j = loads.segment(j);
            for k in 1..=p {
                acc += dh_ij[k] * q_j[p - k];
            }
        }
        *t = acc;
    });
}
