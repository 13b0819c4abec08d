//! Load history reconstruction.
//!
//! Superposition at step `p` pairs each response increment `dh[k]` with the
//! load applied `k` steps before the current one. On an irregular grid the
//! step boundaries seen backwards from "now" differ from the forward
//! reporting grid, so each segment's cumulative extracted energy is
//! interpolated onto the reversed grid and differentiated back into
//! piecewise-constant rates.

use gf_core::interp::Interp1d;
use rayon::prelude::*;

use crate::error::SolverResult;
use crate::history::HeatExtraction;
use crate::time_grid::TimeGrid;

/// Reconstructed loads `q[i][m]` for the current step, plus the per-step
/// axes they are built from. Buffers are sized once for the whole run and
/// rewritten every step.
#[derive(Clone, Debug)]
pub struct LoadReconstruction {
    n_sources: usize,
    nt: usize,
    step: usize,
    q: Vec<f64>,
    dt_reconstructed: Vec<f64>,
    t_reconstructed: Vec<f64>,
    t: Vec<f64>,
}

impl LoadReconstruction {
    pub fn new(n_sources: usize, nt: usize) -> Self {
        Self {
            n_sources,
            nt,
            step: 0,
            q: vec![0.0; n_sources * nt],
            dt_reconstructed: Vec::with_capacity(nt),
            t_reconstructed: Vec::with_capacity(nt + 1),
            t: Vec::with_capacity(nt + 2),
        }
    }

    /// Step the buffers currently describe.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Reconstructed loads of segment `j`; entries `0..step` are valid, entry
    /// `m` is the rate `m` intervals back along the reversed grid's origin.
    #[inline]
    pub fn segment(&self, j: usize) -> &[f64] {
        &self.q[j * self.nt..j * self.nt + self.step]
    }

    /// Reversed step sizes of the current step.
    pub fn dt_reconstructed(&self) -> &[f64] {
        &self.dt_reconstructed
    }

    /// Rebuild the loads for step `p` from the solved columns `0..p` of `q`.
    pub fn reconstruct(
        &mut self,
        p: usize,
        grid: &TimeGrid,
        history: &HeatExtraction,
    ) -> SolverResult<()> {
        debug_assert!(p < self.nt);
        debug_assert!(history.solved_steps() >= p);
        let dt = grid.dt();
        let time = grid.augmented();

        // step sizes counted backwards from the current step
        self.dt_reconstructed.clear();
        self.dt_reconstructed.extend((0..=p).map(|m| dt[p - m]));

        self.t_reconstructed.clear();
        self.t_reconstructed.push(0.0);
        let mut acc = 0.0;
        for step in &self.dt_reconstructed {
            acc += step;
            self.t_reconstructed.push(acc);
        }

        // forward axis padded by one first-interval past the last sample
        self.t.clear();
        self.t.extend_from_slice(&time[..=p + 1]);
        self.t.push(time[p + 1] + time[1]);

        self.step = p;
        if p == 0 {
            return Ok(());
        }

        let t = &self.t;
        let t_rec = &self.t_reconstructed;
        let dt_rec = &self.dt_reconstructed;
        let nt = self.nt;
        self.q[..self.n_sources * nt]
            .par_chunks_mut(nt)
            .enumerate()
            .try_for_each_init(
                || (Vec::with_capacity(nt + 2), vec![0.0; nt + 1]),
                |(energy, at_rec), (i, q_i)| -> SolverResult<()> {
                    let rates = history.segment(i);

                    energy.clear();
                    energy.push(0.0);
                    let mut cum = 0.0;
                    for m in 1..t.len() {
                        if m <= p {
                            cum += rates[m - 1] * dt[m - 1];
                        }
                        energy.push(cum);
                    }

                    let at_rec = &mut at_rec[..t_rec.len()];
                    Interp1d::new(t, energy)?.eval_into(t_rec, at_rec)?;

                    for m in 0..p {
                        q_i[m] = (at_rec[m + 1] - at_rec[m]) / dt_rec[m];
                    }
                    Ok(())
                },
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(rows: &[&[f64]], nt: usize) -> HeatExtraction {
        let mut q = HeatExtraction::new(rows.len(), nt);
        let solved = rows[0].len();
        for p in 0..solved {
            let col: Vec<f64> = rows.iter().map(|r| r[p]).collect();
            q.push_column(&col);
        }
        q
    }

    #[test]
    fn first_step_has_no_history() {
        let grid = TimeGrid::new(&[1.0, 2.0, 3.0]).unwrap();
        let q = HeatExtraction::new(2, 3);
        let mut rec = LoadReconstruction::new(2, 3);
        rec.reconstruct(0, &grid, &q).unwrap();
        assert_eq!(rec.step(), 0);
        assert!(rec.segment(0).is_empty());
        assert_eq!(rec.dt_reconstructed(), &[1.0]);
    }

    #[test]
    fn uniform_grid_returns_forward_history() {
        let grid = TimeGrid::new(&[10.0, 20.0, 30.0, 40.0]).unwrap();
        let q = history(&[&[1.2, 0.9, 1.05], &[0.8, 1.1, 0.95]], 4);
        let mut rec = LoadReconstruction::new(2, 4);
        rec.reconstruct(3, &grid, &q).unwrap();
        for (j, expected) in [[1.2, 0.9, 1.05], [0.8, 1.1, 0.95]].iter().enumerate() {
            let got = rec.segment(j);
            assert_eq!(got.len(), 3);
            for (g, e) in got.iter().zip(expected.iter()) {
                assert!((g - e).abs() < 1e-12, "segment {j}: {g} vs {e}");
            }
        }
    }

    #[test]
    fn constant_load_on_growing_steps() {
        // steps 1, 1, 2: reversed grid 2, 1, 1
        let grid = TimeGrid::new(&[1.0, 2.0, 4.0]).unwrap();
        let q = history(&[&[1.0, 1.0]], 3);
        let mut rec = LoadReconstruction::new(1, 3);
        rec.reconstruct(2, &grid, &q).unwrap();
        assert_eq!(rec.dt_reconstructed(), &[2.0, 1.0, 1.0]);
        // energy is t up to t = 2, flat after: window [0, 2] is full,
        // window [2, 3] extracts nothing
        let got = rec.segment(0);
        assert!((got[0] - 1.0).abs() < 1e-12);
        assert!(got[1].abs() < 1e-12);
    }

    #[test]
    fn buffers_are_reused_across_steps() {
        let grid = TimeGrid::new(&[1.0, 2.0, 3.0]).unwrap();
        let mut q = HeatExtraction::new(1, 3);
        let mut rec = LoadReconstruction::new(1, 3);
        for (p, rate) in [2.0, 3.0].iter().enumerate() {
            rec.reconstruct(p, &grid, &q).unwrap();
            q.push_column(&[*rate]);
        }
        rec.reconstruct(2, &grid, &q).unwrap();
        assert_eq!(rec.step(), 2);
        assert!((rec.segment(0)[0] - 2.0).abs() < 1e-12);
        assert!((rec.segment(0)[1] - 3.0).abs() < 1e-12);
    }
}
