//! Per-step linear system `A x = b` for the uniform wall temperature
//! condition.
//!
//! Unknowns are `x = [Q_0, .., Q_{n-1}, Tb]`:
//! - rows `i < n`: `sum_j h_dt[j][i][p] * Q_j - Tb = -Tb0[i]` (superposition)
//! - row `n`: `sum_j H_j * Q_j = sum_j H_j` (energy conservation)

use nalgebra::{DMatrix, DVector};
use rayon::prelude::*;

use gf_response::ResponseTensor;

use crate::error::{SolverError, SolverResult};

/// Pivots below this fraction of the largest coefficient count as zero.
const PIVOT_RTOL: f64 = 1e-12;

/// Scratch matrix and right-hand side, allocated once for the whole run.
#[derive(Clone, Debug)]
pub struct LinearSystem {
    a: DMatrix<f64>,
    b: DVector<f64>,
    lengths: Vec<f64>,
    total_length: f64,
}

impl LinearSystem {
    /// System for segments of the given lengths (metres).
    pub fn new(lengths: Vec<f64>) -> Self {
        let size = lengths.len() + 1;
        let total_length = lengths.iter().sum();
        Self {
            a: DMatrix::zeros(size, size),
            b: DVector::zeros(size),
            lengths,
            total_length,
        }
    }

    pub fn n_sources(&self) -> usize {
        self.lengths.len()
    }

    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.a
    }

    pub fn rhs(&self) -> &DVector<f64> {
        &self.b
    }

    /// Rewrite `A` and the energy row of `b` for step `p`.
    pub fn assemble(&mut self, h_dt: &ResponseTensor, p: usize) {
        let n = self.n_sources();
        let size = n + 1;
        debug_assert_eq!(h_dt.n_sources(), n);

        let lengths = &self.lengths;
        // column-major storage: each chunk is one column
        self.a
            .as_mut_slice()
            .par_chunks_mut(size)
            .enumerate()
            .for_each(|(j, col)| {
                if j < n {
                    for (i, a_ij) in col[..n].iter_mut().enumerate() {
                        *a_ij = h_dt.get(j, i, p);
                    }
                    col[n] = lengths[j];
                } else {
                    col[..n].fill(-1.0);
                    col[n] = 0.0;
                }
            });
        self.b[n] = self.total_length;
    }

    /// Move the history-only wall temperatures `tb0` to the right-hand side.
    pub fn set_history(&mut self, tb0: &[f64]) {
        debug_assert_eq!(tb0.len(), self.n_sources());
        for (b_i, t) in self.b.iter_mut().zip(tb0) {
            *b_i = -t;
        }
    }

    /// Factorize (LU, partial pivoting) and solve the assembled system.
    ///
    /// `step` is only used for diagnostics.
    pub fn solve(&self, step: usize) -> SolverResult<DVector<f64>> {
        let scale = self.a.amax();
        let lu = self.a.clone().lu();

        let u_diag = lu.u().diagonal();
        let tol = PIVOT_RTOL * scale;
        let deficient: Vec<usize> = u_diag
            .iter()
            .enumerate()
            .filter(|(_, u)| u.is_nan() || u.abs() <= tol)
            .map(|(k, _)| k)
            .collect();

        if let Some(&pivot) = deficient.first() {
            return Err(self.singular(step, pivot, deficient.len()));
        }

        match lu.solve(&self.b) {
            Some(x) if x.iter().all(|v| v.is_finite()) => Ok(x),
            _ => Err(self.singular(step, self.n_sources(), 1)),
        }
    }

    fn singular(&self, step: usize, pivot: usize, rank_deficiency: usize) -> SolverError {
        tracing::debug!(step, pivot, "singular system matrix:{}", self.a);
        SolverError::SingularSystem {
            step,
            pivot,
            rank_deficiency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_segment_is_two_by_two() {
        let h_dt = ResponseTensor::from_vec(1, 1, vec![0.37]).unwrap();
        let mut system = LinearSystem::new(vec![120.0]);
        system.assemble(&h_dt, 0);
        system.set_history(&[0.0]);

        let a = system.matrix();
        assert_eq!((a.nrows(), a.ncols()), (2, 2));
        assert_eq!(a[(0, 0)], 0.37);
        assert_eq!(a[(0, 1)], -1.0);
        assert_eq!(a[(1, 0)], 120.0);
        assert_eq!(a[(1, 1)], 0.0);
        assert_eq!(system.rhs().as_slice(), &[0.0, 120.0]);

        let x = system.solve(0).unwrap();
        assert!((x[0] - 1.0).abs() < 1e-12);
        assert!((x[1] - 0.37).abs() < 1e-12);
    }

    #[test]
    fn coefficients_are_transposed_responses() {
        // h_dt[j][i]: effect of source j on target i
        let h_dt = ResponseTensor::from_fn(2, 2, |i, j| vec![0.0, (1 + 10 * i + j) as f64]).unwrap();
        let mut system = LinearSystem::new(vec![50.0, 70.0]);
        system.assemble(&h_dt, 1);
        system.set_history(&[0.5, 0.25]);

        let a = system.matrix();
        assert_eq!(a[(0, 1)], h_dt.get(1, 0, 1));
        assert_eq!(a[(1, 0)], h_dt.get(0, 1, 1));
        assert_eq!(a[(2, 0)], 50.0);
        assert_eq!(a[(2, 1)], 70.0);
        assert_eq!(a[(0, 2)], -1.0);
        assert_eq!(a[(1, 2)], -1.0);
        assert_eq!(system.rhs().as_slice(), &[-0.5, -0.25, 120.0]);
    }

    #[test]
    fn solution_conserves_energy() {
        let h_dt = ResponseTensor::from_fn(3, 1, |i, j| {
            vec![if i == j { 0.4 } else { 0.05 * (1 + i + j) as f64 }]
        })
        .unwrap();
        let lengths = vec![40.0, 60.0, 100.0];
        let mut system = LinearSystem::new(lengths.clone());
        system.assemble(&h_dt, 0);
        system.set_history(&[0.1, 0.0, 0.3]);
        let x = system.solve(0).unwrap();

        let weighted: f64 = lengths.iter().zip(x.iter()).map(|(h, q)| h * q).sum();
        assert!((weighted - 200.0).abs() < 1e-9 * 200.0);
        // every superposition row holds with the shared wall temperature
        let residual = system.matrix() * &x - system.rhs();
        assert!(residual.amax() < 1e-9);
    }

    #[test]
    fn zero_length_segment_is_singular() {
        let h_dt = ResponseTensor::from_vec(1, 1, vec![0.37]).unwrap();
        let mut system = LinearSystem::new(vec![0.0]);
        system.assemble(&h_dt, 0);
        system.set_history(&[0.0]);
        let err = system.solve(4).unwrap_err();
        assert!(matches!(
            err,
            SolverError::SingularSystem { step: 4, rank_deficiency: 1, .. }
        ));
    }

    #[test]
    fn reassembly_overwrites_previous_step() {
        let h_dt = ResponseTensor::from_vec(1, 2, vec![0.3, 0.6]).unwrap();
        let mut system = LinearSystem::new(vec![10.0]);
        system.assemble(&h_dt, 0);
        system.set_history(&[0.0]);
        let _ = system.solve(0).unwrap();
        system.assemble(&h_dt, 1);
        system.set_history(&[0.2]);
        assert_eq!(system.matrix()[(0, 0)], 0.6);
        assert_eq!(system.rhs()[0], -0.2);
        let x = system.solve(1).unwrap();
        assert!((x[1] - 0.8).abs() < 1e-12);
    }
}
