//! Flat three-dimensional tensor indexed `[i][j][k]`.

use crate::error::{ResponseError, ResponseResult};

/// Row-major `[n_sources][n_sources][n_k]` tensor of `f64`.
///
/// The `k` axis is contiguous, so the full series of one source pair is a
/// single slice.
#[derive(Clone, Debug, PartialEq)]
pub struct ResponseTensor {
    n_sources: usize,
    n_k: usize,
    data: Vec<f64>,
}

impl ResponseTensor {
    pub fn zeros(n_sources: usize, n_k: usize) -> Self {
        Self {
            n_sources,
            n_k,
            data: vec![0.0; n_sources * n_sources * n_k],
        }
    }

    /// Wrap a flat buffer laid out as `[i][j][k]`.
    pub fn from_vec(n_sources: usize, n_k: usize, data: Vec<f64>) -> ResponseResult<Self> {
        if data.len() != n_sources * n_sources * n_k {
            return Err(ResponseError::ShapeMismatch {
                expected: [n_sources, n_sources, n_k],
                actual: [n_sources, n_sources, data.len() / (n_sources * n_sources).max(1)],
            });
        }
        Ok(Self {
            n_sources,
            n_k,
            data,
        })
    }

    /// Build from one series per ordered pair, `f(i, j)` returning `h[i][j][..]`.
    pub fn from_fn<F>(n_sources: usize, n_k: usize, mut f: F) -> ResponseResult<Self>
    where
        F: FnMut(usize, usize) -> Vec<f64>,
    {
        let mut data = Vec::with_capacity(n_sources * n_sources * n_k);
        for i in 0..n_sources {
            for j in 0..n_sources {
                let series = f(i, j);
                if series.len() != n_k {
                    return Err(ResponseError::ShapeMismatch {
                        expected: [n_sources, n_sources, n_k],
                        actual: [n_sources, n_sources, series.len()],
                    });
                }
                data.extend_from_slice(&series);
            }
        }
        Self::from_vec(n_sources, n_k, data)
    }

    pub fn n_sources(&self) -> usize {
        self.n_sources
    }

    /// Length of the `k` axis.
    pub fn n_k(&self) -> usize {
        self.n_k
    }

    pub fn shape(&self) -> [usize; 3] {
        [self.n_sources, self.n_sources, self.n_k]
    }

    #[inline]
    fn offset(&self, i: usize, j: usize) -> usize {
        (i * self.n_sources + j) * self.n_k
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize, k: usize) -> f64 {
        self.data[self.offset(i, j) + k]
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize, k: usize, value: f64) {
        let idx = self.offset(i, j) + k;
        self.data[idx] = value;
    }

    /// Series `h[i][j][..]`.
    #[inline]
    pub fn series(&self, i: usize, j: usize) -> &[f64] {
        let start = self.offset(i, j);
        &self.data[start..start + self.n_k]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }
}
