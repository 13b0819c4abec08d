//! Heat extraction rate history `Q[i][p]`.

/// Extraction rates per segment and step, row-major `[segment][step]`.
///
/// Columns are written once, in step order, by the time-marching driver.
#[derive(Clone, Debug, PartialEq)]
pub struct HeatExtraction {
    n_sources: usize,
    nt: usize,
    data: Vec<f64>,
    solved: usize,
}

impl HeatExtraction {
    pub fn new(n_sources: usize, nt: usize) -> Self {
        Self {
            n_sources,
            nt,
            data: vec![0.0; n_sources * nt],
            solved: 0,
        }
    }

    pub fn n_sources(&self) -> usize {
        self.n_sources
    }

    pub fn nt(&self) -> usize {
        self.nt
    }

    /// Number of columns written so far.
    pub fn solved_steps(&self) -> usize {
        self.solved
    }

    #[inline]
    pub fn get(&self, i: usize, p: usize) -> f64 {
        self.data[i * self.nt + p]
    }

    /// History of segment `i` over all steps (unsolved steps read 0).
    #[inline]
    pub fn segment(&self, i: usize) -> &[f64] {
        &self.data[i * self.nt..(i + 1) * self.nt]
    }

    /// Rates of every segment at step `p`.
    pub fn column(&self, p: usize) -> Vec<f64> {
        (0..self.n_sources).map(|i| self.get(i, p)).collect()
    }

    /// Store the solved rates of the next step.
    ///
    /// # Panics
    /// If `rates` has the wrong length or every step is already written.
    pub fn push_column(&mut self, rates: &[f64]) {
        assert_eq!(rates.len(), self.n_sources, "one rate per segment");
        assert!(self.solved < self.nt, "all steps already solved");
        let p = self.solved;
        for (i, q) in rates.iter().enumerate() {
            self.data[i * self.nt + p] = *q;
        }
        self.solved += 1;
    }
}
