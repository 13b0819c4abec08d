//! Lightweight performance timing utilities.
//!
//! Measures where a g-function run spends its time. Enabled per run (the
//! solver's verbose flag), globally via [`enable_timing`], or with the
//! `GF_TIMING` environment variable. Summaries are emitted through `tracing`.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Instant;

static ENABLED: AtomicBool = AtomicBool::new(false);

/// Enable performance timing globally.
pub fn enable_timing() {
    ENABLED.store(true, Ordering::Relaxed);
}

/// Disable performance timing globally.
pub fn disable_timing() {
    ENABLED.store(false, Ordering::Relaxed);
}

/// Check if timing is enabled.
pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed) || std::env::var("GF_TIMING").is_ok()
}

/// A simple timer that measures elapsed time.
pub struct Timer {
    start: Instant,
    enabled: bool,
}

impl Timer {
    /// Start a timer that records only when `enabled`.
    pub fn start(enabled: bool) -> Self {
        Self {
            start: Instant::now(),
            enabled,
        }
    }

    /// Stop the timer and return elapsed time in seconds.
    /// If timing is disabled, returns None.
    pub fn stop(self) -> Option<f64> {
        if self.enabled {
            Some(self.start.elapsed().as_secs_f64())
        } else {
            None
        }
    }

    /// Stop the timer and add the elapsed time to `acc`.
    pub fn stop_into(self, acc: &AccumulatingTimer) {
        if let Some(elapsed) = self.stop() {
            acc.record(elapsed);
        }
    }
}

/// Accumulating timer for tracking total time across multiple calls.
pub struct AccumulatingTimer {
    total_ns: AtomicU64,
    count: AtomicU64,
}

impl Default for AccumulatingTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl AccumulatingTimer {
    /// Create a new accumulating timer.
    pub const fn new() -> Self {
        Self {
            total_ns: AtomicU64::new(0),
            count: AtomicU64::new(0),
        }
    }

    /// Record a timing measurement.
    pub fn record(&self, duration_s: f64) {
        let nanos = (duration_s * 1e9) as u64;
        self.total_ns.fetch_add(nanos, Ordering::Relaxed);
        self.count.fetch_add(1, Ordering::Relaxed);
    }

    /// Get total time spent (in seconds).
    pub fn total_seconds(&self) -> f64 {
        self.total_ns.load(Ordering::Relaxed) as f64 / 1e9
    }

    /// Get number of calls.
    pub fn count(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }

    /// Get average time per call (in seconds).
    pub fn average_seconds(&self) -> f64 {
        let count = self.count();
        if count > 0 {
            self.total_seconds() / count as f64
        } else {
            0.0
        }
    }

    /// Reset the timer.
    pub fn reset(&self) {
        self.total_ns.store(0, Ordering::Relaxed);
        self.count.store(0, Ordering::Relaxed);
    }
}

/// Per-phase timings of one g-function evaluation.
///
/// Setup phases run once; the remaining phases run once per time step.
#[derive(Default)]
pub struct PhaseTimings {
    pub enabled: bool,
    pub segments: AccumulatingTimer,
    pub time_vectors: AccumulatingTimer,
    pub response_factors: AccumulatingTimer,
    pub resampling: AccumulatingTimer,
    pub fill_a: AccumulatingTimer,
    pub load_reconstruction: AccumulatingTimer,
    pub superposition: AccumulatingTimer,
    pub lu_solve: AccumulatingTimer,
}

impl PhaseTimings {
    /// Timings that record when `verbose` is set or timing is globally enabled.
    pub fn new(verbose: bool) -> Self {
        Self {
            enabled: verbose || is_enabled(),
            ..Self::default()
        }
    }

    /// Start a timer for one phase.
    pub fn start(&self) -> Timer {
        Timer::start(self.enabled)
    }

    /// Seconds spent in the per-step phases.
    pub fn stepping_seconds(&self) -> f64 {
        self.fill_a.total_seconds()
            + self.load_reconstruction.total_seconds()
            + self.superposition.total_seconds()
            + self.lu_solve.total_seconds()
    }

    /// Log a formatted summary; `steps` is the number of solved time steps.
    pub fn log_summary(&self, steps: usize) {
        if !self.enabled {
            return;
        }
        let per_step = |acc: &AccumulatingTimer| {
            if steps > 0 {
                acc.total_seconds() / steps as f64
            } else {
                0.0
            }
        };

        tracing::info!("------ timings report -------");
        for (name, acc) in [
            ("segment discretization", &self.segments),
            ("time vectors", &self.time_vectors),
            ("response factors", &self.response_factors),
            ("response resampling", &self.resampling),
        ] {
            tracing::info!(phase = name, total_s = acc.total_seconds(), "setup");
        }
        for (name, acc) in [
            ("fill A", &self.fill_a),
            ("load history reconstruction", &self.load_reconstruction),
            ("temporal superposition", &self.superposition),
            ("LU solve", &self.lu_solve),
        ] {
            tracing::info!(
                phase = name,
                total_s = acc.total_seconds(),
                per_step_s = per_step(acc),
                "per step"
            );
        }
        tracing::info!(
            steps,
            total_s = self.stepping_seconds(),
            "time marching complete"
        );
    }
}
