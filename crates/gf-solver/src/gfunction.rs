//! Uniform borehole wall temperature g-function driver.
//!
//! The time loop is a strict recurrence: step `p` reconstructs its load
//! history from the extraction rates solved at steps `0..p`, so steps run in
//! order and only the work inside a step is spread over the rayon pool.

use gf_core::timing::PhaseTimings;
use gf_core::units::Diffusivity;
use gf_field::{Borehole, borehole_segments, segment_lengths, validate_field, validate_segment_count};
use gf_response::{ResponseProvider, ResponseTensor, resample, verify_response};

use crate::error::SolverResult;
use crate::history::HeatExtraction;
use crate::load_history::LoadReconstruction;
use crate::superposition::temporal_superposition;
use crate::system::LinearSystem;
use crate::time_grid::TimeGrid;

/// Options for a g-function evaluation.
#[derive(Clone, Debug)]
pub struct GFunctionOptions {
    /// Segments per borehole
    pub n_segments: usize,
    /// Let the response provider reuse factors of equivalent segment pairs
    pub use_similarities: bool,
    /// Log progress and phase timings at info level
    pub verbose: bool,
}

impl Default for GFunctionOptions {
    fn default() -> Self {
        Self {
            n_segments: 12,
            use_similarities: true,
            verbose: false,
        }
    }
}

/// Result of the time-marching solve.
#[derive(Clone, Debug)]
pub struct UniformTemperatureSolution {
    /// Wall temperature (g-function value) at each reporting time
    pub gfunction: Vec<f64>,
    /// Solved heat extraction rates `Q[segment][step]`
    pub heat_extraction: HeatExtraction,
}

/// g-function of a borehole field at each reporting time.
///
/// `time` is in seconds and must be strictly increasing with `time[0] > 0`.
/// Either a value is returned for every reporting time or the whole
/// evaluation fails.
pub fn compute_g_function<P>(
    provider: &P,
    boreholes: &[Borehole],
    time: &[f64],
    alpha: Diffusivity,
    opts: &GFunctionOptions,
) -> SolverResult<Vec<f64>>
where
    P: ResponseProvider + ?Sized,
{
    validate_field(boreholes)?;
    validate_segment_count(opts.n_segments)?;
    let timings = PhaseTimings::new(opts.verbose);

    let timer = timings.start();
    let grid = TimeGrid::new(time)?;
    timer.stop_into(&timings.time_vectors);

    if opts.verbose {
        tracing::info!("Calculating g-function for uniform borehole wall temperature");
    }

    let timer = timings.start();
    let segments = borehole_segments(boreholes, opts.n_segments);
    timer.stop_into(&timings.segments);

    let timer = timings.start();
    let h = provider.thermal_response_factors(&segments, time, alpha, opts.use_similarities)?;
    timer.stop_into(&timings.response_factors);

    let solution = solve_with_timings(&segments, &grid, &h, opts.verbose, &timings)?;
    timings.log_summary(grid.len());
    Ok(solution.gfunction)
}

/// Time-march the uniform wall temperature problem for already discretized
/// segments, given `h[i][j][k]` on `grid`'s augmented axis.
pub fn uniform_temperature(
    segments: &[Borehole],
    grid: &TimeGrid,
    h: &ResponseTensor,
    verbose: bool,
) -> SolverResult<UniformTemperatureSolution> {
    let timings = PhaseTimings::new(verbose);
    let solution = solve_with_timings(segments, grid, h, verbose, &timings)?;
    timings.log_summary(grid.len());
    Ok(solution)
}

fn solve_with_timings(
    segments: &[Borehole],
    grid: &TimeGrid,
    h: &ResponseTensor,
    verbose: bool,
    timings: &PhaseTimings,
) -> SolverResult<UniformTemperatureSolution> {
    validate_field(segments)?;
    let n_sources = segments.len();
    let nt = grid.len();
    verify_response(h, n_sources, nt)?;

    if verbose {
        tracing::info!(n_sources, nt, "building and solving system of equations");
    } else {
        tracing::debug!(n_sources, nt, "building and solving system of equations");
    }

    let timer = timings.start();
    let response = resample(h, grid.augmented(), grid.dt())?;
    timer.stop_into(&timings.resampling);

    let mut history = HeatExtraction::new(n_sources, nt);
    let mut loads = LoadReconstruction::new(n_sources, nt);
    let mut system = LinearSystem::new(segment_lengths(segments));
    let mut tb0 = vec![0.0; n_sources];
    let mut gfunction = Vec::with_capacity(nt);

    for p in 0..nt {
        let timer = timings.start();
        system.assemble(&response.h_dt, p);
        timer.stop_into(&timings.fill_a);

        let timer = timings.start();
        loads.reconstruct(p, grid, &history)?;
        timer.stop_into(&timings.load_reconstruction);

        let timer = timings.start();
        temporal_superposition(&mut tb0, &response.dh, &loads);
        system.set_history(&tb0);
        timer.stop_into(&timings.superposition);

        let timer = timings.start();
        let x = system.solve(p)?;
        timer.stop_into(&timings.lu_solve);

        history.push_column(&x.as_slice()[..n_sources]);
        let tb = x[n_sources];
        tracing::trace!(step = p, time = grid.reporting()[p], g = tb, "step solved");
        gfunction.push(tb);
    }

    Ok(UniformTemperatureSolution {
        gfunction,
        heat_extraction: history,
    })
}
