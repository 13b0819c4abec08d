//! Segment discretizer.

use rayon::prelude::*;

use crate::borehole::Borehole;

/// Split every borehole into `n_segments` equal-length segments.
///
/// Segment `i` of a borehole has length `H/n` and burial depth `D + i*H/n`;
/// radius and position are inherited. Output is grouped by parent borehole,
/// then ordered by depth, which is the canonical source index used by the
/// response tensor and the solver.
///
/// `n_segments` must be positive (see [`crate::validate_segment_count`]).
pub fn borehole_segments(boreholes: &[Borehole], n_segments: usize) -> Vec<Borehole> {
    let n = n_segments as f64;
    boreholes
        .par_iter()
        .flat_map_iter(|b| {
            let b = *b;
            (0..n_segments).map(move |i| {
                Borehole::new(b.h / n, b.d + b.h * (i as f64 / n), b.r_b, b.x, b.y)
            })
        })
        .collect()
}

/// Segment lengths in metres, in source order.
pub fn segment_lengths(segments: &[Borehole]) -> Vec<f64> {
    segments.iter().map(|s| s.h.value).collect()
}
