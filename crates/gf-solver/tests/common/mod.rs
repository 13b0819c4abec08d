//! Shared fixtures: a smooth closed-form stand-in for finite line source
//! response factors.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use gf_core::units::{Diffusivity, to_m2ps};
use gf_core::m;
use gf_field::Borehole;
use gf_response::{ResponseProvider, ResponseResult, ResponseTensor};

/// `h_ij(t) = H_j / (H_i + H_j) * ln(1 + 4 alpha t / d_ij^2)`, where `d_ij`
/// is the distance between segment midpoints floored at the target radius.
///
/// With similarities enabled, pairs sharing the same geometry key are
/// computed once and reused.
#[derive(Default)]
pub struct LineSourceStub {
    pub evaluations: Mutex<usize>,
}

impl LineSourceStub {
    fn series(&self, target: &Borehole, source: &Borehole, time: &[f64], alpha: f64) -> Vec<f64> {
        *self.evaluations.lock().unwrap() += 1;
        let horizontal = target.distance(source).value;
        let mid_t = target.d.value + 0.5 * target.h.value;
        let mid_s = source.d.value + 0.5 * source.h.value;
        let d2 = horizontal.powi(2) + (mid_t - mid_s).powi(2);
        let d2 = d2.max(target.r_b.value.powi(2));
        let weight = source.h.value / (target.h.value + source.h.value);

        let mut series = Vec::with_capacity(time.len() + 1);
        series.push(0.0);
        series.extend(time.iter().map(|t| weight * (1.0 + 4.0 * alpha * t / d2).ln()));
        series
    }

    fn key(target: &Borehole, source: &Borehole) -> [u64; 5] {
        let horizontal = target.distance(source).value;
        [
            horizontal.to_bits(),
            target.h.value.to_bits(),
            source.h.value.to_bits(),
            (target.d.value - source.d.value).to_bits(),
            target.r_b.value.to_bits(),
        ]
    }
}

impl ResponseProvider for LineSourceStub {
    fn thermal_response_factors(
        &self,
        segments: &[Borehole],
        time: &[f64],
        alpha: Diffusivity,
        use_similarities: bool,
    ) -> ResponseResult<ResponseTensor> {
        let alpha = to_m2ps(alpha);
        let mut cache: HashMap<[u64; 5], Vec<f64>> = HashMap::new();
        ResponseTensor::from_fn(segments.len(), time.len() + 1, |i, j| {
            let (target, source) = (&segments[i], &segments[j]);
            if use_similarities {
                cache
                    .entry(Self::key(target, source))
                    .or_insert_with(|| self.series(target, source, time, alpha))
                    .clone()
            } else {
                self.series(target, source, time, alpha)
            }
        })
    }
}

/// Provider returning a tensor that breaks the `h[.][.][0] = 0` anchor.
pub struct UnanchoredStub;

impl ResponseProvider for UnanchoredStub {
    fn thermal_response_factors(
        &self,
        segments: &[Borehole],
        time: &[f64],
        _alpha: Diffusivity,
        _use_similarities: bool,
    ) -> ResponseResult<ResponseTensor> {
        ResponseTensor::from_fn(segments.len(), time.len() + 1, |_, _| {
            vec![0.01; time.len() + 1]
        })
    }
}

pub fn borehole(x: f64, y: f64) -> Borehole {
    Borehole::new(m(100.0), m(2.0), m(0.075), m(x), m(y))
}

/// Rectangular field with the given spacing.
pub fn rectangle(nx: usize, ny: usize, spacing: f64) -> Vec<Borehole> {
    (0..nx)
        .flat_map(|i| (0..ny).map(move |j| borehole(i as f64 * spacing, j as f64 * spacing)))
        .collect()
}

/// Geometrically growing reporting times starting at one hour.
pub fn geometric_times(n: usize, ratio: f64) -> Vec<f64> {
    (0..n).map(|k| 3600.0 * ratio.powi(k as i32)).collect()
}
