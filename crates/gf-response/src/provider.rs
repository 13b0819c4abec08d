//! Response-factor provider seam and ingestion checks.

use gf_core::units::Diffusivity;
use gf_core::{NODE_TOLERANCE, nearly_equal};
use gf_field::Borehole;

use crate::error::{ResponseError, ResponseResult};
use crate::tensor::ResponseTensor;

/// Source of segment-to-segment thermal response factors.
///
/// Implementations return `h[i][j][k]`, the temperature change at segment `i`
/// caused by a unit heat-injection step at segment `j`, for `k = 0..=nt`:
/// `k = 0` is `t = 0` (value 0) and `k >= 1` is `time[k-1]`. The similarity
/// flag only lets the provider reuse factors between geometrically
/// equivalent pairs; it must not change the values.
pub trait ResponseProvider: Sync {
    fn thermal_response_factors(
        &self,
        segments: &[Borehole],
        time: &[f64],
        alpha: Diffusivity,
        use_similarities: bool,
    ) -> ResponseResult<ResponseTensor>;
}

/// Check the shape `[n, n, nt+1]` and the `h[i][j][0] = 0` anchor.
pub fn verify_response(h: &ResponseTensor, n_sources: usize, nt: usize) -> ResponseResult<()> {
    let expected = [n_sources, n_sources, nt + 1];
    if h.shape() != expected {
        return Err(ResponseError::ShapeMismatch {
            expected,
            actual: h.shape(),
        });
    }
    for i in 0..n_sources {
        for j in 0..n_sources {
            let series = h.series(i, j);
            if series[0] != 0.0 {
                return Err(ResponseError::AnchorViolation {
                    i,
                    j,
                    value: series[0],
                });
            }
            if let Some(&value) = series.iter().find(|v| !v.is_finite()) {
                return Err(gf_core::GfError::NonFinite {
                    what: "response factor",
                    value,
                }
                .into());
            }
        }
    }
    Ok(())
}

/// Precomputed response factors tabulated on a fixed set of times.
///
/// The table already reflects any similarity reduction applied when it was
/// generated, so the similarity flag is ignored.
#[derive(Clone, Debug)]
pub struct TabulatedResponse {
    time: Vec<f64>,
    h: ResponseTensor,
}

impl TabulatedResponse {
    /// `time` holds the reporting times (without the leading zero); `h` has
    /// `time.len() + 1` samples per pair.
    pub fn new(time: Vec<f64>, h: ResponseTensor) -> ResponseResult<Self> {
        gf_core::numeric::ensure_strictly_increasing(&time, "tabulated response times")?;
        verify_response(&h, h.n_sources(), time.len())?;
        Ok(Self { time, h })
    }

    pub fn time(&self) -> &[f64] {
        &self.time
    }

    pub fn n_sources(&self) -> usize {
        self.h.n_sources()
    }

    pub fn tensor(&self) -> &ResponseTensor {
        &self.h
    }
}

impl ResponseProvider for TabulatedResponse {
    fn thermal_response_factors(
        &self,
        segments: &[Borehole],
        time: &[f64],
        _alpha: Diffusivity,
        _use_similarities: bool,
    ) -> ResponseResult<ResponseTensor> {
        if segments.len() != self.n_sources() {
            return Err(ResponseError::ShapeMismatch {
                expected: [segments.len(), segments.len(), time.len() + 1],
                actual: self.h.shape(),
            });
        }
        if time.len() != self.time.len() {
            return Err(ResponseError::TimeMismatch {
                what: format!(
                    "{} reporting times requested, {} tabulated",
                    time.len(),
                    self.time.len()
                ),
            });
        }
        if let Some((k, (want, have))) = time
            .iter()
            .zip(self.time.iter())
            .enumerate()
            .find(|(_, (a, b))| !nearly_equal(**a, **b, NODE_TOLERANCE))
        {
            return Err(ResponseError::TimeMismatch {
                what: format!("time[{k}] requested {want}, tabulated {have}"),
            });
        }
        tracing::debug!(
            n_sources = self.n_sources(),
            nt = self.time.len(),
            "serving tabulated response factors"
        );
        Ok(self.h.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gf_core::{m, m2ps};

    fn segments(n: usize) -> Vec<Borehole> {
        (0..n)
            .map(|i| Borehole::new(m(50.0), m(2.0), m(0.075), m(6.0 * i as f64), m(0.0)))
            .collect()
    }

    fn table() -> TabulatedResponse {
        let h = ResponseTensor::from_fn(2, 3, |i, j| {
            let scale = if i == j { 1.0 } else { 0.3 };
            vec![0.0, 0.8 * scale, 1.1 * scale]
        })
        .unwrap();
        TabulatedResponse::new(vec![3600.0, 7200.0], h).unwrap()
    }

    #[test]
    fn serves_matching_request() {
        let t = table();
        let h = t
            .thermal_response_factors(&segments(2), &[3600.0, 7200.0], m2ps(1e-6), true)
            .unwrap();
        assert_eq!(&h, t.tensor());
    }

    #[test]
    fn rejects_mismatched_request() {
        let t = table();
        let err = t
            .thermal_response_factors(&segments(3), &[3600.0, 7200.0], m2ps(1e-6), false)
            .unwrap_err();
        assert!(matches!(err, ResponseError::ShapeMismatch { .. }));

        let err = t
            .thermal_response_factors(&segments(2), &[3600.0, 9000.0], m2ps(1e-6), false)
            .unwrap_err();
        assert!(matches!(err, ResponseError::TimeMismatch { .. }));
    }

    #[test]
    fn anchor_is_verified() {
        let mut h = table().tensor().clone();
        h.set(1, 0, 0, 1e-3);
        let err = verify_response(&h, 2, 2).unwrap_err();
        assert_eq!(
            err,
            ResponseError::AnchorViolation {
                i: 1,
                j: 0,
                value: 1e-3
            }
        );
        assert!(TabulatedResponse::new(vec![3600.0, 7200.0], h).is_err());
    }

    #[test]
    fn shape_is_verified() {
        let h = table().tensor().clone();
        assert!(verify_response(&h, 2, 2).is_ok());
        assert!(matches!(
            verify_response(&h, 2, 3),
            Err(ResponseError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn non_finite_factor_rejected() {
        let mut h = table().tensor().clone();
        h.set(0, 1, 2, f64::NAN);
        assert!(matches!(
            verify_response(&h, 2, 2),
            Err(ResponseError::Core(gf_core::GfError::NonFinite { .. }))
        ));
    }
}
