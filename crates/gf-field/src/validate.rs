//! Field validation.

use crate::borehole::Borehole;
use crate::error::{FieldError, FieldResult};

/// Check that the field is non-empty and every borehole is physical.
pub fn validate_field(boreholes: &[Borehole]) -> FieldResult<()> {
    if boreholes.is_empty() {
        return Err(FieldError::EmptyField);
    }

    for (index, b) in boreholes.iter().enumerate() {
        let dims = [b.h.value, b.d.value, b.r_b.value, b.x.value, b.y.value];
        if dims.iter().any(|v| !v.is_finite()) {
            return Err(FieldError::InvalidBorehole {
                index,
                what: "non-finite dimension",
            });
        }
        if b.h.value <= 0.0 {
            return Err(FieldError::InvalidBorehole {
                index,
                what: "length must be positive",
            });
        }
        if b.r_b.value <= 0.0 {
            return Err(FieldError::InvalidBorehole {
                index,
                what: "radius must be positive",
            });
        }
        if b.d.value < 0.0 {
            return Err(FieldError::InvalidBorehole {
                index,
                what: "burial depth must be non-negative",
            });
        }
    }

    Ok(())
}

pub fn validate_segment_count(n_segments: usize) -> FieldResult<()> {
    if n_segments == 0 {
        return Err(FieldError::InvalidSegmentCount { count: n_segments });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gf_core::m;

    #[test]
    fn empty_field_rejected() {
        assert_eq!(validate_field(&[]), Err(FieldError::EmptyField));
    }

    #[test]
    fn non_physical_borehole_rejected() {
        let good = Borehole::new(m(100.0), m(2.0), m(0.075), m(0.0), m(0.0));
        let flat = Borehole { h: m(0.0), ..good };
        let lost = Borehole { x: m(f64::NAN), ..good };

        assert!(validate_field(&[good]).is_ok());
        assert!(matches!(
            validate_field(&[good, flat]),
            Err(FieldError::InvalidBorehole { index: 1, .. })
        ));
        assert!(matches!(
            validate_field(&[lost]),
            Err(FieldError::InvalidBorehole { index: 0, .. })
        ));
    }

    #[test]
    fn zero_segments_rejected() {
        assert!(validate_segment_count(1).is_ok());
        assert_eq!(
            validate_segment_count(0),
            Err(FieldError::InvalidSegmentCount { count: 0 })
        );
    }
}
