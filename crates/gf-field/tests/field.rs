use gf_core::m;
use gf_field::{
    Borehole, FieldError, borehole_segments, segment_lengths, validate_field,
    validate_segment_count,
};

fn line_field(n: usize, spacing: f64) -> Vec<Borehole> {
    (0..n)
        .map(|i| Borehole::new(m(120.0), m(1.5), m(0.07), m(i as f64 * spacing), m(0.0)))
        .collect()
}

#[test]
fn discretized_field_is_valid_and_conserves_length() {
    let field = line_field(5, 7.5);
    validate_field(&field).unwrap();

    let segments = borehole_segments(&field, 8);
    validate_field(&segments).unwrap();
    assert_eq!(segments.len(), 40);

    let total: f64 = segment_lengths(&segments).iter().sum();
    assert!((total - 600.0).abs() < 1e-9);

    // segments stack without gaps inside every parent
    for group in segments.chunks(8) {
        for pair in group.windows(2) {
            assert!((pair[0].bottom().value - pair[1].d.value).abs() < 1e-9);
        }
        assert!((group[7].bottom().value - 121.5).abs() < 1e-9);
    }
}

#[test]
fn one_segment_per_borehole_is_the_field_itself() {
    let field = line_field(3, 5.0);
    assert_eq!(borehole_segments(&field, 1), field);
}

#[test]
fn invalid_inputs_are_reported() {
    assert_eq!(validate_field(&[]), Err(FieldError::EmptyField));
    assert_eq!(
        validate_segment_count(0),
        Err(FieldError::InvalidSegmentCount { count: 0 })
    );

    let mut field = line_field(3, 5.0);
    field[2].h = m(0.0);
    assert!(matches!(
        validate_field(&field),
        Err(FieldError::InvalidBorehole { index: 2, .. })
    ));
}
