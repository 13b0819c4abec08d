//! gf-field: borehole field model.
//!
//! Provides:
//! - `Borehole` (length, burial depth, radius, planar position)
//! - Field validation
//! - Segment discretizer producing the canonical source ordering
//!
//! # Example
//!
//! ```
//! use gf_core::m;
//! use gf_field::{Borehole, borehole_segments};
//!
//! let field = vec![Borehole::new(m(100.0), m(2.0), m(0.075), m(0.0), m(0.0))];
//! let segments = borehole_segments(&field, 4);
//!
//! assert_eq!(segments.len(), 4);
//! assert_eq!(segments[1].d, m(27.0));
//! ```

pub mod borehole;
pub mod error;
pub mod segments;
pub mod validate;

// Re-exports for ergonomics
pub use borehole::Borehole;
pub use error::{FieldError, FieldResult};
pub use segments::{borehole_segments, segment_lengths};
pub use validate::{validate_field, validate_segment_count};
