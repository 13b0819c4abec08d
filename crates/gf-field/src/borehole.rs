//! Borehole geometry.

use gf_core::units::{Length, m};

/// A vertical borehole, or one segment of a discretized borehole.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Borehole {
    /// Length
    pub h: Length,
    /// Burial depth (top of the borehole below the surface)
    pub d: Length,
    /// Borehole radius
    pub r_b: Length,
    /// Planar position
    pub x: Length,
    pub y: Length,
}

impl Borehole {
    pub fn new(h: Length, d: Length, r_b: Length, x: Length, y: Length) -> Self {
        Self { h, d, r_b, x, y }
    }

    /// Horizontal distance to another borehole, never less than this
    /// borehole's radius.
    pub fn distance(&self, other: &Borehole) -> Length {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dist = m(dx.value.hypot(dy.value));
        if dist > self.r_b { dist } else { self.r_b }
    }

    /// Depth of the bottom end.
    pub fn bottom(&self) -> Length {
        self.d + self.h
    }
}
