// gf-core/src/units.rs

use uom::si::f64::{
    DiffusionCoefficient as UomDiffusionCoefficient, Length as UomLength, Time as UomTime,
};

// Public canonical unit types (SI, f64)
pub type Length = UomLength;
pub type Time = UomTime;
/// Ground thermal diffusivity.
pub type Diffusivity = UomDiffusionCoefficient;

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn s(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

#[inline]
pub fn m2ps(v: f64) -> Diffusivity {
    use uom::si::diffusion_coefficient::square_meter_per_second;
    Diffusivity::new::<square_meter_per_second>(v)
}

/// Ground thermal diffusivity in m^2/s.
#[inline]
pub fn to_m2ps(alpha: Diffusivity) -> f64 {
    use uom::si::diffusion_coefficient::square_meter_per_second;
    alpha.get::<square_meter_per_second>()
}
