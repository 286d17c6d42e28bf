// Our Real scalar type.
//
// The marching tolerances and the rotation-rate scale are calibrated for
// double precision; there is no f32 build.
pub type Real = f64;

/// A small epsilon for geometric comparisons.
pub const EPSILON: Real = 1e-6;

/// Archimedes' constant (π)
pub const PI: Real = core::f64::consts::PI;

/// π/3, the interior angle of an equilateral triangle
pub const FRAC_PI_3: Real = core::f64::consts::FRAC_PI_3;

/// The full circle constant (τ)
pub const TAU: Real = core::f64::consts::TAU;
