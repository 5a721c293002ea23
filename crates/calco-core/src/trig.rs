// ─────────────────────────────────────────────────────────────────────
// Calco — Trigonometric & Hyperbolic Kernel
// ─────────────────────────────────────────────────────────────────────
//! Circular functions and their inverses, the two-argument arctangent,
//! hyperbolic functions and their inverses, and angle conversion.
//!
//! Argument reduction for sin/cos/tan is libm's. Very large arguments
//! keep libm's accuracy bound; that loss is accepted, never an error.

use std::f64::consts::PI;

const DEG_TO_RAD: f64 = PI / 180.0;
const RAD_TO_DEG: f64 = 180.0 / PI;

// ── Circular ────────────────────────────────────────────────────────

#[inline]
pub fn sin(x: f64) -> f64 {
    x.sin()
}

#[inline]
pub fn cos(x: f64) -> f64 {
    x.cos()
}

/// Tangent, NaN at a pole.
///
/// An argument whose cosine rounds to within machine epsilon of zero
/// is treated as a pole rather than answering ~1.6e16.
#[inline]
pub fn tan(x: f64) -> f64 {
    if x.cos().abs() < f64::EPSILON {
        return f64::NAN;
    }
    x.tan()
}

/// Arcsine on [-1, 1], NaN outside.
#[inline]
pub fn asin(x: f64) -> f64 {
    if !(-1.0..=1.0).contains(&x) {
        return f64::NAN;
    }
    x.asin()
}

/// Arccosine on [-1, 1], NaN outside.
#[inline]
pub fn acos(x: f64) -> f64 {
    if !(-1.0..=1.0).contains(&x) {
        return f64::NAN;
    }
    x.acos()
}

/// Arctangent, total over the reals (±π/2 at ±Infinity).
#[inline]
pub fn atan(x: f64) -> f64 {
    x.atan()
}

/// Angle of the point (x, y) in (-π, π].
///
/// Axis conventions: `atan2(±0, +0) = ±0`, `atan2(±0, -0) = ±π`,
/// `atan2(±0, x<0) = ±π`, `atan2(y>0, ±0) = π/2`.
#[inline]
pub fn atan2(y: f64, x: f64) -> f64 {
    y.atan2(x)
}

// ── Hyperbolic ──────────────────────────────────────────────────────

#[inline]
pub fn sinh(x: f64) -> f64 {
    x.sinh()
}

#[inline]
pub fn cosh(x: f64) -> f64 {
    x.cosh()
}

#[inline]
pub fn tanh(x: f64) -> f64 {
    x.tanh()
}

#[inline]
pub fn asinh(x: f64) -> f64 {
    x.asinh()
}

/// Inverse hyperbolic cosine on [1, ∞), NaN below.
#[inline]
pub fn acosh(x: f64) -> f64 {
    if x < 1.0 {
        return f64::NAN;
    }
    x.acosh()
}

/// Inverse hyperbolic tangent on (-1, 1); ±Infinity at ±1, NaN outside.
#[inline]
pub fn atanh(x: f64) -> f64 {
    if x == 1.0 {
        return f64::INFINITY;
    }
    if x == -1.0 {
        return f64::NEG_INFINITY;
    }
    if !(-1.0..=1.0).contains(&x) {
        return f64::NAN;
    }
    x.atanh()
}

// ── Angle conversion ────────────────────────────────────────────────

#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * DEG_TO_RAD
}

#[inline]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * RAD_TO_DEG
}
