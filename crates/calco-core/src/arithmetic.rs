// ─────────────────────────────────────────────────────────────────────
// Calco — Arithmetic Kernel
// ─────────────────────────────────────────────────────────────────────
//! Basic arithmetic, roots, absolute value and floating remainder.
//!
//! IEEE-754 default arithmetic throughout: overflow saturates to
//! ±Infinity, underflow to subnormals or zero, nothing ever traps.

/// a + b
#[inline]
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// a - b
#[inline]
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// a * b
#[inline]
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// a / b.
///
/// A zero divisor yields ±Infinity by the sign of the numerator alone
/// (the sign of the zero is ignored). `0/0` and `NaN/0` are NaN.
#[inline]
pub fn divide(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        if a == 0.0 || a.is_nan() {
            return f64::NAN;
        }
        return f64::INFINITY.copysign(a);
    }
    a / b
}

/// √x. NaN for x < 0; `-0.0` maps to `-0.0`.
#[inline]
pub fn square_root(x: f64) -> f64 {
    if x < 0.0 {
        return f64::NAN;
    }
    x.sqrt()
}

/// ∛x, defined for every real (negative in, negative out).
#[inline]
pub fn cube_root(x: f64) -> f64 {
    x.cbrt()
}

/// |x|, clearing the sign bit (also for NaN).
#[inline]
pub fn absolute_value(x: f64) -> f64 {
    x.abs()
}

/// Floating remainder of x / y with the sign of x (C `fmod`).
///
/// NaN when y is zero or x is infinite; x unchanged when y is infinite
/// and x finite.
#[inline]
pub fn float_modulo(x: f64, y: f64) -> f64 {
    if y == 0.0 {
        return f64::NAN;
    }
    x % y
}
