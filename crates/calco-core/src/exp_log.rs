// ─────────────────────────────────────────────────────────────────────
// Calco — Rounding & Exponential/Logarithm Kernel
// ─────────────────────────────────────────────────────────────────────
//! Integer rounding in its five tie-breaking flavours, exponentials,
//! logarithms, and the power function.
//!
//! Exponentials and logarithms defer to the platform libm through the
//! `f64` inherent methods; this module owns the edge-case policy on top.

// ── Rounding ────────────────────────────────────────────────────────

/// Largest integer <= x.
#[inline]
pub fn floor(x: f64) -> f64 {
    x.floor()
}

/// Smallest integer >= x.
#[inline]
pub fn ceil(x: f64) -> f64 {
    x.ceil()
}

/// Nearest integer, ties away from zero (2.5 → 3, -2.5 → -3).
#[inline]
pub fn round(x: f64) -> f64 {
    x.round()
}

/// Nearest integer, ties to even (2.5 → 2, 3.5 → 4).
///
/// Rust code always runs in round-to-nearest-even, so this is the
/// prevailing rounding mode.
#[inline]
pub fn nearbyint(x: f64) -> f64 {
    x.round_ties_even()
}

/// Integer part, discarding the fraction toward zero.
#[inline]
pub fn truncate(x: f64) -> f64 {
    x.trunc()
}

// ── Exponentials ────────────────────────────────────────────────────

/// e^x. Saturates to +Infinity above ~709.78 and to +0 below ~-745.13.
#[inline]
pub fn exp(x: f64) -> f64 {
    x.exp()
}

/// 2^x.
#[inline]
pub fn exp2(x: f64) -> f64 {
    x.exp2()
}

/// e^x - 1 without cancellation for small |x|.
#[inline]
pub fn exp_m1(x: f64) -> f64 {
    x.exp_m1()
}

// ── Logarithms ──────────────────────────────────────────────────────

/// Natural log. NaN for x < 0, -Infinity at ±0.
#[inline]
pub fn ln(x: f64) -> f64 {
    x.ln()
}

/// Base-2 log. NaN for x < 0, -Infinity at ±0.
#[inline]
pub fn log2(x: f64) -> f64 {
    x.log2()
}

/// Base-10 log. NaN for x < 0, -Infinity at ±0.
#[inline]
pub fn log10(x: f64) -> f64 {
    x.log10()
}

/// log_base(x) = ln(x) / ln(base).
///
/// NaN when `base` is 1 or not positive; NaN in either argument
/// propagates.
#[inline]
pub fn log_base(x: f64, base: f64) -> f64 {
    if base <= 0.0 || base == 1.0 {
        return f64::NAN;
    }
    x.ln() / base.ln()
}

// ── Power ───────────────────────────────────────────────────────────

/// Integer exponents up to this magnitude take the exact-ish squaring
/// path; larger ones go through libm on |base| with a parity sign.
const MAX_SQUARING_EXPONENT: f64 = 64.0;

/// base^exponent with C99 `pow` conventions.
///
/// - `power(x, ±0) = 1` for every x, NaN included.
/// - `power(1, y) = 1` for every y, NaN included.
/// - `power(±0, y < 0) = +Infinity` (or -Infinity for -0 and odd y).
/// - finite negative base with a non-integer exponent is NaN.
/// - finite negative base with an integer exponent: magnitude by
///   repeated squaring, sign by the exponent's parity.
pub fn power(base: f64, exponent: f64) -> f64 {
    if exponent == 0.0 || base == 1.0 {
        return 1.0;
    }
    if base.is_nan() || exponent.is_nan() {
        return f64::NAN;
    }
    if base < 0.0 && base.is_finite() && exponent.is_finite() {
        if exponent.trunc() != exponent {
            return f64::NAN;
        }
        let mut magnitude = if exponent.abs() <= MAX_SQUARING_EXPONENT {
            powi_by_squaring(-base, exponent as i32)
        } else {
            (-base).powf(exponent)
        };
        // Squaring saturates or flushes before libm would; leave the
        // overflow, underflow and subnormal range to libm.
        if !magnitude.is_normal() {
            magnitude = (-base).powf(exponent);
        }
        return if is_odd_integer(exponent) {
            -magnitude
        } else {
            magnitude
        };
    }
    base.powf(exponent)
}

/// b^n for b >= 0 by binary exponentiation.
#[inline]
fn powi_by_squaring(b: f64, n: i32) -> f64 {
    let mut k = n.unsigned_abs();
    let mut acc = 1.0;
    let mut sq = b;
    while k > 0 {
        if k & 1 == 1 {
            acc *= sq;
        }
        k >>= 1;
        if k > 0 {
            sq *= sq;
        }
    }
    if n < 0 {
        1.0 / acc
    } else {
        acc
    }
}

/// Whether the integer `y` is odd.
/// Every double at or above 2^53 is even.
#[inline]
fn is_odd_integer(y: f64) -> bool {
    (y * 0.5).trunc() != y * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Rounding ──────────────────────────────────────────────────

    #[test]
    fn test_floor_ceil() {
        assert_eq!(floor(-2.5), -3.0);
        assert_eq!(ceil(-2.5), -2.0);
        assert_eq!(floor(2.0), 2.0);
        assert!(ceil(-0.5).is_sign_negative());
    }

    #[test]
    fn test_round_ties_away_from_zero() {
        assert_eq!(round(2.5), 3.0);
        assert_eq!(round(-2.5), -3.0);
        assert_eq!(round(0.5), 1.0);
        assert_eq!(round(2.4999), 2.0);
    }

    #[test]
    fn test_nearbyint_ties_to_even() {
        assert_eq!(nearbyint(2.5), 2.0);
        assert_eq!(nearbyint(3.5), 4.0);
        assert_eq!(nearbyint(-2.5), -2.0);
        assert_eq!(nearbyint(0.5), 0.0);
        assert_eq!(nearbyint(2.6), 3.0);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate(-2.7), -2.0);
        assert_eq!(truncate(2.7), 2.0);
        assert!(truncate(-0.3).is_sign_negative());
    }

    #[test]
    fn test_rounding_passes_specials_through() {
        for f in [floor, ceil, round, nearbyint, truncate] {
            assert!(f(f64::NAN).is_nan());
            assert_eq!(f(f64::INFINITY), f64::INFINITY);
            assert_eq!(f(f64::NEG_INFINITY), f64::NEG_INFINITY);
            assert_eq!(f(1e300), 1e300);
        }
    }

    // ── Exponentials ──────────────────────────────────────────────

    #[test]
    fn test_exp_saturation() {
        assert_eq!(exp(1000.0), f64::INFINITY);
        assert_eq!(exp(-1000.0), 0.0);
        assert!(exp(-1000.0).is_sign_positive());
        assert_eq!(exp(0.0), 1.0);
        assert_eq!(exp(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn test_exp2() {
        assert_eq!(exp2(10.0), 1024.0);
        assert_eq!(exp2(-1.0), 0.5);
        assert_eq!(exp2(2000.0), f64::INFINITY);
    }

    #[test]
    fn test_exp_m1_small_argument() {
        let x = 1e-10;
        let r = exp_m1(x);
        // Taylor: x + x²/2
        assert!((r - (x + x * x / 2.0)).abs() < 1e-25);
        assert_eq!(exp_m1(0.0), 0.0);
        assert!(exp_m1(-0.0).is_sign_negative());
        assert_eq!(exp_m1(f64::NEG_INFINITY), -1.0);
    }

    // ── Logarithms ────────────────────────────────────────────────

    #[test]
    fn test_log_domain() {
        for f in [ln, log2, log10] {
            assert!(f(-1.0).is_nan());
            assert_eq!(f(0.0), f64::NEG_INFINITY);
            assert_eq!(f(-0.0), f64::NEG_INFINITY);
            assert_eq!(f(f64::INFINITY), f64::INFINITY);
            assert_eq!(f(1.0), 0.0);
        }
    }

    #[test]
    fn test_log_values() {
        assert_eq!(log2(8.0), 3.0);
        assert_eq!(log10(1000.0), 3.0);
        assert!((ln(std::f64::consts::E) - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_log_base() {
        assert!((log_base(1000.0, 10.0) - 3.0).abs() < 1e-12);
        assert_eq!(log_base(8.0, 2.0), 3.0);
        assert!(log_base(8.0, 1.0).is_nan());
        assert!(log_base(8.0, 0.0).is_nan());
        assert!(log_base(8.0, -2.0).is_nan());
        assert!(log_base(-8.0, 2.0).is_nan());
        assert!(log_base(f64::NAN, 2.0).is_nan());
        assert!(log_base(2.0, f64::NAN).is_nan());
        assert_eq!(log_base(0.0, 2.0), f64::NEG_INFINITY);
    }

    // ── Power ─────────────────────────────────────────────────────

    #[test]
    fn test_power_zero_cases() {
        assert_eq!(power(0.0, 0.0), 1.0);
        assert_eq!(power(f64::NAN, 0.0), 1.0);
        assert_eq!(power(0.0, -1.0), f64::INFINITY);
        assert_eq!(power(0.0, -2.0), f64::INFINITY);
        assert_eq!(power(0.0, 3.0), 0.0);
    }

    #[test]
    fn test_power_one_base() {
        assert_eq!(power(1.0, f64::NAN), 1.0);
        assert_eq!(power(1.0, f64::INFINITY), 1.0);
    }

    #[test]
    fn test_power_negative_base_fractional_exponent() {
        assert!(power(-8.0, 1.0 / 3.0).is_nan());
        assert!(power(-2.0, 0.5).is_nan());
    }

    #[test]
    fn test_power_negative_base_integer_exponent() {
        assert_eq!(power(-2.0, 3.0), -8.0);
        assert_eq!(power(-2.0, 4.0), 16.0);
        assert_eq!(power(-2.0, -2.0), 0.25);
        assert_eq!(power(-2.0, -3.0), -0.125);
        assert_eq!(power(-1.5, 2.0), 2.25);
    }

    #[test]
    fn test_power_negative_base_large_exponent() {
        assert_eq!(power(-8.0, 1e20), f64::INFINITY);
        assert_eq!(power(-2.0, 1025.0), f64::NEG_INFINITY);
        assert_eq!(power(-2.0, 1001.0), -(2.0f64.powf(1001.0)));
        let tiny = power(-0.5, 1101.0);
        assert_eq!(tiny, 0.0);
        assert!(tiny.is_sign_negative());
        assert!((power(-1.0001, 1000.0) - 1.0001f64.powf(1000.0)).abs() < 1e-12);
    }

    #[test]
    fn test_power_negative_base_subnormal_result() {
        // 1e5^64 overflows before its reciprocal is taken
        let even = power(-1e5, -64.0);
        assert_eq!(even.to_bits(), 1e5f64.powf(-64.0).to_bits());
        assert!(even > 0.0);
        let odd = power(-1e5, -63.0);
        assert_eq!(odd.to_bits(), (-(1e5f64.powf(-63.0))).to_bits());
        assert!(odd < 0.0);
        let tiny = power(-1e-5, 63.0);
        assert_eq!(tiny.to_bits(), (-(1e-5f64.powf(63.0))).to_bits());
    }

    #[test]
    fn test_power_negative_base_infinite_exponent() {
        assert_eq!(power(-1.0, f64::INFINITY), 1.0);
        assert_eq!(power(-2.0, f64::INFINITY), f64::INFINITY);
        assert_eq!(power(-0.5, f64::INFINITY), 0.0);
    }

    #[test]
    fn test_power_positive_base() {
        assert_eq!(power(2.0, 10.0), 1024.0);
        assert_eq!(power(2.0, 0.5), std::f64::consts::SQRT_2);
        assert_eq!(power(10.0, 400.0), f64::INFINITY);
    }

    #[test]
    fn test_squaring_matches_powi() {
        for n in -20..=20 {
            let a = powi_by_squaring(1.1, n);
            let b = 1.1f64.powi(n);
            assert!(((a - b) / b).abs() < 1e-14, "n={n}: {a} vs {b}");
        }
    }

    #[test]
    fn test_odd_integer() {
        assert!(is_odd_integer(3.0));
        assert!(is_odd_integer(-1.0));
        assert!(!is_odd_integer(4.0));
        assert!(!is_odd_integer(1e20));
    }
}
