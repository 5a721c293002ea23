// ─────────────────────────────────────────────────────────────────────
// Calco — Binding Registry
// ─────────────────────────────────────────────────────────────────────
//! The name → descriptor table a host addresses kernels through.
//!
//! Every external name is bound once, at build time, to a tagged kernel
//! pointer whose tag fixes the arity. After `Registry::standard()`
//! returns, the table is never mutated, so any number of threads may
//! share it without synchronisation.

use std::collections::HashMap;
use std::f64::consts::{E, FRAC_PI_2, PI};

use calco_types::Category::{Arithmetic, RoundingExpLog, SpecialUtility, TrigHyperbolic};
use calco_types::Domain::AllReals;
use calco_types::Expect::{Exact, Flag, Nan};
use calco_types::{Arity, CalcoError, CalcoResult, CallOutcome, Category, Domain, Expect, SpecialCase};

use crate::{arithmetic, exp_log, special, trig};

const INF: f64 = f64::INFINITY;
const NEG_INF: f64 = f64::NEG_INFINITY;
const NAN: f64 = f64::NAN;
const MAX: f64 = f64::MAX;

/// A statically-typed kernel, tagged by its shape.
#[derive(Debug, Clone, Copy)]
pub enum Kernel {
    Nullary(fn() -> f64),
    Unary(fn(f64) -> f64),
    Binary(fn(f64, f64) -> f64),
    Ternary(fn(f64, f64, f64) -> f64),
    /// Unary classification answering a boolean.
    Predicate(fn(f64) -> bool),
}

impl Kernel {
    pub fn arity(&self) -> Arity {
        match self {
            Self::Nullary(_) => Arity::Nullary,
            Self::Unary(_) | Self::Predicate(_) => Arity::Unary,
            Self::Binary(_) => Arity::Binary,
            Self::Ternary(_) => Arity::Ternary,
        }
    }

    /// Run the kernel on already-coerced arguments.
    ///
    /// `None` when the slice length does not match the tag.
    #[inline]
    pub fn invoke(&self, args: &[f64]) -> Option<CallOutcome> {
        let outcome = match (*self, args) {
            (Self::Nullary(f), []) => CallOutcome::Number(f()),
            (Self::Unary(f), &[x]) => CallOutcome::Number(f(x)),
            (Self::Binary(f), &[a, b]) => CallOutcome::Number(f(a, b)),
            (Self::Ternary(f), &[a, b, c]) => CallOutcome::Number(f(a, b, c)),
            (Self::Predicate(f), &[x]) => CallOutcome::Flag(f(x)),
            _ => return None,
        };
        Some(outcome)
    }
}

/// Everything the binding layer knows about one external name.
#[derive(Debug, Clone, Copy)]
pub struct FunctionDescriptor {
    pub name: &'static str,
    pub category: Category,
    pub kernel: Kernel,
    /// Documented real domain (first argument for multi-argument kernels).
    pub domain: Domain,
    pub special_cases: &'static [SpecialCase],
    pub doc: &'static str,
}

impl FunctionDescriptor {
    pub fn arity(&self) -> Arity {
        self.kernel.arity()
    }
}

const fn op(
    name: &'static str,
    category: Category,
    kernel: Kernel,
    domain: Domain,
    doc: &'static str,
    special_cases: &'static [SpecialCase],
) -> FunctionDescriptor {
    FunctionDescriptor {
        name,
        category,
        kernel,
        domain,
        special_cases,
        doc,
    }
}

const fn case(args: &'static [f64], expect: Expect) -> SpecialCase {
    SpecialCase::new(args, expect)
}

/// The standard external surface, in host method-table order.
#[rustfmt::skip]
static CATALOGUE: &[FunctionDescriptor] = &[
    // ── Arithmetic ──────────────────────────────────────────────────
    op("add", Arithmetic, Kernel::Binary(arithmetic::add), AllReals,
        "Adds two double numbers.",
        &[
            case(&[123.456, 654.321], Exact(777.777)),
            case(&[MAX, MAX], Exact(INF)),
            case(&[INF, NEG_INF], Nan),
            case(&[-0.0, -0.0], Exact(-0.0)),
        ]),
    op("subtract", Arithmetic, Kernel::Binary(arithmetic::subtract), AllReals,
        "Subtracts two double numbers.",
        &[
            case(&[5.0, 3.0], Exact(2.0)),
            case(&[INF, INF], Nan),
            case(&[1.0, INF], Exact(NEG_INF)),
        ]),
    op("multiply", Arithmetic, Kernel::Binary(arithmetic::multiply), AllReals,
        "Multiplies two double numbers.",
        &[
            case(&[3.0, 4.0], Exact(12.0)),
            case(&[-2.0, 0.0], Exact(-0.0)),
            case(&[0.0, INF], Nan),
        ]),
    op("divide", Arithmetic, Kernel::Binary(arithmetic::divide), AllReals,
        "Divides two double numbers. Returns NaN for 0/0, Inf/-Inf for x/0.",
        &[
            case(&[1.0, 0.0], Exact(INF)),
            case(&[-1.0, 0.0], Exact(NEG_INF)),
            case(&[1.0, -0.0], Exact(INF)),
            case(&[0.0, 0.0], Nan),
            case(&[NAN, 0.0], Nan),
            case(&[1.0, INF], Exact(0.0)),
        ]),
    op("power", RoundingExpLog, Kernel::Binary(exp_log::power), AllReals,
        "Raises base to the power of exponent.",
        &[
            case(&[0.0, 0.0], Exact(1.0)),
            case(&[NAN, 0.0], Exact(1.0)),
            case(&[1.0, NAN], Exact(1.0)),
            case(&[-8.0, 1.0 / 3.0], Nan),
            case(&[-2.0, 3.0], Exact(-8.0)),
            case(&[0.0, -1.0], Exact(INF)),
            case(&[2.0, 10.0], Exact(1024.0)),
        ]),
    op("square_root", Arithmetic, Kernel::Unary(arithmetic::square_root), Domain::NonNegative,
        "Calculates the square root of a number. Returns NaN for negative numbers.",
        &[
            case(&[16.0], Exact(4.0)),
            case(&[-1.0], Nan),
            case(&[-0.0], Exact(-0.0)),
            case(&[INF], Exact(INF)),
        ]),
    op("cube_root", Arithmetic, Kernel::Unary(arithmetic::cube_root), AllReals,
        "Calculates the cube root of a number.",
        &[
            case(&[0.0], Exact(0.0)),
            case(&[-0.0], Exact(-0.0)),
            case(&[NEG_INF], Exact(NEG_INF)),
            case(&[NAN], Nan),
        ]),
    op("absolute_value", Arithmetic, Kernel::Unary(arithmetic::absolute_value), AllReals,
        "Calculates the absolute value of a double.",
        &[
            case(&[-2.5], Exact(2.5)),
            case(&[-0.0], Exact(0.0)),
            case(&[NEG_INF], Exact(INF)),
        ]),
    op("float_modulo", Arithmetic, Kernel::Binary(arithmetic::float_modulo), AllReals,
        "Calculates the floating-point remainder of x/y.",
        &[
            case(&[7.5, 2.0], Exact(1.5)),
            case(&[-7.5, 2.0], Exact(-1.5)),
            case(&[1.0, 0.0], Nan),
            case(&[INF, 2.0], Nan),
            case(&[3.0, INF], Exact(3.0)),
        ]),
    op("hypotenuse", SpecialUtility, Kernel::Binary(special::hypot), AllReals,
        "Calculates the hypotenuse of two sides (sqrt(x*x + y*y)).",
        &[
            case(&[3.0, 4.0], Exact(5.0)),
            case(&[-3.0, -4.0], Exact(5.0)),
            case(&[INF, NAN], Exact(INF)),
            case(&[NAN, 1.0], Nan),
        ]),
    op("positive_difference", SpecialUtility, Kernel::Binary(special::positive_difference), AllReals,
        "Calculates the positive difference: max(0, x - y).",
        &[
            case(&[5.0, 3.0], Exact(2.0)),
            case(&[3.0, 5.0], Exact(0.0)),
            case(&[NAN, 1.0], Nan),
            case(&[1.0, NAN], Nan),
        ]),
    op("copy_sign_double", SpecialUtility, Kernel::Binary(special::copysign), AllReals,
        "Copies the sign of the second argument to the magnitude of the first.",
        &[
            case(&[3.0, -0.0], Exact(-3.0)),
            case(&[-2.0, 1.0], Exact(2.0)),
            case(&[INF, -1.0], Exact(NEG_INF)),
        ]),
    // ── Rounding ────────────────────────────────────────────────────
    op("floor_val", RoundingExpLog, Kernel::Unary(exp_log::floor), AllReals,
        "Rounds a double down to the nearest integer.",
        &[
            case(&[-2.5], Exact(-3.0)),
            case(&[-0.0], Exact(-0.0)),
            case(&[INF], Exact(INF)),
            case(&[NAN], Nan),
        ]),
    op("ceil_val", RoundingExpLog, Kernel::Unary(exp_log::ceil), AllReals,
        "Rounds a double up to the nearest integer.",
        &[
            case(&[2.1], Exact(3.0)),
            case(&[-0.5], Exact(-0.0)),
            case(&[NEG_INF], Exact(NEG_INF)),
        ]),
    op("round_val", RoundingExpLog, Kernel::Unary(exp_log::round), AllReals,
        "Rounds a double to the nearest integer, half away from zero.",
        &[
            case(&[2.5], Exact(3.0)),
            case(&[-2.5], Exact(-3.0)),
            case(&[0.5], Exact(1.0)),
        ]),
    op("nearbyint_val", RoundingExpLog, Kernel::Unary(exp_log::nearbyint), AllReals,
        "Rounds a double to the nearest integer, half to even.",
        &[
            case(&[2.5], Exact(2.0)),
            case(&[3.5], Exact(4.0)),
            case(&[-0.5], Exact(-0.0)),
        ]),
    op("truncate_val", RoundingExpLog, Kernel::Unary(exp_log::truncate), AllReals,
        "Truncates a double towards zero.",
        &[
            case(&[-2.7], Exact(-2.0)),
            case(&[2.7], Exact(2.0)),
            case(&[-0.3], Exact(-0.0)),
        ]),
    // ── Logarithms and exponentials ─────────────────────────────────
    op("natural_log", RoundingExpLog, Kernel::Unary(exp_log::ln), Domain::Positive,
        "Calculates the natural logarithm (base e). Returns NaN for non-positive numbers.",
        &[
            case(&[1.0], Exact(0.0)),
            case(&[0.0], Exact(NEG_INF)),
            case(&[-0.0], Exact(NEG_INF)),
            case(&[-1.0], Nan),
            case(&[INF], Exact(INF)),
        ]),
    op("log_base10", RoundingExpLog, Kernel::Unary(exp_log::log10), Domain::Positive,
        "Calculates the base 10 logarithm. Returns NaN for non-positive numbers.",
        &[
            case(&[1000.0], Exact(3.0)),
            case(&[0.0], Exact(NEG_INF)),
            case(&[-1.0], Nan),
        ]),
    op("log_base2", RoundingExpLog, Kernel::Unary(exp_log::log2), Domain::Positive,
        "Calculates the base 2 logarithm. Returns NaN for non-positive numbers.",
        &[
            case(&[8.0], Exact(3.0)),
            case(&[0.0], Exact(NEG_INF)),
            case(&[-1.0], Nan),
        ]),
    op("log_custom_base", RoundingExpLog, Kernel::Binary(exp_log::log_base), Domain::Positive,
        "Calculates the logarithm to a custom base.",
        &[
            case(&[8.0, 2.0], Exact(3.0)),
            case(&[8.0, 1.0], Nan),
            case(&[8.0, 0.0], Nan),
            case(&[8.0, -2.0], Nan),
            case(&[0.0, 2.0], Exact(NEG_INF)),
        ]),
    op("exponential", RoundingExpLog, Kernel::Unary(exp_log::exp), AllReals,
        "Calculates e raised to the power of x.",
        &[
            case(&[0.0], Exact(1.0)),
            case(&[1000.0], Exact(INF)),
            case(&[-1000.0], Exact(0.0)),
            case(&[NEG_INF], Exact(0.0)),
            case(&[NAN], Nan),
        ]),
    op("exponential_base2", RoundingExpLog, Kernel::Unary(exp_log::exp2), AllReals,
        "Calculates 2 raised to the power of x.",
        &[
            case(&[10.0], Exact(1024.0)),
            case(&[-1.0], Exact(0.5)),
            case(&[2000.0], Exact(INF)),
        ]),
    op("exponential_minus_1", RoundingExpLog, Kernel::Unary(exp_log::exp_m1), AllReals,
        "Calculates (e^x - 1) accurately for small x.",
        &[
            case(&[0.0], Exact(0.0)),
            case(&[-0.0], Exact(-0.0)),
            case(&[NEG_INF], Exact(-1.0)),
            case(&[INF], Exact(INF)),
        ]),
    // ── Trigonometric ───────────────────────────────────────────────
    op("sine", TrigHyperbolic, Kernel::Unary(trig::sin), AllReals,
        "Calculates the sine of an angle (in radians).",
        &[
            case(&[0.0], Exact(0.0)),
            case(&[-0.0], Exact(-0.0)),
            case(&[INF], Nan),
            case(&[NAN], Nan),
        ]),
    op("cosine", TrigHyperbolic, Kernel::Unary(trig::cos), AllReals,
        "Calculates the cosine of an angle (in radians).",
        &[
            case(&[0.0], Exact(1.0)),
            case(&[NEG_INF], Nan),
        ]),
    op("tangent", TrigHyperbolic, Kernel::Unary(trig::tan), AllReals,
        "Calculates the tangent of an angle (in radians).",
        &[
            case(&[0.0], Exact(0.0)),
            case(&[FRAC_PI_2], Nan),
            case(&[INF], Nan),
        ]),
    op("arcsine", TrigHyperbolic, Kernel::Unary(trig::asin), Domain::Closed(-1.0, 1.0),
        "Calculates the arcsine (inverse sine). Input must be between -1 and 1.",
        &[
            case(&[0.0], Exact(0.0)),
            case(&[1.0], Exact(FRAC_PI_2)),
            case(&[2.0], Nan),
        ]),
    op("arccosine", TrigHyperbolic, Kernel::Unary(trig::acos), Domain::Closed(-1.0, 1.0),
        "Calculates the arccosine (inverse cosine). Input must be between -1 and 1.",
        &[
            case(&[1.0], Exact(0.0)),
            case(&[-1.0], Exact(PI)),
            case(&[1.5], Nan),
        ]),
    op("arctangent", TrigHyperbolic, Kernel::Unary(trig::atan), AllReals,
        "Calculates the arctangent (inverse tangent).",
        &[
            case(&[0.0], Exact(0.0)),
            case(&[INF], Exact(FRAC_PI_2)),
            case(&[NEG_INF], Exact(-FRAC_PI_2)),
        ]),
    op("arctangent2", TrigHyperbolic, Kernel::Binary(trig::atan2), AllReals,
        "Calculates the arctangent of y/x in all four quadrants.",
        &[
            case(&[0.0, -1.0], Exact(PI)),
            case(&[-0.0, -1.0], Exact(-PI)),
            case(&[1.0, 0.0], Exact(FRAC_PI_2)),
            case(&[0.0, 0.0], Exact(0.0)),
        ]),
    // ── Hyperbolic ──────────────────────────────────────────────────
    op("hyperbolic_sine", TrigHyperbolic, Kernel::Unary(trig::sinh), AllReals,
        "Calculates the hyperbolic sine.",
        &[
            case(&[0.0], Exact(0.0)),
            case(&[1000.0], Exact(INF)),
            case(&[-1000.0], Exact(NEG_INF)),
        ]),
    op("hyperbolic_cosine", TrigHyperbolic, Kernel::Unary(trig::cosh), AllReals,
        "Calculates the hyperbolic cosine.",
        &[
            case(&[0.0], Exact(1.0)),
            case(&[-1000.0], Exact(INF)),
        ]),
    op("hyperbolic_tangent", TrigHyperbolic, Kernel::Unary(trig::tanh), AllReals,
        "Calculates the hyperbolic tangent.",
        &[
            case(&[0.0], Exact(0.0)),
            case(&[1000.0], Exact(1.0)),
            case(&[-1000.0], Exact(-1.0)),
        ]),
    op("inverse_hyperbolic_sine", TrigHyperbolic, Kernel::Unary(trig::asinh), AllReals,
        "Calculates the inverse hyperbolic sine.",
        &[
            case(&[0.0], Exact(0.0)),
            case(&[INF], Exact(INF)),
            case(&[NEG_INF], Exact(NEG_INF)),
        ]),
    op("inverse_hyperbolic_cosine", TrigHyperbolic, Kernel::Unary(trig::acosh), Domain::AtLeast(1.0),
        "Calculates the inverse hyperbolic cosine. Input must be >= 1.0.",
        &[
            case(&[1.0], Exact(0.0)),
            case(&[0.5], Nan),
            case(&[INF], Exact(INF)),
        ]),
    op("inverse_hyperbolic_tangent", TrigHyperbolic, Kernel::Unary(trig::atanh), Domain::Open(-1.0, 1.0),
        "Calculates the inverse hyperbolic tangent. Input must be between -1.0 and 1.0.",
        &[
            case(&[0.0], Exact(0.0)),
            case(&[1.0], Exact(INF)),
            case(&[-1.0], Exact(NEG_INF)),
            case(&[1.5], Nan),
        ]),
    // ── Special functions ───────────────────────────────────────────
    op("gamma_function", SpecialUtility, Kernel::Unary(special::gamma), Domain::NotNonPositiveInteger,
        "Calculates the Gamma function.",
        &[
            case(&[1.0], Exact(1.0)),
            case(&[5.0], Exact(24.0)),
            case(&[0.0], Exact(INF)),
            case(&[-0.0], Exact(NEG_INF)),
            case(&[-1.0], Exact(NEG_INF)),
            case(&[-2.0], Exact(INF)),
            case(&[INF], Exact(INF)),
            case(&[NEG_INF], Nan),
            case(&[NAN], Nan),
        ]),
    op("log_gamma_function", SpecialUtility, Kernel::Unary(special::log_gamma), Domain::NotNonPositiveInteger,
        "Calculates the natural logarithm of the absolute value of the Gamma function.",
        &[
            case(&[1.0], Exact(0.0)),
            case(&[2.0], Exact(0.0)),
            case(&[0.0], Exact(INF)),
            case(&[-3.0], Exact(INF)),
            case(&[NEG_INF], Exact(INF)),
        ]),
    op("error_function", SpecialUtility, Kernel::Unary(special::erf), AllReals,
        "Calculates the Error function.",
        &[
            case(&[0.0], Exact(0.0)),
            case(&[-0.0], Exact(-0.0)),
            case(&[INF], Exact(1.0)),
            case(&[NEG_INF], Exact(-1.0)),
            case(&[NAN], Nan),
        ]),
    op("complementary_error_function", SpecialUtility, Kernel::Unary(special::erfc), AllReals,
        "Calculates the Complementary error function (1 - erf(x)).",
        &[
            case(&[0.0], Exact(1.0)),
            case(&[INF], Exact(0.0)),
            case(&[NEG_INF], Exact(2.0)),
        ]),
    op("next_after_double", SpecialUtility, Kernel::Binary(special::next_after), AllReals,
        "Returns the next representable floating-point value after x in the direction of y.",
        &[
            case(&[1.0, 1.0], Exact(1.0)),
            case(&[1.0, 2.0], Exact(1.0 + f64::EPSILON)),
            case(&[0.0, 1.0], Exact(5e-324)),
            case(&[0.0, -1.0], Exact(-5e-324)),
            case(&[MAX, INF], Exact(INF)),
            case(&[NAN, 1.0], Nan),
        ]),
    op("fused_multiply_add", SpecialUtility, Kernel::Ternary(special::fused_multiply_add), AllReals,
        "Calculates (a * b) + c with a single rounding.",
        &[
            case(&[2.0, 3.0, 4.0], Exact(10.0)),
            case(&[0.1, 10.0, -1.0], Exact(5.551_115_123_125_783e-17)),
            case(&[INF, 0.0, 1.0], Nan),
        ]),
    // ── Angle conversion ────────────────────────────────────────────
    op("degrees_to_radians", TrigHyperbolic, Kernel::Unary(trig::degrees_to_radians), AllReals,
        "Converts an angle from degrees to radians.",
        &[
            case(&[0.0], Exact(0.0)),
            case(&[180.0], Exact(PI)),
            case(&[INF], Exact(INF)),
        ]),
    op("radians_to_degrees", TrigHyperbolic, Kernel::Unary(trig::radians_to_degrees), AllReals,
        "Converts an angle from radians to degrees.",
        &[
            case(&[0.0], Exact(0.0)),
            case(&[NEG_INF], Exact(NEG_INF)),
        ]),
    // ── Constants and classification ────────────────────────────────
    op("get_pi", SpecialUtility, Kernel::Nullary(special::pi), AllReals,
        "Returns the value of PI.",
        &[case(&[], Exact(PI))]),
    op("get_e", SpecialUtility, Kernel::Nullary(special::e), AllReals,
        "Returns the value of E.",
        &[case(&[], Exact(E))]),
    op("is_nan", SpecialUtility, Kernel::Predicate(special::is_nan), AllReals,
        "Checks if a double is Not-a-Number (NaN).",
        &[
            case(&[NAN], Flag(true)),
            case(&[INF], Flag(false)),
            case(&[0.0], Flag(false)),
        ]),
    op("is_infinity", SpecialUtility, Kernel::Predicate(special::is_infinity), AllReals,
        "Checks if a double is positive or negative infinity.",
        &[
            case(&[INF], Flag(true)),
            case(&[NEG_INF], Flag(true)),
            case(&[NAN], Flag(false)),
            case(&[MAX], Flag(false)),
        ]),
];

/// Read-only name → descriptor table.
#[derive(Debug, Clone)]
pub struct Registry {
    descriptors: Vec<FunctionDescriptor>,
    index: HashMap<&'static str, usize>,
}

impl Registry {
    /// The full standard surface.
    pub fn standard() -> CalcoResult<Self> {
        Self::from_descriptors(CATALOGUE.iter().copied())
    }

    /// Build from an arbitrary descriptor list; rejects duplicate names.
    pub fn from_descriptors<I>(descriptors: I) -> CalcoResult<Self>
    where
        I: IntoIterator<Item = FunctionDescriptor>,
    {
        let descriptors: Vec<FunctionDescriptor> = descriptors.into_iter().collect();
        let mut index = HashMap::with_capacity(descriptors.len());
        for (i, d) in descriptors.iter().enumerate() {
            if index.insert(d.name, i).is_some() {
                return Err(CalcoError::DuplicateOperation { name: d.name });
            }
        }
        log::debug!("Registry built with {} operations", descriptors.len());
        Ok(Self { descriptors, index })
    }

    /// Exact-name lookup.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&FunctionDescriptor> {
        self.index.get(name).map(|&i| &self.descriptors[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All registered names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.index.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Descriptors in registration order.
    pub fn descriptors(&self) -> &[FunctionDescriptor] {
        &self.descriptors
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
