// ─────────────────────────────────────────────────────────────────────
// Calco — Operation Metadata
// ─────────────────────────────────────────────────────────────────────
//! Metadata carried by every registered operation: how many arguments
//! it takes, which kernel family it belongs to, its documented real
//! domain, and a table of edge cases with their defined answers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of arguments an operation takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Arity {
    Nullary,
    Unary,
    Binary,
    Ternary,
}

impl Arity {
    pub fn count(self) -> usize {
        match self {
            Self::Nullary => 0,
            Self::Unary => 1,
            Self::Binary => 2,
            Self::Ternary => 3,
        }
    }
}

/// Kernel family an operation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Arithmetic,
    RoundingExpLog,
    TrigHyperbolic,
    SpecialUtility,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Arithmetic => "arithmetic",
            Self::RoundingExpLog => "rounding_exp_log",
            Self::TrigHyperbolic => "trig_hyperbolic",
            Self::SpecialUtility => "special_utility",
        }
    }
}

/// Documented real domain of a unary operation.
///
/// Outside its domain a kernel answers NaN (or ±Infinity at a pole);
/// the domain is descriptive, the dispatcher never rejects on it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    AllReals,
    /// x >= 0
    NonNegative,
    /// x > 0
    Positive,
    /// lo <= x <= hi
    Closed(f64, f64),
    /// lo < x < hi
    Open(f64, f64),
    /// x >= lo
    AtLeast(f64),
    /// Every real except 0, -1, -2, ...
    NotNonPositiveInteger,
}

impl Domain {
    /// Whether a finite or infinite `x` lies inside the domain.
    /// NaN is in no domain.
    pub fn contains(self, x: f64) -> bool {
        if x.is_nan() {
            return false;
        }
        match self {
            Self::AllReals => true,
            Self::NonNegative => x >= 0.0,
            Self::Positive => x > 0.0,
            Self::Closed(lo, hi) => lo <= x && x <= hi,
            Self::Open(lo, hi) => lo < x && x < hi,
            Self::AtLeast(lo) => x >= lo,
            Self::NotNonPositiveInteger => !(x <= 0.0 && x.floor() == x),
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::AllReals => write!(f, "all reals"),
            Self::NonNegative => write!(f, "x >= 0"),
            Self::Positive => write!(f, "x > 0"),
            Self::Closed(lo, hi) => write!(f, "{lo} <= x <= {hi}"),
            Self::Open(lo, hi) => write!(f, "{lo} < x < {hi}"),
            Self::AtLeast(lo) => write!(f, "x >= {lo}"),
            Self::NotNonPositiveInteger => write!(f, "x not in {{0, -1, -2, ...}}"),
        }
    }
}

/// Defined answer for one special case.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Expect {
    /// Bit-for-bit equal, so signed zeros and infinities are distinguished.
    Exact(f64),
    Nan,
    Flag(bool),
}

/// One row of an operation's special-case table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpecialCase {
    pub args: &'static [f64],
    pub expect: Expect,
}

impl SpecialCase {
    pub const fn new(args: &'static [f64], expect: Expect) -> Self {
        Self { args, expect }
    }
}
