// ─────────────────────────────────────────────────────────────────────
// Calco — Error Hierarchy
// ─────────────────────────────────────────────────────────────────────

use thiserror::Error;

/// Root error type for every call-contract and setup failure.
///
/// Numeric outcomes (NaN, ±Infinity) are never errors; they travel back
/// to the caller as ordinary values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcoError {
    /// No kernel is registered under this name.
    #[error("unknown operation: '{name}'")]
    UnknownOperation { name: String },

    /// Supplied argument count does not match the descriptor.
    #[error("{operation}() takes exactly {expected} argument(s) ({found} given)")]
    Arity {
        operation: &'static str,
        expected: usize,
        found: usize,
    },

    /// An argument could not be coerced to a double.
    #[error("{operation}() argument {position} must be a real number, not {found}")]
    NonNumeric {
        operation: &'static str,
        /// 1-based argument position.
        position: usize,
        found: String,
    },

    /// Registry construction saw the same external name twice.
    #[error("duplicate operation in registry: '{name}'")]
    DuplicateOperation { name: &'static str },

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),
}

impl CalcoError {
    /// True for failures caused by how a caller invoked an operation
    /// (as opposed to registry or configuration setup).
    pub fn is_call_contract(&self) -> bool {
        matches!(
            self,
            Self::UnknownOperation { .. } | Self::Arity { .. } | Self::NonNumeric { .. }
        )
    }
}

pub type CalcoResult<T> = Result<T, CalcoError>;
