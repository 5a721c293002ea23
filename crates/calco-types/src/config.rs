// ─────────────────────────────────────────────────────────────────────
// Calco — Dispatch Configuration
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

use crate::error::{CalcoError, CalcoResult};

/// Runtime configuration for the dispatch layer.
///
/// Only argument coercion is configurable. Kernels have no knobs: their
/// semantics are fixed by the operation table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DispatchConfig {
    /// Accept host strings that parse as a number ("2.5", " 1e3 ", "inf").
    /// Default: true.
    pub coerce_strings: bool,

    /// Accept host booleans as 1.0 / 0.0.
    /// Default: true (a Python `bool` is an `int`).
    pub coerce_bools: bool,

    /// Longest string the coercer will attempt to parse, in bytes.
    /// Default: 512.
    pub max_numeric_str_len: usize,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            coerce_strings: true,
            coerce_bools: true,
            max_numeric_str_len: 512,
        }
    }
}

impl DispatchConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> CalcoResult<()> {
        if self.max_numeric_str_len == 0 {
            return Err(CalcoError::Config(
                "max_numeric_str_len must be >= 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Load from JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> CalcoResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| CalcoError::Config(format!("JSON parse error: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}
