// ─────────────────────────────────────────────────────────────────────
// Calco — Dispatcher
// ─────────────────────────────────────────────────────────────────────
//! Name lookup, arity check, argument coercion and the typed call.
//!
//! This is the only place host-side values become doubles. A malformed
//! call (unknown name, wrong argument count, non-numeric argument) is a
//! `CalcoError`; a well-formed call always answers, NaN included.

use calco_types::{CalcoError, CalcoResult, CallOutcome, DispatchConfig, HostValue};

use crate::registry::{FunctionDescriptor, Registry};

/// Widest kernel signature in the registry.
const MAX_ARGS: usize = 3;

/// Characters of a rejected string echoed back in the error.
const REJECTED_STR_PREVIEW: usize = 32;

/// Stateless front door over an immutable [`Registry`].
#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: Registry,
    config: DispatchConfig,
}

impl Dispatcher {
    pub fn new(registry: Registry, config: DispatchConfig) -> CalcoResult<Self> {
        config.validate()?;
        Ok(Self { registry, config })
    }

    /// Standard registry with default coercion rules.
    pub fn standard() -> CalcoResult<Self> {
        Self::new(Registry::standard()?, DispatchConfig::default())
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Call `name` with host-side arguments.
    pub fn call(&self, name: &str, args: &[HostValue]) -> CalcoResult<CallOutcome> {
        let descriptor = self.lookup(name)?;
        let arity = Self::check_arity(descriptor, args.len())?;

        let mut buf = [0.0f64; MAX_ARGS];
        for (i, (slot, value)) in buf.iter_mut().zip(args).enumerate() {
            *slot = self.coerce(descriptor.name, i + 1, value).inspect_err(|e| {
                log::debug!("{}: rejected call: {e}", descriptor.name);
            })?;
        }

        Self::invoke(descriptor, &buf[..arity])
    }

    /// Typed path for Rust callers; skips coercion.
    pub fn call_f64(&self, name: &str, args: &[f64]) -> CalcoResult<CallOutcome> {
        let descriptor = self.lookup(name)?;
        Self::check_arity(descriptor, args.len())?;
        Self::invoke(descriptor, args)
    }

    fn lookup(&self, name: &str) -> CalcoResult<&FunctionDescriptor> {
        self.registry.get(name).ok_or_else(|| {
            log::debug!("rejected call to unknown operation '{name}'");
            CalcoError::UnknownOperation {
                name: name.to_string(),
            }
        })
    }

    fn check_arity(descriptor: &FunctionDescriptor, found: usize) -> CalcoResult<usize> {
        let expected = descriptor.arity().count();
        if found != expected {
            let err = CalcoError::Arity {
                operation: descriptor.name,
                expected,
                found,
            };
            log::debug!("{}: rejected call: {err}", descriptor.name);
            return Err(err);
        }
        Ok(expected)
    }

    fn invoke(descriptor: &FunctionDescriptor, args: &[f64]) -> CalcoResult<CallOutcome> {
        let outcome = descriptor
            .kernel
            .invoke(args)
            .ok_or(CalcoError::Arity {
                operation: descriptor.name,
                expected: descriptor.arity().count(),
                found: args.len(),
            })?;
        log::trace!("{}({args:?}) = {outcome}", descriptor.name);
        Ok(outcome)
    }

    /// Host value → double, per the configured coercion rules.
    fn coerce(&self, operation: &'static str, position: usize, value: &HostValue) -> CalcoResult<f64> {
        let reject = |found: String| CalcoError::NonNumeric {
            operation,
            position,
            found,
        };
        match value {
            HostValue::Float(v) => Ok(*v),
            HostValue::Int(i) => Ok(*i as f64),
            HostValue::Bool(b) if self.config.coerce_bools => Ok(if *b { 1.0 } else { 0.0 }),
            HostValue::Str(s) if self.config.coerce_strings => {
                if s.len() > self.config.max_numeric_str_len {
                    return Err(reject(format!("str of length {}", s.len())));
                }
                s.trim().parse::<f64>().map_err(|_| {
                    let preview: String = s.chars().take(REJECTED_STR_PREVIEW).collect();
                    reject(format!("str '{preview}'"))
                })
            }
            other => Err(reject(other.type_name().to_string())),
        }
    }
}
