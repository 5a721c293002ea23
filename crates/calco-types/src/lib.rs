// ─────────────────────────────────────────────────────────────────────
// Calco — Math Kernel Types
// (C) 2026 The Calco Authors. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Type definitions, configuration, and error hierarchy for the
//! Calco math kernel, the name-addressed double-precision engine.

pub mod config;
pub mod descriptor;
pub mod error;
pub mod value;

pub use config::DispatchConfig;
pub use descriptor::{Arity, Category, Domain, Expect, SpecialCase};
pub use error::{CalcoError, CalcoResult};
pub use value::{CallOutcome, HostValue};
