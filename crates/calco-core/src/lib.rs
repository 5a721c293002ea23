// ─────────────────────────────────────────────────────────────────────
// Calco — Math Kernel Core Engine
// (C) 2026 The Calco Authors. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Double-precision math kernels, the binding registry, and the
//! name/arity dispatcher that exposes them to a dynamic host.
//!
//! # Invariants
//!
//! 1. **Kernels are pure**: every kernel is a plain `fn` over `f64`,
//!    allocation-free, lock-free and bounded-time. Domain violations
//!    answer NaN, poles answer signed Infinity. Kernels never log and
//!    never return `Result`.
//!
//! 2. **Errors are call-contract only**: unknown names, wrong argument
//!    counts and non-numeric arguments are reported as `CalcoError` by
//!    the dispatcher, before any kernel runs. A NaN result is never an
//!    error and an error is never a NaN.
//!
//! 3. **The registry is immutable once built**: `Registry::standard()`
//!    is the single write phase. Shared references to it (or to a
//!    `Dispatcher`) may be read from any number of threads.

pub mod arithmetic;
pub mod dispatch;
pub mod exp_log;
pub mod registry;
pub mod special;
pub mod trig;

pub use dispatch::Dispatcher;
pub use registry::{FunctionDescriptor, Kernel, Registry};
