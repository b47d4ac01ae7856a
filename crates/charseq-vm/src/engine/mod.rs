//! Execution engine.
//!
//! The executor resolves argument codes through the value registry and calls
//! operations synchronously, in sequence order. Tracers observe every step.

mod executor;
mod resolve;
mod trace;

#[cfg(test)]
mod executor_tests;

pub use executor::{ExecStats, Executor};
pub use resolve::ArgResolution;
pub use trace::{NoopTracer, PrintTracer, Tracer, Verbosity};
