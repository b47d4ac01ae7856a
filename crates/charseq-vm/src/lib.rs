//! Executor for charseq sequences.
//!
//! This crate walks a sequence model (or a raw sequence) and invokes the
//! registered callback of every operation with its resolved arguments.

pub mod engine;

pub use engine::{
    ArgResolution, ExecStats, Executor, NoopTracer, PrintTracer, Tracer, Verbosity,
};
