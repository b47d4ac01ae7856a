//! charseq: encode operations as character sequences and execute them.
//!
//! # Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use charseq_lib::{Sequencer, Value};
//!
//! let calls = Rc::new(RefCell::new(Vec::new()));
//! let sink = calls.clone();
//!
//! let mut seq = Sequencer::new();
//! seq.register_operation('A', move |args: &[Option<Value>]| sink.borrow_mut().push(args.len()));
//! seq.register_values([('a', 30), ('b', 20)]);
//!
//! let id = seq.append('A', ['a', 'a', 'b']);
//! assert!(id.is_some());
//! assert_eq!(seq.sequence(), "Aaab");
//!
//! assert_eq!(seq.execute(None), Some(1));
//! assert_eq!(*calls.borrow(), vec![3]);
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod diagnostics;
pub mod policy;
pub mod sequencer;
pub mod validate;

#[cfg(test)]
mod config_tests;
#[cfg(test)]
mod validate_tests;

pub use config::{CONFIG_KEYS, Config, ConfigError, ConfigResult};
pub use diagnostics::{
    DiagnosticKind, DiagnosticMessage, Diagnostics, DiagnosticsPrinter, ErrorCategory, Severity,
};
pub use policy::{Mode, Policy};
pub use sequencer::{NO_VALUES, Sequencer};
pub use validate::Violation;

pub use charseq_codec::{OpRecord, RecordId, Sequence, SequenceModel};
pub use charseq_core::{
    Callback, Code, Colors, LabelRegistry, OperationRegistry, Symbol, Value, ValueRegistry,
    callback,
};
pub use charseq_vm::{ArgResolution, ExecStats, NoopTracer, PrintTracer, Tracer, Verbosity};
