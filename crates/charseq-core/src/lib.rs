#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for charseq.
//!
//! Three layers:
//! - **Codes**: the shared 16-bit namespace of operation and value identifiers
//! - **Symbols**: user-facing identifiers (one character or an integer) and
//!   their resolution to codes
//! - **Registries**: code-keyed stores for callbacks, values and labels

mod code;
mod colors;
mod registry;
mod symbol;
mod value;

#[cfg(test)]
mod symbol_tests;

pub use code::{Code, MAX_CODE};
pub use colors::Colors;
pub use registry::{
    Callback, CodeClass, CodeSpace, LabelRegistry, OperationRegistry, Registries, ValueRegistry,
    callback,
};
pub use symbol::{Symbol, SymbolType, classify, resolve_to_code};
pub use value::Value;
