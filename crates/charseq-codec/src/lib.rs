//! Sequence model and string codec for charseq.
//!
//! This crate contains:
//! - `Sequence`: the UTF-16 string projection of a sequence model
//! - `OpRecord` / `SequenceModel`: the ordered records that are the source of truth
//! - `Scanner`, `encode`, `decode`: the bidirectional mapping between the two
//! - `dump`: human-readable record listing

mod codec;
mod dump;
mod model;
mod scan;
mod sequence;

#[cfg(test)]
mod sequence_tests;

pub use codec::{Decoded, DecodedRecord, decode, encode};
pub use dump::{dump, glyph};
pub use model::{OpRecord, RecordId, SequenceModel};
pub use scan::{Scanner, Segment};
pub use sequence::{Sequence, SequenceError};
