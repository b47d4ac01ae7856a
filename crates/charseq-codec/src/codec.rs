//! Conversion between operation records and sequences.

use std::ops::Range;

use charseq_core::{Code, CodeClass, CodeSpace};

use crate::model::OpRecord;
use crate::scan::Scanner;
use crate::Sequence;

/// Serialize records: each operation code followed by its argument codes.
pub fn encode(records: &[OpRecord]) -> Sequence {
    records
        .iter()
        .flat_map(|r| std::iter::once(r.operation).chain(r.arguments.iter().copied()))
        .collect()
}

/// A record recovered from a sequence, before it receives an id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedRecord {
    pub operation: Code,
    pub arguments: Vec<Code>,
    /// Positions this record occupied in the decoded sequence.
    pub span: Range<usize>,
}

/// Result of decoding a sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Decoded {
    pub records: Vec<DecodedRecord>,
    /// Argument codes that were neither operations nor values, deduplicated
    /// in first-seen order. Callers register these as null values so the
    /// same codes decode as known values next time.
    pub registered: Vec<Code>,
    /// Leading positions that preceded the first operation and were dropped.
    pub dropped: Range<usize>,
}

impl Decoded {
    pub fn into_pairs(self) -> impl Iterator<Item = (Code, Vec<Code>)> {
        self.records.into_iter().map(|r| (r.operation, r.arguments))
    }
}

/// Parse a sequence against a code space.
///
/// Unknown operation codes start no record. Unknown argument codes are kept
/// as arguments and reported in [`Decoded::registered`]. The code space is
/// not modified.
pub fn decode<S: CodeSpace>(units: &[u16], space: S) -> Decoded {
    let leading = Scanner::leading_unowned(units, &space);
    let mut decoded = Decoded {
        dropped: 0..leading,
        ..Decoded::default()
    };

    for segment in Scanner::new(units, &space) {
        let arguments: Vec<Code> = units[segment.arguments.clone()]
            .iter()
            .copied()
            .map(Code)
            .collect();

        for &code in &arguments {
            if space.classify(code) == CodeClass::Unknown && !decoded.registered.contains(&code) {
                decoded.registered.push(code);
            }
        }

        decoded.records.push(DecodedRecord {
            operation: segment.operation,
            span: segment.span(),
            arguments,
        });
    }

    decoded
}
