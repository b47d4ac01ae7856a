//! Left-to-right segmentation of a sequence into operations.
//!
//! Shared by decoding (which stores the segments as records) and string
//! execution (which runs them directly). A segment starts at every operation
//! code and extends over the following non-operation codes. Codes before the
//! first operation belong to no segment.

use std::ops::Range;

use charseq_core::{Code, CodeSpace};

/// One operation occurrence in a sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub operation: Code,
    /// Position of the operation code.
    pub start: usize,
    /// Positions of the argument codes.
    pub arguments: Range<usize>,
}

impl Segment {
    /// Positions covered by operation and arguments.
    pub fn span(&self) -> Range<usize> {
        self.start..self.arguments.end
    }
}

/// Iterator over the segments of a code-unit slice.
pub struct Scanner<'s, S> {
    units: &'s [u16],
    pos: usize,
    space: S,
}

impl<'s, S: CodeSpace> Scanner<'s, S> {
    pub fn new(units: &'s [u16], space: S) -> Self {
        Self {
            units,
            pos: 0,
            space,
        }
    }

    /// Number of leading units that precede the first operation.
    pub fn leading_unowned(units: &[u16], space: &S) -> usize {
        units
            .iter()
            .position(|&u| space.is_operation(Code(u)))
            .unwrap_or(units.len())
    }

    fn is_operation(&self, pos: usize) -> bool {
        self.space.is_operation(Code(self.units[pos]))
    }
}

impl<S: CodeSpace> Iterator for Scanner<'_, S> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        while self.pos < self.units.len() && !self.is_operation(self.pos) {
            self.pos += 1;
        }
        if self.pos >= self.units.len() {
            return None;
        }

        let start = self.pos;
        self.pos += 1;
        while self.pos < self.units.len() && !self.is_operation(self.pos) {
            self.pos += 1;
        }

        Some(Segment {
            operation: Code(self.units[start]),
            start,
            arguments: start + 1..self.pos,
        })
    }
}
