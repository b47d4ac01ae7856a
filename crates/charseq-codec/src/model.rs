//! Operation records and the ordered model that owns them.

use std::num::NonZeroU64;

use charseq_core::Code;

use crate::Sequence;
use crate::codec::encode;

/// Stable handle for a record.
///
/// Assigned from 1 upwards at creation and never reused, even after the
/// record is removed or the whole model is replaced.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[repr(transparent)]
pub struct RecordId(NonZeroU64);

impl RecordId {
    pub const FIRST: Self = Self(NonZeroU64::MIN);

    /// Create from a raw id. Returns `None` for 0.
    #[inline]
    pub fn new(raw: u64) -> Option<Self> {
        NonZeroU64::new(raw).map(Self)
    }

    #[inline]
    pub fn get(self) -> u64 {
        self.0.get()
    }

    fn succ(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

/// One operation with its resolved argument codes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpRecord {
    pub id: RecordId,
    pub operation: Code,
    pub arguments: Vec<Code>,
}

impl OpRecord {
    /// Length of this record in the encoded sequence.
    #[inline]
    pub fn encoded_len(&self) -> usize {
        1 + self.arguments.len()
    }
}

/// Ordered operation records plus their derived sequence.
///
/// Every mutation recomputes the sequence, so `sequence()` always equals
/// `encode(records())`.
#[derive(Clone, Debug)]
pub struct SequenceModel {
    records: Vec<OpRecord>,
    next_id: RecordId,
    sequence: Sequence,
}

impl Default for SequenceModel {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceModel {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: RecordId::FIRST,
            sequence: Sequence::new(),
        }
    }

    #[inline]
    pub fn records(&self) -> &[OpRecord] {
        &self.records
    }

    #[inline]
    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The id the next created record will receive.
    pub fn peek_next_id(&self) -> RecordId {
        self.next_id
    }

    pub fn append(&mut self, operation: Code, arguments: Vec<Code>) -> RecordId {
        let index = self.records.len();
        self.insert(index, operation, arguments)
    }

    pub fn prepend(&mut self, operation: Code, arguments: Vec<Code>) -> RecordId {
        self.insert(0, operation, arguments)
    }

    /// Insert at `index`. An index past the end appends.
    pub fn insert(&mut self, index: usize, operation: Code, arguments: Vec<Code>) -> RecordId {
        let record = self.create(operation, arguments);
        let id = record.id;
        let index = index.min(self.records.len());
        self.records.insert(index, record);
        self.recompute();
        id
    }

    pub fn remove(&mut self, id: RecordId) -> Option<OpRecord> {
        let index = self.index(id)?;
        let record = self.records.remove(index);
        self.recompute();
        Some(record)
    }

    /// Current position of the record with `id`.
    pub fn index(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    pub fn get(&self, id: RecordId) -> Option<&OpRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Drop every record and rebuild from `(operation, arguments)` pairs.
    ///
    /// New records get fresh ids; the id counter is not reset.
    pub fn replace<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = (Code, Vec<Code>)>,
    {
        self.records.clear();
        for (operation, arguments) in records {
            let record = self.create(operation, arguments);
            self.records.push(record);
        }
        self.recompute();
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.recompute();
    }

    fn create(&mut self, operation: Code, arguments: Vec<Code>) -> OpRecord {
        let id = self.next_id;
        self.next_id = id.succ();
        OpRecord {
            id,
            operation,
            arguments,
        }
    }

    fn recompute(&mut self) {
        self.sequence = encode(&self.records);
    }
}
