//! The public facade: registries, model, codec and executor behind one type.
//!
//! Every public method validates its input, hands violations to the policy,
//! and returns a sentinel (`false`, `None`) when the action did not happen.
//! Nothing here panics on bad input.

use std::num::NonZeroUsize;

use charseq_codec::{OpRecord, RecordId, Sequence, SequenceModel, decode, dump};
use charseq_core::{
    Callback, Code, Colors, LabelRegistry, OperationRegistry, Registries, Symbol, Value,
    ValueRegistry, callback,
};
use charseq_vm::{ArgResolution, ExecStats, Executor, NoopTracer, Tracer};
use tracing::debug;

use crate::config::Config;
use crate::diagnostics::Diagnostics;
use crate::policy::{Mode, Policy};
use crate::validate::{self, Violation};

/// Empty argument list for [`Sequencer::append`] and friends.
pub const NO_VALUES: [Symbol; 0] = [];

pub struct Sequencer {
    operations: OperationRegistry,
    values: ValueRegistry,
    labels: LabelRegistry,
    model: SequenceModel,
    max_sequence_length: Option<NonZeroUsize>,
    policy: Policy,
    resolution: ArgResolution,
    diagnostics: Diagnostics,
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Sequencer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sequencer")
            .field("operations", &self.operations)
            .field("values", &self.values)
            .field("labels", &self.labels)
            .field("sequence", self.model.sequence())
            .field("max_sequence_length", &self.max_sequence_length)
            .field("policy", &self.policy)
            .field("resolution", &self.resolution)
            .finish()
    }
}

impl Sequencer {
    /// Lenient sequencer with empty registries and no length limit.
    pub fn new() -> Self {
        Self {
            operations: OperationRegistry::new(),
            values: ValueRegistry::new(),
            labels: LabelRegistry::new(),
            model: SequenceModel::new(),
            max_sequence_length: None,
            policy: Policy::default(),
            resolution: ArgResolution::default(),
            diagnostics: Diagnostics::new(),
        }
    }

    /// Build from a config. Malformed fields are reported and skipped.
    ///
    /// Policy flags apply first so that every later report uses them. The
    /// sequence is set last, after the registries it is decoded against.
    pub fn with_config(config: Config) -> Self {
        let mode = if config.strict_mode {
            Mode::Strict
        } else {
            Mode::Lenient
        };
        let mut seq = Self {
            policy: Policy::new(mode, config.ignore_warnings),
            resolution: config.argument_resolution,
            ..Self::new()
        };

        for issue in config.issues {
            seq.report(issue);
        }
        if let Some(max) = config.max_sequence_length {
            seq.set_max_sequence_length(max);
        }
        seq.register_operations(config.operations);
        seq.register_values(config.values);
        seq.register_labels(config.labels);
        if let Some(sequence) = config.sequence {
            seq.set_sequence(sequence);
        }
        seq
    }

    fn report(&mut self, violation: Violation) -> bool {
        self.policy.report(&mut self.diagnostics, violation)
    }

    fn code_or_report(&mut self, symbol: &Symbol) -> Option<Code> {
        validate::symbol_code(symbol)
            .map_err(|v| self.report(v))
            .ok()
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn is_strict(&self) -> bool {
        self.policy.is_strict()
    }

    pub fn resolution(&self) -> ArgResolution {
        self.resolution
    }

    pub fn set_resolution(&mut self, resolution: ArgResolution) {
        self.resolution = resolution;
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Move reported diagnostics out of the sequencer.
    pub fn take_diagnostics(&mut self) -> Diagnostics {
        self.diagnostics.take()
    }

    // Operations

    pub fn register_operation<F>(&mut self, symbol: impl Into<Symbol>, f: F) -> bool
    where
        F: FnMut(&[Option<Value>]) + 'static,
    {
        self.register_callback(symbol.into(), callback(f))
    }

    fn register_callback(&mut self, symbol: Symbol, callback: Callback) -> bool {
        let Some(code) = self.code_or_report(&symbol) else {
            return false;
        };
        self.operations.insert(code, callback);
        true
    }

    /// Register entries in order. Returns whether every entry was accepted.
    pub fn register_operations<I, S>(&mut self, entries: I) -> bool
    where
        I: IntoIterator<Item = (S, Callback)>,
        S: Into<Symbol>,
    {
        entries
            .into_iter()
            .fold(true, |ok, (symbol, cb)| self.register_callback(symbol.into(), cb) && ok)
    }

    pub fn set_operations<I, S>(&mut self, entries: I) -> bool
    where
        I: IntoIterator<Item = (S, Callback)>,
        S: Into<Symbol>,
    {
        self.operations.clear();
        self.register_operations(entries)
    }

    pub fn operations(&self) -> &OperationRegistry {
        &self.operations
    }

    // Values

    pub fn register_value(&mut self, symbol: impl Into<Symbol>, value: impl Into<Value>) -> bool {
        let Some(code) = self.code_or_report(&symbol.into()) else {
            return false;
        };
        self.values.insert(code, value.into());
        true
    }

    pub fn register_values<I, S, V>(&mut self, entries: I) -> bool
    where
        I: IntoIterator<Item = (S, V)>,
        S: Into<Symbol>,
        V: Into<Value>,
    {
        entries
            .into_iter()
            .fold(true, |ok, (symbol, value)| self.register_value(symbol, value) && ok)
    }

    pub fn set_values<I, S, V>(&mut self, entries: I) -> bool
    where
        I: IntoIterator<Item = (S, V)>,
        S: Into<Symbol>,
        V: Into<Value>,
    {
        self.values.clear();
        self.register_values(entries)
    }

    pub fn values(&self) -> &ValueRegistry {
        &self.values
    }

    /// Character of the first code registered with an equal value.
    ///
    /// `None` also for codes that are lone surrogates.
    pub fn char_for_value(&self, value: &Value) -> Option<char> {
        self.char_code_for_value(value).and_then(Code::to_char)
    }

    pub fn char_code_for_value(&self, value: &Value) -> Option<Code> {
        self.values.code_for(value)
    }

    // Labels

    pub fn register_label(&mut self, label: impl Into<String>, symbol: impl Into<Symbol>) -> bool {
        let Some(code) = self.code_or_report(&symbol.into()) else {
            return false;
        };
        self.labels.insert(label, code);
        true
    }

    pub fn register_labels<I, L, S>(&mut self, entries: I) -> bool
    where
        I: IntoIterator<Item = (L, S)>,
        L: Into<String>,
        S: Into<Symbol>,
    {
        entries
            .into_iter()
            .fold(true, |ok, (label, symbol)| self.register_label(label, symbol) && ok)
    }

    pub fn set_labels<I, L, S>(&mut self, entries: I) -> bool
    where
        I: IntoIterator<Item = (L, S)>,
        L: Into<String>,
        S: Into<Symbol>,
    {
        self.labels.clear();
        self.register_labels(entries)
    }

    pub fn labels(&self) -> &LabelRegistry {
        &self.labels
    }

    pub fn char_for_label(&self, label: &str) -> Option<char> {
        self.char_code_for_label(label).and_then(Code::to_char)
    }

    pub fn char_code_for_label(&self, label: &str) -> Option<Code> {
        self.labels.get(label)
    }

    // Model

    fn validate_record<I>(&mut self, operation: Symbol, values: I) -> Option<(Code, Vec<Code>)>
    where
        I: IntoIterator,
        I::Item: Into<Symbol>,
    {
        let operation = self.code_or_report(&operation)?;
        let symbols: Vec<Symbol> = values.into_iter().map(Into::into).collect();
        let arguments = validate::symbol_codes(&symbols)
            .map_err(|v| self.report(v))
            .ok()?;
        Some((operation, arguments))
    }

    /// Add a record at the end. Returns its id.
    pub fn append<I>(&mut self, operation: impl Into<Symbol>, values: I) -> Option<RecordId>
    where
        I: IntoIterator,
        I::Item: Into<Symbol>,
    {
        let (op, args) = self.validate_record(operation.into(), values)?;
        Some(self.model.append(op, args))
    }

    /// Add a record at `index`. An index past the end appends.
    pub fn insert<I>(
        &mut self,
        index: usize,
        operation: impl Into<Symbol>,
        values: I,
    ) -> Option<RecordId>
    where
        I: IntoIterator,
        I::Item: Into<Symbol>,
    {
        let (op, args) = self.validate_record(operation.into(), values)?;
        Some(self.model.insert(index, op, args))
    }

    pub fn prepend<I>(&mut self, operation: impl Into<Symbol>, values: I) -> Option<RecordId>
    where
        I: IntoIterator,
        I::Item: Into<Symbol>,
    {
        let (op, args) = self.validate_record(operation.into(), values)?;
        Some(self.model.prepend(op, args))
    }

    pub fn remove(&mut self, id: RecordId) -> bool {
        if let Err(v) = validate::record_index(&self.model, id) {
            self.report(v);
            return false;
        }
        self.model.remove(id).is_some()
    }

    /// Current position of a record.
    pub fn index(&mut self, id: RecordId) -> Option<usize> {
        validate::record_index(&self.model, id)
            .map_err(|v| self.report(v))
            .ok()
    }

    pub fn record(&self, id: RecordId) -> Option<&OpRecord> {
        self.model.get(id)
    }

    // Codec

    /// Replace the model by decoding `sequence`.
    ///
    /// Argument codes that are neither operations nor values are registered
    /// as `Null` values. In strict mode an over-long sequence is refused and
    /// nothing changes.
    pub fn set_sequence(&mut self, sequence: impl Into<Sequence>) -> bool {
        let sequence = sequence.into();
        if let Err(v) = validate::sequence_length(sequence.len(), self.max_sequence_length) {
            if !self.report(v) {
                return false;
            }
        }

        let decoded = decode(
            sequence.as_units(),
            Registries::new(&self.operations, &self.values),
        );
        debug!(
            target: "charseq::codec",
            records = decoded.records.len(),
            registered = decoded.registered.len(),
            dropped = decoded.dropped.len(),
            "sequence decoded"
        );

        for &code in &decoded.registered {
            self.values.insert(code, Value::Null);
        }
        self.model.replace(decoded.into_pairs());
        true
    }

    pub fn sequence(&self) -> &Sequence {
        self.model.sequence()
    }

    pub fn sequence_data(&self) -> &[OpRecord] {
        self.model.records()
    }

    pub fn model(&self) -> &SequenceModel {
        &self.model
    }

    /// Set the length limit. Zero is rejected and reported.
    ///
    /// Only sequences set or executed later are checked.
    pub fn set_max_sequence_length(&mut self, max: usize) -> bool {
        match validate::max_length(max) {
            Ok(max) => {
                self.max_sequence_length = Some(max);
                true
            }
            Err(v) => {
                self.report(v);
                false
            }
        }
    }

    pub fn clear_max_sequence_length(&mut self) {
        self.max_sequence_length = None;
    }

    pub fn max_sequence_length(&self) -> Option<usize> {
        self.max_sequence_length.map(NonZeroUsize::get)
    }

    // Execution

    /// Execute the given sequence, or the model when `None`.
    ///
    /// Returns the number of callbacks invoked, or `None` when the policy
    /// blocked execution. A given sequence is parsed read-only: unknown
    /// argument codes reach callbacks as `None` and are not registered.
    pub fn execute(&mut self, sequence: Option<&Sequence>) -> Option<usize> {
        self.execute_with(sequence, &mut NoopTracer)
            .map(|stats| stats.invoked)
    }

    pub fn execute_with<T: Tracer>(
        &mut self,
        sequence: Option<&Sequence>,
        tracer: &mut T,
    ) -> Option<ExecStats> {
        let len = sequence.map_or(self.model.sequence().len(), Sequence::len);

        if let Err(v) = validate::sequence_length(len, self.max_sequence_length) {
            if !self.report(v) {
                return None;
            }
        }

        if let Err(v) = validate::non_empty(len) {
            if self.is_strict() {
                self.report(v);
                return None;
            }
            return Some(ExecStats::default());
        }

        let mut executor =
            Executor::new(&mut self.operations, &self.values).resolution(self.resolution);
        let stats = match sequence {
            Some(sequence) => executor.run_sequence_with(sequence.as_units(), tracer),
            None => executor.run_records_with(self.model.records(), tracer),
        };
        debug!(
            target: "charseq::exec",
            invoked = stats.invoked,
            skipped = stats.skipped,
            "sequence executed"
        );
        Some(stats)
    }

    /// Readable listing of the model's records.
    pub fn dump(&self, colors: Colors) -> String {
        dump(self.model.records(), &self.labels, colors)
    }
}
