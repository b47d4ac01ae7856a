//! Dispatch of operations to registered callbacks.

use serde::Serialize;

use charseq_codec::{OpRecord, Scanner, Segment};
use charseq_core::{Code, OperationRegistry, Registries, Value, ValueRegistry};

use super::resolve::ArgResolution;
use super::trace::{NoopTracer, Tracer};

/// Counters from one run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ExecStats {
    /// Operations whose callback was called.
    pub invoked: usize,
    /// Operations with no registered callback.
    pub skipped: usize,
}

/// Executes records or raw sequences against borrowed registries.
///
/// Execution is synchronous: each callback returns before the next operation
/// is looked at. One operation never affects whether another runs. A
/// panicking callback unwinds through the executor.
pub struct Executor<'r> {
    operations: &'r mut OperationRegistry,
    values: &'r ValueRegistry,
    resolution: ArgResolution,
}

impl<'r> Executor<'r> {
    pub fn new(operations: &'r mut OperationRegistry, values: &'r ValueRegistry) -> Self {
        Self {
            operations,
            values,
            resolution: ArgResolution::default(),
        }
    }

    pub fn resolution(mut self, resolution: ArgResolution) -> Self {
        self.resolution = resolution;
        self
    }

    /// Run model records using their pre-resolved argument codes.
    pub fn run_records(&mut self, records: &[OpRecord]) -> ExecStats {
        self.run_records_with(records, &mut NoopTracer)
    }

    pub fn run_records_with<T: Tracer>(&mut self, records: &[OpRecord], tracer: &mut T) -> ExecStats {
        let mut stats = ExecStats::default();
        for (index, record) in records.iter().enumerate() {
            self.step(index, record.operation, &record.arguments, tracer, &mut stats);
        }
        stats
    }

    /// Run a sequence parsed on the fly. Registries are not modified, so
    /// unknown argument codes resolve to `None`.
    pub fn run_sequence(&mut self, units: &[u16]) -> ExecStats {
        self.run_sequence_with(units, &mut NoopTracer)
    }

    pub fn run_sequence_with<T: Tracer>(&mut self, units: &[u16], tracer: &mut T) -> ExecStats {
        let space = Registries::new(&*self.operations, self.values);
        let leading = Scanner::leading_unowned(units, &space);
        let segments: Vec<Segment> = Scanner::new(units, space).collect();

        if leading > 0 {
            tracer.trace_unowned(0..leading);
        }

        let mut stats = ExecStats::default();
        for (index, segment) in segments.iter().enumerate() {
            let arguments: Vec<Code> = units[segment.arguments.clone()]
                .iter()
                .copied()
                .map(Code)
                .collect();
            self.step(index, segment.operation, &arguments, tracer, &mut stats);
        }
        stats
    }

    /// Resolve argument codes under the configured policy.
    pub fn resolve_arguments(&self, arguments: &[Code]) -> Vec<Option<Value>> {
        arguments
            .iter()
            .map(|&code| self.resolution.resolve(self.values, code))
            .collect()
    }

    fn step<T: Tracer>(
        &mut self,
        index: usize,
        operation: Code,
        arguments: &[Code],
        tracer: &mut T,
        stats: &mut ExecStats,
    ) {
        if !self.operations.contains(operation) {
            tracer.trace_skip(index, operation);
            stats.skipped += 1;
            return;
        }

        let resolved = self.resolve_arguments(arguments);
        tracer.trace_invoke(index, operation, arguments, &resolved);
        if let Some(callback) = self.operations.get_mut(operation) {
            callback(resolved.as_slice());
            stats.invoked += 1;
        }
    }
}
