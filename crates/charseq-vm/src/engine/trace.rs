//! Tracing infrastructure for debugging execution.
//!
//! `NoopTracer` methods are empty `#[inline(always)]` functions, so the
//! untraced entry points compile to the bare loop. `PrintTracer` collects one
//! line per event for display.

use std::ops::Range;

use charseq_codec::glyph;
use charseq_core::{Code, Colors, Value};

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Invocations and skips.
    #[default]
    Default,
    /// Also argument codes next to their values, and dropped leading codes.
    Verbose,
}

/// Observer for executor steps.
///
/// - `trace_invoke` - before a callback runs, with its resolved arguments
/// - `trace_skip` - an operation with no registered callback
/// - `trace_unowned` - leading codes of a raw sequence that start no operation
pub trait Tracer {
    fn trace_invoke(
        &mut self,
        index: usize,
        operation: Code,
        arguments: &[Code],
        resolved: &[Option<Value>],
    );

    fn trace_skip(&mut self, index: usize, operation: Code);

    fn trace_unowned(&mut self, positions: Range<usize>);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_invoke(
        &mut self,
        _index: usize,
        _operation: Code,
        _arguments: &[Code],
        _resolved: &[Option<Value>],
    ) {
    }

    #[inline(always)]
    fn trace_skip(&mut self, _index: usize, _operation: Code) {}

    #[inline(always)]
    fn trace_unowned(&mut self, _positions: Range<usize>) {}
}

/// Tracer that renders each event as a line of text.
pub struct PrintTracer {
    lines: Vec<String>,
    colors: Colors,
    verbosity: Verbosity,
}

impl PrintTracer {
    pub fn new(colors: Colors, verbosity: Verbosity) -> Self {
        Self {
            lines: Vec::new(),
            colors,
            verbosity,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn render(&self) -> String {
        let mut out = self.lines.join("\n");
        if !out.is_empty() {
            out.push('\n');
        }
        out
    }

    fn format_argument(&self, code: Code, value: Option<&Value>) -> String {
        let c = &self.colors;
        let value = match value {
            Some(v) => v.format(self.colors),
            None => format!("{}-{}", c.dim, c.reset),
        };
        match self.verbosity {
            Verbosity::Default => value,
            Verbosity::Verbose => format!("{}{}={}{}", c.dim, glyph(code), c.reset, value),
        }
    }
}

impl Tracer for PrintTracer {
    fn trace_invoke(
        &mut self,
        index: usize,
        operation: Code,
        arguments: &[Code],
        resolved: &[Option<Value>],
    ) {
        let c = &self.colors;
        let args: Vec<String> = arguments
            .iter()
            .zip(resolved)
            .map(|(&code, value)| self.format_argument(code, value.as_ref()))
            .collect();
        let line = format!(
            "{}{index:>3}{} {}{}{}({})",
            c.dim,
            c.reset,
            c.blue,
            glyph(operation),
            c.reset,
            args.join(", ")
        );
        self.lines.push(line);
    }

    fn trace_skip(&mut self, index: usize, operation: Code) {
        let c = &self.colors;
        self.lines.push(format!(
            "{}{index:>3} {} skipped: no callback{}",
            c.dim,
            glyph(operation),
            c.reset
        ));
    }

    fn trace_unowned(&mut self, positions: Range<usize>) {
        if self.verbosity != Verbosity::Verbose {
            return;
        }
        let c = &self.colors;
        self.lines.push(format!(
            "{}  - dropped {}..{} before first operation{}",
            c.dim, positions.start, positions.end, c.reset
        ));
    }
}
