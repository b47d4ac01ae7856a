//! Builder-pattern printer for rendering diagnostics.

use std::fmt::Write;
use std::ops::Range;

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};

use super::collection::Diagnostics;
use super::message::Severity;

/// Builder for rendering diagnostics with various options.
///
/// Spans count UTF-16 code units. With a source attached, they are mapped onto
/// the source text so non-ASCII sequences underline the right characters.
pub struct DiagnosticsPrinter<'d, 's> {
    diagnostics: &'d Diagnostics,
    source: Option<&'s str>,
    path: Option<&'s str>,
    colored: bool,
}

impl<'d, 's> DiagnosticsPrinter<'d, 's> {
    pub fn new(diagnostics: &'d Diagnostics) -> Self {
        Self {
            diagnostics,
            source: None,
            path: None,
            colored: false,
        }
    }

    pub fn source(mut self, source: &'s str) -> Self {
        self.source = Some(source);
        self
    }

    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let Some(source) = self.source else {
            return self.format_plain(w);
        };

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        for (i, diag) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                w.write_char('\n')?;
            }

            let Some(span) = &diag.span else {
                write!(w, "{}", diag)?;
                continue;
            };

            let range = byte_range(source, span.clone());
            let mut snippet = Snippet::source(source)
                .line_start(1)
                .annotation(AnnotationKind::Primary.span(range).label(&diag.message));

            if let Some(p) = self.path {
                snippet = snippet.path(p);
            }

            let level = severity_to_level(diag.severity);
            let title = format!("{}: {}", diag.kind.category(), diag.message);
            let report: Vec<Group> = vec![level.primary_title(&title).element(snippet)];

            write!(w, "{}", renderer.render(&report))?;
            for hint in &diag.hints {
                write!(w, "\n  = help: {}", hint)?;
            }
        }

        Ok(())
    }

    fn format_plain(&self, w: &mut impl Write) -> std::fmt::Result {
        for (i, diag) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                w.write_char('\n')?;
            }
            write!(w, "{}", diag)?;
        }
        Ok(())
    }
}

fn severity_to_level(severity: Severity) -> Level<'static> {
    match severity {
        Severity::Error => Level::ERROR,
        Severity::Warning => Level::WARNING,
    }
}

/// Map a code-unit span onto byte offsets of `source`.
///
/// Zero-width spans widen to one character. Out-of-range ends clamp to the
/// source length.
fn byte_range(source: &str, span: Range<usize>) -> Range<usize> {
    let mut start = source.len();
    let mut end = source.len();
    let mut unit = 0;
    for (byte, ch) in source.char_indices() {
        if unit == span.start {
            start = byte;
        }
        if unit == span.end {
            end = byte;
            break;
        }
        unit += ch.len_utf16();
    }

    if start >= end {
        let width = source[start..].chars().next().map_or(0, char::len_utf8);
        return start..start + width;
    }

    start..end
}

impl Diagnostics {
    pub fn printer(&self) -> DiagnosticsPrinter<'_, '_> {
        DiagnosticsPrinter::new(self)
    }
}
