//! Diagnostics reported by the validation layer.
//!
//! Every detected condition becomes a [`DiagnosticMessage`] whose severity the
//! error policy picks: errors block the operation, warnings let it proceed.

mod collection;
mod message;
mod printer;


use std::ops::Range;

pub use collection::Diagnostics;
pub use message::{DiagnosticKind, DiagnosticMessage, ErrorCategory, Severity};
pub use printer::DiagnosticsPrinter;

#[must_use = "diagnostic not emitted, call .emit()"]
pub struct DiagnosticBuilder<'a> {
    diagnostics: &'a mut Diagnostics,
    message: DiagnosticMessage,
}

impl Diagnostics {
    /// Create an error diagnostic with the kind's default message.
    ///
    /// Call `.message()` on the builder to add detail, `.severity()` to downgrade.
    pub fn report(&mut self, kind: DiagnosticKind) -> DiagnosticBuilder<'_> {
        DiagnosticBuilder {
            diagnostics: self,
            message: DiagnosticMessage::new(kind, Severity::Error, kind.fallback_message()),
        }
    }
}

impl<'a> DiagnosticBuilder<'a> {
    /// Provide custom detail for this diagnostic, rendered using the kind's template.
    pub fn message(mut self, detail: impl Into<String>) -> Self {
        let detail = detail.into();
        self.message.message = self.message.kind.message(Some(&detail));
        self
    }

    pub fn severity(mut self, severity: Severity) -> Self {
        self.message.severity = severity;
        self
    }

    pub fn span(mut self, span: Range<usize>) -> Self {
        self.message.span = Some(span);
        self
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.message.hints.push(hint.into());
        self
    }

    pub fn emit(self) {
        self.diagnostics.push(self.message);
    }
}
