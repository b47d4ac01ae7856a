//! Error policy: turns violations into reports.
//!
//! Lenient mode reports warnings and lets the caller proceed where it can.
//! Strict mode reports errors and the caller refuses to act.

use tracing::{debug, error, warn};

use crate::diagnostics::{Diagnostics, Severity};
use crate::validate::Violation;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Lenient,
    Strict,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Policy {
    pub mode: Mode,
    /// Drop lenient-mode warnings instead of reporting them.
    pub ignore_warnings: bool,
}

impl Policy {
    pub fn new(mode: Mode, ignore_warnings: bool) -> Self {
        Self {
            mode,
            ignore_warnings,
        }
    }

    pub fn strict() -> Self {
        Self::new(Mode::Strict, false)
    }

    pub fn is_strict(&self) -> bool {
        self.mode == Mode::Strict
    }

    pub fn severity(&self) -> Severity {
        match self.mode {
            Mode::Lenient => Severity::Warning,
            Mode::Strict => Severity::Error,
        }
    }

    /// Report a violation at the policy's severity.
    ///
    /// Returns whether the caller should still perform the action.
    pub fn report(&self, diagnostics: &mut Diagnostics, violation: Violation) -> bool {
        let severity = self.severity();
        let message = violation.to_string();
        let category = violation.kind.category();

        if severity == Severity::Warning && self.ignore_warnings {
            debug!(target: "charseq::policy", kind = ?violation.kind, %category, "suppressed: {message}");
            return true;
        }

        match severity {
            Severity::Error => {
                error!(target: "charseq::policy", kind = ?violation.kind, %category, "{message}")
            }
            Severity::Warning => {
                warn!(target: "charseq::policy", kind = ?violation.kind, %category, "{message}")
            }
        }

        let mut builder = diagnostics.report(violation.kind).severity(severity);
        if let Some(detail) = violation.detail {
            builder = builder.message(detail);
        }
        if let Some(span) = violation.span {
            builder = builder.span(span);
        }
        if let Some(hint) = violation.hint {
            builder = builder.hint(hint);
        }
        builder.emit();

        !self.is_strict()
    }
}
