//! Detection of invalid input.
//!
//! Functions here only detect. Deciding the severity and the fallback is the
//! policy's job, so every check returns `Result<_, Violation>`.

use std::num::NonZeroUsize;
use std::ops::Range;

use charseq_codec::{RecordId, SequenceModel};
use charseq_core::{Code, Symbol, SymbolType, classify, resolve_to_code};

use crate::diagnostics::DiagnosticKind;

/// A detected violation, not yet reported.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", .kind.message(.detail.as_deref()))]
pub struct Violation {
    pub kind: DiagnosticKind,
    pub detail: Option<String>,
    pub span: Option<Range<usize>>,
    pub hint: Option<String>,
}

impl Violation {
    pub fn new(kind: DiagnosticKind) -> Self {
        Self {
            kind,
            detail: None,
            span: None,
            hint: None,
        }
    }

    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn span(mut self, span: Range<usize>) -> Self {
        self.span = Some(span);
        self
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Validate a symbol and resolve it to its code.
pub fn symbol_code(symbol: &Symbol) -> Result<Code, Violation> {
    match classify(symbol) {
        SymbolType::Invalid => {
            Err(Violation::new(DiagnosticKind::InvalidSymbolType).detail(format!("got {symbol}")))
        }
        SymbolType::Integer => {
            let raw = resolve_to_code(symbol)
                .ok_or_else(|| Violation::new(DiagnosticKind::InvalidSymbolType))?;
            Code::from_i64(raw).ok_or_else(|| {
                Violation::new(DiagnosticKind::CodeOutOfRange).detail(raw.to_string())
            })
        }
        SymbolType::StringChar => {
            if symbol.utf16_len() != Some(1) {
                return Err(
                    Violation::new(DiagnosticKind::SymbolNotSingleChar).detail(symbol.to_string())
                );
            }
            resolve_to_code(symbol)
                .and_then(Code::from_i64)
                .ok_or_else(|| Violation::new(DiagnosticKind::SymbolNotSingleChar))
        }
    }
}

/// Validate every symbol. The first failure wins and names its position.
pub fn symbol_codes(symbols: &[Symbol]) -> Result<Vec<Code>, Violation> {
    symbols
        .iter()
        .enumerate()
        .map(|(i, symbol)| symbol_code(symbol).map_err(|v| v.hint(format!("argument {i}"))))
        .collect()
}

/// A maximum length must be a positive integer.
pub fn max_length(max: usize) -> Result<NonZeroUsize, Violation> {
    NonZeroUsize::new(max).ok_or_else(|| {
        Violation::new(DiagnosticKind::InvalidMaxLength).detail(format!("got {max}"))
    })
}

/// Same check for a raw JSON number.
pub fn max_length_i64(max: i64) -> Result<NonZeroUsize, Violation> {
    usize::try_from(max)
        .ok()
        .and_then(NonZeroUsize::new)
        .ok_or_else(|| {
            Violation::new(DiagnosticKind::InvalidMaxLength).detail(format!("got {max}"))
        })
}

/// Check a sequence length against an optional maximum.
///
/// The span covers the code units past the limit.
pub fn sequence_length(len: usize, max: Option<NonZeroUsize>) -> Result<(), Violation> {
    match max {
        Some(max) if len > max.get() => Err(Violation::new(DiagnosticKind::SequenceTooLong)
            .detail(format!("length {len}, maximum {max}"))
            .span(max.get()..len)),
        _ => Ok(()),
    }
}

pub fn non_empty(len: usize) -> Result<(), Violation> {
    if len == 0 {
        return Err(Violation::new(DiagnosticKind::EmptySequence));
    }
    Ok(())
}

/// Find the position of a record by id.
pub fn record_index(model: &SequenceModel, id: RecordId) -> Result<usize, Violation> {
    model
        .index(id)
        .ok_or_else(|| Violation::new(DiagnosticKind::RecordNotFound).detail(id.to_string()))
}
