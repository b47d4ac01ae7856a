use std::ops::Range;

/// Every condition the validation layer can detect.
///
/// Grouped by [`ErrorCategory`]. Severity is not a property of the kind: the
/// error policy decides it per report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // Wrong shape or type of an argument or config field
    InvalidSymbolType,
    MissingCallback,
    InvalidConfigField,
    UnknownConfigKey,

    // Malformed symbol text or sequence content
    SymbolNotSingleChar,
    EmptySequence,

    // Numeric limits
    CodeOutOfRange,
    SequenceTooLong,
    InvalidMaxLength,

    // Dangling handles
    RecordNotFound,
}

/// Error taxonomy shared by all kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Type,
    Syntax,
    Range,
    Reference,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Type => write!(f, "TypeError"),
            ErrorCategory::Syntax => write!(f, "SyntaxError"),
            ErrorCategory::Range => write!(f, "RangeError"),
            ErrorCategory::Reference => write!(f, "ReferenceError"),
        }
    }
}

impl DiagnosticKind {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidSymbolType
            | Self::MissingCallback
            | Self::InvalidConfigField
            | Self::UnknownConfigKey => ErrorCategory::Type,
            Self::SymbolNotSingleChar | Self::EmptySequence => ErrorCategory::Syntax,
            Self::CodeOutOfRange | Self::SequenceTooLong | Self::InvalidMaxLength => {
                ErrorCategory::Range
            }
            Self::RecordNotFound => ErrorCategory::Reference,
        }
    }

    /// Default hint for this kind, included in every diagnostic of the kind.
    pub fn default_hint(&self) -> Option<&'static str> {
        match self {
            Self::SymbolNotSingleChar => {
                Some("use a single character, or its numeric code for digits and astral characters")
            }
            Self::CodeOutOfRange => Some("codes are UTF-16 code units: 0 to 65535"),
            Self::UnknownConfigKey => Some(
                "known keys: sequence, operations, values, labels, maxSequenceLength, \
                 ignoreWarnings, strictMode, argumentResolution",
            ),
            _ => None,
        }
    }

    /// Base message for this kind, used when no detail is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::InvalidSymbolType => "symbol must be a character or an integer",
            Self::MissingCallback => "operation has no callback",
            Self::InvalidConfigField => "invalid configuration field",
            Self::UnknownConfigKey => "unknown configuration key",

            Self::SymbolNotSingleChar => "symbol must be exactly one character",
            Self::EmptySequence => "cannot execute empty sequence",

            Self::CodeOutOfRange => "code out of range",
            Self::SequenceTooLong => "sequence exceeds maximum length",
            Self::InvalidMaxLength => "maximum sequence length must be a positive integer",

            Self::RecordNotFound => "operation record not found",
        }
    }

    /// Template for detailed messages. Contains `{}` for the caller's detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::SymbolNotSingleChar => "symbol {} must be exactly one character".to_string(),
            Self::CodeOutOfRange => "code {} is outside 0..=65535".to_string(),
            Self::UnknownConfigKey => "unknown configuration key `{}`".to_string(),
            Self::RecordNotFound => "no operation record with id {}".to_string(),
            Self::MissingCallback => "operation {} has no callback".to_string(),
            Self::EmptySequence => self.fallback_message().to_string(),
            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// Render the final message.
    ///
    /// - `None` → `fallback_message()`
    /// - `Some(detail)` → `custom_message()` with `{}` replaced by detail
    pub fn message(&self, detail: Option<&str>) -> String {
        match detail {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// One reported condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    pub(crate) severity: Severity,
    pub(crate) message: String,
    /// Code-unit positions in the sequence this diagnostic is about.
    pub(crate) span: Option<Range<usize>>,
    pub(crate) hints: Vec<String>,
}

impl DiagnosticMessage {
    pub(crate) fn new(kind: DiagnosticKind, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity,
            message: message.into(),
            span: None,
            hints: kind.default_hint().map(str::to_owned).into_iter().collect(),
        }
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn span(&self) -> Option<Range<usize>> {
        self.span.clone()
    }

    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}[{}]: {}",
            self.severity,
            self.kind.category(),
            self.message
        )?;
        if let Some(span) = &self.span {
            write!(f, " at {}..{}", span.start, span.end)?;
        }
        for hint in &self.hints {
            write!(f, " (hint: {})", hint)?;
        }
        Ok(())
    }
}
