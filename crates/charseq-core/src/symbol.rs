//! User-facing identifiers and their resolution to codes.
//!
//! A symbol is either a single character or an integer code. Text made only
//! of ASCII digits is an integer: `"5"` is code 5, never the character `'5'`.
//! The digit characters can therefore only be addressed by their numeric code.

/// A user-supplied operation or value identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// Text symbol. Must be exactly one UTF-16 code unit unless it is all digits.
    Text(String),
    /// Integer symbol. Must lie in `[0, 65535]`.
    Int(i64),
    /// Input of some other shape (from a loosely typed source such as JSON).
    Invalid(String),
}

/// Classification of a symbol before validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SymbolType {
    Invalid,
    Integer,
    StringChar,
}

impl Symbol {
    /// Interpret a JSON value as a symbol.
    pub fn from_json(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => Self::Text(s.clone()),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Int(i),
                None => Self::Invalid(n.to_string()),
            },
            other => Self::Invalid(other.to_string()),
        }
    }

    /// Length in UTF-16 code units (text symbols only).
    pub fn utf16_len(&self) -> Option<usize> {
        match self {
            Self::Text(s) => Some(s.encode_utf16().count()),
            _ => None,
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Invalid(raw) => write!(f, "{raw}"),
        }
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Self::Text(c.to_string())
    }
}

impl From<i64> for Symbol {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for Symbol {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<u32> for Symbol {
    fn from(i: u32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<u16> for Symbol {
    fn from(i: u16) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<crate::Code> for Symbol {
    fn from(code: crate::Code) -> Self {
        Self::Int(i64::from(code.0))
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Classify a symbol. Length and range are not checked here.
pub fn classify(symbol: &Symbol) -> SymbolType {
    match symbol {
        Symbol::Text(s) if is_digits(s) => SymbolType::Integer,
        Symbol::Text(_) => SymbolType::StringChar,
        Symbol::Int(_) => SymbolType::Integer,
        Symbol::Invalid(_) => SymbolType::Invalid,
    }
}

/// Resolve a symbol to its raw integer code.
///
/// Text symbols resolve to their first UTF-16 code unit, digit strings to
/// their numeric value (saturating to `i64::MAX` when too long to parse).
/// Returns `None` for invalid symbols and empty text. The result is only
/// trustworthy after validation has checked length and range.
pub fn resolve_to_code(symbol: &Symbol) -> Option<i64> {
    match symbol {
        Symbol::Text(s) if is_digits(s) => Some(s.parse::<i64>().unwrap_or(i64::MAX)),
        Symbol::Text(s) => s.encode_utf16().next().map(i64::from),
        Symbol::Int(i) => Some(*i),
        Symbol::Invalid(_) => None,
    }
}
