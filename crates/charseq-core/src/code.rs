//! Canonical identifiers shared by operations and values.

/// Largest legal code (the UTF-16 code unit range).
pub const MAX_CODE: i64 = u16::MAX as i64;

/// A canonical operation or value identifier in `[0, 65535]`.
///
/// Operation codes and value codes live in the same namespace. Nothing in a
/// code tells the two apart; only registry membership does.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[repr(transparent)]
pub struct Code(pub u16);

impl Code {
    #[inline]
    pub fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// Convert a resolved integer, returning `None` outside `[0, 65535]`.
    #[inline]
    pub fn from_i64(raw: i64) -> Option<Self> {
        u16::try_from(raw).ok().map(Self)
    }

    #[inline]
    pub fn as_u16(self) -> u16 {
        self.0
    }

    /// The character for this code, if it is a Unicode scalar value.
    ///
    /// Surrogate code units (`0xD800..=0xDFFF`) have no `char`.
    #[inline]
    pub fn to_char(self) -> Option<char> {
        char::from_u32(u32::from(self.0))
    }
}

impl From<u16> for Code {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl From<Code> for u16 {
    fn from(code: Code) -> Self {
        code.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
