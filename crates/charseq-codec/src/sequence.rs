//! The string projection of a sequence model.

use charseq_core::Code;

/// Error converting a sequence to a Rust `String`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
    /// A surrogate code unit without its pair.
    #[error("lone surrogate {unit:#06x} at position {index}")]
    LoneSurrogate { index: usize, unit: u16 },
}

/// A character sequence as UTF-16 code units.
///
/// Every code in `[0, 65535]` is a legal character, lone surrogates included,
/// so the buffer is kept as raw code units rather than a `String`. Lengths and
/// positions count code units.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Sequence(Vec<u16>);

impl Sequence {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn from_units(units: Vec<u16>) -> Self {
        Self(units)
    }

    #[inline]
    pub fn as_units(&self) -> &[u16] {
        &self.0
    }

    /// Length in code units.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn push(&mut self, code: Code) {
        self.0.push(code.0);
    }

    /// Convert to a `String`, failing on unpaired surrogates.
    pub fn try_to_string(&self) -> Result<String, SequenceError> {
        let mut out = String::with_capacity(self.0.len());
        let mut index = 0;
        for decoded in char::decode_utf16(self.0.iter().copied()) {
            match decoded {
                Ok(c) => {
                    out.push(c);
                    index += c.len_utf16();
                }
                Err(e) => {
                    return Err(SequenceError::LoneSurrogate {
                        index,
                        unit: e.unpaired_surrogate(),
                    });
                }
            }
        }
        Ok(out)
    }

    /// Convert to a `String`, replacing unpaired surrogates with U+FFFD.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(&self.0)
    }
}

impl From<&str> for Sequence {
    fn from(s: &str) -> Self {
        Self(s.encode_utf16().collect())
    }
}

impl From<String> for Sequence {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<&String> for Sequence {
    fn from(s: &String) -> Self {
        Self::from(s.as_str())
    }
}

impl FromIterator<Code> for Sequence {
    fn from_iter<I: IntoIterator<Item = Code>>(iter: I) -> Self {
        Self(iter.into_iter().map(|c| c.0).collect())
    }
}

impl PartialEq<str> for Sequence {
    fn eq(&self, other: &str) -> bool {
        self.0.iter().copied().eq(other.encode_utf16())
    }
}

impl PartialEq<&str> for Sequence {
    fn eq(&self, other: &&str) -> bool {
        <Self as PartialEq<str>>::eq(self, other)
    }
}

impl std::fmt::Display for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

impl std::fmt::Debug for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sequence({:?})", self.to_string_lossy())
    }
}
