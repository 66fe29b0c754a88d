//! Token kinds for Euterpean notation.

use std::fmt;

/// The closed set of token kinds a notation string can produce.
///
/// Discriminants are stable and fit in one byte so a consumer can index
/// per-kind tables directly with `kind as usize`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum TokenKind {
    /// A pitched note: `A`-`G`, or `a`-`g` repeating the note before it.
    Note = 0,
    /// Silence.
    Rest = 1,
    /// Whitespace; the score builder turns these into volume changes.
    DoubleVolume = 2,
    /// Switch to another instrument program.
    InstrumentChange = 3,
    /// Shift the current octave.
    OctaveChange = 4,
    /// A character no rule recognizes. Kept in the stream, never fatal here.
    Invalid = 5,
    /// End-marker, appended exactly once with an empty value.
    Eof = 6,
}

impl TokenKind {
    /// Upper-snake display name, e.g. `INSTRUMENT_CHANGE`.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Note => "NOTE",
            TokenKind::Rest => "REST",
            TokenKind::DoubleVolume => "DOUBLE_VOLUME",
            TokenKind::InstrumentChange => "INSTRUMENT_CHANGE",
            TokenKind::OctaveChange => "OCTAVE_CHANGE",
            TokenKind::Invalid => "INVALID",
            TokenKind::Eof => "EOF",
        }
    }

    #[inline]
    pub const fn is_eof(self) -> bool {
        matches!(self, TokenKind::Eof)
    }

    #[inline]
    pub const fn is_invalid(self) -> bool {
        matches!(self, TokenKind::Invalid)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
