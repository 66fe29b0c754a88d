//! Character predicates used by ruleset entries.

/// A set of characters a rule can match.
///
/// Enables declarative rules like:
/// - `Whitespace` - the fixed notation whitespace set
/// - `Range('A', 'G')` - an inclusive range
/// - `Chars(&['?', '.'])` - an explicit list
/// - `Union(&[..])` - any of several sets
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharSet {
    /// The fixed whitespace set, see [`is_notation_whitespace`].
    Whitespace,

    /// Inclusive character range.
    Range(char, char),

    /// Any character in the slice.
    Chars(&'static [char]),

    /// Any character matched by one of the nested sets.
    Union(&'static [CharSet]),
}

impl CharSet {
    /// Check if `ch` belongs to this set.
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        match self {
            CharSet::Whitespace => is_notation_whitespace(ch),
            CharSet::Range(lo, hi) => (*lo..=*hi).contains(&ch),
            CharSet::Chars(chars) => chars.contains(&ch),
            CharSet::Union(sets) => sets.iter().any(|set| set.contains(ch)),
        }
    }
}

/// Whitespace accepted by the notation.
///
/// This is a fixed list rather than `char::is_whitespace`, so that the
/// classification of every code point is pinned regardless of the Unicode
/// version the toolchain ships. It covers the characters copy-pasted text
/// tends to carry:
///
/// | Code points       | Characters                                   |
/// |-------------------|----------------------------------------------|
/// | U+0009 - U+000D   | tab, LF, vertical tab, form feed, CR         |
/// | U+0020            | space                                        |
/// | U+0085            | next line (NEL)                              |
/// | U+00A0            | no-break space                               |
/// | U+1680            | Ogham space mark                             |
/// | U+180E            | Mongolian vowel separator                    |
/// | U+2000 - U+200A   | en quad through hair space                   |
/// | U+2028, U+2029    | line and paragraph separators                |
/// | U+202F            | narrow no-break space                        |
/// | U+205F            | medium mathematical space                    |
/// | U+3000            | ideographic space                            |
#[inline]
pub const fn is_notation_whitespace(ch: char) -> bool {
    matches!(
        ch,
        '\u{0009}'..='\u{000D}'
            | '\u{0020}'
            | '\u{0085}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{180E}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
    )
}

#[cfg(test)]
mod tests;
