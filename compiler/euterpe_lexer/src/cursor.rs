//! Character cursor over a notation string.
//!
//! The cursor walks a `&str` one `char` at a time and tracks a byte offset,
//! so every position it reports is a valid UTF-8 boundary.

use euterpe_ir::Span;

/// Cursor over a notation string.
///
/// The cursor is [`Copy`], enabling cheap state snapshots.
///
/// # Invariant
///
/// `pos <= source.len()` and `pos` always falls on a `char` boundary.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    /// Current read position (byte offset into `source`).
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0.
    pub const fn new(source: &'a str) -> Self {
        Cursor { source, pos: 0 }
    }

    /// Returns the character at the current position, or `None` at EOF.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Advance past the current character.
    ///
    /// Returns the character consumed, or `None` (without moving) at EOF.
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.current()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    /// Step back over the previous character.
    ///
    /// Returns the character stepped over, or `None` (without moving) at
    /// the start of the input.
    pub fn back(&mut self) -> Option<char> {
        let ch = self.source[..self.pos].chars().next_back()?;
        self.pos -= ch.len_utf8();
        Some(ch)
    }

    /// Returns `true` if the cursor has consumed the whole input.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The unconsumed remainder of the source.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    /// Source text covered by `span`.
    ///
    /// # Contract
    ///
    /// `span` must fall on character boundaries within the source. This
    /// holds for any span built from positions reported by
    /// [`pos()`](Self::pos).
    pub fn slice(&self, span: Span) -> &'a str {
        debug_assert!(
            span.start <= span.end,
            "slice start {} exceeds end {}",
            span.start,
            span.end
        );
        &self.source[span.to_range()]
    }
}

#[cfg(test)]
mod tests;
