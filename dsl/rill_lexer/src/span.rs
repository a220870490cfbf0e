//! Non-owning view into the source buffer.
//!
//! A [`SourceSpan`] is a borrowed slice of the original source plus the
//! byte offset where that slice starts. The borrow ties every span to
//! the source buffer's lifetime, so a span can never outlive the text
//! it points into.

use std::fmt;

/// A non-owning slice of source text with its starting byte offset.
///
/// Invariant: `end() >= start()`, and `start()..end()` read back from
/// the source buffer reproduces exactly the lexeme this span captured.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SourceSpan<'src> {
    text: &'src str,
    start: u32,
}

impl<'src> SourceSpan<'src> {
    /// Slice `source[start..end]` into a span.
    ///
    /// # Panics
    ///
    /// Panics if `start..end` is out of bounds or not on character
    /// boundaries. The scanner only produces boundaries that sit on
    /// token edges, which are always character boundaries.
    pub(crate) fn new(source: &'src str, start: usize, end: usize) -> Self {
        Self {
            text: &source[start..end],
            start: u32::try_from(start).unwrap_or(u32::MAX),
        }
    }

    /// The captured lexeme.
    #[inline]
    pub fn as_str(&self) -> &'src str {
        self.text
    }

    /// Byte offset of the first byte in the source buffer.
    #[inline]
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Byte offset one past the last byte (`start() + len()`).
    #[inline]
    pub fn end(&self) -> u32 {
        self.start + self.len()
    }

    /// Length of the lexeme in bytes.
    #[inline]
    pub fn len(&self) -> u32 {
        u32::try_from(self.text.len()).unwrap_or(u32::MAX)
    }

    /// Returns `true` if the span captures no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Literal comparison: length first, then bytes (slice equality).
impl PartialEq<str> for SourceSpan<'_> {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for SourceSpan<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl fmt::Display for SourceSpan<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}
