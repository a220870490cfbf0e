//! Line index built incrementally during scanning.
//!
//! Records each source line's text and starting byte offset. Used only
//! to render diagnostics (the failing line plus a caret), so lookups
//! are by line number and return borrowed slices.

/// Ordered `(line text, starting byte offset)` pairs for one source.
///
/// A line's text excludes its terminating `\n` but keeps any `\r`. The
/// trailing partial line of a source that does not end in a newline is
/// recorded too; a source that ends in `\n` has no extra empty entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineIndex<'src> {
    lines: Vec<&'src str>,
    starts: Vec<u32>,
}

impl<'src> LineIndex<'src> {
    pub(crate) fn push(&mut self, text: &'src str, start: usize) {
        self.lines.push(text);
        self.starts.push(u32::try_from(start).unwrap_or(u32::MAX));
    }

    /// Text of line `index` (0-based), or `None` if out of range.
    pub fn line(&self, index: usize) -> Option<&'src str> {
        self.lines.get(index).copied()
    }

    /// Starting byte offset of line `index`, or `None` if out of range.
    pub fn line_start(&self, index: usize) -> Option<u32> {
        self.starts.get(index).copied()
    }

    /// Number of recorded lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if no lines were recorded (empty source).
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests;
