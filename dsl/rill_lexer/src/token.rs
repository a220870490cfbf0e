//! Token model: a classified lexeme with position metadata.

use crate::span::SourceSpan;

/// Lexical class of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Numeric literal: digits with at most one decimal point.
    Number,
    /// Bare word: letters, digits, and `_`. Keywords are not
    /// distinguished at this layer.
    Identifier,
    /// Quoted literal (`"..."` or `'...'`), quotes included in the span.
    String,
    /// Symbolic operator or punctuation, one or two characters.
    Operator,
    /// Reserved classification, never produced by the scanner.
    Special,
}

/// A classified lexeme with its position in the source.
///
/// `line` and `column` are 0-based and assigned at scan time. The
/// column is the exact byte offset of the token's first byte from the
/// start of its line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: SourceSpan<'src>,
    pub line: u32,
    pub column: u32,
}

impl<'src> Token<'src> {
    pub(crate) fn new(kind: TokenKind, text: SourceSpan<'src>, line: u32, column: u32) -> Self {
        Self {
            kind,
            text,
            line,
            column,
        }
    }

    /// Returns `true` if this is a numeric literal containing a
    /// decimal point.
    pub fn is_float(&self) -> bool {
        self.kind == TokenKind::Number && self.text.as_str().contains('.')
    }

    /// Parse the lexeme as a number.
    ///
    /// Returns `None` for non-[`Number`](TokenKind::Number) tokens.
    /// Range and precision concerns are the caller's: this is a plain
    /// lexical conversion of the span text.
    pub fn number_value(&self) -> Option<f64> {
        if self.kind != TokenKind::Number {
            return None;
        }
        self.text.as_str().parse().ok()
    }
}

#[cfg(test)]
mod tests;
