//! Tokenizer for the Rill DSL.
//!
//! Converts an in-memory source string into an ordered sequence of
//! classified [`Token`]s plus a [`LineIndex`] for diagnostics, in one
//! eager pass. The scanner has no failure mode of its own: malformed
//! literals (an unterminated string, a stray byte) degrade to
//! best-effort token spans so that consumers can still offer feedback
//! on incomplete input.
//!
//! Tokens borrow the source buffer; nothing here copies text.

mod lexer;
mod line_index;
mod span;
mod token;

pub use lexer::Lexer;
pub use line_index::LineIndex;
pub use span::SourceSpan;
pub use token::{Token, TokenKind};
