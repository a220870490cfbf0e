//! Token stream navigation for the Rill DSL.
//!
//! A [`TokenCursor`] walks the token sequence produced by
//! [`rill_lexer::Lexer`], offering the peek/consume/group-extraction
//! primitives a recursive-descent parser is built on. Boundary
//! violations surface as [`StreamError`] values instead of aborting
//! the process, so a hosting application can recover per parse.
//!
//! Lexical tolerance stays in the lexer; this layer only signals
//! structural problems (a missing delimiter, a read past the end).

mod cursor;
mod error;
mod report;

pub use cursor::TokenCursor;
pub use error::{StreamError, StreamResult};
