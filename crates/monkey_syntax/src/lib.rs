//! monkey_syntax: Token kinds and the keyword table for the monkey language.
//!
//! The scanner classifies every token into one [`TokenKind`]. Downstream
//! consumers match on these kinds exhaustively.

pub mod token_kind;

pub use token_kind::{lookup_ident, TokenKind, KEYWORDS};
