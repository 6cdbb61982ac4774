//! Tokens produced by the scanner.

use monkey_syntax::TokenKind;
use std::fmt;

/// A scanned token: its kind and the exact input text that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The source text of the token. Empty for END_OF_INPUT.
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// The terminal token returned once the input is exhausted.
    pub fn end_of_input() -> Self {
        Self::new(TokenKind::EndOfInput, String::new())
    }

    /// Whether this is the END_OF_INPUT token.
    #[inline]
    pub fn is_end_of_input(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    /// Whether this token stands for an unrecognized character.
    #[inline]
    pub fn is_illegal(&self) -> bool {
        self.kind == TokenKind::Illegal
    }
}

impl fmt::Display for Token {
    /// Renders as `KIND "text"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.kind, self.text)
    }
}
