//! monkey_scanner: Lexer/tokenizer for monkey source code.
//!
//! Converts a decoded character sequence into a flat stream of tokens:
//! - Fixed single-character delimiters
//! - One- and two-character operators, resolved through lookahead tables
//! - Identifiers and keywords
//! - Decimal integer literals
//!
//! The scanner never fails. Characters outside the language become
//! `ILLEGAL` tokens and scanning continues after them.

mod char_codes;
mod operators;
mod scanner;
mod token;

pub use monkey_syntax::TokenKind;
pub use scanner::{tokenize, Scanner, Tokens};
pub use token::Token;
