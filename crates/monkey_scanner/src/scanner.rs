//! The monkey scanner/lexer.
//!
//! Converts a decoded character sequence into tokens, one per call to
//! [`Scanner::next_token`].

use crate::char_codes::*;
use crate::operators::{lookahead_table, LookaheadTable};
use crate::token::Token;
use monkey_syntax::{lookup_ident, TokenKind};

/// The scanner converts monkey source characters into tokens.
///
/// The input is borrowed, so any number of scanners can walk the same buffer
/// independently.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    /// The source characters being scanned.
    input: &'a [char],
    /// Index of `ch`.
    position: usize,
    /// Index of the character after `ch`.
    read_position: usize,
    /// The character under the cursor, `None` once past the end.
    ch: Option<char>,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner positioned on the first character of `input`.
    pub fn new(input: &'a [char]) -> Self {
        let mut scanner = Self {
            input,
            position: 0,
            read_position: 0,
            ch: None,
        };
        scanner.read_char();
        scanner
    }

    /// Iterate over the remaining tokens, END_OF_INPUT included.
    pub fn tokens(self) -> Tokens<'a> {
        Tokens {
            scanner: self,
            done: false,
        }
    }

    // ========================================================================
    // Cursor
    // ========================================================================

    /// Advance the cursor by one character. Stays put once past the end.
    #[inline]
    fn read_char(&mut self) {
        self.ch = self.input.get(self.read_position).copied();
        self.position = self.read_position;
        if self.ch.is_some() {
            self.read_position += 1;
        }
    }

    /// The character after the cursor, without advancing.
    #[inline]
    fn peek_char(&self) -> Option<char> {
        self.input.get(self.read_position).copied()
    }

    fn skip_white_space(&mut self) {
        while self.ch.is_some_and(is_white_space) {
            self.read_char();
        }
    }

    /// Consume the maximal run of characters satisfying `pred`, returning it.
    fn read_while(&mut self, pred: impl Fn(char) -> bool) -> String {
        let start = self.position;
        while self.ch.is_some_and(&pred) {
            self.read_char();
        }
        self.input[start..self.position].iter().collect()
    }

    // ========================================================================
    // Core scanning
    // ========================================================================

    /// Scan the next token.
    ///
    /// Once the input is exhausted every call returns END_OF_INPUT.
    pub fn next_token(&mut self) -> Token {
        self.skip_white_space();

        let Some(ch) = self.ch else {
            return Token::end_of_input();
        };

        if let Some(kind) = TokenKind::from_delimiter(ch) {
            self.read_char();
            return Token::new(kind, ch);
        }
        if let Some(table) = lookahead_table(ch) {
            return self.scan_operator(table);
        }
        if is_letter(ch) {
            return self.scan_identifier();
        }
        if is_digit(ch) {
            return self.scan_number();
        }
        self.scan_illegal(ch)
    }

    // ========================================================================
    // Token-specific scanning methods
    // ========================================================================

    /// Peek past the lead character and consult its table: a hit consumes
    /// both characters, a miss consumes only the lead.
    fn scan_operator(&mut self, table: &LookaheadTable) -> Token {
        let lead = table.lead;
        match table.resolve(self.peek_char()) {
            Some(kind) => {
                self.read_char();
                let mut text = String::with_capacity(2);
                text.push(lead);
                text.extend(self.ch);
                self.read_char();
                Token::new(kind, text)
            }
            None => {
                self.read_char();
                Token::new(table.fallback, lead)
            }
        }
    }

    fn scan_identifier(&mut self) -> Token {
        let word = self.read_while(is_letter);
        Token::new(lookup_ident(&word), word)
    }

    fn scan_number(&mut self) -> Token {
        let digits = self.read_while(is_digit);
        Token::new(TokenKind::Int, digits)
    }

    fn scan_illegal(&mut self, ch: char) -> Token {
        tracing::trace!(character = ?ch, position = self.position, "illegal character");
        self.read_char();
        Token::new(TokenKind::Illegal, ch)
    }
}

/// Iterator over a scanner's tokens.
///
/// Yields END_OF_INPUT exactly once, then `None` forever.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    scanner: Scanner<'a>,
    done: bool,
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.done {
            return None;
        }
        let token = self.scanner.next_token();
        self.done = token.is_end_of_input();
        Some(token)
    }
}

impl std::iter::FusedIterator for Tokens<'_> {}

/// Scan all of `input`. The last token is always END_OF_INPUT.
pub fn tokenize(input: &[char]) -> Vec<Token> {
    Scanner::new(input).tokens().collect()
}
