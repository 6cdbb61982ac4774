//! Lookahead tables for operator lead characters.
//!
//! Each operator starts with a lead character. The character after the lead
//! selects a two-character operator from the lead's table; when it has no
//! entry the lead stands alone as its fallback operator.

use monkey_syntax::TokenKind;

/// The operators that can start with one lead character.
#[derive(Debug)]
pub struct LookaheadTable {
    pub lead: char,
    /// Kind produced when the next character has no entry.
    pub fallback: TokenKind,
    /// `(next character, two-character kind)` pairs.
    pub pairs: &'static [(char, TokenKind)],
}

impl LookaheadTable {
    /// The two-character kind selected by `next`, if any.
    #[inline]
    pub fn resolve(&self, next: Option<char>) -> Option<TokenKind> {
        let next = next?;
        self.pairs
            .iter()
            .find_map(|&(ch, kind)| (ch == next).then_some(kind))
    }
}

pub static OPERATOR_TABLES: &[LookaheadTable] = &[
    LookaheadTable {
        lead: '=',
        fallback: TokenKind::Equals,
        pairs: &[('=', TokenKind::Equality)],
    },
    LookaheadTable {
        lead: '!',
        fallback: TokenKind::Not,
        pairs: &[('=', TokenKind::Inequality)],
    },
    LookaheadTable {
        lead: '<',
        fallback: TokenKind::LessThan,
        pairs: &[('=', TokenKind::LessEqual), ('<', TokenKind::LeftShift)],
    },
    LookaheadTable {
        lead: '>',
        fallback: TokenKind::GreaterThan,
        pairs: &[('=', TokenKind::GreaterEqual), ('>', TokenKind::RightShift)],
    },
    LookaheadTable {
        lead: '+',
        fallback: TokenKind::Plus,
        pairs: &[('+', TokenKind::Increment), ('=', TokenKind::PlusAssign)],
    },
    LookaheadTable {
        lead: '-',
        fallback: TokenKind::Minus,
        pairs: &[('-', TokenKind::Decrement), ('=', TokenKind::MinusAssign)],
    },
    LookaheadTable {
        lead: '*',
        fallback: TokenKind::Star,
        pairs: &[('=', TokenKind::StarAssign)],
    },
    LookaheadTable {
        lead: '/',
        fallback: TokenKind::Slash,
        pairs: &[('=', TokenKind::SlashAssign)],
    },
    LookaheadTable {
        lead: '%',
        fallback: TokenKind::Percent,
        pairs: &[('=', TokenKind::PercentAssign)],
    },
    LookaheadTable {
        lead: '&',
        fallback: TokenKind::Ampersand,
        pairs: &[('&', TokenKind::LogicalAnd), ('=', TokenKind::AndAssign)],
    },
    LookaheadTable {
        lead: '|',
        fallback: TokenKind::Pipe,
        pairs: &[('|', TokenKind::LogicalOr), ('=', TokenKind::OrAssign)],
    },
];

/// Find the table for an operator lead character.
#[inline]
pub fn lookahead_table(lead: char) -> Option<&'static LookaheadTable> {
    OPERATOR_TABLES.iter().find(|table| table.lead == lead)
}
