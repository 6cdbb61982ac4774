//! TokenKind enum - every token kind the monkey scanner produces.

/// The kind of a scanned token.
///
/// Variants are laid out in contiguous groups so that the category
/// predicates below are simple range checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[repr(u8)]
pub enum TokenKind {
    // ========================================================================
    // Specials
    // ========================================================================
    Illegal = 0,
    EndOfInput = 1,

    // ========================================================================
    // Single-character operators
    // ========================================================================
    Equals = 2,
    Plus = 3,
    Minus = 4,
    Star = 5,
    Slash = 6,
    Percent = 7,
    Not = 8,
    LessThan = 9,
    GreaterThan = 10,
    Ampersand = 11,
    Pipe = 12,

    // ========================================================================
    // Two-character operators
    // ========================================================================
    Equality = 13,
    Inequality = 14,
    LessEqual = 15,
    GreaterEqual = 16,
    LeftShift = 17,
    RightShift = 18,
    Increment = 19,
    Decrement = 20,
    LogicalAnd = 21,
    LogicalOr = 22,

    // Compound assignment
    PlusAssign = 23,
    MinusAssign = 24,
    StarAssign = 25,
    SlashAssign = 26,
    PercentAssign = 27,
    AndAssign = 28,
    OrAssign = 29,

    // ========================================================================
    // Delimiters
    // ========================================================================
    Comma = 30,
    Semicolon = 31,
    LeftParen = 32,
    RightParen = 33,
    LeftBrace = 34,
    RightBrace = 35,

    // ========================================================================
    // Literals
    // ========================================================================
    Identifier = 36,
    Int = 37,

    // ========================================================================
    // Keywords
    // ========================================================================
    Function = 38,
    Let = 39,
    If = 40,
    Else = 41,
    Return = 42,
}

/// Every keyword of the language, paired with its kind.
pub const KEYWORDS: [(&str, TokenKind); 5] = [
    ("fn", TokenKind::Function),
    ("let", TokenKind::Let),
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("return", TokenKind::Return),
];

// Marker constants for TokenKind ranges.
impl TokenKind {
    pub const FIRST_OPERATOR: TokenKind = TokenKind::Equals;
    pub const LAST_OPERATOR: TokenKind = TokenKind::OrAssign;
    pub const FIRST_TWO_CHAR_OPERATOR: TokenKind = TokenKind::Equality;
    pub const FIRST_COMPOUND_ASSIGNMENT: TokenKind = TokenKind::PlusAssign;
    pub const LAST_COMPOUND_ASSIGNMENT: TokenKind = TokenKind::OrAssign;
    pub const FIRST_DELIMITER: TokenKind = TokenKind::Comma;
    pub const LAST_DELIMITER: TokenKind = TokenKind::RightBrace;
    pub const FIRST_KEYWORD: TokenKind = TokenKind::Function;
    pub const LAST_KEYWORD: TokenKind = TokenKind::Return;
}

impl TokenKind {
    #[inline]
    fn in_range(self, first: TokenKind, last: TokenKind) -> bool {
        let v = self as u8;
        v >= first as u8 && v <= last as u8
    }

    /// Whether this kind represents a keyword.
    #[inline]
    pub fn is_keyword(self) -> bool {
        self.in_range(Self::FIRST_KEYWORD, Self::LAST_KEYWORD)
    }

    /// Whether this kind represents an operator (one or two characters).
    #[inline]
    pub fn is_operator(self) -> bool {
        self.in_range(Self::FIRST_OPERATOR, Self::LAST_OPERATOR)
    }

    /// Whether this kind is an operator spelled with two characters.
    #[inline]
    pub fn is_two_char_operator(self) -> bool {
        self.in_range(Self::FIRST_TWO_CHAR_OPERATOR, Self::LAST_OPERATOR)
    }

    /// Whether this kind represents an assignment operator, plain or compound.
    #[inline]
    pub fn is_assignment_operator(self) -> bool {
        self == TokenKind::Equals || self.is_compound_assignment()
    }

    /// Whether this kind represents a compound assignment operator.
    #[inline]
    pub fn is_compound_assignment(self) -> bool {
        self.in_range(
            Self::FIRST_COMPOUND_ASSIGNMENT,
            Self::LAST_COMPOUND_ASSIGNMENT,
        )
    }

    /// Whether this kind is one of the fixed single-character delimiters.
    #[inline]
    pub fn is_delimiter(self) -> bool {
        self.in_range(Self::FIRST_DELIMITER, Self::LAST_DELIMITER)
    }

    /// Whether this kind carries variable text (identifiers and integers).
    #[inline]
    pub fn is_literal(self) -> bool {
        matches!(self, TokenKind::Identifier | TokenKind::Int)
    }

    /// The canonical upper-case name of this kind, as printed by tools.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::EndOfInput => "END_OF_INPUT",
            TokenKind::Equals => "EQUALS",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "STAR",
            TokenKind::Slash => "SLASH",
            TokenKind::Percent => "PERCENT",
            TokenKind::Not => "NOT",
            TokenKind::LessThan => "LESS_THAN",
            TokenKind::GreaterThan => "GREATER_THAN",
            TokenKind::Ampersand => "AMPERSAND",
            TokenKind::Pipe => "PIPE",
            TokenKind::Equality => "EQUALITY",
            TokenKind::Inequality => "INEQUALITY",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::LeftShift => "LEFT_SHIFT",
            TokenKind::RightShift => "RIGHT_SHIFT",
            TokenKind::Increment => "INCREMENT",
            TokenKind::Decrement => "DECREMENT",
            TokenKind::LogicalAnd => "LOGICAL_AND",
            TokenKind::LogicalOr => "LOGICAL_OR",
            TokenKind::PlusAssign => "PLUS_ASSIGN",
            TokenKind::MinusAssign => "MINUS_ASSIGN",
            TokenKind::StarAssign => "STAR_ASSIGN",
            TokenKind::SlashAssign => "SLASH_ASSIGN",
            TokenKind::PercentAssign => "PERCENT_ASSIGN",
            TokenKind::AndAssign => "AND_ASSIGN",
            TokenKind::OrAssign => "OR_ASSIGN",
            TokenKind::Comma => "COMMA",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Int => "INT",
            TokenKind::Function => "FUNCTION",
            TokenKind::Let => "LET",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
        }
    }

    /// Get the keyword text for a keyword kind, or None.
    pub fn keyword_text(self) -> Option<&'static str> {
        match self {
            TokenKind::Function => Some("fn"),
            TokenKind::Let => Some("let"),
            TokenKind::If => Some("if"),
            TokenKind::Else => Some("else"),
            TokenKind::Return => Some("return"),
            _ => None,
        }
    }

    /// Look up a keyword TokenKind from text.
    pub fn from_keyword(text: &str) -> Option<TokenKind> {
        match text {
            "fn" => Some(TokenKind::Function),
            "let" => Some(TokenKind::Let),
            "if" => Some(TokenKind::If),
            "else" => Some(TokenKind::Else),
            "return" => Some(TokenKind::Return),
            _ => None,
        }
    }

    /// The delimiter kind for a character, if it is one of `; , ( ) { }`.
    pub fn from_delimiter(ch: char) -> Option<TokenKind> {
        match ch {
            ';' => Some(TokenKind::Semicolon),
            ',' => Some(TokenKind::Comma),
            '(' => Some(TokenKind::LeftParen),
            ')' => Some(TokenKind::RightParen),
            '{' => Some(TokenKind::LeftBrace),
            '}' => Some(TokenKind::RightBrace),
            _ => None,
        }
    }

    /// The fixed spelling of this kind. `None` for kinds whose text varies
    /// with the input (identifiers, integers, illegal characters) and for
    /// END_OF_INPUT.
    pub fn fixed_text(self) -> Option<&'static str> {
        match self {
            TokenKind::Illegal
            | TokenKind::EndOfInput
            | TokenKind::Identifier
            | TokenKind::Int => None,
            TokenKind::Equals => Some("="),
            TokenKind::Plus => Some("+"),
            TokenKind::Minus => Some("-"),
            TokenKind::Star => Some("*"),
            TokenKind::Slash => Some("/"),
            TokenKind::Percent => Some("%"),
            TokenKind::Not => Some("!"),
            TokenKind::LessThan => Some("<"),
            TokenKind::GreaterThan => Some(">"),
            TokenKind::Ampersand => Some("&"),
            TokenKind::Pipe => Some("|"),
            TokenKind::Equality => Some("=="),
            TokenKind::Inequality => Some("!="),
            TokenKind::LessEqual => Some("<="),
            TokenKind::GreaterEqual => Some(">="),
            TokenKind::LeftShift => Some("<<"),
            TokenKind::RightShift => Some(">>"),
            TokenKind::Increment => Some("++"),
            TokenKind::Decrement => Some("--"),
            TokenKind::LogicalAnd => Some("&&"),
            TokenKind::LogicalOr => Some("||"),
            TokenKind::PlusAssign => Some("+="),
            TokenKind::MinusAssign => Some("-="),
            TokenKind::StarAssign => Some("*="),
            TokenKind::SlashAssign => Some("/="),
            TokenKind::PercentAssign => Some("%="),
            TokenKind::AndAssign => Some("&="),
            TokenKind::OrAssign => Some("|="),
            TokenKind::Comma => Some(","),
            TokenKind::Semicolon => Some(";"),
            TokenKind::LeftParen => Some("("),
            TokenKind::RightParen => Some(")"),
            TokenKind::LeftBrace => Some("{"),
            TokenKind::RightBrace => Some("}"),
            TokenKind::Function
            | TokenKind::Let
            | TokenKind::If
            | TokenKind::Else
            | TokenKind::Return => self.keyword_text(),
        }
    }
}

/// Classify a scanned word: its keyword kind, or `Identifier`.
pub fn lookup_ident(word: &str) -> TokenKind {
    TokenKind::from_keyword(word).unwrap_or(TokenKind::Identifier)
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
