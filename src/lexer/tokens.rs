use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display, ops::BitOr};

use crate::ast::ast::Operator;

lazy_static! {
    pub static ref OPERATOR_LOOKUP: HashMap<&'static str, Operator> = {
        let mut map = HashMap::new();
        map.insert("mul", Operator::Mul);
        map.insert("do", Operator::Do);
        map.insert("don't", Operator::Dont);
        map
    };

    /// Bytes an operator name recogniser may look at: the longest name plus the byte after it.
    pub static ref OPERATOR_LOOKAHEAD: usize =
        OPERATOR_LOOKUP.keys().map(|name| name.len()).max().unwrap_or(0) + 1;
}

/// Bytes that may appear in an operator name.
pub fn is_operator_byte(byte: u8) -> bool {
    byte.is_ascii_lowercase() || byte == b'\''
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[repr(u8)]
pub enum TokenKind {
    None = 0,
    File = 1 << 0,
    Operator = 1 << 1,
    IntegerLiteral = 1 << 2,
    LeftParen = 1 << 3,
    RightParen = 1 << 4,
    Comma = 1 << 5,
}

impl TokenKind {
    /// Every kind with a bit, lowest bit first.
    pub const ALL: [TokenKind; 6] = [
        TokenKind::File,
        TokenKind::Operator,
        TokenKind::IntegerLiteral,
        TokenKind::LeftParen,
        TokenKind::RightParen,
        TokenKind::Comma,
    ];

    pub fn bit(self) -> u8 {
        self as u8
    }

    /// The single byte a punctuation kind is spelled with.
    pub fn symbol(self) -> Option<u8> {
        match self {
            TokenKind::LeftParen => Some(b'('),
            TokenKind::RightParen => Some(b')'),
            TokenKind::Comma => Some(b','),
            _ => None,
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl BitOr for TokenKind {
    type Output = TokenKinds;

    fn bitor(self, rhs: TokenKind) -> TokenKinds {
        TokenKinds::from(self).with(rhs)
    }
}

/// The set of token kinds that are legal at a parse position.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
pub struct TokenKinds(u8);

impl TokenKinds {
    pub fn empty() -> Self {
        TokenKinds(0)
    }

    /// `TokenKind::None` has no bit, so it is never contained.
    pub fn contains(self, kind: TokenKind) -> bool {
        kind.bit() != 0 && self.0 & kind.bit() == kind.bit()
    }

    pub fn with(self, kind: TokenKind) -> Self {
        TokenKinds(self.0 | kind.bit())
    }

    /// Clears `kind`, typically after it was tried and failed.
    pub fn without(self, kind: TokenKind) -> Self {
        TokenKinds(self.0 & !kind.bit())
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The lowest legal kind, if any remain.
    pub fn next(self) -> Option<TokenKind> {
        TokenKind::ALL.into_iter().find(|kind| self.contains(*kind))
    }
}

impl From<TokenKind> for TokenKinds {
    fn from(kind: TokenKind) -> Self {
        TokenKinds(kind.bit())
    }
}

impl BitOr<TokenKind> for TokenKinds {
    type Output = TokenKinds;

    fn bitor(self, rhs: TokenKind) -> TokenKinds {
        self.with(rhs)
    }
}

impl Display for TokenKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names = TokenKind::ALL
            .into_iter()
            .filter(|kind| self.contains(*kind))
            .map(|kind| kind.to_string())
            .collect::<Vec<String>>();

        write!(f, "{{{}}}", names.join(" | "))
    }
}

/// A lexed token, carrying its value where it has one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Operator(Operator),
    Integer(i64),
    LeftParen,
    RightParen,
    Comma,
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Operator(_) => TokenKind::Operator,
            Token::Integer(_) => TokenKind::IntegerLiteral,
            Token::LeftParen => TokenKind::LeftParen,
            Token::RightParen => TokenKind::RightParen,
            Token::Comma => TokenKind::Comma,
        }
    }
}
