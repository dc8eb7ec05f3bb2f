//! Tokens produced by the lexer.

use std::fmt;

use quill_ir::{LiteralToken, Name, Span};

/// A lexed token.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    Literal(LiteralToken),
    Ident(Name),

    // Keywords
    Function,
    Returns,
    Let,
    Pure,
    View,
    Payable,
    Suffix,
    Internal,
    External,
    Public,
    Private,
    Memory,
    Storage,
    Calldata,

    // Punctuation
    LParen,
    RParen,
    LBrace,
    RBrace,
    Comma,
    Semi,
    Eq,
    Plus,
    Minus,
    Star,

    /// Placeholder for input the lexer already reported.
    Error,
    Eof,
}

impl TokenKind {
    pub const TAG_LITERAL: u8 = 0;
    pub const TAG_IDENT: u8 = 1;
    pub const TAG_FUNCTION: u8 = 2;
    pub const TAG_LET: u8 = 4;
    pub const TAG_EOF: u8 = 27;

    /// Dense discriminant index, used by [`crate::recovery::TokenSet`].
    pub const fn discriminant_index(&self) -> u8 {
        match self {
            TokenKind::Literal(_) => Self::TAG_LITERAL,
            TokenKind::Ident(_) => Self::TAG_IDENT,
            TokenKind::Function => Self::TAG_FUNCTION,
            TokenKind::Returns => 3,
            TokenKind::Let => Self::TAG_LET,
            TokenKind::Pure => 5,
            TokenKind::View => 6,
            TokenKind::Payable => 7,
            TokenKind::Suffix => 8,
            TokenKind::Internal => 9,
            TokenKind::External => 10,
            TokenKind::Public => 11,
            TokenKind::Private => 12,
            TokenKind::Memory => 13,
            TokenKind::Storage => 14,
            TokenKind::Calldata => 15,
            TokenKind::LParen => 16,
            TokenKind::RParen => 17,
            TokenKind::LBrace => 18,
            TokenKind::RBrace => 19,
            TokenKind::Comma => 20,
            TokenKind::Semi => 21,
            TokenKind::Eq => 22,
            TokenKind::Plus => 23,
            TokenKind::Minus => 24,
            TokenKind::Star => 25,
            TokenKind::Error => 26,
            TokenKind::Eof => Self::TAG_EOF,
        }
    }

    /// Map a reserved word to its keyword token.
    ///
    /// Type names (`uint256`, `bytes32`, ...) are not keywords: they lex as
    /// identifiers and the parser resolves them.
    pub fn keyword(word: &str) -> Option<TokenKind> {
        Some(match word {
            "function" => TokenKind::Function,
            "returns" => TokenKind::Returns,
            "let" => TokenKind::Let,
            "pure" => TokenKind::Pure,
            "view" => TokenKind::View,
            "payable" => TokenKind::Payable,
            "suffix" => TokenKind::Suffix,
            "internal" => TokenKind::Internal,
            "external" => TokenKind::External,
            "public" => TokenKind::Public,
            "private" => TokenKind::Private,
            "memory" => TokenKind::Memory,
            "storage" => TokenKind::Storage,
            "calldata" => TokenKind::Calldata,
            _ => return None,
        })
    }

    /// Name used in "expected X, found Y" messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Literal(_) => "literal",
            TokenKind::Ident(_) => "identifier",
            TokenKind::Function => "`function`",
            TokenKind::Returns => "`returns`",
            TokenKind::Let => "`let`",
            TokenKind::Pure => "`pure`",
            TokenKind::View => "`view`",
            TokenKind::Payable => "`payable`",
            TokenKind::Suffix => "`suffix`",
            TokenKind::Internal => "`internal`",
            TokenKind::External => "`external`",
            TokenKind::Public => "`public`",
            TokenKind::Private => "`private`",
            TokenKind::Memory => "`memory`",
            TokenKind::Storage => "`storage`",
            TokenKind::Calldata => "`calldata`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::Comma => "`,`",
            TokenKind::Semi => "`;`",
            TokenKind::Eq => "`=`",
            TokenKind::Plus => "`+`",
            TokenKind::Minus => "`-`",
            TokenKind::Star => "`*`",
            TokenKind::Error => "invalid token",
            TokenKind::Eof => "end of file",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
