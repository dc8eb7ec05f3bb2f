//! Literal tokens as produced by the lexer.

use crate::Span;

/// Lexical family of a literal token.
///
/// This is the lexer's view: it says how the literal was *written*. The
/// semantic kind (address vs. hex number, integer vs. fractional) is decided
/// later by the literal classifier.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LiteralTokenKind {
    /// Decimal number: digits, optional `.fraction`, optional `e[-]exponent`.
    Number,
    /// `0x`-prefixed hexadecimal number.
    HexNumber,
    /// `true` or `false`.
    Bool,
    /// `"..."` or `'...'`.
    String,
    /// `unicode"..."`.
    UnicodeString,
    /// `hex"..."`.
    HexString,
}

impl LiteralTokenKind {
    /// String-like literals may be followed by a suffix without whitespace.
    #[inline]
    pub const fn is_string_like(self) -> bool {
        matches!(
            self,
            LiteralTokenKind::String | LiteralTokenKind::UnicodeString | LiteralTokenKind::HexString
        )
    }
}

/// A literal token.
///
/// `text` is the source spelling. For string-like literals it covers every
/// adjacent piece the lexer merged, and `bytes` holds the decoded contents
/// (escapes resolved, hex digits converted). `bytes` is empty for the other
/// families.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct LiteralToken {
    pub kind: LiteralTokenKind,
    pub text: String,
    pub bytes: Vec<u8>,
    pub span: Span,
}

impl LiteralToken {
    /// A numeric, boolean, or address literal.
    pub fn new(kind: LiteralTokenKind, text: impl Into<String>, span: Span) -> Self {
        LiteralToken {
            kind,
            text: text.into(),
            bytes: Vec::new(),
            span,
        }
    }

    /// A string-like literal with decoded contents.
    pub fn with_bytes(
        kind: LiteralTokenKind,
        text: impl Into<String>,
        bytes: Vec<u8>,
        span: Span,
    ) -> Self {
        LiteralToken {
            kind,
            text: text.into(),
            bytes,
            span,
        }
    }
}
