//! Token cursor for navigating the token stream.
//!
//! Provides low-level token access, lookahead, and consumption methods.

use quill_ir::{Name, Span, StringInterner};

use crate::{ParseError, Token, TokenKind};

/// Cursor for navigating tokens.
///
/// Invariant: the token list is non-empty and ends with `Eof`, so the
/// current position is always valid.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    interner: &'a StringInterner,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    pub fn new(tokens: &'a [Token], interner: &'a StringInterner) -> Self {
        debug_assert!(
            tokens.last().is_some_and(|t| t.kind == TokenKind::Eof),
            "token stream must end with Eof"
        );
        Cursor {
            tokens,
            interner,
            pos: 0,
        }
    }

    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    /// Get the current token.
    #[inline]
    pub fn current(&self) -> &'a Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    #[inline]
    pub fn current_kind(&self) -> &'a TokenKind {
        &self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Get the previous token's span.
    #[inline]
    pub fn previous_span(&self) -> Span {
        if self.pos > 0 {
            self.tokens[self.pos - 1].span
        } else {
            Span::DUMMY
        }
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_tag() == TokenKind::TAG_EOF
    }

    #[inline]
    pub fn current_tag(&self) -> u8 {
        self.current_kind().discriminant_index()
    }

    /// Check if the current token matches the given kind (payload ignored).
    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        self.current_tag() == kind.discriminant_index()
    }

    /// Check if the next token (lookahead) is a left paren.
    #[inline]
    pub fn next_is_lparen(&self) -> bool {
        self.tokens
            .get(self.pos + 1)
            .is_some_and(|t| t.kind == TokenKind::LParen)
    }

    /// Advance to the next token and return the consumed token.
    ///
    /// Never moves past `Eof`.
    #[inline]
    pub fn advance(&mut self) -> &'a Token {
        let token = self.current();
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it matches `kind`.
    pub fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Expect and consume a specific token kind.
    pub fn expect(&mut self, kind: &TokenKind) -> Result<&'a Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(ParseError::unexpected(
                kind.display_name(),
                self.current_kind(),
                self.current_span(),
            ))
        }
    }

    /// Expect and consume an identifier, returning its name and span.
    pub fn expect_ident(&mut self) -> Result<(Name, Span), ParseError> {
        if let TokenKind::Ident(name) = *self.current_kind() {
            let span = self.current_span();
            self.advance();
            Ok((name, span))
        } else {
            Err(ParseError::unexpected(
                "identifier",
                self.current_kind(),
                self.current_span(),
            ))
        }
    }
}
