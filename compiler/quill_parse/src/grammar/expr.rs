//! Expression parsing.
//!
//! Precedence, loosest first:
//! - additive: `+ -`
//! - multiplicative: `*`
//! - unary: prefix `-`
//! - postfix: compact suffix application `operand suffix`
//! - primary: literal, call, parenthesized expression
//!
//! Suffix application binds tighter than unary minus, so `-5 neg` negates
//! the result of `neg(5)`.

use quill_diagnostic::ErrorCode;
use quill_ir::{BinaryOp, ExprId, ExprKind, Name, Span, UnaryOp};
use quill_stack::ensure_sufficient_stack;

use crate::{ErrorContext, ParseError, Parser, TokenKind};

impl Parser<'_> {
    /// Parse an expression.
    ///
    /// Parentheses re-enter here once per level, so the stack grows on demand.
    pub(crate) fn parse_expr(&mut self) -> Result<ExprId, ParseError> {
        ensure_sufficient_stack(|| self.parse_additive())
    }

    fn parse_additive(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_multiplicative()?;
        loop {
            let op = match self.current_kind() {
                TokenKind::Plus => BinaryOp::Add,
                TokenKind::Minus => BinaryOp::Sub,
                _ => return Ok(left),
            };
            self.advance();
            let right = self.parse_multiplicative()?;
            left = self.binary(op, left, right);
        }
    }

    fn parse_multiplicative(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_unary()?;
        while self.eat(&TokenKind::Star) {
            let right = self.parse_unary()?;
            left = self.binary(BinaryOp::Mul, left, right);
        }
        Ok(left)
    }

    fn binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId) -> ExprId {
        let span = self.arena.span(left).merge(self.arena.span(right));
        self.arena
            .alloc(ExprKind::Binary { op, left, right }, span)
    }

    fn parse_unary(&mut self) -> Result<ExprId, ParseError> {
        ensure_sufficient_stack(|| self.parse_unary_inner())
    }

    fn parse_unary_inner(&mut self) -> Result<ExprId, ParseError> {
        if self.check(&TokenKind::Minus) {
            let start = self.current_span();
            self.advance();
            let operand = self.parse_unary()?;
            let span = start.merge(self.arena.span(operand));
            return Ok(self.arena.alloc(
                ExprKind::Unary {
                    op: UnaryOp::Neg,
                    operand,
                },
                span,
            ));
        }
        self.parse_postfix()
    }

    /// A primary followed by any number of compact suffixes.
    ///
    /// `1 a b` parses as `b(a(1))`; the checker rejects the outer call
    /// because its operand is not a literal.
    fn parse_postfix(&mut self) -> Result<ExprId, ParseError> {
        let mut expr = self.parse_primary()?;
        while let TokenKind::Ident(suffix) = *self.current_kind() {
            let suffix_span = self.current_span();
            self.advance();
            let span = self.arena.span(expr).merge(suffix_span);
            expr = self.arena.alloc(
                ExprKind::SuffixCall {
                    operand: expr,
                    suffix,
                    suffix_span,
                },
                span,
            );
        }
        Ok(expr)
    }

    fn parse_primary(&mut self) -> Result<ExprId, ParseError> {
        let span = self.current_span();
        match self.current_kind() {
            TokenKind::Literal(token) => {
                self.advance();
                Ok(self.arena.alloc(ExprKind::Literal(token.clone()), span))
            }
            TokenKind::Ident(name) => {
                let name = *name;
                if self.cursor.next_is_lparen() {
                    self.advance();
                    self.parse_call(name, span)
                        .map_err(|e| e.in_context(ErrorContext::FunctionCall))
                } else {
                    Err(ParseError::new(
                        ErrorCode::E1002,
                        format!(
                            "expected expression, found bare identifier `{}`",
                            self.interner().lookup(name)
                        ),
                        span,
                    )
                    .with_help("a suffix must follow the literal it applies to, as in `1 ether`"))
                }
            }
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expr()?;
                self.expect(&TokenKind::RParen)?;
                let span = span.merge(self.previous_span());
                Ok(self.arena.alloc(ExprKind::Paren(inner), span))
            }
            TokenKind::Error => {
                // Already reported by the lexer.
                self.advance();
                Ok(self.arena.alloc(ExprKind::Error, span))
            }
            found => Err(ParseError::expected_expression(found, span)),
        }
    }

    /// Arguments of `callee(...)`, with the cursor on `(`.
    fn parse_call(
        &mut self,
        callee: Name,
        start: Span,
    ) -> Result<ExprId, ParseError> {
        self.expect(&TokenKind::LParen)?;
        let mut args = Vec::new();
        if !self.eat(&TokenKind::RParen) {
            loop {
                args.push(self.parse_expr()?);
                if !self.eat(&TokenKind::Comma) {
                    self.expect(&TokenKind::RParen)?;
                    break;
                }
            }
        }
        let span = start.merge(self.previous_span());
        Ok(self.arena.alloc(ExprKind::Call { callee, args }, span))
    }
}
