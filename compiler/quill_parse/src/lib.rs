//! Lexer and recursive descent parser for Quill.
//!
//! Produces a flat AST using `ExprArena`. The parser is deliberately lenient
//! about what may precede a compact suffix: any primary expression parses as
//! the operand of a suffix call, and the expression checker rejects
//! non-literal operands with a dedicated diagnostic.

mod cursor;
mod error;
mod grammar;
mod lex_error;
mod lexer;
mod recovery;
mod token;

pub use cursor::Cursor;
pub use error::{ErrorContext, ParseError};
pub use lex_error::{LexError, LexErrorKind};
pub use lexer::{lex, LexOutput};
pub use recovery::{synchronize, TokenSet};
pub use token::{Token, TokenKind};

use quill_diagnostic::Diagnostic;
use quill_ir::{ExprArena, Module, Name, Span, StringInterner};

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    arena: ExprArena,
}

impl<'a> Parser<'a> {
    /// Create a new parser.
    pub fn new(tokens: &'a [Token], interner: &'a StringInterner) -> Self {
        Parser {
            cursor: Cursor::new(tokens, interner),
            arena: ExprArena::new(),
        }
    }

    // Cursor delegation.

    #[inline]
    fn current_kind(&self) -> &'a TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    fn current_span(&self) -> Span {
        self.cursor.current_span()
    }

    #[inline]
    fn previous_span(&self) -> Span {
        self.cursor.previous_span()
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    #[inline]
    fn check(&self, kind: &TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    fn advance(&mut self) -> &'a Token {
        self.cursor.advance()
    }

    #[inline]
    fn eat(&mut self, kind: &TokenKind) -> bool {
        self.cursor.eat(kind)
    }

    #[inline]
    fn expect(&mut self, kind: &TokenKind) -> Result<&'a Token, ParseError> {
        self.cursor.expect(kind)
    }

    #[inline]
    fn expect_ident(&mut self) -> Result<(Name, Span), ParseError> {
        self.cursor.expect_ident()
    }

    #[inline]
    fn interner(&self) -> &'a StringInterner {
        self.cursor.interner()
    }

    /// Parse a module: `function` declarations and `let` items.
    pub fn parse_module(mut self) -> ParseResult {
        let mut module = Module::default();
        let mut errors = Vec::new();

        while !self.is_at_end() {
            if self.check(&TokenKind::Function) {
                match self.parse_function() {
                    Ok(function) => module.functions.push(function),
                    Err(e) => {
                        errors.push(e.in_context(ErrorContext::FunctionDef));
                        self.recover_to_item();
                    }
                }
            } else if self.check(&TokenKind::Let) {
                match self.parse_let() {
                    Ok(item) => module.lets.push(item),
                    Err(e) => {
                        errors.push(e.in_context(ErrorContext::LetItem));
                        self.recover_to_item();
                    }
                }
            } else if self.check(&TokenKind::Error) {
                // Already reported by the lexer.
                self.advance();
            } else {
                errors.push(
                    ParseError::unexpected(
                        "`function` or `let`",
                        self.current_kind(),
                        self.current_span(),
                    )
                    .with_help("a source file holds function declarations and `let` items"),
                );
                self.advance();
                self.recover_to_item();
            }
        }

        tracing::debug!(
            functions = module.functions.len(),
            lets = module.lets.len(),
            errors = errors.len(),
            "parsed module"
        );

        ParseResult {
            module,
            arena: self.arena,
            errors,
        }
    }

    /// Recovery: skip to the next `function`, `let`, or past a `;`.
    fn recover_to_item(&mut self) {
        recovery::synchronize(&mut self.cursor, recovery::ITEM_START);
    }
}

/// Parse result containing module, arena, and any errors.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ParseResult {
    pub module: Module,
    pub arena: ExprArena,
    pub errors: Vec<ParseError>,
}

impl ParseResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Parse tokens into a module.
pub fn parse(tokens: &[Token], interner: &StringInterner) -> ParseResult {
    Parser::new(tokens, interner).parse_module()
}

/// Lex and parse a source file.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ParseOutput {
    pub module: Module,
    pub arena: ExprArena,
    /// Lexer diagnostics followed by parser diagnostics.
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

/// Lex and parse `source`, converting every error to a [`Diagnostic`].
#[tracing::instrument(level = "debug", skip_all)]
pub fn parse_source(source: &str, interner: &StringInterner) -> ParseOutput {
    let LexOutput { tokens, errors } = lex(source, interner);
    let result = parse(&tokens, interner);

    let mut diagnostics: Vec<Diagnostic> =
        errors.into_iter().map(LexError::into_diagnostic).collect();
    diagnostics.extend(result.errors.iter().map(ParseError::to_diagnostic));

    ParseOutput {
        module: result.module,
        arena: result.arena,
        diagnostics,
    }
}
