//! Function declarations, parameters, types, and `let` items.

use quill_diagnostic::ErrorCode;
use quill_ir::{
    DataLocation, FunctionDecl, LetItem, Param, Span, StateMutability, Type, Visibility,
};

use crate::{ErrorContext, ParseError, Parser, TokenKind};

impl Parser<'_> {
    /// `function name(params) modifiers* (returns (params))? (';' | body)?`
    pub(crate) fn parse_function(&mut self) -> Result<FunctionDecl, ParseError> {
        let start = self.current_span();
        self.expect(&TokenKind::Function)?;
        let (name, name_span) = self.expect_ident()?;

        self.expect(&TokenKind::LParen)?;
        let params = self
            .parse_param_list()
            .map_err(|e| e.in_context(ErrorContext::FunctionParams))?;

        let mut mutability: Option<(StateMutability, Span)> = None;
        let mut visibility: Option<Visibility> = None;
        let mut is_suffix = false;
        loop {
            let span = self.current_span();
            match self.current_kind() {
                TokenKind::Pure => set_mutability(&mut mutability, StateMutability::Pure, span)?,
                TokenKind::View => set_mutability(&mut mutability, StateMutability::View, span)?,
                TokenKind::Payable => {
                    set_mutability(&mut mutability, StateMutability::Payable, span)?;
                }
                TokenKind::Suffix => {
                    if is_suffix {
                        return Err(ParseError::new(
                            ErrorCode::E1001,
                            "duplicate `suffix` marker",
                            span,
                        ));
                    }
                    is_suffix = true;
                }
                TokenKind::Internal => set_visibility(&mut visibility, Visibility::Internal, span)?,
                TokenKind::External => set_visibility(&mut visibility, Visibility::External, span)?,
                TokenKind::Public => set_visibility(&mut visibility, Visibility::Public, span)?,
                TokenKind::Private => set_visibility(&mut visibility, Visibility::Private, span)?,
                _ => break,
            }
            self.advance();
        }

        let returns = if self.eat(&TokenKind::Returns) {
            self.expect(&TokenKind::LParen)?;
            self.parse_param_list()?
        } else {
            Vec::new()
        };

        if self.check(&TokenKind::LBrace) {
            self.skip_body()?;
        } else {
            self.eat(&TokenKind::Semi);
        }

        Ok(FunctionDecl {
            name,
            name_span,
            params,
            returns,
            mutability: mutability.map(|(m, _)| m).unwrap_or_default(),
            visibility,
            is_suffix,
            span: start.merge(self.previous_span()),
        })
    }

    /// Parameters after the opening `(`, through the closing `)`.
    fn parse_param_list(&mut self) -> Result<Vec<Param>, ParseError> {
        let mut params = Vec::new();
        if self.eat(&TokenKind::RParen) {
            return Ok(params);
        }
        loop {
            params.push(self.parse_param()?);
            if !self.eat(&TokenKind::Comma) {
                self.expect(&TokenKind::RParen)?;
                return Ok(params);
            }
        }
    }

    /// `type location? name?`
    fn parse_param(&mut self) -> Result<Param, ParseError> {
        let start = self.current_span();
        let mut ty = self.parse_type()?;

        let location = match self.current_kind() {
            TokenKind::Memory => Some(DataLocation::Memory),
            TokenKind::Storage => Some(DataLocation::Storage),
            TokenKind::Calldata => Some(DataLocation::Calldata),
            _ => None,
        };
        if let Some(location) = location {
            let span = self.current_span();
            self.advance();
            ty = with_location(ty, location, span)?;
        }

        let name = if let TokenKind::Ident(name) = *self.current_kind() {
            self.advance();
            Some(name)
        } else {
            None
        };

        Ok(Param {
            ty,
            name,
            span: start.merge(self.previous_span()),
        })
    }

    fn parse_type(&mut self) -> Result<Type, ParseError> {
        let (name, span) = self
            .expect_ident()
            .map_err(|e| e.in_context(ErrorContext::TypeAnnotation))?;
        let word = self.interner().lookup(name);

        if word == "address" && self.eat(&TokenKind::Payable) {
            return Ok(Type::Address { payable: true });
        }
        if let Some(ty) = Type::from_keyword(word) {
            return Ok(ty);
        }
        if looks_elementary(word) {
            return Err(ParseError::new(
                ErrorCode::E1001,
                format!("invalid elementary type `{word}`"),
                span,
            )
            .with_help("integer widths are 8..=256 in steps of 8; `bytesN` takes N in 1..=32"));
        }
        Ok(Type::Named {
            name,
            location: None,
        })
    }

    /// Skip a balanced `{ ... }` function body. Bodies are opaque here.
    fn skip_body(&mut self) -> Result<(), ParseError> {
        let open = self.current_span();
        self.expect(&TokenKind::LBrace)?;
        let mut depth = 1usize;
        while depth > 0 {
            if self.is_at_end() {
                return Err(ParseError::unexpected(
                    "`}`",
                    self.current_kind(),
                    self.current_span(),
                )
                .with_help(format!("the body opened at {open:?} is never closed")));
            }
            match self.current_kind() {
                TokenKind::LBrace => depth += 1,
                TokenKind::RBrace => depth -= 1,
                _ => {}
            }
            self.advance();
        }
        Ok(())
    }

    /// `let name = expr;`
    pub(crate) fn parse_let(&mut self) -> Result<LetItem, ParseError> {
        let start = self.current_span();
        self.expect(&TokenKind::Let)?;
        let (name, _) = self.expect_ident()?;
        self.expect(&TokenKind::Eq)?;
        let expr = self
            .parse_expr()
            .map_err(|e| e.in_context(ErrorContext::Expression))?;
        self.expect(&TokenKind::Semi)?;
        Ok(LetItem {
            name,
            expr,
            span: start.merge(self.previous_span()),
        })
    }
}

fn set_mutability(
    slot: &mut Option<(StateMutability, Span)>,
    value: StateMutability,
    span: Span,
) -> Result<(), ParseError> {
    if let Some((existing, _)) = *slot {
        return Err(ParseError::new(
            ErrorCode::E1001,
            format!(
                "conflicting state mutability `{}` and `{}`",
                existing.keyword(),
                value.keyword()
            ),
            span,
        ));
    }
    *slot = Some((value, span));
    Ok(())
}

fn set_visibility(
    slot: &mut Option<Visibility>,
    value: Visibility,
    span: Span,
) -> Result<(), ParseError> {
    if slot.is_some() {
        return Err(ParseError::new(
            ErrorCode::E1001,
            "multiple visibility specifiers",
            span,
        ));
    }
    *slot = Some(value);
    Ok(())
}

/// Apply an explicit data location. Only reference types take one.
fn with_location(ty: Type, location: DataLocation, span: Span) -> Result<Type, ParseError> {
    match ty {
        Type::Bytes(_) => Ok(Type::Bytes(location)),
        Type::String(_) => Ok(Type::String(location)),
        Type::Named { name, .. } => Ok(Type::Named {
            name,
            location: Some(location),
        }),
        _ => Err(ParseError::new(
            ErrorCode::E1001,
            format!(
                "data location `{}` can only be given for reference types",
                location.keyword()
            ),
            span,
        )),
    }
}

/// `uint7`, `int300`, `bytes33`: shaped like an elementary type but invalid.
fn looks_elementary(word: &str) -> bool {
    ["uint", "int", "bytes"].iter().any(|prefix| {
        word.strip_prefix(prefix)
            .is_some_and(|rest| !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()))
    })
}
