//! Expression checking over the flat arena.
//!
//! Classifies literals, routes compact suffix calls through the
//! [`SuffixResolver`] and explicit calls through a [`CallResolver`], and
//! checks negation and arithmetic against the resulting value types.
//!
//! Errors are pushed to the checker's own queue and the failing expression
//! yields `None`; parents of a failed expression stay silent so one mistake
//! produces one diagnostic.

use quill_diagnostic::queue::DiagnosticQueue;
use quill_diagnostic::{Diagnostic, ErrorCode};
use quill_ir::{
    BinaryOp, ExprArena, ExprId, ExprKind, Name, Span, StringInterner, Type, UnaryOp,
};
use quill_literal::{classify, BigRational};
use quill_stack::ensure_sufficient_stack;

use crate::call::{CallResolver, CallSite};
use crate::resolve::{CallSyntax, SuffixResolver};
use crate::rewrite::{rewrite, RewrittenCall};
use crate::value::{ConvertError, ValueKind};
use crate::{ValueFlags, ValueType};

/// A compact suffix call and what it was rewritten to.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SuffixRewrite {
    pub expr: ExprId,
    pub call: RewrittenCall,
}

pub struct ExprChecker<'a> {
    arena: &'a ExprArena,
    interner: &'a StringInterner,
    suffixes: SuffixResolver<'a>,
    calls: &'a dyn CallResolver,
    queue: DiagnosticQueue,
    rewrites: Vec<SuffixRewrite>,
}

impl<'a> ExprChecker<'a> {
    pub fn new(
        arena: &'a ExprArena,
        interner: &'a StringInterner,
        suffixes: SuffixResolver<'a>,
        calls: &'a dyn CallResolver,
        queue: DiagnosticQueue,
    ) -> Self {
        ExprChecker {
            arena,
            interner,
            suffixes,
            calls,
            queue,
            rewrites: Vec::new(),
        }
    }

    /// Rewrites recorded so far, in the order they were checked.
    pub fn rewrites(&self) -> &[SuffixRewrite] {
        &self.rewrites
    }

    /// Consume the checker, returning rewrites and diagnostics.
    pub fn finish(self) -> (Vec<SuffixRewrite>, DiagnosticQueue) {
        (self.rewrites, self.queue)
    }

    fn error(&mut self, diag: Diagnostic) -> Option<ValueType> {
        self.queue.emit_error(diag);
        None
    }

    /// Check an expression, returning its value type.
    pub fn check(&mut self, id: ExprId) -> Option<ValueType> {
        ensure_sufficient_stack(|| self.check_inner(id))
    }

    fn check_inner(&mut self, id: ExprId) -> Option<ValueType> {
        let arena = self.arena;
        let span = arena.span(id);
        match arena.kind(id) {
            ExprKind::Literal(token) => match classify(token) {
                Ok(literal) => Some(ValueType::literal(literal)),
                Err(err) => self.error(err.into_diagnostic()),
            },
            ExprKind::SuffixCall {
                operand,
                suffix,
                suffix_span,
            } => self.check_suffix_call(id, *operand, *suffix, *suffix_span),
            ExprKind::Call { callee, args } => {
                let mut values = Vec::with_capacity(args.len());
                let mut failed = false;
                for &arg in args {
                    match self.check(arg) {
                        Some(value) => values.push(value),
                        None => failed = true,
                    }
                }
                if failed {
                    return None;
                }
                let site = CallSite {
                    callee: *callee,
                    args: &values,
                    span,
                };
                match self.calls.resolve_call(&site) {
                    Ok(resolved) => Some(resolved.result),
                    Err(err) => self.error(err.into_diagnostic()),
                }
            }
            ExprKind::Unary {
                op: UnaryOp::Neg,
                operand,
            } => {
                let value = self.check(*operand)?;
                self.check_negation(value, span)
            }
            ExprKind::Binary { op, left, right } => {
                let left_value = self.check(*left);
                let right_value = self.check(*right);
                let (l, r) = (left_value?, right_value?);
                self.check_binary(*op, l, r, span)
            }
            ExprKind::Paren(inner) => {
                let mut value = self.check(*inner)?;
                // `(1)` is a constant but no longer a bare literal.
                value.flags.remove(ValueFlags::IS_LITERAL);
                Some(value)
            }
            ExprKind::Error => None,
        }
    }

    fn check_suffix_call(
        &mut self,
        id: ExprId,
        operand: ExprId,
        suffix: Name,
        suffix_span: Span,
    ) -> Option<ValueType> {
        let arena = self.arena;
        let literal = match arena.kind(operand) {
            ExprKind::Literal(token) => match classify(token) {
                Ok(literal) => literal,
                Err(err) => return self.error(err.into_diagnostic()),
            },
            ExprKind::Error => return None,
            _ => return self.non_literal_operand(operand, suffix, suffix_span),
        };

        match self
            .suffixes
            .resolve(suffix, suffix_span, &literal, CallSyntax::Compact)
        {
            Ok(selected) => {
                let call = rewrite(selected);
                let result = call.result.clone();
                self.rewrites.push(SuffixRewrite { expr: id, call });
                Some(result)
            }
            Err(err) => self.error(err.into_diagnostic()),
        }
    }

    fn non_literal_operand(
        &mut self,
        operand: ExprId,
        suffix: Name,
        suffix_span: Span,
    ) -> Option<ValueType> {
        // Report problems inside the operand first; a broken operand gets
        // no second diagnostic.
        let value = self.check(operand)?;
        let name = self.interner.lookup(suffix);
        let mut diag = Diagnostic::error(ErrorCode::E2006)
            .with_message(format!("suffix `{name}` applied to a non-literal expression"))
            .with_label(suffix_span, "suffixes apply only to literals")
            .with_secondary_label(
                self.arena.span(operand),
                format!("this is {}", value.describe(self.interner)),
            );
        diag = match self.arena.kind(operand) {
            ExprKind::SuffixCall { .. } => {
                diag.with_note("the result of a suffix call is not a literal")
            }
            ExprKind::Paren(_) => diag.with_note("parentheses turn a literal into an expression"),
            _ => diag,
        };
        self.error(diag.with_suggestion(format!("call the function explicitly: `{name}(...)`")))
    }

    fn check_negation(&mut self, value: ValueType, span: Span) -> Option<ValueType> {
        if let Some(number) = value.numeric_value() {
            return Some(ValueType::constant(-number));
        }
        match value.kind {
            ValueKind::Typed(ty @ Type::Int(_)) => Some(ValueType::typed(ty)),
            ValueKind::Typed(Type::Uint(bits)) => self.error(
                Diagnostic::error(ErrorCode::E2010)
                    .with_message(format!("cannot negate a value of unsigned type `uint{bits}`"))
                    .with_label(span, "unsigned values have no negation")
                    .with_note("a negative literal is negated after the suffix call"),
            ),
            _ => self.error(
                Diagnostic::error(ErrorCode::E2010)
                    .with_message(format!(
                        "cannot negate {}",
                        value.describe(self.interner)
                    ))
                    .with_label(span, "negation needs a number"),
            ),
        }
    }

    fn check_binary(
        &mut self,
        op: BinaryOp,
        left: ValueType,
        right: ValueType,
        span: Span,
    ) -> Option<ValueType> {
        if let (Some(l), Some(r)) = (left.numeric_value(), right.numeric_value()) {
            return Some(ValueType::constant(fold(op, &l, &r)));
        }

        match (left.concrete_type(), right.concrete_type()) {
            (Some(l), Some(r)) if l == r && l.is_integer() => Some(ValueType::typed(l)),
            (Some(ty), None) if ty.is_integer() => self.convert_operand(op, &right, ty, span),
            (None, Some(ty)) if ty.is_integer() => self.convert_operand(op, &left, ty, span),
            _ => self.error(self.mismatch(op, &left, &right, span)),
        }
    }

    /// Convert a constant operand to the other operand's concrete type.
    fn convert_operand(
        &mut self,
        op: BinaryOp,
        constant: &ValueType,
        ty: Type,
        span: Span,
    ) -> Option<ValueType> {
        match constant.convert_to(ty) {
            Ok(_) => Some(ValueType::typed(ty)),
            Err(ConvertError::OutOfRange | ConvertError::Fractional)
                if constant.numeric_value().is_some() =>
            {
                let ty_name = ty.display(self.interner).to_string();
                self.error(
                    Diagnostic::error(ErrorCode::E2004)
                        .with_message(format!(
                            "{} does not fit `{ty_name}`",
                            constant.describe(self.interner)
                        ))
                        .with_label(span, format!("operand of `{}`", op.symbol())),
                )
            }
            Err(_) => {
                let concrete = ValueType::typed(ty);
                self.error(self.mismatch(op, constant, &concrete, span))
            }
        }
    }

    fn mismatch(&self, op: BinaryOp, left: &ValueType, right: &ValueType, span: Span) -> Diagnostic {
        Diagnostic::error(ErrorCode::E2011)
            .with_message(format!(
                "cannot apply `{}` to {} and {}",
                op.symbol(),
                left.describe(self.interner),
                right.describe(self.interner)
            ))
            .with_label(span, "mismatched operand types")
    }
}

fn fold(op: BinaryOp, l: &BigRational, r: &BigRational) -> BigRational {
    match op {
        BinaryOp::Add => l + r,
        BinaryOp::Sub => l - r,
        BinaryOp::Mul => l * r,
    }
}
