//! Suffix resolution: from `literal name` to one selected suffix function.
//!
//! ```text
//! candidates(name) ──kind filter──► survivors
//!   0 survivors  ► NoMatchingSuffix (E2001)
//!   2+ survivors ► AmbiguousSuffixCall (E2002), whatever the value
//!   1 survivor   ► decompose / convert + range check ► SelectedCall
//! ```

use quill_diagnostic::{Diagnostic, ErrorCode};
use quill_ir::{Name, Span, StringInterner, Type};
use quill_literal::range::{fits_integer, integer_bounds};
use quill_literal::{decompose, BigInt, Decomposition, Literal, LiteralKind};
use smallvec::SmallVec;

use crate::compat::{accepts_literal, is_compatible};
use crate::decl::{check_restrictions, Restriction};
use crate::value::{literal_to_arg, ConcreteArg, ConvertError};
use crate::{ArgValue, SuffixSignature, SuffixTable};

/// How the suffix was written.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CallSyntax {
    /// `1.5 ether`: literal followed by the suffix name.
    Compact,
    /// `ether(1.5)`: resolved by ordinary overload rules instead.
    Explicit,
}

/// The outcome of resolving one compact suffix call.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct SelectedCall<'t> {
    pub signature: &'t SuffixSignature,
    /// Arguments converted to the declared parameter types.
    pub args: SmallVec<[ConcreteArg; 2]>,
    /// Set for two-parameter suffixes.
    pub decomposition: Option<Decomposition>,
    /// Span of `literal suffix`.
    pub span: Span,
}

/// Which part of a literal failed a range check.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum RangePart {
    Value,
    Mantissa,
    Exponent,
    Length,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum SuffixErrorKind {
    NoMatchingSuffix {
        name: String,
        literal: LiteralKind,
        /// A same-named function exists but is not a suffix.
        has_non_suffix: bool,
        /// Suffix candidates whose parameter types reject the literal.
        rejected: Vec<String>,
    },
    AmbiguousSuffixCall {
        name: String,
        candidates: Vec<(String, Span)>,
    },
    FractionalLiteralRejected {
        name: String,
        literal: String,
    },
    LiteralOutOfRange {
        part: RangePart,
        value: String,
        ty: String,
        /// `min..=max` for integer targets.
        bounds: Option<String>,
    },
    InvalidSuffixDeclaration {
        name: String,
        reason: String,
    },
    /// `resolve` was asked to handle `name(args)`.
    ExplicitSyntax {
        name: String,
    },
}

/// A failed suffix resolution.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SuffixError {
    /// Span of `literal suffix`.
    pub span: Span,
    pub suffix_span: Span,
    pub kind: SuffixErrorKind,
}

impl SuffixError {
    pub fn code(&self) -> ErrorCode {
        match self.kind {
            SuffixErrorKind::NoMatchingSuffix { .. } => ErrorCode::E2001,
            SuffixErrorKind::AmbiguousSuffixCall { .. } => ErrorCode::E2002,
            SuffixErrorKind::FractionalLiteralRejected { .. } => ErrorCode::E2003,
            SuffixErrorKind::LiteralOutOfRange { .. } => ErrorCode::E2004,
            SuffixErrorKind::InvalidSuffixDeclaration { .. } => ErrorCode::E2005,
            SuffixErrorKind::ExplicitSyntax { .. } => ErrorCode::E2008,
        }
    }

    pub fn into_diagnostic(self) -> Diagnostic {
        let code = self.code();
        match self.kind {
            SuffixErrorKind::NoMatchingSuffix {
                name,
                literal,
                has_non_suffix,
                rejected,
            } => {
                let mut diag = Diagnostic::error(code)
                    .with_message(format!("no suffix function `{name}` accepts this {literal}"))
                    .with_label(self.suffix_span, "no matching suffix");
                if has_non_suffix {
                    diag = diag.with_note(format!(
                        "a function `{name}` exists but is not declared `pure suffix`"
                    ));
                }
                if !rejected.is_empty() {
                    diag = diag.with_note(format!(
                        "candidates that do not accept this {literal}: {}",
                        rejected.join(", ")
                    ));
                }
                diag
            }
            SuffixErrorKind::AmbiguousSuffixCall { name, candidates } => {
                let mut diag = Diagnostic::error(code)
                    .with_message(format!("ambiguous suffix call `{name}`"))
                    .with_label(
                        self.span,
                        format!("{} suffix functions accept this literal", candidates.len()),
                    );
                for (candidate, span) in candidates {
                    diag = diag.with_secondary_label(span, format!("candidate `{candidate}`"));
                }
                diag.with_suggestion(format!(
                    "call the function explicitly, as in `{name}(...)`, to choose an overload"
                ))
            }
            SuffixErrorKind::FractionalLiteralRejected { name, literal } => {
                Diagnostic::error(code)
                    .with_message(format!(
                        "fractional literal `{literal}` cannot be passed to suffix `{name}`"
                    ))
                    .with_label(self.span, "this literal is not an integer")
                    .with_note(format!("`{name}` takes a single integer parameter"))
                    .with_suggestion(
                        "declare a two-parameter suffix `(mantissa, exponent)` to accept fractions",
                    )
            }
            SuffixErrorKind::LiteralOutOfRange {
                part,
                value,
                ty,
                bounds,
            } => {
                let what = match part {
                    RangePart::Value => "literal",
                    RangePart::Mantissa => "mantissa",
                    RangePart::Exponent => "exponent",
                    RangePart::Length => "string literal",
                };
                let mut diag = Diagnostic::error(code)
                    .with_message(format!("{what} `{value}` does not fit `{ty}`"))
                    .with_label(self.span, format!("{what} out of range"));
                if let Some(bounds) = bounds {
                    diag = diag.with_note(format!("`{ty}` holds {bounds}"));
                }
                diag
            }
            SuffixErrorKind::InvalidSuffixDeclaration { name, reason } => Diagnostic::error(code)
                .with_message(format!("suffix `{name}` cannot be called"))
                .with_label(self.suffix_span, reason),
            SuffixErrorKind::ExplicitSyntax { name } => Diagnostic::error(code)
                .with_message(format!("explicit call to `{name}` is not a suffix call"))
                .with_label(self.span, "resolved by ordinary overload rules"),
        }
    }
}

/// Resolves compact suffix calls against a [`SuffixTable`].
#[derive(Copy, Clone)]
pub struct SuffixResolver<'t> {
    table: &'t SuffixTable,
    interner: &'t StringInterner,
}

impl<'t> SuffixResolver<'t> {
    pub fn new(table: &'t SuffixTable, interner: &'t StringInterner) -> Self {
        SuffixResolver { table, interner }
    }

    /// Resolve `literal suffix`.
    ///
    /// Only the compact form is handled here; explicit calls go through the
    /// [`crate::CallResolver`], which never decomposes.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(suffix = self.interner.lookup(suffix), literal = literal.text())
    )]
    pub fn resolve(
        &self,
        suffix: Name,
        suffix_span: Span,
        literal: &Literal,
        syntax: CallSyntax,
    ) -> Result<SelectedCall<'t>, SuffixError> {
        let span = literal.span().merge(suffix_span);
        let error = |kind| SuffixError {
            span,
            suffix_span,
            kind,
        };
        let name = self.interner.lookup(suffix);

        if syntax == CallSyntax::Explicit {
            return Err(error(SuffixErrorKind::ExplicitSyntax {
                name: name.to_string(),
            }));
        }

        let candidates = self.table.suffix_candidates(suffix);
        let (survivors, rejected): (Vec<&'t SuffixSignature>, Vec<&'t SuffixSignature>) =
            candidates.iter().partition(|sig| is_compatible(sig, literal));
        tracing::trace!(
            candidates = candidates.len(),
            survivors = survivors.len(),
            "filtered suffix candidates by literal kind"
        );

        let signature = match survivors.as_slice() {
            [] => {
                return Err(error(SuffixErrorKind::NoMatchingSuffix {
                    name: name.to_string(),
                    literal: literal.kind(),
                    has_non_suffix: self.table.has_non_suffix(suffix),
                    rejected: rejected
                        .iter()
                        .map(|sig| sig.display(self.interner).to_string())
                        .collect(),
                }))
            }
            [signature] => *signature,
            many => {
                return Err(error(SuffixErrorKind::AmbiguousSuffixCall {
                    name: name.to_string(),
                    candidates: many
                        .iter()
                        .map(|sig| (sig.display(self.interner).to_string(), sig.span))
                        .collect(),
                }))
            }
        };

        if let Some(restriction) = check_restrictions(
            signature.params.iter().map(|p| p.ty),
            std::iter::once(signature.return_type),
        ) {
            return Err(error(self.invalid_declaration(name, restriction)));
        }

        let (args, decomposition) = if signature.is_decomposing() {
            let (args, decomposition) = self.decompose_args(signature, literal).map_err(error)?;
            (args, Some(decomposition))
        } else {
            (self.convert_arg(signature, literal).map_err(error)?, None)
        };

        Ok(SelectedCall {
            signature,
            args,
            decomposition,
            span,
        })
    }

    fn invalid_declaration(&self, name: &str, restriction: Restriction) -> SuffixErrorKind {
        SuffixErrorKind::InvalidSuffixDeclaration {
            name: name.to_string(),
            reason: restriction.message(self.interner),
        }
    }

    /// `(mantissa, exponent)` arguments for a two-parameter suffix.
    fn decompose_args(
        &self,
        signature: &SuffixSignature,
        literal: &Literal,
    ) -> Result<(SmallVec<[ConcreteArg; 2]>, Decomposition), SuffixErrorKind> {
        let mantissa_ty = signature.params[0].ty;
        let exponent_ty = signature.params[1].ty;

        let decomposition = literal
            .numeric_value()
            .ok_or(ConvertError::Incompatible)
            .and_then(|value| decompose(&value).map_err(|_| ConvertError::OutOfRange))
            .map_err(|_| self.out_of_range(RangePart::Value, literal.text(), mantissa_ty))?;

        let mantissa = integer_arg(&decomposition.mantissa, mantissa_ty).ok_or_else(|| {
            self.out_of_range(
                RangePart::Mantissa,
                &decomposition.mantissa.to_string(),
                mantissa_ty,
            )
        })?;
        let exponent_value = BigInt::from(decomposition.exponent);
        let exponent = integer_arg(&exponent_value, exponent_ty).ok_or_else(|| {
            self.out_of_range(
                RangePart::Exponent,
                &decomposition.exponent.to_string(),
                exponent_ty,
            )
        })?;

        tracing::trace!(
            mantissa = %decomposition.mantissa,
            exponent = decomposition.exponent,
            "decomposed literal"
        );
        Ok((SmallVec::from_buf([mantissa, exponent]), decomposition))
    }

    /// The single argument of a one-parameter suffix.
    fn convert_arg(
        &self,
        signature: &SuffixSignature,
        literal: &Literal,
    ) -> Result<SmallVec<[ConcreteArg; 2]>, SuffixErrorKind> {
        let ty = signature.params[0].ty;
        debug_assert!(accepts_literal(literal, ty));

        let value = literal_to_arg(literal, ty).map_err(|err| match err {
            ConvertError::Fractional => SuffixErrorKind::FractionalLiteralRejected {
                name: self.interner.lookup(signature.name).to_string(),
                literal: literal.text().to_string(),
            },
            ConvertError::OutOfRange | ConvertError::Incompatible => {
                let part = if literal.kind().is_string_like() {
                    RangePart::Length
                } else {
                    RangePart::Value
                };
                self.out_of_range(part, literal.text(), ty)
            }
        })?;

        let mut args = SmallVec::new();
        args.push(ConcreteArg { ty, value });
        Ok(args)
    }

    fn out_of_range(&self, part: RangePart, value: &str, ty: Type) -> SuffixErrorKind {
        SuffixErrorKind::LiteralOutOfRange {
            part,
            value: value.to_string(),
            ty: ty.display(self.interner).to_string(),
            bounds: integer_bounds(ty).map(|(min, max)| format!("{min}..={max}")),
        }
    }
}

fn integer_arg(value: &BigInt, ty: Type) -> Option<ConcreteArg> {
    fits_integer(value, ty).then(|| ConcreteArg {
        ty,
        value: ArgValue::Integer(value.clone()),
    })
}
