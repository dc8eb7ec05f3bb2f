//! Declaration checking and the suffix table.
//!
//! Every function marked `suffix` is validated once. Valid ones become
//! [`SuffixSignature`]s; invalid ones are reported (E2005) and left out of
//! suffix lookup. Every declaration, suffix or not, is also recorded as an
//! ordinary overload for explicit calls.

use std::fmt;

use quill_diagnostic::queue::DiagnosticQueue;
use quill_diagnostic::{Diagnostic, ErrorCode};
use quill_ir::{FunctionDecl, Name, Param, Span, StateMutability, StringInterner, Type};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// A parameter of a validated suffix function.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct SuffixParam {
    pub name: Option<Name>,
    pub ty: Type,
    pub span: Span,
}

/// A validated suffix function.
///
/// Invariant: one or two parameters; with two, the first is an integer type
/// and the second is unsigned.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SuffixSignature {
    pub name: Name,
    pub params: SmallVec<[SuffixParam; 2]>,
    pub return_type: Type,
    pub is_pure: bool,
    pub is_suffix: bool,
    pub span: Span,
}

impl SuffixSignature {
    /// `(mantissa, exponent)` form.
    #[inline]
    pub fn is_decomposing(&self) -> bool {
        self.params.len() == 2
    }

    /// Render as `name(uint8, uint8) returns (uint256)`.
    pub fn display<'a>(&'a self, interner: &'a StringInterner) -> SignatureDisplay<'a> {
        SignatureDisplay {
            name: self.name,
            params: self.params.iter().map(|p| p.ty).collect(),
            returns: SmallVec::from_buf([self.return_type]),
            interner,
        }
    }
}

/// Any declared function, as seen by explicit calls.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FunctionSignature {
    pub name: Name,
    pub params: SmallVec<[Type; 2]>,
    pub returns: SmallVec<[Type; 1]>,
    pub is_suffix: bool,
    pub span: Span,
}

impl FunctionSignature {
    fn from_decl(decl: &FunctionDecl) -> Self {
        FunctionSignature {
            name: decl.name,
            params: decl.params.iter().map(|p| p.ty).collect(),
            returns: decl.returns.iter().map(|p| p.ty).collect(),
            is_suffix: decl.is_suffix,
            span: decl.name_span,
        }
    }

    pub fn display<'a>(&'a self, interner: &'a StringInterner) -> SignatureDisplay<'a> {
        SignatureDisplay {
            name: self.name,
            params: self.params.clone(),
            returns: self.returns.clone(),
            interner,
        }
    }
}

/// Display adapter for signatures.
pub struct SignatureDisplay<'a> {
    name: Name,
    params: SmallVec<[Type; 2]>,
    returns: SmallVec<[Type; 1]>,
    interner: &'a StringInterner,
}

impl fmt::Display for SignatureDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.interner.lookup(self.name))?;
        write_types(f, &self.params, self.interner)?;
        f.write_str(")")?;
        if !self.returns.is_empty() {
            f.write_str(" returns (")?;
            write_types(f, &self.returns, self.interner)?;
            f.write_str(")")?;
        }
        Ok(())
    }
}

fn write_types(f: &mut fmt::Formatter<'_>, types: &[Type], interner: &StringInterner) -> fmt::Result {
    for (i, ty) in types.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", ty.display(interner))?;
    }
    Ok(())
}

/// A rule a suffix declaration breaks.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Restriction {
    NotPure(StateMutability),
    NotFree,
    ParamCount(usize),
    MantissaNotInteger(Type),
    ExponentNotUnsigned(Type),
    ReturnCount(usize),
    /// A parameter or return value in `storage` or `calldata`.
    Location(Type),
    PayableAddressParam,
}

impl Restriction {
    pub fn message(self, interner: &StringInterner) -> String {
        match self {
            Restriction::NotPure(mutability) => format!(
                "suffix functions must be `pure`, this one is {}",
                mutability.keyword()
            ),
            Restriction::NotFree => {
                "suffix functions must be free functions (no visibility other than `internal`)"
                    .to_string()
            }
            Restriction::ParamCount(n) => {
                format!("suffix functions take one or two parameters, found {n}")
            }
            Restriction::MantissaNotInteger(ty) => format!(
                "the mantissa parameter of a two-parameter suffix must be an integer, found `{}`",
                ty.display(interner)
            ),
            Restriction::ExponentNotUnsigned(ty) => format!(
                "the exponent parameter of a two-parameter suffix must be unsigned, found `{}`",
                ty.display(interner)
            ),
            Restriction::ReturnCount(n) => {
                format!("suffix functions return exactly one value, found {n}")
            }
            Restriction::Location(ty) => format!(
                "`{}` cannot be used by a suffix function, only `memory` values can",
                ty.display(interner)
            ),
            Restriction::PayableAddressParam => {
                "suffix function parameters cannot be `address payable`".to_string()
            }
        }
    }
}

fn has_forbidden_location(ty: Type) -> bool {
    ty.location().is_some_and(|loc| loc.is_persistent_or_boundary())
}

/// Location and `address payable` rules shared by every suffix signature.
///
/// Applied when the table is built and again when a call is resolved.
pub fn check_restrictions(
    params: impl IntoIterator<Item = Type>,
    returns: impl IntoIterator<Item = Type>,
) -> Option<Restriction> {
    for ty in params {
        if ty.is_payable_address() {
            return Some(Restriction::PayableAddressParam);
        }
        if has_forbidden_location(ty) {
            return Some(Restriction::Location(ty));
        }
    }
    returns
        .into_iter()
        .find(|ty| has_forbidden_location(*ty))
        .map(Restriction::Location)
}

/// Validate a `suffix` declaration.
pub fn validate(decl: &FunctionDecl) -> Result<SuffixSignature, Restriction> {
    if decl.mutability != StateMutability::Pure {
        return Err(Restriction::NotPure(decl.mutability));
    }
    if !decl.is_free() {
        return Err(Restriction::NotFree);
    }
    match decl.params.as_slice() {
        [_] => {}
        [mantissa, exponent] => {
            if !mantissa.ty.is_integer() {
                return Err(Restriction::MantissaNotInteger(mantissa.ty));
            }
            if !exponent.ty.is_unsigned() {
                return Err(Restriction::ExponentNotUnsigned(exponent.ty));
            }
        }
        params => return Err(Restriction::ParamCount(params.len())),
    }
    let [ret] = decl.returns.as_slice() else {
        return Err(Restriction::ReturnCount(decl.returns.len()));
    };
    if let Some(restriction) = check_restrictions(
        decl.params.iter().map(|p| p.ty),
        std::iter::once(ret.ty),
    ) {
        return Err(restriction);
    }

    Ok(SuffixSignature {
        name: decl.name,
        params: decl.params.iter().map(suffix_param).collect(),
        return_type: ret.ty,
        is_pure: true,
        is_suffix: true,
        span: decl.name_span,
    })
}

fn suffix_param(param: &Param) -> SuffixParam {
    SuffixParam {
        name: param.name,
        ty: param.ty,
        span: param.span,
    }
}

/// Every function of a module, indexed by name.
///
/// Immutable once built; shared by reference across checker threads.
#[derive(Clone, Default, Eq, PartialEq, Debug)]
pub struct SuffixTable {
    suffixes: FxHashMap<Name, Vec<SuffixSignature>>,
    functions: FxHashMap<Name, Vec<FunctionSignature>>,
}

impl SuffixTable {
    /// Validate declarations and build the table.
    ///
    /// Each invalid suffix declaration is reported once as E2005.
    #[tracing::instrument(level = "debug", skip_all, fields(functions = decls.len()))]
    pub fn build(
        decls: &[FunctionDecl],
        interner: &StringInterner,
        queue: &mut DiagnosticQueue,
    ) -> Self {
        let mut table = SuffixTable::default();

        for decl in decls {
            table
                .functions
                .entry(decl.name)
                .or_default()
                .push(FunctionSignature::from_decl(decl));

            if !decl.is_suffix {
                continue;
            }
            match validate(decl) {
                Ok(signature) => table
                    .suffixes
                    .entry(decl.name)
                    .or_default()
                    .push(signature),
                Err(restriction) => {
                    tracing::debug!(name = interner.lookup(decl.name), ?restriction, "rejected suffix");
                    queue.emit_error(declaration_error(decl, restriction, interner));
                }
            }
        }

        tracing::debug!(
            suffixes = table.suffixes.values().map(Vec::len).sum::<usize>(),
            "built suffix table"
        );
        table
    }

    /// Valid suffix functions named `name`, in declaration order.
    pub fn suffix_candidates(&self, name: Name) -> &[SuffixSignature] {
        self.suffixes.get(&name).map(Vec::as_slice).unwrap_or_default()
    }

    /// Every function named `name`, in declaration order.
    pub fn overloads(&self, name: Name) -> &[FunctionSignature] {
        self.functions.get(&name).map(Vec::as_slice).unwrap_or_default()
    }

    /// Check for a same-named function without the `suffix` marker.
    pub fn has_non_suffix(&self, name: Name) -> bool {
        self.overloads(name).iter().any(|f| !f.is_suffix)
    }
}

#[cfg(test)]
impl SuffixTable {
    /// Add a signature without validating it.
    pub(crate) fn insert_unvalidated(&mut self, signature: SuffixSignature) {
        self.suffixes.entry(signature.name).or_default().push(signature);
    }
}

fn declaration_error(
    decl: &FunctionDecl,
    restriction: Restriction,
    interner: &StringInterner,
) -> Diagnostic {
    Diagnostic::error(ErrorCode::E2005)
        .with_message(format!(
            "invalid suffix function `{}`",
            interner.lookup(decl.name)
        ))
        .with_label(decl.name_span, restriction.message(interner))
        .with_note("the function is not available as a suffix")
}

#[cfg(test)]
mod tests;
