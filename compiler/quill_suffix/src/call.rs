//! Ordinary overload resolution for explicit calls `name(args...)`.
//!
//! The `suffix` marker plays no part here and nothing is decomposed: a
//! two-parameter suffix called explicitly takes two arguments.

use quill_diagnostic::{Diagnostic, ErrorCode};
use quill_ir::{Name, Span, StringInterner, Type};
use smallvec::SmallVec;

use crate::{ConcreteArg, FunctionSignature, SuffixTable, ValueType};

/// A call to resolve.
pub struct CallSite<'a> {
    pub callee: Name,
    pub args: &'a [ValueType],
    pub span: Span,
}

/// The overload an explicit call selected.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ResolvedCall {
    pub callee: Name,
    pub args: SmallVec<[ConcreteArg; 2]>,
    pub result: ValueType,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum CallErrorKind {
    UnknownFunction,
    ArgumentCount {
        expected: Vec<usize>,
        found: usize,
    },
    NoMatchingOverload {
        args: Vec<String>,
        candidates: Vec<String>,
    },
    AmbiguousCall {
        candidates: Vec<(String, Span)>,
    },
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct CallError {
    pub span: Span,
    pub name: String,
    pub kind: CallErrorKind,
}

impl CallError {
    pub fn code(&self) -> ErrorCode {
        match self.kind {
            CallErrorKind::UnknownFunction => ErrorCode::E2007,
            CallErrorKind::ArgumentCount { .. } => ErrorCode::E2012,
            CallErrorKind::NoMatchingOverload { .. } => ErrorCode::E2008,
            CallErrorKind::AmbiguousCall { .. } => ErrorCode::E2009,
        }
    }

    pub fn into_diagnostic(self) -> Diagnostic {
        let code = self.code();
        let name = self.name;
        match self.kind {
            CallErrorKind::UnknownFunction => Diagnostic::error(code)
                .with_message(format!("unknown function `{name}`"))
                .with_label(self.span, "not declared"),
            CallErrorKind::ArgumentCount { expected, found } => {
                let expected = expected
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" or ");
                Diagnostic::error(code)
                    .with_message(format!(
                        "`{name}` takes {expected} argument(s) but {found} were supplied"
                    ))
                    .with_label(self.span, "wrong number of arguments")
            }
            CallErrorKind::NoMatchingOverload { args, candidates } => Diagnostic::error(code)
                .with_message(format!(
                    "no overload of `{name}` accepts ({})",
                    args.join(", ")
                ))
                .with_label(self.span, "no matching overload")
                .with_note(format!("candidates: {}", candidates.join(", "))),
            CallErrorKind::AmbiguousCall { candidates } => {
                let mut diag = Diagnostic::error(code)
                    .with_message(format!("ambiguous call to `{name}`"))
                    .with_label(self.span, "more than one overload accepts these arguments");
                for (candidate, span) in candidates {
                    diag = diag.with_secondary_label(span, format!("candidate `{candidate}`"));
                }
                diag
            }
        }
    }
}

/// Resolves explicit calls.
pub trait CallResolver {
    fn resolve_call(&self, call: &CallSite<'_>) -> Result<ResolvedCall, CallError>;
}

/// Default resolver: match by name and arity, then require every argument to
/// convert implicitly. Exactly one overload may remain.
#[derive(Copy, Clone)]
pub struct OverloadResolver<'t> {
    table: &'t SuffixTable,
    interner: &'t StringInterner,
}

impl<'t> OverloadResolver<'t> {
    pub fn new(table: &'t SuffixTable, interner: &'t StringInterner) -> Self {
        OverloadResolver { table, interner }
    }

    fn render(&self, sig: &FunctionSignature) -> String {
        sig.display(self.interner).to_string()
    }
}

impl CallResolver for OverloadResolver<'_> {
    fn resolve_call(&self, call: &CallSite<'_>) -> Result<ResolvedCall, CallError> {
        let name = self.interner.lookup(call.callee);
        let error = |kind| CallError {
            span: call.span,
            name: name.to_string(),
            kind,
        };

        let overloads = self.table.overloads(call.callee);
        if overloads.is_empty() {
            return Err(error(CallErrorKind::UnknownFunction));
        }

        let by_arity: Vec<&FunctionSignature> = overloads
            .iter()
            .filter(|sig| sig.params.len() == call.args.len())
            .collect();
        if by_arity.is_empty() {
            let mut expected: Vec<usize> = overloads.iter().map(|sig| sig.params.len()).collect();
            expected.sort_unstable();
            expected.dedup();
            return Err(error(CallErrorKind::ArgumentCount {
                expected,
                found: call.args.len(),
            }));
        }

        let mut viable: Vec<(&FunctionSignature, SmallVec<[ConcreteArg; 2]>)> = Vec::new();
        for sig in by_arity {
            if let Some(args) = convert_all(call.args, &sig.params) {
                viable.push((sig, args));
            }
        }
        tracing::trace!(callee = name, viable = viable.len(), "resolved overloads");

        match viable.len() {
            0 => Err(error(CallErrorKind::NoMatchingOverload {
                args: call
                    .args
                    .iter()
                    .map(|arg| arg.describe(self.interner))
                    .collect(),
                candidates: overloads.iter().map(|sig| self.render(sig)).collect(),
            })),
            1 => {
                let (sig, args) = viable.swap_remove(0);
                let result = match sig.returns.as_slice() {
                    [ty] => ValueType::typed(*ty),
                    _ => ValueType::void(),
                };
                Ok(ResolvedCall {
                    callee: sig.name,
                    args,
                    result,
                })
            }
            _ => Err(error(CallErrorKind::AmbiguousCall {
                candidates: viable
                    .iter()
                    .map(|(sig, _)| (self.render(sig), sig.span))
                    .collect(),
            })),
        }
    }
}

fn convert_all(args: &[ValueType], params: &[Type]) -> Option<SmallVec<[ConcreteArg; 2]>> {
    args.iter()
        .zip(params)
        .map(|(arg, &ty)| {
            arg.convert_to(ty)
                .ok()
                .map(|value| ConcreteArg { ty, value })
        })
        .collect()
}
