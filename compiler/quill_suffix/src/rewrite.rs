//! Rewriting a resolved suffix call into an ordinary call.

use quill_ir::{Name, Span};
use smallvec::SmallVec;

use crate::{ConcreteArg, SelectedCall, ValueType};

/// `literal suffix`, rewritten as `suffix(args...)`.
///
/// The result is a value of the declared return type. It is never a literal,
/// so it cannot take a further compact suffix.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct RewrittenCall {
    pub callee: Name,
    pub args: SmallVec<[ConcreteArg; 2]>,
    pub result: ValueType,
    pub span: Span,
}

pub fn rewrite(selected: SelectedCall<'_>) -> RewrittenCall {
    let result = ValueType::typed(selected.signature.return_type);
    debug_assert!(!result.is_literal());
    RewrittenCall {
        callee: selected.signature.name,
        args: selected.args,
        result,
        span: selected.span,
    }
}
