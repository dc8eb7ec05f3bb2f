//! Flat AST for literal-suffix expressions and function declarations.
//!
//! Expressions live in an [`ExprArena`] and refer to each other through
//! [`ExprId`] indices. Declarations are plain owned structs: they are built
//! once by the parser and read by the declaration checker.

use std::fmt;

use crate::{LiteralToken, Name, Span, Type};

/// Index into an expression arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[repr(transparent)]
pub struct ExprId(u32);

impl ExprId {
    /// Create a new `ExprId`.
    #[inline]
    pub const fn new(index: u32) -> Self {
        ExprId(index)
    }

    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExprId({})", self.0)
    }
}

/// Unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    Neg,
}

/// Binary arithmetic operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
}

impl BinaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
        }
    }
}

/// Expression node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// A literal token, classified during checking.
    Literal(LiteralToken),
    /// Compact suffix call: `operand suffix`.
    ///
    /// The parser accepts any primary as the operand so that misuse such as
    /// `f(1) g` reaches the checker and gets a precise diagnostic.
    SuffixCall {
        operand: ExprId,
        suffix: Name,
        suffix_span: Span,
    },
    /// Explicit call: `callee(args...)`.
    Call { callee: Name, args: Vec<ExprId> },
    Unary { op: UnaryOp, operand: ExprId },
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },
    /// Parenthesized expression. Kept so `(1) s` is not mistaken for `1 s`.
    Paren(ExprId),
    /// Placeholder for an expression that failed to parse.
    Error,
}

/// Arena owning every expression of a module.
#[derive(Clone, Default, Eq, PartialEq, Debug)]
pub struct ExprArena {
    exprs: Vec<Expr>,
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an expression, returning its id.
    ///
    /// # Panics
    /// Panics if the arena exceeds `u32::MAX` expressions.
    pub fn alloc(&mut self, kind: ExprKind, span: Span) -> ExprId {
        let index = u32::try_from(self.exprs.len())
            .unwrap_or_else(|_| panic!("expression arena exceeded u32::MAX entries"));
        self.exprs.push(Expr { kind, span });
        ExprId::new(index)
    }

    #[inline]
    pub fn get(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    #[inline]
    pub fn kind(&self, id: ExprId) -> &ExprKind {
        &self.get(id).kind
    }

    #[inline]
    pub fn span(&self, id: ExprId) -> Span {
        self.get(id).span
    }

    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }
}

/// State mutability of a function.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum StateMutability {
    Pure,
    View,
    Payable,
    #[default]
    NonPayable,
}

impl StateMutability {
    pub fn keyword(self) -> &'static str {
        match self {
            StateMutability::Pure => "pure",
            StateMutability::View => "view",
            StateMutability::Payable => "payable",
            StateMutability::NonPayable => "non-payable",
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Visibility {
    Internal,
    External,
    Public,
    Private,
}

/// A function parameter or return value.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Param {
    pub ty: Type,
    pub name: Option<Name>,
    pub span: Span,
}

/// A function declaration.
///
/// Top-level `function` items are free functions; they may not carry a
/// visibility other than `internal`. A function with an explicit visibility
/// is treated as a contract member (`is_free == false`).
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FunctionDecl {
    pub name: Name,
    pub name_span: Span,
    pub params: Vec<Param>,
    pub returns: Vec<Param>,
    pub mutability: StateMutability,
    pub visibility: Option<Visibility>,
    pub is_suffix: bool,
    pub span: Span,
}

impl FunctionDecl {
    /// Free functions carry no visibility, or `internal`.
    pub fn is_free(&self) -> bool {
        matches!(self.visibility, None | Some(Visibility::Internal))
    }
}

/// `let name = expr;`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct LetItem {
    pub name: Name,
    pub expr: ExprId,
    pub span: Span,
}

/// A parsed source file.
#[derive(Clone, Default, Eq, PartialEq, Debug)]
pub struct Module {
    pub functions: Vec<FunctionDecl>,
    pub lets: Vec<LetItem>,
}
