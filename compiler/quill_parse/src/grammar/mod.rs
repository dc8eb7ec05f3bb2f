//! Grammar rules, one module per syntactic category.

mod expr;
mod item;
