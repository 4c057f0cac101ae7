//! Egg parser module
//!
//! Builds an expression tree from source text by recursive descent over
//! the parenthesized-application syntax `operator(arg, arg, ...)`.

mod ast;
mod expr_parser;

pub use ast::{Expr, Literal};
pub use expr_parser::parse;
