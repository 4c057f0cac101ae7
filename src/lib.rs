//! # Egg - a tiny embeddable expression language
//!
//! An interpreter for **Egg**, a minimal language in which everything is an
//! expression and every construct is written as a parenthesized application:
//!
//! ```text
//! do(define(total, 0),
//!    define(count, 1),
//!    while(<(count, 11),
//!          do(define(total, +(total, count)),
//!             define(count, +(count, 1)))),
//!    print(total))
//! ```
//!
//! Egg is small on purpose: three expression node kinds, five special forms
//! (`if`, `while`, `do`, `define`, `fun`), seven operators, and `print`.
//! What it does have in full is lexical scoping - `fun` produces real
//! closures that capture their defining environment by reference, so
//! recursive and higher-order functions work as expected.
//!
//! ## Quick Start
//!
//! ```rust
//! use egglang::{Evaluator, Value};
//!
//! # fn main() -> egglang::Result<()> {
//! let mut out = Vec::new();
//! let mut evaluator = Evaluator::new(&mut out);
//!
//! let result = evaluator.run(
//!     "do(define(plusOne, fun(a, +(a, 1))),
//!         print(plusOne(10)))",
//! )?;
//!
//! assert_eq!(result, Value::Number(11.0));
//! assert_eq!(out, b"11\n");
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! The classic interpreter pipeline, with no token stream in the middle -
//! the parser pulls atoms straight off the source text:
//!
//! ```text
//! Source Code → Parser (+ scanner helper) → Expression Tree → Evaluator → Value
//! ```
//!
//! ### Main components
//!
//! - [`parse`] - Builds an [`Expr`] tree from one Egg program
//! - [`Evaluator`] - Walks the tree against chained [`Environment`] frames
//! - [`Value`] - Runtime value representation (booleans, numbers, strings,
//!   functions)
//! - [`top_env`] - The global environment with `true`, `false`, the
//!   operators, and `print` pre-bound
//!
//! ## Embedding
//!
//! The evaluator takes its output sink as an injected dependency (anything
//! [`std::io::Write`]), performs no logging of failures, and keeps no state
//! between runs other than its global environment. Hosts may pre-bind extra
//! globals through [`Evaluator::globals`]. All errors propagate immediately
//! as [`Error`]; [`Error::kind`] classifies them into the syntax /
//! reference / type taxonomy for display.
//!
//! ## Limitations
//!
//! - A program is a single top-level expression; trailing text is an error.
//! - There is no cancellation: an Egg-level infinite `while` loop blocks
//!   the calling thread forever.
//! - String literals take their contents verbatim, with no escape
//!   sequences.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

/// Version of the Egg interpreter
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod lexer;
pub mod parser;
pub mod runtime;

pub use error::{Error, ErrorKind, Result};
pub use parser::{parse, Expr, Literal};
pub use runtime::{top_env, Builtin, Closure, Environment, Evaluator, Value};
