//! Lexical analysis for Egg
//!
//! Egg has no token stream: the parser consumes source text directly and
//! asks this module for one atom at a time, carrying the remaining text
//! along. Only three atomic shapes exist (string literal, number literal,
//! bare word).

mod scanner;

pub use scanner::{scan_atom, skip_space, Atom};
