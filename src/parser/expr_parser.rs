use super::ast::{Expr, Literal};
use crate::error::{Error, Result};
use crate::lexer::{scan_atom, skip_space, Atom};

/// Parses one complete Egg program into an expression tree
///
/// A program is a single top-level expression, possibly spanning several
/// lines. Anything but whitespace left over after it is an error.
pub fn parse(source: &str) -> Result<Expr> {
    let (expr, rest) = parse_expression(source)?;
    if !skip_space(rest).is_empty() {
        return Err(Error::TrailingText);
    }
    Ok(expr)
}

/// Parses the expression at the front of `program`, returning it together
/// with the remaining text.
fn parse_expression(program: &str) -> Result<(Expr, &str)> {
    let program = skip_space(program);
    let (atom, rest) = scan_atom(program)?;
    let expr = match atom {
        Atom::Str(s) => Expr::Value(Literal::Str(s)),
        Atom::Number(n) => Expr::Value(Literal::Number(n)),
        Atom::Word(name) => Expr::Word(name),
    };
    parse_apply(expr, rest)
}

/// Checks whether `expr` is followed by a parenthesized argument list and,
/// if so, wraps it in an `Apply` node. Re-enters itself afterwards so that
/// chained applications like `f(x)(y)` parse as nested applies.
fn parse_apply(expr: Expr, program: &str) -> Result<(Expr, &str)> {
    let program = skip_space(program);
    let Some(rest) = program.strip_prefix('(') else {
        return Ok((expr, program));
    };

    let mut program = skip_space(rest);
    let mut args = Vec::new();
    while !program.starts_with(')') {
        let (arg, rest) = parse_expression(program)?;
        args.push(arg);
        program = skip_space(rest);
        if let Some(rest) = program.strip_prefix(',') {
            program = skip_space(rest);
        } else if !program.starts_with(')') {
            return Err(Error::ExpectedSeparator);
        }
    }

    let apply = Expr::apply(expr, args);
    parse_apply(apply, &program[1..])
}
