use std::fmt;
use std::rc::Rc;

use crate::parser::{Expr, Literal};
use crate::runtime::{Builtin, Environment};

/// Runtime value representation
///
/// Egg has no `undefined`: forms that produce nothing by contract (an empty
/// `do`, any `while`) return `Bool(false)` instead.
#[derive(Debug, Clone)]
pub enum Value {
    /// Boolean value
    Bool(bool),
    /// Number value (IEEE double, like the number literals)
    Number(f64),
    /// String value
    Str(String),
    /// Built-in operator or primitive
    Builtin(Builtin),
    /// User-defined function produced by `fun`
    Closure(Rc<Closure>),
}

/// A user-defined function: parameter names, body, and the environment the
/// `fun` form was evaluated in
///
/// The defining environment is held by `Rc`, not copied: bindings added to
/// it after the closure is created are visible on later calls. Recursive
/// functions rely on this (`define(f, fun(..., f(...)))` works because the
/// closure and the `define` share one frame).
#[derive(Debug)]
pub struct Closure {
    /// Parameter names, bound positionally at call time
    pub params: Vec<String>,
    /// Body expression, evaluated in a fresh child of `env`
    pub body: Expr,
    /// Captured defining environment
    pub env: Rc<Environment>,
}

impl Value {
    /// Name of this value's type, for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Builtin(_) | Value::Closure(_) => "function",
        }
    }

    /// Egg truthiness: every value except the boolean `false` is truthy,
    /// including `0` and the empty string
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Bool(false))
    }
}

impl From<&Literal> for Value {
    fn from(lit: &Literal) -> Self {
        match lit {
            Literal::Number(n) => Value::Number(*n),
            Literal::Str(s) => Value::Str(s.clone()),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Builtin(a), Value::Builtin(b)) => a == b,
            // Closures compare by identity, like the object references
            // they are
            (Value::Closure(a), Value::Closure(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::Str(s) => write!(f, "{}", s),
            Value::Builtin(op) => write!(f, "builtin {}", op.name()),
            Value::Closure(c) => write!(f, "fun/{}", c.params.len()),
        }
    }
}
