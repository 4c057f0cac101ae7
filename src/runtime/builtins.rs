use std::rc::Rc;

use crate::runtime::{Environment, Value};

/// Built-in primitives bound in the global environment
///
/// A closed set, fully known at build time. Each operator takes exactly two
/// arguments; `print` takes one. The evaluator owns the dispatch because
/// `print` needs its output sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    /// Numeric addition
    Add,
    /// Numeric subtraction
    Sub,
    /// Numeric multiplication
    Mul,
    /// Numeric division (division by zero yields infinity, not an error)
    Div,
    /// Equality on any two values; different types are never equal
    Eq,
    /// Less-than on numbers or strings
    Lt,
    /// Greater-than on numbers or strings
    Gt,
    /// Emits its argument to the output sink and returns it unchanged
    Print,
}

impl Builtin {
    /// The name this primitive is bound to in the global environment
    pub fn name(self) -> &'static str {
        match self {
            Builtin::Add => "+",
            Builtin::Sub => "-",
            Builtin::Mul => "*",
            Builtin::Div => "/",
            Builtin::Eq => "==",
            Builtin::Lt => "<",
            Builtin::Gt => ">",
            Builtin::Print => "print",
        }
    }

    const ALL: [Builtin; 8] = [
        Builtin::Add,
        Builtin::Sub,
        Builtin::Mul,
        Builtin::Div,
        Builtin::Eq,
        Builtin::Lt,
        Builtin::Gt,
        Builtin::Print,
    ];
}

/// Builds the global environment
///
/// Binds `true`, `false`, the operators, and `print`. These are ordinary
/// bindings, not keywords: an Egg program may shadow any of them with
/// `define`.
pub fn top_env() -> Rc<Environment> {
    let env = Environment::root();
    env.define("true", Value::Bool(true));
    env.define("false", Value::Bool(false));
    for op in Builtin::ALL {
        env.define(op.name(), Value::Builtin(op));
    }
    env
}
