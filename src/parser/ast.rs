use serde::{Deserialize, Serialize};

/// Literal payload of a value expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    /// Number literal (Egg numbers are IEEE doubles)
    Number(f64),
    /// String literal
    Str(String),
}

/// One node of an Egg expression tree
///
/// Trees are built once by the parser and never mutated afterwards; the
/// evaluator only reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// Literal string or number
    Value(Literal),
    /// Variable reference or operator symbol
    Word(String),
    /// Function or special-form invocation
    Apply {
        /// The expression being applied, usually a `Word`
        operator: Box<Expr>,
        /// Argument expressions in source order
        args: Vec<Expr>,
    },
}

impl Expr {
    /// Convenience constructor for a number literal node
    pub fn number(n: f64) -> Self {
        Expr::Value(Literal::Number(n))
    }

    /// Convenience constructor for a string literal node
    pub fn string(s: impl Into<String>) -> Self {
        Expr::Value(Literal::Str(s.into()))
    }

    /// Convenience constructor for a word node
    pub fn word(name: impl Into<String>) -> Self {
        Expr::Word(name.into())
    }

    /// Convenience constructor for an application node
    pub fn apply(operator: Expr, args: Vec<Expr>) -> Self {
        Expr::Apply {
            operator: Box::new(operator),
            args,
        }
    }
}
