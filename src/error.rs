//! Error types for the Egg interpreter

use thiserror::Error;

/// Egg interpreter errors
///
/// Every failure the parser or evaluator can produce. All variants are
/// terminal: the core never catches or retries, errors propagate straight
/// to the caller of [`parse`](crate::parse) or
/// [`Evaluator::evaluate`](crate::Evaluator::evaluate).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // Parse errors
    /// No atomic token could be scanned at the current position
    ///
    /// **Triggered by:** source that starts with a character no token shape
    /// accepts, e.g. a stray `)` or an unterminated string literal.
    /// The payload is the remaining unparsed text.
    #[error("Unexpected syntax: {0}")]
    UnexpectedSyntax(String),

    /// Argument list continued with something other than `,` or `)`
    ///
    /// **Example:** `+(1, 2` (closing parenthesis never arrives)
    #[error("Expected ',' or ')'")]
    ExpectedSeparator,

    /// Non-whitespace input remained after a complete top-level expression
    ///
    /// **Example:** `1 2` (two expressions where one is allowed)
    #[error("Unexpected text after program")]
    TrailingText,

    /// Wrong number of argument expressions to a special form
    #[error("Bad number of args to {form}")]
    BadFormArity {
        /// Name of the offending special form
        form: &'static str,
    },

    /// `define` applied to something other than a word plus one expression
    #[error("Bad use of define")]
    BadDefine,

    /// `fun` called with no arguments at all (a body is mandatory)
    #[error("Functions need a body")]
    MissingFunctionBody,

    /// A `fun` parameter position held a non-word expression
    #[error("Arg names must be words")]
    BadParameterName,

    // Runtime errors
    /// Lookup of a name bound nowhere in the environment chain
    ///
    /// **Triggered by:** evaluating a word before any `define` of it
    /// **Prevention:** bind names with `define(name, value)` before use
    #[error("Undefined variable: {name}")]
    UndefinedVariable {
        /// The unbound name
        name: String,
    },

    /// The operator of an application evaluated to a non-callable value
    ///
    /// **Example:** `5(1)` (a number is not a function)
    #[error("Applying a non-function: {type_name}")]
    NotCallable {
        /// Type of the non-callable value
        type_name: &'static str,
    },

    /// A function was invoked with the wrong number of arguments
    #[error("Wrong number of arguments: expected {expected}, got {got}")]
    WrongArgumentCount {
        /// Parameter count of the callee
        expected: usize,
        /// Argument count at the call site
        got: usize,
    },

    /// An operator was applied to operand types it does not support
    ///
    /// **Example:** `+(1, "a")` (number plus string)
    #[error("Invalid operands for {op}: {lhs} and {rhs}")]
    InvalidOperands {
        /// Operator name
        op: &'static str,
        /// Left operand type
        lhs: &'static str,
        /// Right operand type
        rhs: &'static str,
    },

    /// Writing to the host-supplied output sink failed
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

/// Coarse error classification matching the language-level taxonomy
///
/// Hosts that present errors to users (a REPL line, a script runner) can
/// branch on the kind instead of on individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed source text or malformed special-form usage
    Syntax,
    /// Lookup of an unbound name
    Reference,
    /// A value of the wrong type or arity at a call site
    Type,
    /// Failure of the host-supplied output sink
    Io,
}

impl Error {
    /// Classify this error into the language-level taxonomy
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnexpectedSyntax(_)
            | Error::ExpectedSeparator
            | Error::TrailingText
            | Error::BadFormArity { .. }
            | Error::BadDefine
            | Error::MissingFunctionBody
            | Error::BadParameterName => ErrorKind::Syntax,

            Error::UndefinedVariable { .. } => ErrorKind::Reference,

            Error::NotCallable { .. }
            | Error::WrongArgumentCount { .. }
            | Error::InvalidOperands { .. } => ErrorKind::Type,

            Error::Io(_) => ErrorKind::Io,
        }
    }
}

/// Result type for Egg operations
pub type Result<T> = std::result::Result<T, Error>;
