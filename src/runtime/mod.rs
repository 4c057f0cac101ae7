//! Runtime execution for Egg programs: values, environments, evaluation

mod builtins;
mod environment;
mod evaluator;
mod value;

pub use builtins::{top_env, Builtin};
pub use environment::Environment;
pub use evaluator::Evaluator;
pub use value::{Closure, Value};
