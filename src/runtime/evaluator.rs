use std::cmp::Ordering;
use std::io::Write;
use std::rc::Rc;

use crate::error::{Error, Result};
use crate::parser::{parse, Expr};
use crate::runtime::{top_env, Builtin, Closure, Environment, Value};

/// The special forms: operators the evaluator handles itself, receiving
/// their argument expressions unevaluated
///
/// A closed set known at build time. Lookup happens before the operator
/// word is resolved as a variable, so these names act like keywords in
/// operator position while remaining usable as ordinary words elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpecialForm {
    If,
    While,
    Do,
    Define,
    Fun,
}

impl SpecialForm {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "if" => Some(SpecialForm::If),
            "while" => Some(SpecialForm::While),
            "do" => Some(SpecialForm::Do),
            "define" => Some(SpecialForm::Define),
            "fun" => Some(SpecialForm::Fun),
            _ => None,
        }
    }
}

/// Tree-walking evaluator for Egg expression trees
///
/// Owns the global environment and the host-supplied output sink that
/// `print` writes to. Evaluation is synchronous and single-threaded; an
/// Egg-level infinite loop blocks the caller.
///
/// # Examples
///
/// ```
/// use egglang::{Evaluator, Value};
///
/// # fn main() -> egglang::Result<()> {
/// let mut out = Vec::new();
/// let mut evaluator = Evaluator::new(&mut out);
/// let result = evaluator.run("+(1, 2)")?;
/// assert_eq!(result, Value::Number(3.0));
/// # Ok(())
/// # }
/// ```
pub struct Evaluator<'a> {
    globals: Rc<Environment>,
    output: &'a mut dyn Write,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator writing `print` output to `output`
    pub fn new(output: &'a mut dyn Write) -> Self {
        Evaluator {
            globals: top_env(),
            output,
        }
    }

    /// The global environment
    ///
    /// Hosts can bind extra values here before running programs.
    pub fn globals(&self) -> &Rc<Environment> {
        &self.globals
    }

    /// Parses and evaluates one Egg program
    ///
    /// Each run gets a fresh child frame of the globals, so top-level
    /// `define`s from one program do not leak into the next.
    pub fn run(&mut self, source: &str) -> Result<Value> {
        let program = parse(source)?;
        tracing::trace!(source_len = source.len(), "running egg program");
        let env = Environment::child(&self.globals);
        self.evaluate(&program, &env)
    }

    /// Evaluates one expression in the given environment
    pub fn evaluate(&mut self, expr: &Expr, env: &Rc<Environment>) -> Result<Value> {
        match expr {
            Expr::Value(lit) => Ok(lit.into()),

            Expr::Word(name) => env.get(name).ok_or_else(|| Error::UndefinedVariable {
                name: name.clone(),
            }),

            Expr::Apply { operator, args } => {
                if let Expr::Word(name) = operator.as_ref() {
                    if let Some(form) = SpecialForm::from_name(name) {
                        return self.eval_form(form, args, env);
                    }
                }
                let callee = self.evaluate(operator, env)?;
                let mut evaluated = Vec::with_capacity(args.len());
                for arg in args {
                    evaluated.push(self.evaluate(arg, env)?);
                }
                self.apply(callee, evaluated)
            }
        }
    }

    fn eval_form(&mut self, form: SpecialForm, args: &[Expr], env: &Rc<Environment>) -> Result<Value> {
        match form {
            SpecialForm::If => self.eval_if(args, env),
            SpecialForm::While => self.eval_while(args, env),
            SpecialForm::Do => self.eval_do(args, env),
            SpecialForm::Define => self.eval_define(args, env),
            SpecialForm::Fun => self.eval_fun(args, env),
        }
    }

    fn eval_if(&mut self, args: &[Expr], env: &Rc<Environment>) -> Result<Value> {
        let [cond, then_branch, else_branch] = args else {
            return Err(Error::BadFormArity { form: "if" });
        };
        if self.evaluate(cond, env)?.is_truthy() {
            self.evaluate(then_branch, env)
        } else {
            self.evaluate(else_branch, env)
        }
    }

    fn eval_while(&mut self, args: &[Expr], env: &Rc<Environment>) -> Result<Value> {
        let [cond, body] = args else {
            return Err(Error::BadFormArity { form: "while" });
        };
        while self.evaluate(cond, env)?.is_truthy() {
            self.evaluate(body, env)?;
        }
        // Egg has no undefined, so while yields false
        Ok(Value::Bool(false))
    }

    fn eval_do(&mut self, args: &[Expr], env: &Rc<Environment>) -> Result<Value> {
        let mut value = Value::Bool(false);
        for arg in args {
            value = self.evaluate(arg, env)?;
        }
        Ok(value)
    }

    fn eval_define(&mut self, args: &[Expr], env: &Rc<Environment>) -> Result<Value> {
        let [Expr::Word(name), value_expr] = args else {
            return Err(Error::BadDefine);
        };
        let value = self.evaluate(value_expr, env)?;
        env.define(name.clone(), value.clone());
        Ok(value)
    }

    fn eval_fun(&mut self, args: &[Expr], env: &Rc<Environment>) -> Result<Value> {
        let Some((body, params)) = args.split_last() else {
            return Err(Error::MissingFunctionBody);
        };
        let params = params
            .iter()
            .map(|param| match param {
                Expr::Word(name) => Ok(name.clone()),
                _ => Err(Error::BadParameterName),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Value::Closure(Rc::new(Closure {
            params,
            body: body.clone(),
            env: env.clone(),
        })))
    }

    fn apply(&mut self, callee: Value, args: Vec<Value>) -> Result<Value> {
        match callee {
            Value::Builtin(op) => self.call_builtin(op, &args),

            Value::Closure(closure) => {
                if args.len() != closure.params.len() {
                    return Err(Error::WrongArgumentCount {
                        expected: closure.params.len(),
                        got: args.len(),
                    });
                }
                let frame = Environment::child_with(
                    &closure.env,
                    closure.params.iter().cloned().zip(args),
                );
                self.evaluate(&closure.body, &frame)
            }

            other => Err(Error::NotCallable {
                type_name: other.type_name(),
            }),
        }
    }

    fn call_builtin(&mut self, op: Builtin, args: &[Value]) -> Result<Value> {
        match op {
            Builtin::Print => match args {
                [value] => {
                    writeln!(self.output, "{}", value)?;
                    Ok(value.clone())
                }
                _ => Err(Error::WrongArgumentCount {
                    expected: 1,
                    got: args.len(),
                }),
            },
            Builtin::Add => numeric(op, args, |a, b| a + b),
            Builtin::Sub => numeric(op, args, |a, b| a - b),
            Builtin::Mul => numeric(op, args, |a, b| a * b),
            Builtin::Div => numeric(op, args, |a, b| a / b),
            Builtin::Eq => {
                let (lhs, rhs) = two_operands(args)?;
                Ok(Value::Bool(lhs == rhs))
            }
            Builtin::Lt => compare(op, args, Ordering::is_lt),
            Builtin::Gt => compare(op, args, Ordering::is_gt),
        }
    }
}

fn two_operands(args: &[Value]) -> Result<(&Value, &Value)> {
    match args {
        [lhs, rhs] => Ok((lhs, rhs)),
        _ => Err(Error::WrongArgumentCount {
            expected: 2,
            got: args.len(),
        }),
    }
}

fn numeric(op: Builtin, args: &[Value], apply: fn(f64, f64) -> f64) -> Result<Value> {
    match two_operands(args)? {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(apply(*a, *b))),
        (lhs, rhs) => Err(Error::InvalidOperands {
            op: op.name(),
            lhs: lhs.type_name(),
            rhs: rhs.type_name(),
        }),
    }
}

fn compare(op: Builtin, args: &[Value], pick: fn(Ordering) -> bool) -> Result<Value> {
    match two_operands(args)? {
        // NaN never compares, so any NaN operand yields false
        (Value::Number(a), Value::Number(b)) => {
            Ok(Value::Bool(a.partial_cmp(b).is_some_and(pick)))
        }
        (Value::Str(a), Value::Str(b)) => Ok(Value::Bool(pick(a.cmp(b)))),
        (lhs, rhs) => Err(Error::InvalidOperands {
            op: op.name(),
            lhs: lhs.type_name(),
            rhs: rhs.type_name(),
        }),
    }
}
