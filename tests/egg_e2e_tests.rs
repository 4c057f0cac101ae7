//! End-to-end tests for the Egg interpreter
//!
//! Each test drives the whole pipeline: source text through the parser and
//! evaluator, checking the result value and everything `print` emitted.

use egglang::{Error, ErrorKind, Evaluator, Value};

fn run(source: &str) -> egglang::Result<(Value, String)> {
    let mut out = Vec::new();
    let mut evaluator = Evaluator::new(&mut out);
    let value = evaluator.run(source)?;
    Ok((value, String::from_utf8(out).expect("print output is utf-8")))
}

#[test]
fn test_sum_one_to_ten() {
    let source = "do(define(total, 0),
                     define(count, 1),
                     while(<(count, 11),
                           do(define(total, +(total, count)),
                              define(count, +(count, 1)))),
                     print(total))";

    let (value, out) = run(source).unwrap();
    assert_eq!(value, Value::Number(55.0));
    // print fired exactly once, with the final total
    assert_eq!(out, "55\n");
}

#[test]
fn test_plus_one() {
    let source = "do(define(plusOne, fun(a, +(a, 1))),
                     print(plusOne(10)))";

    let (value, out) = run(source).unwrap();
    assert_eq!(value, Value::Number(11.0));
    assert_eq!(out, "11\n");
}

#[test]
fn test_recursive_pow() {
    let source = "do(define(pow, fun(base, exp,
                       if(==(exp, 0),
                          1,
                          *(base, pow(base, -(exp, 1)))))),
                     print(pow(2, 10)))";

    let (value, out) = run(source).unwrap();
    assert_eq!(value, Value::Number(1024.0));
    assert_eq!(out, "1024\n");
}

#[test]
fn test_while_loop_with_empty_output() {
    let source = "do(define(n, 3),
                     while(>(n, 0), define(n, -(n, 1))),
                     n)";

    let (value, out) = run(source).unwrap();
    assert_eq!(value, Value::Number(0.0));
    assert_eq!(out, "");
}

#[test]
fn test_higher_order_functions() {
    let source = "do(define(twice, fun(f, x, f(f(x)))),
                     define(inc, fun(n, +(n, 1))),
                     twice(inc, 40))";

    let (value, _) = run(source).unwrap();
    assert_eq!(value, Value::Number(42.0));
}

#[test]
fn test_string_values_flow_through() {
    let source = "do(define(greet, fun(name, print(name))),
                     greet(\"hello egg\"))";

    let (value, out) = run(source).unwrap();
    assert_eq!(value, Value::Str("hello egg".to_string()));
    assert_eq!(out, "hello egg\n");
}

#[test]
fn test_shadowing_is_local_to_the_call() {
    // The inner define must not clobber the outer binding
    let source = "do(define(x, 1),
                     define(shadow, fun(do(define(x, 99), x))),
                     shadow(),
                     x)";

    let (value, _) = run(source).unwrap();
    assert_eq!(value, Value::Number(1.0));
}

#[test]
fn test_unbalanced_parens_is_syntax_error() {
    let err = run("+(1, 2").unwrap_err();
    assert_eq!(err, Error::ExpectedSeparator);
    assert_eq!(err.kind(), ErrorKind::Syntax);
}

#[test]
fn test_trailing_garbage_is_syntax_error() {
    let err = run("1 2").unwrap_err();
    assert_eq!(err, Error::TrailingText);
    assert_eq!(err.kind(), ErrorKind::Syntax);
}

#[test]
fn test_undefined_variable_is_reference_error() {
    let err = run("print(missing)").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Reference);
    assert_eq!(err.to_string(), "Undefined variable: missing");
}

#[test]
fn test_calling_a_number_is_type_error() {
    let err = run("do(define(five, 5), five(1))").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Type);
    assert_eq!(err.to_string(), "Applying a non-function: number");
}

#[test]
fn test_wrong_closure_arity_is_type_error() {
    let err = run("do(define(pair, fun(a, b, +(a, b))), pair(1))").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Type);
    assert_eq!(
        err,
        Error::WrongArgumentCount {
            expected: 2,
            got: 1
        }
    );
}

#[test]
fn test_error_stops_evaluation_before_later_prints() {
    // Left-to-right evaluation: the failure in the second argument keeps
    // the third from running
    let err = run("do(print(1), missing, print(2))").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Reference);
}
