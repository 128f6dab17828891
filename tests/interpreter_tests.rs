//! Interpreter tests that bypass the type checker

use smallml::config::Config;
use smallml::desugar::desugar_program;
use smallml::interpreter::{Capture, Interpreter, RValue, RuntimeError};
use smallml::parser::parse;

struct Run {
    values: Result<Vec<RValue>, RuntimeError>,
    output: String,
}

fn run_with(source: &str, config: Config) -> Run {
    let program = parse(source).expect("parsing failed");
    let core = desugar_program(program).expect("desugaring failed");
    let capture = Capture::new();
    let mut interpreter = Interpreter::with_output(&config, Box::new(capture.clone()));

    let mut values = Vec::new();
    let mut failure = None;
    for stmt in &core {
        match interpreter.eval_statement(stmt) {
            Ok(Some(value)) => values.push(value),
            Ok(None) => {}
            Err(err) => {
                failure = Some(err);
                break;
            }
        }
    }

    Run {
        values: match failure {
            Some(err) => Err(err),
            None => Ok(values),
        },
        output: capture.contents(),
    }
}

fn run(source: &str) -> Run {
    run_with(source, Config::default())
}

fn last_value(source: &str) -> RValue {
    run(source)
        .values
        .expect("evaluation failed")
        .pop()
        .expect("no value")
}

#[test]
fn eval_literals() {
    assert!(matches!(last_value("42"), RValue::Integer(42)));
    assert!(matches!(last_value("true"), RValue::Bool(true)));
    assert!(matches!(last_value("unit"), RValue::Unit));
    assert!(matches!(last_value("\"hi\""), RValue::String(ref s) if s == "hi"));
}

#[test]
fn eval_curried_builtins() {
    assert!(matches!(last_value("val inc = add 1; inc 41"), RValue::Integer(42)));
    assert!(matches!(last_value("sub 10 (mul 2 3)"), RValue::Integer(4)));
    assert!(matches!(last_value("not (eq 1 2)"), RValue::Bool(true)));
}

#[test]
fn eval_val_is_call_by_name() {
    let result = run("val noisy = puts 1; noisy; noisy");
    assert_eq!(result.values.unwrap().len(), 2);
    assert_eq!(result.output, "1\n1\n");
}

#[test]
fn eval_val_sees_redefinition() {
    let value = last_value("val a = 1; val b = add a 1; val a = 10; b");
    assert!(matches!(value, RValue::Integer(11)));
}

#[test]
fn eval_lambda_argument_is_evaluated_once() {
    let result = run("(fun x => add x x) (puts 3)");
    assert!(result.values.is_err());
    assert_eq!(result.output, "3\n");
}

#[test]
fn eval_top_level_self_reference() {
    let value = last_value(
        "val count = fun n => if eq n 0 then 0 else add 1 (count (sub n 1)); count 25",
    );
    assert!(matches!(value, RValue::Integer(25)));
}

#[test]
fn eval_fix_without_type() {
    let value = last_value(
        "fix (fun self => fun n => if (eq n 0) then 1 else (mul n (self (sub n 1)))) 5",
    );
    assert!(matches!(value, RValue::Integer(120)));
}

#[test]
fn eval_only_one_branch() {
    let result = run("if true then puts \"yes\" else puts \"no\"");
    assert_eq!(result.output, "yes\n");
}

#[test]
fn eval_unify_is_identity_on_second() {
    assert!(matches!(last_value("unify 1 2"), RValue::Integer(2)));
}

#[test]
fn error_unbound_symbol() {
    let err = run("missing 1").values.unwrap_err();
    assert!(matches!(err, RuntimeError::UnboundSymbol { ref name, .. } if name == "missing"));
}

#[test]
fn error_bad_application() {
    let err = run("1 2").values.unwrap_err();
    assert_eq!(err.to_string(), "bad application 1 2");
}

#[test]
fn error_non_boolean_condition() {
    let err = run("if 1 then 2 else 3").values.unwrap_err();
    assert!(matches!(err, RuntimeError::NonBooleanCondition { .. }));
}

#[test]
fn error_recursion_limit() {
    let result = run_with(
        "val loop = fun x => loop x; loop 0",
        Config::default().with_max_depth(100),
    );
    assert!(matches!(
        result.values,
        Err(RuntimeError::RecursionLimit { limit: 100 })
    ));
}

#[test]
fn display_values() {
    assert_eq!(last_value("fun x => x").to_string(), "<fun x>");
    assert_eq!(last_value("add").to_string(), "<builtin add>");
    assert_eq!(last_value("add 1").to_string(), "<builtin add 1/2>");
    assert_eq!(last_value("\"raw\"").to_string(), "raw");
}
