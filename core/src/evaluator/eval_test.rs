//! Unit tests for the evaluator.

use super::*;
use crate::{
    api::{Environment, EvaluatorOptions, ParserOptions},
    errors::EvalError,
    parser::{self, Span},
    values::Number,
};

fn run(input: &str) -> Result<Number, EvalError> {
    evaluate(input, &Environment::scientific())
}

fn run_basic(input: &str) -> Result<Number, EvalError> {
    evaluate(input, &Environment::empty())
}

fn execution_error(input: &str) -> ExecutionError {
    match run(input) {
        Err(EvalError::Execution(e)) => e,
        other => panic!("expected execution error for {:?}, got {:?}", input, other),
    }
}

#[test]
fn test_literals() {
    assert_eq!(run("42"), Ok(Number::Int(42)));
    assert_eq!(run("0x1F"), Ok(Number::Int(31)));
    assert_eq!(run("1_000"), Ok(Number::Int(1000)));
    assert_eq!(run("2.5"), Ok(Number::Float(2.5)));
    assert_eq!(run(".5"), Ok(Number::Float(0.5)));
    assert_eq!(run("1e3"), Ok(Number::Float(1000.0)));
}

#[test]
fn test_int_arithmetic_stays_int() {
    assert_eq!(run("2 + 3"), Ok(Number::Int(5)));
    assert_eq!(run("2 * 3 - 10"), Ok(Number::Int(-4)));
    assert_eq!(run("7 // 2"), Ok(Number::Int(3)));
    assert_eq!(run("-7 % 3"), Ok(Number::Int(2)));
    assert_eq!(run("2 ** 8"), Ok(Number::Int(256)));
}

#[test]
fn test_integers_are_unbounded() {
    let shown = |input: &str| run(input).map(|n| n.to_string());
    assert_eq!(shown("2 ** 100"), Ok("1267650600228229401496703205376".to_string()));
    assert_eq!(shown("10 ** 20"), Ok("100000000000000000000".to_string()));
    assert_eq!(shown("99999999999999999999"), Ok("99999999999999999999".to_string()));
    assert_eq!(shown("99999999999999999999 + 1"), Ok("100000000000000000000".to_string()));
    assert_eq!(shown("9223372036854775807 + 1"), Ok("9223372036854775808".to_string()));
    assert_eq!(shown("-(2 ** 64) // 3"), Ok("-6148914691236517206".to_string()));
    assert_eq!(shown("2 ** 100 % 7"), Ok("2".to_string()));
}

#[test]
fn test_big_results_narrow_back_to_int() {
    assert_eq!(run("2 ** 100 - 2 ** 100"), Ok(Number::Int(0)));
    assert_eq!(run("-9223372036854775808"), Ok(Number::Int(i64::MIN)));
    assert_eq!(run("10 ** 20 // 10 ** 18"), Ok(Number::Int(100)));
    assert_eq!(run("2 ** 100 / 2 ** 99"), Ok(Number::Float(2.0)));
    assert_eq!(run("2 ** -100 * 2 ** 100"), Ok(Number::Float(1.0)));
}

#[test]
fn test_true_division_is_float() {
    assert_eq!(run("6 / 3"), Ok(Number::Float(2.0)));
    assert_eq!(run("1 / 8"), Ok(Number::Float(0.125)));
}

#[test]
fn test_precedence() {
    assert_eq!(run("2 + 3 * 4"), Ok(Number::Int(14)));
    assert_eq!(run("(2 + 3) * 4"), Ok(Number::Int(20)));
    assert_eq!(run("-2 ** 2"), Ok(Number::Int(-4)));
    assert_eq!(run("(-2) ** 2"), Ok(Number::Int(4)));
    assert_eq!(run("2 ** -1"), Ok(Number::Float(0.5)));
    assert_eq!(run("2 ** 3 ** 2"), Ok(Number::Int(512)));
    assert_eq!(run("10 - 4 - 3"), Ok(Number::Int(3)));
    assert_eq!(run("--3"), Ok(Number::Int(3)));
}

#[test]
fn test_mixed_arithmetic_promotes() {
    assert_eq!(run("1 + 0.5"), Ok(Number::Float(1.5)));
    assert_eq!(run("3 * 1.0"), Ok(Number::Float(3.0)));
    assert_eq!(run("7.0 // 2"), Ok(Number::Float(3.0)));
}

#[test]
fn test_function_calls() {
    assert_eq!(run("sin(0)"), Ok(Number::Float(0.0)));
    assert_eq!(run("cos(0) * 2"), Ok(Number::Float(2.0)));
    assert_eq!(run("tan(0,)"), Ok(Number::Float(0.0)));
    assert_eq!(run("sin(cos(0) - 1)"), Ok(Number::Float(0.0)));
    assert_eq!(run("(sin)(0)"), Ok(Number::Float(0.0)));
}

#[test]
fn test_unresolved_name() {
    let err = execution_error("x + 1");
    assert_eq!(
        err.kind,
        ExecutionErrorKind::UnresolvedName {
            name: "x".to_string()
        }
    );
    assert_eq!(err.span, Span::new(0, 1));
    assert_eq!(err.source, "x + 1");
}

#[test]
fn test_empty_environment_resolves_nothing() {
    assert!(matches!(
        run_basic("sin(0)"),
        Err(EvalError::Execution(ExecutionError {
            kind: ExecutionErrorKind::UnresolvedName { .. },
            ..
        }))
    ));
}

#[test]
fn test_calling_a_number() {
    let err = execution_error("3(4)");
    assert_eq!(
        err.kind,
        ExecutionErrorKind::Type {
            message: "'int' object is not callable".to_string()
        }
    );
}

#[test]
fn test_wrong_argument_count() {
    let err = execution_error("sin(1, 2)");
    assert_eq!(
        err.kind,
        ExecutionErrorKind::Type {
            message: "sin() takes exactly 1 argument (2 given)".to_string()
        }
    );
    assert_eq!(err.span, Span::new(0, 9));
}

#[test]
fn test_function_is_not_a_number() {
    assert!(matches!(
        execution_error("sin").kind,
        ExecutionErrorKind::Type { .. }
    ));
    assert!(matches!(
        execution_error("sin + 1").kind,
        ExecutionErrorKind::Type { .. }
    ));
    assert!(matches!(
        execution_error("cos(sin)").kind,
        ExecutionErrorKind::Type { .. }
    ));
}

#[test]
fn test_attribute_access_is_unsupported() {
    let err = execution_error("sin.real");
    assert_eq!(
        err.kind,
        ExecutionErrorKind::UnsupportedAttribute {
            type_name: "builtin_function_or_method".to_string(),
            attr: "real".to_string()
        }
    );

    // The receiver is evaluated first.
    assert!(matches!(
        execution_error("math.pi").kind,
        ExecutionErrorKind::UnresolvedName { .. }
    ));
}

#[test]
fn test_arithmetic_errors() {
    assert_eq!(
        execution_error("1 / 0").kind,
        ExecutionErrorKind::Arithmetic(ArithmeticError::DivisionByZero("division by zero"))
    );
    assert_eq!(
        execution_error("2 ** 10 ** 10").kind,
        ExecutionErrorKind::Arithmetic(ArithmeticError::Overflow("integer result too large"))
    );
    assert_eq!(
        execution_error("10 ** 400 * 1.0").kind,
        ExecutionErrorKind::Arithmetic(ArithmeticError::Overflow(
            "int too large to convert to float"
        ))
    );
    assert!(matches!(
        execution_error("(-8) ** 0.5").kind,
        ExecutionErrorKind::Arithmetic(ArithmeticError::Domain(_))
    ));
    assert!(matches!(
        execution_error("sin(1e308 * 10)").kind,
        ExecutionErrorKind::Arithmetic(ArithmeticError::Domain("math domain error"))
    ));
}

#[test]
fn test_error_span_covers_failing_operation() {
    let err = execution_error("2 * (5 % 0)");
    assert_eq!(err.span, Span::new(5, 10));
}

#[test]
fn test_parse_errors_are_reported() {
    assert!(matches!(run("2 +"), Err(EvalError::Parse(_))));
    assert!(matches!(run(""), Err(EvalError::Parse(_))));
    assert!(matches!(run("2 3"), Err(EvalError::Parse(_))));
}

#[test]
fn test_depth_limit() {
    let options = EvaluatorOptions { max_depth: 10 };
    let source = format!("{}1{}", "(1 + ".repeat(20), ")".repeat(20));

    let result = evaluate_with_options(&source, &Environment::empty(), &ParserOptions::default(), &options);
    match result {
        Err(EvalError::Execution(ExecutionError {
            kind: ExecutionErrorKind::StackOverflow { max_depth, .. },
            ..
        })) => assert_eq!(max_depth, 10),
        other => panic!("expected stack overflow, got {:?}", other),
    }

    let result = evaluate_with_options(
        &source,
        &Environment::empty(),
        &ParserOptions::default(),
        &EvaluatorOptions::default(),
    );
    assert_eq!(result, Ok(Number::Int(21)));
}

#[test]
fn test_default_limits_fit_a_small_stack() {
    let max_depth = ParserOptions::default().max_depth;
    let handle = std::thread::Builder::new()
        .stack_size(2 * 1024 * 1024)
        .spawn(move || {
            let parens = format!("{}1{}", "(1 + ".repeat(max_depth), ")".repeat(max_depth));
            let signs = format!("{}1", "-".repeat(max_depth));
            let sums = format!("{}1", "1 + ".repeat(499));
            [parens, signs, sums].map(|source| run(&source))
        })
        .unwrap();
    let [parens, signs, sums] = handle.join().unwrap();
    assert_eq!(parens, Ok(Number::Int(101)));
    assert_eq!(signs, Ok(Number::Int(1)));
    assert_eq!(sums, Ok(Number::Int(500)));
}

#[test]
fn test_evaluate_parsed_reuses_tree() {
    let arena = bumpalo::Bump::new();
    let parsed = parser::parse(&arena, "cos(0) + 1").unwrap();
    let options = EvaluatorOptions::default();

    assert_eq!(
        evaluate_parsed(&parsed, &Environment::scientific(), &options),
        Ok(Number::Float(2.0))
    );
    assert!(evaluate_parsed(&parsed, &Environment::empty(), &options).is_err());
}
