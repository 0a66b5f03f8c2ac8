//! Tree-walking evaluator for arithmetic expressions.
//!
//! The evaluator interprets a parsed expression (`ParsedExpr`) against an
//! [`Environment`] of native functions and produces a [`Number`].
//!
//! ## Design Principles
//!
//! - **Never panic**: overflow, zero divisors and bad calls are errors
//! - **Stack-safe**: depth tracking prevents stack overflow from deeply nested expressions
//! - **Explicit names**: only names present in the environment resolve
//!
//! ## Example
//!
//! ```ignore
//! use smartcalc_core::{api::Environment, evaluator};
//!
//! let result = evaluator::evaluate("sin(0) + 2 ** 3", &Environment::scientific()).unwrap();
//! assert_eq!(result.to_string(), "8.0");
//! ```

mod error;
mod eval;
mod operators;

#[cfg(test)]
mod eval_test;

pub use error::{ArithmeticError, ExecutionError, ExecutionErrorKind};

use bumpalo::Bump;

use crate::{
    api::{Environment, EvaluatorOptions, ParserOptions},
    errors::EvalError,
    parser::{self, ParsedExpr},
    values::Number,
};

/// Parse and evaluate `source` with default limits.
pub fn evaluate(source: &str, environment: &Environment) -> Result<Number, EvalError> {
    evaluate_with_options(
        source,
        environment,
        &ParserOptions::default(),
        &EvaluatorOptions::default(),
    )
}

/// Parse and evaluate `source` with explicit parser and evaluator limits.
///
/// The syntax tree lives in a scratch arena dropped before returning.
pub fn evaluate_with_options(
    source: &str,
    environment: &Environment,
    parser_options: &ParserOptions,
    evaluator_options: &EvaluatorOptions,
) -> Result<Number, EvalError> {
    let arena = Bump::new();
    let source = arena.alloc_str(source);
    let parsed = parser::parse_with_options(&arena, source, parser_options)?;
    Ok(evaluate_parsed(&parsed, environment, evaluator_options)?)
}

/// Evaluate an already parsed expression.
///
/// ## Returns
///
/// The resulting number, or an execution error pointing at the failing node.
pub fn evaluate_parsed(
    parsed: &ParsedExpr<'_>,
    environment: &Environment,
    options: &EvaluatorOptions,
) -> Result<Number, ExecutionError> {
    let result = eval::Evaluator::new(*options, parsed, environment).eval();
    if let Err(error) = &result {
        tracing::debug!(error = %error, "Evaluation failed");
    }
    result
}
