//! smartcalc - Arithmetic and trigonometric calculators
//!
//! # Overview
//!
//! Expressions are parsed into a typed syntax tree and evaluated by a
//! tree-walking interpreter. No host code is ever executed. Three policies
//! decide which names an expression may use:
//!
//! - **Basic**: literals, `+ - * / // % **` and parentheses
//! - **Scientific**: Basic plus `sin`, `cos` and `tan`
//! - **Smart**: expressions without calls or attribute access are evaluated
//!   as Basic, everything else (and any syntax or name error) on the
//!   Scientific path
//!
//! # Quick Start
//!
//! ```
//! use smartcalc::CalculatorFactory;
//!
//! let mut calc = CalculatorFactory::instance().create("smart").unwrap();
//! calc.calculate("2 * 3").unwrap();
//! assert_eq!(calc.display_result().to_string(), "6");
//!
//! calc.calculate("sin(0)").unwrap();
//! assert_eq!(calc.display_result().to_string(), "0.0");
//! ```
//!
//! # Errors
//!
//! Failures carry the source and the span of the failing node. Use
//! [`render_error`] to print them with a source snippet.

// Re-export public API from smartcalc_core
pub use smartcalc_core::api::{
    Calculator, CalculatorFactory, CalculatorKind, CalculatorOptions, DisplayResult, Environment,
    EvaluatorOptions, InvalidTypeError, NO_RESULT, ParserOptions,
};

// Re-export commonly used types and values
pub use smartcalc_core::parser::{self, Expr, ParsedExpr, Span};
pub use smartcalc_core::safety::{self, ClassificationError, classify, is_safe};
pub use smartcalc_core::values::{self, Number, Value};

// Re-export errors
pub use smartcalc_core::errors::{Diagnostic, ErrorClass, EvalError};
pub use smartcalc_core::evaluator::{
    self, ArithmeticError, ExecutionError, ExecutionErrorKind, evaluate,
};

mod error_renderer;
pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};
