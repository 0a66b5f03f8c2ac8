//! Runtime evaluation errors.
//!
//! Every error carries the span of the node that failed and a copy of the
//! source, so it outlives the arena holding the tree.
//!
//! # Error Categories
//!
//! - **Name errors**: an identifier the environment does not define.
//! - **Type errors**: calling a non-function, wrong argument count, using a
//!   function where a number is required.
//! - **Attribute errors**: attribute access never resolves.
//! - **Arithmetic errors**: division by zero, overflow, math domain errors.
//! - **Resource exceeded**: evaluation recursion deeper than the configured limit.

use core::fmt;

use thiserror::Error;

use crate::errors::Diagnostic;
use crate::parser::Span;

/// Runtime evaluation error with source location.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionError {
    pub kind: ExecutionErrorKind,
    pub source: String,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExecutionErrorKind {
    #[error("name '{name}' is not defined")]
    UnresolvedName { name: String },

    #[error("{message}")]
    Type { message: String },

    #[error("attribute access '.{attr}' is not supported on '{type_name}'")]
    UnsupportedAttribute { type_name: String, attr: String },

    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),

    #[error("evaluation stack overflow: depth {depth} exceeds maximum of {max_depth}")]
    StackOverflow { depth: usize, max_depth: usize },
}

/// A valid expression whose value is undefined or unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("{0}")]
    DivisionByZero(&'static str),

    #[error("{0}")]
    Overflow(&'static str),

    #[error("{0}")]
    Domain(&'static str),
}

impl ExecutionError {
    pub fn to_diagnostic(&self) -> Diagnostic {
        let (code, help) = match &self.kind {
            ExecutionErrorKind::UnresolvedName { .. } => (
                "E001",
                vec!["Only sin, cos and tan are available, and only in scientific mode".to_string()],
            ),
            ExecutionErrorKind::Type { .. } => ("E002", vec![]),
            ExecutionErrorKind::UnsupportedAttribute { .. } => ("E003", vec![]),
            ExecutionErrorKind::Arithmetic(ArithmeticError::DivisionByZero(_)) => ("E004", vec![]),
            ExecutionErrorKind::Arithmetic(_) => ("E005", vec![]),
            ExecutionErrorKind::StackOverflow { .. } => (
                "E006",
                vec!["Reduce nesting or simplify the expression".to_string()],
            ),
        };

        Diagnostic {
            message: self.kind.to_string(),
            span: self.span.clone(),
            help,
            code: Some(code.to_string()),
        }
    }
}

impl fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for ExecutionError {}
