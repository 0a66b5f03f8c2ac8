use thiserror::Error;

use crate::{
    evaluator::{ExecutionError, ExecutionErrorKind},
    parser::{ParseError, Span},
};

/// Everything that can go wrong while turning text into a number.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Execution(#[from] ExecutionError),
}

/// Coarse classification of an [`EvalError`], used by the smart calculator
/// to decide whether to retry on the scientific path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    Syntax,
    Name,
    Type,
    Attribute,
    Arithmetic,
    Resource,
}

impl EvalError {
    pub fn class(&self) -> ErrorClass {
        match self {
            EvalError::Parse(_) => ErrorClass::Syntax,
            EvalError::Execution(e) => match e.kind {
                ExecutionErrorKind::UnresolvedName { .. } => ErrorClass::Name,
                ExecutionErrorKind::Type { .. } => ErrorClass::Type,
                ExecutionErrorKind::UnsupportedAttribute { .. } => ErrorClass::Attribute,
                ExecutionErrorKind::Arithmetic(_) => ErrorClass::Arithmetic,
                ExecutionErrorKind::StackOverflow { .. } => ErrorClass::Resource,
            },
        }
    }

    /// Syntax and name errors redirect to the scientific path. Everything
    /// else is final.
    pub fn triggers_fallback(&self) -> bool {
        matches!(self.class(), ErrorClass::Syntax | ErrorClass::Name)
    }

    /// The expression text the error points into.
    pub fn source_text(&self) -> &str {
        match self {
            EvalError::Parse(e) => &e.source,
            EvalError::Execution(e) => &e.source,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            EvalError::Parse(e) => e.to_diagnostic(),
            EvalError::Execution(e) => e.to_diagnostic(),
        }
    }
}

/// A renderer-agnostic description of an error.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// Primary diagnostic message.
    pub message: String,

    /// Source location of the primary issue.
    pub span: Span,

    /// Help lines suggesting how to fix the issue.
    pub help: Vec<String>,

    /// Optional error code (e.g., "E001").
    pub code: Option<String>,
}
