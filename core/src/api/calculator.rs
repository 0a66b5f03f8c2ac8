//! Calculators and their evaluation policies.

use core::{fmt, str::FromStr};

use bumpalo::Bump;
use tracing::debug;

use crate::{
    api::{CalculatorOptions, Environment, InvalidTypeError},
    errors::EvalError,
    evaluator,
    safety::{self, ClassificationError},
    values::Number,
};

/// What a smart calculator shows before its first successful calculation.
pub const NO_RESULT: &str = "No result";

/// The evaluation policy of a [`Calculator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalculatorKind {
    /// Literals and operators only.
    Basic,
    /// Basic plus `sin`, `cos` and `tan`.
    Scientific,
    /// Basic for call-free expressions, scientific for the rest.
    Smart,
}

impl CalculatorKind {
    pub const ALL: [CalculatorKind; 3] = [
        CalculatorKind::Basic,
        CalculatorKind::Scientific,
        CalculatorKind::Smart,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CalculatorKind::Basic => "Basic",
            CalculatorKind::Scientific => "Scientific",
            CalculatorKind::Smart => "Smart",
        }
    }
}

impl fmt::Display for CalculatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CalculatorKind {
    type Err = InvalidTypeError;

    /// Case-insensitive; surrounding whitespace is not tolerated.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| InvalidTypeError { name: s.to_string() })
    }
}

/// What [`Calculator::display_result`] shows.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayResult {
    Value(Number),
    /// No result yet, rendered as `None`.
    Absent,
    /// No result yet, rendered as `No result`.
    NoResult,
}

impl fmt::Display for DisplayResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayResult::Value(n) => write!(f, "{}", n),
            DisplayResult::Absent => f.write_str("None"),
            DisplayResult::NoResult => f.write_str(NO_RESULT),
        }
    }
}

/// A calculator holding at most one result.
///
/// A successful [`calculate`](Calculator::calculate) replaces the stored
/// result. A failed one leaves it untouched.
#[derive(Debug, Clone)]
pub struct Calculator {
    kind: CalculatorKind,
    environment: Environment,
    options: CalculatorOptions,
    result: Option<Number>,
}

impl Calculator {
    pub fn new(kind: CalculatorKind) -> Self {
        Self::with_options(kind, CalculatorOptions::default())
    }

    pub fn with_options(kind: CalculatorKind, options: CalculatorOptions) -> Self {
        let environment = match kind {
            CalculatorKind::Basic | CalculatorKind::Smart => Environment::empty(),
            CalculatorKind::Scientific => Environment::scientific(),
        };
        Self {
            kind,
            environment,
            options,
            result: None,
        }
    }

    pub fn kind(&self) -> CalculatorKind {
        self.kind
    }

    pub fn result(&self) -> Option<Number> {
        self.result.clone()
    }

    /// Evaluate `expression` under this calculator's policy and store the
    /// result.
    pub fn calculate(&mut self, expression: &str) -> Result<Number, EvalError> {
        let result = match self.kind {
            CalculatorKind::Basic | CalculatorKind::Scientific => {
                self.evaluate_in(&self.environment, expression)
            }
            CalculatorKind::Smart => self.calculate_smart(expression),
        }?;
        self.result = Some(result.clone());
        Ok(result)
    }

    pub fn display_result(&self) -> DisplayResult {
        match (&self.result, self.kind) {
            (Some(n), _) => DisplayResult::Value(n.clone()),
            (None, CalculatorKind::Smart) => DisplayResult::NoResult,
            (None, _) => DisplayResult::Absent,
        }
    }

    fn evaluate_in(&self, environment: &Environment, expression: &str) -> Result<Number, EvalError> {
        evaluator::evaluate_with_options(
            expression,
            environment,
            &self.options.parser,
            &self.options.evaluator,
        )
    }

    fn calculate_smart(&self, expression: &str) -> Result<Number, EvalError> {
        let arena = Bump::new();
        let source = arena.alloc_str(expression);

        let parsed = match safety::classify_with_options(&arena, source, &self.options.parser) {
            Ok(parsed) => parsed,
            Err(ClassificationError::Syntax(error)) => {
                debug!(error = %error, "Not a valid expression, falling back to scientific");
                return self.fallback(expression);
            }
        };

        if let Some(node) = safety::first_unsafe_node(&parsed) {
            debug!(kind = %node.kind, "Expression is not safe, falling back to scientific");
            return self.fallback(expression);
        }

        match evaluator::evaluate_parsed(&parsed, &Environment::empty(), &self.options.evaluator) {
            Ok(n) => Ok(n),
            Err(error) => {
                let error = EvalError::from(error);
                if error.triggers_fallback() {
                    debug!(error = %error, class = ?error.class(), "Falling back to scientific");
                    self.fallback(expression)
                } else {
                    Err(error)
                }
            }
        }
    }

    /// Single shot: whatever the scientific path returns is final.
    fn fallback(&self, expression: &str) -> Result<Number, EvalError> {
        self.evaluate_in(&Environment::scientific(), expression)
    }
}
