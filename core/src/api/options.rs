//! Configuration options for parsing and evaluation.

/// Configuration options for parsing.
///
/// # Example
///
/// ```
/// use smartcalc_core::api::ParserOptions;
///
/// let options = ParserOptions { max_depth: 50 };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Maximum nesting depth. Parentheses, prefix signs and `**` each
    /// count as a level.
    ///
    /// Default: 100
    pub max_depth: usize,
}

impl ParserOptions {
    pub const DEFAULT: Self = Self { max_depth: 100 };
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Configuration options for expression evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluatorOptions {
    /// Maximum evaluation stack depth (for recursion protection).
    ///
    /// Default: 1000
    pub max_depth: usize,
}

impl EvaluatorOptions {
    pub const DEFAULT: Self = Self { max_depth: 1000 };
}

impl Default for EvaluatorOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Options shared by every calculation a calculator performs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CalculatorOptions {
    pub parser: ParserOptions,
    pub evaluator: EvaluatorOptions,
}

impl CalculatorOptions {
    pub const DEFAULT: Self = Self {
        parser: ParserOptions::DEFAULT,
        evaluator: EvaluatorOptions::DEFAULT,
    };
}
