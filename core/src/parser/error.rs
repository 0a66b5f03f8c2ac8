use crate::errors::Diagnostic;
use crate::parser::parser::{INVALID_FLOAT, INVALID_INTEGER};
use crate::parser::{Rule, Span};

/// Parser error with context
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub source: String,
    pub span: Span,
}

/// Specific kinds of parse errors
#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    /// Unexpected token
    UnexpectedToken { expected: String, found: String },
    /// Invalid number literal
    InvalidNumber { text: String },
    /// Maximum nesting depth exceeded
    MaxDepthExceeded { depth: usize, max_depth: usize },
    /// Other parse errors (catch-all for Pest errors we don't specifically handle)
    Other { message: String },
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, source: String, span: Span) -> Self {
        Self { kind, source, span }
    }

    /// Convert to a Diagnostic for rendering
    pub fn to_diagnostic(&self) -> Diagnostic {
        let (message, code, help) = match &self.kind {
            ParseErrorKind::UnexpectedToken { expected, found } => (
                format!("Expected {}, found {}", expected, found),
                "P001",
                vec![],
            ),
            ParseErrorKind::InvalidNumber { text } => (
                format!("Invalid number literal '{}'", text),
                "P003",
                vec!["Check the digits against the radix prefix".to_string()],
            ),
            ParseErrorKind::MaxDepthExceeded { depth, max_depth } => (
                format!(
                    "Expression nesting depth {} exceeds maximum of {} levels",
                    depth, max_depth
                ),
                "P004",
                vec!["Reduce nesting or simplify the expression".to_string()],
            ),
            ParseErrorKind::Other { message } => (message.clone(), "P999", vec![]),
        };

        Diagnostic {
            message,
            span: self.span.clone(),
            help,
            code: Some(code.to_string()),
        }
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let diagnostic = self.to_diagnostic();
        write!(f, "syntax error: {}", diagnostic.message)?;

        if let Some(ref code) = diagnostic.code {
            write!(f, " [{}]", code)?;
        }

        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Convert Pest error to human-readable ParseError
pub fn convert_pest_error(err: pest::error::Error<Rule>, source: &str) -> ParseError {
    use pest::error::ErrorVariant;

    let span = match err.location {
        pest::error::InputLocation::Pos(pos) => Span(pos..pos),
        pest::error::InputLocation::Span((start, end)) => Span(start..end),
    };

    let kind = match err.variant {
        ErrorVariant::ParsingError {
            positives,
            negatives,
        } => {
            let expected = format_expected_rules(&positives);
            let found = if negatives.is_empty() {
                describe_input_at(source, span.0.start)
            } else {
                format_found_rules(&negatives)
            };

            ParseErrorKind::UnexpectedToken { expected, found }
        }
        ErrorVariant::CustomError { message }
            if message == INVALID_INTEGER || message == INVALID_FLOAT =>
        {
            ParseErrorKind::InvalidNumber {
                text: source.get(span.0.clone()).unwrap_or_default().to_string(),
            }
        }
        ErrorVariant::CustomError { message } => ParseErrorKind::Other { message },
    };

    ParseError::new(kind, source.to_string(), span)
}

/// Format expected rules in a human-readable way
fn format_expected_rules(rules: &[Rule]) -> String {
    if rules.is_empty() {
        return "something else".to_string();
    }

    // Group related rules into higher-level concepts
    let mut concepts: Vec<&str> = Vec::new();

    for rule in rules {
        let concept = match rule {
            Rule::integer | Rule::float => "number",
            Rule::ident => "identifier",
            Rule::EOI => "end of input",
            Rule::add
            | Rule::sub
            | Rule::mul
            | Rule::div
            | Rule::floor_div
            | Rule::modulo
            | Rule::pow => "operator",
            Rule::call_op => "argument list",
            Rule::attr_op => "attribute",
            _ => "expression",
        };
        if !concepts.contains(&concept) {
            concepts.push(concept);
        }
    }

    match concepts.split_last() {
        None => "something else".to_string(),
        Some((only, [])) => only.to_string(),
        Some((last, rest)) => format!("{} or {}", rest.join(", "), last),
    }
}

/// Format found rules in a human-readable way
fn format_found_rules(rules: &[Rule]) -> String {
    match rules[0] {
        Rule::ident => "identifier".to_string(),
        Rule::integer => "integer".to_string(),
        Rule::float => "floating-point number".to_string(),
        Rule::EOI => "end of input".to_string(),
        Rule::grouped => "grouped expression".to_string(),
        Rule::neg => "negation".to_string(),
        _ => format!("{:?}", rules[0]),
    }
}

/// Describe the character at `pos`, or end of input.
fn describe_input_at(source: &str, pos: usize) -> String {
    match source.get(pos..).and_then(|rest| rest.chars().next()) {
        Some(ch) => format!("'{}'", ch),
        None => "end of input".to_string(),
    }
}
