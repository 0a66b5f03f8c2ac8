//! Static safety classification of expressions.
//!
//! An expression is *safe* when its tree contains no function calls and no
//! attribute accesses. Only literal values, names and arithmetic remain, so a
//! safe tree can be evaluated without a function allowlist. Numeric domain
//! errors are not detected here; they surface during evaluation.

use bumpalo::Bump;
use thiserror::Error;

use crate::api::ParserOptions;
use crate::parser::{self, NodeKind, ParseError, ParsedExpr, Span};
use crate::visitor::walk;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClassificationError {
    /// The text is not a single well-formed expression.
    #[error(transparent)]
    Syntax(#[from] ParseError),
}

/// The first disallowed node found in a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsafeNode {
    pub kind: NodeKind,
    pub span: Option<Span>,
}

/// Parse `source` into a tree that can be checked with [`is_safe`].
pub fn classify<'a>(
    arena: &'a Bump,
    source: &'a str,
) -> Result<ParsedExpr<'a>, ClassificationError> {
    classify_with_options(arena, source, &ParserOptions::default())
}

pub fn classify_with_options<'a>(
    arena: &'a Bump,
    source: &'a str,
    options: &ParserOptions,
) -> Result<ParsedExpr<'a>, ClassificationError> {
    Ok(parser::parse_with_options(arena, source, options)?)
}

/// Returns true iff no node of the tree is a call or an attribute access.
pub fn is_safe(parsed: &ParsedExpr<'_>) -> bool {
    first_unsafe_node(parsed).is_none()
}

/// Find the first call or attribute access in pre-order, if any.
pub fn first_unsafe_node(parsed: &ParsedExpr<'_>) -> Option<UnsafeNode> {
    let found = walk(parsed.expr).find(|expr| is_disallowed(expr.kind()))?;
    let node = UnsafeNode {
        kind: found.kind(),
        span: parsed.ann.span_of(found),
    };
    tracing::trace!(kind = %node.kind, span = ?node.span, "disallowed node");
    Some(node)
}

fn is_disallowed(kind: NodeKind) -> bool {
    matches!(kind, NodeKind::Call | NodeKind::AttributeAccess)
}
