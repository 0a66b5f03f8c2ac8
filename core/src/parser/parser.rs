use bumpalo::Bump;
use lazy_static::lazy_static;
use num_bigint::BigUint;
use pest::Parser;
use pest::iterators::Pair;
use pest::pratt_parser::{Assoc, Op, PrattParser};
use pest_derive::Parser;

use crate::api::ParserOptions;
use crate::parser::error::{ParseError, ParseErrorKind, convert_pest_error};
use crate::parser::{AnnotatedSource, BinaryOp, Expr, Literal, ParsedExpr, Span, UnaryOp};

lazy_static! {
    // Note: precedence is defined lowest to highest.
    static ref PRATT_PARSER: PrattParser<Rule> = PrattParser::new()
        // (lowest precedence)
        .op(
            Op::infix(Rule::add, Assoc::Left) |
            Op::infix(Rule::sub, Assoc::Left)
        )                                               // `+`, `-`
        .op(
            Op::infix(Rule::mul, Assoc::Left) |
            Op::infix(Rule::div, Assoc::Left) |
            Op::infix(Rule::floor_div, Assoc::Left) |
            Op::infix(Rule::modulo, Assoc::Left)
        )                                               // `*`, `/`, `//`, `%`
        .op(Op::prefix(Rule::neg) | Op::prefix(Rule::pos)) // `-x`, `+x`
        .op(Op::infix(Rule::pow, Assoc::Right))          // `**` (right-assoc)

        // Postfix operators.
        .op(Op::postfix(Rule::call_op) | Op::postfix(Rule::attr_op)) // `()`, `.`
        // (highest precedence)
        ;
}

#[derive(Parser)]
#[grammar = "parser/expression.pest"]
pub struct ExpressionParser;

type PestError = pest::error::Error<Rule>;

/// Parse `source` into an arena-allocated expression tree with default options.
pub fn parse<'a>(arena: &'a Bump, source: &'a str) -> Result<ParsedExpr<'a>, ParseError> {
    parse_with_options(arena, source, &ParserOptions::default())
}

/// Parse `source`, rejecting nesting deeper than `max_depth`.
pub fn parse_with_max_depth<'a>(
    arena: &'a Bump,
    source: &'a str,
    max_depth: usize,
) -> Result<ParsedExpr<'a>, ParseError> {
    parse_with_options(arena, source, &ParserOptions { max_depth })
}

pub fn parse_with_options<'a>(
    arena: &'a Bump,
    source: &'a str,
    options: &ParserOptions,
) -> Result<ParsedExpr<'a>, ParseError> {
    check_nesting(source, options.max_depth)?;

    let mut pairs = ExpressionParser::parse(Rule::main, source)
        .map_err(|e| convert_pest_error(e, source))?;
    let main = pairs.next().ok_or_else(|| {
        ParseError::new(
            ParseErrorKind::Other {
                message: "empty parse result".to_string(),
            },
            source.to_string(),
            Span::new(0, source.len()),
        )
    })?;

    let ann = arena.alloc(AnnotatedSource::new(arena, source));
    let builder = TreeBuilder { arena, ann };
    let expr = builder
        .parse_expr(main)
        .map_err(|e| convert_pest_error(e, source))?;

    tracing::trace!(?expr, "parsed expression");
    Ok(ParsedExpr { expr, ann })
}

/// Reject inputs whose nesting would exceed `max_depth`.
///
/// Both pest and the Pratt parser recurse, so this runs before either sees
/// the input. Each parenthesis, prefix sign and `**` adds a level. A run of
/// prefix signs and `**` ends at any other binary operator or at a comma.
fn check_nesting(source: &str, max_depth: usize) -> Result<(), ParseError> {
    let bytes = source.as_bytes();
    // Run length pending outside each open parenthesis.
    let mut groups: Vec<usize> = Vec::new();
    let mut outer = 0usize;
    let mut run = 0usize;
    let mut expect_operand = true;
    let mut pos = 0;

    while pos < bytes.len() {
        let start = pos;
        let byte = bytes[pos];
        pos += 1;
        match byte {
            b'(' => {
                groups.push(run);
                outer += run + 1;
                run = 0;
                expect_operand = true;
            }
            b')' => {
                let pending = groups.pop().unwrap_or(0);
                outer = outer.saturating_sub(pending + 1);
                run = pending;
                expect_operand = false;
                continue;
            }
            b'+' | b'-' if expect_operand => run += 1,
            b'*' if !expect_operand && bytes.get(pos) == Some(&b'*') => {
                pos += 1;
                run += 1;
                expect_operand = true;
            }
            b'+' | b'-' | b'*' | b'/' | b'%' | b',' => {
                run = 0;
                expect_operand = true;
                continue;
            }
            b if is_word_byte(b) => {
                pos = skip_word(bytes, start);
                expect_operand = false;
                continue;
            }
            _ => continue,
        }

        let depth = outer + run;
        if depth > max_depth {
            return Err(ParseError::new(
                ParseErrorKind::MaxDepthExceeded { depth, max_depth },
                source.to_string(),
                Span::new(start, pos),
            ));
        }
    }
    Ok(())
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'.'
}

/// End of the identifier or number starting at `start`. The sign of a float
/// exponent (`1e-5`) belongs to the number.
fn skip_word(bytes: &[u8], start: usize) -> usize {
    let numeric = bytes[start].is_ascii_digit() || bytes[start] == b'.';
    let hex = numeric && matches!(bytes.get(start + 1), Some(b'x' | b'X'));
    let mut pos = start;
    while let Some(&b) = bytes.get(pos) {
        let exponent_sign = numeric
            && !hex
            && matches!(b, b'+' | b'-')
            && matches!(bytes[pos - 1], b'e' | b'E');
        if is_word_byte(b) || (pos > start && exponent_sign) {
            pos += 1;
        } else {
            break;
        }
    }
    pos
}

fn custom_error(message: &str, span: pest::Span<'_>) -> PestError {
    pest::error::Error::new_from_span(
        pest::error::ErrorVariant::CustomError {
            message: message.to_string(),
        },
        span,
    )
}

struct TreeBuilder<'a> {
    arena: &'a Bump,
    ann: &'a AnnotatedSource<'a, Expr<'a>>,
}

impl<'a> TreeBuilder<'a> {
    fn alloc(&self, expr: Expr<'a>, span: Span) -> &'a Expr<'a> {
        let expr = self.arena.alloc(expr);
        self.ann.add_span(expr, span);
        expr
    }

    fn span_of(&self, expr: &'a Expr<'a>) -> Span {
        self.ann
            .span_of(expr)
            .unwrap_or_else(|| Span::new(0, self.ann.source.len()))
    }

    fn parse_expr(&self, pair: Pair<'a, Rule>) -> Result<&'a Expr<'a>, PestError> {
        match pair.as_rule() {
            Rule::main | Rule::grouped => {
                let span = pair.as_span();
                let inner = pair
                    .into_inner()
                    .next()
                    .ok_or_else(|| custom_error("missing expected pair in rule", span))?;
                self.parse_expr(inner)
            }

            Rule::expression => PRATT_PARSER
                .map_primary(|primary| self.parse_expr(primary))
                .map_prefix(|op, rhs| {
                    let rhs = rhs?;
                    let op_kind = match op.as_rule() {
                        Rule::neg => UnaryOp::Neg,
                        Rule::pos => UnaryOp::Pos,
                        _ => unreachable!("Unknown prefix operator: {:?}", op.as_rule()),
                    };
                    let span = Span::combine(&Span::from(op.as_span()), &self.span_of(rhs));
                    Ok(self.alloc(
                        Expr::Unary {
                            op: op_kind,
                            expr: rhs,
                        },
                        span,
                    ))
                })
                .map_infix(|lhs, op, rhs| {
                    let (left, right) = (lhs?, rhs?);
                    let op = match op.as_rule() {
                        Rule::add => BinaryOp::Add,
                        Rule::sub => BinaryOp::Sub,
                        Rule::mul => BinaryOp::Mul,
                        Rule::div => BinaryOp::Div,
                        Rule::floor_div => BinaryOp::FloorDiv,
                        Rule::modulo => BinaryOp::Mod,
                        Rule::pow => BinaryOp::Pow,
                        _ => unreachable!("Unknown binary operator: {:?}", op.as_rule()),
                    };
                    let span = Span::combine(&self.span_of(left), &self.span_of(right));
                    Ok(self.alloc(Expr::Binary { op, left, right }, span))
                })
                .map_postfix(|lhs, op| {
                    let lhs = lhs?;
                    let span = Span::combine(&self.span_of(lhs), &Span::from(op.as_span()));
                    match op.as_rule() {
                        Rule::call_op => {
                            let args = op
                                .into_inner()
                                .map(|arg| self.parse_expr(arg))
                                .collect::<Result<Vec<_>, _>>()?;
                            let args = self.arena.alloc_slice_copy(&args);
                            Ok(self.alloc(
                                Expr::Call {
                                    callable: lhs,
                                    args,
                                },
                                span,
                            ))
                        }
                        Rule::attr_op => {
                            let op_span = op.as_span();
                            let attr = op
                                .into_inner()
                                .next()
                                .ok_or_else(|| custom_error("missing attribute ident", op_span))?
                                .as_str();
                            Ok(self.alloc(Expr::Attribute { value: lhs, attr }, span))
                        }
                        _ => unreachable!("Unknown postfix operator: {:?}", op.as_rule()),
                    }
                })
                .parse(pair.into_inner()),

            Rule::integer => {
                let span = pair.as_span();
                let value = parse_integer(pair.as_str())
                    .ok_or_else(|| custom_error(INVALID_INTEGER, span))?;
                let literal = match i64::try_from(&value) {
                    Ok(i) => Literal::Int(i),
                    Err(_) => Literal::BigInt(self.arena.alloc_slice_copy(&value.to_u32_digits())),
                };
                Ok(self.alloc(Expr::Literal(literal), span.into()))
            }

            Rule::float => {
                let span = pair.as_span();
                let text: String = pair.as_str().chars().filter(|c| *c != '_').collect();
                let value = text
                    .parse::<f64>()
                    .map_err(|_| custom_error(INVALID_FLOAT, span))?;
                Ok(self.alloc(Expr::Literal(Literal::Float(value)), span.into()))
            }

            Rule::ident => Ok(self.alloc(Expr::Ident(pair.as_str()), pair.as_span().into())),

            rule => Err(custom_error(
                &format!("unexpected rule {:?}", rule),
                pair.as_span(),
            )),
        }
    }
}

pub(crate) const INVALID_INTEGER: &str = "invalid integer literal";
pub(crate) const INVALID_FLOAT: &str = "invalid float literal";

/// Parse an integer literal with optional radix prefix and `_` separators.
fn parse_integer(text: &str) -> Option<BigUint> {
    let digits: String = text.chars().filter(|c| *c != '_').collect();
    let lower = digits.to_ascii_lowercase();
    let (radix, body) = if let Some(rest) = lower.strip_prefix("0x") {
        (16, rest)
    } else if let Some(rest) = lower.strip_prefix("0o") {
        (8, rest)
    } else if let Some(rest) = lower.strip_prefix("0b") {
        (2, rest)
    } else {
        (10, lower.as_str())
    };
    BigUint::parse_bytes(body.as_bytes(), radix)
}
