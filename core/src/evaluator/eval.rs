//! Core evaluation logic.

use crate::{
    api::{Environment, EvaluatorOptions},
    evaluator::{
        ExecutionError, ExecutionErrorKind::{self, *},
        operators,
    },
    parser::{AnnotatedSource, Expr, ParsedExpr, Span},
    values::{Number, Value},
};

/// Evaluator for parsed expressions.
pub struct Evaluator<'a, 'env> {
    options: EvaluatorOptions,
    root: &'a Expr<'a>,
    /// Source spans, used for error context.
    ann: &'a AnnotatedSource<'a, Expr<'a>>,
    environment: &'env Environment,
    depth: usize,
}

impl<'a, 'env> Evaluator<'a, 'env> {
    pub fn new(
        options: EvaluatorOptions,
        parsed: &ParsedExpr<'a>,
        environment: &'env Environment,
    ) -> Self {
        Self {
            options,
            root: parsed.expr,
            ann: parsed.ann,
            environment,
            depth: 0,
        }
    }

    /// Evaluate the whole expression. A bare function is not a result.
    pub fn eval(&mut self) -> Result<Number, ExecutionError> {
        let expr = self.root;
        let value = self.eval_expr(expr)?;
        self.expect_number(expr, value)
    }

    fn error<T>(&self, expr: &'a Expr<'a>, kind: ExecutionErrorKind) -> Result<T, ExecutionError> {
        Err(self.add_error_context(expr, kind))
    }

    fn add_error_context(&self, expr: &'a Expr<'a>, kind: ExecutionErrorKind) -> ExecutionError {
        let source = self.ann.source;
        let span = self
            .ann
            .span_of(expr)
            .unwrap_or_else(|| Span::new(0, source.len()));
        ExecutionError {
            kind,
            source: source.to_string(),
            span,
        }
    }

    fn eval_expr(&mut self, expr: &'a Expr<'a>) -> Result<Value, ExecutionError> {
        // Check depth before recursing
        if self.depth >= self.options.max_depth {
            return self.error(
                expr,
                StackOverflow {
                    depth: self.depth,
                    max_depth: self.options.max_depth,
                },
            );
        }

        self.depth += 1;
        let result = self.eval_expr_inner(expr);
        self.depth -= 1;

        result
    }

    /// Inner evaluation logic (no depth tracking).
    fn eval_expr_inner(&mut self, expr: &'a Expr<'a>) -> Result<Value, ExecutionError> {
        match expr {
            Expr::Literal(literal) => Ok(Value::Number(literal.to_number())),

            Expr::Ident(name) => match self.environment.lookup(name) {
                Some(function) => Ok(Value::Function(function)),
                None => self.error(
                    expr,
                    UnresolvedName {
                        name: name.to_string(),
                    },
                ),
            },

            Expr::Unary { op, expr: operand } => {
                let value = self.eval_expr(operand)?;
                let number = self.expect_number(operand, value)?;
                operators::eval_unary(*op, number)
                    .map(Value::Number)
                    .or_else(|e| self.error(expr, e.into()))
            }

            Expr::Binary { op, left, right } => {
                let left_value = self.eval_expr(left)?;
                let left_number = self.expect_number(left, left_value)?;
                let right_value = self.eval_expr(right)?;
                let right_number = self.expect_number(right, right_value)?;
                operators::eval_binary(*op, left_number, right_number)
                    .map(Value::Number)
                    .or_else(|e| self.error(expr, e.into()))
            }

            Expr::Call { callable, args } => self.eval_call(expr, callable, args),

            Expr::Attribute { value, attr } => self.eval_attribute(expr, value, attr),
        }
    }

    fn eval_call(
        &mut self,
        expr: &'a Expr<'a>,
        callable: &'a Expr<'a>,
        args: &'a [&'a Expr<'a>],
    ) -> Result<Value, ExecutionError> {
        let function = match self.eval_expr(callable)? {
            Value::Function(function) => function,
            Value::Number(n) => {
                return self.error(
                    expr,
                    Type {
                        message: format!("'{}' object is not callable", n.type_name()),
                    },
                );
            }
        };

        let mut arg_values = Vec::with_capacity(args.len());
        for arg in args.iter() {
            let value = self.eval_expr(arg)?;
            arg_values.push(self.expect_number(arg, value)?);
        }

        tracing::trace!(function = function.name, args = arg_values.len(), "Calling native function");
        function
            .call(&arg_values)
            .map(Value::Number)
            .or_else(|kind| self.error(expr, kind))
    }

    fn eval_attribute(
        &mut self,
        expr: &'a Expr<'a>,
        value: &'a Expr<'a>,
        attr: &'a str,
    ) -> Result<Value, ExecutionError> {
        let target = self.eval_expr(value)?;
        self.error(
            expr,
            UnsupportedAttribute {
                type_name: target.type_name().to_string(),
                attr: attr.to_string(),
            },
        )
    }

    fn expect_number(&self, expr: &'a Expr<'a>, value: Value) -> Result<Number, ExecutionError> {
        match value {
            Value::Number(n) => Ok(n),
            Value::Function(function) => self.error(
                expr,
                Type {
                    message: format!(
                        "expected a number, found function '{}'",
                        function.name
                    ),
                },
            ),
        }
    }
}
