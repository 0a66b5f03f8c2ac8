//! Runtime values produced by the evaluator.

pub mod function;
pub mod number;

pub use function::{NativeFn, NativeFunction};
pub use number::Number;

use core::fmt;

/// A value during evaluation: a number or a reference to an environment function.
#[derive(Debug, Clone)]
pub enum Value {
    Number(Number),
    Function(&'static NativeFunction),
}

impl Value {
    /// Name of the value's type, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(n) => n.type_name(),
            Value::Function(_) => "builtin_function_or_method",
        }
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Function(func) => write!(f, "<built-in function {}>", func.name),
        }
    }
}
