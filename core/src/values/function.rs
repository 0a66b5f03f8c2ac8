//! Native functions that an environment can expose to expressions.

use core::fmt;

use crate::evaluator::ExecutionErrorKind;
use crate::values::Number;

/// Type alias for native function pointers.
///
/// Arguments are already evaluated and their count matches the function's
/// arity. The evaluator attaches the call's source span to any error.
pub type NativeFn = fn(&[Number]) -> Result<Number, ExecutionErrorKind>;

/// A named native function with a fixed number of arguments.
#[derive(Clone, Copy)]
pub struct NativeFunction {
    pub name: &'static str,
    pub arity: usize,
    pub func: NativeFn,
}

impl NativeFunction {
    pub const fn new(name: &'static str, arity: usize, func: NativeFn) -> Self {
        Self { name, arity, func }
    }

    /// Call the function after checking the argument count.
    pub fn call(&self, args: &[Number]) -> Result<Number, ExecutionErrorKind> {
        if args.len() != self.arity {
            return Err(ExecutionErrorKind::Type {
                message: format!(
                    "{}() takes exactly {} argument{} ({} given)",
                    self.name,
                    self.arity,
                    if self.arity == 1 { "" } else { "s" },
                    args.len()
                ),
            });
        }
        (self.func)(args)
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFunction")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}
