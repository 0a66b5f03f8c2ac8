//! Math Package
//!
//! Trigonometric functions exposed to the scientific environment.
//!
//! Functions: sin, cos, tan (radians)

use crate::{
    evaluator::{ArithmeticError, ExecutionErrorKind},
    values::{Number, function::NativeFunction},
};

pub static SIN: NativeFunction = NativeFunction::new("sin", 1, math_sin);
pub static COS: NativeFunction = NativeFunction::new("cos", 1, math_cos);
pub static TAN: NativeFunction = NativeFunction::new("tan", 1, math_tan);

/// Name table for the scientific environment, sorted by name.
pub static SCIENTIFIC_FUNCTIONS: [(&str, &NativeFunction); 3] =
    [("cos", &COS), ("sin", &SIN), ("tan", &TAN)];

fn math_sin(args: &[Number]) -> Result<Number, ExecutionErrorKind> {
    apply(args, f64::sin)
}

fn math_cos(args: &[Number]) -> Result<Number, ExecutionErrorKind> {
    apply(args, f64::cos)
}

fn math_tan(args: &[Number]) -> Result<Number, ExecutionErrorKind> {
    apply(args, f64::tan)
}

/// Apply a one-argument float function. Infinite and NaN inputs are outside
/// the domain of the trigonometric functions.
fn apply(args: &[Number], f: fn(f64) -> f64) -> Result<Number, ExecutionErrorKind> {
    let x = match args {
        [x] => x.to_float()?,
        _ => {
            return Err(ExecutionErrorKind::Type {
                message: format!("expected 1 argument, got {}", args.len()),
            });
        }
    };
    if x.is_infinite() {
        return Err(ArithmeticError::Domain("math domain error").into());
    }
    Ok(Number::Float(f(x)))
}
