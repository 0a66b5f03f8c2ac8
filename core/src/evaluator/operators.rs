//! Binary and unary operator implementations.
//!
//! Integers have arbitrary precision: `i64` arithmetic widens to `BigInt`
//! when it would overflow. Mixed operands promote to float. `/` always
//! produces a float, `//` floors and `%` takes the sign of the divisor.

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

use crate::evaluator::ArithmeticError::{self, *};
use crate::parser::{BinaryOp, UnaryOp};
use crate::values::{Number, number::big_to_float};

const FLOAT_OVERFLOW: &str = "numerical result out of range";
const INT_TOO_LARGE: &str = "integer result too large";
const ZERO_NEGATIVE_POWER: &str = "0.0 cannot be raised to a negative power";

/// Upper bound on the size of an integer built by `*` or `**`.
const MAX_INT_BITS: u64 = 65_536;

pub(super) fn eval_unary(op: UnaryOp, operand: Number) -> Result<Number, ArithmeticError> {
    match (op, operand) {
        (UnaryOp::Pos, n) => Ok(n),
        (UnaryOp::Neg, Number::Int(i)) => Ok(match i.checked_neg() {
            Some(n) => Number::Int(n),
            None => Number::from(-BigInt::from(i)),
        }),
        (UnaryOp::Neg, Number::Big(b)) => Ok(Number::from(-b)),
        (UnaryOp::Neg, Number::Float(f)) => Ok(Number::Float(-f)),
    }
}

pub(super) fn eval_binary(
    op: BinaryOp,
    left: Number,
    right: Number,
) -> Result<Number, ArithmeticError> {
    match (left, right) {
        (Number::Int(a), Number::Int(b)) => eval_binary_int(op, a, b),
        (Number::Float(a), b) => eval_binary_float(op, a, b.to_float()?).map(Number::Float),
        (a, Number::Float(b)) => eval_binary_float(op, a.to_float()?, b).map(Number::Float),
        (Number::Big(a), Number::Int(b)) => eval_binary_big(op, &a, &BigInt::from(b)),
        (Number::Int(a), Number::Big(b)) => eval_binary_big(op, &BigInt::from(a), &b),
        (Number::Big(a), Number::Big(b)) => eval_binary_big(op, &a, &b),
    }
}

/// Evaluate a binary operation on two machine integers, widening on overflow.
pub(super) fn eval_binary_int(op: BinaryOp, left: i64, right: i64) -> Result<Number, ArithmeticError> {
    let widened = || eval_binary_big(op, &BigInt::from(left), &BigInt::from(right));
    let fits = |value: Option<i64>| value.map(|n| Ok(Number::Int(n)));
    match op {
        BinaryOp::Add => fits(left.checked_add(right)).unwrap_or_else(widened),
        BinaryOp::Sub => fits(left.checked_sub(right)).unwrap_or_else(widened),
        BinaryOp::Mul => fits(left.checked_mul(right)).unwrap_or_else(widened),
        BinaryOp::Div => {
            if right == 0 {
                Err(DivisionByZero("division by zero"))
            } else {
                Ok(Number::Float(left as f64 / right as f64))
            }
        }
        BinaryOp::FloorDiv => {
            if right == 0 {
                return Err(DivisionByZero("integer division or modulo by zero"));
            }
            // Only `i64::MIN // -1` leaves the range.
            let Some(quotient) = left.checked_div(right) else {
                return widened();
            };
            let remainder = left.wrapping_rem(right);
            if remainder != 0 && ((remainder < 0) != (right < 0)) {
                Ok(Number::Int(quotient - 1))
            } else {
                Ok(Number::Int(quotient))
            }
        }
        BinaryOp::Mod => {
            if right == 0 {
                return Err(DivisionByZero("integer modulo by zero"));
            }
            let remainder = left.wrapping_rem(right);
            if remainder != 0 && ((remainder < 0) != (right < 0)) {
                Ok(Number::Int(remainder + right))
            } else {
                Ok(Number::Int(remainder))
            }
        }
        BinaryOp::Pow => {
            if right < 0 {
                // Negative exponents leave the integers.
                return eval_binary_float(op, left as f64, right as f64).map(Number::Float);
            }
            match left {
                0 | 1 => Ok(Number::Int(if right == 0 { 1 } else { left })),
                -1 => Ok(Number::Int(if right % 2 == 0 { 1 } else { -1 })),
                _ => u32::try_from(right)
                    .ok()
                    .and_then(|exponent| fits(left.checked_pow(exponent)))
                    .unwrap_or_else(widened),
            }
        }
    }
}

/// Evaluate a binary operation on arbitrary-precision integers.
///
/// `*` and `**` refuse to build results wider than [`MAX_INT_BITS`].
pub(super) fn eval_binary_big(
    op: BinaryOp,
    left: &BigInt,
    right: &BigInt,
) -> Result<Number, ArithmeticError> {
    match op {
        BinaryOp::Add => Ok(Number::from(left + right)),
        BinaryOp::Sub => Ok(Number::from(left - right)),
        BinaryOp::Mul => {
            if left.bits() + right.bits() > MAX_INT_BITS {
                return Err(Overflow(INT_TOO_LARGE));
            }
            Ok(Number::from(left * right))
        }
        BinaryOp::Div => {
            if right.is_zero() {
                return Err(DivisionByZero("division by zero"));
            }
            eval_binary_float(op, big_to_float(left)?, big_to_float(right)?).map(Number::Float)
        }
        BinaryOp::FloorDiv => {
            if right.is_zero() {
                return Err(DivisionByZero("integer division or modulo by zero"));
            }
            Ok(Number::from(floor_divmod(left, right).0))
        }
        BinaryOp::Mod => {
            if right.is_zero() {
                return Err(DivisionByZero("integer modulo by zero"));
            }
            Ok(Number::from(floor_divmod(left, right).1))
        }
        BinaryOp::Pow => big_pow(left, right),
    }
}

/// Floored quotient and remainder. `BigInt` division truncates toward zero.
fn floor_divmod(left: &BigInt, right: &BigInt) -> (BigInt, BigInt) {
    let mut quotient = left / right;
    let mut remainder = left % right;
    if !remainder.is_zero() && remainder.is_negative() != right.is_negative() {
        quotient -= BigInt::one();
        remainder += right;
    }
    (quotient, remainder)
}

fn big_pow(base: &BigInt, exponent: &BigInt) -> Result<Number, ArithmeticError> {
    if exponent.is_negative() {
        return eval_binary_float(BinaryOp::Pow, big_to_float(base)?, big_to_float(exponent)?)
            .map(Number::Float);
    }
    if base.is_zero() || base.is_one() {
        return Ok(if exponent.is_zero() {
            Number::Int(1)
        } else {
            Number::from(base.clone())
        });
    }
    if base.is_negative() && base.magnitude().is_one() {
        let even = (exponent % BigInt::from(2)).is_zero();
        return Ok(Number::Int(if even { 1 } else { -1 }));
    }

    let exponent = u32::try_from(exponent).map_err(|_| Overflow(INT_TOO_LARGE))?;
    if base.bits().saturating_mul(u64::from(exponent)) > MAX_INT_BITS {
        return Err(Overflow(INT_TOO_LARGE));
    }
    Ok(Number::from(base.pow(exponent)))
}

/// Evaluate a binary operation on two floats.
///
/// Addition, subtraction and multiplication follow IEEE 754 and may produce
/// infinities. Division-like operators reject a zero divisor.
pub(super) fn eval_binary_float(op: BinaryOp, left: f64, right: f64) -> Result<f64, ArithmeticError> {
    match op {
        BinaryOp::Add => Ok(left + right),
        BinaryOp::Sub => Ok(left - right),
        BinaryOp::Mul => Ok(left * right),
        BinaryOp::Div => {
            if right == 0.0 {
                Err(DivisionByZero("float division by zero"))
            } else {
                Ok(left / right)
            }
        }
        BinaryOp::FloorDiv => {
            if right == 0.0 {
                Err(DivisionByZero("float floor division by zero"))
            } else {
                Ok(float_divmod(left, right).0)
            }
        }
        BinaryOp::Mod => {
            if right == 0.0 {
                Err(DivisionByZero("float modulo"))
            } else {
                Ok(float_divmod(left, right).1)
            }
        }
        BinaryOp::Pow => float_pow(left, right),
    }
}

/// Floored quotient and remainder, exact for the cases where `(a / b).floor()`
/// would round the wrong way (e.g. `1 // 0.1 == 9.0`).
fn float_divmod(left: f64, right: f64) -> (f64, f64) {
    let mut remainder = left % right;
    let mut div = (left - remainder) / right;
    if remainder != 0.0 {
        if (right < 0.0) != (remainder < 0.0) {
            remainder += right;
            div -= 1.0;
        }
    } else {
        remainder = 0.0_f64.copysign(right);
    }

    let floor_div = if div != 0.0 {
        let mut floored = div.floor();
        if div - floored > 0.5 {
            floored += 1.0;
        }
        floored
    } else {
        0.0_f64.copysign(left / right)
    };

    (floor_div, remainder)
}

fn float_pow(base: f64, exponent: f64) -> Result<f64, ArithmeticError> {
    if base == 0.0 && exponent < 0.0 {
        return Err(DivisionByZero(ZERO_NEGATIVE_POWER));
    }
    if base < 0.0 && exponent.is_finite() && exponent.fract() != 0.0 {
        return Err(Domain("negative number cannot be raised to a fractional power"));
    }
    let result = base.powf(exponent);
    if result.is_infinite() && base.is_finite() && exponent.is_finite() {
        return Err(Overflow(FLOAT_OVERFLOW));
    }
    Ok(result)
}
