use core::fmt;

use num_bigint::BigInt;
use num_traits::ToPrimitive;

use crate::evaluator::ArithmeticError;

const INT_TOO_LARGE_FOR_FLOAT: &str = "int too large to convert to float";

/// A numeric result. Integers and floats are kept apart, so `2 + 3` is `5`
/// while `2 / 1` is `2.0`.
///
/// Integers have arbitrary precision. Values that fit in an `i64` are always
/// stored as [`Number::Int`]; [`Number::Big`] holds only the rest, so derived
/// equality is numeric equality among integers.
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    Int(i64),
    Big(BigInt),
    Float(f64),
}

impl Number {
    pub fn type_name(&self) -> &'static str {
        match self {
            Number::Int(_) | Number::Big(_) => "int",
            Number::Float(_) => "float",
        }
    }

    /// Convert to a float the way mixed arithmetic does. Integers beyond the
    /// float range are an overflow, not `inf`.
    pub fn to_float(&self) -> Result<f64, ArithmeticError> {
        match self {
            Number::Int(i) => Ok(*i as f64),
            Number::Big(b) => big_to_float(b),
            Number::Float(f) => Ok(*f),
        }
    }

    /// Numeric equality across representations (`5 == 5.0`).
    pub fn numeric_eq(&self, other: &Number) -> bool {
        match (self, other) {
            (Number::Float(_), _) | (_, Number::Float(_)) => {
                matches!((self.to_float(), other.to_float()), (Ok(a), Ok(b)) if a == b)
            }
            _ => self == other,
        }
    }
}

pub(crate) fn big_to_float(b: &BigInt) -> Result<f64, ArithmeticError> {
    b.to_f64()
        .filter(|f| f.is_finite())
        .ok_or(ArithmeticError::Overflow(INT_TOO_LARGE_FOR_FLOAT))
}

impl From<i64> for Number {
    fn from(i: i64) -> Self {
        Number::Int(i)
    }
}

impl From<BigInt> for Number {
    fn from(b: BigInt) -> Self {
        match i64::try_from(&b) {
            Ok(i) => Number::Int(i),
            Err(_) => Number::Big(b),
        }
    }
}

impl From<f64> for Number {
    fn from(f: f64) -> Self {
        Number::Float(f)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{}", i),
            Number::Big(b) => write!(f, "{}", b),
            Number::Float(x) => format_float(*x, f),
        }
    }
}

/// Shortest round-trip representation, always marked as a float:
/// `0.0`, `2.5`, `1e+16`, `1e-05`, `inf`, `nan`.
fn format_float(x: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if x.is_nan() {
        return f.write_str("nan");
    }
    if x.is_infinite() {
        return f.write_str(if x > 0.0 { "inf" } else { "-inf" });
    }

    let abs = x.abs();
    if abs != 0.0 && !(1e-4..1e16).contains(&abs) {
        // `{:e}` gives e.g. "1.5e-7"; reformat the exponent as "e-07".
        let repr = format!("{:e}", x);
        let (mantissa, exponent) = repr.split_once('e').unwrap_or((repr.as_str(), "0"));
        let exponent: i32 = exponent.parse().unwrap_or(0);
        let sign = if exponent < 0 { '-' } else { '+' };
        return write!(f, "{}e{}{:02}", mantissa, sign, exponent.abs());
    }

    let repr = format!("{}", x);
    if repr.contains('.') {
        f.write_str(&repr)
    } else {
        write!(f, "{}.0", repr)
    }
}
