//! Operator evaluation
//!
//! Programmer mode works on [`BigInt`] and masks once, after the operation.
//! Standard mode works on `f64`. Division by zero is reported as an error
//! here; the controller decides what the display shows.

use calc_spec::{BitWidth, CalcError, Mode, Operator, Result, UnaryOp, Value};
use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};

/// Shift amount when it is small enough to matter.
///
/// Shifting by `limit` bits or more gives a fixed answer, so the shift is
/// never materialized.
#[inline]
fn shift_amount(amount: &BigInt, limit: u64) -> Option<usize> {
    amount
        .to_u64()
        .filter(|&s| s < limit)
        .and_then(|s| usize::try_from(s).ok())
}

/// Evaluate a binary operator on integers, masked to `width`
pub fn binary_int(op: Operator, a: &BigInt, b: &BigInt, width: BitWidth) -> Result<u64> {
    let mask_in = |v: &BigInt| BigInt::from(width.mask(v));

    if op.divides() && b.is_zero() {
        return Err(CalcError::DivisionByZero);
    }

    let result = match op {
        // Arithmetic
        Operator::Add => a + b,
        Operator::Sub => a - b,
        Operator::Mul => a * b,
        Operator::Div => a / b,
        Operator::Mod => a % b,

        // Logical, both operands taken mod 2^width
        Operator::And => mask_in(a) & mask_in(b),
        Operator::Or => mask_in(a) | mask_in(b),
        Operator::Xor => mask_in(a) ^ mask_in(b),
        Operator::Nand => !(mask_in(a) & mask_in(b)),
        Operator::Nor => !(mask_in(a) | mask_in(b)),

        // Shift
        Operator::Lsh => match shift_amount(b, width.bits() as u64) {
            Some(s) => a << s,
            None => BigInt::zero(),
        },
        Operator::Rsh => {
            let limit = a.bits().max(width.bits() as u64);
            match shift_amount(b, limit) {
                Some(s) => a >> s,
                None if a.is_negative() => BigInt::from(-1),
                None => BigInt::zero(),
            }
        }
    };

    Ok(width.mask(&result))
}

/// Evaluate a binary operator on floats
pub fn binary_real(op: Operator, a: f64, b: f64) -> Result<f64> {
    if !op.available_in(Mode::Standard) {
        return Err(CalcError::UnknownOperator(op.symbol().to_string()));
    }
    if op.divides() && b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }

    let result = match op {
        Operator::Add => a + b,
        Operator::Sub => a - b,
        Operator::Mul => a * b,
        Operator::Div => a / b,
        other => return Err(CalcError::UnknownOperator(other.symbol().to_string())),
    };

    if !result.is_finite() {
        return Err(CalcError::NonFiniteResult);
    }
    Ok(result)
}

/// Evaluate a unary operation on an integer, masked to `width`
pub fn unary_int(op: UnaryOp, a: &BigInt, width: BitWidth) -> Result<u64> {
    let result = match op {
        UnaryOp::Not => !a,
        UnaryOp::Negate => -a,
        UnaryOp::Percent => return Err(CalcError::UnknownOperator(op.symbol().to_string())),
    };
    Ok(width.mask(&result))
}

/// Evaluate a unary operation on a float
pub fn unary_real(op: UnaryOp, a: f64) -> Result<f64> {
    match op {
        UnaryOp::Negate => Ok(-a),
        UnaryOp::Percent => Ok(a / 100.0),
        UnaryOp::Not => Err(CalcError::UnknownOperator(op.symbol().to_string())),
    }
}

/// Apply a binary operator to stored operands.
///
/// The left operand decides the representation; a mismatched right operand
/// is converted to it.
pub fn apply_binary(op: Operator, lhs: Value, rhs: Value, width: BitWidth) -> Result<Value> {
    match lhs {
        Value::Int(a) => {
            let b = rhs.as_u64();
            binary_int(op, &BigInt::from(a), &BigInt::from(b), width).map(Value::Int)
        }
        Value::Real(a) => binary_real(op, a, rhs.as_f64()).map(Value::Real),
    }
}

/// Apply a unary operation to a stored operand
pub fn apply_unary(op: UnaryOp, value: Value, width: BitWidth) -> Result<Value> {
    match value {
        Value::Int(a) => unary_int(op, &BigInt::from(a), width).map(Value::Int),
        Value::Real(a) => unary_real(op, a).map(Value::Real),
    }
}
