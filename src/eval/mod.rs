//! Checked unsigned arithmetic.
//!
//! Everything is evaluated in `u32`. There are no negative numbers: a
//! subtraction that would go below zero is reported as [`Fault::Overflow`],
//! the same as a sum or product above `u32::MAX`.

use crate::codec::decode;
use crate::error::Fault;
use crate::expr::parse;

/// Apply `operator` to two operands.
///
/// # Errors
///
/// * [`Fault::Overflow`] - the exact result is outside `0..=u32::MAX`
/// * [`Fault::DivideByZero`] - `operator` is `/` and `rhs` is zero
/// * [`Fault::InternalError`] - `operator` is not `+`, `-`, `*` or `/`
///
/// # Examples
///
/// ```rust
/// use serialcalc::eval::evaluate;
/// use serialcalc::error::Fault;
///
/// assert_eq!(evaluate(7, b'/', 2), Ok(3));
/// assert_eq!(evaluate(5, b'-', 10), Err(Fault::Overflow));
/// ```
pub fn evaluate(lhs: u32, operator: u8, rhs: u32) -> Result<u32, Fault> {
    match operator {
        b'+' => {
            if lhs > u32::MAX - rhs {
                return Err(Fault::Overflow);
            }
            Ok(lhs + rhs)
        }
        b'-' => {
            if lhs < rhs {
                return Err(Fault::Overflow);
            }
            Ok(lhs - rhs)
        }
        b'*' => {
            if rhs != 0 && lhs > u32::MAX / rhs {
                return Err(Fault::Overflow);
            }
            Ok(lhs * rhs)
        }
        b'/' => {
            if rhs == 0 {
                return Err(Fault::DivideByZero);
            }
            Ok(lhs / rhs)
        }
        _ => Err(Fault::InternalError),
    }
}

/// Validate, decode and evaluate one completed line (terminator included).
///
/// ```rust
/// use serialcalc::eval::evaluate_line;
/// use serialcalc::error::Fault;
///
/// assert_eq!(evaluate_line(b"12+7="), Ok(19));
/// assert_eq!(evaluate_line(b"9/0="), Err(Fault::DivideByZero));
/// assert_eq!(evaluate_line(b"="), Err(Fault::MalformedExpression));
/// ```
pub fn evaluate_line(line: &[u8]) -> Result<u32, Fault> {
    let expr = parse(line)?;
    let lhs = decode(expr.lhs.slice(line));
    let rhs = decode(expr.rhs.slice(line));
    evaluate(lhs, expr.operator, rhs)
}
