//! Line grammar validation.
//!
//! A line is accepted only if it is exactly
//!
//! ```text
//! [0-9]+ [+-*/] [0-9]+ (= | CR)
//! ```
//!
//! with no whitespace, no sign and no second operator. Validation is a single
//! left-to-right pass that records where the operands sit inside the line;
//! nothing is copied.

use crate::error::Fault;
use crate::line::{is_digit, is_operator, is_terminator};

/// A run of bytes inside a line, by offset and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Offset of the first byte.
    pub start: usize,
    /// Number of bytes.
    pub len: usize,
}

impl Span {
    /// Create a span covering `len` bytes starting at `start`.
    pub const fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// One past the last byte.
    pub const fn end(&self) -> usize {
        self.start + self.len
    }

    /// Borrow the spanned bytes out of `line`.
    pub fn slice<'a>(&self, line: &'a [u8]) -> &'a [u8] {
        &line[self.start..self.end()]
    }
}

/// A validated `operand operator operand` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expression {
    /// Digits of the left operand.
    pub lhs: Span,
    /// The operator character: one of `+`, `-`, `*`, `/`.
    pub operator: u8,
    /// Digits of the right operand.
    pub rhs: Span,
}

/// Validate a completed line and locate its operands.
///
/// `line` must include its terminator.
///
/// # Errors
///
/// * [`Fault::EmptyLine`] - `line` is empty
/// * [`Fault::MissingTerminator`] - the last byte is not `=` or CR
/// * [`Fault::MalformedExpression`] - anything else that is not the grammar above
///
/// # Examples
///
/// ```rust
/// use serialcalc::expr::{parse, Span};
///
/// let expr = parse(b"12+7=").unwrap();
/// assert_eq!(expr.operator, b'+');
/// assert_eq!(expr.lhs, Span::new(0, 2));
/// assert_eq!(expr.rhs, Span::new(3, 1));
/// ```
pub fn parse(line: &[u8]) -> Result<Expression, Fault> {
    let (&last, body) = line.split_last().ok_or(Fault::EmptyLine)?;
    if !is_terminator(last) {
        return Err(Fault::MissingTerminator);
    }

    let mut operator: Option<(usize, u8)> = None;
    let mut lhs_len = 0;
    let mut rhs_len = 0;

    for (i, &byte) in body.iter().enumerate() {
        if is_digit(byte) {
            if operator.is_none() {
                lhs_len += 1;
            } else {
                rhs_len += 1;
            }
        } else if is_operator(byte) && operator.is_none() && i > 0 {
            operator = Some((i, byte));
        } else {
            return Err(Fault::MalformedExpression);
        }
    }

    match operator {
        Some((position, operator)) if lhs_len > 0 && rhs_len > 0 => Ok(Expression {
            lhs: Span::new(0, lhs_len),
            operator,
            rhs: Span::new(position + 1, rhs_len),
        }),
        _ => Err(Fault::MalformedExpression),
    }
}
