//! Fault classification for processed lines

use core::fmt;

/// Response token for grammar, division and internal faults.
pub const ERROR_TOKEN: &str = "ERROR";

/// Response token for results outside the unsigned 32-bit range.
pub const OVERFLOW_TOKEN: &str = "OVERFLOW";

/// A classified failure outcome for one line.
///
/// Every fault is reported back over the serial link as a fixed token in
/// place of a numeric result. See [`Fault::token`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Fault {
    /// The line held no characters at all.
    EmptyLine,
    /// The last character was neither `=` nor carriage return.
    MissingTerminator,
    /// The line does not match `<digits><op><digits><terminator>`.
    MalformedExpression,
    /// The result does not fit in 32 unsigned bits, or a subtraction would go negative.
    Overflow,
    /// The divisor was zero.
    DivideByZero,
    /// The operator byte was not one the evaluator knows.
    InternalError,
}

impl Fault {
    /// The literal token sent in place of a result.
    ///
    /// ```rust
    /// use serialcalc::error::Fault;
    ///
    /// assert_eq!(Fault::Overflow.token(), "OVERFLOW");
    /// assert_eq!(Fault::DivideByZero.token(), "ERROR");
    /// ```
    pub const fn token(self) -> &'static str {
        match self {
            Fault::Overflow => OVERFLOW_TOKEN,
            Fault::EmptyLine
            | Fault::MissingTerminator
            | Fault::MalformedExpression
            | Fault::DivideByZero
            | Fault::InternalError => ERROR_TOKEN,
        }
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Fault {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Fault::EmptyLine => defmt::write!(f, "EmptyLine"),
            Fault::MissingTerminator => defmt::write!(f, "MissingTerminator"),
            Fault::MalformedExpression => defmt::write!(f, "MalformedExpression"),
            Fault::Overflow => defmt::write!(f, "Overflow"),
            Fault::DivideByZero => defmt::write!(f, "DivideByZero"),
            Fault::InternalError => defmt::write!(f, "InternalError"),
        }
    }
}
