//! Errors that can occur while turning a parsed answer into a [`SymExpr`](super::SymExpr).

use ariadne::Fmt;
use drill_attrs::ErrorKind;
use drill_error::{ErrorKind, EXPR};

/// A variable other than `a`, `b`, `x`, or `y` was used.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unknown variable",
    labels = [format!("`{}` is not one of the allowed variables", name.fg(EXPR))],
    help = "answers may only use the variables `x`, `y`, `a`, and `b`",
)]
pub struct UnknownSymbol {
    /// The name of the variable that was used.
    pub name: String,
}

/// A number literal could not be read.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "invalid number",
    labels = ["this number could not be read"],
)]
pub struct InvalidNumber;

/// The answer divides by something that is equal to zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "division by zero",
    labels = ["this is equal to zero"],
)]
pub struct DivisionByZero;

/// The answer divides by an expression containing a variable.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "cannot divide by a variable",
    labels = [format!("this {} contains a variable", "divisor".fg(EXPR))],
    help = "answers must be polynomials; only divide by numbers, such as `x/2`",
)]
pub struct NonConstantDivisor;

/// The exponent of a power is not a constant integer.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "exponent must be a whole number",
    labels = [format!("this {} is not a whole number", "exponent".fg(EXPR))],
    help = "write powers such as `x^2`; roots and variable exponents are not allowed",
)]
pub struct NonIntegerExponent;

/// A negative exponent was applied to an expression containing a variable.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "negative exponents are only allowed on numbers",
    labels = ["this contains a variable", "this exponent is negative"],
    help = "answers must be polynomials",
)]
pub struct NegativeExponent;

/// The exponent of a power is too large to work with.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "exponent is too large",
    labels = ["this exponent is too large"],
    help = format!("exponents may be at most {}, and the whole answer must stay a reasonable size", max),
)]
pub struct ExponentTooLarge {
    /// The largest exponent accepted.
    pub max: u32,
}

/// A product would have a higher degree than the answer checker works with.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "answer is too large",
    labels = [format!("this {} has too high a degree", "product".fg(EXPR))],
    help = format!("the degree of an answer may be at most {}", max),
)]
pub struct DegreeTooLarge {
    /// The largest degree accepted.
    pub max: u32,
}
