//! A representation of polynomial expressions that is easier to manipulate than an AST.
//!
//! The [`Expr`](drill_parser::parser::ast::Expr) type from `drill_parser` mirrors what the student
//! typed, including parentheses, spans, and the difference between `a - b` and `a + -b`. That is
//! convenient for error reporting, but not for algebra.
//!
//! This module defines [`SymExpr`], which **flattens** the AST into lists of terms and factors.
//! The expression `x + (y + 1)` is a single [`SymExpr::Add`] with three terms, and `a - b` is
//! stored as `a + (-1)b`.
//!
//! # Strict equality
//!
//! Deciding whether two expressions are mathematically equal requires putting both in a normal
//! form (see [`Polynomial`](crate::symbolic::poly::Polynomial)). The [`PartialEq`]
//! implementation for [`SymExpr`] is the cheaper **strict equality**: two expressions are
//! strictly equal if they have the same shape, with terms and factors compared in any order.
//! `(x + 1)(x - 1)` and `(x - 1)(x + 1)` are strictly equal; `(x + 1)^2` and `x^2 + 2x + 1` are
//! not.

mod iter;

use crate::primitive::{int_from_str, rat, rat_from_decimal};
use crate::symbolic::error::{
    DegreeTooLarge,
    DivisionByZero,
    ExponentTooLarge,
    InvalidNumber,
    NegativeExponent,
    NonConstantDivisor,
    NonIntegerExponent,
    UnknownSymbol,
};
use drill_error::Error;
use drill_parser::parser::{
    ast::{expr::Expr as AstExpr, literal::Literal},
    token::op::{BinOpKind, UnaryOpKind},
};
pub use iter::ExprIter;
use rug::{ops::Pow, Rational};
use std::{collections::BTreeSet, fmt, ops::{Add, Mul, Neg}, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The largest exponent accepted in a typed answer.
pub const MAX_EXPONENT: u32 = 32;

/// The largest total degree an expression may reach. Expanding anything larger is refused
/// instead of attempted.
pub const MAX_DEGREE: u32 = 64;

/// One of the variables an answer may use.
///
/// Variants are declared in alphabetical order, which is also the order variables are printed
/// in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Symbol {
    A,
    B,
    X,
    Y,
}

impl Symbol {
    /// Every variable, in alphabetical order.
    pub const ALL: [Symbol; 4] = [Symbol::A, Symbol::B, Symbol::X, Symbol::Y];

    /// Returns the position of this variable in [`Symbol::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the name of the variable.
    pub fn name(self) -> &'static str {
        match self {
            Symbol::A => "a",
            Symbol::B => "b",
            Symbol::X => "x",
            Symbol::Y => "y",
        }
    }
}

impl FromStr for Symbol {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "a" => Ok(Symbol::A),
            "b" => Ok(Symbol::B),
            "x" => Ok(Symbol::X),
            "y" => Ok(Symbol::Y),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single term / factor: a number or a variable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Primary {
    /// An exact rational number, always in lowest terms, such as `2` or `3/4`.
    Number(Rational),

    /// A variable, such as `x`.
    Symbol(Symbol),
}

/// Adds two [`Primary`]s together. Two numbers are added; anything else is wrapped in a
/// [`SymExpr::Add`].
impl Add<Primary> for Primary {
    type Output = SymExpr;

    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Primary::Number(lhs), Primary::Number(rhs)) => SymExpr::Primary(Primary::Number(lhs + rhs)),
            (lhs, rhs) => SymExpr::Add(vec![SymExpr::Primary(lhs), SymExpr::Primary(rhs)]),
        }
    }
}

/// Multiplies two [`Primary`]s together. Two numbers are multiplied; anything else is wrapped in
/// a [`SymExpr::Mul`].
impl Mul<Primary> for Primary {
    type Output = SymExpr;

    fn mul(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Primary::Number(lhs), Primary::Number(rhs)) => SymExpr::Primary(Primary::Number(lhs * rhs)),
            (lhs, rhs) => SymExpr::Mul(vec![SymExpr::Primary(lhs), SymExpr::Primary(rhs)]),
        }
    }
}

/// A polynomial expression with information about its terms and factors.
///
/// For more information about this type, see the [module-level documentation](self).
#[derive(Debug, Clone, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SymExpr {
    /// A single term or factor.
    Primary(Primary),

    /// Multiple terms added together.
    Add(Vec<SymExpr>),

    /// Multiple factors multiplied together.
    Mul(Vec<SymExpr>),

    /// An expression raised to a non-negative integer power.
    Exp(Box<SymExpr>, u32),
}

impl SymExpr {
    /// Creates a number.
    pub fn number(n: impl Into<Rational>) -> Self {
        Self::Primary(Primary::Number(n.into()))
    }

    /// Creates a variable.
    pub fn symbol(symbol: Symbol) -> Self {
        Self::Primary(Primary::Symbol(symbol))
    }

    /// Raises the expression to the given power. No simplification is done.
    pub fn pow(self, exponent: u32) -> Self {
        Self::Exp(Box::new(self), exponent)
    }

    /// If the expression is a [`Primary::Number`], returns a reference to the contained number.
    pub fn as_number(&self) -> Option<&Rational> {
        match self {
            Self::Primary(Primary::Number(n)) => Some(n),
            _ => None,
        }
    }

    /// Returns true if the expression is a [`Primary::Number`].
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Primary(Primary::Number(_)))
    }

    /// Returns true if the expression is the number zero.
    pub fn is_zero(&self) -> bool {
        self.as_number().map_or(false, |n| n.cmp0().is_eq())
    }

    /// If the expression is a [`Primary::Symbol`], returns the contained variable.
    pub fn as_symbol(&self) -> Option<Symbol> {
        match self {
            Self::Primary(Primary::Symbol(sym)) => Some(*sym),
            _ => None,
        }
    }

    /// Returns true if the expression is a sum.
    pub fn is_add(&self) -> bool {
        matches!(self, Self::Add(_))
    }

    /// Trivially downgrades the expression into a simpler form.
    ///
    /// Some operations may result in an [`SymExpr::Add`] with zero / one term, or an
    /// [`SymExpr::Mul`] with zero / one factor. This function checks for these cases and
    /// simplifies the expression into the single term / factor, or the number 0 or 1.
    pub(crate) fn downgrade(self) -> Self {
        match self {
            Self::Add(mut terms) => {
                if terms.is_empty() {
                    Self::number(0)
                } else if terms.len() == 1 {
                    terms.remove(0)
                } else {
                    Self::Add(terms)
                }
            },
            Self::Mul(mut factors) => {
                if factors.is_empty() {
                    Self::number(1)
                } else if factors.len() == 1 {
                    factors.remove(0)
                } else {
                    Self::Mul(factors)
                }
            },
            _ => self,
        }
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self) -> ExprIter {
        ExprIter::new(self)
    }

    /// Returns the set of variables that appear in the expression.
    pub fn free_symbols(&self) -> BTreeSet<Symbol> {
        self.post_order_iter()
            .filter_map(SymExpr::as_symbol)
            .collect()
    }

    /// Returns an upper bound on the total degree of the expression, without expanding it.
    pub fn degree(&self) -> u32 {
        match self {
            Self::Primary(Primary::Number(_)) => 0,
            Self::Primary(Primary::Symbol(_)) => 1,
            Self::Add(terms) => terms.iter().map(Self::degree).max().unwrap_or(0),
            Self::Mul(factors) => factors.iter().map(Self::degree).fold(0, u32::saturating_add),
            Self::Exp(base, exp) => base.degree().saturating_mul(*exp),
        }
    }

    /// Returns true if no sum appears inside a product or a power, i.e. the expression is a sum
    /// of monomials.
    ///
    /// This is a structural check; call it on an expression that has gone through
    /// [`simplify`](crate::symbolic::simplify()), so that `2(x + 1)` has already become
    /// `2x + 2`.
    pub fn is_expanded_form(&self) -> bool {
        self.post_order_iter().all(|expr| match expr {
            Self::Mul(factors) => !factors.iter().any(Self::is_add),
            Self::Exp(base, _) => !base.is_add(),
            _ => true,
        })
    }

    /// Splits a term into its numeric coefficient and its remaining factors.
    ///
    /// - `6x` -> `(6, Some(x))`
    /// - `x` -> `(1, Some(x))`
    /// - `-3` -> `(-3, None)`
    pub fn split_coefficient(&self) -> (Rational, Option<SymExpr>) {
        match self {
            Self::Primary(Primary::Number(n)) => (n.clone(), None),
            Self::Mul(factors) => {
                let mut coefficient = rat(1);
                let mut rest = Vec::with_capacity(factors.len());
                for factor in factors {
                    match factor.as_number() {
                        Some(n) => coefficient *= n,
                        None => rest.push(factor.clone()),
                    }
                }
                let rest = if rest.is_empty() { None } else { Some(Self::Mul(rest).downgrade()) };
                (coefficient, rest)
            },
            expr => (rat(1), Some(expr.clone())),
        }
    }

    /// Rebuilds a term from a coefficient and the remaining factors, the inverse of
    /// [`SymExpr::split_coefficient`].
    pub fn with_coefficient(coefficient: Rational, rest: Option<SymExpr>) -> Self {
        match rest {
            None => Self::number(coefficient),
            Some(rest) if coefficient == 1 => rest,
            Some(Self::Mul(mut factors)) => {
                factors.insert(0, Self::number(coefficient));
                Self::Mul(factors)
            },
            Some(rest) => Self::Mul(vec![Self::number(coefficient), rest]),
        }
    }
}

/// Checks if two expressions are **strictly** equal.
///
/// Two expressions are strictly equal if:
/// - They are the same type of expression (i.e. both [`SymExpr::Primary`], both
/// [`SymExpr::Add`], etc.).
/// - If both are [`SymExpr::Primary`], both expressions must have equal values.
/// - If both are [`SymExpr::Add`] or [`SymExpr::Mul`], each term / factor of one must be strictly
/// equal to a distinct term / factor of the other, in any order.
/// - If both are [`SymExpr::Exp`], both expressions must have strictly equal bases and equal
/// exponents.
///
/// For more information about strict equality, see the [module-level documentation](self).
impl PartialEq for SymExpr {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Primary(lhs), Self::Primary(rhs)) => lhs == rhs,
            (Self::Add(lhs), Self::Add(rhs)) | (Self::Mul(lhs), Self::Mul(rhs)) => {
                if lhs.len() != rhs.len() {
                    return false;
                }

                let mut used = vec![false; rhs.len()];
                lhs.iter().all(|lhs| {
                    let found = rhs.iter()
                        .enumerate()
                        .position(|(i, rhs)| !used[i] && lhs == rhs);
                    match found {
                        Some(i) => {
                            used[i] = true;
                            true
                        },
                        None => false,
                    }
                })
            },
            (Self::Exp(lhs_base, lhs_exp), Self::Exp(rhs_base, rhs_exp)) => {
                lhs_exp == rhs_exp && lhs_base == rhs_base
            },
            _ => false,
        }
    }
}

/// Converts a parsed answer into a [`SymExpr`].
///
/// Only polynomial answers are representable, so conversion fails (with an error pointing at the
/// offending part of the answer) on:
///
/// - variables other than `a`, `b`, `x`, and `y`,
/// - division by anything other than a non-zero constant,
/// - exponents that are not constant integers, negative exponents on non-constant bases, and
/// exponents larger than [`MAX_EXPONENT`] (or that push the degree past [`MAX_DEGREE`]),
/// - products whose degree is larger than [`MAX_DEGREE`].
///
/// The result is not simplified.
impl TryFrom<AstExpr> for SymExpr {
    type Error = Error;

    fn try_from(expr: AstExpr) -> Result<Self, Self::Error> {
        match expr {
            AstExpr::Literal(literal) => match literal {
                Literal::Integer(int) => int_from_str(&int.value)
                    .map(Self::number)
                    .ok_or_else(|| Error::new(vec![int.span], InvalidNumber)),
                Literal::Float(float) => rat_from_decimal(&float.value)
                    .map(Self::number)
                    .ok_or_else(|| Error::new(vec![float.span], InvalidNumber)),
                Literal::Symbol(sym) => sym.name.parse::<Symbol>()
                    .map(Self::symbol)
                    .map_err(|_| Error::new(vec![sym.span], UnknownSymbol { name: sym.name })),
            },
            AstExpr::Paren(paren) => Self::try_from(paren.into_innermost()),
            AstExpr::Unary(unary) => {
                let operand = Self::try_from(*unary.operand)?;
                match unary.op.kind {
                    UnaryOpKind::Neg => Ok(-operand),
                    UnaryOpKind::Pos => Ok(operand),
                }
            },
            AstExpr::Binary(bin) => {
                let span = bin.span();
                let rhs_span = bin.rhs.span();
                let lhs_span = bin.lhs.span();
                let lhs = Self::try_from(*bin.lhs)?;
                let rhs = Self::try_from(*bin.rhs)?;
                match bin.op.kind {
                    BinOpKind::Add => Ok(lhs + rhs),
                    BinOpKind::Sub => Ok(lhs + -rhs),
                    BinOpKind::Mul => {
                        if lhs.degree().saturating_add(rhs.degree()) > MAX_DEGREE {
                            return Err(Error::new(vec![span], DegreeTooLarge { max: MAX_DEGREE }));
                        }
                        Ok(lhs * rhs)
                    },
                    BinOpKind::Div => {
                        let divisor = crate::symbolic::simplify(&rhs);
                        let Some(divisor) = divisor.as_number() else {
                            return Err(Error::new(vec![rhs_span], NonConstantDivisor));
                        };
                        if divisor.cmp0().is_eq() {
                            return Err(Error::new(vec![rhs_span], DivisionByZero));
                        }
                        Ok(lhs * Self::number(divisor.clone().recip()))
                    },
                    BinOpKind::Exp => {
                        let exponent = crate::symbolic::simplify(&rhs);
                        let Some(exponent) = exponent.as_number().filter(|n| *n.denom() == 1) else {
                            return Err(Error::new(vec![rhs_span], NonIntegerExponent));
                        };
                        let exponent = exponent.numer().clone();
                        let Some(magnitude) = exponent.clone().abs().to_u32().filter(|n| *n <= MAX_EXPONENT) else {
                            return Err(Error::new(vec![rhs_span], ExponentTooLarge { max: MAX_EXPONENT }));
                        };

                        if exponent < 0 {
                            // only a non-zero constant may be inverted
                            let base = crate::symbolic::simplify(&lhs);
                            let Some(base) = base.as_number() else {
                                return Err(Error::new(vec![lhs_span, rhs_span], NegativeExponent));
                            };
                            if base.cmp0().is_eq() {
                                return Err(Error::new(vec![lhs_span], DivisionByZero));
                            }
                            let value = Pow::pow(base.clone(), magnitude).recip();
                            return Ok(Self::number(value));
                        }

                        if lhs.degree().saturating_mul(magnitude) > MAX_DEGREE {
                            return Err(Error::new(vec![rhs_span], ExponentTooLarge { max: MAX_EXPONENT }));
                        }
                        Ok(lhs.pow(magnitude))
                    },
                }
            },
        }
    }
}

/// Adds two [`SymExpr`]s together. No simplification is done, except for the case where the
/// operands are a mix of [`Primary`] and / or [`SymExpr::Add`], in which case both are combined
/// in one list of terms (flattening).
impl Add for SymExpr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::Primary(lhs), Self::Primary(rhs)) => lhs + rhs,
            (Self::Add(mut terms), Self::Add(rhs_terms)) => {
                terms.extend(rhs_terms);
                Self::Add(terms)
            },
            (Self::Add(mut terms), other) => {
                terms.push(other);
                Self::Add(terms)
            },
            (other, Self::Add(mut terms)) => {
                terms.insert(0, other);
                Self::Add(terms)
            },
            (lhs, rhs) => Self::Add(vec![lhs, rhs]),
        }
    }
}

/// Multiplies two [`SymExpr`]s together. No simplification is done, except for flattening nested
/// [`SymExpr::Mul`]s into one list of factors.
impl Mul for SymExpr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::Primary(lhs), Self::Primary(rhs)) => lhs * rhs,
            (Self::Mul(mut factors), Self::Mul(rhs_factors)) => {
                factors.extend(rhs_factors);
                Self::Mul(factors)
            },
            (Self::Mul(mut factors), other) => {
                factors.push(other);
                Self::Mul(factors)
            },
            (other, Self::Mul(mut factors)) => {
                factors.insert(0, other);
                Self::Mul(factors)
            },
            (lhs, rhs) => Self::Mul(vec![lhs, rhs]),
        }
    }
}

/// Negates the expression by multiplying it by `-1`. Numbers are negated directly.
impl Neg for SymExpr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Self::Primary(Primary::Number(n)) => Self::number(-n),
            expr => Self::number(-1) * expr,
        }
    }
}

#[cfg(test)]
mod tests {
    use drill_parser::parser::Parser;
    use pretty_assertions::assert_eq;
    use super::*;

    fn convert(input: &str) -> Result<SymExpr, Error> {
        let ast = Parser::new(input).try_parse_full::<AstExpr>().unwrap();
        SymExpr::try_from(ast)
    }

    fn x() -> SymExpr {
        SymExpr::symbol(Symbol::X)
    }

    #[test]
    fn flatten_terms() {
        let expr = convert("x + (y + 1)").unwrap();
        assert_eq!(expr, SymExpr::Add(vec![
            x(),
            SymExpr::symbol(Symbol::Y),
            SymExpr::number(1),
        ]));
    }

    #[test]
    fn subtraction_is_negated_addition() {
        let expr = convert("x - 2").unwrap();
        assert_eq!(expr, SymExpr::Add(vec![x(), SymExpr::number(-2)]));
    }

    #[test]
    fn strict_equality_ignores_order() {
        let lhs = convert("(x+1)(x-1)").unwrap();
        let rhs = convert("(x-1)(x+1)").unwrap();
        assert_eq!(lhs, rhs);

        let squared = convert("(x+1)^2").unwrap();
        let expanded = convert("x^2+2x+1").unwrap();
        assert_ne!(squared, expanded);
    }

    #[test]
    fn strict_equality_counts_duplicates() {
        let lhs = SymExpr::Mul(vec![x(), x(), SymExpr::symbol(Symbol::Y)]);
        let rhs = SymExpr::Mul(vec![x(), SymExpr::symbol(Symbol::Y), SymExpr::symbol(Symbol::Y)]);
        assert_ne!(lhs, rhs);
    }

    #[test]
    fn division_by_constant() {
        let expr = convert("x/4").unwrap();
        assert_eq!(expr, SymExpr::Mul(vec![x(), SymExpr::number(rat((1, 4)))]));
    }

    #[test]
    fn decimal_is_exact() {
        let expr = convert("0.5x").unwrap();
        assert_eq!(expr, SymExpr::Mul(vec![SymExpr::number(rat((1, 2))), x()]));
    }

    #[test]
    fn negative_exponent_on_constant() {
        let expr = convert("2^-2").unwrap();
        assert_eq!(expr, SymExpr::number(rat((1, 4))));
    }

    #[test]
    fn rejected_answers() {
        assert_eq!(convert("z + 1").unwrap_err().spans, vec![0..1]);
        assert_eq!(convert("1/x").unwrap_err().spans, vec![2..3]);
        assert_eq!(convert("x/(3-3)").unwrap_err().spans, vec![2..7]);
        assert_eq!(convert("x^x").unwrap_err().spans, vec![2..3]);
        assert_eq!(convert("x^0.5").unwrap_err().spans, vec![2..5]);
        assert_eq!(convert("x^-1").unwrap_err().spans, vec![0..1, 2..4]);
        assert_eq!(convert("x^33").unwrap_err().spans, vec![2..4]);
        assert!(convert("((x+y)^32)^32").is_err());
    }

    #[test]
    fn product_degree_is_capped() {
        assert_eq!(convert("(x+1)^32(x+1)^32").unwrap().degree(), MAX_DEGREE);

        let err = convert("(x+1)^32(x+1)^32(x+1)").unwrap_err();
        assert_eq!(err.spans, vec![0..21]);

        let err = convert("(x+1)^32*(x+1)^32*(x+1)^32*(x+1)^32").unwrap_err();
        assert_eq!(err.spans, vec![0..26]);
    }

    #[test]
    fn free_symbols_and_degree() {
        let expr = convert("3xy^2 + a").unwrap();
        assert_eq!(expr.free_symbols(), BTreeSet::from([Symbol::A, Symbol::X, Symbol::Y]));
        assert_eq!(expr.degree(), 3);
    }
}
