//! Polynomials in normal form.
//!
//! A [`Polynomial`] is a map from [`Monomial`]s to their non-zero rational coefficients. Two
//! expressions are equal for every value of their variables exactly when their polynomials are
//! equal, which makes this the representation used to expand expressions and to compare answers.

use crate::primitive::rat;
use super::expr::{Primary, Symbol, SymExpr};
use rug::Rational;
use std::{
    cmp::Ordering,
    collections::{btree_map::Entry, BTreeMap, BTreeSet},
    ops::{Add, Mul, Neg, Sub},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A product of variables raised to non-negative powers, such as `x^2 y`, stored as one exponent
/// per [`Symbol`].
///
/// Monomials are ordered by total degree first, then by their exponents in alphabetical order of
/// the variables. In a sum printed from the greatest monomial down, `a^2 + a b + x + 1` comes out
/// in that order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Monomial([u32; 4]);

impl Monomial {
    /// The monomial `1`, with every exponent zero.
    pub const ONE: Self = Self([0; 4]);

    /// The monomial consisting of a single variable.
    pub fn symbol(symbol: Symbol) -> Self {
        let mut exponents = [0; 4];
        exponents[symbol.index()] = 1;
        Self(exponents)
    }

    /// Returns the exponent of the given variable.
    pub fn exponent(&self, symbol: Symbol) -> u32 {
        self.0[symbol.index()]
    }

    /// Returns the total degree of the monomial.
    pub fn degree(&self) -> u32 {
        self.0.iter().fold(0, |acc, exp| acc.saturating_add(*exp))
    }

    /// Returns the variables with a non-zero exponent, in alphabetical order.
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        Symbol::ALL.into_iter().filter(|symbol| self.exponent(*symbol) > 0)
    }

    /// Raises the monomial to the given power.
    pub fn pow(self, exp: u32) -> Self {
        Self(self.0.map(|e| e.saturating_mul(exp)))
    }

    /// Returns the greatest monomial the expression would produce when expanded, without expanding
    /// it. Cancellation between terms is not considered.
    pub fn leading_of(expr: &SymExpr) -> Self {
        match expr {
            SymExpr::Primary(Primary::Number(_)) => Self::ONE,
            SymExpr::Primary(Primary::Symbol(symbol)) => Self::symbol(*symbol),
            SymExpr::Add(terms) => terms.iter().map(Self::leading_of).max().unwrap_or(Self::ONE),
            SymExpr::Mul(factors) => factors.iter().map(Self::leading_of).fold(Self::ONE, Mul::mul),
            SymExpr::Exp(base, exp) => Self::leading_of(base).pow(*exp),
        }
    }

    /// Converts the monomial into a product of variables, or [`None`] for the monomial `1`.
    pub fn to_expr(&self) -> Option<SymExpr> {
        let factors = self.symbols()
            .map(|symbol| match self.exponent(symbol) {
                1 => SymExpr::symbol(symbol),
                exp => SymExpr::symbol(symbol).pow(exp),
            })
            .collect::<Vec<_>>();
        if factors.is_empty() {
            None
        } else {
            Some(SymExpr::Mul(factors).downgrade())
        }
    }
}

impl Ord for Monomial {
    fn cmp(&self, other: &Self) -> Ordering {
        self.degree().cmp(&other.degree())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Monomial {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Mul for Monomial {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let mut exponents = self.0;
        for (lhs, rhs) in exponents.iter_mut().zip(rhs.0) {
            *lhs = lhs.saturating_add(rhs);
        }
        Self(exponents)
    }
}

/// A polynomial with rational coefficients over the variables `a`, `b`, `x`, and `y`.
///
/// Zero coefficients are never stored, so the zero polynomial has no terms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polynomial {
    terms: BTreeMap<Monomial, Rational>,
}

impl Polynomial {
    /// The zero polynomial.
    pub fn zero() -> Self {
        Self::default()
    }

    /// A constant polynomial.
    pub fn constant(n: Rational) -> Self {
        let mut poly = Self::zero();
        poly.add_term(Monomial::ONE, n);
        poly
    }

    /// The polynomial consisting of a single variable.
    pub fn symbol(symbol: Symbol) -> Self {
        let mut poly = Self::zero();
        poly.add_term(Monomial::symbol(symbol), rat(1));
        poly
    }

    /// Adds `coefficient * monomial` to the polynomial.
    pub fn add_term(&mut self, monomial: Monomial, coefficient: Rational) {
        match self.terms.entry(monomial) {
            Entry::Occupied(mut entry) => {
                *entry.get_mut() += coefficient;
                if entry.get().cmp0().is_eq() {
                    entry.remove();
                }
            },
            Entry::Vacant(entry) => {
                if coefficient.cmp0().is_ne() {
                    entry.insert(coefficient);
                }
            },
        }
    }

    /// Returns true if this is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// If the polynomial has no variables, returns its value.
    pub fn as_constant(&self) -> Option<Rational> {
        match self.terms.len() {
            0 => Some(rat(0)),
            1 => self.terms.get(&Monomial::ONE).cloned(),
            _ => None,
        }
    }

    /// Returns the total degree of the polynomial. The zero polynomial has degree 0.
    pub fn degree(&self) -> u32 {
        self.terms.keys().next_back().map_or(0, Monomial::degree)
    }

    /// Returns the variables that appear in the polynomial.
    pub fn free_symbols(&self) -> BTreeSet<Symbol> {
        self.terms.keys().flat_map(Monomial::symbols).collect()
    }

    /// Returns the terms from the greatest monomial to the smallest.
    pub fn terms(&self) -> impl DoubleEndedIterator<Item = (&Monomial, &Rational)> + '_ {
        self.terms.iter().rev()
    }

    /// Returns the term with the greatest monomial.
    pub fn leading(&self) -> Option<(&Monomial, &Rational)> {
        self.terms.iter().next_back()
    }

    /// Multiplies every coefficient by the given number.
    pub fn scale(&self, factor: &Rational) -> Self {
        let mut result = Self::zero();
        for (monomial, coefficient) in &self.terms {
            result.add_term(*monomial, Rational::from(coefficient * factor));
        }
        result
    }

    /// Raises the polynomial to the given power.
    pub fn pow(&self, mut exp: u32) -> Self {
        let mut result = Self::constant(rat(1));
        let mut base = self.clone();
        while exp > 0 {
            if exp & 1 == 1 {
                result = &result * &base;
            }
            exp >>= 1;
            if exp > 0 {
                base = &base * &base;
            }
        }
        result
    }

    /// Converts the polynomial into an expression in canonical expanded form: a sum of
    /// `coefficient * monomial` terms, from the greatest monomial to the smallest.
    pub fn to_expr(&self) -> SymExpr {
        let terms = self.terms()
            .map(|(monomial, coefficient)| SymExpr::with_coefficient(coefficient.clone(), monomial.to_expr()))
            .collect::<Vec<_>>();
        SymExpr::Add(terms).downgrade()
    }
}

impl From<&SymExpr> for Polynomial {
    fn from(expr: &SymExpr) -> Self {
        match expr {
            SymExpr::Primary(Primary::Number(n)) => Self::constant(n.clone()),
            SymExpr::Primary(Primary::Symbol(symbol)) => Self::symbol(*symbol),
            SymExpr::Add(terms) => terms.iter()
                .fold(Self::zero(), |acc, term| acc + Self::from(term)),
            SymExpr::Mul(factors) => factors.iter()
                .fold(Self::constant(rat(1)), |acc, factor| &acc * &Self::from(factor)),
            SymExpr::Exp(base, exp) => Self::from(base.as_ref()).pow(*exp),
        }
    }
}

impl Add for Polynomial {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        for (monomial, coefficient) in rhs.terms {
            self.add_term(monomial, coefficient);
        }
        self
    }
}

impl Sub for Polynomial {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + -rhs
    }
}

impl Neg for Polynomial {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        for coefficient in self.terms.values_mut() {
            *coefficient = -std::mem::take(coefficient);
        }
        self
    }
}

impl Mul for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Self) -> Self::Output {
        let mut result = Polynomial::zero();
        for (lhs_monomial, lhs_coefficient) in &self.terms {
            for (rhs_monomial, rhs_coefficient) in &rhs.terms {
                result.add_term(
                    *lhs_monomial * *rhs_monomial,
                    Rational::from(lhs_coefficient * rhs_coefficient),
                );
            }
        }
        result
    }
}

impl Mul for Polynomial {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

/// Expands the expression into its canonical expanded form.
///
/// ```
/// use drill_compute::symbolic::{expand, parse};
///
/// let expr = parse("(2x + 3)^2").unwrap();
/// assert_eq!(expand(&expr).to_string(), "4*x^2 + 12*x + 9");
/// ```
pub fn expand(expr: &SymExpr) -> SymExpr {
    Polynomial::from(expr).to_expr()
}

impl SymExpr {
    /// Returns true if the two expressions are equal for every value of their variables.
    pub fn is_equivalent(&self, other: &SymExpr) -> bool {
        Polynomial::from(self) == Polynomial::from(other)
    }
}
