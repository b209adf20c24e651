//! Factorization of polynomials over the rationals.
//!
//! [`factor`] pulls out the rational content of a polynomial, so that what remains has coprime
//! integer coefficients and a positive leading coefficient. A univariate remainder is then split
//! into linear factors by searching for its rational roots; anything left over (and every
//! multivariate remainder) is kept as a single factor.
//!
//! ```
//! use drill_compute::symbolic::{factor, parse};
//!
//! let expr = parse("a^2 - 16").unwrap();
//! assert_eq!(factor(&expr), parse("(a - 4)(a + 4)").unwrap());
//! ```

use crate::primitive::{int, rat};
use super::{expr::{Symbol, SymExpr}, poly::{Monomial, Polynomial}};
use rug::{Integer, Rational};
use std::collections::BTreeSet;

/// The root search is skipped when the constant or leading coefficient is larger than this.
const MAX_ROOT_SEARCH: u64 = 1_000_000;

/// Splits the polynomial into its rational content and a primitive polynomial, one with coprime
/// integer coefficients and a positive leading coefficient.
///
/// `x^2/4 + x + 1` -> `(1/4, x^2 + 4x + 4)`
pub fn primitive_part(poly: &Polynomial) -> (Rational, Polynomial) {
    let Some((_, leading)) = poly.leading() else {
        return (rat(1), Polynomial::zero());
    };

    let (numer_gcd, denom_lcm) = poly.terms()
        .fold((int(0), int(1)), |(gcd, lcm), (_, coefficient)| {
            (gcd.gcd(coefficient.numer()), lcm.lcm(coefficient.denom()))
        });

    let mut content = Rational::from((numer_gcd, denom_lcm));
    if leading.cmp0().is_lt() {
        content = -content;
    }

    let primitive = poly.scale(&content.clone().recip());
    (content, primitive)
}

/// Returns the coefficients of a univariate polynomial with integer coefficients, from the
/// constant term up.
fn dense_coefficients(poly: &Polynomial, symbol: Symbol) -> Vec<Integer> {
    let mut coefficients = vec![Integer::new(); poly.degree() as usize + 1];
    for (monomial, coefficient) in poly.terms() {
        coefficients[monomial.exponent(symbol) as usize] = coefficient.numer().clone();
    }
    coefficients
}

/// Returns the positive divisors of `n`, or [`None`] if `n` is zero or too large to search.
fn divisors(n: &Integer) -> Option<Vec<u64>> {
    let n = n.clone().abs().to_u64().filter(|n| *n > 0 && *n <= MAX_ROOT_SEARCH)?;
    let mut divisors = Vec::new();
    let mut d = 1;
    while d * d <= n {
        if n % d == 0 {
            divisors.push(d);
            if d * d != n {
                divisors.push(n / d);
            }
        }
        d += 1;
    }
    Some(divisors)
}

/// Divides the polynomial with the given coefficients by `q*v - p`. Returns [`None`] if the
/// division is not exact over the integers.
fn divide_linear(coefficients: &[Integer], q: &Integer, p: &Integer) -> Option<Vec<Integer>> {
    let degree = coefficients.len().checked_sub(1).filter(|degree| *degree > 0)?;
    let mut quotient = vec![Integer::new(); degree];

    let mut carry = coefficients[degree].clone();
    for i in (0..degree).rev() {
        if !carry.is_divisible(q) {
            return None;
        }
        quotient[i] = Integer::from(carry.div_exact_ref(q));
        carry = Integer::from(&coefficients[i] + Integer::from(p * &quotient[i]));
    }

    // whatever is left over is the remainder
    carry.cmp0().is_eq().then_some(quotient)
}

/// Builds the linear factor `q*v - p`.
fn linear_factor(symbol: Symbol, q: &Integer, p: &Integer) -> SymExpr {
    let term = SymExpr::with_coefficient(Rational::from(q), Some(SymExpr::symbol(symbol)));
    if p.cmp0().is_eq() {
        term
    } else {
        SymExpr::Add(vec![term, SymExpr::number(Rational::from(-p.clone()))])
    }
}

/// Raises the factor to the given power, if it is not `1`.
fn with_multiplicity(factor: SymExpr, multiplicity: u32) -> SymExpr {
    if multiplicity == 1 {
        factor
    } else {
        factor.pow(multiplicity)
    }
}

/// Splits a primitive univariate polynomial into linear factors and a remainder.
///
/// Returns the factors and the constant left over once no factor of positive degree remains.
fn factor_univariate(poly: &Polynomial, symbol: Symbol) -> (Vec<SymExpr>, Integer) {
    let mut coefficients = dense_coefficients(poly, symbol);
    let mut factors = Vec::new();

    // roots at zero
    let zeros = coefficients.iter().take_while(|c| c.cmp0().is_eq()).count();
    if zeros > 0 {
        coefficients.drain(..zeros);
        factors.push(with_multiplicity(SymExpr::symbol(symbol), zeros as u32));
    }

    let candidates = match (coefficients.first().and_then(divisors), coefficients.last().and_then(divisors)) {
        (Some(constant), Some(leading)) => constant.iter()
            .flat_map(|p| leading.iter().flat_map(move |q| {
                let p = *p as i64;
                let q = *q as i64;
                [Rational::from((p, q)), Rational::from((-p, q))]
            }))
            .collect::<BTreeSet<_>>(),
        _ => BTreeSet::new(),
    };

    for root in candidates {
        if coefficients.len() < 2 {
            break;
        }

        let (p, q) = (root.numer(), root.denom());
        let mut multiplicity = 0;
        while let Some(quotient) = divide_linear(&coefficients, q, p) {
            coefficients = quotient;
            multiplicity += 1;
        }
        if multiplicity > 0 {
            factors.push(with_multiplicity(linear_factor(symbol, q, p), multiplicity));
        }
    }

    if coefficients.len() < 2 {
        let constant = coefficients.pop().unwrap_or_else(|| int(1));
        return (factors, constant);
    }

    let mut remainder = Polynomial::zero();
    let variable = Monomial::symbol(symbol);
    for (exp, coefficient) in coefficients.into_iter().enumerate() {
        remainder.add_term(variable.pow(exp as u32), Rational::from(coefficient));
    }
    factors.push(remainder.to_expr());
    (factors, int(1))
}

/// Factors the expression over the rationals.
///
/// The result is built directly, without simplification, so a numeric content multiplying a
/// single sum stays factored: `2x + 4` becomes `2(x + 2)`.
pub fn factor(expr: &SymExpr) -> SymExpr {
    let poly = Polynomial::from(expr);
    if let Some(constant) = poly.as_constant() {
        return SymExpr::number(constant);
    }

    let (mut content, primitive) = primitive_part(&poly);
    let symbols = primitive.free_symbols();
    let factors = match symbols.first() {
        Some(symbol) if symbols.len() == 1 => {
            let (factors, constant) = factor_univariate(&primitive, *symbol);
            content *= Rational::from(constant);
            factors
        },
        _ => vec![primitive.to_expr()],
    };

    let mut product = Vec::with_capacity(factors.len() + 1);
    if content != 1 {
        product.push(SymExpr::number(content));
    }
    product.extend(factors);
    SymExpr::Mul(product).downgrade()
}
