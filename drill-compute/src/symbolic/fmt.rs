//! Typesetting of [`SymExpr`]s, as LaTeX through the [`Latex`] trait, and as plain text through
//! [`Display`](fmt::Display).
//!
//! Both styles print terms from the highest degree down, put the numeric coefficient of a term in
//! front, and order the factors of a product with single variables first.
//!
//! ```
//! use drill_compute::symbolic::parse;
//! use drill_parser::parser::fmt::Latex;
//!
//! let expr = parse("(3x + 2)^2 / 36").unwrap();
//! assert_eq!(expr.as_display().to_string(), "\\frac{\\left(3 x + 2\\right)^{2}}{36}");
//! assert_eq!(expr.to_string(), "(3*x + 2)^2/36");
//! ```

use drill_parser::parser::fmt::Latex;
use rug::{Integer, Rational};
use std::{cmp::Ordering, fmt::{self, Formatter}};
use super::{expr::{Primary, SymExpr}, poly::{Monomial, Polynomial}};

/// The two output styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    Latex,
    Plain,
}

impl Style {
    fn open_paren(self) -> &'static str {
        match self {
            Style::Latex => "\\left(",
            Style::Plain => "(",
        }
    }

    fn close_paren(self) -> &'static str {
        match self {
            Style::Latex => "\\right)",
            Style::Plain => ")",
        }
    }

    /// The sign in front of the first term of an expression.
    fn leading_minus(self) -> &'static str {
        match self {
            Style::Latex => "- ",
            Style::Plain => "-",
        }
    }

    /// The separator between factors of a product.
    fn times(self) -> &'static str {
        match self {
            Style::Latex => " ",
            Style::Plain => "*",
        }
    }
}

/// Orders the terms of a sum from the greatest monomial down.
fn sorted_terms(terms: &[SymExpr]) -> Vec<&SymExpr> {
    let mut sorted = terms.iter().collect::<Vec<_>>();
    sorted.sort_by_key(|term| std::cmp::Reverse(Monomial::leading_of(term)));
    sorted
}

/// Splits a factor into its base and exponent.
fn base_and_exponent(expr: &SymExpr) -> (&SymExpr, u32) {
    match expr {
        SymExpr::Exp(base, exp) => (base, *exp),
        expr => (expr, 1),
    }
}

/// Orders the factors of a product: powers of single variables first, alphabetically, then
/// composite factors by degree and coefficients.
fn cmp_factors(lhs: &SymExpr, rhs: &SymExpr) -> Ordering {
    let (lhs_base, lhs_exp) = base_and_exponent(lhs);
    let (rhs_base, rhs_exp) = base_and_exponent(rhs);
    match (lhs_base.as_symbol(), rhs_base.as_symbol()) {
        (Some(lhs), Some(rhs)) => lhs.cmp(&rhs),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => {
            let lhs_poly = Polynomial::from(lhs_base);
            let rhs_poly = Polynomial::from(rhs_base);
            lhs_poly.degree().cmp(&rhs_poly.degree())
                .then_with(|| lhs_poly.terms().cmp(rhs_poly.terms()))
                .then_with(|| lhs_exp.cmp(&rhs_exp))
        },
    }
}

/// Writes a non-negative integer.
fn fmt_integer(f: &mut Formatter, n: &Integer) -> fmt::Result {
    write!(f, "{}", n)
}

/// Writes a number, with a leading minus sign if it is negative.
fn fmt_number(f: &mut Formatter, n: &Rational, style: Style) -> fmt::Result {
    if n.cmp0().is_lt() {
        f.write_str(style.leading_minus())?;
    }
    let n = n.clone().abs();
    fmt_term(f, &n, &[], style)
}

/// Writes the numerator of a term: the coefficient, if it is not `1`, followed by the factors.
fn fmt_numerator(f: &mut Formatter, numer: &Integer, factors: &[&SymExpr], style: Style) -> fmt::Result {
    let show_numer = factors.is_empty() || *numer != 1;
    if show_numer {
        fmt_integer(f, numer)?;
    }
    for (i, factor) in factors.iter().enumerate() {
        if i > 0 || show_numer {
            f.write_str(style.times())?;
        }
        fmt_factor(f, factor, style)?;
    }
    Ok(())
}

/// Writes `coefficient * factors`, where the coefficient is non-negative. The factors are written
/// in the order given.
fn fmt_term(f: &mut Formatter, coefficient: &Rational, factors: &[&SymExpr], style: Style) -> fmt::Result {
    let numer = coefficient.numer();
    let denom = coefficient.denom();
    if *denom == 1 {
        return fmt_numerator(f, numer, factors, style);
    }

    match style {
        Style::Latex => {
            f.write_str("\\frac{")?;
            fmt_numerator(f, numer, factors, style)?;
            f.write_str("}{")?;
            fmt_integer(f, denom)?;
            f.write_str("}")
        },
        Style::Plain => {
            fmt_numerator(f, numer, factors, style)?;
            f.write_str("/")?;
            fmt_integer(f, denom)
        },
    }
}

/// Writes one factor of a product, wrapped in parentheses if it is a sum.
fn fmt_factor(f: &mut Formatter, factor: &SymExpr, style: Style) -> fmt::Result {
    match factor {
        SymExpr::Add(_) | SymExpr::Mul(_) => fmt_wrapped(f, factor, style),
        SymExpr::Primary(Primary::Number(n)) if n.cmp0().is_lt() || *n.denom() != 1 => {
            fmt_wrapped(f, factor, style)
        },
        factor => fmt_expr(f, factor, style),
    }
}

/// Writes the expression between parentheses.
fn fmt_wrapped(f: &mut Formatter, expr: &SymExpr, style: Style) -> fmt::Result {
    f.write_str(style.open_paren())?;
    fmt_expr(f, expr, style)?;
    f.write_str(style.close_paren())
}

/// Writes a power.
fn fmt_power(f: &mut Formatter, base: &SymExpr, exp: u32, style: Style) -> fmt::Result {
    match base {
        SymExpr::Primary(Primary::Symbol(_)) => fmt_expr(f, base, style)?,
        SymExpr::Primary(Primary::Number(n)) if n.cmp0().is_ge() && *n.denom() == 1 => {
            fmt_expr(f, base, style)?
        },
        base => fmt_wrapped(f, base, style)?,
    }
    match style {
        Style::Latex => write!(f, "^{{{}}}", exp),
        Style::Plain => write!(f, "^{}", exp),
    }
}

/// Writes a term of a sum without its sign.
fn fmt_unsigned_term(f: &mut Formatter, term: &SymExpr, style: Style) -> fmt::Result {
    match term {
        SymExpr::Primary(Primary::Number(n)) => fmt_term(f, &n.clone().abs(), &[], style),
        SymExpr::Mul(factors) => {
            let (coefficient, _) = term.split_coefficient();
            let mut rest = factors.iter()
                .filter(|factor| !factor.is_number())
                .collect::<Vec<_>>();
            rest.sort_by(|lhs, rhs| cmp_factors(lhs, rhs));
            fmt_term(f, &coefficient.abs(), &rest, style)
        },
        term => fmt_expr(f, term, style),
    }
}

/// Returns true if the term is printed with a minus sign.
fn is_negative_term(term: &SymExpr) -> bool {
    match term {
        SymExpr::Primary(Primary::Number(_)) | SymExpr::Mul(_) => term.split_coefficient().0.cmp0().is_lt(),
        _ => false,
    }
}

/// Writes any expression.
fn fmt_expr(f: &mut Formatter, expr: &SymExpr, style: Style) -> fmt::Result {
    match expr {
        SymExpr::Primary(Primary::Number(n)) => fmt_number(f, n, style),
        SymExpr::Primary(Primary::Symbol(symbol)) => write!(f, "{}", symbol),
        SymExpr::Add(terms) => {
            for (i, term) in sorted_terms(terms).into_iter().enumerate() {
                let negative = is_negative_term(term);
                match (i, negative) {
                    (0, true) => f.write_str(style.leading_minus())?,
                    (0, false) => (),
                    (_, true) => f.write_str(" - ")?,
                    (_, false) => f.write_str(" + ")?,
                }
                fmt_unsigned_term(f, term, style)?;
            }
            Ok(())
        },
        SymExpr::Mul(_) => {
            if is_negative_term(expr) {
                f.write_str(style.leading_minus())?;
            }
            fmt_unsigned_term(f, expr, style)
        },
        SymExpr::Exp(base, exp) => fmt_power(f, base, *exp, style),
    }
}

impl Latex for SymExpr {
    fn fmt_latex(&self, f: &mut Formatter) -> fmt::Result {
        fmt_expr(f, self, Style::Latex)
    }
}

impl fmt::Display for SymExpr {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        fmt_expr(f, self, Style::Plain)
    }
}
