//! Algebraic manipulation of polynomial expressions.
//!
//! # Expression representation
//!
//! Expressions in this module are represented as a tree of [`SymExpr`] nodes. It's similar to the
//! [`drill_parser::parser::ast::Expr`] nodes produced by [`drill_parser`], with the main
//! difference being that [`SymExpr`] nodes **flatten** out the tree structure: `x + (y + 1)` is a
//! single [`SymExpr::Add`] node with three children.
//!
//! An [`Expr`](drill_parser::parser::ast::Expr) is converted with [`TryFrom`]. Conversion fails
//! for anything that is not a polynomial in `a`, `b`, `x`, and `y`, with an [`Error`] that points
//! at the offending part of the input.
//!
//! # Simplification
//!
//! [`simplify()`] evaluates the arithmetic in an expression and combines like terms and factors,
//! without multiplying out products of sums. [`parse`] parses, converts, and simplifies in one go.
//!
//! ```
//! use drill_compute::symbolic::parse;
//!
//! let expr = parse("2x + 3x - x^2*x^0").unwrap();
//! assert_eq!(expr.to_string(), "-x^2 + 5*x");
//! ```
//!
//! # Normal form
//!
//! Deciding whether two expressions are equal is done on [`Polynomial`]s, a map from monomials to
//! coefficients. [`expand`] converts an expression through its polynomial and back, which gives
//! the canonical expanded form, and [`factor`] goes the other way.

pub mod error;
pub mod expr;
pub mod factor;
pub mod fmt;
pub mod poly;
pub mod simplify;
pub mod step_collector;

pub use expr::{Primary, Symbol, SymExpr, MAX_EXPONENT};
pub use factor::factor;
pub use poly::{expand, Monomial, Polynomial};
pub use simplify::{simplify, simplify_with_steps};

use drill_error::Error;
use drill_parser::parser::{ast::Expr, Parser};

/// Parses the input as an expression, converts it to a [`SymExpr`], and simplifies it.
pub fn parse(input: &str) -> Result<SymExpr, Error> {
    let ast = Parser::new(input).try_parse_full::<Expr>()?;
    let expr = SymExpr::try_from(ast)?;
    Ok(simplify(&expr))
}
