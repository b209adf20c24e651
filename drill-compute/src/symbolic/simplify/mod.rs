//! Simplification of algebraic expressions.
//!
//! Simplification brings an expression into the form a student would write after the obvious
//! arithmetic: numbers are evaluated, like terms and like factors are combined, and a single
//! number multiplying a sum is distributed. Products of sums and powers of sums are **not**
//! expanded; `(x+1)(x-1)` stays as it is. To multiply everything out, see
//! [`expand`](crate::symbolic::expand).
//!
//! ```
//! use drill_compute::symbolic::parse;
//!
//! assert_eq!(parse("x + x + 3 - 1").unwrap().to_string(), "2*x + 2");
//! assert_eq!(parse("2(x + 1)").unwrap().to_string(), "2*x + 2");
//! assert_eq!(parse("(x + 1)(x - 1)").unwrap().to_string(), "(x - 1)*(x + 1)");
//! ```

pub mod rules;
pub mod step;

use super::{expr::SymExpr, step_collector::StepCollector};
use step::Step;

/// Simplifies the children of the expression, then applies the rules to the expression itself,
/// until nothing changes.
///
/// Returns `Some` with the simplified expression if anything changed.
fn inner_simplify(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let mut changed = false;
    let mut current = expr.clone();

    loop {
        // simplify the children first
        let children_changed = match &mut current {
            SymExpr::Primary(_) => false,
            SymExpr::Add(children) | SymExpr::Mul(children) => {
                let mut any = false;
                for child in children.iter_mut() {
                    if let Some(new_child) = inner_simplify(child, step_collector) {
                        *child = new_child;
                        any = true;
                    }
                }
                any
            },
            SymExpr::Exp(base, _) => match inner_simplify(base, step_collector) {
                Some(new_base) => {
                    **base = new_base;
                    true
                },
                None => false,
            },
        };

        match rules::all(&current, step_collector) {
            Some(new_expr) => {
                current = new_expr;
                changed = true;
            },
            None => {
                changed |= children_changed;
                break;
            },
        }
    }

    changed.then_some(current)
}

/// Simplifies the given expression.
pub fn simplify(expr: &SymExpr) -> SymExpr {
    inner_simplify(expr, &mut ()).unwrap_or_else(|| expr.clone())
}

/// Simplifies the given expression, returning the simplified expression and the steps taken.
pub fn simplify_with_steps(expr: &SymExpr) -> (SymExpr, Vec<Step>) {
    let mut steps = Vec::new();
    let simplified = inner_simplify(expr, &mut steps).unwrap_or_else(|| expr.clone());
    (simplified, steps)
}

#[cfg(test)]
mod tests {
    use crate::symbolic::expr::Symbol;
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> SymExpr {
        SymExpr::symbol(Symbol::X)
    }

    #[test]
    fn nested_arithmetic() {
        // 2 * (3 + 4) * x
        let expr = SymExpr::Mul(vec![
            SymExpr::number(2),
            SymExpr::Add(vec![SymExpr::number(3), SymExpr::number(4)]),
            x(),
        ]);
        assert_eq!(simplify(&expr), SymExpr::Mul(vec![SymExpr::number(14), x()]));
    }

    #[test]
    fn cancelling_terms() {
        // x - x
        let expr = SymExpr::Add(vec![x(), -x()]);
        let (simplified, steps) = simplify_with_steps(&expr);
        assert_eq!(simplified, SymExpr::number(0));
        assert_eq!(steps, vec![Step::CombineLikeTerms, Step::MultiplyZero]);
    }

    #[test]
    fn negated_sum_is_distributed() {
        // -(x + 1)
        let expr = -SymExpr::Add(vec![x(), SymExpr::number(1)]);
        assert_eq!(simplify(&expr), SymExpr::Add(vec![-x(), SymExpr::number(-1)]));
    }

    #[test]
    fn squared_sum_is_kept() {
        let expr = SymExpr::Add(vec![x(), SymExpr::number(1)]).pow(2);
        assert_eq!(simplify(&expr), expr);
    }

    #[test]
    fn power_of_product() {
        // (2x)^2
        let expr = SymExpr::Mul(vec![SymExpr::number(2), x()]).pow(2);
        assert_eq!(simplify(&expr), SymExpr::Mul(vec![SymExpr::number(4), x().pow(2)]));
    }
}
