//! Simplification rules related to the distributive property.
//!
//! Only a single number is distributed over a sum, so `2(x+1)` becomes `2x+2` while `(x+1)(x-1)`
//! and `(x+1)^2` are left as they are. Full expansion is done on
//! [`Polynomial`](crate::symbolic::poly::Polynomial)s instead.

use crate::symbolic::{
    expr::SymExpr,
    simplify::{rules::{do_multiply, do_power}, step::Step},
    step_collector::StepCollector,
};

/// `2*(a+b) = 2a + 2b`
pub fn distribute_number(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_multiply(expr, |factors| {
        let (number, terms) = match factors {
            [SymExpr::Primary(number), SymExpr::Add(terms)]
            | [SymExpr::Add(terms), SymExpr::Primary(number)] => (number, terms),
            _ => return None,
        };
        let number = SymExpr::Primary(number.clone());
        if !number.is_number() {
            return None;
        }

        let new_terms = terms.iter()
            .map(|term| number.clone() * term.clone())
            .collect::<Vec<_>>();
        Some(SymExpr::Add(new_terms))
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::DistributeNumber);
    Some(opt)
}

/// `(a*b)^c = a^c * b^c`
pub fn distribute_power(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_power(expr, |base, exp| {
        if let SymExpr::Mul(factors) = base {
            let new_factors = factors.iter()
                .map(|factor| factor.clone().pow(exp))
                .collect::<Vec<_>>();

            return Some(SymExpr::Mul(new_factors));
        }

        None
    })?;

    step_collector.push(Step::DistributePower);
    Some(opt)
}

/// Applies all distribution rules.
///
/// The distributive property may or may not reduce the complexity of the expression, since it can
/// introduce additional operations. However, it may be necessary for future rules to apply.
pub fn all(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    distribute_number(expr, step_collector)
        .or_else(|| distribute_power(expr, step_collector))
}
