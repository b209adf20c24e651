//! Simplification rules for powers.

use crate::symbolic::{
    expr::SymExpr,
    simplify::{rules::do_power, step::Step},
    step_collector::StepCollector,
};
use rug::ops::Pow;

/// `a^0 = 1`
pub fn power_zero(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_power(expr, |_, exp| (exp == 0).then(|| SymExpr::number(1)))?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::PowerZero);
    Some(opt)
}

/// `a^1 = a`
pub fn power_one(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_power(expr, |base, exp| (exp == 1).then(|| base.clone()))?;

    step_collector.push(Step::PowerOne);
    Some(opt)
}

/// Evaluates powers of numbers.
///
/// `2^3 = 8`
/// `(1/2)^2 = 1/4`
pub fn power_number(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_power(expr, |base, exp| {
        let base = base.as_number()?;
        Some(SymExpr::number(Pow::pow(base.clone(), exp)))
    })?;

    step_collector.push(Step::PowerNumber);
    Some(opt)
}

/// `(a^b)^c = a^(b*c)`
pub fn power_power(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_power(expr, |base, exp| match base {
        SymExpr::Exp(inner, inner_exp) => Some(inner.as_ref().clone().pow(inner_exp.saturating_mul(exp))),
        _ => None,
    })?;

    step_collector.push(Step::PowerPower);
    Some(opt)
}

/// Applies all power rules.
///
/// All power rules will reduce the complexity of the expression.
pub fn all(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    power_zero(expr, step_collector)
        .or_else(|| power_one(expr, step_collector))
        .or_else(|| power_number(expr, step_collector))
        .or_else(|| power_power(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use crate::primitive::rat;
    use crate::symbolic::expr::Symbol;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn number_powers() {
        let expr = SymExpr::number(rat((-1, 2))).pow(3);
        assert_eq!(power_number(&expr, &mut ()), Some(SymExpr::number(rat((-1, 8)))));
    }

    #[test]
    fn nested_powers() {
        let x = SymExpr::symbol(Symbol::X);
        let expr = x.clone().pow(2).pow(3);
        assert_eq!(power_power(&expr, &mut ()), Some(x.pow(6)));
    }

    #[test]
    fn trivial_exponents() {
        let x = SymExpr::symbol(Symbol::X);
        assert_eq!(power_zero(&x.clone().pow(0), &mut ()), Some(SymExpr::number(1)));
        assert_eq!(power_one(&x.clone().pow(1), &mut ()), Some(x));
    }
}
