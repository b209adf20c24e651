//! Simplification rules for expressions involving multiplication, including combining like
//! factors.

use crate::primitive::rat;
use crate::symbolic::{
    expr::SymExpr,
    simplify::{rules::do_multiply, step::Step},
    step_collector::StepCollector,
};

/// `0*a = 0`
/// `a*0 = 0`
pub fn multiply_zero(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_multiply(expr, |factors| {
        if factors.iter().any(SymExpr::is_zero) {
            Some(SymExpr::number(0))
        } else {
            None
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::MultiplyZero);
    Some(opt)
}

/// `1*a = a`
/// `a*1 = a`
pub fn multiply_one(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_multiply(expr, |factors| {
        let new_factors = factors.iter()
            .filter(|factor| factor.as_number().map_or(true, |n| *n != 1))
            .cloned()
            .collect::<Vec<_>>();

        if new_factors.len() == factors.len() {
            None
        } else {
            Some(SymExpr::Mul(new_factors).downgrade())
        }
    })?;

    step_collector.push(Step::MultiplyOne);
    Some(opt)
}

/// `a*(b*c) = a*b*c`
pub fn flatten_product(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_multiply(expr, |factors| {
        if !factors.iter().any(|factor| matches!(factor, SymExpr::Mul(_))) {
            return None;
        }

        let new_factors = factors.iter()
            .flat_map(|factor| match factor {
                SymExpr::Mul(inner) => inner.clone(),
                factor => vec![factor.clone()],
            })
            .collect::<Vec<_>>();
        Some(SymExpr::Mul(new_factors).downgrade())
    })?;

    step_collector.push(Step::FlattenProduct);
    Some(opt)
}

/// Combines like factors.
///
/// `2*3*a = 6a`
/// `a*a = a^2`
/// `a^2*a^3 = a^5`
/// etc.
pub fn combine_like_factors(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_multiply(expr, |factors| {
        // every numeric factor is folded into one coefficient at the front
        let mut coefficient = rat(1);
        let mut numbers = 0;
        let mut new_factors = Vec::with_capacity(factors.len());
        for factor in factors {
            match factor.as_number() {
                Some(n) => {
                    coefficient *= n;
                    numbers += 1;
                },
                None => new_factors.push(factor.clone()),
            }
        }

        /// Utility function to extract the base and exponent of an expression. If the expression
        /// is not [`SymExpr::Exp`], the exponent is `1`.
        fn get_exp(expr: &SymExpr) -> (&SymExpr, u32) {
            match expr {
                SymExpr::Exp(base, exp) => (base, *exp),
                expr => (expr, 1),
            }
        }

        let mut current_factor_idx = 0;
        while current_factor_idx < new_factors.len() {
            let (current_base, mut current_exp) = {
                let (base, exp) = get_exp(&new_factors[current_factor_idx]);
                (base.clone(), exp)
            };

            // look at every factor after `current_factor`
            let mut next_factor_idx = current_factor_idx + 1;
            let mut combined = false;
            while next_factor_idx < new_factors.len() {
                let (next_base, next_exp) = get_exp(&new_factors[next_factor_idx]);

                // bases must be strictly equal
                if current_base == *next_base {
                    current_exp = current_exp.saturating_add(next_exp);
                    new_factors.remove(next_factor_idx);
                    combined = true;
                } else {
                    next_factor_idx += 1;
                }
            }

            if combined {
                new_factors[current_factor_idx] = current_base.pow(current_exp);
            }
            current_factor_idx += 1;
        }

        if numbers <= 1 && new_factors.len() + numbers == factors.len() {
            return None;
        }

        if coefficient != 1 || new_factors.is_empty() {
            new_factors.insert(0, SymExpr::number(coefficient));
        }
        Some(SymExpr::Mul(new_factors).downgrade())
    })?;

    step_collector.push(Step::CombineLikeFactors);
    Some(opt)
}

/// Applies all multiplication rules.
///
/// All multiplication rules will reduce the complexity of the expression.
pub fn all(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    multiply_zero(expr, step_collector)
        .or_else(|| multiply_one(expr, step_collector))
        .or_else(|| flatten_product(expr, step_collector))
        .or_else(|| combine_like_factors(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use crate::primitive::rat;
    use crate::symbolic::expr::Symbol;
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> SymExpr {
        SymExpr::symbol(Symbol::X)
    }

    #[test]
    fn numbers_and_powers() {
        // 2 * x * 3 * x^2
        let expr = SymExpr::Mul(vec![
            SymExpr::number(2),
            x(),
            SymExpr::number(3),
            x().pow(2),
        ]);
        assert_eq!(combine_like_factors(&expr, &mut ()), Some(SymExpr::Mul(vec![
            SymExpr::number(6),
            x().pow(3),
        ])));
    }

    #[test]
    fn reciprocal_numbers() {
        // 4 * x * 1/4
        let expr = SymExpr::Mul(vec![SymExpr::number(4), x(), SymExpr::number(rat((1, 4)))]);
        assert_eq!(combine_like_factors(&expr, &mut ()), Some(x()));
    }

    #[test]
    fn nothing_to_combine() {
        let expr = SymExpr::Mul(vec![SymExpr::number(2), x(), SymExpr::symbol(Symbol::Y)]);
        assert_eq!(combine_like_factors(&expr, &mut ()), None);
    }

    #[test]
    fn zero_factor() {
        let expr = SymExpr::Mul(vec![x(), SymExpr::number(0)]);
        let mut steps = Vec::new();
        assert_eq!(multiply_zero(&expr, &mut steps), Some(SymExpr::number(0)));
        assert_eq!(steps, vec![Step::MultiplyZero]);
    }
}
