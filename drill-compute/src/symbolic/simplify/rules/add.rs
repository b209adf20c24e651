//! Simplification rules for expressions involving addition, including combining like terms.

use crate::symbolic::{
    expr::SymExpr,
    simplify::{rules::do_add, step::Step},
    step_collector::StepCollector,
};

/// `0+a = a`
/// `a+0 = a`
pub fn add_zero(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_add(expr, |terms| {
        let new_terms = terms.iter()
            .filter(|term| !term.is_zero())
            .cloned()
            .collect::<Vec<_>>();

        if new_terms.len() == terms.len() {
            None
        } else {
            Some(SymExpr::Add(new_terms).downgrade())
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::AddZero);
    Some(opt)
}

/// `a+(b+c) = a+b+c`
///
/// Other rules can produce a sum as a term of a sum.
pub fn flatten_sum(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_add(expr, |terms| {
        if !terms.iter().any(SymExpr::is_add) {
            return None;
        }

        let new_terms = terms.iter()
            .flat_map(|term| match term {
                SymExpr::Add(inner) => inner.clone(),
                term => vec![term.clone()],
            })
            .collect::<Vec<_>>();
        Some(SymExpr::Add(new_terms).downgrade())
    })?;

    step_collector.push(Step::FlattenSum);
    Some(opt)
}

/// Combines like terms.
///
/// `a+a = 2a`
/// `2a+3a = 5a`
/// `2+3 = 5`
/// etc.
pub fn combine_like_terms(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_add(expr, |terms| {
        let mut new_terms = terms.to_vec();
        let mut current_term_idx = 0;

        // this is O(n^2) worst case, due to scanning the whole vec for each term
        while current_term_idx < new_terms.len() {
            let (mut current_coeff, current_rest) = new_terms[current_term_idx].split_coefficient();

            // look at every term after `current_term`
            let mut next_term_idx = current_term_idx + 1;
            let mut combined = false;
            while next_term_idx < new_terms.len() {
                let (next_coeff, next_rest) = new_terms[next_term_idx].split_coefficient();

                // the non-numeric parts must be strictly equal
                if current_rest == next_rest {
                    current_coeff += next_coeff;
                    new_terms.remove(next_term_idx);
                    combined = true;
                } else {
                    next_term_idx += 1;
                }
            }

            if combined {
                new_terms[current_term_idx] = SymExpr::with_coefficient(current_coeff, current_rest);
            }
            current_term_idx += 1;
        }

        if new_terms.len() == terms.len() {
            None
        } else {
            Some(SymExpr::Add(new_terms).downgrade())
        }
    })?;

    step_collector.push(Step::CombineLikeTerms);
    Some(opt)
}

/// Applies all addition rules.
///
/// All addition rules will reduce the complexity of the expression.
pub fn all(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    add_zero(expr, step_collector)
        .or_else(|| flatten_sum(expr, step_collector))
        .or_else(|| combine_like_terms(expr, step_collector))
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
    fn like_terms() {
        // 2x + 1 + 3x + 4
        let expr = SymExpr::Add(vec![
            SymExpr::Mul(vec![SymExpr::number(2), x()]),
            SymExpr::number(1),
            SymExpr::Mul(vec![SymExpr::number(3), x()]),
            SymExpr::number(4),
        ]);
        let mut steps = Vec::new();
        let combined = combine_like_terms(&expr, &mut steps).unwrap();
        assert_eq!(combined, SymExpr::Add(vec![
            SymExpr::Mul(vec![SymExpr::number(5), x()]),
            SymExpr::number(5),
        ]));
        assert_eq!(steps, vec![Step::CombineLikeTerms]);
    }

    #[test]
    fn unlike_terms() {
        let expr = SymExpr::Add(vec![x(), SymExpr::symbol(Symbol::Y)]);
        assert_eq!(combine_like_terms(&expr, &mut ()), None);
    }

    #[test]
    fn nested_sum() {
        let expr = SymExpr::Add(vec![
            x(),
            SymExpr::Add(vec![SymExpr::symbol(Symbol::Y), SymExpr::number(1)]),
        ]);
        assert_eq!(flatten_sum(&expr, &mut ()), Some(SymExpr::Add(vec![
            x(),
            SymExpr::symbol(Symbol::Y),
            SymExpr::number(1),
        ])));
    }
}
