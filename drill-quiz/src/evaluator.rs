//! Grading of typed answers.
//!
//! A typed answer is normalized, parsed over the variables `a`, `b`, `x`, and `y`, and then
//! compared against the target of the problem. The `check_*` functions return the reason an answer
//! was rejected; the `grade_*` functions reduce that to a verdict and log the reason.
//!
//! ```
//! use drill_compute::symbolic::{expand, parse};
//! use drill_quiz::evaluator::{grade_expansion, grade_factorization};
//!
//! let target = expand(&parse("(b - 3)(b + 3)").unwrap());
//! assert!(grade_expansion("b^2-9", &target));
//! assert!(grade_expansion("b*b − 9", &target));
//! assert!(!grade_expansion("y+1", &target));
//!
//! let target = parse("a^2 - 16").unwrap();
//! assert!(grade_factorization("(a+4)*(a-4)", &target));
//! assert!(!grade_factorization("a**2-16", &target));
//! ```

use crate::{error::Rejection, family::Mode};
use drill_compute::symbolic::{factor, parse, SymExpr};
use drill_error::Error;
use tracing::{debug, warn};

/// Rewrites the typographic symbols students paste into the ASCII the parser reads, and removes
/// all whitespace.
///
/// - `−` and `–` become `-`
/// - `×` and `·` become `*`
/// - `^` becomes `**`
pub fn normalize_input(input: &str) -> String {
    input.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '−' | '–' => '-',
            '×' | '·' => '*',
            c => c,
        })
        .collect::<String>()
        .replace('^', "**")
}

/// Normalizes and parses a typed answer.
///
/// The spans of a returned error refer to the normalized input.
pub fn parse_answer(input: &str) -> Result<SymExpr, Error> {
    parse(&normalize_input(input))
}

/// Rejects the answer if it uses a variable that the target does not.
fn check_scope(answer: &SymExpr, target: &SymExpr) -> Result<(), Rejection> {
    let allowed = target.free_symbols();
    let symbols = answer.free_symbols()
        .into_iter()
        .filter(|symbol| !allowed.contains(symbol))
        .collect::<std::collections::BTreeSet<_>>();
    if symbols.is_empty() {
        Ok(())
    } else {
        Err(Rejection::ScopeViolation { symbols })
    }
}

/// Checks an answer to an expansion problem. Any answer equal to the target is accepted,
/// including a factored one.
pub fn check_expansion(input: &str, target: &SymExpr) -> Result<(), Rejection> {
    let answer = parse_answer(input).map_err(Rejection::Parse)?;
    check_scope(&answer, target)?;
    if answer.is_equivalent(target) {
        Ok(())
    } else {
        Err(Rejection::NotEquivalent)
    }
}

/// Checks an answer to an expansion problem, additionally requiring the answer to be in expanded
/// form.
pub fn check_expansion_strict(input: &str, target: &SymExpr) -> Result<(), Rejection> {
    let answer = parse_answer(input).map_err(Rejection::Parse)?;
    check_scope(&answer, target)?;
    if !answer.is_equivalent(target) {
        return Err(Rejection::NotEquivalent);
    }
    if !answer.is_expanded_form() {
        return Err(Rejection::FormPolicyViolation { expected: Mode::Expansion });
    }
    Ok(())
}

/// Checks an answer to a factorization problem, given the expanded polynomial to factor.
///
/// The answer must expand to the target, must not itself be in expanded form, and must equal the
/// factorization of the target.
pub fn check_factorization(input: &str, expanded_target: &SymExpr) -> Result<(), Rejection> {
    let answer = parse_answer(input).map_err(Rejection::Parse)?;
    check_scope(&answer, expanded_target)?;
    if !answer.is_equivalent(expanded_target) {
        return Err(Rejection::NotEquivalent);
    }
    if answer.is_expanded_form() {
        return Err(Rejection::FormPolicyViolation { expected: Mode::Factorization });
    }
    if !answer.is_equivalent(&factor(expanded_target)) {
        return Err(Rejection::NotEquivalent);
    }
    Ok(())
}

/// Logs the reason an answer was rejected. Answers that could not be read are logged at the
/// `warn` level, everything else at `debug`.
pub(crate) fn log_rejection(input: &str, rejection: &Rejection) {
    match rejection {
        Rejection::Parse(err) => warn!(input, kind = ?err.kind, spans = ?err.spans, "{}", rejection),
        rejection => debug!(input, "{}", rejection),
    }
}

/// Reduces the result of a check to a verdict, logging the rejection if there is one.
fn verdict(input: &str, result: Result<(), Rejection>) -> bool {
    match result {
        Ok(()) => true,
        Err(rejection) => {
            log_rejection(input, &rejection);
            false
        },
    }
}

/// Grades an answer to an expansion problem. See [`check_expansion`].
pub fn grade_expansion(input: &str, target: &SymExpr) -> bool {
    verdict(input, check_expansion(input, target))
}

/// Grades an answer to a factorization problem. See [`check_factorization`].
pub fn grade_factorization(input: &str, expanded_target: &SymExpr) -> bool {
    verdict(input, check_factorization(input, expanded_target))
}

#[cfg(test)]
mod tests {
    use drill_compute::symbolic::{expand, Symbol};
    use pretty_assertions::assert_eq;
    use std::collections::BTreeSet;
    use super::*;

    fn target(input: &str) -> SymExpr {
        expand(&parse(input).unwrap())
    }

    #[test]
    fn normalization() {
        assert_eq!(normalize_input(" 2 × x^2 − 3·y – 1 "), "2*x**2-3*y-1");
    }

    #[test]
    fn equivalent_forms() {
        let target = target("(b-3)(b+3)");
        assert!(check_expansion("b^2-9", &target).is_ok());
        assert!(check_expansion("b*b-9", &target).is_ok());
        assert!(check_expansion("b^2−9", &target).is_ok());
        assert!(check_expansion("-9 + b b", &target).is_ok());
    }

    #[test]
    fn repeated_letters_multiply() {
        let cube = target("x^3");
        assert!(check_expansion("xx^2", &cube).is_ok());
        assert!(check_expansion("x x^2", &cube).is_ok());
        assert!(check_expansion("xxx", &cube).is_ok());
        assert!(matches!(check_expansion("(xx)^2", &cube), Err(Rejection::NotEquivalent)));

        let square = target("(a+b)^2");
        assert!(check_expansion("a^2 + 2ab + b^2", &square).is_ok());
        assert!(check_expansion("a^2 + 2ba + b^2", &square).is_ok());
    }

    #[test]
    fn factored_answer_to_expansion() {
        let target = target("(x+2)(x+3)");
        assert!(check_expansion("(x+3)(x+2)", &target).is_ok());
        assert!(matches!(
            check_expansion_strict("(x+3)(x+2)", &target),
            Err(Rejection::FormPolicyViolation { expected: Mode::Expansion }),
        ));
        assert!(check_expansion_strict("x^2+5x+6", &target).is_ok());
    }

    #[test]
    fn scope() {
        let target = target("(b-3)(b+3)");
        match check_expansion("y+1", &target) {
            Err(Rejection::ScopeViolation { symbols }) => {
                assert_eq!(symbols, BTreeSet::from([Symbol::Y]));
            },
            other => panic!("expected a scope violation, got {:?}", other),
        }
    }

    #[test]
    fn malformed_input() {
        let target = target("x^2");
        assert!(matches!(check_expansion("x+", &target), Err(Rejection::Parse(_))));
        assert!(matches!(check_expansion("z^2", &target), Err(Rejection::Parse(_))));
        assert!(matches!(check_expansion("1/x", &target), Err(Rejection::Parse(_))));
        assert!(!grade_expansion("x+", &target));
        assert!(!grade_expansion("", &target));
    }

    #[test]
    fn factorization() {
        let target = parse("a^2 - 16").unwrap();
        assert!(matches!(
            check_factorization("a**2-16", &target),
            Err(Rejection::FormPolicyViolation { expected: Mode::Factorization }),
        ));
        assert!(check_factorization("(a-4)*(a+4)", &target).is_ok());
        assert!(check_factorization("(a+4)*(a-4)", &target).is_ok());
        assert!(check_factorization("(a+4)(a-4)", &target).is_ok());
        assert!(matches!(
            check_factorization("(a+2)(a-8)", &target),
            Err(Rejection::NotEquivalent),
        ));
    }

    #[test]
    fn factorization_with_fractions() {
        let target = target("(x/2 + 1)^2");
        assert!(grade_factorization("(x/2+1)^2", &target));
        assert!(grade_factorization("(x+2)^2/4", &target));
        assert!(!grade_factorization("x^2/4 + x + 1", &target));
    }
}
