//! Errors produced by the drill.

use crate::family::Mode;
use drill_compute::symbolic::Symbol;
use drill_error::Error;
use std::collections::BTreeSet;
use thiserror::Error;

/// Joins the names of the variables with commas.
fn join_symbols(symbols: &BTreeSet<Symbol>) -> String {
    symbols.iter()
        .map(|symbol| symbol.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// The reason a typed answer was not accepted.
#[derive(Error, Debug)]
pub enum Rejection {
    /// The answer could not be read.
    #[error("the answer could not be read")]
    Parse(Error),

    /// The answer uses variables that the problem does not.
    #[error("the answer uses variables that are not in the problem: {}", join_symbols(.symbols))]
    ScopeViolation {
        /// The variables that are not in the problem.
        symbols: BTreeSet<Symbol>,
    },

    /// The answer is equal to the target, but not written in the form the problem asks for.
    #[error("the answer is not written in {expected} form")]
    FormPolicyViolation {
        /// The form the problem asks for.
        expected: Mode,
    },

    /// The answer is not equal to the target.
    #[error("the answer is not equal to the expected answer")]
    NotEquivalent,
}

/// The given family tag does not name a problem family.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown problem family `{tag}`{}", .suggestion.map(|s| format!(", did you mean `{}`?", s)).unwrap_or_default())]
pub struct UnknownFamily {
    /// The tag that was given.
    pub tag: String,

    /// A known tag close to the given one.
    pub suggestion: Option<&'static str>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn scope_violation_message() {
        let rejection = Rejection::ScopeViolation {
            symbols: BTreeSet::from([Symbol::Y, Symbol::A]),
        };
        assert_eq!(
            rejection.to_string(),
            "the answer uses variables that are not in the problem: a, y",
        );
    }

    #[test]
    fn form_policy_message() {
        let rejection = Rejection::FormPolicyViolation { expected: Mode::Factorization };
        assert_eq!(rejection.to_string(), "the answer is not written in factored form");
    }

    #[test]
    fn unknown_family_message() {
        let err = UnknownFamily { tag: "cubes".to_string(), suggestion: None };
        assert_eq!(err.to_string(), "unknown problem family `cubes`");

        let err = UnknownFamily { tag: "squares".to_string(), suggestion: Some("diff-of-squares") };
        assert_eq!(err.to_string(), "unknown problem family `squares`, did you mean `diff-of-squares`?");
    }
}
