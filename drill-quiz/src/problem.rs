use crate::{
    config::DrillConfig,
    error::Rejection,
    evaluator::{check_expansion, check_expansion_strict, check_factorization, log_rejection},
    family::{Family, Mode},
};
use drill_compute::symbolic::SymExpr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One generated problem.
///
/// A problem is created fresh for every new question and replaced, never modified.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Problem {
    /// The family the problem was drawn from.
    pub family: Family,

    /// Whether the problem asks for the expanded or the factored form.
    pub mode: Mode,

    /// The expression shown to the student.
    pub question_form: SymExpr,

    /// The expected answer.
    pub answer_form: SymExpr,

    /// The expanded form of the problem, whichever side of it is the question.
    pub expanded_form: SymExpr,

    /// The question, as LaTeX.
    pub question_display: String,

    /// The expected answer, as LaTeX.
    pub answer_display: String,

    /// Four distinct LaTeX strings, exactly one of which is [`Problem::answer_display`].
    pub choices: Vec<String>,
}

impl Problem {
    /// Returns true if the given multiple-choice option is the expected answer.
    pub fn is_correct_choice(&self, choice: &str) -> bool {
        choice == self.answer_display
    }

    /// Checks a typed answer with the grader for the problem's mode.
    pub fn check(&self, input: &str, config: &DrillConfig) -> Result<(), Rejection> {
        match self.mode {
            Mode::Expansion if config.strict_expansion => check_expansion_strict(input, &self.answer_form),
            Mode::Expansion => check_expansion(input, &self.answer_form),
            Mode::Factorization => check_factorization(input, &self.expanded_form),
        }
    }

    /// Grades a typed answer, logging the reason for a rejection.
    ///
    /// This uses [`DrillConfig::default`], which accepts factored answers to expansion problems.
    /// Use [`Problem::grade_with`] to honor [`DrillConfig::strict_expansion`].
    pub fn grade(&self, input: &str) -> bool {
        self.grade_with(input, &DrillConfig::default())
    }

    /// Grades a typed answer with the given settings, logging the reason for a rejection.
    pub fn grade_with(&self, input: &str, config: &DrillConfig) -> bool {
        match self.check(input, config) {
            Ok(()) => true,
            Err(rejection) => {
                log_rejection(input, &rejection);
                false
            },
        }
    }
}
