//! The state of one student working through a drill.
//!
//! A [`Session`] owns the generator and the current problem, counts correct and wrong answers,
//! and decides when a new problem is drawn:
//!
//! - a correct answer adds to the correct count and draws the next problem;
//! - a wrong answer adds to the wrong count for the current problem, and once
//!   [`DrillConfig::max_attempts`] wrong answers are given, the answer is revealed;
//! - after a reveal, submissions are ignored until [`Session::acknowledge_reveal`] is called.
//!
//! Every answer that is graded is recorded in an [`AttemptLog`].

use crate::{
    config::DrillConfig,
    error::Rejection,
    evaluator::log_rejection,
    family::{Family, Mode},
    generator::Generator,
    problem::Problem,
};
use rand::Rng;
use tracing::info;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One graded answer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Attempt {
    /// The family of the problem that was answered.
    pub family: Family,

    /// The mode of the problem that was answered.
    pub mode: Mode,

    /// The question, as LaTeX.
    pub question: String,

    /// The answer given, either the chosen option or the typed text.
    pub answer: String,

    /// Whether the answer was accepted.
    pub correct: bool,

    /// The number of answers given to this problem so far, including this one.
    pub attempt: u32,
}

/// A sink for graded answers.
///
/// [`AttemptLog`] is also implemented for the unit type `()`, for when the answers are not
/// needed.
pub trait AttemptLog {
    /// Records a graded answer.
    fn record(&mut self, attempt: Attempt);
}

impl AttemptLog for () {
    #[inline]
    fn record(&mut self, _: Attempt) {}
}

impl AttemptLog for Vec<Attempt> {
    #[inline]
    fn record(&mut self, attempt: Attempt) {
        self.push(attempt);
    }
}

/// The result of submitting an answer.
#[derive(Debug)]
pub enum Outcome {
    /// The answer was accepted, and a new problem was drawn.
    Correct,

    /// The answer was not accepted.
    Incorrect {
        /// The number of wrong answers given to this problem so far.
        attempts: u32,

        /// Why a typed answer was not accepted.
        reason: Option<Rejection>,
    },

    /// The answer was not accepted, and that was the last attempt. The expected answer is
    /// shown.
    Revealed {
        /// The expected answer, as LaTeX.
        answer: String,

        /// Why a typed answer was not accepted.
        reason: Option<Rejection>,
    },

    /// The answer is being shown, so the submission was not graded.
    Ignored,
}

impl Outcome {
    /// Returns true if the answer was accepted.
    pub fn is_correct(&self) -> bool {
        matches!(self, Outcome::Correct)
    }

    /// Returns the reason a typed answer was rejected, if there is one.
    pub fn reason(&self) -> Option<&Rejection> {
        match self {
            Outcome::Incorrect { reason, .. } | Outcome::Revealed { reason, .. } => reason.as_ref(),
            _ => None,
        }
    }
}

/// A drill session.
#[derive(Debug)]
pub struct Session<R, L = ()> {
    generator: Generator<R>,
    mode: Mode,
    problem: Problem,
    correct: u32,
    wrong: u32,
    revealed: bool,
    log: L,
}

impl<R: Rng> Session<R> {
    /// Starts a session on the given family, drawing the first problem.
    pub fn new(generator: Generator<R>, family: Family, mode: Mode) -> Self {
        Self::with_log(generator, family, mode, ())
    }
}

impl<R: Rng, L: AttemptLog> Session<R, L> {
    /// Starts a session on the given family, recording every graded answer in the log.
    pub fn with_log(mut generator: Generator<R>, family: Family, mode: Mode, log: L) -> Self {
        let problem = generator.generate(family, mode);
        Self {
            generator,
            mode,
            problem,
            correct: 0,
            wrong: 0,
            revealed: false,
            log,
        }
    }

    /// Returns the current problem.
    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    /// Returns the family being practiced.
    pub fn family(&self) -> Family {
        self.problem.family
    }

    /// Returns the mode being practiced.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the settings of the session.
    pub fn config(&self) -> &DrillConfig {
        self.generator.config()
    }

    /// Returns the number of correct answers since the session started or was restarted.
    pub fn correct_count(&self) -> u32 {
        self.correct
    }

    /// Returns the number of wrong answers given to the current problem.
    pub fn wrong_count(&self) -> u32 {
        self.wrong
    }

    /// Returns true if the answer to the current problem is being shown.
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Returns true once the number of correct answers reaches the goal.
    pub fn is_complete(&self) -> bool {
        self.correct >= self.config().goal
    }

    /// Returns the log of graded answers.
    pub fn log(&self) -> &L {
        &self.log
    }

    /// Ends the session, returning the log of graded answers.
    pub fn into_log(self) -> L {
        self.log
    }

    /// Draws a new problem for the current family and mode.
    fn next_problem(&mut self) {
        self.problem = self.generator.generate(self.problem.family, self.mode);
        self.wrong = 0;
        self.revealed = false;
    }

    /// Switches to another family, resetting the counters and drawing a new problem. Selecting
    /// the current family does nothing.
    ///
    /// Returns true if the family changed.
    pub fn select_family(&mut self, family: Family) -> bool {
        if family == self.problem.family {
            return false;
        }

        info!(from = %self.problem.family, to = %family, "switched family");
        self.problem = self.generator.generate(family, self.mode);
        self.correct = 0;
        self.wrong = 0;
        self.revealed = false;
        true
    }

    /// Switches between expansion and factorization, drawing a new problem. Selecting the current
    /// mode does nothing.
    ///
    /// Returns true if the mode changed.
    pub fn select_mode(&mut self, mode: Mode) -> bool {
        if mode == self.mode {
            return false;
        }

        self.mode = mode;
        self.next_problem();
        true
    }

    /// Records a graded answer and updates the counters.
    fn settle(&mut self, answer: &str, correct: bool, reason: Option<Rejection>) -> Outcome {
        self.log.record(Attempt {
            family: self.problem.family,
            mode: self.mode,
            question: self.problem.question_display.clone(),
            answer: answer.to_string(),
            correct,
            attempt: self.wrong + 1,
        });

        if correct {
            self.correct += 1;
            info!(family = %self.problem.family, correct = self.correct, goal = self.config().goal, "correct answer");
            self.next_problem();
            return Outcome::Correct;
        }

        self.wrong += 1;
        if self.wrong >= self.config().max_attempts {
            self.revealed = true;
            info!(family = %self.problem.family, answer = %self.problem.answer_form, "revealed answer");
            Outcome::Revealed {
                answer: self.problem.answer_display.clone(),
                reason,
            }
        } else {
            info!(family = %self.problem.family, attempts = self.wrong, "wrong answer");
            Outcome::Incorrect {
                attempts: self.wrong,
                reason,
            }
        }
    }

    /// Submits one of the multiple-choice options of the current problem.
    pub fn submit_choice(&mut self, choice: &str) -> Outcome {
        if self.revealed {
            return Outcome::Ignored;
        }

        let correct = self.problem.is_correct_choice(choice);
        self.settle(choice, correct, None)
    }

    /// Submits a typed answer to the current problem.
    pub fn submit_typed(&mut self, input: &str) -> Outcome {
        if self.revealed {
            return Outcome::Ignored;
        }

        match self.problem.check(input, self.generator.config()) {
            Ok(()) => self.settle(input, true, None),
            Err(rejection) => {
                log_rejection(input, &rejection);
                self.settle(input, false, Some(rejection))
            },
        }
    }

    /// Moves on from a revealed answer to a new problem. Does nothing if no answer is being
    /// shown.
    ///
    /// Returns true if a new problem was drawn.
    pub fn acknowledge_reveal(&mut self) -> bool {
        if !self.revealed {
            return false;
        }

        self.next_problem();
        true
    }

    /// Resets the number of correct answers, to practice the same family again.
    pub fn restart(&mut self) {
        info!(family = %self.problem.family, "restarted");
        self.correct = 0;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, SeedableRng};
    use super::*;

    fn session(family: Family, mode: Mode) -> Session<StdRng, Vec<Attempt>> {
        Session::with_log(Generator::from_seed(17), family, mode, Vec::new())
    }

    /// Returns an option of the current problem that is not the answer.
    fn wrong_choice<R: Rng, L: AttemptLog>(session: &Session<R, L>) -> String {
        let problem = session.problem();
        problem.choices.iter()
            .find(|choice| !problem.is_correct_choice(choice))
            .cloned()
            .unwrap()
    }

    #[test]
    fn correct_choice_draws_new_problem() {
        let mut session = session(Family::LinearProduct, Mode::Expansion);
        let answer = session.problem().answer_display.clone();
        assert!(session.submit_choice(&answer).is_correct());
        assert_eq!(session.correct_count(), 1);
        assert_eq!(session.wrong_count(), 0);
        assert_eq!(session.log().len(), 1);
        assert!(session.log()[0].correct);
    }

    #[test]
    fn three_strikes_reveal() {
        let mut session = session(Family::SquareBinomial, Mode::Expansion);
        let question = session.problem().question_display.clone();

        let choice = wrong_choice(&session);
        assert!(matches!(session.submit_choice(&choice), Outcome::Incorrect { attempts: 1, .. }));
        assert!(matches!(session.submit_choice(&choice), Outcome::Incorrect { attempts: 2, .. }));
        match session.submit_choice(&choice) {
            Outcome::Revealed { answer, .. } => assert_eq!(answer, session.problem().answer_display),
            other => panic!("expected the answer to be revealed, got {:?}", other),
        }

        // further answers are ignored until the reveal is acknowledged
        let answer = session.problem().answer_display.clone();
        assert!(matches!(session.submit_choice(&answer), Outcome::Ignored));
        assert_eq!(session.correct_count(), 0);
        assert_eq!(session.problem().question_display, question);

        assert!(session.acknowledge_reveal());
        assert!(!session.is_revealed());
        assert_eq!(session.wrong_count(), 0);
        assert!(!session.acknowledge_reveal());

        let attempts = session.log().iter().map(|attempt| attempt.attempt).collect::<Vec<_>>();
        assert_eq!(attempts, vec![1, 2, 3]);
    }

    #[test]
    fn typed_answers() {
        let mut session = session(Family::DiffOfSquares, Mode::Expansion);
        let answer = session.problem().answer_form.to_string();
        assert!(session.submit_typed(&answer).is_correct());

        let outcome = session.submit_typed("x+");
        assert!(matches!(outcome.reason(), Some(Rejection::Parse(_))));
        assert_eq!(session.wrong_count(), 1);
    }

    #[test]
    fn typed_factorization() {
        let mut session = session(Family::LinearProduct, Mode::Factorization);
        let expanded = session.problem().expanded_form.to_string();
        let outcome = session.submit_typed(&expanded);
        assert!(matches!(
            outcome.reason(),
            Some(Rejection::FormPolicyViolation { expected: Mode::Factorization }),
        ));

        let answer = session.problem().answer_form.to_string();
        assert!(session.submit_typed(&answer).is_correct());
    }

    #[test]
    fn switching_family_resets() {
        let mut session = session(Family::LinearProduct, Mode::Expansion);
        let answer = session.problem().answer_display.clone();
        session.submit_choice(&answer);
        let choice = wrong_choice(&session);
        session.submit_choice(&choice);

        assert!(!session.select_family(Family::LinearProduct));
        assert_eq!(session.correct_count(), 1);
        assert_eq!(session.wrong_count(), 1);

        assert!(session.select_family(Family::GeneralProduct));
        assert_eq!(session.family(), Family::GeneralProduct);
        assert_eq!(session.correct_count(), 0);
        assert_eq!(session.wrong_count(), 0);
    }

    #[test]
    fn completion_and_restart() {
        let config = DrillConfig { goal: 2, ..DrillConfig::default() };
        let generator = Generator::with_config(StdRng::seed_from_u64(5), config);
        let mut session = Session::new(generator, Family::GeneralProduct, Mode::Expansion);

        for _ in 0..2 {
            assert!(!session.is_complete());
            let answer = session.problem().answer_display.clone();
            session.submit_choice(&answer);
        }
        assert!(session.is_complete());

        session.restart();
        assert!(!session.is_complete());
        assert_eq!(session.family(), Family::GeneralProduct);
    }

    #[test]
    fn switching_mode() {
        let mut session = session(Family::DiffOfSquares, Mode::Expansion);
        assert!(session.select_mode(Mode::Factorization));
        assert_eq!(session.problem().mode, Mode::Factorization);
        assert_eq!(session.problem().question_form, session.problem().expanded_form);
        assert!(!session.select_mode(Mode::Factorization));
    }
}
