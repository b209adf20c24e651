//! Practice problems for the multiplication identities of school algebra.
//!
//! This crate draws random problems from four families of products, offers four multiple-choice
//! options for each, and grades typed answers by mathematical equivalence rather than by
//! comparing text. The symbolic work is done by [`drill_compute`].
//!
//! # Usage
//!
//! A [`Generator`] produces [`Problem`]s from a seedable random source:
//!
//! ```
//! use drill_quiz::{Family, Generator, Mode};
//!
//! let mut generator = Generator::from_seed(0);
//! let problem = generator.generate(Family::DiffOfSquares, Mode::Expansion);
//!
//! assert_eq!(problem.choices.len(), 4);
//! assert!(problem.is_correct_choice(&problem.answer_display));
//! assert!(problem.grade(&problem.answer_form.to_string()));
//! assert!(!problem.grade("y + 1"));
//! ```
//!
//! A [`Session`] keeps the state of one student working through problems: it counts correct and
//! wrong answers, reveals the answer after too many wrong ones, and draws new problems when
//! needed.
//!
//! ```
//! use drill_quiz::{Family, Generator, Mode, Session};
//!
//! let mut session = Session::new(Generator::from_seed(1), Family::LinearProduct, Mode::Expansion);
//! let answer = session.problem().answer_display.clone();
//! assert!(session.submit_choice(&answer).is_correct());
//! assert_eq!(session.correct_count(), 1);
//! ```
//!
//! # Logging
//!
//! The crate never prints. Rejected answers, generated problems, and session events are reported
//! through [`tracing`]; install a subscriber to see them.

pub mod choices;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod family;
pub mod generator;
pub mod problem;
pub mod session;

pub use config::DrillConfig;
pub use error::{Rejection, UnknownFamily};
pub use evaluator::{grade_expansion, grade_factorization};
pub use family::{Family, Mode};
pub use generator::Generator;
pub use problem::Problem;
pub use session::{Attempt, AttemptLog, Outcome, Session};
