use drill_quiz::{evaluator::normalize_input, Rejection, UnknownFamily};
use std::{io, num::ParseIntError};
use thiserror::Error;

/// Errors in the command-line arguments.
#[derive(Debug, Error)]
pub enum ArgError {
    /// An argument that the drill does not know.
    #[error("unknown argument `{0}`")]
    UnknownArgument(String),

    /// A flag that takes a value was given last.
    #[error("missing value for `{0}`")]
    MissingValue(&'static str),

    /// The seed is not a non-negative integer.
    #[error("invalid seed `{seed}`: {source}")]
    InvalidSeed {
        seed: String,
        source: ParseIntError,
    },

    /// The family tag is unknown.
    #[error(transparent)]
    UnknownFamily(#[from] UnknownFamily),
}

/// Report the reason an answer was rejected to stderr.
///
/// Answers that could not be read are shown with the offending part highlighted. The spans of the
/// error refer to the normalized answer, so that is the source the report is drawn against.
pub fn report_to_stderr(rejection: &Rejection, input: &str) {
    match rejection {
        Rejection::Parse(err) => {
            let normalized = normalize_input(input);
            if err.write_report("answer", &normalized, io::stderr()).is_err() {
                eprintln!("{}", rejection);
            }
        },
        rejection => eprintln!("{}", rejection),
    }
}
