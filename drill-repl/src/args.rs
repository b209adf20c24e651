use crate::error::ArgError;
use drill_quiz::{Family, Mode};

/// The command-line arguments of the drill.
///
/// ```text
/// drill [--seed <u64>] [--family <tag>] [--factor] [--typed]
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    /// Seed for the problem generator. Problems are random if this is not given.
    pub seed: Option<u64>,

    /// The family to start with.
    pub family: Family,

    /// Practice factorization instead of expansion.
    pub mode: Mode,

    /// Answers are typed instead of picked from the four options.
    pub typed: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            seed: None,
            family: Family::SquareBinomial,
            mode: Mode::Expansion,
            typed: false,
        }
    }
}

impl Args {
    /// Parses the arguments, not including the program name.
    pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, ArgError> {
        let mut parsed = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => {
                    let seed = args.next().ok_or(ArgError::MissingValue("--seed"))?;
                    parsed.seed = Some(seed.parse().map_err(|source| ArgError::InvalidSeed {
                        seed,
                        source,
                    })?);
                },
                "--family" => {
                    let tag = args.next().ok_or(ArgError::MissingValue("--family"))?;
                    parsed.family = tag.parse()?;
                },
                "--factor" => parsed.mode = Mode::Factorization,
                "--typed" => parsed.typed = true,
                _ => return Err(ArgError::UnknownArgument(arg)),
            }
        }
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, ArgError> {
        Args::parse(args.iter().map(|arg| arg.to_string()))
    }

    #[test]
    fn defaults() {
        assert_eq!(parse(&[]).unwrap(), Args::default());
    }

    #[test]
    fn all_flags() {
        let args = parse(&["--seed", "42", "--family", "합차공식", "--factor", "--typed"]).unwrap();
        assert_eq!(args, Args {
            seed: Some(42),
            family: Family::DiffOfSquares,
            mode: Mode::Factorization,
            typed: true,
        });
    }

    #[test]
    fn bad_arguments() {
        assert!(matches!(parse(&["--seed"]), Err(ArgError::MissingValue("--seed"))));
        assert!(matches!(parse(&["--seed", "-1"]), Err(ArgError::InvalidSeed { .. })));
        assert!(matches!(parse(&["--family", "cubes"]), Err(ArgError::UnknownFamily(_))));
        assert!(matches!(parse(&["--verbose"]), Err(ArgError::UnknownArgument(_))));
    }
}
