//! The four problem families and the two drill modes.

use crate::error::UnknownFamily;
use levenshtein::levenshtein;
use std::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A family of problems built on one multiplication identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Family {
    /// `(c1 v + c2)^2`
    SquareBinomial,

    /// `(v + c)(v - c)`
    DiffOfSquares,

    /// `(x + a)(x + b)`
    LinearProduct,

    /// `(a x + b)(c x + d)`
    GeneralProduct,
}

impl Family {
    /// Every family, in the order they are offered to the student.
    pub const ALL: [Family; 4] = [
        Family::SquareBinomial,
        Family::DiffOfSquares,
        Family::LinearProduct,
        Family::GeneralProduct,
    ];

    /// Returns the tag used to select the family, such as `square-binomial`.
    pub fn tag(self) -> &'static str {
        match self {
            Family::SquareBinomial => "square-binomial",
            Family::DiffOfSquares => "diff-of-squares",
            Family::LinearProduct => "linear-product",
            Family::GeneralProduct => "general-product",
        }
    }

    /// Returns the label the family is shown with.
    pub fn label(self) -> &'static str {
        match self {
            Family::SquareBinomial => "완전제곱식",
            Family::DiffOfSquares => "합차공식",
            Family::LinearProduct => "(x+a)(x+b)",
            Family::GeneralProduct => "(ax+b)(cx+d)",
        }
    }
}

/// Parses a family from its tag or its label.
impl FromStr for Family {
    type Err = UnknownFamily;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Family::ALL.into_iter()
            .find(|family| family.tag().eq_ignore_ascii_case(s) || family.label() == s)
            .ok_or_else(|| UnknownFamily {
                tag: s.to_string(),
                suggestion: Family::ALL.into_iter()
                    .map(Family::tag)
                    .find(|tag| levenshtein(tag, &s.to_ascii_lowercase()) < 3),
            })
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Which way the identity is practiced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Mode {
    /// The question is the product, and the answer is its expanded form.
    #[default]
    Expansion,

    /// The question is the expanded form, and the answer is the product.
    Factorization,
}

/// Prints the form of the answer the mode asks for: `expanded` or `factored`.
impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Expansion => f.write_str("expanded"),
            Mode::Factorization => f.write_str("factored"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn tags_and_labels() {
        for family in Family::ALL {
            assert_eq!(family.tag().parse::<Family>(), Ok(family));
            assert_eq!(family.label().parse::<Family>(), Ok(family));
        }
    }

    #[test]
    fn unknown_tag_with_suggestion() {
        let err = "square-binomail".parse::<Family>().unwrap_err();
        assert_eq!(err.suggestion, Some("square-binomial"));
        assert_eq!(
            err.to_string(),
            "unknown problem family `square-binomail`, did you mean `square-binomial`?",
        );
    }

    #[test]
    fn unknown_tag_without_suggestion() {
        let err = "cubes".parse::<Family>().unwrap_err();
        assert_eq!(err.suggestion, None);
        assert_eq!(err.to_string(), "unknown problem family `cubes`");
    }
}
