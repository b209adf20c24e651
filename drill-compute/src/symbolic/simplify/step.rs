#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A step taken while simplifying an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Step {
    /// `0+a = a`
    AddZero,

    /// `a+(b+c) = a+b+c`
    FlattenSum,

    /// `2a+3a = 5a`
    CombineLikeTerms,

    /// `0*a = 0`
    MultiplyZero,

    /// `1*a = a`
    MultiplyOne,

    /// `a*(b*c) = a*b*c`
    FlattenProduct,

    /// `a^b*a^c = a^(b+c)`, and numeric factors are multiplied together.
    CombineLikeFactors,

    /// `a^0 = 1`
    PowerZero,

    /// `a^1 = a`
    PowerOne,

    /// `2^3 = 8`
    PowerNumber,

    /// `(a^b)^c = a^(b*c)`
    PowerPower,

    /// `(a*b)^c = a^c*b^c`
    DistributePower,

    /// `2(a+b) = 2a+2b`
    DistributeNumber,
}
