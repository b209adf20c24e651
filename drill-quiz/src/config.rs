#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Settings for a drill session.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DrillConfig {
    /// The number of correct answers that completes the drill.
    pub goal: u32,

    /// The number of wrong answers to one problem after which the answer is revealed.
    pub max_attempts: u32,

    /// The probability that a generated coefficient is a fraction instead of an integer.
    pub fraction_probability: f64,

    /// Gives the constant of a square-binomial question a random sign, as in `(2x - 3)^2`.
    pub signed_constants: bool,

    /// Rejects typed answers to expansion problems that are not fully expanded.
    pub strict_expansion: bool,

    /// Adds the pair `(x, y)` to the variables of square-binomial and difference-of-squares
    /// problems, giving questions such as `(2x + 3y)^2` and `(x + 2y)(x - 2y)`.
    pub two_variable: bool,

    /// Puts a coefficient on the variable of a difference-of-squares problem, as in
    /// `(2a + 3)(2a - 3)`.
    pub scaled_difference: bool,
}

impl Default for DrillConfig {
    fn default() -> Self {
        Self {
            goal: 10,
            max_attempts: 3,
            fraction_probability: 0.3,
            signed_constants: false,
            strict_expansion: false,
            two_variable: false,
            scaled_difference: false,
        }
    }
}

impl DrillConfig {
    /// Returns [`DrillConfig::fraction_probability`] clamped to `[0, 1]`. A NaN probability is
    /// treated as zero.
    pub(crate) fn fraction_probability(&self) -> f64 {
        if self.fraction_probability.is_nan() {
            0.0
        } else {
            self.fraction_probability.clamp(0.0, 1.0)
        }
    }
}
