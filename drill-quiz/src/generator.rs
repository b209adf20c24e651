//! Random problem generation.
//!
//! All randomness flows through the [`Rng`] owned by the [`Generator`], so a generator created
//! with [`Generator::from_seed`] produces the same problems every time.

use crate::{
    choices::generate_choices,
    config::DrillConfig,
    family::{Family, Mode},
    problem::Problem,
};
use drill_compute::{
    primitive::rat,
    symbolic::{expand, simplify, Symbol, SymExpr},
};
use drill_parser::parser::fmt::Latex;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rug::Rational;
use tracing::debug;

/// The variables a square-binomial or difference-of-squares problem may use.
const VARIABLES: [Symbol; 3] = [Symbol::X, Symbol::A, Symbol::B];

/// The variables of a square-binomial or difference-of-squares problem.
enum Variables {
    /// One variable `v`, giving binomials such as `c1 v + c2`.
    One(SymExpr),

    /// The pair `(x, y)`, giving binomials such as `c1 x + c2 y`.
    Two(SymExpr, SymExpr),
}

/// Generates problems.
#[derive(Debug, Clone)]
pub struct Generator<R> {
    rng: R,
    config: DrillConfig,
}

impl<R: Rng> Generator<R> {
    /// Creates a generator drawing from the given random source, with the default settings.
    pub fn new(rng: R) -> Self {
        Self::with_config(rng, DrillConfig::default())
    }

    /// Creates a generator drawing from the given random source.
    pub fn with_config(rng: R, config: DrillConfig) -> Self {
        Self { rng, config }
    }

    /// Returns the settings of the generator.
    pub fn config(&self) -> &DrillConfig {
        &self.config
    }

    /// Draws a coefficient: a fraction `p/q` with `p` in `1..=3` and `q` in `2..=4` with the
    /// configured probability, otherwise an integer in `1..=5`.
    pub fn coefficient(&mut self) -> Rational {
        if self.rng.gen_bool(self.config.fraction_probability()) {
            let numer: i32 = self.rng.gen_range(1..=3);
            let denom: i32 = self.rng.gen_range(2..=4);
            rat((numer, denom))
        } else {
            rat(self.rng.gen_range(1..=5_i32))
        }
    }

    /// Draws an integer coefficient in `1..=5`.
    fn small_integer(&mut self) -> SymExpr {
        SymExpr::number(self.rng.gen_range(1..=5_i32))
    }

    /// Picks the variables for a problem. The pair `(x, y)` is one more option when
    /// [`DrillConfig::two_variable`] is set.
    fn variables(&mut self) -> Variables {
        let count = VARIABLES.len() + usize::from(self.config.two_variable);
        match VARIABLES.get(self.rng.gen_range(0..count)) {
            Some(&symbol) => Variables::One(SymExpr::symbol(symbol)),
            None => Variables::Two(SymExpr::symbol(Symbol::X), SymExpr::symbol(Symbol::Y)),
        }
    }

    /// Builds the product form of a problem in the given family.
    pub fn product_form(&mut self, family: Family) -> SymExpr {
        let x = || SymExpr::symbol(Symbol::X);
        let expr = match family {
            Family::SquareBinomial => {
                let vars = self.variables();
                let c1 = SymExpr::number(self.coefficient());
                let mut c2 = self.coefficient();
                if self.config.signed_constants && self.rng.gen_bool(0.5) {
                    c2 = -c2;
                }
                let c2 = SymExpr::number(c2);
                let base = match vars {
                    Variables::One(var) => c1 * var + c2,
                    Variables::Two(x, y) => c1 * x + c2 * y,
                };
                base.pow(2)
            },
            Family::DiffOfSquares => {
                let vars = self.variables();
                let c1 = self.config.scaled_difference.then(|| self.coefficient());
                let c2 = SymExpr::number(self.coefficient());
                let scale = |var: SymExpr| match &c1 {
                    Some(c1) => SymExpr::number(c1.clone()) * var,
                    None => var,
                };
                let (first, second) = match vars {
                    Variables::One(var) => (scale(var), c2),
                    Variables::Two(x, y) => (scale(x), c2 * y),
                };
                (first.clone() + second.clone()) * (first + -second)
            },
            Family::LinearProduct => {
                let a = self.small_integer();
                let b = self.small_integer();
                (x() + a) * (x() + b)
            },
            Family::GeneralProduct => {
                let a = self.small_integer();
                let b = self.small_integer();
                let c = self.small_integer();
                let d = self.small_integer();
                (a * x() + b) * (c * x() + d)
            },
        };
        simplify(&expr)
    }

    /// Generates a problem from the given family.
    pub fn generate(&mut self, family: Family, mode: Mode) -> Problem {
        let product = self.product_form(family);
        let expanded = expand(&product);
        let (question_form, answer_form) = match mode {
            Mode::Expansion => (product, expanded.clone()),
            Mode::Factorization => (expanded.clone(), product),
        };

        let question_display = question_form.as_display().to_string();
        let answer_display = answer_form.as_display().to_string();
        let choices = self.generate_choices(&answer_form);
        debug!(%family, ?mode, question = %question_display, answer = %answer_display, "generated problem");

        Problem {
            family,
            mode,
            question_form,
            answer_form,
            expanded_form: expanded,
            question_display,
            answer_display,
            choices,
        }
    }

    /// Generates a problem from the family with the given tag or label. Returns [`None`] if no
    /// family has that tag.
    pub fn generate_tag(&mut self, tag: &str, mode: Mode) -> Option<Problem> {
        let family = tag.parse::<Family>().ok()?;
        Some(self.generate(family, mode))
    }

    /// Builds the four multiple-choice options for the given answer, in random order.
    pub fn generate_choices(&mut self, answer: &SymExpr) -> Vec<String> {
        generate_choices(answer, &mut self.rng)
    }
}

impl Generator<StdRng> {
    /// Creates a deterministic generator from a seed.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Creates a generator seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

#[cfg(test)]
mod tests {
    use drill_compute::symbolic::parse;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeSet;
    use super::*;

    #[test]
    fn seeded_generators_agree() {
        let mut lhs = Generator::from_seed(42);
        let mut rhs = Generator::from_seed(42);
        for family in Family::ALL {
            assert_eq!(lhs.generate(family, Mode::Expansion), rhs.generate(family, Mode::Expansion));
        }
    }

    #[test]
    fn coefficients_in_range() {
        let mut generator = Generator::from_seed(7);
        for _ in 0..500 {
            let c = generator.coefficient();
            assert!(c > 0);
            if *c.denom() == 1 {
                assert!(c <= 5);
            } else {
                assert!(*c.numer() <= 3 && *c.denom() <= 4);
            }
        }
    }

    #[test]
    fn integer_only_coefficients() {
        let config = DrillConfig { fraction_probability: 0.0, ..DrillConfig::default() };
        let mut generator = Generator::with_config(StdRng::seed_from_u64(3), config);
        for _ in 0..100 {
            assert_eq!(*generator.coefficient().denom(), 1);
        }
    }

    #[test]
    fn factorization_swaps_roles() {
        let mut generator = Generator::from_seed(11);
        let problem = generator.generate(Family::LinearProduct, Mode::Factorization);
        assert_eq!(problem.question_form, problem.expanded_form);
        assert!(problem.answer_form.is_equivalent(&problem.expanded_form));
        assert!(!problem.answer_form.is_expanded_form());
    }

    #[test]
    fn linear_products_use_x() {
        let mut generator = Generator::from_seed(5);
        for _ in 0..50 {
            let problem = generator.generate(Family::LinearProduct, Mode::Expansion);
            assert_eq!(problem.expanded_form.free_symbols(), BTreeSet::from([Symbol::X]));
            let product = generator.generate(Family::GeneralProduct, Mode::Expansion);
            assert_eq!(product.expanded_form.free_symbols(), BTreeSet::from([Symbol::X]));
        }
    }

    #[test]
    fn signed_constants() {
        let config = DrillConfig { signed_constants: true, ..DrillConfig::default() };
        let mut generator = Generator::with_config(StdRng::seed_from_u64(9), config);
        let negative = (0..100)
            .map(|_| generator.generate(Family::SquareBinomial, Mode::Expansion))
            .any(|problem| problem.question_display.contains('-'));
        assert!(negative);
    }

    #[test]
    fn two_variable_binomials() {
        let config = DrillConfig { two_variable: true, ..DrillConfig::default() };
        let mut generator = Generator::with_config(StdRng::seed_from_u64(13), config);
        let xy = BTreeSet::from([Symbol::X, Symbol::Y]);
        for family in [Family::SquareBinomial, Family::DiffOfSquares] {
            let problems = (0..100)
                .map(|_| generator.generate(family, Mode::Expansion))
                .collect::<Vec<_>>();
            assert!(problems.iter().any(|problem| problem.expanded_form.free_symbols() == xy));
            for problem in problems {
                assert_eq!(expand(&problem.question_form), problem.answer_form);
                assert!(problem.grade(&problem.answer_form.to_string()));
            }
        }
    }

    #[test]
    fn one_variable_by_default() {
        let mut generator = Generator::from_seed(13);
        for _ in 0..100 {
            let problem = generator.generate(Family::SquareBinomial, Mode::Expansion);
            assert!(!problem.expanded_form.free_symbols().contains(&Symbol::Y));
            let problem = generator.generate(Family::DiffOfSquares, Mode::Expansion);
            assert!(!problem.expanded_form.free_symbols().contains(&Symbol::Y));
        }
    }

    #[test]
    fn scaled_difference_of_squares() {
        let config = DrillConfig {
            scaled_difference: true,
            fraction_probability: 0.0,
            ..DrillConfig::default()
        };
        let mut generator = Generator::with_config(StdRng::seed_from_u64(17), config);
        let scaled = (0..100)
            .map(|_| generator.generate(Family::DiffOfSquares, Mode::Factorization))
            .map(|problem| problem.question_form.to_string())
            .any(|question| !["a^2", "b^2", "x^2"].iter().any(|start| question.starts_with(start)));
        assert!(scaled);
    }

    #[test]
    fn unscaled_difference_of_squares() {
        let mut generator = Generator::from_seed(17);
        for _ in 0..100 {
            let problem = generator.generate(Family::DiffOfSquares, Mode::Factorization);
            let question = problem.question_form.to_string();
            assert!(["a^2", "b^2", "x^2"].iter().any(|start| question.starts_with(start)), "{}", question);
        }
    }

    #[test]
    fn unknown_tag() {
        let mut generator = Generator::from_seed(0);
        assert!(generator.generate_tag("cubes", Mode::Expansion).is_none());
        let problem = generator.generate_tag("합차공식", Mode::Expansion).unwrap();
        assert_eq!(problem.family, Family::DiffOfSquares);
        assert!(problem.answer_form.is_equivalent(&parse(&problem.answer_form.to_string()).unwrap()));
    }
}
