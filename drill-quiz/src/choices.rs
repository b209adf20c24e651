//! Multiple-choice options.
//!
//! Besides the correct answer `E`, the options are drawn from a fixed list of plausible mistakes:
//! `-E`, `E` with every sign flipped, and `E + 1`. Candidates that duplicate an option already
//! present, or that are equal to `E` when expanded, are skipped, and the list is filled up with
//! `E + 2`, `E + 3`, ... until there are four.
//!
//! Flipping signs can reorder a factored answer instead of changing it: the flip of
//! `(x - 4)(x + 4)` is `(x + 4)(x - 4)`. Such candidates are dropped.

use drill_compute::symbolic::{parse, simplify, SymExpr};
use drill_parser::parser::fmt::Latex;
use rand::{seq::SliceRandom, Rng};

/// The number of options offered.
pub const CHOICE_COUNT: usize = 4;

/// Renders the expression as LaTeX after simplifying it.
fn render(expr: SymExpr) -> String {
    simplify(&expr).as_display().to_string()
}

/// Swaps every `+` and `-` in the string.
pub fn swap_signs(latex: &str) -> String {
    latex.chars()
        .map(|c| match c {
            '+' => '-',
            '-' => '+',
            c => c,
        })
        .collect()
}

/// Adds the candidate to the options, unless it is already present or the options are full.
fn offer(choices: &mut Vec<String>, candidate: String) {
    if choices.len() < CHOICE_COUNT && !choices.contains(&candidate) {
        choices.push(candidate);
    }
}

/// Adds a wrong option rendered as `latex`, unless `distractor` is equal to the answer.
fn offer_distractor(choices: &mut Vec<String>, answer: &SymExpr, distractor: &SymExpr, latex: String) {
    if !distractor.is_equivalent(answer) {
        offer(choices, latex);
    }
}

/// Adds the sign-flipped answer as an option. The flip is applied to the plain form of the answer
/// as well, which is parsed back to check that the flip changed the value.
fn offer_swapped(choices: &mut Vec<String>, answer: &SymExpr, correct: &str) {
    let Ok(swapped) = parse(&swap_signs(&answer.to_string())) else {
        return;
    };
    offer_distractor(choices, answer, &swapped, swap_signs(correct));
}

/// Builds the four options for the given answer, in random order.
pub fn generate_choices<R: Rng + ?Sized>(answer: &SymExpr, rng: &mut R) -> Vec<String> {
    let correct = answer.as_display().to_string();
    let mut choices = Vec::with_capacity(CHOICE_COUNT);

    offer(&mut choices, correct.clone());

    let negated = -answer.clone();
    offer_distractor(&mut choices, answer, &negated, render(negated.clone()));
    offer_swapped(&mut choices, answer, &correct);
    let shifted = answer.clone() + SymExpr::number(1);
    offer_distractor(&mut choices, answer, &shifted, render(shifted.clone()));

    // the `E + k` are distinct from each other, and at most `CHOICE_COUNT - 1` of them collide
    // with an earlier option, so this range always fills the list
    for k in 2..2 + 2 * CHOICE_COUNT as i32 {
        if choices.len() == CHOICE_COUNT {
            break;
        }
        let shifted = answer.clone() + SymExpr::number(k);
        offer_distractor(&mut choices, answer, &shifted, render(shifted.clone()));
    }

    choices.shuffle(rng);
    choices
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, SeedableRng};
    use super::*;

    #[test]
    fn sign_swap() {
        assert_eq!(swap_signs("x^{2} + 6 x - 9"), "x^{2} - 6 x + 9");
    }

    #[test]
    fn distractors() {
        let answer = parse("x^2 + 5x + 6").unwrap();
        let mut choices = generate_choices(&answer, &mut StdRng::seed_from_u64(0));
        choices.sort();

        let mut expected = vec![
            "x^{2} + 5 x + 6".to_string(),
            "- x^{2} - 5 x - 6".to_string(),
            "x^{2} - 5 x - 6".to_string(),
            "x^{2} + 5 x + 7".to_string(),
        ];
        expected.sort();
        assert_eq!(choices, expected);
    }

    #[test]
    fn duplicate_candidates_are_replaced() {
        // `E` has no signs, so the sign swap duplicates it
        let answer = parse("x^2").unwrap();
        let mut choices = generate_choices(&answer, &mut StdRng::seed_from_u64(1));
        choices.sort();

        let mut expected = vec![
            "x^{2}".to_string(),
            "- x^{2}".to_string(),
            "x^{2} + 1".to_string(),
            "x^{2} + 2".to_string(),
        ];
        expected.sort();
        assert_eq!(choices, expected);
    }

    #[test]
    fn factored_answer() {
        let answer = parse("(x+2)(x+3)").unwrap();
        let choices = generate_choices(&answer, &mut StdRng::seed_from_u64(2));
        assert_eq!(choices.len(), CHOICE_COUNT);
        assert!(choices.contains(&"\\left(x + 2\\right) \\left(x + 3\\right)".to_string()));
        assert!(choices.contains(&"- \\left(x + 2\\right) \\left(x + 3\\right)".to_string()));
        assert!(choices.contains(&"\\left(x - 2\\right) \\left(x - 3\\right)".to_string()));
        assert!(choices.contains(&"\\left(x + 2\\right) \\left(x + 3\\right) + 1".to_string()));
    }

    #[test]
    fn reordered_factors_are_not_distractors() {
        let answer = parse("(b-2)(b+2)").unwrap();
        let choices = generate_choices(&answer, &mut StdRng::seed_from_u64(3));
        assert_eq!(choices.len(), CHOICE_COUNT);
        assert!(!choices.contains(&"\\left(b + 2\\right) \\left(b - 2\\right)".to_string()));

        let correct = choices.iter()
            .filter(|choice| **choice == answer.as_display().to_string())
            .count();
        assert_eq!(correct, 1);
        assert!(choices.contains(&"- \\left(b - 2\\right) \\left(b + 2\\right)".to_string()));
        assert!(choices.contains(&"\\left(b - 2\\right) \\left(b + 2\\right) + 1".to_string()));
        assert!(choices.contains(&"\\left(b - 2\\right) \\left(b + 2\\right) + 2".to_string()));
    }

    #[test]
    fn no_distractor_equals_answer() {
        for input in ["(x-4)(x+4)", "(2a-3)(2a+3)", "x^2 - 1/4", "(x+1)^2", "(x-1)(x+1)(x^2+1)"] {
            let answer = parse(input).unwrap();
            let choices = generate_choices(&answer, &mut StdRng::seed_from_u64(4));
            let correct = answer.as_display().to_string();
            assert_eq!(choices.len(), CHOICE_COUNT, "{}", input);
            assert_eq!(choices.iter().filter(|choice| **choice == correct).count(), 1, "{}", input);

            let swapped = parse(&swap_signs(&answer.to_string())).unwrap();
            if swapped.is_equivalent(&answer) {
                assert!(!choices.contains(&swap_signs(&correct)), "{}", input);
            }
        }
    }
}
