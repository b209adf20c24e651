//! Functions to construct [`Integer`]s and [`Rational`]s from various types.

use rug::{Integer, Rational};

/// Creates an [`Integer`] with the given value.
pub fn int<T>(n: T) -> Integer
where
    Integer: From<T>,
{
    Integer::from(n)
}

/// Creates a [`Rational`] with the given value.
pub fn rat<T>(n: T) -> Rational
where
    Rational: From<T>,
{
    Rational::from(n)
}

/// Creates an [`Integer`] from a string of decimal digits.
pub fn int_from_str(s: &str) -> Option<Integer> {
    Integer::from_str_radix(s, 10).ok()
}

/// Creates the exact [`Rational`] value of a decimal literal such as `0.25`, `.5`, or `3.`.
pub fn rat_from_decimal(s: &str) -> Option<Rational> {
    let (whole, fractional) = s.split_once('.').unwrap_or((s, ""));
    if whole.is_empty() && fractional.is_empty() {
        return None;
    }

    let digits = format!("{}{}", whole, fractional);
    let numer = int_from_str(&digits)?;
    let denom = Integer::from(Integer::u_pow_u(10, fractional.len() as u32));
    Some(Rational::from((numer, denom)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_literals() {
        assert_eq!(rat_from_decimal("0.25"), Some(rat((1, 4))));
        assert_eq!(rat_from_decimal(".5"), Some(rat((1, 2))));
        assert_eq!(rat_from_decimal("3."), Some(rat(3)));
        assert_eq!(rat_from_decimal("12.50"), Some(rat((25, 2))));
        assert_eq!(rat_from_decimal("."), None);
    }

    #[test]
    fn fractions_are_reduced() {
        assert_eq!(rat((2, 4)), rat((1, 2)));
        assert_eq!(*rat((6, 3)).denom(), 1);
    }
}
