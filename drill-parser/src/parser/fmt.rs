use std::fmt::{Display, Formatter, Result};

/// A trait for types that can be formatted as LaTeX.
pub trait Latex {
    /// Format the value as LaTeX.
    fn fmt_latex(&self, f: &mut Formatter) -> Result;

    /// Wraps the value in a [`LatexFormatter`], which implements [`Display`].
    fn as_display(&self) -> LatexFormatter<'_, Self> {
        LatexFormatter(self)
    }
}

/// A wrapper type that implements [`Display`] for any type that implements [`Latex`].
pub struct LatexFormatter<'a, T: ?Sized>(&'a T);

impl<T: ?Sized> Display for LatexFormatter<'_, T>
where
    T: Latex,
{
    fn fmt(&self, f: &mut Formatter) -> Result {
        self.0.fmt_latex(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::parser::{ast::Expr, Parser};

    fn parse(input: &str) -> Expr {
        Parser::new(input).try_parse_full::<Expr>().unwrap()
    }

    struct Fraction(i32, i32);

    impl Latex for Fraction {
        fn fmt_latex(&self, f: &mut Formatter) -> Result {
            write!(f, "\\frac{{{}}}{{{}}}", self.0, self.1)
        }
    }

    #[test]
    fn latex_adapter() {
        assert_eq!(Fraction(3, 4).as_display().to_string(), "\\frac{3}{4}");
    }

    #[test]
    fn fmt_display() {
        assert_eq!(format!("{}", parse("3x + 6")), "3x+6");
    }

    #[test]
    fn fmt_display_2() {
        assert_eq!(format!("{}", parse("x ** 2 + 5x - 6")), "x^2+5x-6");
    }

    #[test]
    fn fmt_display_3() {
        assert_eq!(format!("{}", parse("-(2a + 1)(2a - 1)")), "-(2a+1)(2a-1)");
    }
}
