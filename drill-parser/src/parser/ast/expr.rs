use crate::{
    parser::{
        ast::{binary::Binary, literal::{LitFloat, LitInt, LitSym, Literal}, paren::Paren, unary::Unary},
        error::{UnexpectedEof, UnexpectedToken},
        Parse,
        Parser,
        Precedence,
    },
    tokenizer::TokenKind,
};
use drill_error::Error;
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents any kind of expression that can appear in a typed answer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A literal value.
    Literal(Literal),

    /// A parenthesized expression, such as `(1 + 2)`.
    Paren(Paren),

    /// A unary operation, such as `-x`.
    Unary(Unary),

    /// A binary operation, such as `1 + 2`.
    Binary(Binary),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn span(&self) -> Range<usize> {
        match self {
            Expr::Literal(literal) => literal.span(),
            Expr::Paren(paren) => paren.span(),
            Expr::Unary(unary) => unary.span(),
            Expr::Binary(binary) => binary.span(),
        }
    }

    /// Parses a primary expression: a number, a single variable, or a parenthesized expression.
    pub fn parse_primary(input: &mut Parser) -> Result<Expr, Error> {
        match input.peek_kind() {
            Some(TokenKind::Int) => Ok(Expr::Literal(Literal::Integer(input.try_parse::<LitInt>()?))),
            Some(TokenKind::Float) => Ok(Expr::Literal(Literal::Float(input.try_parse::<LitFloat>()?))),
            Some(TokenKind::Name) => Ok(Expr::Literal(Literal::Symbol(input.try_parse::<LitSym>()?))),
            Some(TokenKind::OpenParen) => Ok(Expr::Paren(input.try_parse::<Paren>()?)),
            Some(found) => {
                input.advance_past_whitespace();
                Err(input.error(UnexpectedToken {
                    expected: &[
                        TokenKind::Int,
                        TokenKind::Float,
                        TokenKind::Name,
                        TokenKind::OpenParen,
                    ],
                    found,
                }))
            },
            None => {
                input.advance_past_whitespace();
                Err(input.error(UnexpectedEof))
            },
        }
    }
}

impl Parse for Expr {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let lhs = Unary::parse_or_lower(input)?;
        Ok(Binary::parse_expr(input, lhs, Precedence::Any)?.0)
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Literal(literal) => write!(f, "{}", literal),
            Expr::Paren(paren) => write!(f, "{}", paren),
            Expr::Unary(unary) => write!(f, "{}", unary),
            Expr::Binary(binary) => write!(f, "{}", binary),
        }
    }
}
