//! Tokenizer and parser for answers typed into the algebra drill.
//!
//! The accepted grammar is a small slice of ordinary algebraic notation: integer and decimal
//! literals, single-letter variables, `+`, `-`, `*`, `/`, exponentiation with `^` or `**`,
//! parentheses, and implicit multiplication (`4x`, `2(x + 1)`, `(x + 1)(x - 1)`, `xy`).
//!
//! ```
//! use drill_parser::parser::{ast::Expr, Parser};
//!
//! let expr = Parser::new("(a-4)(a+4)").try_parse_full::<Expr>().unwrap();
//! assert_eq!(expr.to_string(), "(a-4)(a+4)");
//! ```

pub mod parser;
pub mod tokenizer;
