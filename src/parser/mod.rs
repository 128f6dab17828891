//! Combinator-based recursive descent parser producing the surface AST.

mod combinators;
mod grammar;
mod state;

pub use combinators::BoxedParser;
pub use grammar::{expression, parse, parse_tokens, program, statement, type_expr};
pub use state::{ParseError, ParseResult, ParseState, Parser};
