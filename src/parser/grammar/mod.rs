//! Grammar module for smallml
//!
//! This module contains all the parsing rules organized by category:
//! - `literal`: Basic literals (identifiers, integers, strings, booleans, unit)
//! - `types`: Type annotations on lambda parameters
//! - `expression`: Expression forms (lambdas, application, if, let)
//! - `pattern`: `match` expressions and their arms
//! - `statement`: `val`, `def`, `data` and bare expressions

mod expression;
mod literal;
mod pattern;
mod statement;
mod types;

use crate::ast::Program;
use crate::lexer::{Token, strip_comments};

use super::combinators::{BoxedParser, expect_semicolon, many, optional};
use super::state::{ParseError, ParseState, Parser};

pub use expression::expression;
pub use statement::statement;
pub use types::type_expr;

/// program := statement (";" statement)* [";"]
pub fn program() -> BoxedParser<Program> {
    BoxedParser::new(|state: &mut ParseState| {
        if !state.has_next() {
            return Ok(vec![]);
        }
        let first = statement().parse(state)?;
        let rest = many(expect_semicolon() * statement()).parse(state)?;
        optional(expect_semicolon()).parse(state)?;

        let mut stmts = vec![first];
        stmts.extend(rest);
        Ok(stmts)
    })
}

/// Parse a complete token stream. Tokens left after the last statement are
/// reported with the deepest error any alternative ran into.
pub fn parse_tokens(state: &mut ParseState) -> Result<Program, ParseError> {
    match program().parse(state) {
        Ok(_) if state.has_next() => Err(state
            .furthest_error()
            .cloned()
            .unwrap_or_else(|| state.error_here("unexpected token"))),
        Ok(program) => Ok(program),
        Err(err) => Err(state.furthest_error().cloned().unwrap_or(err)),
    }
}

/// Strip comments, lex and parse source text.
pub fn parse(source: &str) -> Result<Program, ParseError> {
    let source = strip_comments(source);
    let tokens = Token::lex(&source).map_err(|err| ParseError::new(err.to_string()))?;
    let mut state = ParseState::new(tokens);
    parse_tokens(&mut state)
}
