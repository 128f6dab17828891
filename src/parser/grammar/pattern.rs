//! Match expression parsers

use crate::ast::pattern::{Match, MatchArm, Pattern};
use crate::ast::expression::Expression;
use crate::parser::combinators::{
    BoxedParser, expect_end, expect_fat_arrow, expect_match, expect_pipe, expect_with, many,
};
use crate::parser::state::{ParseState, Parser};

use super::expression::expression;
use super::literal::ident;

/// pattern := ident ident*
pub fn pattern() -> BoxedParser<Pattern> {
    (ident().label("constructor") + many(ident()))
        >> |(name, fields)| {
            if fields.is_empty() {
                Pattern::Nullary(name)
            } else {
                Pattern::Constructor { name, fields }
            }
        }
}

/// arm := "|" pattern "=>" expression
pub fn match_arm() -> BoxedParser<MatchArm> {
    BoxedParser::new(|state: &mut ParseState| {
        let start = expect_pipe().parse(state)?.pos();
        let pattern = pattern().parse(state)?;
        expect_fat_arrow().parse(state)?;
        let body = expression().parse(state)?;
        Ok(MatchArm {
            pattern,
            body,
            position: start,
        })
    })
}

/// match := "match" expression "with" arm* "end"
///
/// An empty arm list parses; the desugarer rejects it.
pub fn match_expression() -> BoxedParser<Expression> {
    BoxedParser::new(|state: &mut ParseState| {
        let start = expect_match().parse(state)?.pos();
        let scrutinee = expression().parse(state)?;
        expect_with().parse(state)?;
        let arms = many(match_arm()).parse(state)?;
        let end = expect_end().parse(state)?.pos();
        Ok(Expression::Match(Box::new(Match {
            scrutinee,
            arms,
            position: start.merge(&end),
        })))
    })
}
