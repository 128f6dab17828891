//! Type annotation parsers
//!
//! ```text
//! type  := tapp ["->" type]
//! tapp  := tatom tatom*
//! tatom := "unit" | ident | "(" type ")"
//! ```
//!
//! Every name is a type constructor; annotations cannot mention variables.

use crate::lexer::Token;
use crate::parser::combinators::{
    BoxedParser, expect_lparen, expect_rparen, expect_thin_arrow, many, optional,
};
use crate::parser::state::{ParseState, Parser};
use crate::types::Type;

use super::literal::{ident, unit};

fn type_atom() -> BoxedParser<Type> {
    BoxedParser::new(|state: &mut ParseState| match state.peek() {
        Some(Token::UnitKeyword(_)) => unit().parse(state).map(|_| Type::unit()),
        Some(Token::LParen(_)) => (expect_lparen() * type_expr() - expect_rparen()).parse(state),
        _ => ident().label("type").parse(state).map(|id| Type::named(id.value)),
    })
}

fn type_application() -> BoxedParser<Type> {
    (type_atom() + many(type_atom()))
        >> |(head, args)| match head {
            Type::Fun(name, params) if params.is_empty() && !args.is_empty() => {
                Type::Fun(name, args)
            }
            head => head,
        }
}

/// type := tapp ["->" type]; arrows associate to the right
pub fn type_expr() -> BoxedParser<Type> {
    BoxedParser::new(|state: &mut ParseState| {
        let domain = type_application().parse(state)?;
        match optional(expect_thin_arrow() * type_expr()).parse(state)? {
            Some(codomain) => Ok(Type::func(domain, codomain)),
            None => Ok(domain),
        }
    })
}
