//! Statement parsers for smallml

use crate::ast::statement::{Binding, Constructor, DataType, Statement};
use crate::lexer::Token;

use crate::parser::combinators::{
    BoxedParser, expect_data, expect_def, expect_equals, expect_pipe, expect_val, many,
};
use crate::parser::state::{ParseState, Parser};

use super::expression::expression;
use super::literal::ident;

/// binding := ident "=" expression
fn binding() -> BoxedParser<Binding> {
    ((ident().label("name") - expect_equals()) + expression())
        >> |(name, value)| Binding {
            position: name.position.merge(&value.position()),
            name,
            value: Box::new(value),
        }
}

/// constructor := ident ident*
fn constructor() -> BoxedParser<Constructor> {
    (ident().label("constructor") + many(ident()))
        >> |(name, fields)| Constructor {
            position: fields
                .last()
                .map(|last| name.position.merge(&last.position))
                .unwrap_or_else(|| name.position.clone()),
            name,
            fields,
        }
}

/// data := "data" ident ident* "=" constructor ("|" constructor)*
pub fn data_type() -> BoxedParser<Statement> {
    BoxedParser::new(|state: &mut ParseState| {
        let start = expect_data().parse(state)?.pos();
        let name = ident().label("type name").parse(state)?;
        let type_args = many(ident()).parse(state)?;
        expect_equals().parse(state)?;
        let first = constructor().parse(state)?;
        let rest = many(expect_pipe() * constructor()).parse(state)?;

        let mut constructors = vec![first];
        constructors.extend(rest);
        let end = constructors
            .last()
            .map(|c| c.position.clone())
            .unwrap_or_else(|| name.position.clone());

        Ok(Statement::DataType(DataType {
            name,
            type_args,
            constructors,
            position: start.merge(&end),
        }))
    })
}

/// statement := "val" binding | "def" binding | data | expression
pub fn statement() -> BoxedParser<Statement> {
    BoxedParser::new(|state: &mut ParseState| match state.peek() {
        Some(Token::Val(_)) => (expect_val() * binding() >> Statement::Val).parse(state),
        Some(Token::Def(_)) => (expect_def() * binding() >> Statement::Def).parse(state),
        Some(Token::Data(_)) => data_type().parse(state),
        _ => expression().parse(state).map(Statement::Expression),
    })
}
