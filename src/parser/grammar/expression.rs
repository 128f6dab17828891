//! Expression parsers for smallml

use crate::ast::expression::{Application, Expression, IfThenElse, Lambda, Let};
use crate::lexer::Token;

use crate::parser::combinators::{
    BoxedParser, expect_colon, expect_else, expect_equals, expect_fat_arrow, expect_fun,
    expect_if, expect_in, expect_let, expect_lparen, expect_rparen, expect_then, many, optional,
};
use crate::parser::state::{ParseState, Parser};

use super::literal::{boolean, ident, integer, string_literal, unit};
use super::pattern::match_expression;
use super::types::type_expr;

/// atom := integer | string | boolean | "unit" | ident | "(" expression ")"
pub fn atom() -> BoxedParser<Expression> {
    let unit_expr = unit() >> Expression::Unit;
    let ident_expr = ident() >> Expression::Ident;
    let int_expr = integer() >> Expression::Integer;
    let str_expr = string_literal() >> Expression::String;
    let bool_expr = boolean() >> Expression::Boolean;
    let parenthesized = BoxedParser::new(|state: &mut ParseState| {
        (expect_lparen() * expression() - expect_rparen()).parse(state)
    });

    (int_expr | str_expr | bool_expr | unit_expr | ident_expr | parenthesized).label("expression")
}

/// application := atom atom*; juxtaposition associates to the left
pub fn application() -> BoxedParser<Expression> {
    (atom() + many(atom()))
        >> |(head, args)| {
            args.into_iter().fold(head, |func, arg| {
                let position = func.position().merge(&arg.position());
                Expression::Application(Application {
                    func: Box::new(func),
                    arg: Box::new(arg),
                    position,
                })
            })
        }
}

/// lambda := "fun" ident [":" type] "=>" expression
pub fn lambda() -> BoxedParser<Expression> {
    BoxedParser::new(|state: &mut ParseState| {
        let start = expect_fun().parse(state)?.pos();
        let param = ident().label("parameter").parse(state)?;
        let annotation = optional(expect_colon() * type_expr()).parse(state)?;
        expect_fat_arrow().parse(state)?;
        let body = expression().parse(state)?;
        Ok(Expression::Lambda(Lambda {
            param,
            annotation,
            position: start.merge(&body.position()),
            body: Box::new(body),
        }))
    })
}

/// if_then_else := "if" expression "then" expression "else" expression
pub fn if_then_else() -> BoxedParser<Expression> {
    BoxedParser::new(|state: &mut ParseState| {
        let start = expect_if().parse(state)?.pos();
        let condition = expression().parse(state)?;
        expect_then().parse(state)?;
        let then_expr = expression().parse(state)?;
        expect_else().parse(state)?;
        let else_expr = expression().parse(state)?;
        Ok(Expression::IfThenElse(IfThenElse {
            position: start.merge(&else_expr.position()),
            condition: Box::new(condition),
            then_expr: Box::new(then_expr),
            else_expr: Box::new(else_expr),
        }))
    })
}

/// let_in := "let" ident "=" expression "in" expression
pub fn let_in() -> BoxedParser<Expression> {
    BoxedParser::new(|state: &mut ParseState| {
        let start = expect_let().parse(state)?.pos();
        let name = ident().parse(state)?;
        expect_equals().parse(state)?;
        let value = expression().parse(state)?;
        expect_in().parse(state)?;
        let body = expression().parse(state)?;
        Ok(Expression::Let(Let {
            name,
            position: start.merge(&body.position()),
            value: Box::new(value),
            body: Box::new(body),
        }))
    })
}

/// expression := lambda | if_then_else | let_in | match | application
///
/// The leading keyword decides the form, so no backtracking is needed here.
pub fn expression() -> BoxedParser<Expression> {
    BoxedParser::new(|state: &mut ParseState| match state.peek() {
        Some(Token::Fun(_)) => lambda().parse(state),
        Some(Token::If(_)) => if_then_else().parse(state),
        Some(Token::Let(_)) => let_in().parse(state),
        Some(Token::MatchKeyword(_)) => match_expression().parse(state),
        _ => application().parse(state),
    })
}
