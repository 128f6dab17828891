use lachs::Span;

use super::pattern::Match;
use crate::types::Type;

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Unit(Unit),
    Ident(Ident),
    Integer(Integer),
    String(StringLiteral),
    Boolean(Boolean),
    Lambda(Lambda),
    Application(Application),
    IfThenElse(IfThenElse),
    Let(Let),
    Match(Box<Match>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    pub position: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ident {
    pub value: String,
    pub position: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Integer {
    pub value: i128,
    pub position: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StringLiteral {
    pub value: String,
    pub position: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Boolean {
    pub value: bool,
    pub position: Span,
}

/// `fun x => body` or `fun x : T => body`
#[derive(Debug, Clone, PartialEq)]
pub struct Lambda {
    pub param: Ident,
    pub annotation: Option<Type>,
    pub body: Box<Expression>,
    pub position: Span,
}

/// Juxtaposition `f x`; always exactly one argument
#[derive(Debug, Clone, PartialEq)]
pub struct Application {
    pub func: Box<Expression>,
    pub arg: Box<Expression>,
    pub position: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfThenElse {
    pub condition: Box<Expression>,
    pub then_expr: Box<Expression>,
    pub else_expr: Box<Expression>,
    pub position: Span,
}

/// `let name = value in body`; `name` is not generalized
#[derive(Debug, Clone, PartialEq)]
pub struct Let {
    pub name: Ident,
    pub value: Box<Expression>,
    pub body: Box<Expression>,
    pub position: Span,
}

impl Ident {
    pub fn new(value: impl Into<String>) -> Self {
        Ident {
            value: value.into(),
            position: Span::default(),
        }
    }
}

impl Expression {
    pub fn position(&self) -> Span {
        match self {
            Expression::Unit(u) => u.position.clone(),
            Expression::Ident(i) => i.position.clone(),
            Expression::Integer(i) => i.position.clone(),
            Expression::String(s) => s.position.clone(),
            Expression::Boolean(b) => b.position.clone(),
            Expression::Lambda(l) => l.position.clone(),
            Expression::Application(a) => a.position.clone(),
            Expression::IfThenElse(i) => i.position.clone(),
            Expression::Let(l) => l.position.clone(),
            Expression::Match(m) => m.position.clone(),
        }
    }

    pub fn ident(name: impl Into<String>) -> Self {
        Expression::Ident(Ident::new(name))
    }

    pub fn integer(value: i128) -> Self {
        Expression::Integer(Integer {
            value,
            position: Span::default(),
        })
    }

    pub fn boolean(value: bool) -> Self {
        Expression::Boolean(Boolean {
            value,
            position: Span::default(),
        })
    }

    pub fn lambda(param: impl Into<String>, body: Expression) -> Self {
        Expression::Lambda(Lambda {
            param: Ident::new(param),
            annotation: None,
            body: Box::new(body),
            position: Span::default(),
        })
    }

    pub fn apply(func: Expression, arg: Expression) -> Self {
        Expression::Application(Application {
            func: Box::new(func),
            arg: Box::new(arg),
            position: Span::default(),
        })
    }
}
