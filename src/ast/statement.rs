use lachs::Span;

use super::expression::{Expression, Ident};

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Val(Binding),
    /// Legacy binding form; rejected by the desugarer
    Def(Binding),
    DataType(DataType),
    Expression(Expression),
}

/// `val name = value`
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub name: Ident,
    pub value: Box<Expression>,
    pub position: Span,
}

/// `data name args.. = ctor | ctor ..`
#[derive(Debug, Clone, PartialEq)]
pub struct DataType {
    pub name: Ident,
    pub type_args: Vec<Ident>,
    pub constructors: Vec<Constructor>,
    pub position: Span,
}

/// A constructor with its ordered field names; nullary when `fields` is empty
#[derive(Debug, Clone, PartialEq)]
pub struct Constructor {
    pub name: Ident,
    pub fields: Vec<Ident>,
    pub position: Span,
}

impl Statement {
    pub fn position(&self) -> Span {
        match self {
            Statement::Val(b) | Statement::Def(b) => b.position.clone(),
            Statement::DataType(d) => d.position.clone(),
            Statement::Expression(e) => e.position(),
        }
    }

    pub fn val(name: impl Into<String>, value: Expression) -> Self {
        Statement::Val(Binding {
            name: Ident::new(name),
            value: Box::new(value),
            position: Span::default(),
        })
    }
}

impl Constructor {
    pub fn new(name: impl Into<String>, fields: &[&str]) -> Self {
        Constructor {
            name: Ident::new(name),
            fields: fields.iter().map(|f| Ident::new(*f)).collect(),
            position: Span::default(),
        }
    }
}
