//! # Core AST
//!
//! The calculus that the type checker and interpreter work on. It is what is
//! left of the surface language once [`crate::desugar`] has removed `data`,
//! `let` and `match`:
//!
//! ```text
//! expr := literal | symbol | fun x [: T] => expr | expr expr | if expr then expr else expr
//! stmt := val name = expr | expr
//! ```
//!
//! The only place type information lives in this tree is the optional
//! parameter annotation of a lambda. Before type checking it holds whatever the
//! programmer wrote; the type checker returns an *elaborated* copy in which
//! every lambda carries its resolved parameter type.

use lachs::Span;

use crate::types::{Substitution, Type};

#[derive(Debug, Clone, PartialEq)]
pub enum CoreExpr {
    Unit(CoreUnit),
    Ident(CoreIdent),
    Integer(CoreInteger),
    String(CoreString),
    Boolean(CoreBoolean),
    Lambda(CoreLambda),
    Application(CoreApplication),
    IfThenElse(CoreIfThenElse),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoreUnit {
    pub position: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoreIdent {
    pub value: String,
    pub position: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoreInteger {
    pub value: i128,
    pub position: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoreString {
    pub value: String,
    pub position: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoreBoolean {
    pub value: bool,
    pub position: Span,
}

/// Single-parameter lambda
#[derive(Debug, Clone, PartialEq)]
pub struct CoreLambda {
    pub param: CoreIdent,
    pub typ: Option<Type>,
    pub body: Box<CoreExpr>,
    pub position: Span,
}

/// Application to exactly one argument
#[derive(Debug, Clone, PartialEq)]
pub struct CoreApplication {
    pub func: Box<CoreExpr>,
    pub arg: Box<CoreExpr>,
    pub position: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoreIfThenElse {
    pub condition: Box<CoreExpr>,
    pub then_expr: Box<CoreExpr>,
    pub else_expr: Box<CoreExpr>,
    pub position: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CoreStatement {
    Val(CoreVal),
    Expression(CoreExpr),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoreVal {
    pub name: CoreIdent,
    pub value: CoreExpr,
    pub position: Span,
}

impl CoreIdent {
    pub fn new(value: impl Into<String>, position: Span) -> Self {
        CoreIdent {
            value: value.into(),
            position,
        }
    }
}

impl CoreExpr {
    pub fn position(&self) -> Span {
        match self {
            CoreExpr::Unit(u) => u.position.clone(),
            CoreExpr::Ident(i) => i.position.clone(),
            CoreExpr::Integer(i) => i.position.clone(),
            CoreExpr::String(s) => s.position.clone(),
            CoreExpr::Boolean(b) => b.position.clone(),
            CoreExpr::Lambda(l) => l.position.clone(),
            CoreExpr::Application(a) => a.position.clone(),
            CoreExpr::IfThenElse(i) => i.position.clone(),
        }
    }

    pub fn ident(name: impl Into<String>, position: Span) -> Self {
        CoreExpr::Ident(CoreIdent::new(name, position))
    }

    pub fn lambda(param: CoreIdent, typ: Option<Type>, body: CoreExpr, position: Span) -> Self {
        CoreExpr::Lambda(CoreLambda {
            param,
            typ,
            body: Box::new(body),
            position,
        })
    }

    pub fn apply(func: CoreExpr, arg: CoreExpr, position: Span) -> Self {
        CoreExpr::Application(CoreApplication {
            func: Box::new(func),
            arg: Box::new(arg),
            position,
        })
    }

    /// Curried lambda over `params` (outermost first) around `body`.
    pub fn lambdas(params: Vec<CoreIdent>, body: CoreExpr, position: Span) -> Self {
        params.into_iter().rev().fold(body, |acc, param| {
            CoreExpr::lambda(param, None, acc, position.clone())
        })
    }

    /// Left-nested application `head a1 a2 ..`.
    pub fn applications(head: CoreExpr, args: Vec<CoreExpr>, position: Span) -> Self {
        args.into_iter()
            .fold(head, |acc, arg| CoreExpr::apply(acc, arg, position.clone()))
    }

    /// Rewrite every lambda annotation through `subst`.
    pub fn apply_subst(&mut self, subst: &Substitution) {
        match self {
            CoreExpr::Unit(_)
            | CoreExpr::Ident(_)
            | CoreExpr::Integer(_)
            | CoreExpr::String(_)
            | CoreExpr::Boolean(_) => {}
            CoreExpr::Lambda(lambda) => {
                if let Some(typ) = &lambda.typ {
                    lambda.typ = Some(subst.apply(typ));
                }
                lambda.body.apply_subst(subst);
            }
            CoreExpr::Application(app) => {
                app.func.apply_subst(subst);
                app.arg.apply_subst(subst);
            }
            CoreExpr::IfThenElse(ite) => {
                ite.condition.apply_subst(subst);
                ite.then_expr.apply_subst(subst);
                ite.else_expr.apply_subst(subst);
            }
        }
    }
}

impl CoreStatement {
    pub fn position(&self) -> Span {
        match self {
            CoreStatement::Val(val) => val.position.clone(),
            CoreStatement::Expression(expr) => expr.position(),
        }
    }

    pub fn apply_subst(&mut self, subst: &Substitution) {
        match self {
            CoreStatement::Val(val) => val.value.apply_subst(subst),
            CoreStatement::Expression(expr) => expr.apply_subst(subst),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TypeVar;

    fn ident(name: &str) -> CoreIdent {
        CoreIdent::new(name, Span::default())
    }

    #[test]
    fn lambdas_nest_outermost_first() {
        let expr = CoreExpr::lambdas(
            vec![ident("a"), ident("b")],
            CoreExpr::ident("a", Span::default()),
            Span::default(),
        );
        let CoreExpr::Lambda(outer) = expr else {
            panic!("expected lambda");
        };
        assert_eq!(outer.param.value, "a");
        let CoreExpr::Lambda(inner) = *outer.body else {
            panic!("expected nested lambda");
        };
        assert_eq!(inner.param.value, "b");
    }

    #[test]
    fn applications_nest_to_the_left() {
        let expr = CoreExpr::applications(
            CoreExpr::ident("f", Span::default()),
            vec![
                CoreExpr::ident("x", Span::default()),
                CoreExpr::ident("y", Span::default()),
            ],
            Span::default(),
        );
        let CoreExpr::Application(outer) = expr else {
            panic!("expected application");
        };
        assert!(matches!(*outer.arg, CoreExpr::Ident(ref i) if i.value == "y"));
        assert!(matches!(*outer.func, CoreExpr::Application(_)));
    }

    #[test]
    fn apply_subst_rewrites_annotations() {
        let var = TypeVar::new(0);
        let mut expr = CoreExpr::lambda(
            ident("x"),
            Some(Type::Var(var.clone())),
            CoreExpr::ident("x", Span::default()),
            Span::default(),
        );
        expr.apply_subst(&Substitution::singleton(var, Type::int()));
        let CoreExpr::Lambda(lambda) = expr else {
            panic!("expected lambda");
        };
        assert_eq!(lambda.typ, Some(Type::int()));
    }
}
