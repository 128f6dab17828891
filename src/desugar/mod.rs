//! Desugaring - Transform surface AST to core AST
//!
//! - `data` declarations → one Scott-encoded constructor `val` each
//! - `let x = e1 in e2` → `(fun x => e2) e1`
//! - `match e with | c a b => body | .. end` → `e (fun a => fun b => body) ..`
//!
//! Everything else maps one to one. Spans of the surface nodes are carried
//! over to the core nodes they become.

pub mod data;
pub mod error;

pub use data::desugar_data_type;
pub use error::DesugarError;

use tracing::trace;

use crate::ast::{self, Expression, Program, Statement};
use crate::core::*;

/// Desugar a complete program, statement by statement.
pub fn desugar_program(program: Program) -> Result<Vec<CoreStatement>, DesugarError> {
    let mut stmts = Vec::new();
    for stmt in program {
        stmts.extend(desugar_statement(stmt)?);
    }
    Ok(stmts)
}

/// A surface statement becomes one or more core statements.
pub fn desugar_statement(stmt: Statement) -> Result<Vec<CoreStatement>, DesugarError> {
    match stmt {
        Statement::Val(binding) => Ok(vec![CoreStatement::Val(CoreVal {
            name: desugar_ident(binding.name),
            value: desugar_expr(*binding.value)?,
            position: binding.position,
        })]),
        Statement::Def(binding) => Err(DesugarError::Unsupported {
            node: "def",
            span: binding.position,
        }),
        Statement::DataType(data) => {
            trace!("desugaring data type {}", data.name.value);
            desugar_data_type(data)
        }
        Statement::Expression(expr) => Ok(vec![CoreStatement::Expression(desugar_expr(expr)?)]),
    }
}

pub fn desugar_expr(expr: Expression) -> Result<CoreExpr, DesugarError> {
    Ok(match expr {
        Expression::Unit(u) => CoreExpr::Unit(CoreUnit {
            position: u.position,
        }),
        Expression::Ident(id) => CoreExpr::Ident(desugar_ident(id)),
        Expression::Integer(i) => CoreExpr::Integer(CoreInteger {
            value: i.value,
            position: i.position,
        }),
        Expression::String(s) => CoreExpr::String(CoreString {
            value: s.value,
            position: s.position,
        }),
        Expression::Boolean(b) => CoreExpr::Boolean(CoreBoolean {
            value: b.value,
            position: b.position,
        }),
        Expression::Lambda(lambda) => CoreExpr::Lambda(CoreLambda {
            param: desugar_ident(lambda.param),
            typ: lambda.annotation,
            body: Box::new(desugar_expr(*lambda.body)?),
            position: lambda.position,
        }),
        Expression::Application(app) => CoreExpr::apply(
            desugar_expr(*app.func)?,
            desugar_expr(*app.arg)?,
            app.position,
        ),
        Expression::IfThenElse(ite) => CoreExpr::IfThenElse(CoreIfThenElse {
            condition: Box::new(desugar_expr(*ite.condition)?),
            then_expr: Box::new(desugar_expr(*ite.then_expr)?),
            else_expr: Box::new(desugar_expr(*ite.else_expr)?),
            position: ite.position,
        }),
        Expression::Let(binding) => {
            // (fun x => body) value; x stays monomorphic
            let body = desugar_expr(*binding.body)?;
            let value = desugar_expr(*binding.value)?;
            let lambda = CoreExpr::lambda(
                desugar_ident(binding.name),
                None,
                body,
                binding.position.clone(),
            );
            CoreExpr::apply(lambda, value, binding.position)
        }
        Expression::Match(m) => desugar_match(*m)?,
    })
}

/// Apply the scrutinee to one continuation per arm, in the order written.
///
/// Arms are not checked against the declaration order of the data type.
fn desugar_match(m: ast::Match) -> Result<CoreExpr, DesugarError> {
    if m.arms.is_empty() {
        return Err(DesugarError::EmptyMatch { span: m.position });
    }

    let scrutinee = desugar_expr(m.scrutinee)?;
    let branches = m
        .arms
        .into_iter()
        .map(desugar_arm)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CoreExpr::applications(scrutinee, branches, m.position))
}

fn desugar_arm(arm: ast::MatchArm) -> Result<CoreExpr, DesugarError> {
    let body = desugar_expr(arm.body)?;
    let binders = arm
        .pattern
        .binders()
        .iter()
        .cloned()
        .map(desugar_ident)
        .collect::<Vec<_>>();
    if binders.is_empty() {
        return Ok(body);
    }
    Ok(CoreExpr::lambdas(binders, body, arm.position))
}

fn desugar_ident(ident: ast::Ident) -> CoreIdent {
    CoreIdent {
        value: ident.value,
        position: ident.position,
    }
}
