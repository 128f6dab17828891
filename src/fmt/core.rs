//! Unparser for the core AST
//!
//! Output is valid surface syntax, so a printed core program reads back to the
//! same tree. Lambdas show their parameter annotation when one is present,
//! which after type checking is always the case.

use std::fmt::{self, Display};

use crate::core::{CoreExpr, CoreStatement};

impl Display for CoreExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreExpr::Unit(_) => write!(f, "unit"),
            CoreExpr::Ident(ident) => write!(f, "{}", ident.value),
            CoreExpr::Integer(int) => write!(f, "{}", int.value),
            CoreExpr::String(s) => write!(f, "\"{}\"", s.value),
            CoreExpr::Boolean(b) => write!(f, "{}", b.value),
            CoreExpr::Lambda(lambda) => match &lambda.typ {
                Some(typ) => write!(f, "fun {} : {} => {}", lambda.param.value, typ, lambda.body),
                None => write!(f, "fun {} => {}", lambda.param.value, lambda.body),
            },
            CoreExpr::Application(app) => {
                if needs_parens_as_head(&app.func) {
                    write!(f, "({})", app.func)?;
                } else {
                    write!(f, "{}", app.func)?;
                }
                if needs_parens_as_arg(&app.arg) {
                    write!(f, " ({})", app.arg)
                } else {
                    write!(f, " {}", app.arg)
                }
            }
            CoreExpr::IfThenElse(ite) => write!(
                f,
                "if {} then {} else {}",
                ite.condition, ite.then_expr, ite.else_expr
            ),
        }
    }
}

fn needs_parens_as_head(expr: &CoreExpr) -> bool {
    matches!(expr, CoreExpr::Lambda(_) | CoreExpr::IfThenElse(_))
}

fn needs_parens_as_arg(expr: &CoreExpr) -> bool {
    matches!(
        expr,
        CoreExpr::Application(_) | CoreExpr::Lambda(_) | CoreExpr::IfThenElse(_)
    )
}

impl Display for CoreStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreStatement::Val(val) => write!(f, "val {} = {}", val.name.value, val.value),
            CoreStatement::Expression(expr) => write!(f, "{expr}"),
        }
    }
}

/// Core statements separated by `;`, one per line.
pub struct CoreProgram<'a>(pub &'a [CoreStatement]);

impl Display for CoreProgram<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, stmt) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f, ";")?;
            }
            write!(f, "{stmt}")?;
        }
        Ok(())
    }
}
