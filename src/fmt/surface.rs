//! Pretty printer for surface programs

use std::fmt::{self, Display};

use crate::ast::{DataType, Expression, MatchArm, Pattern, Statement};

impl Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Unit(_) => write!(f, "unit"),
            Expression::Ident(ident) => write!(f, "{}", ident.value),
            Expression::Integer(int) => write!(f, "{}", int.value),
            Expression::String(s) => write!(f, "\"{}\"", s.value),
            Expression::Boolean(b) => write!(f, "{}", b.value),
            Expression::Lambda(lambda) => match &lambda.annotation {
                Some(typ) => write!(f, "fun {} : {} => {}", lambda.param.value, typ, lambda.body),
                None => write!(f, "fun {} => {}", lambda.param.value, lambda.body),
            },
            Expression::Application(app) => {
                if is_open(&app.func) {
                    write!(f, "({})", app.func)?;
                } else {
                    write!(f, "{}", app.func)?;
                }
                if is_open(&app.arg) || matches!(*app.arg, Expression::Application(_)) {
                    write!(f, " ({})", app.arg)
                } else {
                    write!(f, " {}", app.arg)
                }
            }
            Expression::IfThenElse(ite) => write!(
                f,
                "if {} then {} else {}",
                ite.condition, ite.then_expr, ite.else_expr
            ),
            Expression::Let(binding) => write!(
                f,
                "let {} = {} in {}",
                binding.name.value, binding.value, binding.body
            ),
            Expression::Match(m) => {
                write!(f, "match {} with", m.scrutinee)?;
                for arm in &m.arms {
                    write!(f, " {arm}")?;
                }
                write!(f, " end")
            }
        }
    }
}

/// Keyword-led forms are not atoms and need parentheses inside an application.
fn is_open(expr: &Expression) -> bool {
    matches!(
        expr,
        Expression::Lambda(_)
            | Expression::IfThenElse(_)
            | Expression::Let(_)
            | Expression::Match(_)
    )
}

impl Display for MatchArm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "| {} => {}", self.pattern, self.body)
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name().value)?;
        for binder in self.binders() {
            write!(f, " {}", binder.value)?;
        }
        Ok(())
    }
}

impl Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "data {}", self.name.value)?;
        for arg in &self.type_args {
            write!(f, " {}", arg.value)?;
        }
        write!(f, " =")?;
        for (i, ctor) in self.constructors.iter().enumerate() {
            if i > 0 {
                write!(f, " |")?;
            }
            write!(f, " {}", ctor.name.value)?;
            for field in &ctor.fields {
                write!(f, " {}", field.value)?;
            }
        }
        Ok(())
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Val(binding) => write!(f, "val {} = {}", binding.name.value, binding.value),
            Statement::Def(binding) => write!(f, "def {} = {}", binding.name.value, binding.value),
            Statement::DataType(data) => write!(f, "{data}"),
            Statement::Expression(expr) => write!(f, "{expr}"),
        }
    }
}

/// Surface statements separated by `;`, one per line.
pub struct SurfaceProgram<'a>(pub &'a [Statement]);

impl Display for SurfaceProgram<'_> {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Constructor, Let, Match};
    use lachs::Span;

    #[test]
    fn test_let_inside_application_is_parenthesized() {
        let expr = Expression::apply(
            Expression::ident("f"),
            Expression::Let(Let {
                name: crate::ast::Ident::new("x"),
                value: Box::new(Expression::integer(1)),
                body: Box::new(Expression::ident("x")),
                position: Span::default(),
            }),
        );
        assert_eq!(expr.to_string(), "f (let x = 1 in x)");
    }

    #[test]
    fn test_match_on_one_line() {
        let expr = Expression::Match(Box::new(Match {
            scrutinee: Expression::ident("o"),
            arms: vec![
                MatchArm::new(
                    Pattern::Constructor {
                        name: crate::ast::Ident::new("some"),
                        fields: vec![crate::ast::Ident::new("y")],
                    },
                    Expression::ident("y"),
                ),
                MatchArm::new(
                    Pattern::Nullary(crate::ast::Ident::new("none")),
                    Expression::integer(0),
                ),
            ],
            position: Span::default(),
        }));
        assert_eq!(
            expr.to_string(),
            "match o with | some y => y | none => 0 end"
        );
    }

    #[test]
    fn test_data_type() {
        let data = DataType {
            name: crate::ast::Ident::new("option"),
            type_args: vec![crate::ast::Ident::new("t")],
            constructors: vec![Constructor::new("some", &["x"]), Constructor::new("none", &[])],
            position: Span::default(),
        };
        assert_eq!(data.to_string(), "data option t = some x | none");
    }
}
