use std::io::{self, Write};
use std::rc::Rc;
use std::sync::LazyLock;

use lachs::Span;
use regex::Regex;
use tracing::debug;

use crate::config::Config;
use crate::core::*;

use super::error::RuntimeError;
use super::scope::{Binding, Scope};
use super::value::{Closure, RValue};

/// Stack kept free before evaluating one more level.
const RED_ZONE: usize = 128 * 1024;
/// Size of each segment allocated when the red zone is reached.
const STACK_SEGMENT: usize = 4 * 1024 * 1024;

static IDENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_']*$").expect("identifier pattern compiles"));

/// Tree-walking evaluator for core statements.
///
/// Owns the global scope and the sink `puts` writes to. Values of `val`
/// bindings are never cached: every lookup evaluates the bound expression
/// again in the global scope.
pub struct Interpreter {
    scope: Scope,
    output: Box<dyn Write>,
    depth: usize,
    max_depth: usize,
}

impl Interpreter {
    pub fn new(config: &Config) -> Self {
        Self::with_output(config, Box::new(io::stdout()))
    }

    pub fn with_output(config: &Config, output: Box<dyn Write>) -> Self {
        Interpreter {
            scope: Scope::global(),
            output,
            depth: 0,
            max_depth: config.max_depth,
        }
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Evaluate a statement. A `val` is only stored, so it yields no value.
    pub fn eval_statement(&mut self, stmt: &CoreStatement) -> Result<Option<RValue>, RuntimeError> {
        match stmt {
            CoreStatement::Val(val) => {
                if !IDENT.is_match(&val.name.value) {
                    return Err(RuntimeError::BadExpression {
                        name: val.name.value.clone(),
                        stmt: stmt.to_string(),
                        span: val.position.clone(),
                    });
                }
                debug!("binding {}", val.name.value);
                self.scope.define(&val.name.value, val.value.clone());
                Ok(None)
            }
            CoreStatement::Expression(expr) => {
                self.depth = 0;
                let scope = self.scope.clone();
                let value = self.eval_expr(expr, &scope)?;
                self.output.flush()?;
                Ok(Some(value))
            }
        }
    }

    pub fn eval_expr(&mut self, expr: &CoreExpr, scope: &Scope) -> Result<RValue, RuntimeError> {
        if self.depth >= self.max_depth {
            return Err(RuntimeError::RecursionLimit {
                limit: self.max_depth,
            });
        }
        self.depth += 1;
        let result = stacker::maybe_grow(RED_ZONE, STACK_SEGMENT, || self.eval_inner(expr, scope));
        self.depth -= 1;
        result
    }

    fn eval_inner(&mut self, expr: &CoreExpr, scope: &Scope) -> Result<RValue, RuntimeError> {
        match expr {
            CoreExpr::Unit(_) => Ok(RValue::Unit),
            CoreExpr::Integer(i) => Ok(RValue::Integer(i.value)),
            CoreExpr::String(s) => Ok(RValue::String(s.value.clone())),
            CoreExpr::Boolean(b) => Ok(RValue::Bool(b.value)),

            CoreExpr::Ident(ident) => match scope.resolve(&ident.value) {
                Some(Binding::Value(value)) => Ok(value),
                Some(Binding::Expr(bound)) => self.eval_expr(&bound, &scope.globals()),
                None => Err(RuntimeError::UnboundSymbol {
                    name: ident.value.clone(),
                    span: ident.position.clone(),
                }),
            },

            CoreExpr::Lambda(lambda) => Ok(RValue::Closure(Closure {
                lambda: Rc::new(lambda.clone()),
                scope: scope.clone(),
            })),

            CoreExpr::Application(app) => {
                let func = self.eval_expr(&app.func, scope)?;
                let arg = self.eval_expr(&app.arg, scope)?;
                self.apply(func, arg, expr, &app.position)
            }

            CoreExpr::IfThenElse(ite) => match self.eval_expr(&ite.condition, scope)? {
                RValue::Bool(true) => self.eval_expr(&ite.then_expr, scope),
                RValue::Bool(false) => self.eval_expr(&ite.else_expr, scope),
                other => Err(RuntimeError::NonBooleanCondition {
                    value: other.to_string(),
                    span: ite.condition.position(),
                }),
            },
        }
    }

    /// Call `func` with one evaluated argument. `expr` is only used for the
    /// error message when `func` is not callable.
    pub(super) fn apply(
        &mut self,
        func: RValue,
        arg: RValue,
        expr: &CoreExpr,
        span: &Span,
    ) -> Result<RValue, RuntimeError> {
        match func {
            RValue::Closure(closure) => {
                let inner = closure.scope.bind(&closure.lambda.param.value, arg);
                self.eval_expr(&closure.lambda.body, &inner)
            }
            RValue::Builtin(builtin, mut args) => {
                args.push(arg);
                if args.len() < builtin.arity() {
                    Ok(RValue::Builtin(builtin, args))
                } else {
                    self.call_builtin(builtin, args, expr, span)
                }
            }
            _ => Err(RuntimeError::BadApplication {
                expr: expr.to_string(),
                span: span.clone(),
            }),
        }
    }

    pub(super) fn write_line(&mut self, value: &RValue) -> Result<(), RuntimeError> {
        writeln!(self.output, "{value}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::{Builtin, Capture};

    fn int(value: i128) -> CoreExpr {
        CoreExpr::Integer(CoreInteger {
            value,
            position: Span::default(),
        })
    }

    fn ident(name: &str) -> CoreExpr {
        CoreExpr::ident(name, Span::default())
    }

    fn apply(func: CoreExpr, arg: CoreExpr) -> CoreExpr {
        CoreExpr::apply(func, arg, Span::default())
    }

    fn lambda(param: &str, body: CoreExpr) -> CoreExpr {
        CoreExpr::lambda(CoreIdent::new(param, Span::default()), None, body, Span::default())
    }

    fn val(name: &str, value: CoreExpr) -> CoreStatement {
        CoreStatement::Val(CoreVal {
            name: CoreIdent::new(name, Span::default()),
            value,
            position: Span::default(),
        })
    }

    fn eval(interpreter: &mut Interpreter, expr: CoreExpr) -> Result<RValue, RuntimeError> {
        interpreter
            .eval_statement(&CoreStatement::Expression(expr))
            .map(|v| v.unwrap())
    }

    #[test]
    fn test_closure_application() {
        let mut interpreter = Interpreter::new(&Config::default());
        let value = eval(&mut interpreter, apply(lambda("x", ident("x")), int(7))).unwrap();
        assert!(matches!(value, RValue::Integer(7)));
    }

    #[test]
    fn test_val_is_stored_unevaluated() {
        let mut interpreter = Interpreter::new(&Config::default());
        // would fail if evaluated at definition time
        let stored = interpreter
            .eval_statement(&val("later", ident("not_yet")))
            .unwrap();
        assert!(stored.is_none());
        assert!(matches!(
            eval(&mut interpreter, ident("later")),
            Err(RuntimeError::UnboundSymbol { ref name, .. }) if name == "not_yet"
        ));

        interpreter
            .eval_statement(&val("not_yet", int(3)))
            .unwrap();
        assert!(matches!(
            eval(&mut interpreter, ident("later")),
            Ok(RValue::Integer(3))
        ));
    }

    #[test]
    fn test_closures_see_later_globals() {
        let mut interpreter = Interpreter::new(&Config::default());
        interpreter
            .eval_statement(&val("f", lambda("x", ident("g"))))
            .unwrap();
        interpreter.eval_statement(&val("g", int(9))).unwrap();
        let value = eval(&mut interpreter, apply(ident("f"), int(0))).unwrap();
        assert!(matches!(value, RValue::Integer(9)));
    }

    #[test]
    fn test_bad_application() {
        let mut interpreter = Interpreter::new(&Config::default());
        let err = eval(&mut interpreter, apply(int(1), int(2))).unwrap_err();
        assert!(matches!(err, RuntimeError::BadApplication { ref expr, .. } if expr == "1 2"));
    }

    #[test]
    fn test_bad_binding_name() {
        let mut interpreter = Interpreter::new(&Config::default());
        let err = interpreter
            .eval_statement(&val("1x", int(1)))
            .unwrap_err();
        assert!(matches!(err, RuntimeError::BadExpression { .. }));
    }

    #[test]
    fn test_non_boolean_condition() {
        let mut interpreter = Interpreter::new(&Config::default());
        let expr = CoreExpr::IfThenElse(CoreIfThenElse {
            condition: Box::new(int(1)),
            then_expr: Box::new(int(2)),
            else_expr: Box::new(int(3)),
            position: Span::default(),
        });
        assert!(matches!(
            eval(&mut interpreter, expr),
            Err(RuntimeError::NonBooleanCondition { .. })
        ));
    }

    #[test]
    fn test_only_taken_branch_is_evaluated() {
        let mut interpreter = Interpreter::new(&Config::default());
        let expr = CoreExpr::IfThenElse(CoreIfThenElse {
            condition: Box::new(CoreExpr::Boolean(CoreBoolean {
                value: true,
                position: Span::default(),
            })),
            then_expr: Box::new(int(2)),
            else_expr: Box::new(ident("missing")),
            position: Span::default(),
        });
        assert!(matches!(eval(&mut interpreter, expr), Ok(RValue::Integer(2))));
    }

    #[test]
    fn test_partial_builtin() {
        let mut interpreter = Interpreter::new(&Config::default());
        let value = eval(&mut interpreter, apply(ident("add"), int(1))).unwrap();
        assert!(matches!(value, RValue::Builtin(Builtin::Add, ref args) if args.len() == 1));
    }

    #[test]
    fn test_recursion_limit() {
        let capture = Capture::new();
        let mut interpreter =
            Interpreter::with_output(&Config::default().with_max_depth(50), Box::new(capture));
        // val loop = fun x => loop x
        interpreter
            .eval_statement(&val("loop", lambda("x", apply(ident("loop"), ident("x")))))
            .unwrap();
        let err = eval(&mut interpreter, apply(ident("loop"), int(0))).unwrap_err();
        assert!(matches!(err, RuntimeError::RecursionLimit { limit: 50 }));
    }
}
