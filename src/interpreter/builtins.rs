use lachs::Span;
use tracing::trace;

use crate::core::CoreExpr;

use super::error::RuntimeError;
use super::eval::Interpreter;
use super::value::{Builtin, RValue};

impl Interpreter {
    /// Run a builtin once all of its arguments are present.
    pub(super) fn call_builtin(
        &mut self,
        builtin: Builtin,
        args: Vec<RValue>,
        expr: &CoreExpr,
        span: &Span,
    ) -> Result<RValue, RuntimeError> {
        trace!("builtin {} with {} args", builtin.name(), args.len());
        let mut args = args.into_iter();
        let mut next = || args.next().unwrap_or(RValue::Unit);

        match builtin {
            Builtin::Add => arithmetic(builtin, next(), next(), i128::checked_add),
            Builtin::Sub => arithmetic(builtin, next(), next(), i128::checked_sub),
            Builtin::Mul => arithmetic(builtin, next(), next(), i128::checked_mul),
            Builtin::Eq => {
                let (left, right) = (next(), next());
                Ok(RValue::Bool(left.equals(&right)))
            }
            Builtin::Not => match next() {
                RValue::Bool(b) => Ok(RValue::Bool(!b)),
                other => Err(RuntimeError::BuiltinArgument {
                    builtin: builtin.name(),
                    value: other.to_string(),
                }),
            },
            Builtin::Puts => {
                let value = next();
                self.write_line(&value)?;
                Ok(RValue::Unit)
            }
            Builtin::Unify => {
                let _first = next();
                Ok(next())
            }
            Builtin::Fix => {
                // fix f x = f (fix f) x
                let (f, x) = (next(), next());
                let fix_f = RValue::Builtin(Builtin::Fix, vec![f.clone()]);
                let step = self.apply(f, fix_f, expr, span)?;
                self.apply(step, x, expr, span)
            }
        }
    }
}

fn arithmetic(
    builtin: Builtin,
    left: RValue,
    right: RValue,
    op: fn(i128, i128) -> Option<i128>,
) -> Result<RValue, RuntimeError> {
    match (left, right) {
        (RValue::Integer(a), RValue::Integer(b)) => op(a, b)
            .map(RValue::Integer)
            .ok_or(RuntimeError::Overflow {
                builtin: builtin.name(),
            }),
        (RValue::Integer(_), other) | (other, _) => Err(RuntimeError::BuiltinArgument {
            builtin: builtin.name(),
            value: other.to_string(),
        }),
    }
}
