use std::fmt;
use std::rc::Rc;

use crate::core::CoreLambda;

use super::scope::Scope;

/// Host-provided functions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Add,
    Sub,
    Mul,
    Eq,
    Not,
    Puts,
    Unify,
    Fix,
}

impl Builtin {
    pub const ALL: [Builtin; 8] = [
        Builtin::Add,
        Builtin::Sub,
        Builtin::Mul,
        Builtin::Eq,
        Builtin::Not,
        Builtin::Puts,
        Builtin::Unify,
        Builtin::Fix,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Builtin::Add => "add",
            Builtin::Sub => "sub",
            Builtin::Mul => "mul",
            Builtin::Eq => "eq",
            Builtin::Not => "not",
            Builtin::Puts => "puts",
            Builtin::Unify => "unify",
            Builtin::Fix => "fix",
        }
    }

    /// Number of arguments collected before the builtin runs.
    pub fn arity(&self) -> usize {
        match self {
            Builtin::Not | Builtin::Puts => 1,
            Builtin::Add
            | Builtin::Sub
            | Builtin::Mul
            | Builtin::Eq
            | Builtin::Unify
            | Builtin::Fix => 2,
        }
    }
}

/// A lambda together with the scope it was created in
#[derive(Debug, Clone)]
pub struct Closure {
    pub lambda: Rc<CoreLambda>,
    pub scope: Scope,
}

/// Runtime value representation
#[derive(Debug, Clone)]
pub enum RValue {
    Unit,
    Integer(i128),
    String(String),
    Bool(bool),
    Closure(Closure),
    /// Builtin with the arguments supplied so far
    Builtin(Builtin, Vec<RValue>),
}

impl RValue {
    pub fn builtin(builtin: Builtin) -> Self {
        RValue::Builtin(builtin, Vec::new())
    }

    pub fn is_callable(&self) -> bool {
        matches!(self, RValue::Closure(_) | RValue::Builtin(..))
    }

    /// Structural equality on first-order values. Functions never compare
    /// equal, not even to themselves.
    pub fn equals(&self, other: &RValue) -> bool {
        match (self, other) {
            (RValue::Unit, RValue::Unit) => true,
            (RValue::Integer(a), RValue::Integer(b)) => a == b,
            (RValue::String(a), RValue::String(b)) => a == b,
            (RValue::Bool(a), RValue::Bool(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for RValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RValue::Unit => write!(f, "unit"),
            RValue::Integer(i) => write!(f, "{i}"),
            RValue::String(s) => write!(f, "{s}"),
            RValue::Bool(b) => write!(f, "{b}"),
            RValue::Closure(closure) => write!(f, "<fun {}>", closure.lambda.param.value),
            RValue::Builtin(builtin, args) if args.is_empty() => {
                write!(f, "<builtin {}>", builtin.name())
            }
            RValue::Builtin(builtin, args) => {
                write!(f, "<builtin {} {}/{}>", builtin.name(), args.len(), builtin.arity())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(RValue::Integer(-3).to_string(), "-3");
        assert_eq!(RValue::String("hi".into()).to_string(), "hi");
        assert_eq!(RValue::Unit.to_string(), "unit");
        assert_eq!(RValue::builtin(Builtin::Add).to_string(), "<builtin add>");
        assert_eq!(
            RValue::Builtin(Builtin::Add, vec![RValue::Integer(1)]).to_string(),
            "<builtin add 1/2>"
        );
    }

    #[test]
    fn test_functions_are_never_equal() {
        let add = RValue::builtin(Builtin::Add);
        assert!(!add.equals(&add.clone()));
        assert!(RValue::Integer(2).equals(&RValue::Integer(2)));
        assert!(!RValue::Integer(2).equals(&RValue::Bool(true)));
    }
}
