use std::collections::HashMap;
use std::fmt;

use super::ty::{Type, TypeVar};

/// An ordered substitution.
///
/// Pairs are applied one after the other, in the order the unifier discovered
/// them. A later pair may mention variables an earlier pair introduced, so the
/// order cannot be changed without changing the result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitution(pub Vec<(TypeVar, Type)>);

impl Substitution {
    pub fn empty() -> Self {
        Substitution(Vec::new())
    }

    pub fn singleton(var: TypeVar, ty: Type) -> Self {
        Substitution(vec![(var, ty)])
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn push(&mut self, var: TypeVar, ty: Type) {
        self.0.push((var, ty));
    }

    pub fn apply(&self, ty: &Type) -> Type {
        self.0
            .iter()
            .fold(ty.clone(), |acc, (var, replacement)| {
                acc.substitute(var, replacement)
            })
    }

    /// `self` followed by `other`.
    pub fn concat(mut self, other: Substitution) -> Substitution {
        self.0.extend(other.0);
        self
    }

    /// Replace every variable in `renaming` at once.
    pub fn simultaneous(renaming: &HashMap<TypeVar, Type>, ty: &Type) -> Type {
        match ty {
            Type::Var(v) => renaming.get(v).cloned().unwrap_or_else(|| ty.clone()),
            Type::Fun(name, args) => Type::Fun(
                name.clone(),
                args.iter()
                    .map(|arg| Substitution::simultaneous(renaming, arg))
                    .collect(),
            ),
        }
    }
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (i, (var, ty)) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{var} := {ty}")?;
        }
        write!(f, "]")
    }
}
