use std::collections::{HashMap, HashSet};

use super::ty::{TypeScheme, TypeVar};

/// Names in scope for the type checker.
///
/// Top-level bindings and lambda parameters live in the same flat map;
/// extending returns a new environment so the caller's copy is untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeEnv {
    bindings: HashMap<String, TypeScheme>,
}

impl TypeEnv {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_bindings(bindings: Vec<(String, TypeScheme)>) -> Self {
        TypeEnv {
            bindings: bindings.into_iter().collect(),
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&TypeScheme> {
        self.bindings.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn extend(&self, name: String, scheme: TypeScheme) -> TypeEnv {
        let mut bindings = self.bindings.clone();
        bindings.insert(name, scheme);
        TypeEnv { bindings }
    }

    pub fn insert(&mut self, name: String, scheme: TypeScheme) {
        self.bindings.insert(name, scheme);
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Variables free in some scheme of this environment.
    pub fn free_type_vars(&self) -> HashSet<TypeVar> {
        self.bindings
            .values()
            .flat_map(TypeScheme::free_vars)
            .collect()
    }
}
