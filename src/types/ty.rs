use std::collections::HashMap;
use std::fmt;

use super::fresh::FreshVars;
use super::subst::Substitution;

/// A unification variable. Displayed as `a`, `b`, .., `z`, `aa`, `ab`, ..
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeVar {
    pub id: usize,
}

impl TypeVar {
    pub fn new(id: usize) -> Self {
        Self { id }
    }

    /// Bijective base-26 letter name of this variable.
    pub fn name(&self) -> String {
        let mut n = self.id + 1;
        let mut letters = Vec::new();
        while n > 0 {
            n -= 1;
            letters.push((b'a' + (n % 26) as u8) as char);
            n /= 26;
        }
        letters.iter().rev().collect()
    }
}

impl fmt::Display for TypeVar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

pub const ARROW: &str = "arrow";

/// A type term.
///
/// `Fun` covers both the nullary base types (`int`, `bool`, `string`, `unit`)
/// and the binary `arrow` constructor. Build arrows with [`Type::func`] so
/// they always carry exactly two arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    Var(TypeVar),
    Fun(String, Vec<Type>),
}

impl Type {
    fn base(name: &str) -> Self {
        Type::Fun(name.to_string(), Vec::new())
    }

    pub fn int() -> Self {
        Type::base("int")
    }

    pub fn bool() -> Self {
        Type::base("bool")
    }

    pub fn string() -> Self {
        Type::base("string")
    }

    pub fn unit() -> Self {
        Type::base("unit")
    }

    /// Named type used for annotations that are not one of the base types.
    pub fn named(name: impl Into<String>) -> Self {
        Type::Fun(name.into(), Vec::new())
    }

    pub fn var(id: usize) -> Self {
        Type::Var(TypeVar::new(id))
    }

    pub fn func(domain: Type, codomain: Type) -> Self {
        Type::Fun(ARROW.to_string(), vec![domain, codomain])
    }

    /// Right-nested arrow `t1 -> t2 -> .. -> result`.
    pub fn curried(params: Vec<Type>, result: Type) -> Self {
        params
            .into_iter()
            .rev()
            .fold(result, |acc, param| Type::func(param, acc))
    }

    pub fn as_arrow(&self) -> Option<(&Type, &Type)> {
        match self {
            Type::Fun(name, args) if name == ARROW && args.len() == 2 => Some((&args[0], &args[1])),
            _ => None,
        }
    }

    pub fn is_arrow(&self) -> bool {
        self.as_arrow().is_some()
    }

    /// Variables of this term in order of first occurrence, without duplicates.
    pub fn vars(&self) -> Vec<TypeVar> {
        let mut out = Vec::new();
        self.collect_vars(&mut out);
        out
    }

    fn collect_vars(&self, out: &mut Vec<TypeVar>) {
        match self {
            Type::Var(v) => {
                if !out.contains(v) {
                    out.push(*v);
                }
            }
            Type::Fun(_, args) => args.iter().for_each(|arg| arg.collect_vars(out)),
        }
    }

    pub fn occurs(&self, var: &TypeVar) -> bool {
        match self {
            Type::Var(v) => v == var,
            Type::Fun(_, args) => args.iter().any(|arg| arg.occurs(var)),
        }
    }

    /// Replace `var` by `replacement` everywhere in this term.
    pub fn substitute(&self, var: &TypeVar, replacement: &Type) -> Type {
        match self {
            Type::Var(v) if v == var => replacement.clone(),
            Type::Var(_) => self.clone(),
            Type::Fun(name, args) => Type::Fun(
                name.clone(),
                args.iter()
                    .map(|arg| arg.substitute(var, replacement))
                    .collect(),
            ),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some((domain, codomain)) = self.as_arrow() {
            return if domain.is_arrow() {
                write!(f, "({domain}) -> {codomain}")
            } else {
                write!(f, "{domain} -> {codomain}")
            };
        }
        match self {
            Type::Var(v) => write!(f, "{v}"),
            Type::Fun(name, args) if args.is_empty() => write!(f, "{name}"),
            Type::Fun(name, args) => {
                write!(f, "{name}")?;
                for arg in args {
                    match arg {
                        Type::Fun(_, inner) if !inner.is_empty() => write!(f, " ({arg})")?,
                        _ => write!(f, " {arg}")?,
                    }
                }
                Ok(())
            }
        }
    }
}

/// A type with universally quantified variables: `forall a b . a -> b`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeScheme {
    pub vars: Vec<TypeVar>,
    pub ty: Type,
}

impl TypeScheme {
    pub fn monomorphic(ty: Type) -> Self {
        TypeScheme {
            vars: Vec::new(),
            ty,
        }
    }

    pub fn polymorphic(vars: Vec<TypeVar>, ty: Type) -> Self {
        TypeScheme { vars, ty }
    }

    /// Variables of the body not bound by this scheme.
    pub fn free_vars(&self) -> Vec<TypeVar> {
        self.ty
            .vars()
            .into_iter()
            .filter(|v| !self.vars.contains(v))
            .collect()
    }

    /// Fresh monomorphic copy of the body.
    ///
    /// All bound variables are renamed at once. Renaming one at a time would
    /// break as soon as a fresh id collides with a bound id that has not been
    /// renamed yet, which happens because the fresh counter restarts at every
    /// statement while the builtin schemes keep their ids.
    pub fn instantiate(&self, fresh: &mut FreshVars) -> Type {
        let renaming: HashMap<TypeVar, Type> = self
            .vars
            .iter()
            .map(|v| (*v, Type::Var(fresh.fresh())))
            .collect();
        Substitution::simultaneous(&renaming, &self.ty)
    }
}

impl fmt::Display for TypeScheme {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.vars.is_empty() {
            return write!(f, "{}", self.ty);
        }
        write!(f, "forall")?;
        for var in &self.vars {
            write!(f, " {var}")?;
        }
        write!(f, " . {}", self.ty)
    }
}
