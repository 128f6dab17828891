use std::collections::VecDeque;

use thiserror::Error;
use tracing::trace;

use super::subst::Substitution;
use super::ty::{Type, TypeVar};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnifyError {
    #[error("unification error {left} <> {right}")]
    Mismatch { left: Type, right: Type },
    #[error("unification error {var} occurs in {ty}")]
    OccursCheck { var: TypeVar, ty: Type },
}

/// Solve a worklist of equations, producing the most general unifier.
///
/// Pairs are processed front to back:
///
/// ```text
/// a  = a           drop
/// a  = b           record a := b, rewrite the rest of the worklist
/// F  = a           swap to a = F
/// F(..) = G(..)    names and arities must agree; argument pairs go first
/// a  = F           occurs check, then record a := F and rewrite the rest
/// ```
///
/// Every recorded pair is substituted into the pending work immediately, so
/// the result is already in the order [`Substitution::apply`] expects.
pub fn unify(problems: Vec<(Type, Type)>) -> Result<Substitution, UnifyError> {
    let mut work: VecDeque<(Type, Type)> = problems.into();
    let mut subst = Substitution::empty();

    while let Some((left, right)) = work.pop_front() {
        trace!("unify {left} = {right}");
        match (left, right) {
            (Type::Var(a), Type::Var(b)) if a == b => {}
            (Type::Var(a), Type::Var(b)) => bind(a, Type::Var(b), &mut work, &mut subst),
            (fun @ Type::Fun(..), Type::Var(v)) => work.push_front((Type::Var(v), fun)),
            (Type::Fun(lname, largs), Type::Fun(rname, rargs)) => {
                if lname != rname || largs.len() != rargs.len() {
                    return Err(UnifyError::Mismatch {
                        left: Type::Fun(lname, largs),
                        right: Type::Fun(rname, rargs),
                    });
                }
                for pair in largs.into_iter().zip(rargs).rev() {
                    work.push_front(pair);
                }
            }
            (Type::Var(v), fun) => {
                if fun.occurs(&v) {
                    return Err(UnifyError::OccursCheck { var: v, ty: fun });
                }
                bind(v, fun, &mut work, &mut subst);
            }
        }
    }

    Ok(subst)
}

/// Unify two terms.
pub fn unify_one(left: &Type, right: &Type) -> Result<Substitution, UnifyError> {
    unify(vec![(left.clone(), right.clone())])
}

fn bind(var: TypeVar, ty: Type, work: &mut VecDeque<(Type, Type)>, subst: &mut Substitution) {
    for (l, r) in work.iter_mut() {
        *l = l.substitute(&var, &ty);
        *r = r.substitute(&var, &ty);
    }
    subst.push(var, ty);
}
