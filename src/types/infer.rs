//! # Type inference
//!
//! Unification-based inference over the core calculus with let-polymorphism
//! at top-level `val` bindings.
//!
//! Every expression is inferred to a triple of type, elaborated expression and
//! substitution. Sub-expressions are inferred independently against the same
//! environment; their substitutions are then turned back into equations and
//! solved together with the new constraint in a single [`unify`] call:
//!
//! ```text
//! f a              S_f ++ S_a ++ [T_f = T_a -> r]                   : r
//! if c then t else e
//!                  S_c ++ [T_c = bool] ++ S_t ++ S_e ++ [T_t = T_e]  : T_t
//! fun x => b       x : annotation or fresh                          : S_b(T_x -> T_b)
//! ```
//!
//! `let` has already been desugared into an applied lambda by the time a term
//! reaches this module, so a `let`-bound name is a lambda parameter and stays
//! monomorphic. Only `val` generalizes.

use tracing::debug;

use super::env::TypeEnv;
use super::error::TypeError;
use super::fresh::FreshVars;
use super::subst::Substitution;
use super::ty::{Type, TypeScheme, TypeVar};
use super::unify::unify;
use crate::config::Config;
use crate::core::*;

type Inferred = (Type, CoreExpr, Substitution);

/// Incremental type checker.
///
/// Owns the persistent type environment and the fresh-variable context. The
/// environment only changes when a statement checks successfully.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeChecker {
    env: TypeEnv,
    fresh: FreshVars,
}

impl TypeChecker {
    pub fn new(config: &Config) -> Self {
        TypeChecker {
            env: global_env(config),
            fresh: FreshVars::new(),
        }
    }

    pub fn env(&self) -> &TypeEnv {
        &self.env
    }

    pub fn lookup(&self, name: &str) -> Option<&TypeScheme> {
        self.env.lookup(name)
    }

    /// Check one core statement, returning its elaborated form and scheme.
    pub fn check_statement(
        &mut self,
        stmt: &CoreStatement,
    ) -> Result<(CoreStatement, TypeScheme), TypeError> {
        self.fresh.reset();
        match stmt {
            CoreStatement::Val(val) => {
                let env = self.env.clone();
                let (ty, value, subst) = self.infer(&env, &val.value)?;
                let ty = subst.apply(&ty);
                let scheme = TypeChecker::generalize(&ty, &self.env);
                debug!("val {} : {}", val.name.value, scheme);

                let mut elaborated = CoreStatement::Val(CoreVal {
                    name: val.name.clone(),
                    value,
                    position: val.position.clone(),
                });
                elaborated.apply_subst(&subst);
                self.env.insert(val.name.value.clone(), scheme.clone());
                Ok((elaborated, scheme))
            }
            CoreStatement::Expression(expr) => {
                let env = self.env.clone();
                let (ty, value, subst) = self.infer(&env, expr)?;
                let scheme = TypeScheme::monomorphic(subst.apply(&ty));
                debug!("expression : {}", scheme);

                let mut elaborated = CoreStatement::Expression(value);
                elaborated.apply_subst(&subst);
                Ok((elaborated, scheme))
            }
        }
    }

    /// Quantify every variable of `ty` that is not free in `env`.
    pub fn generalize(ty: &Type, env: &TypeEnv) -> TypeScheme {
        let free_in_env = env.free_type_vars();
        let mut vars: Vec<TypeVar> = ty
            .vars()
            .into_iter()
            .filter(|v| !free_in_env.contains(v))
            .collect();
        vars.sort();
        TypeScheme::polymorphic(vars, ty.clone())
    }

    fn infer(&mut self, env: &TypeEnv, expr: &CoreExpr) -> Result<Inferred, TypeError> {
        match expr {
            CoreExpr::Unit(_) => Ok((Type::unit(), expr.clone(), Substitution::empty())),
            CoreExpr::Integer(_) => Ok((Type::int(), expr.clone(), Substitution::empty())),
            CoreExpr::String(_) => Ok((Type::string(), expr.clone(), Substitution::empty())),
            CoreExpr::Boolean(_) => Ok((Type::bool(), expr.clone(), Substitution::empty())),

            CoreExpr::Ident(ident) => match env.lookup(&ident.value) {
                Some(scheme) => Ok((
                    scheme.instantiate(&mut self.fresh),
                    expr.clone(),
                    Substitution::empty(),
                )),
                None => Err(TypeError::unbound_variable(
                    ident.value.clone(),
                    ident.position.clone(),
                )),
            },

            CoreExpr::Lambda(lambda) => self.infer_lambda(env, lambda),
            CoreExpr::Application(app) => self.infer_application(env, expr, app),
            CoreExpr::IfThenElse(ite) => self.infer_if(env, expr, ite),
        }
    }

    fn infer_lambda(&mut self, env: &TypeEnv, lambda: &CoreLambda) -> Result<Inferred, TypeError> {
        let param_ty = match &lambda.typ {
            Some(annotation) => annotation.clone(),
            None => Type::Var(self.fresh.fresh()),
        };
        let inner = env.extend(
            lambda.param.value.clone(),
            TypeScheme::monomorphic(param_ty.clone()),
        );
        let (body_ty, body, subst) = self.infer(&inner, &lambda.body)?;
        let param_ty = subst.apply(&param_ty);
        let ty = Type::func(param_ty.clone(), subst.apply(&body_ty));

        let elaborated = CoreExpr::Lambda(CoreLambda {
            param: lambda.param.clone(),
            typ: Some(param_ty),
            body: Box::new(body),
            position: lambda.position.clone(),
        });
        Ok((ty, elaborated, subst))
    }

    fn infer_application(
        &mut self,
        env: &TypeEnv,
        expr: &CoreExpr,
        app: &CoreApplication,
    ) -> Result<Inferred, TypeError> {
        let (func_ty, func, func_subst) = self.infer(env, &app.func)?;
        let (arg_ty, arg, arg_subst) = self.infer(env, &app.arg)?;
        let result = Type::Var(self.fresh.fresh());
        let expected = Type::func(arg_ty, result.clone());

        let mut problems = equations(func_subst);
        problems.extend(equations(arg_subst));
        problems.push((func_ty, expected));
        let subst = unify(problems).map_err(|e| {
            TypeError::unification(e, expr.to_string(), app.position.clone())
        })?;

        let ty = subst.apply(&result);
        let elaborated = CoreExpr::Application(CoreApplication {
            func: Box::new(func),
            arg: Box::new(arg),
            position: app.position.clone(),
        });
        Ok((ty, elaborated, subst))
    }

    fn infer_if(
        &mut self,
        env: &TypeEnv,
        expr: &CoreExpr,
        ite: &CoreIfThenElse,
    ) -> Result<Inferred, TypeError> {
        let (cond_ty, condition, cond_subst) = self.infer(env, &ite.condition)?;
        let (then_ty, then_expr, then_subst) = self.infer(env, &ite.then_expr)?;
        let (else_ty, else_expr, else_subst) = self.infer(env, &ite.else_expr)?;

        let mut problems = equations(cond_subst);
        problems.push((cond_ty, Type::bool()));
        problems.extend(equations(then_subst));
        problems.extend(equations(else_subst));
        problems.push((then_ty.clone(), else_ty));
        let subst = unify(problems).map_err(|e| {
            TypeError::unification(e, expr.to_string(), ite.position.clone())
        })?;

        let ty = subst.apply(&then_ty);
        let elaborated = CoreExpr::IfThenElse(CoreIfThenElse {
            condition: Box::new(condition),
            then_expr: Box::new(then_expr),
            else_expr: Box::new(else_expr),
            position: ite.position.clone(),
        });
        Ok((ty, elaborated, subst))
    }
}

fn equations(subst: Substitution) -> Vec<(Type, Type)> {
    subst
        .0
        .into_iter()
        .map(|(var, ty)| (Type::Var(var), ty))
        .collect()
}

/// Schemes of the builtins. `fix` is only visible with `Config::fixpoint`.
fn global_env(config: &Config) -> TypeEnv {
    let a = TypeVar::new(0);
    let b = TypeVar::new(1);
    let ta = Type::Var(a);
    let tb = Type::Var(b);
    let int_op = Type::curried(vec![Type::int(), Type::int()], Type::int());

    let mut bindings = vec![
        (
            "unify",
            TypeScheme::polymorphic(vec![a], Type::curried(vec![ta.clone(), ta.clone()], ta.clone())),
        ),
        (
            "eq",
            TypeScheme::polymorphic(
                vec![a],
                Type::curried(vec![ta.clone(), ta.clone()], Type::bool()),
            ),
        ),
        ("add", TypeScheme::monomorphic(int_op.clone())),
        ("sub", TypeScheme::monomorphic(int_op.clone())),
        ("mul", TypeScheme::monomorphic(int_op)),
        ("not", TypeScheme::monomorphic(Type::func(Type::bool(), Type::bool()))),
        (
            "puts",
            TypeScheme::polymorphic(vec![a], Type::func(ta.clone(), Type::unit())),
        ),
    ];

    if config.fixpoint {
        let step = Type::func(ta.clone(), tb.clone());
        let functional = Type::curried(vec![step.clone(), ta.clone()], tb.clone());
        bindings.push((
            "fix",
            TypeScheme::polymorphic(vec![a, b], Type::curried(vec![functional, ta], tb)),
        ));
    }

    TypeEnv::with_bindings(
        bindings
            .into_iter()
            .map(|(name, scheme)| (name.to_string(), scheme))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use lachs::Span;

    use super::*;
    use crate::types::UnifyError;

    fn int_expr(value: i128) -> CoreExpr {
        CoreExpr::Integer(CoreInteger {
            value,
            position: Span::default(),
        })
    }

    fn bool_expr(value: bool) -> CoreExpr {
        CoreExpr::Boolean(CoreBoolean {
            value,
            position: Span::default(),
        })
    }

    fn ident_expr(name: &str) -> CoreExpr {
        CoreExpr::ident(name, Span::default())
    }

    fn lambda_expr(param: &str, body: CoreExpr) -> CoreExpr {
        CoreExpr::lambda(
            CoreIdent::new(param, Span::default()),
            None,
            body,
            Span::default(),
        )
    }

    fn call_expr(func: CoreExpr, arg: CoreExpr) -> CoreExpr {
        CoreExpr::apply(func, arg, Span::default())
    }

    fn if_expr(condition: CoreExpr, then_expr: CoreExpr, else_expr: CoreExpr) -> CoreExpr {
        CoreExpr::IfThenElse(CoreIfThenElse {
            condition: Box::new(condition),
            then_expr: Box::new(then_expr),
            else_expr: Box::new(else_expr),
            position: Span::default(),
        })
    }

    fn val(name: &str, value: CoreExpr) -> CoreStatement {
        CoreStatement::Val(CoreVal {
            name: CoreIdent::new(name, Span::default()),
            value,
            position: Span::default(),
        })
    }

    fn check_expr(checker: &mut TypeChecker, expr: CoreExpr) -> Result<TypeScheme, TypeError> {
        checker
            .check_statement(&CoreStatement::Expression(expr))
            .map(|(_, scheme)| scheme)
    }

    #[test]
    fn test_infer_literals() {
        let mut checker = TypeChecker::new(&Config::default());
        assert_eq!(check_expr(&mut checker, int_expr(1)).unwrap().ty, Type::int());
        assert_eq!(
            check_expr(&mut checker, bool_expr(true)).unwrap().ty,
            Type::bool()
        );
    }

    #[test]
    fn test_infer_unbound_variable() {
        let mut checker = TypeChecker::new(&Config::default());
        let err = check_expr(&mut checker, ident_expr("nope")).unwrap_err();
        assert_eq!(err, TypeError::unbound_variable("nope", Span::default()));
    }

    #[test]
    fn test_infer_identity_function() {
        let mut checker = TypeChecker::new(&Config::default());
        let (_, scheme) = checker
            .check_statement(&val("id", lambda_expr("x", ident_expr("x"))))
            .unwrap();
        assert_eq!(scheme.to_string(), "forall a . a -> a");
    }

    #[test]
    fn test_val_is_polymorphic() {
        let mut checker = TypeChecker::new(&Config::default());
        checker
            .check_statement(&val("id", lambda_expr("x", ident_expr("x"))))
            .unwrap();
        let on_int = check_expr(&mut checker, call_expr(ident_expr("id"), int_expr(1))).unwrap();
        let on_bool =
            check_expr(&mut checker, call_expr(ident_expr("id"), bool_expr(true))).unwrap();
        assert_eq!(on_int.ty, Type::int());
        assert_eq!(on_bool.ty, Type::bool());
    }

    #[test]
    fn test_lambda_bound_name_is_monomorphic() {
        // (fun id => (fun a => id true) (id 1)) (fun x => x)
        let body = call_expr(
            lambda_expr("a", call_expr(ident_expr("id"), bool_expr(true))),
            call_expr(ident_expr("id"), int_expr(1)),
        );
        let expr = call_expr(lambda_expr("id", body), lambda_expr("x", ident_expr("x")));
        let mut checker = TypeChecker::new(&Config::default());
        let err = check_expr(&mut checker, expr).unwrap_err();
        assert!(matches!(
            err,
            TypeError::Unification {
                source: UnifyError::Mismatch { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_if_condition_constrains_parameter() {
        let expr = lambda_expr("x", if_expr(ident_expr("x"), int_expr(1), int_expr(2)));
        let mut checker = TypeChecker::new(&Config::default());
        let scheme = check_expr(&mut checker, expr).unwrap();
        assert_eq!(scheme.to_string(), "bool -> int");
    }

    #[test]
    fn test_if_branches_must_agree() {
        let expr = if_expr(bool_expr(true), int_expr(1), bool_expr(false));
        let mut checker = TypeChecker::new(&Config::default());
        assert!(check_expr(&mut checker, expr).is_err());
    }

    #[test]
    fn test_if_condition_must_be_bool() {
        let expr = if_expr(int_expr(1), int_expr(1), int_expr(2));
        let mut checker = TypeChecker::new(&Config::default());
        assert!(check_expr(&mut checker, expr).is_err());
    }

    #[test]
    fn test_builtin_application() {
        let mut checker = TypeChecker::new(&Config::default());
        let expr = call_expr(call_expr(ident_expr("add"), int_expr(1)), int_expr(2));
        assert_eq!(check_expr(&mut checker, expr).unwrap().ty, Type::int());

        let partial = call_expr(ident_expr("eq"), int_expr(1));
        assert_eq!(
            check_expr(&mut checker, partial).unwrap().to_string(),
            "int -> bool"
        );
    }

    #[test]
    fn test_fix_requires_config() {
        let mut checker = TypeChecker::new(&Config::default());
        assert!(check_expr(&mut checker, ident_expr("fix")).is_err());

        let mut checker = TypeChecker::new(&Config {
            fixpoint: true,
            ..Config::default()
        });
        assert_eq!(
            check_expr(&mut checker, ident_expr("fix")).unwrap().to_string(),
            "((a -> b) -> a -> b) -> a -> b"
        );
    }

    #[test]
    fn test_each_statement_starts_at_a() {
        let mut checker = TypeChecker::new(&Config::default());
        let (_, first) = checker
            .check_statement(&val("f", lambda_expr("x", ident_expr("x"))))
            .unwrap();
        let (_, second) = checker
            .check_statement(&val("g", lambda_expr("y", ident_expr("y"))))
            .unwrap();
        assert_eq!(first.to_string(), "forall a . a -> a");
        assert_eq!(second.to_string(), "forall a . a -> a");
    }

    #[test]
    fn test_failed_statement_leaves_env_untouched() {
        let mut checker = TypeChecker::new(&Config::default());
        let before = checker.env().clone();
        let bad = val("bad", call_expr(ident_expr("not"), int_expr(1)));
        assert!(checker.check_statement(&bad).is_err());
        assert_eq!(checker.env(), &before);
        assert!(checker.lookup("bad").is_none());
    }

    #[test]
    fn test_elaboration_annotates_lambdas() {
        let mut checker = TypeChecker::new(&Config::default());
        let expr = lambda_expr("n", call_expr(call_expr(ident_expr("add"), ident_expr("n")), int_expr(1)));
        let (elaborated, _) = checker.check_statement(&val("inc", expr)).unwrap();
        let CoreStatement::Val(val) = elaborated else {
            panic!("expected val");
        };
        let CoreExpr::Lambda(lambda) = val.value else {
            panic!("expected lambda");
        };
        assert_eq!(lambda.typ, Some(Type::int()));
    }

    #[test]
    fn test_annotation_is_respected() {
        let mut checker = TypeChecker::new(&Config::default());
        let expr = CoreExpr::lambda(
            CoreIdent::new("x", Span::default()),
            Some(Type::int()),
            ident_expr("x"),
            Span::default(),
        );
        assert_eq!(check_expr(&mut checker, expr).unwrap().to_string(), "int -> int");
    }

    #[test]
    fn test_generalize_excludes_env_vars() {
        let monomorphic = TypeVar::new(0);
        let env = TypeEnv::with_bindings(vec![(
            "x".to_string(),
            TypeScheme::monomorphic(Type::Var(monomorphic)),
        )]);
        let ty = Type::func(Type::var(0), Type::var(1));
        let scheme = TypeChecker::generalize(&ty, &env);
        assert_eq!(scheme.vars, vec![TypeVar::new(1)]);
    }

    #[test]
    fn test_generalize_sorts_vars() {
        let ty = Type::func(Type::var(2), Type::var(0));
        let scheme = TypeChecker::generalize(&ty, &TypeEnv::empty());
        assert_eq!(scheme.vars, vec![TypeVar::new(0), TypeVar::new(2)]);
    }

    #[test]
    fn test_occurs_check_is_reported() {
        // fun x => x x
        let expr = lambda_expr("x", call_expr(ident_expr("x"), ident_expr("x")));
        let mut checker = TypeChecker::new(&Config::default());
        let err = check_expr(&mut checker, expr).unwrap_err();
        assert!(matches!(
            err,
            TypeError::Unification {
                source: UnifyError::OccursCheck { .. },
                ..
            }
        ));
    }
}
