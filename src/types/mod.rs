pub mod env;
pub mod error;
pub mod fresh;
pub mod infer;
pub mod subst;
pub mod ty;
pub mod unify;
pub mod validate;

pub use env::TypeEnv;
pub use error::TypeError;
pub use fresh::FreshVars;
pub use infer::TypeChecker;
pub use subst::Substitution;
pub use ty::{Type, TypeScheme, TypeVar};
pub use unify::{UnifyError, unify, unify_one};
pub use validate::typecheck_program;
