use tracing::debug;

use super::error::TypeError;
use super::infer::TypeChecker;
use super::ty::TypeScheme;
use crate::config::Config;
use crate::core::CoreStatement;

/// Check a whole program against a fresh global environment.
///
/// Stops at the first error and returns no partial result.
pub fn typecheck_program(
    stmts: &[CoreStatement],
    config: &Config,
) -> Result<Vec<(CoreStatement, TypeScheme)>, TypeError> {
    let mut checker = TypeChecker::new(config);
    checker.check_program(stmts)
}

impl TypeChecker {
    /// Check `stmts` in order as one unit.
    ///
    /// Works on a copy of the checker and only commits the extended
    /// environment when every statement succeeds.
    pub fn check_program(
        &mut self,
        stmts: &[CoreStatement],
    ) -> Result<Vec<(CoreStatement, TypeScheme)>, TypeError> {
        let mut scratch = self.clone();
        let checked = stmts
            .iter()
            .map(|stmt| scratch.check_statement(stmt))
            .collect::<Result<Vec<_>, _>>()?;
        debug!("checked {} statements", checked.len());
        *self = scratch;
        Ok(checked)
    }
}

#[cfg(test)]
mod tests {
    use lachs::Span;

    use super::*;
    use crate::core::{CoreExpr, CoreIdent, CoreVal};

    fn val(name: &str, value: CoreExpr) -> CoreStatement {
        CoreStatement::Val(CoreVal {
            name: CoreIdent::new(name, Span::default()),
            value,
            position: Span::default(),
        })
    }

    #[test]
    fn test_program_checks_in_order() {
        let stmts = vec![
            val("n", CoreExpr::ident("add", Span::default())),
            CoreStatement::Expression(CoreExpr::ident("n", Span::default())),
        ];
        let checked = typecheck_program(&stmts, &Config::default()).unwrap();
        assert_eq!(checked.len(), 2);
        assert_eq!(checked[1].1.to_string(), "int -> int -> int");
    }

    #[test]
    fn test_failure_commits_nothing() {
        let mut checker = TypeChecker::new(&Config::default());
        let before = checker.clone();
        let stmts = vec![
            val("f", CoreExpr::ident("not", Span::default())),
            CoreStatement::Expression(CoreExpr::ident("missing", Span::default())),
        ];
        let err = checker.check_program(&stmts).unwrap_err();
        assert!(matches!(err, TypeError::UnboundVariable { ref name, .. } if name == "missing"));
        assert_eq!(checker, before);
        assert!(checker.lookup("f").is_none());
    }
}
