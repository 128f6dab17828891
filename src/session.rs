//! # Session driver
//!
//! A [`Session`] owns the two environments that persist between statements:
//! the type environment of the [`TypeChecker`] and the value scope of the
//! [`Interpreter`]. Each surface statement runs through
//! desugar -> typecheck -> evaluate, one core statement at a time.
//!
//! A failing statement leaves both environments as they were after the last
//! core statement that succeeded.

use std::collections::BTreeMap;
use std::io::Write;

use tracing::debug;

use crate::ast::Statement;
use crate::config::Config;
use crate::core::CoreStatement;
use crate::desugar::{desugar_program, desugar_statement};
use crate::error::Error;
use crate::interpreter::{Interpreter, RValue};
use crate::parser::parse;
use crate::types::{TypeChecker, TypeEnv, TypeScheme};

/// The result of one core statement: its elaborated form, its type and,
/// for expressions, the value it evaluated to.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub statement: CoreStatement,
    pub scheme: TypeScheme,
    pub value: Option<RValue>,
}

impl Outcome {
    /// The line printed for this statement: bindings and functions show the
    /// elaborated statement, everything else shows its value.
    pub fn report(&self) -> String {
        match &self.value {
            Some(value) if !value.is_callable() => format!("{value} : {}", self.scheme),
            _ => format!("{} : {}", self.statement, self.scheme),
        }
    }
}

pub struct Session {
    checker: TypeChecker,
    interpreter: Interpreter,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Session {
            checker: TypeChecker::new(&config),
            interpreter: Interpreter::new(&config),
        }
    }

    /// A session whose `puts` output goes to `output` instead of stdout.
    pub fn with_output(config: Config, output: Box<dyn Write>) -> Self {
        Session {
            checker: TypeChecker::new(&config),
            interpreter: Interpreter::with_output(&config, output),
        }
    }

    pub fn type_env(&self) -> &TypeEnv {
        self.checker.env()
    }

    /// Printable view of the value environment.
    pub fn value_env(&self) -> BTreeMap<String, String> {
        self.interpreter.scope().snapshot()
    }

    /// Run one surface statement. A `data` declaration yields one outcome per
    /// constructor.
    pub fn run_statement(&mut self, stmt: Statement) -> Result<Vec<Outcome>, Error> {
        let core = desugar_statement(stmt)?;
        debug!("desugared into {} core statements", core.len());
        core.iter().map(|stmt| self.run_core(stmt)).collect()
    }

    /// Run every statement of a source line, stopping at the first error.
    pub fn run_source(&mut self, source: &str) -> Result<Vec<Outcome>, Error> {
        let program = parse(source)?;
        let mut outcomes = Vec::new();
        for stmt in program {
            outcomes.extend(self.run_statement(stmt)?);
        }
        Ok(outcomes)
    }

    /// Run a whole program as a batch: the program is type checked as a unit
    /// before anything is evaluated. On any error both environments are put
    /// back as they were before the call, so no partial result remains.
    pub fn run_program(&mut self, source: &str) -> Result<Vec<Outcome>, Error> {
        let core = desugar_program(parse(source)?)?;
        let checker = self.checker.clone();
        let globals = self.interpreter.scope().save();

        let checked = self.checker.check_program(&core)?;
        debug!("program type checked, evaluating {} statements", checked.len());

        let mut outcomes = Vec::with_capacity(checked.len());
        for (statement, scheme) in checked {
            match self.interpreter.eval_statement(&statement) {
                Ok(value) => outcomes.push(Outcome {
                    statement,
                    scheme,
                    value,
                }),
                Err(err) => {
                    debug!("rolling back batch after runtime error");
                    self.checker = checker;
                    self.interpreter.scope().restore(globals);
                    return Err(err.into());
                }
            }
        }
        Ok(outcomes)
    }

    fn run_core(&mut self, stmt: &CoreStatement) -> Result<Outcome, Error> {
        let (statement, scheme) = self.checker.check_statement(stmt)?;
        debug!("{statement} : {scheme}");
        let value = self.interpreter.eval_statement(&statement)?;
        Ok(Outcome {
            statement,
            scheme,
            value,
        })
    }
}
