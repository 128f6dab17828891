//! Line-oriented interactive loop over a [`Session`].

use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::debug;

use crate::config::Config;
use crate::error::Error;
use crate::parser::parse;
use crate::session::{Outcome, Session};

pub const PROMPT: &str = "> ";

/// Read statements until `exit` or end of input. Errors are printed and the
/// session carries on with the environments it had before the failing line.
pub fn run(config: Config) -> Result<()> {
    let mut editor = DefaultEditor::new()?;
    let mut session = Session::new(config);

    loop {
        let line = match editor.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "exit" {
            break;
        }
        editor.add_history_entry(line)?;

        for report in eval_line(&mut session, line) {
            println!("{report}");
        }
    }

    debug!("leaving repl");
    Ok(())
}

/// The lines printed for one input line.
///
/// Statements before a failing one keep their effects and their reports.
pub fn eval_line(session: &mut Session, line: &str) -> Vec<String> {
    let program = match parse(line) {
        Ok(program) => program,
        Err(err) => return vec![error_line(&Error::from(err))],
    };

    let mut lines = Vec::new();
    for stmt in program {
        match session.run_statement(stmt) {
            Ok(outcomes) => lines.extend(outcomes.iter().map(Outcome::report)),
            Err(err) => {
                lines.push(error_line(&err));
                break;
            }
        }
    }
    lines
}

fn error_line(err: &Error) -> String {
    format!("Error : {}", err.report())
}
