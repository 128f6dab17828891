use thiserror::Error;

use crate::desugar::DesugarError;
use crate::interpreter::RuntimeError;
use crate::parser::ParseError;
use crate::types::TypeError;

/// Any failure while running a statement, tagged with the phase it came from.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Desugar(#[from] DesugarError),

    #[error(transparent)]
    Type(#[from] TypeError),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Message with a source excerpt where the phase knows the location.
    pub fn report(&self) -> String {
        match self {
            Error::Parse(err) => err.report(),
            Error::Type(err) => err.report(),
            Error::Desugar(err) => with_excerpt(err.span(), &err.to_string()),
            Error::Runtime(err) => match err.span() {
                Some(span) => with_excerpt(span, &err.to_string()),
                None => err.to_string(),
            },
        }
    }
}

fn with_excerpt(span: &lachs::Span, msg: &str) -> String {
    if span.source.is_empty() {
        msg.to_string()
    } else {
        span.to_string(msg)
    }
}
