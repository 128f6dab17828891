use lachs::Span;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DesugarError {
    /// Surface form with no core counterpart
    #[error("desugar error : `{node}' is not supported, use `val'")]
    Unsupported { node: &'static str, span: Span },

    #[error("desugar error : match without branches")]
    EmptyMatch { span: Span },

    #[error("desugar error : data type `{name}' has no constructors")]
    EmptyDataType { name: String, span: Span },
}

impl DesugarError {
    pub fn span(&self) -> &Span {
        match self {
            DesugarError::Unsupported { span, .. }
            | DesugarError::EmptyMatch { span }
            | DesugarError::EmptyDataType { span, .. } => span,
        }
    }
}
