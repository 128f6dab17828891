//! # Match expressions
//!
//! A `match` selects a branch by *position*, not by name: after desugaring the
//! scrutinee (a Scott-encoded value) is applied to the branches in the order
//! they are written, and the value picks the continuation at the index of its
//! own constructor. Branches must therefore be written in the constructor
//! declaration order of the matched data type. Nothing checks this.
//!
//! ```text
//! data option = some x | none
//!
//! match o with
//! | some y => y      -- continuation #1, receives the field
//! | none => 0        -- continuation #2
//! end
//!
//! // desugars to
//! o (fun y => y) 0
//! ```

use lachs::Span;

use super::expression::{Expression, Ident};

#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub scrutinee: Expression,
    pub arms: Vec<MatchArm>,
    pub position: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchArm {
    pub pattern: Pattern,
    pub body: Expression,
    pub position: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Pattern {
    /// A bare constructor name: `| none => ...`
    Nullary(Ident),
    /// A constructor with field binders: `| pair a b => ...`
    Constructor { name: Ident, fields: Vec<Ident> },
}

impl Pattern {
    pub fn name(&self) -> &Ident {
        match self {
            Pattern::Nullary(name) => name,
            Pattern::Constructor { name, .. } => name,
        }
    }

    /// Names bound by this pattern, in order
    pub fn binders(&self) -> &[Ident] {
        match self {
            Pattern::Nullary(_) => &[],
            Pattern::Constructor { fields, .. } => fields,
        }
    }
}

impl MatchArm {
    pub fn new(pattern: Pattern, body: Expression) -> Self {
        MatchArm {
            pattern,
            body,
            position: Span::default(),
        }
    }
}
