//! # Surface AST
//!
//! The tree produced by the parser, before desugaring. Every node records the
//! [`Span`](lachs::Span) it was read from; nodes built by hand use
//! `Span::default()`.
//!
//! The surface language has three constructs without runtime meaning of their
//! own, all of which are removed by [`crate::desugar`]:
//!
//! - `data` declarations (compiled to Scott-encoded constructor functions)
//! - `let x = e1 in e2` (compiled to an immediately applied lambda)
//! - `match e with | ctor a b => ... end` (compiled to an application of the
//!   scrutinee to one continuation per branch)

pub mod expression;
pub mod pattern;
pub mod statement;

pub use expression::*;
pub use pattern::*;
pub use statement::*;

/// A parsed program: an ordered sequence of top-level statements.
pub type Program = Vec<Statement>;
