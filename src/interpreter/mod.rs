//! # Interpreter
//!
//! Evaluates core statements against a name-keyed environment.
//!
//! - A `val` stores its expression unevaluated. Every reference evaluates it
//!   again in the global scope, so top-level names behave call-by-name.
//! - Lambda parameters hold values; arguments are evaluated before the call.
//! - Recursion is only available through the `fix` builtin, which is callable
//!   even when the type checker does not know its type.

mod builtins;
mod error;
mod eval;
mod output;
mod scope;
mod value;

pub use error::RuntimeError;
pub use eval::Interpreter;
pub use output::Capture;
pub use scope::{Binding, SavedGlobals, Scope};
pub use value::{Builtin, Closure, RValue};
