//! # smallml - a tiny let-polymorphic functional language
//!
//! smallml is a small functional calculus with Hindley-Milner type inference,
//! algebraic data types encoded as functions, and a call-by-name interpreter.
//! Programs are run statement by statement against persistent environments,
//! either interactively or as a batch.
//!
//! ## Architecture Overview
//!
//! 1. **Lexer** (`lexer`) - Tokenizes source code using the `lachs` library
//! 2. **Parser** (`parser`) - Builds the surface AST with combinator-based recursive descent
//! 3. **Desugaring** (`desugar`) - Removes `data`, `let` and `match`
//! 4. **Type Checking** (`types`) - Hindley-Milner inference over the core AST
//! 5. **Interpreter** (`interpreter`) - Tree-walking evaluation of core statements
//! 6. **Session** (`session`) - Runs statements through all phases, keeping state between them
//!
//! ```text
//! Source Code (String)
//!     ↓
//! [Lexer] → Token Stream
//!     ↓
//! [Parser] → Surface AST (ast::Program)
//!     ↓
//! [Desugaring] → Core statements (core::CoreStatement)
//!     ↓
//! [Type Checker] → Elaborated statement + type scheme
//!     ↓
//! [Interpreter] → Runtime value (interpreter::RValue)
//! ```
//!
//! ## Key Design Decisions
//!
//! ### Data types are functions
//! A `data` declaration defines one function per constructor. A constructed
//! value takes one continuation per constructor and calls the one matching its
//! own constructor with the stored fields. `match` applies the scrutinee to
//! its branches in the order they are written, so branches must follow the
//! declaration order.
//!
//! ### Polymorphism only at the top level
//! `val` bindings are generalized; lambda parameters and `let` bindings are not.
//!
//! ### Recursion through `fix`
//! There is no recursive binding form. The `fix` builtin is always available
//! at run time, but it only has a type when [`Config::fixpoint`] is set.
//!
//! ## Example Program
//!
//! ```text
//! data option = some x | none;
//! val get = fun o => match o with | some y => y | none => 0 end;
//! get (some 5)
//! ```
//!
//! ## Getting Started
//!
//! ```
//! use smallml::{Config, Session};
//!
//! let mut session = Session::new(Config::default());
//! let outcomes = session.run_source("val id = fun x => x; id 1").unwrap();
//! assert_eq!(outcomes[1].report(), "1 : int");
//! ```

pub mod ast;
pub mod config;
pub mod core;
pub mod desugar;
pub mod error;
pub mod fmt;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod repl;
pub mod session;
pub mod types;

pub use config::Config;
pub use error::Error;
pub use session::{Outcome, Session};
