use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use crate::core::CoreExpr;

use super::value::{Builtin, RValue};

/// What a name is bound to at runtime
#[derive(Debug, Clone)]
pub enum Binding {
    /// Unevaluated `val` body, evaluated again on every lookup
    Expr(Rc<CoreExpr>),
    /// Already evaluated lambda argument or builtin
    Value(RValue),
}

#[derive(Debug)]
struct Frame {
    name: String,
    value: RValue,
    parent: Option<Rc<Frame>>,
}

type Globals = Rc<RefCell<HashMap<String, Binding>>>;

/// Copy of the global table taken by [`Scope::save`].
#[derive(Debug, Clone)]
pub struct SavedGlobals(HashMap<String, Binding>);

/// Lexical scope: a chain of parameter frames in front of the shared global
/// table.
///
/// Cloning a scope is cheap and shares the globals, so a closure created
/// early still sees `val`s defined after it.
#[derive(Debug, Clone)]
pub struct Scope {
    globals: Globals,
    frame: Option<Rc<Frame>>,
}

impl Scope {
    /// Fresh global scope holding the builtins.
    pub fn global() -> Self {
        let globals = Builtin::ALL
            .iter()
            .map(|b| (b.name().to_string(), Binding::Value(RValue::builtin(*b))))
            .collect::<HashMap<_, _>>();
        Scope {
            globals: Rc::new(RefCell::new(globals)),
            frame: None,
        }
    }

    /// The global scope this scope ends in.
    pub fn globals(&self) -> Scope {
        Scope {
            globals: Rc::clone(&self.globals),
            frame: None,
        }
    }

    /// Resolve a name by searching from innermost frame to the globals
    pub fn resolve(&self, name: &str) -> Option<Binding> {
        let mut frame = self.frame.as_deref();
        while let Some(current) = frame {
            if current.name == name {
                return Some(Binding::Value(current.value.clone()));
            }
            frame = current.parent.as_deref();
        }
        self.globals.borrow().get(name).cloned()
    }

    /// New scope with `name` bound in front of this one.
    pub fn bind(&self, name: impl ToString, value: RValue) -> Scope {
        Scope {
            globals: Rc::clone(&self.globals),
            frame: Some(Rc::new(Frame {
                name: name.to_string(),
                value,
                parent: self.frame.clone(),
            })),
        }
    }

    /// Add or replace a global binding in place.
    pub fn define(&self, name: impl ToString, expr: CoreExpr) {
        self.globals
            .borrow_mut()
            .insert(name.to_string(), Binding::Expr(Rc::new(expr)));
    }

    pub fn save(&self) -> SavedGlobals {
        SavedGlobals(self.globals.borrow().clone())
    }

    /// Put back the globals of an earlier [`Scope::save`]. Every scope
    /// sharing this table sees the restored bindings.
    pub fn restore(&self, saved: SavedGlobals) {
        *self.globals.borrow_mut() = saved.0;
    }

    /// Rendered view of the globals, for comparing environments.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.globals
            .borrow()
            .iter()
            .map(|(name, binding)| {
                let rendered = match binding {
                    Binding::Expr(expr) => expr.to_string(),
                    Binding::Value(value) => value.to_string(),
                };
                (name.clone(), rendered)
            })
            .collect()
    }
}
