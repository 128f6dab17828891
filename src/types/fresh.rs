use super::ty::TypeVar;

/// Source of fresh type variables.
///
/// Reset to `a` at the start of every top-level statement so each reported
/// type starts its variable names from the beginning of the alphabet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FreshVars {
    next: usize,
}

impl FreshVars {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fresh(&mut self) -> TypeVar {
        let var = TypeVar::new(self.next);
        self.next += 1;
        var
    }

    pub fn reset(&mut self) {
        self.next = 0;
    }
}
