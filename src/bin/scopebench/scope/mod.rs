use std::{collections::HashMap, rc::Rc};

mod error;

pub use error::*;

/// Value bound to a variable. Reads clone the handle, not the string.
pub type Value = Rc<str>;

/// Slot is the resolved address of a binding: how many enclosing scopes to
/// walk up from the reading scope, then which slot to read there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub distance: usize,
    pub index: usize,
}

/// Scope define a lexical scope of variables.
/// Bindings are stored in slots so resolved reads skip the name lookup, the
/// name index is only used by [Scope::resolve].
#[derive(Debug, Default)]
pub struct Scope {
    enclosing: Option<Rc<Scope>>,
    names: HashMap<String, usize>,
    slots: Vec<Value>,
}

impl Scope {
    pub fn global() -> Self {
        Self::default()
    }

    pub fn nested(enclosing: &Rc<Scope>) -> Self {
        Self {
            enclosing: Some(enclosing.clone()),
            ..Default::default()
        }
    }

    /// Number of enclosing scopes.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut scope = self;
        while let Some(enclosing) = scope.enclosing.as_deref() {
            depth += 1;
            scope = enclosing;
        }
        depth
    }

    /// Binds `name` in this scope and returns its slot index. Defining a name
    /// twice in the same scope overwrites the previous value in place.
    pub fn define(&mut self, name: impl Into<String>, value: impl Into<Value>) -> usize {
        let value = value.into();
        let name = name.into();

        if let Some(&index) = self.names.get(&name) {
            self.slots[index] = value;
            return index;
        }

        let index = self.slots.len();
        self.slots.push(value);
        self.names.insert(name, index);
        index
    }

    /// Walks the scope chain outward and returns the address of the nearest
    /// binding named `name`.
    pub fn resolve(&self, name: &str) -> Result<Slot, ScopeError> {
        let mut distance = 0;
        let mut scope = self;
        loop {
            if let Some(&index) = scope.names.get(name) {
                return Ok(Slot { distance, index });
            }

            match scope.enclosing.as_deref() {
                Some(enclosing) => {
                    distance += 1;
                    scope = enclosing;
                }
                None => return Err(ScopeError::Undefined(name.to_owned())),
            }
        }
    }

    pub fn ancestor(&self, distance: usize) -> Result<&Scope, ScopeError> {
        let mut scope = self;
        for _ in 0..distance {
            scope = scope
                .enclosing
                .as_deref()
                .ok_or_else(|| ScopeError::NoAncestor {
                    distance,
                    depth: self.depth(),
                })?;
        }
        Ok(scope)
    }

    pub fn get_at(&self, slot: Slot) -> Result<Value, ScopeError> {
        self.ancestor(slot.distance)?
            .slots
            .get(slot.index)
            .cloned()
            .ok_or(ScopeError::NoSlot(slot))
    }
}
