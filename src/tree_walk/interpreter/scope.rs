use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::easel::Value;

/// One lexical context's bindings.
///
/// A `Scope` is a shared handle over its map: `Clone` aliases the same
/// bindings, which is what function values hold so that a sketch defined
/// before its callees still sees them at call time. The value-copy the
/// language performs at every function call and `for`-loop entry goes
/// through [`Scope::duplicate`] instead.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    bindings: Rc<RefCell<HashMap<String, Value>>>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh scope holding a copy of every current binding. Mutations of
    /// the copy are invisible to the original and vice versa.
    pub fn duplicate(&self) -> Self {
        Self {
            bindings: Rc::new(RefCell::new(self.bindings.borrow().clone())),
        }
    }

    pub fn get(&self, name: &str) -> Option<Value> {
        self.bindings.borrow().get(name).cloned()
    }

    /// Binds `name`, overwriting any existing binding.
    pub fn put(&self, name: impl Into<String>, value: Value) {
        self.bindings.borrow_mut().insert(name.into(), value);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.borrow().contains_key(name)
    }

    /// Whether two handles alias the same bindings.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.bindings, &other.bindings)
    }
}
