use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::core::Value;

/// A lexical scope: a mapping from names to values with an optional
/// enclosing parent.
///
/// Environments are shared through `Rc` because function values keep a
/// strong reference to the scope they were defined in. The graph is a DAG:
/// environments only point outward to their parent and functions only point
/// to their capture scope, so no cycles can form and plain reference
/// counting reclaims everything.
#[derive(Debug, Default)]
pub struct Environment {
    store: RefCell<HashMap<String, Value>>,
    outer: Option<Rc<Environment>>,
}

impl Environment {
    /// Creates a fresh top-level environment.
    #[must_use]
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Creates a child environment enclosed by `outer`.
    ///
    /// Lookups that miss locally continue in the parent; writes stay local.
    #[must_use]
    pub fn enclosed(outer: Rc<Self>) -> Rc<Self> {
        Rc::new(Self { store: RefCell::new(HashMap::new()),
                       outer: Some(outer), })
    }

    /// Looks up `name` in this scope, then outward through the parents.
    ///
    /// # Examples
    /// ```
    /// use lumen::interpreter::value::{Environment, Value};
    ///
    /// let outer = Environment::new();
    /// outer.set("x", Value::Integer(1));
    ///
    /// let inner = Environment::enclosed(outer);
    /// assert_eq!(inner.get("x"), Some(Value::Integer(1)));
    /// assert_eq!(inner.get("y"), None);
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        match self.store.borrow().get(name) {
            Some(value) => Some(value.clone()),
            None => self.outer.as_ref().and_then(|outer| outer.get(name)),
        }
    }

    /// Binds `name` in this scope, overwriting any local binding of the
    /// same name. Writes never walk the parent chain.
    pub fn set(&self, name: &str, value: Value) {
        self.store.borrow_mut().insert(name.to_string(), value);
    }
}
