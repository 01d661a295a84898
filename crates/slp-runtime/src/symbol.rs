//! Persistent symbol table
//!
//! A table is a chain of single-identifier bindings, newest first. Tables are
//! never mutated: [`SymbolTable::update`] returns a new table whose tail is the
//! old one, so every earlier version stays valid and shares its bindings with
//! the tables derived from it.

use crate::value::{EvalResult, RuntimeError, Value};
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

/// Persistent identifier -> integer table
///
/// Cloning is a reference-count bump.
#[derive(Clone, Default)]
pub struct SymbolTable {
    /// `None` is the empty table
    head: Option<Rc<Binding>>,
}

/// One link of the binding chain
struct Binding {
    name: String,
    value: Value,
    /// The table before this binding was added
    rest: SymbolTable,
}

impl SymbolTable {
    /// Create the empty table
    pub fn new() -> Self {
        Self { head: None }
    }

    /// Look up the newest binding for `name`
    pub fn lookup(&self, name: &str) -> EvalResult<Value> {
        self.iter()
            .find(|(bound, _)| *bound == name)
            .map(|(_, value)| value)
            .ok_or_else(|| RuntimeError::unbound(name))
    }

    /// Return a new table with `name` bound to `value` in front of this one
    pub fn update(&self, name: impl Into<String>, value: Value) -> SymbolTable {
        SymbolTable {
            head: Some(Rc::new(Binding {
                name: name.into(),
                value,
                rest: self.clone(),
            })),
        }
    }

    /// Whether any binding for `name` exists
    pub fn contains(&self, name: &str) -> bool {
        self.iter().any(|(bound, _)| bound == name)
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Number of bindings in the chain, shadowed ones included
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Iterate over all bindings, newest first
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Bindings that a lookup can reach, newest first
    pub fn visible(&self) -> Vec<(&str, Value)> {
        let mut seen = HashSet::new();
        self.iter().filter(|(name, _)| seen.insert(*name)).collect()
    }

    /// Whether both handles refer to the same table version
    pub fn ptr_eq(&self, other: &SymbolTable) -> bool {
        match (&self.head, &other.head) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl Drop for SymbolTable {
    // Unlink iteratively; a recursive drop of a long chain overflows the stack
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(node) = next {
            match Rc::try_unwrap(node) {
                Ok(mut binding) => next = binding.rest.head.take(),
                Err(_) => break,
            }
        }
    }
}

/// Iterator over `(name, value)` bindings, newest first
pub struct Iter<'a> {
    next: Option<&'a Binding>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, Value);

    fn next(&mut self) -> Option<Self::Item> {
        let binding = self.next?;
        self.next = binding.rest.head.as_deref();
        Some((binding.name.as_str(), binding.value))
    }
}

impl fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (name, value)) in self.visible().into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", name, value)?;
        }
        f.write_str("}")
    }
}

impl fmt::Debug for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
