use std::collections::{hash_map::Entry, HashMap};

use log::trace;

use crate::errors::errors::ScopeError;

/// One lexical scope: the names it defines plus a borrowed link to the scope
/// it is nested in.
///
/// `V` is whatever the consumer resolves a name to (a value handle, a stack
/// slot) and `T` the declared type it records next to it. A child borrows its
/// parent, so it can never outlive the construct that created it, and the
/// parent cannot be changed while a child is looking through it.
#[derive(Debug)]
pub struct Environment<'p, V, T> {
    records: HashMap<String, (V, T)>,
    parent: Option<&'p Environment<'p, V, T>>,
    name: String,
}

impl<'p, V, T> Environment<'p, V, T> {
    pub fn new(parent: Option<&'p Environment<'p, V, T>>, name: impl Into<String>) -> Self {
        Environment {
            records: HashMap::new(),
            parent,
            name: name.into(),
        }
    }

    /// The root scope of a compilation.
    pub fn global() -> Self {
        Environment::new(None, "global")
    }

    /// Opens a scope nested in this one.
    pub fn child(&'p self, name: impl Into<String>) -> Self {
        Environment::new(Some(self), name)
    }

    /// Binds `name` in this scope, replacing a binding of the same name in
    /// this scope only. Returns the stored value.
    pub fn define(&mut self, name: impl Into<String>, value: V, ty: T) -> &V {
        let name = name.into();
        trace!("define `{}` in scope `{}`", name, self.name);

        match self.records.entry(name) {
            Entry::Occupied(mut entry) => {
                entry.insert((value, ty));
                &entry.into_mut().0
            }
            Entry::Vacant(entry) => &entry.insert((value, ty)).0,
        }
    }

    /// Finds the nearest binding of `name`, starting in this scope and walking
    /// out through the parents.
    pub fn lookup(&self, name: &str) -> Result<&(V, T), ScopeError> {
        let mut scope = Some(self);

        while let Some(environment) = scope {
            if let Some(record) = environment.records.get(name) {
                return Ok(record);
            }
            scope = environment.parent;
        }

        Err(ScopeError::UnresolvedIdentifier {
            name: name.to_string(),
            scope: self.name.clone(),
        })
    }

    pub fn is_defined_locally(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<&'p Environment<'p, V, T>> {
        self.parent
    }

    /// Number of scopes above this one; the global scope has depth 0.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut scope = self.parent;
        while let Some(environment) = scope {
            depth += 1;
            scope = environment.parent;
        }
        depth
    }
}
