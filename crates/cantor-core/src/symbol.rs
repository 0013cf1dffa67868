//! Symbols and symbol interning.
//!
//! A [`Symbol`] is a shared-ownership handle into the pool of variable
//! names. Handles compare structurally (by name), never by address, so two
//! pools producing the same name produce interchangeable symbols.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use hashbrown::HashMap;

use crate::canonical::{hash_of, Canonical};

/// A symbolic variable identity.
///
/// Cheap to clone; the backing name is shared. The polynomial layer only
/// ever reads a symbol, it never mutates or destroys one.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(Arc<str>);

impl Symbol {
    /// Creates a standalone symbol with the given name.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(Arc::from(name))
    }

    /// Returns the symbol's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Canonical for Symbol {
    fn canon_cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }

    fn canon_hash(&self) -> u64 {
        hash_of(&self.0)
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Creates a standalone symbol.
#[must_use]
pub fn symbol(name: &str) -> Symbol {
    Symbol::new(name)
}

/// An interning pool for symbols.
///
/// Interning the same name twice yields handles sharing one allocation.
/// Interning is an allocation-sharing optimization only: symbols from
/// different pools still compare equal when their names agree.
#[derive(Debug, Default)]
pub struct SymbolPool {
    map: HashMap<Arc<str>, Symbol>,
}

impl SymbolPool {
    /// Creates a new empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns a name, returning the pooled symbol for it.
    pub fn intern(&mut self, name: &str) -> Symbol {
        if let Some(sym) = self.map.get(name) {
            return sym.clone();
        }
        let sym = Symbol::new(name);
        self.map.insert(sym.0.clone(), sym.clone());
        sym
    }

    /// Returns the number of interned names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if no names have been interned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_equality() {
        let mut pool = SymbolPool::new();
        let x1 = pool.intern("x");
        let x2 = Symbol::new("x");
        let y = pool.intern("y");

        assert!(x1.canon_eq(&x2));
        assert_eq!(x1, x2);
        assert_ne!(x1, y);
        assert_eq!(x1.canon_hash(), x2.canon_hash());
    }

    #[test]
    fn test_interning_shares_storage() {
        let mut pool = SymbolPool::new();
        let a = pool.intern("alpha");
        let b = pool.intern("alpha");

        assert!(Arc::ptr_eq(&a.0, &b.0));
        assert_eq!(pool.len(), 1);
    }
}
