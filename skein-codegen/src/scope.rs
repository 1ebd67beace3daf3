//! Lexical scope chain with hygienic fresh-name allocation.

use std::collections::HashSet;

/// Index of a scope in a [`Scopes`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(usize);

#[derive(Debug)]
struct Node {
    outer: Option<ScopeId>,
    names: HashSet<String>,
}

/// Arena of lexical scopes.
///
/// Each scope holds the set of names reserved in it and an index pointing
/// at its enclosing scope (lookup only; the arena owns every node). A name
/// is free in a scope iff it is absent from that scope's own set and free
/// in every enclosing scope, up to the root.
#[derive(Debug, Default)]
pub struct Scopes {
    nodes: Vec<Node>,
}

impl Scopes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new scope chained to `outer` (`None` for a root scope).
    pub fn open(&mut self, outer: Option<ScopeId>) -> ScopeId {
        let id = ScopeId(self.nodes.len());
        self.nodes.push(Node {
            outer,
            names: HashSet::new(),
        });
        id
    }

    /// Reserve and return a name derived from `base` that collides with
    /// nothing visible from `scope`.
    ///
    /// Candidates are tried in the fixed order `base`, `base2`, `base3`, …
    /// so allocation is deterministic given identical call order. The suffix
    /// space is unbounded; allocation never fails.
    pub fn fresh_name(&mut self, scope: ScopeId, base: &str) -> String {
        let mut candidate = base.to_owned();
        let mut counter = 1u32;
        while !self.is_free(scope, &candidate) {
            counter += 1;
            candidate = format!("{base}{counter}");
        }
        self.nodes[scope.0].names.insert(candidate.clone());
        candidate
    }

    /// Whether `name` collides with nothing visible from `scope`. Pure
    /// query; walks the chain outward to the root.
    pub fn is_free(&self, scope: ScopeId, name: &str) -> bool {
        let mut current = Some(scope);
        while let Some(id) = current {
            let node = &self.nodes[id.0];
            if node.names.contains(name) {
                return false;
            }
            current = node.outer;
        }
        true
    }
}
