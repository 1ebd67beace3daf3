//! Property-based tests for hygienic name allocation.

use std::collections::HashSet;

use proptest::prelude::*;
use skein_codegen::Scopes;

proptest! {
    /// Property: a fresh name never collides with any name already visible
    /// from the scope it is allocated in, whatever the scope depth or how
    /// adversarially the bases overlap.
    #[test]
    fn fresh_names_never_shadow(
        depth in 1usize..5,
        ops in prop::collection::vec(("[a-c][0-9]?", 0usize..5), 1..40),
    ) {
        let mut scopes = Scopes::new();
        let mut chain = vec![scopes.open(None)];
        for _ in 1..depth {
            let outer = *chain.last().unwrap();
            chain.push(scopes.open(Some(outer)));
        }
        // mirror of every reservation, per chain level
        let mut reserved: Vec<HashSet<String>> = vec![HashSet::new(); depth];

        for (base, level) in ops {
            let level = level % depth;
            let name = scopes.fresh_name(chain[level], &base);

            let visible = reserved[..=level].iter().flatten();
            for outer_name in visible {
                prop_assert_ne!(outer_name, &name);
            }
            prop_assert!(!scopes.is_free(chain[level], &name));
            reserved[level].insert(name);
        }
    }

    /// Property: two sequential requests with the same base in the same
    /// scope yield the base and the base with suffix 2.
    #[test]
    fn sequential_requests_suffix_from_two(base in "[a-z]{1,8}") {
        let mut scopes = Scopes::new();
        let root = scopes.open(None);
        let first = scopes.fresh_name(root, &base);
        let second = scopes.fresh_name(root, &base);
        prop_assert_eq!(first, base.clone());
        prop_assert_eq!(second, format!("{base}2"));
    }

    /// Property: a name declared in an outer scope is never returned for
    /// the same base requested in an inner scope.
    #[test]
    fn outer_declaration_blocks_inner_base(base in "[a-z]{1,6}", hops in 1usize..4) {
        let mut scopes = Scopes::new();
        let root = scopes.open(None);
        let taken = scopes.fresh_name(root, &base);
        let mut inner = root;
        for _ in 0..hops {
            inner = scopes.open(Some(inner));
        }
        let name = scopes.fresh_name(inner, &base);
        prop_assert_ne!(name, taken);
    }
}
