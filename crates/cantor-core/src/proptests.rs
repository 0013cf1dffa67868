//! Property-based tests for the structural container algorithms.

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;
    use std::collections::BTreeMap;

    use proptest::prelude::*;

    use crate::{map_compare, map_eq, map_hash_combine, seq_compare, seq_eq};

    fn small_map() -> impl Strategy<Value = BTreeMap<u32, i64>> {
        prop::collection::btree_map(0u32..8u32, -100i64..100i64, 0..5)
    }

    proptest! {
        #[test]
        fn compare_zero_iff_eq(a in small_map(), b in small_map()) {
            prop_assert_eq!(map_compare(&a, &b) == Ordering::Equal, map_eq(&a, &b));
        }

        #[test]
        fn compare_antisymmetric(a in small_map(), b in small_map()) {
            prop_assert_eq!(map_compare(&a, &b), map_compare(&b, &a).reverse());
        }

        #[test]
        fn compare_transitive(a in small_map(), b in small_map(), c in small_map()) {
            if map_compare(&a, &b) == Ordering::Less && map_compare(&b, &c) == Ordering::Less {
                prop_assert_eq!(map_compare(&a, &c), Ordering::Less);
            }
        }

        #[test]
        fn eq_implies_hash_eq(a in small_map()) {
            let b = a.clone();
            prop_assert!(map_eq(&a, &b));
            prop_assert_eq!(
                map_hash_combine(7, a.iter()),
                map_hash_combine(7, b.iter())
            );
        }

        #[test]
        fn smaller_map_sorts_lower(a in small_map(), b in small_map()) {
            if a.len() < b.len() {
                prop_assert_eq!(map_compare(&a, &b), Ordering::Less);
            }
        }

        #[test]
        fn seq_order_consistent(a in prop::collection::vec(-50i64..50, 0..6),
                                b in prop::collection::vec(-50i64..50, 0..6)) {
            prop_assert_eq!(seq_compare(&a, &b) == Ordering::Equal, seq_eq(&a, &b));
            prop_assert_eq!(seq_compare(&a, &b), seq_compare(&b, &a).reverse());
        }
    }
}
