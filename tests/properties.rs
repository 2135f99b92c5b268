use std::collections::BTreeSet;

use avl_index::Tree;
use proptest::prelude::*;

fn height_bound(len: usize) -> usize {
    (1.45 * ((len + 2) as f64).log2()).ceil() as usize
}

proptest! {
    #[test]
    fn invariants_hold_after_every_insert(keys in proptest::collection::vec(any::<i32>(), 0..200)) {
        let mut tree = Tree::new();
        for key in keys {
            tree.insert(key);
            prop_assert!(tree.check_ordering());
            prop_assert!(tree.check_balanced());
        }
        prop_assert_eq!(tree.verify(), Ok(()));
    }

    #[test]
    fn membership_matches_inserted_keys(
        keys in proptest::collection::vec(-500i32..500, 0..300),
        probes in proptest::collection::vec(-600i32..600, 0..50),
    ) {
        let tree: Tree<i32> = keys.iter().copied().collect();
        let expected: BTreeSet<i32> = keys.iter().copied().collect();
        prop_assert_eq!(tree.len(), expected.len());
        for key in &keys {
            prop_assert!(tree.contains(key));
        }
        for probe in &probes {
            prop_assert_eq!(tree.contains(probe), expected.contains(probe));
        }
        prop_assert!(tree.iter().eq(expected.iter()));
    }

    #[test]
    fn duplicate_insert_is_idempotent(keys in proptest::collection::vec(0i32..100, 1..100), pick in any::<prop::sample::Index>()) {
        let mut tree: Tree<i32> = keys.iter().copied().collect();
        let before = tree.clone();
        let duplicate = keys[pick.index(keys.len())];
        prop_assert!(!tree.insert(duplicate));
        prop_assert_eq!(&tree, &before);
        prop_assert_eq!(tree.height(), before.height());
    }

    #[test]
    fn height_stays_logarithmic(keys in proptest::collection::btree_set(any::<i32>(), 0..500)) {
        let tree: Tree<i32> = keys.iter().copied().collect();
        prop_assert!(tree.height() <= height_bound(keys.len()));
    }

    #[test]
    fn invariants_hold_after_every_remove(
        keys in proptest::collection::vec(0i32..200, 0..200),
        removals in proptest::collection::vec(0i32..200, 0..200),
    ) {
        let mut tree: Tree<i32> = keys.iter().copied().collect();
        let mut expected: BTreeSet<i32> = keys.iter().copied().collect();
        for key in &removals {
            prop_assert_eq!(tree.remove(key), expected.remove(key));
            prop_assert_eq!(tree.verify(), Ok(()));
        }
        prop_assert!(tree.iter().eq(expected.iter()));
    }
}
