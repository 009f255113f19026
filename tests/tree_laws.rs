//! Property-based tests for binary tree structural laws.
//!
//! This module verifies:
//!
//! - **Functor laws** for `map`: identity and composition
//! - **Fold/iterator agreement**: queries derived two different ways match
//! - **Clone fidelity**: clones are deep and equal

use proptest::prelude::*;
use treefold::prelude::*;

fn arbitrary_tree() -> impl Strategy<Value = Tree<i64>> {
    let leaf = any::<i64>().prop_map(Tree::leaf);
    leaf.prop_recursive(7, 64, 2, |inner| {
        (inner.clone(), inner).prop_map(|(left, right)| Tree::branch(left, right))
    })
}

proptest! {
    /// Functor identity: mapping the identity function changes nothing.
    #[test]
    fn map_identity(tree in arbitrary_tree()) {
        let mapped = tree.clone().map(|value| value);
        prop_assert_eq!(mapped, tree);
    }
}

proptest! {
    /// Functor composition: mapping f then g equals mapping their composite.
    #[test]
    fn map_composition(tree in arbitrary_tree()) {
        let two_passes = tree.clone().map(|value| value.wrapping_mul(3)).map(|value| value.wrapping_sub(7));
        let one_pass = tree.map(|value| value.wrapping_mul(3).wrapping_sub(7));
        prop_assert_eq!(two_passes, one_pass);
    }
}

proptest! {
    /// leaf_count agrees with both iterators, and node_count with the
    /// leaf/branch balance of a full binary tree.
    #[test]
    fn counts_agree_across_derivations(tree in arbitrary_tree()) {
        let leaves = tree.leaf_count();
        prop_assert_eq!(tree.leaves().count(), leaves);
        // Every branch has exactly two children, so branches = leaves - 1.
        prop_assert_eq!(tree.node_count(), 2 * leaves - 1);
        prop_assert_eq!(tree.into_leaves().count(), leaves);
    }
}

proptest! {
    /// Folding with constructors rebuilds the identical tree.
    #[test]
    fn fold_with_constructors_is_identity(tree in arbitrary_tree()) {
        let rebuilt = tree.clone().fold(Tree::leaf, Tree::branch);
        prop_assert_eq!(rebuilt, tree);
    }
}

proptest! {
    /// Clones are deep: equal to the original and independent of it.
    #[test]
    fn clones_are_deep_and_equal(tree in arbitrary_tree()) {
        let copy = tree.clone();
        prop_assert_eq!(&copy, &tree);
        drop(tree);
        prop_assert_eq!(copy.leaf_count(), copy.leaves().count());
    }
}
