//! Property-based tests for stack-safe tree unfolding.
//!
//! This module verifies that the iterative work-list traversal satisfies:
//!
//! - **Equivalence**: identical results to naive recursive descent for all
//!   finite start trees and terminating step functions
//! - **Shape preservation**: already-resolved trees unwrap in place
//! - **Map equivalence**: immediately-done steps act as leaf maps
//! - **Bounded work**: an always-done step runs once per pending leaf
//! - **Stack safety**: deep spines resolve under a small stack budget

use proptest::prelude::*;
use treefold::prelude::*;

// =============================================================================
// Reference Implementation and Strategies
// =============================================================================

/// Straightforward recursive descent, the behavior the iterative traversal
/// must reproduce. Only safe for the shallow trees proptest generates here.
fn resolve_naive<F>(tree: Tree<Either<u8, i64>>, step: &mut F) -> Tree<i64>
where
    F: FnMut(u8) -> Tree<Either<u8, i64>>,
{
    match tree {
        Tree::Leaf(Either::Left(pending)) => {
            let expansion = step(pending);
            resolve_naive(expansion, step)
        }
        Tree::Leaf(Either::Right(value)) => Tree::leaf(value),
        Tree::Branch(left, right) => {
            let left = resolve_naive(*left, step);
            let right = resolve_naive(*right, step);
            Tree::branch(left, right)
        }
    }
}

/// A terminating step: every `Left` chain strictly decreases its seed.
fn branching_step(pending: u8) -> Tree<Either<u8, i64>> {
    if pending == 0 {
        Tree::leaf(Either::Right(-1))
    } else if pending % 2 == 0 {
        Tree::branch(
            Tree::leaf(Either::Left(pending / 2)),
            Tree::leaf(Either::Right(i64::from(pending))),
        )
    } else {
        Tree::leaf(Either::Left(pending - 1))
    }
}

fn arbitrary_start_tree() -> impl Strategy<Value = Tree<Either<u8, i64>>> {
    let leaf = prop_oneof![
        any::<u8>().prop_map(|seed| Tree::leaf(Either::Left(seed))),
        any::<i64>().prop_map(|value| Tree::leaf(Either::Right(value))),
    ];
    leaf.prop_recursive(6, 48, 2, |inner| {
        (inner.clone(), inner).prop_map(|(left, right)| Tree::branch(left, right))
    })
}

fn arbitrary_resolved_tree() -> impl Strategy<Value = Tree<i64>> {
    let leaf = any::<i64>().prop_map(Tree::leaf);
    leaf.prop_recursive(6, 48, 2, |inner| {
        (inner.clone(), inner).prop_map(|(left, right)| Tree::branch(left, right))
    })
}

// =============================================================================
// Equivalence to Naive Recursion
// =============================================================================

proptest! {
    /// The iterative traversal and recursive descent agree everywhere.
    #[test]
    fn iterative_resolution_matches_naive_recursion(start in arbitrary_start_tree()) {
        let mut step = branching_step;
        let expected = resolve_naive(start.clone(), &mut step);
        let actual = start.resolve(branching_step);
        prop_assert_eq!(actual, expected);
    }
}

// =============================================================================
// Shape Preservation
// =============================================================================

proptest! {
    /// A tree with only done leaves keeps its branch structure, each leaf
    /// unwrapped to its contained value.
    #[test]
    fn already_resolved_trees_unwrap_in_place(tree in arbitrary_resolved_tree()) {
        let start = tree.clone().map(Either::<u8, i64>::Right);
        let resolved = start.resolve(|_| unreachable!("no pending leaves"));
        prop_assert_eq!(resolved, tree);
    }
}

proptest! {
    /// A step that resolves immediately acts as a structure-preserving map.
    #[test]
    fn immediate_steps_act_as_leaf_maps(tree in arbitrary_resolved_tree()) {
        let start = tree.clone().map(Either::<i64, i64>::Left);
        let resolved = start.resolve(|pending| Tree::leaf(Either::Right(pending.wrapping_add(1))));
        prop_assert_eq!(resolved, tree.map(|value| value.wrapping_add(1)));
    }
}

proptest! {
    /// Unfolding a seed with an immediately-done step is a plain function
    /// application wrapped in a leaf.
    #[test]
    fn immediate_unfold_is_function_application(seed in any::<u8>()) {
        let unfolded: Tree<i64> = Tree::unfold(seed, |pending| {
            Tree::leaf(Either::Right(i64::from(pending) * 3))
        });
        prop_assert_eq!(unfolded, Tree::leaf(i64::from(seed) * 3));
    }
}

// =============================================================================
// Bounded Work
// =============================================================================

proptest! {
    /// With an always-done step, the step function runs exactly once per
    /// pending leaf: work is linear in tree size.
    #[test]
    fn an_always_done_step_runs_once_per_pending_leaf(start in arbitrary_start_tree()) {
        let pending_leaves = start.leaves().filter(|payload| payload.is_left()).count();
        let mut applications = 0_usize;
        let resolved = start.resolve(|pending| {
            applications += 1;
            Tree::leaf(Either::Right(i64::from(pending)))
        });
        prop_assert_eq!(applications, pending_leaves);
        drop(resolved);
    }
}

// =============================================================================
// Stack Safety
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]
    /// Deep spines resolve inside a thread with a deliberately small stack,
    /// where recursive descent could not run.
    #[test]
    fn deep_spines_resolve_in_a_small_stack_budget(depth in 20_000_usize..60_000) {
        let handle = std::thread::Builder::new()
            .stack_size(256 * 1024)
            .spawn(move || {
                let mut start: Tree<Either<u8, i64>> = Tree::leaf(Either::Left(0));
                for _ in 1..depth {
                    start = Tree::branch(Tree::leaf(Either::Right(1)), start);
                }
                let resolved = start.resolve(|_| Tree::leaf(Either::Right(1)));
                let total: i64 = resolved.into_leaves().sum();
                total
            })
            .expect("failed to spawn the traversal thread");

        let total = handle.join().expect("traversal exceeded the stack budget");
        prop_assert_eq!(total, i64::try_from(depth).unwrap());
    }
}
