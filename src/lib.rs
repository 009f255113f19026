//! # treefold
//!
//! Stack-safe folding and unfolding for recursive binary tree structures.
//!
//! ## Overview
//!
//! Rust does not guarantee tail call optimization, so recursive descent over
//! a deeply nested tree can exhaust the call stack. This library represents
//! every traversal as data: an explicit, heap-resident work list that is
//! interpreted in a loop. Stack usage stays constant regardless of tree
//! depth, and memory is bounded by tree size. It includes:
//!
//! - **[`Tree`]**: a persistent binary tree (`Leaf`/`Branch`) whose
//!   operations never mutate their input
//! - **[`Either`]**: a two-variant sum type driving unfolding ("keep
//!   expanding" on the left, "finished" on the right)
//! - **Stack-safe unfolding**: [`Tree::unfold`] and [`Tree::try_unfold`]
//!   repeatedly expand pending leaves through a step function without
//!   native recursion
//! - **Stack-safe structural operations**: post-order folds, mapping,
//!   size and depth queries, and leaf iterators, all driven by the same
//!   explicit work-list machinery
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` implementations for [`Tree`] and
//!   [`Either`]
//!
//! ## Example
//!
//! ```rust
//! use treefold::prelude::*;
//!
//! // Unfold a countdown chain: each pending value re-expands until zero.
//! let tree = Tree::unfold(3_u32, |n| {
//!     if n == 0 {
//!         Tree::leaf(Either::Right(0_u64))
//!     } else {
//!         Tree::branch(
//!             Tree::leaf(Either::Right(u64::from(n))),
//!             Tree::leaf(Either::Left(n - 1)),
//!         )
//!     }
//! });
//!
//! let leaves: Vec<u64> = tree.leaves().copied().collect();
//! assert_eq!(leaves, vec![3, 2, 1, 0]);
//! ```
//!
//! [`Either`]: either::Either
//! [`Tree`]: tree::Tree
//! [`Tree::unfold`]: tree::Tree::unfold
//! [`Tree::try_unfold`]: tree::Tree::try_unfold

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types.
///
/// # Usage
///
/// ```rust
/// use treefold::prelude::*;
/// ```
pub mod prelude {
    pub use crate::either::Either;
    pub use crate::tree::{IntoLeaves, Leaves, Tree};
}

pub mod either;
pub mod tree;

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn prelude_exposes_the_core_surface() {
        let tree = Tree::unfold(1_i32, |n| {
            if n == 0 {
                Tree::leaf(Either::Right("done"))
            } else {
                Tree::leaf(Either::Left(n - 1))
            }
        });
        assert_eq!(tree, Tree::leaf("done"));
    }
}
