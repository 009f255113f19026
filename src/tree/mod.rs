//! Binary trees and stack-safe traversals over them.
//!
//! This module provides the [`Tree`] sum type together with traversals that
//! never recurse on the native call stack:
//!
//! - [`Tree::fold`] / [`Tree::fold_ref`]: post-order catamorphisms driven by
//!   an explicit work list
//! - [`Tree::map`]: structure-preserving leaf transformation
//! - [`Tree::unfold`] / [`Tree::try_unfold`]: repeated expansion of pending
//!   leaves through a step function, the dual of folding
//! - [`Tree::leaves`] / [`Tree::into_leaves`]: left-to-right leaf iterators
//!
//! # Stack Safety
//!
//! Every traversal in this module trades stack depth for explicit
//! heap-allocated work lists, bounded by tree size rather than tree depth.
//! A tree a hundred thousand levels deep folds, maps, unfolds, compares,
//! clones, and prints without a stack-depth failure.
//!
//! The one exception is dropping: safe Rust cannot replace the
//! compiler-generated recursive destructor of a `Leaf`/`Branch` enum, so
//! letting an extremely deep tree fall out of scope still recurses. Consume
//! such trees instead - [`Tree::fold`] and [`Tree::into_leaves`] dismantle
//! them iteratively.
//!
//! # Examples
//!
//! ```rust
//! use treefold::tree::Tree;
//!
//! let tree = Tree::branch(Tree::leaf(1), Tree::branch(Tree::leaf(2), Tree::leaf(3)));
//! assert_eq!(tree.leaf_count(), 3);
//! assert_eq!(tree.fold_ref(|value| *value, |left, right| left + right), 6);
//! ```

mod binary;
mod iter;
mod unfold;

pub use binary::Tree;
pub use iter::{IntoLeaves, Leaves};
