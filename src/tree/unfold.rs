//! Stack-safe unfolding of trees via an explicit work list.
//!
//! Unfolding starts from a tree whose leaves are [`Either`] values: a
//! `Left(a)` leaf is *pending* and is re-expanded through a user-supplied
//! step function, a `Right(b)` leaf is *done* and passes through. The result
//! is a tree whose every leaf has been fully resolved.
//!
//! # Motivation
//!
//! The obvious implementation recurses: resolve the left child, resolve the
//! right child, rebuild the branch. Rust does not guarantee tail call
//! optimization, so on a deep tree that descent exhausts the call stack.
//! Here the descent is represented as data instead: a `todo` stack of
//! visit-and-combine frames simulates the recursion, and a `done` stack
//! accumulates resolved subtrees. Stack usage is constant; memory is
//! bounded by the size of the tree, not its depth.

use std::convert::Infallible;

use smallvec::SmallVec;

use super::binary::{Frame, INLINE_FRAMES, Tree};
use crate::either::Either;

impl<A, B> Tree<Either<A, B>> {
    /// Fully resolves this tree, re-expanding every pending leaf.
    ///
    /// Each `Left(a)` leaf is replaced by `step(a)`, repeatedly, until only
    /// `Right` leaves remain; each `Right(b)` leaf becomes `Leaf(b)`. The
    /// branch structure is exactly what naive recursive expansion would
    /// produce, but no native recursion takes place.
    ///
    /// A `step` that keeps returning `Left` leaves never terminates. No
    /// step counter or depth bound guards against this; the caller is
    /// responsible for supplying a terminating step, exactly as with the
    /// recursive formulation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::prelude::*;
    ///
    /// let start = Tree::branch(
    ///     Tree::leaf(Either::Left(10)),
    ///     Tree::leaf(Either::Right(20)),
    /// );
    /// let resolved = start.resolve(|pending| Tree::leaf(Either::Right(pending + 1)));
    /// assert_eq!(resolved, Tree::branch(Tree::leaf(11), Tree::leaf(20)));
    /// ```
    pub fn resolve<F>(self, mut step: F) -> Tree<B>
    where
        F: FnMut(A) -> Tree<Either<A, B>>,
    {
        match self.try_resolve(|pending| Ok::<_, Infallible>(step(pending))) {
            Ok(resolved) => resolved,
            Err(never) => match never {},
        }
    }

    /// Fallible variant of [`Tree::resolve`].
    ///
    /// The first error returned by `step` aborts the traversal and is
    /// surfaced unmodified; no translation or recovery is attempted. The
    /// input tree has already been consumed at that point, but nothing
    /// caller-visible was mutated. In-flight work-list state is torn down
    /// iteratively, so an abort deep inside a large tree is as stack-safe
    /// as a successful run.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by `step`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::prelude::*;
    ///
    /// let start = Tree::leaf(Either::Left(3_u32));
    /// let result: Result<Tree<u32>, String> = start.try_resolve(|pending| {
    ///     if pending == 0 {
    ///         Err("reached zero".to_string())
    ///     } else {
    ///         Ok(Tree::leaf(Either::Left(pending - 1)))
    ///     }
    /// });
    /// assert_eq!(result, Err("reached zero".to_string()));
    /// ```
    pub fn try_resolve<E, F>(self, mut step: F) -> Result<Tree<B>, E>
    where
        F: FnMut(A) -> Result<Tree<Either<A, B>>, E>,
    {
        let mut todo: SmallVec<[Frame<Either<A, B>>; INLINE_FRAMES]> = SmallVec::new();
        let mut done: SmallVec<[Tree<B>; INLINE_FRAMES]> = SmallVec::new();
        todo.push(Frame::Visit(self));

        while let Some(frame) = todo.pop() {
            match frame {
                // A pending leaf drives deferred expansion: its replacement
                // goes back on the work list instead of onto the call stack.
                Frame::Visit(Tree::Leaf(Either::Left(pending))) => match step(pending) {
                    Ok(expansion) => todo.push(Frame::Visit(expansion)),
                    Err(error) => {
                        dismantle_frames(todo, done);
                        return Err(error);
                    }
                },
                Frame::Visit(Tree::Leaf(Either::Right(value))) => {
                    done.push(Tree::Leaf(value));
                }
                // First visit to a branch: queue both children with a combine
                // marker beneath them. The marker is the second visit; its
                // position in `todo` identifies the branch, so structurally
                // equal branches are never conflated.
                Frame::Visit(Tree::Branch(left, right)) => {
                    todo.push(Frame::Combine);
                    todo.push(Frame::Visit(*right));
                    todo.push(Frame::Visit(*left));
                }
                // Second visit: both children are resolved and sit on top of
                // `done`, right above left.
                Frame::Combine => {
                    let (Some(right), Some(left)) = (done.pop(), done.pop()) else {
                        unreachable!("combine frame popped without two resolved children");
                    };
                    done.push(Tree::branch(left, right));
                }
            }
        }

        let Some(resolved) = done.pop() else {
            unreachable!("resolution finished with an empty result stack");
        };
        Ok(resolved)
    }
}

impl<B> Tree<B> {
    /// Unfolds a tree from a seed value.
    ///
    /// Applies `step` to `seed` and fully resolves the resulting tree:
    /// every `Left` leaf is re-expanded through `step`, every `Right` leaf
    /// becomes a final payload. Equivalent to
    /// `step(seed).resolve(step)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::prelude::*;
    ///
    /// // A single-leaf countdown chain: six expansions, then done.
    /// let tree = Tree::unfold(5_i32, |n| {
    ///     if n > 0 {
    ///         Tree::leaf(Either::Left(n - 1))
    ///     } else {
    ///         Tree::leaf(Either::Right(0))
    ///     }
    /// });
    /// assert_eq!(tree, Tree::leaf(0));
    /// ```
    pub fn unfold<A, F>(seed: A, mut step: F) -> Self
    where
        F: FnMut(A) -> Tree<Either<A, B>>,
    {
        let start = step(seed);
        start.resolve(step)
    }

    /// Fallible variant of [`Tree::unfold`].
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by `step`, including one from
    /// the initial application to `seed`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::prelude::*;
    ///
    /// let tree: Tree<u32> = Tree::try_unfold(4_u32, |n| {
    ///     if n == 0 {
    ///         Ok(Tree::leaf(Either::Right(0)))
    ///     } else if n % 2 == 1 {
    ///         Err(format!("odd value: {n}"))
    ///     } else {
    ///         Ok(Tree::leaf(Either::Left(n - 2)))
    ///     }
    /// })?;
    /// assert_eq!(tree, Tree::leaf(0));
    /// # Ok::<(), String>(())
    /// ```
    pub fn try_unfold<A, E, F>(seed: A, mut step: F) -> Result<Self, E>
    where
        F: FnMut(A) -> Result<Tree<Either<A, B>>, E>,
    {
        let start = step(seed)?;
        start.try_resolve(step)
    }
}

/// Drains both work-list stacks iteratively.
///
/// Dropping the stacks directly would run the recursive destructor of every
/// held subtree; on an abort deep inside a large tree that recursion could
/// itself overflow.
fn dismantle_frames<T, U>(
    todo: SmallVec<[Frame<T>; INLINE_FRAMES]>,
    done: SmallVec<[Tree<U>; INLINE_FRAMES]>,
) {
    for frame in todo {
        if let Frame::Visit(subtree) = frame {
            subtree.into_leaves().for_each(drop);
        }
    }
    for subtree in done {
        subtree.into_leaves().for_each(drop);
    }
}
