//! Leaf iterators over binary trees.
//!
//! Both iterators walk the tree depth-first with an explicit stack, yielding
//! leaf payloads left to right without native recursion.

use std::iter::FusedIterator;

use smallvec::SmallVec;

use super::binary::{INLINE_FRAMES, Tree};

/// A borrowing iterator over a tree's leaf payloads, left to right.
///
/// Created by [`Tree::leaves`].
///
/// # Examples
///
/// ```rust
/// use treefold::tree::Tree;
///
/// let tree = Tree::branch(Tree::leaf('a'), Tree::leaf('b'));
/// let letters: String = tree.leaves().collect();
/// assert_eq!(letters, "ab");
/// ```
pub struct Leaves<'a, A> {
    stack: SmallVec<[&'a Tree<A>; INLINE_FRAMES]>,
}

impl<'a, A> Leaves<'a, A> {
    pub(super) fn new(root: &'a Tree<A>) -> Self {
        let mut stack = SmallVec::new();
        stack.push(root);
        Self { stack }
    }
}

impl<'a, A> Iterator for Leaves<'a, A> {
    type Item = &'a A;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(tree) = self.stack.pop() {
            match tree {
                Tree::Leaf(value) => return Some(value),
                Tree::Branch(left, right) => {
                    // Right below left, so the left subtree drains first.
                    self.stack.push(right.as_ref());
                    self.stack.push(left.as_ref());
                }
            }
        }
        None
    }
}

impl<A> FusedIterator for Leaves<'_, A> {}

/// A consuming iterator over a tree's leaf payloads, left to right.
///
/// Created by [`Tree::into_leaves`]. Nodes are deallocated as the iterator
/// advances, so draining it dismantles an arbitrarily deep tree in constant
/// stack space.
pub struct IntoLeaves<A> {
    stack: Vec<Tree<A>>,
}

impl<A> IntoLeaves<A> {
    pub(super) fn new(root: Tree<A>) -> Self {
        Self { stack: vec![root] }
    }
}

impl<A> Iterator for IntoLeaves<A> {
    type Item = A;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(tree) = self.stack.pop() {
            match tree {
                Tree::Leaf(value) => return Some(value),
                Tree::Branch(left, right) => {
                    self.stack.push(*right);
                    self.stack.push(*left);
                }
            }
        }
        None
    }
}

impl<A> FusedIterator for IntoLeaves<A> {}

impl<A> IntoIterator for Tree<A> {
    type Item = A;
    type IntoIter = IntoLeaves<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_leaves()
    }
}

impl<'a, A> IntoIterator for &'a Tree<A> {
    type Item = &'a A;
    type IntoIter = Leaves<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.leaves()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample() -> Tree<i32> {
        Tree::branch(
            Tree::branch(Tree::leaf(1), Tree::leaf(2)),
            Tree::branch(Tree::leaf(3), Tree::branch(Tree::leaf(4), Tree::leaf(5))),
        )
    }

    #[rstest]
    fn leaves_yield_left_to_right() {
        let tree = sample();
        let values: Vec<i32> = tree.leaves().copied().collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
    }

    #[rstest]
    fn into_leaves_matches_the_borrowing_order() {
        let tree = sample();
        let borrowed: Vec<i32> = tree.leaves().copied().collect();
        let owned: Vec<i32> = tree.into_leaves().collect();
        assert_eq!(borrowed, owned);
    }

    #[rstest]
    fn iterators_are_fused() {
        let tree = Tree::leaf(7);
        let mut leaves = tree.leaves();
        assert_eq!(leaves.next(), Some(&7));
        assert_eq!(leaves.next(), None);
        assert_eq!(leaves.next(), None);
    }

    #[rstest]
    fn for_loop_over_a_reference_borrows() {
        let tree = sample();
        let mut total = 0;
        for value in &tree {
            total += value;
        }
        assert_eq!(total, 15);
        assert_eq!(tree.leaf_count(), 5);
    }
}
