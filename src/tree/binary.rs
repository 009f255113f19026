//! The binary tree sum type and its structural operations.

use std::fmt;

use smallvec::SmallVec;

use super::iter::{IntoLeaves, Leaves};

/// Inline capacity of the work-list stacks.
///
/// Traversals of trees shallower than this never touch the heap for their
/// own bookkeeping.
pub(super) const INLINE_FRAMES: usize = 16;

/// One entry of a consuming traversal's work list.
///
/// `Visit` holds a subtree awaiting its first visit. `Combine` stands in for
/// a branch's second, post-order visit: it is pushed beneath the branch's two
/// children, so by the time it is popped again both children have been fully
/// resolved onto the accumulator stack. Identity is positional - structurally
/// equal but distinct branches each get their own marker and can never be
/// conflated.
pub(super) enum Frame<T> {
    Visit(Tree<T>),
    Combine,
}

/// Borrowing counterpart of [`Frame`].
enum FrameRef<'a, T> {
    Visit(&'a Tree<T>),
    Combine,
}

/// A persistent binary tree.
///
/// `Tree<A>` is a finite recursive sum type: a `Leaf` holds one payload
/// value, a `Branch` holds two child trees. Construction is purely
/// value-based; no operation in this library mutates a tree it was given,
/// and ownership rules out cycles, so every traversal terminates.
///
/// All provided operations are stack-safe: they are driven by explicit
/// work-list stacks rather than native recursion, so arbitrarily deep trees
/// are handled in constant stack space. That includes `Clone`, `PartialEq`,
/// and `Debug`, whose derived forms would recurse. Dropping is the one
/// compiler-generated path this library cannot replace; dismantle very deep
/// trees with [`Tree::fold`] or [`Tree::into_leaves`] instead of letting
/// them fall out of scope.
///
/// # Time Complexity
///
/// | Operation      | Complexity |
/// |----------------|------------|
/// | `leaf`         | O(1)       |
/// | `branch`       | O(1)       |
/// | `value`        | O(1)       |
/// | `children`     | O(1)       |
/// | `fold`         | O(n)       |
/// | `map`          | O(n)       |
/// | `node_count`   | O(n)       |
/// | `depth`        | O(n)       |
///
/// # Examples
///
/// ```rust
/// use treefold::tree::Tree;
///
/// let tree = Tree::branch(Tree::leaf(1), Tree::leaf(2));
/// assert!(tree.is_branch());
/// assert_eq!(tree.node_count(), 3);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tree<A> {
    /// A leaf holding one payload value.
    Leaf(A),
    /// An interior node holding the left and right child trees.
    Branch(Box<Tree<A>>, Box<Tree<A>>),
}

impl<A> Tree<A> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a leaf holding the given value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::tree::Tree;
    ///
    /// let tree = Tree::leaf(42);
    /// assert_eq!(tree.value(), Some(&42));
    /// ```
    #[inline]
    #[must_use]
    pub const fn leaf(value: A) -> Self {
        Self::Leaf(value)
    }

    /// Creates a branch from two child trees.
    ///
    /// The children are boxed internally; callers pass plain trees.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::tree::Tree;
    ///
    /// let tree = Tree::branch(Tree::leaf(1), Tree::leaf(2));
    /// assert!(tree.is_branch());
    /// ```
    #[inline]
    #[must_use]
    pub fn branch(left: Self, right: Self) -> Self {
        Self::Branch(Box::new(left), Box::new(right))
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if this tree is a single leaf.
    #[inline]
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Returns `true` if this tree is a branch.
    #[inline]
    #[must_use]
    pub const fn is_branch(&self) -> bool {
        matches!(self, Self::Branch(..))
    }

    /// Returns a reference to the payload if this tree is a leaf.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::tree::Tree;
    ///
    /// assert_eq!(Tree::leaf(42).value(), Some(&42));
    /// assert_eq!(Tree::branch(Tree::leaf(1), Tree::leaf(2)).value(), None);
    /// ```
    #[inline]
    #[must_use]
    pub const fn value(&self) -> Option<&A> {
        match self {
            Self::Leaf(value) => Some(value),
            Self::Branch(..) => None,
        }
    }

    /// Returns references to the two children if this tree is a branch.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::tree::Tree;
    ///
    /// let tree = Tree::branch(Tree::leaf(1), Tree::leaf(2));
    /// let (left, right) = tree.children().unwrap();
    /// assert_eq!(left.value(), Some(&1));
    /// assert_eq!(right.value(), Some(&2));
    /// ```
    #[inline]
    #[must_use]
    pub fn children(&self) -> Option<(&Self, &Self)> {
        match self {
            Self::Leaf(_) => None,
            Self::Branch(left, right) => Some((left.as_ref(), right.as_ref())),
        }
    }

    // =========================================================================
    // Folding
    // =========================================================================

    /// Consumes the tree with a post-order fold.
    ///
    /// `leaf` is applied to every payload, `branch` combines the already
    /// folded left and right results. The fold is iterative: subtrees wait
    /// on an explicit work list and results accumulate on a second stack,
    /// so depth never translates into call-stack usage.
    ///
    /// This is also the stack-safe way to dismantle a deep tree: folding to
    /// `()` deallocates every node iteratively.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::tree::Tree;
    ///
    /// let tree = Tree::branch(Tree::leaf(1), Tree::branch(Tree::leaf(2), Tree::leaf(3)));
    /// let sum = tree.fold(|value| value, |left, right| left + right);
    /// assert_eq!(sum, 6);
    /// ```
    pub fn fold<B, L, Br>(self, mut leaf: L, mut branch: Br) -> B
    where
        L: FnMut(A) -> B,
        Br: FnMut(B, B) -> B,
    {
        let mut todo: SmallVec<[Frame<A>; INLINE_FRAMES]> = SmallVec::new();
        let mut done: SmallVec<[B; INLINE_FRAMES]> = SmallVec::new();
        todo.push(Frame::Visit(self));

        while let Some(frame) = todo.pop() {
            match frame {
                Frame::Visit(Self::Leaf(value)) => done.push(leaf(value)),
                Frame::Visit(Self::Branch(left, right)) => {
                    todo.push(Frame::Combine);
                    todo.push(Frame::Visit(*right));
                    todo.push(Frame::Visit(*left));
                }
                Frame::Combine => {
                    let (Some(right), Some(left)) = (done.pop(), done.pop()) else {
                        unreachable!("combine frame popped without two folded children");
                    };
                    done.push(branch(left, right));
                }
            }
        }

        let Some(result) = done.pop() else {
            unreachable!("fold finished with an empty accumulator");
        };
        result
    }

    /// Folds the tree by reference, leaving it intact.
    ///
    /// Identical to [`Tree::fold`] except that `leaf` receives `&A` and the
    /// tree remains usable afterwards.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::tree::Tree;
    ///
    /// let tree = Tree::branch(Tree::leaf("a"), Tree::leaf("b"));
    /// let joined = tree.fold_ref(|value| (*value).to_string(), |left, right| left + &right);
    /// assert_eq!(joined, "ab");
    /// assert!(tree.is_branch());
    /// ```
    pub fn fold_ref<'a, B, L, Br>(&'a self, mut leaf: L, mut branch: Br) -> B
    where
        L: FnMut(&'a A) -> B,
        Br: FnMut(B, B) -> B,
    {
        let mut todo: SmallVec<[FrameRef<'a, A>; INLINE_FRAMES]> = SmallVec::new();
        let mut done: SmallVec<[B; INLINE_FRAMES]> = SmallVec::new();
        todo.push(FrameRef::Visit(self));

        while let Some(frame) = todo.pop() {
            match frame {
                FrameRef::Visit(Self::Leaf(value)) => done.push(leaf(value)),
                FrameRef::Visit(Self::Branch(left, right)) => {
                    todo.push(FrameRef::Combine);
                    todo.push(FrameRef::Visit(right.as_ref()));
                    todo.push(FrameRef::Visit(left.as_ref()));
                }
                FrameRef::Combine => {
                    let (Some(right), Some(left)) = (done.pop(), done.pop()) else {
                        unreachable!("combine frame popped without two folded children");
                    };
                    done.push(branch(left, right));
                }
            }
        }

        let Some(result) = done.pop() else {
            unreachable!("fold finished with an empty accumulator");
        };
        result
    }

    /// Transforms every leaf payload, preserving the branch structure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::tree::Tree;
    ///
    /// let tree = Tree::branch(Tree::leaf(1), Tree::leaf(2));
    /// let doubled = tree.map(|value| value * 2);
    /// assert_eq!(doubled, Tree::branch(Tree::leaf(2), Tree::leaf(4)));
    /// ```
    pub fn map<B, F>(self, mut function: F) -> Tree<B>
    where
        F: FnMut(A) -> B,
    {
        self.fold(|value| Tree::Leaf(function(value)), Tree::branch)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns the total number of nodes, leaves and branches combined.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.fold_ref(|_| 1, |left, right| left + right + 1)
    }

    /// Returns the number of leaves.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::tree::Tree;
    ///
    /// let tree = Tree::branch(Tree::leaf(1), Tree::branch(Tree::leaf(2), Tree::leaf(3)));
    /// assert_eq!(tree.leaf_count(), 3);
    /// assert_eq!(tree.node_count(), 5);
    /// ```
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.fold_ref(|_| 1, |left, right| left + right)
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    ///
    /// A lone leaf has depth 1.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::tree::Tree;
    ///
    /// assert_eq!(Tree::leaf(0).depth(), 1);
    ///
    /// let tree = Tree::branch(Tree::leaf(1), Tree::branch(Tree::leaf(2), Tree::leaf(3)));
    /// assert_eq!(tree.depth(), 3);
    /// ```
    #[must_use]
    pub fn depth(&self) -> usize {
        self.fold_ref(|_| 1, |left, right| 1 + left.max(right))
    }

    // =========================================================================
    // Iteration
    // =========================================================================

    /// Returns a borrowing iterator over the leaves, left to right.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::tree::Tree;
    ///
    /// let tree = Tree::branch(Tree::leaf(1), Tree::branch(Tree::leaf(2), Tree::leaf(3)));
    /// let values: Vec<i32> = tree.leaves().copied().collect();
    /// assert_eq!(values, vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn leaves(&self) -> Leaves<'_, A> {
        Leaves::new(self)
    }

    /// Returns a consuming iterator over the leaves, left to right.
    ///
    /// The tree is dismantled iteratively as the iterator advances, making
    /// this the stack-safe way to dispose of an arbitrarily deep tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::tree::Tree;
    ///
    /// let tree = Tree::branch(Tree::leaf(1), Tree::leaf(2));
    /// let values: Vec<i32> = tree.into_leaves().collect();
    /// assert_eq!(values, vec![1, 2]);
    /// ```
    #[must_use]
    pub fn into_leaves(self) -> IntoLeaves<A> {
        IntoLeaves::new(self)
    }
}

// =============================================================================
// Manual Trait Implementations
// =============================================================================
//
// The derived forms of Clone, PartialEq, and Debug recurse one call-stack
// frame per tree level. Each is replaced with a work-list implementation so
// the stack-safety guarantee extends to the whole public surface.

impl<A: Clone> Clone for Tree<A> {
    fn clone(&self) -> Self {
        self.fold_ref(|value| Self::Leaf(value.clone()), Self::branch)
    }
}

impl<A: PartialEq> PartialEq for Tree<A> {
    fn eq(&self, other: &Self) -> bool {
        let mut pending: SmallVec<[(&Self, &Self); INLINE_FRAMES]> = SmallVec::new();
        pending.push((self, other));

        while let Some(pair) = pending.pop() {
            match pair {
                (Self::Leaf(ours), Self::Leaf(theirs)) => {
                    if ours != theirs {
                        return false;
                    }
                }
                (Self::Branch(our_left, our_right), Self::Branch(their_left, their_right)) => {
                    pending.push((our_right.as_ref(), their_right.as_ref()));
                    pending.push((our_left.as_ref(), their_left.as_ref()));
                }
                _ => return false,
            }
        }
        true
    }
}

impl<A: Eq> Eq for Tree<A> {}

impl<A: fmt::Debug> fmt::Debug for Tree<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        enum Token<'a, T> {
            Node(&'a Tree<T>),
            Text(&'static str),
        }

        let mut pending: Vec<Token<'_, A>> = vec![Token::Node(self)];
        while let Some(token) = pending.pop() {
            match token {
                Token::Text(text) => formatter.write_str(text)?,
                Token::Node(Self::Leaf(value)) => {
                    write!(formatter, "Leaf({value:?})")?;
                }
                Token::Node(Self::Branch(left, right)) => {
                    formatter.write_str("Branch(")?;
                    pending.push(Token::Text(")"));
                    pending.push(Token::Node(right.as_ref()));
                    pending.push(Token::Text(", "));
                    pending.push(Token::Node(left.as_ref()));
                }
            }
        }
        Ok(())
    }
}

static_assertions::assert_impl_all!(Tree<i32>: Send, Sync);
