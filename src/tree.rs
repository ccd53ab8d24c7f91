//! An owned BST over unique values. The tree does not balance itself on every mutation.
//! Instead it is built balanced from a sorted sequence and can be rebuilt on demand with
//! [`Tree::rebalance`] after inserts and deletes have skewed it.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::{Order, Tree};
//!
//! let mut tree = Tree::build(1..=7);
//!
//! // The middle element becomes the root.
//! assert_eq!(tree.root().map(|n| *n.value()), Some(4));
//! assert!(tree.is_balanced());
//!
//! // Keep adding to the right until the tree tips over.
//! for x in 8..=10 {
//!     tree.insert(x);
//! }
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert!(tree.is_balanced());
//!
//! let expected: Vec<i32> = (1..=10).collect();
//! assert_eq!(tree.traverse(Order::In), expected.iter().collect::<Vec<_>>());
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;
use std::mem;

use crate::error::TreeError;

/// An owned, possibly empty, subtree.
type Link<T> = Option<Box<Node<T>>>;

/// A Binary Search Tree of unique values. Values act as their own keys so there is no separate
/// associated value to store.
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

/// A `Node` holds one value and exclusively owns its two (possibly empty) subtrees.
pub struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

/// The order in which a traversal visits the nodes of a tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Order {
    /// Breadth first, top to bottom and left to right within a level.
    Level,
    /// A node, then its left subtree, then its right subtree.
    Pre,
    /// The left subtree, then the node, then the right subtree. This yields ascending values.
    In,
    /// The left subtree, then the right subtree, then the node.
    Post,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    // A skewed tree is as deep as it is long so dropping it recursively could blow the stack.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone,
{
    // Rebuilds bottom up in post-order: both cloned children are on top of `built` by the time
    // their parent is reached, right above left.
    fn clone(&self) -> Self {
        let mut built: Vec<Box<Node<T>>> = Vec::with_capacity(self.len);
        walk(self.root(), Order::Post, |node| {
            let right = if node.right.is_some() { built.pop() } else { None };
            let left = if node.left.is_some() { built.pop() } else { None };
            built.push(Box::new(Node {
                value: node.value.clone(),
                left,
                right,
            }));
        });

        Self {
            root: built.pop(),
            len: self.len,
        }
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    // The level order of a BST pins down its shape, so there is no need to nest.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("level_order", &self.level_order())
            .finish()
    }
}

impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left().map(Node::value))
            .field("right", &self.right().map(Node::value))
            .finish()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Builds a balanced tree from strictly ascending values.
    ///
    /// The element at index `(len - 1) / 2` becomes the root and both halves around it are built
    /// the same way, so the resulting tree has `O(lg N)` height. Passing values that are not
    /// strictly ascending produces a tree that breaks the BST ordering; debug builds panic instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::build(vec![1, 2, 3, 4]);
    ///
    /// assert_eq!(tree.root().map(|n| *n.value()), Some(2));
    /// assert_eq!(tree.len(), 4);
    /// assert!(tree.is_balanced());
    /// ```
    pub fn build<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Ord,
    {
        let values: Vec<T> = values.into_iter().collect();
        if cfg!(debug_assertions) {
            assert!(
                values.windows(2).all(|pair| pair[0] < pair[1]),
                "Tree::build requires strictly ascending values"
            );
        }

        let len = values.len();
        Self {
            root: build_link(values),
            len,
        }
    }

    /// The root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// How many values are stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts the value as a new leaf. Returns `false` and leaves the tree untouched if the value
    /// is already present. Inserting never rebalances.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Equal => return false,
                Ordering::Greater => &mut node.right,
            };
        }

        *link = Some(Box::new(Node::new(value)));
        self.len += 1;
        true
    }

    /// Deletes the given value from the tree and returns it. If the tree does not contain the
    /// value, nothing happens and `None` is returned.
    ///
    /// A node with two children is not unlinked. It takes on the value of its in-order successor
    /// and the successor is removed from the right subtree instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree = Tree::build(1..=7);
    ///
    /// assert_eq!(tree.delete(&4), Some(4));
    /// assert_eq!(tree.delete(&4), None);
    ///
    /// // 5 was the smallest value right of 4 so it took its place.
    /// assert_eq!(tree.root().map(|n| *n.value()), Some(5));
    /// ```
    pub fn delete(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let deleted = delete_from(&mut self.root, value);
        if deleted.is_some() {
            self.len -= 1;
        }
        deleted
    }

    /// Potentially finds the node holding the given value. If no node has the value, `None` is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::build(vec![1, 2, 3]);
    ///
    /// assert_eq!(tree.find(&3).map(|n| *n.value()), Some(3));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        self.search(value).map(|(node, _)| node)
    }

    /// Whether the tree holds the given value.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.find(value).is_some()
    }

    /// The height of the node holding `value`: the number of edges on the longest path from it
    /// down to a leaf. A leaf has height 0.
    ///
    /// # Errors
    ///
    /// [`TreeError::ValueNotFound`] if the tree does not contain `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::{Tree, TreeError};
    ///
    /// let tree = Tree::build(1..=7);
    ///
    /// assert_eq!(tree.height(&4), Ok(2));
    /// assert_eq!(tree.height(&1), Ok(0));
    /// assert_eq!(tree.height(&8), Err(TreeError::ValueNotFound));
    /// ```
    pub fn height(&self, value: &T) -> Result<usize, TreeError>
    where
        T: Ord,
    {
        self.find(value)
            .map(Node::height)
            .ok_or(TreeError::ValueNotFound)
    }

    /// The number of edges between the root and the node holding `value`.
    ///
    /// # Errors
    ///
    /// [`TreeError::ValueNotFound`] if the tree does not contain `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::build(1..=7);
    ///
    /// assert_eq!(tree.depth(&4), Ok(0));
    /// assert_eq!(tree.depth(&1), Ok(2));
    /// assert!(tree.depth(&0).is_err());
    /// ```
    pub fn depth(&self, value: &T) -> Result<usize, TreeError>
    where
        T: Ord,
    {
        self.search(value)
            .map(|(_, depth)| depth)
            .ok_or(TreeError::ValueNotFound)
    }

    /// Whether, for every node, the heights of its two subtrees differ by at most one. An empty
    /// tree is balanced.
    pub fn is_balanced(&self) -> bool {
        self.root().map_or(true, Node::is_balanced)
    }

    /// Rebuilds the tree from its own sorted values so that it is balanced again, however skewed
    /// inserts and deletes have left it. The set of values does not change.
    pub fn rebalance(&mut self)
    where
        T: Ord,
    {
        let values = self.drain_sorted();
        *self = Self::build(values);
    }

    /// Every value in the tree, in the given order.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::{Order, Tree};
    ///
    /// let tree = Tree::build(vec![1, 2, 3]);
    ///
    /// assert_eq!(tree.traverse(Order::Level), vec![&2, &1, &3]);
    /// assert_eq!(tree.traverse(Order::Post), vec![&1, &3, &2]);
    /// ```
    pub fn traverse(&self, order: Order) -> Vec<&T> {
        self.traverse_with(order, |_| {})
    }

    /// Like [`Tree::traverse`] but also hands every node to `visitor` as it is visited.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::{Order, Tree};
    ///
    /// let tree = Tree::build(vec![1, 2, 3]);
    ///
    /// let mut leaves = Vec::new();
    /// let values = tree.traverse_with(Order::Pre, |node| {
    ///     if node.is_leaf() {
    ///         leaves.push(*node.value());
    ///     }
    /// });
    ///
    /// assert_eq!(values, vec![&2, &1, &3]);
    /// assert_eq!(leaves, vec![1, 3]);
    /// ```
    pub fn traverse_with<F>(&self, order: Order, mut visitor: F) -> Vec<&T>
    where
        F: FnMut(&Node<T>),
    {
        let mut values = Vec::with_capacity(self.len);
        walk(self.root(), order, |node| {
            visitor(node);
            values.push(&node.value);
        });
        values
    }

    /// Values in breadth first order.
    pub fn level_order(&self) -> Vec<&T> {
        self.traverse(Order::Level)
    }

    /// Values in pre-order.
    pub fn preorder(&self) -> Vec<&T> {
        self.traverse(Order::Pre)
    }

    /// Values in ascending order.
    pub fn inorder(&self) -> Vec<&T> {
        self.traverse(Order::In)
    }

    /// Values in post-order.
    pub fn postorder(&self) -> Vec<&T> {
        self.traverse(Order::Post)
    }

    /// Finds the node holding `value` along with its depth, descending by comparison.
    fn search(&self, value: &T) -> Option<(&Node<T>, usize)>
    where
        T: Ord,
    {
        let mut link = self.root();
        let mut depth = 0;
        while let Some(node) = link {
            link = match value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some((node, depth)),
                Ordering::Greater => node.right(),
            };
            depth += 1;
        }

        None
    }

    /// Empties the tree, moving its values out in ascending order.
    fn drain_sorted(&mut self) -> Vec<T> {
        let mut values = Vec::with_capacity(self.len);
        let mut stack = Vec::new();
        let mut current = self.root.take();
        self.len = 0;

        loop {
            while let Some(mut node) = current {
                current = node.left.take();
                stack.push(node);
            }
            let Some(node) = stack.pop() else {
                break;
            };
            let Node { value, right, .. } = *node;
            values.push(value);
            current = right;
        }

        values
    }
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The number of edges on the longest path from this node down to a leaf.
    pub fn height(&self) -> usize {
        self.levels(|_, _| true).map_or(0, |levels| levels - 1)
    }

    /// Whether the subtree rooted at this node is balanced. See [`Tree::is_balanced`].
    pub fn is_balanced(&self) -> bool {
        self.levels(|left, right| left.abs_diff(right) <= 1).is_some()
    }

    /// Counts the levels of this subtree (an empty subtree has zero, a leaf has one) with a single
    /// post-order pass. `accept` is handed the level counts of the left and right subtrees of every
    /// node and stops the pass by returning `false`, in which case `None` is returned.
    fn levels(&self, mut accept: impl FnMut(usize, usize) -> bool) -> Option<usize> {
        let mut post_order = Vec::new();
        walk(Some(self), Order::Post, |node| post_order.push(node));

        // Children are finished before their parent so their counts sit on top of the stack,
        // right above left.
        let mut levels = Vec::new();
        for node in post_order {
            let right = if node.right.is_some() { levels.pop()? } else { 0 };
            let left = if node.left.is_some() { levels.pop()? } else { 0 };
            if !accept(left, right) {
                return None;
            }
            levels.push(left.max(right) + 1);
        }

        levels.pop()
    }
}

/// Builds a balanced subtree from ascending values, rooted at index `(len - 1) / 2`.
fn build_link<T>(mut values: Vec<T>) -> Link<T> {
    let mid = values.len().checked_sub(1)? / 2;
    let right = values.split_off(mid + 1);
    let value = values.pop()?;

    Some(Box::new(Node {
        value,
        left: build_link(values),
        right: build_link(right),
    }))
}

/// Deletes `value` from the subtree at `link`, relinking the parent (or the root) in place, and
/// returns the deleted value if it was found.
fn delete_from<T>(mut link: &mut Link<T>, value: &T) -> Option<T>
where
    T: Ord,
{
    // The comparison is finished before stepping down so no borrow of `link` outlives the loop.
    loop {
        let ordering = value.cmp(&link.as_ref()?.value);
        match ordering {
            Ordering::Less => link = &mut link.as_mut()?.left,
            Ordering::Equal => break,
            Ordering::Greater => link = &mut link.as_mut()?.right,
        }
    }

    // Two children: promote the in-order successor, the smallest value on our right.
    let node = link.as_mut()?;
    if node.left.is_some() && node.right.is_some() {
        let successor = take_smallest(&mut node.right)?;
        return Some(mem::replace(&mut node.value, successor));
    }

    // Zero or one child - splice the child (or nothing) up into our place.
    let Node {
        value: deleted,
        left,
        right,
    } = *link.take()?;
    *link = left.or(right);
    Some(deleted)
}

/// Removes the leftmost node of the subtree at `link`, splicing its right child into its place,
/// and returns its value.
fn take_smallest<T>(mut link: &mut Link<T>) -> Option<T> {
    while link.as_ref()?.left.is_some() {
        link = &mut link.as_mut()?.left;
    }

    let Node { value, right, .. } = *link.take()?;
    *link = right;
    Some(value)
}

/// Hands every node under `root` to `visit` in the given order. Uses an explicit queue or stack
/// so the depth of the tree doesn't matter.
fn walk<'a, T>(root: Option<&'a Node<T>>, order: Order, mut visit: impl FnMut(&'a Node<T>)) {
    let Some(root) = root else {
        return;
    };

    match order {
        Order::Level => {
            let mut queue = VecDeque::from([root]);
            while let Some(node) = queue.pop_front() {
                visit(node);
                queue.extend(node.left());
                queue.extend(node.right());
            }
        }
        Order::Pre => {
            let mut stack = vec![root];
            while let Some(node) = stack.pop() {
                visit(node);
                stack.extend(node.right());
                stack.extend(node.left());
            }
        }
        Order::In => {
            let mut stack = Vec::new();
            let mut current = Some(root);
            loop {
                while let Some(node) = current {
                    stack.push(node);
                    current = node.left();
                }
                let Some(node) = stack.pop() else {
                    break;
                };
                visit(node);
                current = node.right();
            }
        }
        Order::Post => {
            // A node-right-left pre-order, reversed.
            let mut stack = vec![root];
            let mut reversed = Vec::new();
            while let Some(node) = stack.pop() {
                reversed.push(node);
                stack.extend(node.left());
                stack.extend(node.right());
            }
            reversed.into_iter().rev().for_each(visit);
        }
    }
}
