//! An owning, unbalanced BST. Every `Tree` is a node: it always holds a
//! value, and each of its two children is either absent or a subtree it
//! exclusively owns.
//!
//! # Examples
//!
//! ```
//! use ordtree::Tree;
//!
//! let mut tree = Tree::new(5);
//! for x in [3, 8, 1, 4, 7, 9] {
//!     tree.insert(x);
//! }
//!
//! assert!(tree.contains(&4));
//! assert!(!tree.contains(&6));
//!
//! // In-order traversal visits values in ascending order.
//! let sorted: Vec<_> = tree.in_order().copied().collect();
//! assert_eq!(sorted, [1, 3, 4, 5, 7, 8, 9]);
//! ```

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::traversal::{Order, Traversal};

/// Child slot of a node. `None` is a vacant position where a new leaf can be
/// attached.
type Link<T> = Option<Box<Tree<T>>>;

/// A Binary Search Tree rooted at a node holding `value`. This can be used
/// for inserting values, checking membership and walking the values in
/// in-order, pre-order or post-order.
///
/// There is no empty tree and no rebalancing: inserting values in sorted
/// order yields a tree as deep as it is long.
#[derive(Clone, Debug)]
pub struct Tree<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

// A tree is never empty, so `len` has no `is_empty` counterpart.
#[allow(clippy::len_without_is_empty)]
impl<T> Tree<T> {
    /// Creates a tree made of a single node holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Builds a tree rooted at `first` and inserts every value of `rest` in
    /// order. Values already present are skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let tree = Tree::from_values(2, [1, 3, 1]);
    ///
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.value(), &2);
    /// ```
    pub fn from_values<I>(first: T, rest: I) -> Self
    where
        T: Ord,
        I: IntoIterator<Item = T>,
    {
        let mut tree = Self::new(first);
        tree.extend(rest);
        tree
    }

    /// The value stored at the root of this tree.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The subtree holding every value less than [`value`][Self::value], if
    /// there is one.
    pub fn left(&self) -> Option<&Tree<T>> {
        self.left.as_deref()
    }

    /// The subtree holding every value greater than [`value`][Self::value],
    /// if there is one.
    pub fn right(&self) -> Option<&Tree<T>> {
        self.right.as_deref()
    }

    /// Inserts `value` as a new leaf at the first vacant slot along its
    /// comparison path and returns `true`.
    ///
    /// If a value comparing equal is already in the tree nothing changes and
    /// `false` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let mut tree = Tree::new(2);
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let mut depth = 1;
        let mut slot = match Self::child_for(&value, &self.value) {
            Some(Ordering::Less) => &mut self.left,
            Some(_) => &mut self.right,
            None => {
                debug!(depth, "ignoring duplicate insert");
                return false;
            }
        };

        // Walk down the owned links rather than recursing so a skewed tree
        // can't overflow the stack.
        while let Some(node) = slot {
            depth += 1;
            slot = match Self::child_for(&value, &node.value) {
                Some(Ordering::Less) => &mut node.left,
                Some(_) => &mut node.right,
                None => {
                    debug!(depth, "ignoring duplicate insert");
                    return false;
                }
            };
        }

        *slot = Some(Box::new(Self::new(value)));
        trace!(depth = depth + 1, "attached leaf");
        true
    }

    /// Returns `true` if some node in this tree holds a value comparing
    /// equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let tree = Tree::from_values(2, [1, 3]);
    ///
    /// assert!(tree.contains(&3));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        let mut node = self;
        loop {
            let next = match value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right(),
            };
            match next {
                Some(child) => node = child,
                None => return false,
            }
        }
    }

    /// Number of nodes in this tree. Never zero.
    pub fn len(&self) -> usize {
        1 + self.left().map_or(0, Tree::len) + self.right().map_or(0, Tree::len)
    }

    /// How many levels are in this tree. A node with no children has a
    /// height of 1.
    pub fn height(&self) -> usize {
        let left = self.left().map_or(0, Tree::height);
        let right = self.right().map_or(0, Tree::height);
        left.max(right) + 1
    }

    /// Walks the whole tree once in the given `order` and returns a
    /// traversal over the buffered values.
    pub fn traverse(&self, order: Order) -> Traversal<'_, T> {
        Traversal::new(self, order)
    }

    /// Values in ascending order: left subtree, node, right subtree.
    pub fn in_order(&self) -> Traversal<'_, T> {
        self.traverse(Order::InOrder)
    }

    /// Values root first: node, left subtree, right subtree. Inserting them
    /// in this order into a fresh tree reproduces this tree's shape.
    pub fn pre_order(&self) -> Traversal<'_, T> {
        self.traverse(Order::PreOrder)
    }

    /// Values children first: left subtree, right subtree, node.
    pub fn post_order(&self) -> Traversal<'_, T> {
        self.traverse(Order::PostOrder)
    }

    /// Which way `value` goes relative to `current`, or `None` if they are
    /// equal.
    fn child_for(value: &T, current: &T) -> Option<Ordering>
    where
        T: Ord,
    {
        match value.cmp(current) {
            Ordering::Equal => None,
            ord => Some(ord),
        }
    }
}

impl<T> Drop for Tree<T> {
    // Dropping the boxes one by one from a stack keeps a skewed tree from
    // recursing once per level.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Tree<T>>> = Vec::new();
        stack.extend(self.left.take());
        stack.extend(self.right.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Traversal<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}
