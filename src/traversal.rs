//! Buffered depth-first traversals of a [`Tree`].
//!
//! A [`Traversal`] walks the whole tree as soon as it is built and keeps the
//! visited values in a queue. Consuming it pops values off the front of that
//! queue until nothing is left. It can't be rewound: build a new one to walk
//! the tree again.
//!
//! # Examples
//!
//! ```
//! use ordtree::{Error, Tree};
//!
//! let tree = Tree::from_values(5, [3, 8]);
//! let mut post = tree.post_order();
//!
//! assert_eq!(post.next_value(), Ok(&3));
//! assert_eq!(post.next_value(), Ok(&8));
//! assert_eq!(post.next_value(), Ok(&5));
//!
//! assert!(!post.has_next());
//! assert_eq!(post.next_value(), Err(Error::EmptyState));
//! ```

use std::collections::VecDeque;
use std::iter::FusedIterator;

use tracing::instrument;

use crate::error::{Error, Result};
use crate::tree::Tree;

/// When a node's own value is emitted relative to its subtrees.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Left subtree, node, right subtree. Yields values in ascending order.
    InOrder,
    /// Node, left subtree, right subtree. The root comes first.
    PreOrder,
    /// Left subtree, right subtree, node. The root comes last.
    PostOrder,
}

/// A one-shot, forward-only walk over the values of a [`Tree`].
///
/// The order is fixed when the traversal is built. It borrows the tree, so
/// the tree can't change underneath it.
#[derive(Clone, Debug)]
pub struct Traversal<'a, T> {
    order: Order,
    buffer: VecDeque<&'a T>,
}

impl<'a, T> Traversal<'a, T> {
    /// Walks `root` once in `order` and buffers every value it visits.
    #[instrument(level = "trace", skip(root))]
    pub fn new(root: &'a Tree<T>, order: Order) -> Self {
        let mut buffer = VecDeque::new();
        visit(root, order, &mut buffer);
        tracing::trace!(len = buffer.len(), "buffered traversal");
        Self { order, buffer }
    }

    /// The order this traversal was built with.
    pub fn order(&self) -> Order {
        self.order
    }

    /// Whether any values are left to consume.
    pub fn has_next(&self) -> bool {
        !self.buffer.is_empty()
    }

    /// Removes and returns the next value.
    ///
    /// Fails with [`Error::EmptyState`] once every value has been consumed.
    pub fn next_value(&mut self) -> Result<&'a T> {
        self.buffer.pop_front().ok_or(Error::EmptyState)
    }

    /// Removing values from the tree through a traversal isn't possible.
    /// This always fails with [`Error::Unsupported`] and leaves both the
    /// traversal and the tree untouched.
    pub fn remove(&mut self) -> Result<()> {
        Err(Error::Unsupported)
    }
}

/// Recursive depth-first walk pushing values onto `buffer` in `order`.
fn visit<'a, T>(node: &'a Tree<T>, order: Order, buffer: &mut VecDeque<&'a T>) {
    if order == Order::PreOrder {
        buffer.push_back(node.value());
    }
    if let Some(left) = node.left() {
        visit(left, order, buffer);
    }
    if order == Order::InOrder {
        buffer.push_back(node.value());
    }
    if let Some(right) = node.right() {
        visit(right, order, buffer);
    }
    if order == Order::PostOrder {
        buffer.push_back(node.value());
    }
}

impl<'a, T> Iterator for Traversal<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.buffer.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.buffer.len(), Some(self.buffer.len()))
    }
}

impl<T> ExactSizeIterator for Traversal<'_, T> {}

impl<T> FusedIterator for Traversal<'_, T> {}
