//! This crate exposes a plain, owning Binary Search Tree together with
//! buffered in-order, pre-order and post-order traversals.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored values. BSTs are typically defined recursively
//! using the notion of a `Node`. A `Node` stores a value and will sometimes
//! have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Here every [`Tree`] is such a node: there is no empty tree, and each
//! child is either absent or a subtree exclusively owned by its parent.
//! Nothing rebalances the tree, so its height depends entirely on insertion
//! order. Inserting already sorted values builds a tree as deep as it is
//! long.
//!
//! ## Traversals
//!
//! [`Traversal`]s walk the tree depth-first in one of three [`Order`]s.
//! The in-order walk visits the left subtree, then the subtree root, then
//! the right subtree, which yields the values in sorted order. A traversal
//! buffers the whole walk up front and borrows the tree while it lives.
//!
//! ```
//! use ordtree::{Order, Tree};
//!
//! let mut tree = Tree::new(5);
//! tree.extend([3, 8, 1, 4, 7, 9]);
//!
//! let pre: Vec<_> = tree.traverse(Order::PreOrder).copied().collect();
//! assert_eq!(pre, [5, 3, 1, 4, 8, 7, 9]);
//! ```
//!
//! ## Logging
//!
//! Insertions and traversal construction emit [`tracing`] events at the
//! `trace` and `debug` levels. Installing a subscriber is up to the caller.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod traversal;
pub mod tree;


pub use error::{Error, Result};
pub use traversal::{Order, Traversal};
pub use tree::Tree;
