//! Errors surfaced while consuming a [`Traversal`][crate::Traversal].

use thiserror::Error;

/// Everything that can go wrong when pulling values out of a traversal.
///
/// Building or querying a [`Tree`][crate::Tree] never fails. Inserting a
/// duplicate is not an error either: [`Tree::insert`][crate::Tree::insert]
/// reports it by returning `false`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// `next_value` was called after every buffered value was consumed.
    #[error("traversal is exhausted")]
    EmptyState,

    /// A traversal was asked to remove a value from the tree it walks.
    #[error("removing values through a traversal is not supported")]
    Unsupported,
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
