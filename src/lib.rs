//! This crate exposes two Binary Search Trees (BSTs) over a single ordered
//! key per node: a plain one in [`unbalanced`] and a self-balancing one in
//! [`avl`].
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! add, find, and remove stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores the key that
//! was added and will sometimes have child `Node`s. The most important
//! invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Both trees here also keep keys distinct: adding a key that compares
//! equal to a stored one leaves the tree as it was. Keys are matched by
//! their ordering, never by identity, so `get` and `remove` hand back the
//! instance that was stored rather than the one passed in.
//!
//! Searching for keys in the tree takes `O(height)` (where `height` is the
//! number of edges on the longest path from the root `Node` to a leaf
//! `Node`). The [`avl`] tree limits the height to `O(lg N)` where `N` is the
//! number of nodes in the tree; the [`unbalanced`] tree can degrade to
//! `O(N)`. BSTs also naturally support sorted iteration by visiting the
//! left subtree, then the subtree root, then the right subtree.
//!
//! # Examples
//!
//! ```
//! use ordtree::{avl, unbalanced, Error};
//!
//! let plain: unbalanced::Tree<_> = (0..7).collect();
//! let balanced: avl::Tree<_> = (0..7).collect();
//!
//! assert_eq!(plain.inorder(), balanced.inorder());
//! assert_eq!(plain.height(), 6);
//! assert_eq!(balanced.height(), 2);
//!
//! assert!(matches!(
//!     balanced.sorted_in_between(&5, &3),
//!     Err(Error::InvalidArgument(_))
//! ));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod avl;
mod error;
pub mod unbalanced;
mod util;


pub use error::Error;
