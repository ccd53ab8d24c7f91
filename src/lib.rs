//! This crate exposes a Binary Search Tree that is built balanced and can be
//! rebalanced on demand, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value
//! and will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is the longest
//! path from the root `Node` to a leaf `Node`). Building the tree from a sorted
//! sequence by always picking the middle element as the root limits the height to
//! `O(lg N)`. Plain inserts and deletes don't preserve that, so the tree can check
//! whether it is still balanced and rebuild itself from its sorted values when it isn't.
//!
//! ## Features
//!
//! - `array-gen` (default): [`ArrayGen`][array_gen::ArrayGen] and `Tree::random` for
//!   building trees out of random distinct values.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

#[cfg(feature = "array-gen")]
pub mod array_gen;
mod display;
pub mod error;
pub mod tree;


#[cfg(feature = "array-gen")]
pub use error::GenerateError;
pub use error::TreeError;
pub use tree::{Node, Order, Tree};
