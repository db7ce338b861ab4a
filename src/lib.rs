//! This crate exposes an unbalanced Binary Search Tree (BST), [`OrderedTree`], mostly for
//! educational purposes, together with a small duplicate character finder and the console
//! programs demonstrating both.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key
//! and will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). [`OrderedTree`] never rebalances, so the
//! height depends entirely on insertion order: shuffled keys give roughly `O(lg N)` while
//! sorted keys give a tree as tall as it has keys. BSTs also naturally support sorted
//! iteration by visiting the left subtree, then the subtree root, then the right subtree.
//!
//! ## Duplicate characters
//!
//! [`dupes::find_duplicates`] counts the characters of a string in one pass and reports those
//! seen more than once. It shares nothing with the tree.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod cli;
pub mod dupes;
pub mod error;
pub mod tree;

pub use tree::OrderedTree;
