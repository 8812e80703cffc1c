// =====================================================================
// File: bst/mod.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Index Comparison Project
// Date: Oct. 9, 2025
//
//! The `bst` module contains the unbalanced binary search tree index.
//!
//! Structure:
//! - `node.rs`  : Defines [`BstNode`] and the traversal iterators.
//! - `tree.rs`  : Defines [`BstIndex`] (insert, search, remove,
//!                traversals, predecessor/successor).
//! - `tests.rs` : Unit tests (compiled only in test mode).
// =====================================================================

pub mod node;
pub mod tree;

pub use self::node::{BstNode, InOrder, PostOrder, PreOrder};
pub use self::tree::BstIndex;

#[cfg(test)]
pub mod tests;
