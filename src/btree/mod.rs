// =====================================================================
// File: btree/mod.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Index Comparison Project
// Date: Oct. 10, 2025
//
//! The `btree` module contains the multiway B-tree record index.
//!
//! Structure:
//! - `node.rs`  : Defines the [`BTreeNode`] structure, its lookup helper
//!                and the in-order [`Iter`].
//! - `tree.rs`  : Defines the [`BTreeIndex`] and its algorithms
//!                (insert, search, remove, split, borrow, merge).
//! - `tests.rs` : Unit tests for the B-tree (compiled only in test mode).
// =====================================================================

pub mod node;
pub mod tree;

pub use self::node::{BTreeNode, Iter};
pub use self::tree::{BTreeIndex, MIN_DEGREE};
