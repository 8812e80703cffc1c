// =====================================================================
// File: avl/mod.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Index Comparison Project
// Date: Oct. 7, 2025
//
//! The `avl` module contains the height-balanced binary record index.
//!
//! Structure:
//! - `node.rs`  : Defines [`AvlNode`], rotations and the rebalance step.
//! - `tree.rs`  : Defines [`AvlIndex`] (insert, search, remove, iter).
//! - `tests.rs` : Unit tests (compiled only in test mode).
// =====================================================================

pub mod node;
pub mod tree;

pub use self::node::AvlNode;
pub use self::tree::{AvlIndex, Iter};
