// =====================================================================
// File: avl/node.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Index Comparison Project
// Date: Oct. 7, 2025
//
// Description:
//   Defines the AVL node (`AvlNode`), the rotation primitives and the
//   rebalance step shared by insert and remove. Each node maintains:
//
//   - `record` : The record stored at this position.
//   - `left`   : Owned subtree of smaller ids (optional).
//   - `right`  : Owned subtree of larger ids (optional).
//   - `height` : Cached height of the subtree rooted here (leaf = 1).
// =====================================================================
use std::cmp::max;

use crate::Record;

pub type Link = Option<Box<AvlNode>>;


#[derive(Debug)]
pub struct AvlNode {
    pub record: Record,
    pub left: Link,
    pub right: Link,
    pub height: i32,
}


/// Height of an optional subtree (0 for an empty slot).
pub fn height(link: &Link) -> i32 {
    link.as_ref().map_or(0, |node| node.height)
}


impl AvlNode {
    /// New leaf node with height 1.
    pub fn new(record: Record) -> Self {
        Self {
            record,
            left: None,
            right: None,
            height: 1,
        }
    }

    /// Left height minus right height.
    pub fn balance_factor(&self) -> i32 {
        height(&self.left) - height(&self.right)
    }

    pub(crate) fn update_height(&mut self) {
        self.height = 1 + max(height(&self.left), height(&self.right));
    }
}


//        y              x
//       / \            / \
//      x   C   ==>    A   y
//     / \                / \
//    A   B              B   C
pub(crate) fn rotate_right(mut y: Box<AvlNode>) -> Box<AvlNode> {
    let Some(mut x) = y.left.take() else {
        return y;
    };
    y.left = x.right.take();
    y.update_height();
    x.right = Some(y);
    x.update_height();
    x
}


//      x                  y
//     / \                / \
//    A   y     ==>      x   C
//       / \            / \
//      B   C          A   B
pub(crate) fn rotate_left(mut x: Box<AvlNode>) -> Box<AvlNode> {
    let Some(mut y) = x.right.take() else {
        return x;
    };
    x.right = y.left.take();
    x.update_height();
    y.left = Some(x);
    y.update_height();
    y
}


/// Refreshes the node's height and restores the AVL condition with at
/// most two rotations. Returns the new root of this subtree.
pub(crate) fn rebalance(mut node: Box<AvlNode>) -> Box<AvlNode> {
    node.update_height();
    let factor = node.balance_factor();

    // Left heavy
    if factor > 1 {
        if node.left.as_ref().is_some_and(|left| left.balance_factor() < 0) {
            // Left-Right case
            node.left = node.left.take().map(rotate_left);
        }
        return rotate_right(node);
    }

    // Right heavy
    if factor < -1 {
        if node.right.as_ref().is_some_and(|right| right.balance_factor() > 0) {
            // Right-Left case
            node.right = node.right.take().map(rotate_right);
        }
        return rotate_left(node);
    }

    node
}
