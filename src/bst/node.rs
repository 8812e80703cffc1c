// =====================================================================
// File: bst/node.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Index Comparison Project
// Date: Oct. 9, 2025
//
// Description:
//   Defines the plain binary search tree node (`BstNode`) and the four
//   lazy traversal iterators (pre-order, in-order, post-order, reverse
//   in-order).
//
// Notes:
//   * The tree is never rebalanced, so its depth can equal the number
//     of records. Every traversal keeps an explicit stack instead of
//     recursing.
// =====================================================================
use crate::Record;

pub type Link = Option<Box<BstNode>>;


#[derive(Debug)]
pub struct BstNode {
    pub record: Record,
    pub left: Link,
    pub right: Link,
}


impl BstNode {
    pub fn new(record: Record) -> Self {
        Self {
            record,
            left: None,
            right: None,
        }
    }
}


/// Node, then left subtree, then right subtree.
pub struct PreOrder<'a> {
    stack: Vec<&'a BstNode>,
}

impl<'a> PreOrder<'a> {
    pub(crate) fn new(root: Option<&'a BstNode>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes in first so left comes out first
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        Some(&node.record)
    }
}


/// Ascending id order. With `descending` set, walks the mirror image
/// (right subtree first) and yields ids in descending order.
pub struct InOrder<'a> {
    stack: Vec<&'a BstNode>,
    descending: bool,
}

impl<'a> InOrder<'a> {
    pub(crate) fn new(root: Option<&'a BstNode>, descending: bool) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            descending,
        };
        iter.push_spine(root);
        iter
    }

    fn push_spine(&mut self, mut node: Option<&'a BstNode>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = if self.descending {
                current.right.as_deref()
            } else {
                current.left.as_deref()
            };
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let far_side = if self.descending {
            node.left.as_deref()
        } else {
            node.right.as_deref()
        };
        self.push_spine(far_side);
        Some(&node.record)
    }
}


/// Left subtree, then right subtree, then node.
pub struct PostOrder<'a> {
    // (node, children already scheduled)
    stack: Vec<(&'a BstNode, bool)>,
}

impl<'a> PostOrder<'a> {
    pub(crate) fn new(root: Option<&'a BstNode>) -> Self {
        Self {
            stack: root.map(|node| (node, false)).into_iter().collect(),
        }
    }
}

impl<'a> Iterator for PostOrder<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(&node.record);
            }
            self.stack.push((node, true));
            self.stack.extend(node.right.as_deref().map(|right| (right, false)));
            self.stack.extend(node.left.as_deref().map(|left| (left, false)));
        }
    }
}
