// =====================================================================
// File: avl/tree.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Index Comparison Project
// Date: Oct. 7, 2025 - Refactored Oct. 13, 2025
//
// Description:
//   Implements the AVL record index (`AvlIndex`): a binary search tree
//   keyed by record id that rebalances every ancestor of a changed node
//   on the way back up, so the heights of sibling subtrees never differ
//   by more than one.
//
// Features:
//   - `insert`: Adds a record; duplicate ids are ignored (first wins).
//   - `search`: Returns the record for an id.
//   - `remove`: Removes an id, using the in-order successor for nodes
//               with two children.
//   - `iter` / `print`: Ascending traversal.
// =====================================================================
use std::cmp::Ordering;
use std::io::{self, Write};

use super::node::{AvlNode, Link, rebalance};
use crate::Record;


#[derive(Debug, Default)]
pub struct AvlIndex {
    root: Link,
    len: usize,
}


impl AvlIndex {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Read-only view of the root node.
    pub fn root(&self) -> Option<&AvlNode> {
        self.root.as_deref()
    }

    /// Height of the whole tree (0 when empty).
    pub fn height(&self) -> usize {
        self.root.as_ref().map_or(0, |node| node.height as usize)
    }

    /// Search for a record by id.
    ///
    /// # Example
    /// ```
    /// use record_index::{AvlIndex, Record};
    /// let mut t = AvlIndex::new();
    /// t.insert(Record::new(40, "ABCD", 30));
    /// assert_eq!(t.search(40).map(|r| r.age), Some(30));
    /// assert!(t.search(41).is_none());
    /// ```
    pub fn search(&self, id: i64) -> Option<&Record> {
        let mut node = self.root.as_deref();
        while let Some(current) = node {
            node = match id.cmp(&current.record.id) {
                Ordering::Less => current.left.as_deref(),
                Ordering::Greater => current.right.as_deref(),
                Ordering::Equal => return Some(&current.record),
            };
        }
        None
    }

    /// Insert a record, rebalancing every ancestor of the new leaf.
    ///
    /// Returns `false` (and keeps the stored record) if the id exists.
    ///
    /// # Example
    /// ```
    /// use record_index::{AvlIndex, Record};
    ///
    /// let mut t = AvlIndex::new();
    /// // Ascending inserts would make a list in a plain BST
    /// for id in 1..=7 {
    ///     t.insert(Record::new(id, "NAME", 1));
    /// }
    /// assert_eq!(t.height(), 3);
    /// assert_eq!(t.root().unwrap().record.id, 4);
    ///
    /// assert!(!t.insert(Record::new(4, "OTHER", 2)));
    /// assert_eq!(t.search(4).unwrap().name, "NAME");
    /// ```
    pub fn insert(&mut self, record: Record) -> bool {
        let mut inserted = false;
        self.root = Some(Self::insert_node(self.root.take(), record, &mut inserted));
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Remove the record with this id, rebalancing every visited node.
    ///
    /// Returns `true` if a record was removed; a missing id is a no-op.
    ///
    /// # Example
    /// ```
    /// use record_index::{AvlIndex, Record};
    /// let mut t = AvlIndex::new();
    /// t.insert(Record::new(1, "ABCD", 20));
    /// assert!(t.remove(1));
    /// assert!(t.is_empty());
    /// assert!(!t.remove(1));
    /// ```
    pub fn remove(&mut self, id: i64) -> bool {
        let mut removed = false;
        self.root = Self::remove_node(self.root.take(), id, &mut removed);
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// In-order (ascending id) iterator.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.root.as_deref())
    }

    /// Writes every record, ascending by id, one line each.
    pub fn print<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for record in self.iter() {
            writeln!(out, "{record}")?;
        }
        Ok(())
    }


    // =========================
    // Recursive helpers
    // =========================

    fn insert_node(link: Link, record: Record, inserted: &mut bool) -> Box<AvlNode> {
        let Some(mut node) = link else {
            *inserted = true;
            return Box::new(AvlNode::new(record));
        };

        match record.id.cmp(&node.record.id) {
            Ordering::Less => {
                node.left = Some(Self::insert_node(node.left.take(), record, inserted));
            }
            Ordering::Greater => {
                node.right = Some(Self::insert_node(node.right.take(), record, inserted));
            }
            // Duplicate id, no insertion
            Ordering::Equal => return node,
        }

        rebalance(node)
    }

    fn remove_node(link: Link, id: i64, removed: &mut bool) -> Link {
        let mut node = link?;

        match id.cmp(&node.record.id) {
            Ordering::Less => node.left = Self::remove_node(node.left.take(), id, removed),
            Ordering::Greater => node.right = Self::remove_node(node.right.take(), id, removed),
            Ordering::Equal => {
                *removed = true;
                match (node.left.take(), node.right.take()) {
                    (None, None) => return None,
                    (Some(child), None) | (None, Some(child)) => return Some(child),
                    (Some(left), Some(right)) => {
                        // Successor record moves up into this node
                        let (rest, successor) = Self::take_min(right);
                        node.left = Some(left);
                        node.right = rest;
                        node.record = successor;
                    }
                }
            }
        }

        Some(rebalance(node))
    }

    /// Detaches the minimum node of a subtree, returning the rebalanced
    /// remainder and the detached record.
    fn take_min(mut node: Box<AvlNode>) -> (Link, Record) {
        match node.left.take() {
            None => {
                let AvlNode { record, right, .. } = *node;
                (right, record)
            }
            Some(left) => {
                let (rest, min) = Self::take_min(left);
                node.left = rest;
                (Some(rebalance(node)), min)
            }
        }
    }
}


/// Lazy in-order iterator over an AVL tree (explicit stack, depth-bounded
/// by the tree height).
pub struct Iter<'a> {
    stack: Vec<&'a AvlNode>,
}


impl<'a> Iter<'a> {
    fn new(root: Option<&'a AvlNode>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left(root);
        iter
    }

    fn push_left(&mut self, mut node: Option<&'a AvlNode>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left.as_deref();
        }
    }
}


impl<'a> Iterator for Iter<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        Some(&node.record)
    }
}
