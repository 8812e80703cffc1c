// =====================================================================
// File: bst/tree.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Index Comparison Project
// Date: Oct. 9, 2025 - Refactored Oct. 13, 2025
//
// Description:
//   Implements the unbalanced binary search tree index (`BstIndex`).
//   Shape depends only on insertion order: no rotations, no height
//   bookkeeping.
//
// Features:
//   - `insert` / `search` / `remove` with the same contract as the AVL
//     index (duplicates ignored, successor used for two-child removal).
//   - Pre-order, in-order, post-order and reverse in-order traversals.
//   - `predecessor` / `successor` of any id, stored or not.
//
// Notes:
//   * A sorted insert order degenerates the tree into a list, so every
//     walk here is a loop. Drop is iterative for the same reason.
// =====================================================================
use std::cmp::Ordering;
use std::io::{self, Write};

use super::node::{BstNode, InOrder, Link, PostOrder, PreOrder};
use crate::Record;


#[derive(Debug, Default)]
pub struct BstIndex {
    root: Link,
    len: usize,
}


impl BstIndex {
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
    pub fn root(&self) -> Option<&BstNode> {
        self.root.as_deref()
    }

    /// Number of levels on the longest root-to-leaf path (0 when empty).
    pub fn height(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(&BstNode, usize)> =
            self.root.as_deref().map(|node| (node, 1)).into_iter().collect();

        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(node.left.as_deref().map(|left| (left, depth + 1)));
            stack.extend(node.right.as_deref().map(|right| (right, depth + 1)));
        }
        deepest
    }

    /// Search for a record by id.
    ///
    /// # Example
    /// ```
    /// use record_index::{BstIndex, Record};
    /// let mut t = BstIndex::new();
    /// t.insert(Record::new(40, "ABCD", 30));
    /// assert_eq!(t.search(40).map(|r| r.name.as_str()), Some("ABCD"));
    /// assert!(t.search(0).is_none());
    /// ```
    pub fn search(&self, id: i64) -> Option<&Record> {
        let mut node = self.root.as_deref();
        while let Some(current) = node {
            if id == current.record.id {
                return Some(&current.record);
            }
            node = if id < current.record.id {
                current.left.as_deref()
            } else {
                current.right.as_deref()
            };
        }
        None
    }

    /// Insert a record at the empty slot its id leads to.
    ///
    /// Returns `false` (keeping the stored record) if the id exists.
    pub fn insert(&mut self, record: Record) -> bool {
        let mut slot = &mut self.root;

        while let Some(node) = slot {
            if record.id == node.record.id {
                return false;
            }
            slot = if record.id < node.record.id {
                &mut node.left
            } else {
                &mut node.right
            };
        }

        *slot = Some(Box::new(BstNode::new(record)));
        self.len += 1;
        true
    }

    /// Remove the record with this id.
    ///
    /// - Leaf or single child: the node is replaced by its child (if any).
    /// - Two children: the in-order successor (minimum of the right
    ///   subtree) is unlinked and its record moves into this node.
    ///
    /// Returns `true` if a record was removed; a missing id is a no-op.
    ///
    /// # Example
    /// ```
    /// use record_index::{BstIndex, Record};
    /// let mut t = BstIndex::new();
    /// for id in [50, 30, 70] {
    ///     t.insert(Record::new(id, "NAME", 1));
    /// }
    /// assert!(t.remove(50));
    /// assert_eq!(t.root().unwrap().record.id, 70);
    /// assert!(!t.remove(50));
    /// ```
    pub fn remove(&mut self, id: i64) -> bool {
        let mut slot = &mut self.root;

        // Peek at the id first; only reborrow when the walk goes on
        while let Some(ordering) = slot.as_deref().map(|node| id.cmp(&node.record.id)) {
            if ordering == Ordering::Equal {
                break;
            }
            let Some(node) = slot else {
                break;
            };
            slot = if ordering == Ordering::Less {
                &mut node.left
            } else {
                &mut node.right
            };
        }

        let Some(mut node) = slot.take() else {
            return false;
        };

        *slot = match (node.left.take(), node.right.take()) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (Some(left), Some(right)) => {
                node.left = Some(left);
                node.right = Some(right);
                if let Some(successor) = Self::take_min(&mut node.right) {
                    node.record = successor;
                }
                Some(node)
            }
        };

        self.len -= 1;
        true
    }

    /// Largest stored id strictly below `id`, or `None`.
    ///
    /// # Example
    /// ```
    /// use record_index::{BstIndex, Record};
    /// let mut t = BstIndex::new();
    /// for id in [50, 30, 70, 20, 40] {
    ///     t.insert(Record::new(id, "NAME", 1));
    /// }
    /// assert_eq!(t.predecessor(40), Some(30));
    /// assert_eq!(t.predecessor(45), Some(40));
    /// assert_eq!(t.predecessor(20), None);
    /// ```
    pub fn predecessor(&self, id: i64) -> Option<i64> {
        let mut candidate = None;
        let mut node = self.root.as_deref();
        while let Some(current) = node {
            if current.record.id < id {
                candidate = Some(current.record.id);
                node = current.right.as_deref();
            } else {
                node = current.left.as_deref();
            }
        }
        candidate
    }

    /// Smallest stored id strictly above `id`, or `None`.
    pub fn successor(&self, id: i64) -> Option<i64> {
        let mut candidate = None;
        let mut node = self.root.as_deref();
        while let Some(current) = node {
            if current.record.id > id {
                candidate = Some(current.record.id);
                node = current.left.as_deref();
            } else {
                node = current.right.as_deref();
            }
        }
        candidate
    }

    pub fn pre_order(&self) -> PreOrder<'_> {
        PreOrder::new(self.root.as_deref())
    }

    /// Ascending id order.
    pub fn in_order(&self) -> InOrder<'_> {
        InOrder::new(self.root.as_deref(), false)
    }

    pub fn post_order(&self) -> PostOrder<'_> {
        PostOrder::new(self.root.as_deref())
    }

    /// Descending id order.
    pub fn reverse_in_order(&self) -> InOrder<'_> {
        InOrder::new(self.root.as_deref(), true)
    }

    pub fn print_pre_order<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write_records(out, self.pre_order())
    }

    pub fn print_in_order<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write_records(out, self.in_order())
    }

    pub fn print_post_order<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write_records(out, self.post_order())
    }

    pub fn print_reverse_in_order<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write_records(out, self.reverse_in_order())
    }

    #[cfg(test)]
    pub(crate) fn from_root(root: Link, len: usize) -> Self {
        Self { root, len }
    }

    /// Drops every node.
    pub fn clear(&mut self) {
        let mut stack: Vec<Box<BstNode>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
        self.len = 0;
    }

    /// Unlinks the minimum node below `slot` and returns its record. The
    /// node's right subtree takes its place.
    fn take_min(mut slot: &mut Link) -> Option<Record> {
        while slot.as_ref().is_some_and(|node| node.left.is_some()) {
            let Some(node) = slot else {
                break;
            };
            slot = &mut node.left;
        }

        let mut min = slot.take()?;
        *slot = min.right.take();
        Some(min.record)
    }
}


impl Drop for BstIndex {
    fn drop(&mut self) {
        self.clear();
    }
}


fn write_records<'a, W, I>(out: &mut W, records: I) -> io::Result<()>
where
    W: Write,
    I: Iterator<Item = &'a Record>,
{
    for record in records {
        writeln!(out, "{record}")?;
    }
    Ok(())
}
