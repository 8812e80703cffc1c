// =====================================================================
// File: btree/node.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Index Comparison Project
// Date: Oct. 10, 2025
//
// Description:
//   Defines the B-tree node structure (`BTreeNode`) used by the
//   multiway record index. Each node maintains:
//
//   - `records`  : Records stored within the node, ascending by id.
//   - `children` : Owned child nodes (empty if this node is a leaf,
//                  otherwise exactly `records.len() + 1`).
//   - `is_leaf`  : Boolean flag indicating whether the node is a leaf.
//
// Notes:
//   * This file contains only the node representation, its lookup
//     helper and the in-order iterator. Insert/search/remove live in
//     `tree.rs`.
// =====================================================================
use crate::Record;


/// Basic Foundational BTree Node
#[derive(Debug)]
pub struct BTreeNode {
    pub records: Vec<Record>,
    /// Box keeps each child on the heap so the node stays a fixed size
    pub children: Vec<Box<BTreeNode>>,
    pub is_leaf: bool,
}


impl BTreeNode {
    /// Creates a new empty B-tree node.
    ///
    /// # Arguments
    ///
    /// * `is_leaf` - Whether this node is a leaf (has no children) or an
    ///   internal node.
    ///
    /// # Example
    /// ```
    /// use record_index::btree::BTreeNode;
    /// let leaf = BTreeNode::new(true);
    /// assert!(leaf.records.is_empty());
    /// assert!(leaf.is_leaf);
    /// ```
    pub fn new(is_leaf: bool) -> Self {
        Self {
            records: Vec::new(),
            children: Vec::new(),
            is_leaf,
        }
    }


    /// Binary search helper: returns the index of the first record whose
    /// id is >= `id`. If every stored id is smaller, returns
    /// `records.len()` (the "end" position, i.e. the last child).
    ///
    /// # Example
    /// ```
    /// use record_index::Record;
    /// use record_index::btree::BTreeNode;
    ///
    /// let mut node = BTreeNode::new(true);
    /// node.records.push(Record::new(10, "A", 1));
    /// node.records.push(Record::new(20, "B", 2));
    ///
    /// assert_eq!(node.lower_bound(5), 0);
    /// assert_eq!(node.lower_bound(20), 1);
    /// assert_eq!(node.lower_bound(25), 2);
    /// ```
    pub fn lower_bound(&self, id: i64) -> usize {
        self.records
            .binary_search_by(|rec| rec.id.cmp(&id))
            .unwrap_or_else(|pos| pos)
    }


    /// Returns `true` if a record with this id sits in this node at `idx`.
    pub(crate) fn holds(&self, idx: usize, id: i64) -> bool {
        idx < self.records.len() && self.records[idx].id == id
    }
}


/// Lazy in-order iterator over a B-tree.
///
/// Keeps a stack of `(node, next record index)` frames. Each record is
/// yielded after the child to its left has been fully visited, and
/// the child to its right is entered right after.
pub struct Iter<'a> {
    stack: Vec<(&'a BTreeNode, usize)>,
}


impl<'a> Iter<'a> {
    pub(crate) fn new(root: Option<&'a BTreeNode>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        if let Some(node) = root {
            iter.push_left_spine(node);
        }
        iter
    }

    fn push_left_spine(&mut self, mut node: &'a BTreeNode) {
        loop {
            self.stack.push((node, 0));
            if node.is_leaf {
                break;
            }
            node = &node.children[0];
        }
    }
}


impl<'a> Iterator for Iter<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, next) = self.stack.last_mut()?;
            let node: &'a BTreeNode = *node;

            if *next < node.records.len() {
                let pos = *next;
                *next += 1;
                // Right neighbour subtree comes before the next record
                if !node.is_leaf {
                    self.push_left_spine(&node.children[pos + 1]);
                }
                return Some(&node.records[pos]);
            }

            self.stack.pop();
        }
    }
}
