// =====================================================================
// File: btree/tree.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Index Comparison Project
// Date: Oct. 10, 2025 - Refactored Oct. 14, 2025
//
// Description:
//   Implements the B-tree record index (`BTreeIndex`) that manages
//   insertion, search, and deletion operations over `BTreeNode`
//   structures.
//
// Features:
//   - `insert`: Adds a record; duplicate ids are ignored (first wins).
//   - `search`: Standard B-tree search; returns the record for an id.
//   - `remove`: Removes ids while preserving B-tree invariants.
//   - Split/borrow/merge helpers: Maintain balance during updates.
//
// Notes:
//   * The degree `d` bounds every node to `d - 1` records
//     (`max_keys`). Non-root nodes keep at least `max_keys / 2`.
//   * A node is split once it overflows to `max_keys + 1` records and
//     repaired once it drops below the minimum. Both happen in the
//     parent, after the recursive call into the child returns.
//   * Splitting only after overflow keeps both halves at or above the
//     minimum for odd degrees, where `max_keys` is even.
// =====================================================================
use std::io::{self, Write};

use super::node::{BTreeNode, Iter};
use crate::{IndexError, IndexResult, Record};

/// Smallest degree for which split and merge stay within bounds.
pub const MIN_DEGREE: usize = 3;


/// BTree Index: owns the (optional) root node and the degree.
#[derive(Debug)]
pub struct BTreeIndex {
    degree: usize,
    max_keys: usize,
    root: Option<Box<BTreeNode>>,
    len: usize,
}


impl BTreeIndex {
    /// Create a new empty B-tree with the given degree (maximum children
    /// per internal node).
    ///
    /// # Errors
    /// Returns [`IndexError::InvalidDegree`] if `degree` is below
    /// [`MIN_DEGREE`].
    ///
    /// # Example
    /// ```
    /// use record_index::BTreeIndex;
    ///
    /// let tree = BTreeIndex::new(3).unwrap();
    /// assert_eq!(tree.max_keys(), 2);
    /// assert!(BTreeIndex::new(2).is_err());
    /// ```
    pub fn new(degree: usize) -> IndexResult<Self> {
        if degree < MIN_DEGREE {
            return Err(IndexError::InvalidDegree {
                degree,
                min: MIN_DEGREE,
            });
        }
        Ok(Self {
            degree,
            max_keys: degree - 1,
            root: None,
            len: 0,
        })
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Node capacity (`degree - 1`).
    pub fn max_keys(&self) -> usize {
        self.max_keys
    }

    /// Minimum number of records a non-root node holds.
    pub fn min_keys(&self) -> usize {
        self.max_keys / 2
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Read-only view of the root node, `None` when the tree is empty.
    pub fn root(&self) -> Option<&BTreeNode> {
        self.root.as_deref()
    }

    /// Number of levels (0 for an empty tree). Every leaf sits at this depth.
    pub fn height(&self) -> usize {
        let mut levels = 0;
        let mut node = self.root.as_deref();
        while let Some(current) = node {
            levels += 1;
            node = current.children.first().map(|child| &**child);
        }
        levels
    }

    /// Search for a record by id.
    ///
    /// # Returns
    /// * `Some(&Record)` if the id exists.
    /// * `None` if it is not in the tree.
    ///
    /// # Example
    /// ```
    /// use record_index::{BTreeIndex, Record};
    /// let mut t = BTreeIndex::new(3).unwrap();
    /// t.insert(Record::new(6, "DOGS", 4));
    /// assert_eq!(t.search(6).map(|r| r.name.as_str()), Some("DOGS"));
    /// assert!(t.search(99).is_none());
    /// ```
    pub fn search(&self, id: i64) -> Option<&Record> {

        // Recursive function declaration for node search
        fn search_node(node: &BTreeNode, id: i64) -> Option<&Record> {
            let idx = node.lower_bound(id);

            // Base Case - found the id in the current node
            if node.holds(idx, id) {
                return Some(&node.records[idx]);
            }

            // No id here - a leaf ends the search
            if node.is_leaf {
                None
            } else {
                search_node(&node.children[idx], id)
            }
        }

        self.root.as_deref().and_then(|root| search_node(root, id))
    }

    /// Insert a record into the B-tree.
    ///
    /// - If the id already exists anywhere in the tree, nothing changes and
    ///   `false` is returned (the stored record wins).
    /// - Otherwise the record is placed in its leaf and overflowing nodes
    ///   are split on the way back up. If the root overflows, the tree
    ///   grows by one level.
    ///
    /// # Example
    /// ```
    /// use record_index::{BTreeIndex, Record};
    ///
    /// let mut index = BTreeIndex::new(3).unwrap();
    /// assert!(index.insert(Record::new(10, "AAAA", 1)));
    /// assert!(index.insert(Record::new(20, "BBBB", 2)));
    /// assert!(index.insert(Record::new(5, "CCCC", 3)));
    /// assert_eq!(index.height(), 2);
    ///
    /// // Duplicate id is ignored
    /// assert!(!index.insert(Record::new(10, "ZZZZ", 9)));
    /// assert_eq!(index.search(10).unwrap().name, "AAAA");
    /// ```
    pub fn insert(&mut self, record: Record) -> bool {
        let max_keys = self.max_keys;

        let Some(mut root) = self.root.take() else {
            let mut leaf = BTreeNode::new(true);
            leaf.records.push(record);
            self.root = Some(Box::new(leaf));
            self.len = 1;
            return true;
        };

        let inserted = Self::insert_internal(&mut root, max_keys, record);

        if root.records.len() > max_keys {
            // Hang the old root under a fresh one and split it there
            let mut new_root = Box::new(BTreeNode::new(false));
            new_root.children.push(root);
            Self::split_child(&mut new_root, max_keys, 0);
            root = new_root;
        }
        self.root = Some(root);

        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Removes the record with this id if present.
    ///
    /// Follows the B-tree deletion algorithm:
    /// - An id in a leaf is removed directly.
    /// - An id in an internal node is replaced by its predecessor or
    ///   successor, which is then removed from the leaf level.
    /// - Any child left below the minimum borrows from a sibling or is
    ///   merged with one.
    ///
    /// Returns `true` if a record was removed. A missing id leaves the
    /// tree unchanged.
    ///
    /// # Example
    /// ```
    /// use record_index::{BTreeIndex, Record};
    /// let mut index = BTreeIndex::new(3).unwrap();
    /// index.insert(Record::new(1, "ABCD", 20));
    /// assert!(index.remove(1));
    /// assert!(index.search(1).is_none());
    /// assert!(index.is_empty());
    /// assert!(!index.remove(1));
    /// ```
    pub fn remove(&mut self, id: i64) -> bool {
        let min_keys = self.min_keys();

        let Some(mut root) = self.root.take() else {
            return false;
        };

        let removed = Self::remove_internal(&mut root, min_keys, id);

        // Shrink height: an emptied internal root has a single child left
        self.root = if !root.records.is_empty() {
            Some(root)
        } else if root.is_leaf {
            None
        } else {
            root.children.pop()
        };

        if removed {
            self.len -= 1;
        }
        removed
    }

    /// In-order (ascending id) iterator over every record.
    pub fn traverse(&self) -> Iter<'_> {
        Iter::new(self.root.as_deref())
    }

    /// Writes every record, ascending by id, one line each.
    pub fn print<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for record in self.traverse() {
            writeln!(out, "{record}")?;
        }
        Ok(())
    }


    // =========================
    // Insertion helpers
    // =========================

    /// Inserts a record into the subtree rooted at `node`.
    ///
    /// # Behavior
    /// - An id already present at this level stops the descent (no-op).
    /// - **Leaf node**: the record goes into its sorted position.
    /// - **Internal node**: recurse into the child at the lower bound,
    ///   then split that child if it now holds `max_keys + 1` records.
    ///
    /// The caller is responsible for splitting `node` itself.
    fn insert_internal(node: &mut BTreeNode, max_keys: usize, record: Record) -> bool {
        let idx = node.lower_bound(record.id);

        if node.holds(idx, record.id) {
            return false;
        }

        // Base case - leaf insert
        if node.is_leaf {
            node.records.insert(idx, record);
            return true;
        }

        let inserted = Self::insert_internal(&mut node.children[idx], max_keys, record);

        if node.children[idx].records.len() > max_keys {
            Self::split_child(node, max_keys, idx);
        }
        inserted
    }


    /// Split an overflowing child node.
    ///
    /// # Arguments
    /// * `node` - The parent node containing the overflowing child.
    /// * `i`    - The index of the child to split.
    ///
    /// # Behavior
    /// - The median sits at `mid = max_keys / 2`.
    /// - The left child keeps the records before the median.
    /// - A new right sibling receives the records after it.
    /// - The median record is moved up into the parent at position `i`
    ///   and the sibling is linked as child `i + 1`.
    /// - If the child is internal, its children are split as well.
    fn split_child(node: &mut BTreeNode, max_keys: usize, i: usize) {
        let mid = max_keys / 2;
        let full_child = &mut node.children[i];
        let mut right = Box::new(BTreeNode::new(full_child.is_leaf));

        right.records = full_child.records.split_off(mid + 1);
        // Left now ends with the median
        let Some(median) = full_child.records.pop() else {
            return;
        };

        // If internal, left keeps [0..=mid], right takes the rest
        if !full_child.is_leaf {
            right.children = full_child.children.split_off(mid + 1);
        }

        node.records.insert(i, median);
        node.children.insert(i + 1, right);
    }


    // =========================
    // Deletion helpers
    // =========================

    /// Recursive helper for deleting an id from a B-tree node.
    ///
    /// # Behavior
    /// 1. **Id found in this node**
    ///    - Leaf: remove the record directly.
    ///    - Internal: see [`Self::remove_from_internal`].
    ///
    /// 2. **Id not found in this node**
    ///    - Leaf: the id is not present, nothing is done.
    ///    - Internal: recurse into the child at the lower bound, then
    ///      `fill` that child if it fell below `min_keys`.
    ///
    /// `node` itself may be left under-full; its parent repairs it.
    fn remove_internal(node: &mut BTreeNode, min_keys: usize, id: i64) -> bool {
        let idx = node.lower_bound(id);

        if node.holds(idx, id) {
            if node.is_leaf {
                node.records.remove(idx);
            } else {
                Self::remove_from_internal(node, min_keys, idx);
            }
            return true;
        }

        // Not in a leaf - no op
        if node.is_leaf {
            return false;
        }

        let removed = Self::remove_internal(&mut node.children[idx], min_keys, id);

        if node.children[idx].records.len() < min_keys {
            Self::fill(node, min_keys, idx);
        }
        removed
    }


    /// Removes `node.records[idx]` from an internal node.
    ///
    /// The record is overwritten by its predecessor (max of
    /// `children[idx]`) when that child has records to spare, otherwise by
    /// its successor (min of `children[idx + 1]`) when that one does. If
    /// neither side has a surplus the predecessor is used and the child it
    /// came from is merged back into shape by `fill`.
    fn remove_from_internal(node: &mut BTreeNode, min_keys: usize, idx: usize) {
        let use_successor = node.children[idx].records.len() <= min_keys
            && node.children[idx + 1].records.len() > min_keys;

        let child_idx = if use_successor { idx + 1 } else { idx };
        let replacement = if use_successor {
            Self::take_min(&mut node.children[child_idx], min_keys)
        } else {
            Self::take_max(&mut node.children[child_idx], min_keys)
        };

        if let Some(record) = replacement {
            node.records[idx] = record;
        }

        if node.children[child_idx].records.len() < min_keys {
            Self::fill(node, min_keys, child_idx);
        }
    }


    /// Removes and returns the largest record of the subtree, repairing
    /// under-full children below `node` on the way back up.
    fn take_max(node: &mut BTreeNode, min_keys: usize) -> Option<Record> {
        if node.is_leaf {
            return node.records.pop();
        }

        let last = node.children.len() - 1;
        let record = Self::take_max(&mut node.children[last], min_keys)?;

        if node.children[last].records.len() < min_keys {
            Self::fill(node, min_keys, last);
        }
        Some(record)
    }


    /// Removes and returns the smallest record of the subtree.
    fn take_min(node: &mut BTreeNode, min_keys: usize) -> Option<Record> {
        if node.is_leaf {
            if node.records.is_empty() {
                return None;
            }
            return Some(node.records.remove(0));
        }

        let record = Self::take_min(&mut node.children[0], min_keys)?;

        if node.children[0].records.len() < min_keys {
            Self::fill(node, min_keys, 0);
        }
        Some(record)
    }


    /// Brings `node.children[idx]` back up to `min_keys` records.
    ///
    /// # Behavior
    /// - Borrow a record from the left sibling if it has more than
    ///   `min_keys`.
    /// - Else borrow from the right sibling.
    /// - If neither sibling can donate, merge the child with one of them.
    fn fill(node: &mut BTreeNode, min_keys: usize, idx: usize) {
        let has_next = idx + 1 < node.children.len();

        if idx > 0 && node.children[idx - 1].records.len() > min_keys {
            Self::borrow_from_prev(node, idx);
        } else if has_next && node.children[idx + 1].records.len() > min_keys {
            Self::borrow_from_next(node, idx);
        } else if has_next {
            Self::merge_children(node, idx);
        } else if idx > 0 {
            Self::merge_children(node, idx - 1);
        }
    }


    /// Borrows a record from the left sibling of `node.children[idx]`.
    ///
    /// - The separator (`node.records[idx - 1]`) moves down as the first
    ///   record of the under-full child.
    /// - The left sibling's last record moves up to replace it.
    /// - For internal nodes the left sibling's last child moves across too.
    fn borrow_from_prev(node: &mut BTreeNode, idx: usize) {
        let (left_slice, right_slice) = node.children.split_at_mut(idx);
        let left = &mut left_slice[idx - 1];
        let child = &mut right_slice[0];

        let Some(left_last) = left.records.pop() else {
            return;
        };
        let separator = std::mem::replace(&mut node.records[idx - 1], left_last);
        child.records.insert(0, separator);

        if !left.is_leaf {
            if let Some(moved) = left.children.pop() {
                child.children.insert(0, moved);
            }
        }
    }


    /// Borrows a record from the right sibling of `node.children[idx]`.
    ///
    /// - The separator (`node.records[idx]`) moves down as the last record
    ///   of the under-full child.
    /// - The right sibling's first record moves up to replace it.
    /// - For internal nodes the right sibling's first child moves across.
    fn borrow_from_next(node: &mut BTreeNode, idx: usize) {
        let (left_slice, right_slice) = node.children.split_at_mut(idx + 1);
        let child = &mut left_slice[idx];
        let right = &mut right_slice[0];

        if right.records.is_empty() {
            return;
        }
        let right_first = right.records.remove(0);
        let separator = std::mem::replace(&mut node.records[idx], right_first);
        child.records.push(separator);

        if !right.is_leaf {
            let moved = right.children.remove(0);
            child.children.push(moved);
        }
    }


    /// Merge `node.children[idx]`, the separating parent record,
    /// and `node.children[idx + 1]` into a single child at `idx`.
    fn merge_children(node: &mut BTreeNode, idx: usize) {
        let mut right = node.children.remove(idx + 1);
        let separator = node.records.remove(idx);
        let left = &mut node.children[idx];

        // Bring the separator down and append the right child's records
        left.records.push(separator);
        left.records.append(&mut right.records);

        if !left.is_leaf {
            left.children.append(&mut right.children);
        }
    }
}
