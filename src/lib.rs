//! # record-index
//! Three interchangeable in-memory indexes over fixed-shape records,
//! keyed by a unique integer id.
//!
//! ## Indexes
//! - [`AvlIndex`]   : height-balanced binary search tree.
//! - [`BstIndex`]   : unbalanced binary search tree with traversal and
//!                    predecessor/successor queries.
//! - [`BTreeIndex`] : multiway B-tree with a configurable degree.
//!
//! All three reject duplicate ids (the first record wins), return
//! `Option` from `search` and treat removal of a missing id as a no-op.
//! The [`RecordIndex`] trait lets the benchmark driver in [`bench`] run
//! the same workload against each of them.
// =====================================================================
// File: lib.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Index Comparison Project
// Date: Oct. 6, 2025
// =====================================================================
pub mod logger;

mod error;
pub use error::{IndexError, IndexResult};

mod record;
pub use record::Record;

pub mod avl;
pub use avl::AvlIndex;

pub mod bst;
pub use bst::BstIndex;

pub mod btree;
pub use btree::{BTreeIndex, BTreeNode};

pub mod bench;
pub use bench::{BenchConfig, BenchReport};

use std::io::{self, Write};


/// Common surface of the three indexes.
///
/// # Example
/// ```
/// use record_index::{AvlIndex, BTreeIndex, BstIndex, Record, RecordIndex};
///
/// fn load<T: RecordIndex>(index: &mut T) {
///     for id in [3, 1, 2, 1] {
///         index.insert(Record::new(id, "NAME", 1));
///     }
/// }
///
/// let mut avl = AvlIndex::new();
/// let mut bst = BstIndex::new();
/// let mut btree = BTreeIndex::new(3).unwrap();
/// load(&mut avl);
/// load(&mut bst);
/// load(&mut btree);
///
/// assert_eq!(RecordIndex::len(&avl), 3);
/// assert_eq!(RecordIndex::iter(&bst).map(|r| r.id).collect::<Vec<_>>(), vec![1, 2, 3]);
/// assert!(RecordIndex::search(&btree, 2).is_some());
/// ```
pub trait RecordIndex {
    /// Short label used in reports.
    fn name(&self) -> &'static str;

    /// Inserts a record; `false` if the id was already present.
    fn insert(&mut self, record: Record) -> bool;

    fn search(&self, id: i64) -> Option<&Record>;

    /// Removes a record; `false` if the id was not present.
    fn remove(&mut self, id: i64) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Records in ascending id order.
    fn iter(&self) -> impl Iterator<Item = &Record>;

    /// Writes every record, ascending by id, one line each.
    fn print<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for record in self.iter() {
            writeln!(out, "{record}")?;
        }
        Ok(())
    }
}


impl RecordIndex for AvlIndex {
    fn name(&self) -> &'static str {
        "AVL"
    }

    fn insert(&mut self, record: Record) -> bool {
        AvlIndex::insert(self, record)
    }

    fn search(&self, id: i64) -> Option<&Record> {
        AvlIndex::search(self, id)
    }

    fn remove(&mut self, id: i64) -> bool {
        AvlIndex::remove(self, id)
    }

    fn len(&self) -> usize {
        AvlIndex::len(self)
    }

    fn iter(&self) -> impl Iterator<Item = &Record> {
        AvlIndex::iter(self)
    }
}


impl RecordIndex for BstIndex {
    fn name(&self) -> &'static str {
        "BST"
    }

    fn insert(&mut self, record: Record) -> bool {
        BstIndex::insert(self, record)
    }

    fn search(&self, id: i64) -> Option<&Record> {
        BstIndex::search(self, id)
    }

    fn remove(&mut self, id: i64) -> bool {
        BstIndex::remove(self, id)
    }

    fn len(&self) -> usize {
        BstIndex::len(self)
    }

    fn iter(&self) -> impl Iterator<Item = &Record> {
        self.in_order()
    }
}


impl RecordIndex for BTreeIndex {
    fn name(&self) -> &'static str {
        "BTREE"
    }

    fn insert(&mut self, record: Record) -> bool {
        BTreeIndex::insert(self, record)
    }

    fn search(&self, id: i64) -> Option<&Record> {
        BTreeIndex::search(self, id)
    }

    fn remove(&mut self, id: i64) -> bool {
        BTreeIndex::remove(self, id)
    }

    fn len(&self) -> usize {
        BTreeIndex::len(self)
    }

    fn iter(&self) -> impl Iterator<Item = &Record> {
        self.traverse()
    }
}
