// =====================================================================
// File: record.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Index Comparison Project
// Date: Oct. 6, 2025
//
// Description:
//   Defines the fixed-shape `Record` stored by every index in the
//   crate (AVL, BST and B-tree). A record is keyed by its integer `id`
//   and carries a `name` and an `age` as payload.
//
// Notes:
//   * Records are owned by exactly one tree node at a time.
//   * The `Display` format is the line used by every `print` method.
// =====================================================================
use std::fmt;

/// A single row stored by the indexes. `id` is the unique key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    pub id: i64,
    pub name: String,
    pub age: i32,
}


impl Record {
    /// Creates a new record.
    ///
    /// # Example
    /// ```
    /// use record_index::Record;
    ///
    /// let rec = Record::new(7, "ABCD", 42);
    /// assert_eq!(rec.id, 7);
    /// assert_eq!(rec.name, "ABCD");
    ///
    /// // Defaults mirror an empty row: (0, "", 0)
    /// assert_eq!(Record::default(), Record::new(0, "", 0));
    /// ```
    pub fn new(id: i64, name: impl Into<String>, age: i32) -> Self {
        Self {
            id,
            name: name.into(),
            age,
        }
    }
}


impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ID: {}, Name: {}, Age: {}", self.id, self.name, self.age)
    }
}
