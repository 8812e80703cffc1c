// =====================================================================
// File: integration_index.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Index Comparison Project
// Date: Oct. 16, 2025
//
// Description:
//   Integration tests for the three indexes through the public API.
//   These tests exercise:
//
//   - The shared `RecordIndex` contract (duplicates ignored, missing
//     removals are no-ops, ascending traversal, full drain)
//   - The concrete scenarios for the BST/AVL and degree-3 B-tree
//   - Structural invariants checked from outside the crate through
//     the read-only `root()` accessors
// =====================================================================
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use record_index::avl::AvlNode;
use record_index::{AvlIndex, BTreeIndex, BTreeNode, BstIndex, Record, RecordIndex};


/// Helper - record with a recognisable payload
fn rec(id: i64) -> Record {
    Record::new(id, format!("R{id}"), (id.rem_euclid(90)) as i32)
}


fn ids<T: RecordIndex>(index: &T) -> Vec<i64> {
    index.iter().map(|r| r.id).collect()
}


/// Runs the same contract checks against any index.
fn check_contract<T: RecordIndex>(mut index: T) {
    let mut rng = StdRng::seed_from_u64(2025);
    let mut keys: Vec<i64> = (-100..400).collect();
    keys.shuffle(&mut rng);

    for &id in &keys {
        assert!(index.insert(rec(id)), "{}: insert {id}", index.name());
    }
    assert_eq!(index.len(), keys.len());

    // First insert wins
    assert!(!index.insert(Record::new(7, "CHANGED", 1)));
    assert_eq!(index.search(7), Some(&rec(7)));

    // Every stored id is found with its own payload
    for &id in &keys {
        assert_eq!(index.search(id), Some(&rec(id)));
    }
    assert!(index.search(1000).is_none());

    // Missing removal changes nothing
    let before = ids(&index);
    assert!(!index.remove(1000));
    assert_eq!(ids(&index), before);

    let sorted: Vec<i64> = (-100..400).collect();
    assert_eq!(before, sorted);

    keys.shuffle(&mut rng);
    for &id in &keys {
        assert!(index.remove(id), "{}: remove {id}", index.name());
        assert!(index.search(id).is_none());
    }
    assert!(index.is_empty());
    assert_eq!(index.iter().count(), 0);
}


#[test]
fn avl_satisfies_contract() {
    check_contract(AvlIndex::new());
}

#[test]
fn bst_satisfies_contract() {
    check_contract(BstIndex::new());
}

#[test]
fn btree_satisfies_contract() {
    for degree in [3, 4, 5, 10] {
        check_contract(BTreeIndex::new(degree).unwrap());
    }
}


#[test]
fn binary_tree_scenario() {
    let mut avl = AvlIndex::new();
    let mut bst = BstIndex::new();
    for id in [50, 30, 70, 20, 40] {
        avl.insert(rec(id));
        bst.insert(rec(id));
    }

    assert_eq!(avl.search(40).map(|r| r.id), Some(40));
    assert_eq!(bst.search(40).map(|r| r.id), Some(40));
    assert_eq!(bst.predecessor(40), Some(30));
    assert_eq!(bst.successor(40), Some(50));

    bst.remove(30);
    avl.remove(30);
    assert_eq!(bst.predecessor(40), Some(20));
    assert_eq!(ids(&avl), ids(&bst));
}


#[test]
fn btree_degree_three_scenario() {
    let mut tree = BTreeIndex::new(3).unwrap();
    for id in [10, 20, 5, 6, 12, 30, 7, 17] {
        tree.insert(rec(id));
    }

    assert!(tree.height() >= 2);
    assert_eq!(ids(&tree), vec![5, 6, 7, 10, 12, 17, 20, 30]);
    assert!(tree.search(6).is_some());
    assert!(tree.search(99).is_none());
}


#[test]
fn print_goes_to_caller_sink() {
    let mut tree = BTreeIndex::new(4).unwrap();
    tree.insert(Record::new(2, "BOBS", 40));
    tree.insert(Record::new(1, "AMYS", 30));

    let mut out = Vec::new();
    RecordIndex::print(&tree, &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "ID: 1, Name: AMYS, Age: 30\nID: 2, Name: BOBS, Age: 40\n"
    );
}


// =====================================================================
// Invariants checked from outside the crate
// =====================================================================

fn avl_height(node: Option<&AvlNode>) -> i32 {
    let Some(node) = node else {
        return 0;
    };
    let left = avl_height(node.left.as_deref());
    let right = avl_height(node.right.as_deref());
    assert!((left - right).abs() <= 1, "AVL node {} unbalanced", node.record.id);
    assert_eq!(node.height, 1 + left.max(right));
    1 + left.max(right)
}

fn btree_occupancy(node: &BTreeNode, degree: usize, is_root: bool) {
    let count = node.records.len();
    assert!(count < degree, "node holds {count} records at degree {degree}");
    if is_root {
        assert!(count >= 1);
    } else {
        assert!(count >= degree.div_ceil(2) - 1, "node holds {count} records at degree {degree}");
    }
    for child in &node.children {
        btree_occupancy(child, degree, false);
    }
}

#[test]
fn invariants_hold_after_every_mutation() {
    let mut rng = StdRng::seed_from_u64(77);
    let mut avl = AvlIndex::new();
    let mut btrees: Vec<BTreeIndex> = (3..=7).map(|d| BTreeIndex::new(d).unwrap()).collect();

    for _ in 0..2000 {
        let id = rng.random_range(0..250);
        let insert = rng.random_bool(0.6);

        if insert {
            avl.insert(rec(id));
        } else {
            avl.remove(id);
        }
        avl_height(avl.root());

        for tree in &mut btrees {
            if insert {
                tree.insert(rec(id));
            } else {
                tree.remove(id);
            }
            if let Some(root) = tree.root() {
                btree_occupancy(root, tree.degree(), true);
            }
            assert_eq!(ids(&*tree), ids(&avl));
        }
    }
}
