// =====================================================================
// File: bst/tests.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Index Comparison Project
// Date: Oct. 9, 2025
//
// Description:
//   Unit tests for the unbalanced BST index: insert/search/remove,
//   the four traversal orders and predecessor/successor queries.
//
// Notes:
//   * Only compiled when running `cargo test`.
// =====================================================================


#[cfg(test)]
mod helpers {
    use crate::Record;
    use crate::bst::BstIndex;

    pub fn rec(id: i64) -> Record {
        Record::new(id, format!("N{id}"), 21)
    }

    /// Tree used throughout:     50
    ///                         /    \
    ///                       30      70
    ///                      /  \
    ///                    20    40
    pub fn sample_tree() -> BstIndex {
        let mut t = BstIndex::new();
        for id in [50, 30, 70, 20, 40] {
            t.insert(rec(id));
        }
        t
    }

    pub fn collect<'a>(records: impl Iterator<Item = &'a Record>) -> Vec<i64> {
        records.map(|r| r.id).collect()
    }
}


// =================================================================
// Insert / search / remove
// =================================================================
#[cfg(test)]
mod bst_index_tests {
    use super::helpers::{collect, rec, sample_tree};
    use crate::Record;
    use crate::bst::BstIndex;
    use crate::bst::node::{BstNode, Link};
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};

    #[test]
    fn empty_tree() {
        let t = BstIndex::new();
        assert!(t.is_empty());
        assert_eq!(t.height(), 0);
        assert!(t.search(1).is_none());
        assert_eq!(t.predecessor(1), None);
        assert_eq!(t.successor(1), None);
    }

    #[test]
    fn search_scenario() {
        let t = sample_tree();
        assert_eq!(t.search(40), Some(&rec(40)));
        assert!(t.search(60).is_none());
        assert_eq!(t.len(), 5);
        assert_eq!(t.height(), 3);
    }

    #[test]
    fn duplicate_insert_keeps_first_record() {
        let mut t = sample_tree();
        assert!(!t.insert(Record::new(40, "OTHER", 99)));
        assert_eq!(t.search(40), Some(&rec(40)));
        assert_eq!(t.len(), 5);
    }

    #[test]
    fn shape_follows_insertion_order() {
        let mut t = BstIndex::new();
        for id in 0..2000 {
            t.insert(rec(id));
        }
        // No rebalancing: sorted input makes a list
        assert_eq!(t.height(), 2000);
        assert_eq!(t.search(1999).map(|r| r.id), Some(1999));
        assert!(t.remove(0));
        assert_eq!(t.root().unwrap().record.id, 1);
    }

    #[test]
    fn long_list_is_walked_without_recursion() {
        const COUNT: i64 = 200_000;

        // Same shape as sorted inserts, built directly: 0 at the root,
        // every node hanging off the right of the previous one
        let mut chain: Link = None;
        for id in (0..COUNT).rev() {
            let mut node = BstNode::new(rec(id));
            node.right = chain;
            chain = Some(Box::new(node));
        }
        let mut t = BstIndex::from_root(chain, COUNT as usize);

        assert_eq!(t.height(), COUNT as usize);
        assert_eq!(t.in_order().count(), COUNT as usize);
        assert_eq!(t.pre_order().count(), COUNT as usize);
        assert_eq!(t.post_order().next().map(|r| r.id), Some(COUNT - 1));
        assert_eq!(t.reverse_in_order().next().map(|r| r.id), Some(COUNT - 1));

        assert_eq!(t.predecessor(0), None);
        assert_eq!(t.predecessor(COUNT), Some(COUNT - 1));
        assert_eq!(t.successor(COUNT - 2), Some(COUNT - 1));
        assert_eq!(t.search(COUNT - 1), Some(&rec(COUNT - 1)));

        assert!(t.insert(rec(COUNT)));
        assert!(t.remove(COUNT - 1));
        assert!(!t.remove(COUNT - 1));
        assert_eq!(t.len(), COUNT as usize);

        drop(t);
    }

    #[test]
    fn remove_leaf() {
        let mut t = sample_tree();
        assert!(t.remove(20));
        assert_eq!(collect(t.in_order()), vec![30, 40, 50, 70]);
    }

    #[test]
    fn remove_single_child_node() {
        let mut t = sample_tree();
        t.remove(20);
        // 30 now only has 40
        assert!(t.remove(30));
        assert_eq!(t.root().unwrap().left.as_ref().unwrap().record.id, 40);
        assert_eq!(collect(t.in_order()), vec![40, 50, 70]);
    }

    #[test]
    fn remove_two_child_node_uses_successor() {
        let mut t = sample_tree();
        assert!(t.remove(30));
        let left = t.root().unwrap().left.as_ref().unwrap();
        assert_eq!(left.record, rec(40));
        assert!(left.right.is_none());
        assert_eq!(collect(t.in_order()), vec![20, 40, 50, 70]);
    }

    #[test]
    fn remove_root_with_deep_successor() {
        let mut t = sample_tree();
        t.insert(rec(60));
        t.insert(rec(65));
        assert!(t.remove(50));
        assert_eq!(t.root().unwrap().record.id, 60);
        assert_eq!(collect(t.in_order()), vec![20, 30, 40, 60, 65, 70]);
    }

    #[test]
    fn remove_missing_id_is_noop() {
        let mut t = sample_tree();
        let before = collect(t.pre_order());
        assert!(!t.remove(45));
        assert_eq!(collect(t.pre_order()), before);
        assert_eq!(t.len(), 5);
    }

    #[test]
    fn insert_all_then_remove_all_leaves_empty() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut keys: Vec<i64> = (0..400).collect();
        keys.shuffle(&mut rng);

        let mut t = BstIndex::new();
        for &id in &keys {
            assert!(t.insert(rec(id)));
        }
        keys.shuffle(&mut rng);
        for &id in &keys {
            assert!(t.remove(id));
            let ids = collect(t.in_order());
            assert!(ids.windows(2).all(|w| w[0] < w[1]));
        }
        assert!(t.is_empty());
        assert_eq!(t.len(), 0);
    }

    #[test]
    fn randomized_mixed_workload() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut t = BstIndex::new();
        let mut present = std::collections::BTreeSet::new();

        for _ in 0..3000 {
            let id = rng.random_range(0..300);
            if rng.random_bool(0.4) {
                assert_eq!(t.remove(id), present.remove(&id));
            } else {
                assert_eq!(t.insert(rec(id)), present.insert(id));
            }
        }
        assert_eq!(collect(t.in_order()), present.iter().copied().collect::<Vec<_>>());
        assert_eq!(t.len(), present.len());
    }

    #[test]
    fn clear_empties_tree() {
        let mut t = sample_tree();
        t.clear();
        assert!(t.is_empty());
        assert_eq!(t.len(), 0);
        assert!(t.insert(rec(1)));
    }
}


// =================================================================
// Traversal orders
// =================================================================
#[cfg(test)]
mod bst_traversal_tests {
    use super::helpers::{collect, sample_tree};
    use crate::bst::BstIndex;

    #[test]
    fn pre_order() {
        assert_eq!(collect(sample_tree().pre_order()), vec![50, 30, 20, 40, 70]);
    }

    #[test]
    fn in_order() {
        assert_eq!(collect(sample_tree().in_order()), vec![20, 30, 40, 50, 70]);
    }

    #[test]
    fn post_order() {
        assert_eq!(collect(sample_tree().post_order()), vec![20, 40, 30, 70, 50]);
    }

    #[test]
    fn reverse_in_order() {
        assert_eq!(collect(sample_tree().reverse_in_order()), vec![70, 50, 40, 30, 20]);
    }

    #[test]
    fn traversals_are_restartable() {
        let t = sample_tree();
        assert_eq!(collect(t.in_order()), collect(t.in_order()));
        assert_eq!(t.post_order().count(), 5);
        assert_eq!(t.post_order().count(), 5);
    }

    #[test]
    fn empty_traversals() {
        let t = BstIndex::new();
        assert_eq!(t.pre_order().count(), 0);
        assert_eq!(t.in_order().count(), 0);
        assert_eq!(t.post_order().count(), 0);
        assert_eq!(t.reverse_in_order().count(), 0);
    }

    #[test]
    fn print_orders() {
        let t = sample_tree();
        let mut out = Vec::new();
        t.print_post_order(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 5);
        assert_eq!(text.lines().next(), Some("ID: 20, Name: N20, Age: 21"));

        let mut out = Vec::new();
        t.print_reverse_in_order(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().last(), Some("ID: 20, Name: N20, Age: 21"));

        let mut pre = Vec::new();
        let mut ino = Vec::new();
        t.print_pre_order(&mut pre).unwrap();
        t.print_in_order(&mut ino).unwrap();
        assert!(String::from_utf8(pre).unwrap().starts_with("ID: 50"));
        assert!(String::from_utf8(ino).unwrap().starts_with("ID: 20"));
    }
}


// =================================================================
// Predecessor / successor
// =================================================================
#[cfg(test)]
mod bst_neighbour_tests {
    use super::helpers::sample_tree;

    #[test]
    fn neighbours_of_stored_id() {
        let t = sample_tree();
        assert_eq!(t.predecessor(40), Some(30));
        assert_eq!(t.successor(40), Some(50));
        assert_eq!(t.predecessor(50), Some(40));
        assert_eq!(t.successor(30), Some(40));
    }

    #[test]
    fn neighbours_of_absent_id() {
        let t = sample_tree();
        assert_eq!(t.predecessor(45), Some(40));
        assert_eq!(t.successor(45), Some(50));
        assert_eq!(t.successor(10), Some(20));
        assert_eq!(t.predecessor(100), Some(70));
    }

    #[test]
    fn neighbours_at_the_edges() {
        let t = sample_tree();
        assert_eq!(t.predecessor(20), None);
        assert_eq!(t.successor(70), None);
    }

    #[test]
    fn predecessor_changes_after_remove() {
        let mut t = sample_tree();
        assert_eq!(t.predecessor(40), Some(30));
        t.remove(30);
        assert_eq!(t.predecessor(40), Some(20));
    }

    #[test]
    fn miss_is_distinct_from_zero_and_negative_ids() {
        let mut t = sample_tree();
        t.insert(super::helpers::rec(0));
        t.insert(super::helpers::rec(-1));
        assert_eq!(t.predecessor(20), Some(0));
        assert_eq!(t.predecessor(0), Some(-1));
        assert_eq!(t.predecessor(-1), None);
    }
}
