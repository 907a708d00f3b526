//! Accelerating an equality join: index the right-hand records by the
//! join key, then probe with `find` instead of rescanning.

use crate::BPlusTree;
use crate::testing::{SampleRecord, sample_records};

#[test]
fn test_index_probe_join_matches_nested_loop_join() {
    let left = sample_records(300, 1024);
    let right = sample_records(500, 2048);

    let mut by_category: BPlusTree<u8, &SampleRecord> =
        BPlusTree::with_order(16).expect("order is valid");
    for record in &right {
        by_category.add(record.category, record);
    }

    let mut probed = 0_usize;
    for row in &left {
        probed += by_category.find(&row.category).len();
    }

    let mut nested = 0_usize;
    for row in &left {
        for record in &right {
            if record.category == row.category {
                nested += 1;
            }
        }
    }

    assert_eq!(probed, nested);
    assert!(probed > 0, "join produced no matches");
}

#[test]
fn test_probe_returns_exactly_the_matching_rows() {
    let rows = sample_records(200, 9);
    let by_id: BPlusTree<i64, &SampleRecord> =
        BPlusTree::from_pairs(rows.iter().map(|row| (row.id, row)), 16).expect("order is valid");

    for row in &rows {
        let found = by_id.find(&row.id);
        assert_eq!(found.len(), 1, "ids are unique");
        assert_eq!(found[0], row);
    }
}
