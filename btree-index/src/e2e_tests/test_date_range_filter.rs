//! Answering timestamp-window queries through the index.

use crate::BPlusTree;
use crate::testing::{SAMPLE_EPOCH, sample_records};

const DAY: i64 = 86_400;

#[test]
fn test_window_query_matches_a_linear_filter() {
    let rows = sample_records(400, 1024);
    let mut by_timestamp: BPlusTree<i64, i64> =
        BPlusTree::with_order(32).expect("order is valid");
    for row in &rows {
        by_timestamp.add(row.timestamp, row.id);
    }

    let low = SAMPLE_EPOCH - 30 * DAY;
    let high = SAMPLE_EPOCH + 30 * DAY;

    let mut indexed: Vec<i64> = by_timestamp
        .gt_and_lt(&low, &high)
        .expect("low is below high")
        .into_iter()
        .copied()
        .collect();
    indexed.sort_unstable();

    let mut scanned: Vec<i64> = rows
        .iter()
        .filter(|row| row.timestamp > low && row.timestamp < high)
        .map(|row| row.id)
        .collect();
    scanned.sort_unstable();

    assert_eq!(indexed, scanned);
    assert!(!indexed.is_empty(), "window matched no rows");
}

#[test]
fn test_inclusive_window_includes_boundary_timestamps() {
    let rows = sample_records(50, 7);
    let mut by_timestamp: BPlusTree<i64, i64> =
        BPlusTree::with_order(8).expect("order is valid");
    for row in &rows {
        by_timestamp.add(row.timestamp, row.id);
    }

    let anchor = rows[0].timestamp;
    let ids = by_timestamp
        .ge_and_le(&anchor, &(anchor + DAY))
        .expect("bounds are valid");

    assert!(ids.iter().any(|&&id| id == rows[0].id));
}
