//! End-to-end tests driving the index through its public surface:
//! insertion and lookup, duplicate accumulation, split propagation,
//! every range operator, bound validation, and two query-acceleration
//! scenarios (equality joins and timestamp windows).
#![cfg(test)]

mod helpers;

mod test_date_range_filter;
mod test_duplicate_keys;
mod test_empty_tree;
mod test_insert_and_find;
mod test_invalid_bounds;
mod test_join_acceleration;
mod test_range_operators;
mod test_range_oracle;
mod test_split_propagation;
