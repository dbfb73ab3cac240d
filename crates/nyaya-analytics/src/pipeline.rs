//! Pure record transforms shared by the dashboards.
//!
//! None of these allocate more than their output or fail on empty input;
//! an empty result is what the views read as "no data".

use std::cmp::Reverse;

use serde::Serialize;

/// One labelled value bound to a chart axis or slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    pub name: String,
    pub value: u64,
}

/// The last `n` records in their original order. All of them when there are
/// `n` or fewer.
#[must_use]
pub fn take_most_recent<T>(records: &[T], n: usize) -> &[T] {
    &records[records.len().saturating_sub(n)..]
}

/// The `n` records with the largest `key`, largest first. Equal keys keep
/// their input order.
#[must_use]
pub fn top_n<T, K, F>(records: &[T], n: usize, key: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut ranked = records.to_vec();
    // sort_by_key is stable
    ranked.sort_by_key(|record| Reverse(key(record)));
    ranked.truncate(n);
    ranked
}

/// Map every record to a [`ChartPoint`]. Zero values are kept.
#[must_use]
pub fn project_for_chart<T>(
    records: &[T],
    name: impl Fn(&T) -> String,
    value: impl Fn(&T) -> u64,
) -> Vec<ChartPoint> {
    records
        .iter()
        .map(|record| ChartPoint {
            name: name(record),
            value: value(record),
        })
        .collect()
}
