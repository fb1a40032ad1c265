//! Rollups and the top-N + "Others" reduction.
//!
//! All maps here are insertion-ordered: the first record to produce a key
//! fixes that key's position, which is what gives charts a stable axis and
//! legend order without a separate sort step.

use indexmap::IndexMap;

/// Synthetic bucket absorbing every category outside a kept set.
pub const OTHERS: &str = "Others";

/// Two-level aggregation: primary key → secondary key → accumulated value.
pub type Rollup = IndexMap<String, IndexMap<String, u64>>;

/// Groups records by two keys, accumulating a supplied measure. A record for
/// which either key function declines is excluded from the pass.
pub fn rollup<R>(
    records: &[R],
    primary: impl Fn(&R) -> Option<String>,
    secondary: impl Fn(&R) -> Option<String>,
    measure: impl Fn(&R) -> u64,
) -> Rollup {
    let mut table = Rollup::new();
    for record in records {
        let Some(row) = primary(record) else {
            continue;
        };
        let Some(col) = secondary(record) else {
            continue;
        };
        *table
            .entry(row)
            .or_default()
            .entry(col)
            .or_insert(0) += measure(record);
    }
    table
}

/// [`rollup`] with count accumulation.
pub fn rollup_count<R>(
    records: &[R],
    primary: impl Fn(&R) -> Option<String>,
    secondary: impl Fn(&R) -> Option<String>,
) -> Rollup {
    rollup(records, primary, secondary, |_| 1)
}

/// Single-level count by one key.
pub fn count_by<R>(records: &[R], key: impl Fn(&R) -> Option<String>) -> IndexMap<String, u64> {
    sum_by(records, key, |_| 1)
}

/// Single-level sum of a measure by one key.
pub fn sum_by<R>(
    records: &[R],
    key: impl Fn(&R) -> Option<String>,
    measure: impl Fn(&R) -> u64,
) -> IndexMap<String, u64> {
    let mut totals = IndexMap::new();
    for record in records {
        let Some(k) = key(record) else {
            continue;
        };
        *totals.entry(k).or_insert(0) += measure(record);
    }
    totals
}

/// Result of a top-N reduction over a rollup's primary dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopN {
    /// The kept labels, highest total first. Never contains [`OTHERS`].
    pub kept: Vec<String>,
    /// Kept rows in rank order, then the synthetic [`OTHERS`] row last. The
    /// "Others" row is always present, even when nothing was excluded.
    pub table: Rollup,
}

/// Keeps the `n` primary categories with the highest totals (ties broken by
/// first occurrence) and folds every other row element-wise into [`OTHERS`].
///
/// Conservation is exact: for every secondary key, the kept values plus the
/// "Others" value sum to the input column total.
pub fn top_n_with_others(table: &Rollup, n: usize) -> TopN {
    let mut order: Vec<usize> = (0..table.len()).collect();
    let totals: Vec<u64> = table.values().map(|row| row.values().sum()).collect();
    // Stable sort: equal totals keep their first-seen order.
    order.sort_by(|a, b| totals[*b].cmp(&totals[*a]));

    let mut kept: Vec<String> = Vec::new();
    let mut excluded: Vec<usize> = Vec::new();
    for idx in order {
        let (label, _) = table.get_index(idx).expect("index from 0..len");
        // An input row already labeled "Others" is never kept on its own; it
        // merges into the synthetic row whatever its rank.
        if label != OTHERS && kept.len() < n {
            kept.push(label.clone());
        } else {
            excluded.push(idx);
        }
    }

    let mut others: IndexMap<String, u64> = IndexMap::new();
    if excluded.is_empty() {
        // Zero row shaped over the union of secondary keys.
        for row in table.values() {
            for col in row.keys() {
                others.entry(col.clone()).or_insert(0);
            }
        }
    } else {
        excluded.sort_unstable();
        for idx in excluded {
            let (_, row) = table.get_index(idx).expect("index from 0..len");
            for (col, value) in row {
                *others.entry(col.clone()).or_insert(0) += value;
            }
        }
    }

    let mut out = Rollup::new();
    for label in &kept {
        let row = table.get(label.as_str()).expect("kept label came from table");
        out.insert(label.clone(), row.clone());
    }
    out.insert(OTHERS.to_string(), others);

    TopN { kept, table: out }
}
