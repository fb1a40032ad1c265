//! Renderer-ready table pipelines for the three aggregate chart families.
//! Each takes an options struct with dashboard defaults and returns a
//! [`DenseTable`] whose label vectors carry the axis order.

use crate::aggregate::{rollup, rollup_count, top_n_with_others};
use crate::bins::{DecadeBinner, class_of, point_classes, year_groups};
use crate::domain::CategoryDomain;
use crate::record::{Record, Role};
use crate::table::DenseTable;

/// Stacked-bar pipeline: summed points per decade, stacked by nationality.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChartOptions {
    /// Position buckets to include. Records whose position maps to no role
    /// are always excluded.
    pub roles: Vec<Role>,
    /// Years in this range collapse into one bucket instead of their decade.
    pub decade_override: Option<(i32, i32)>,
}

impl Default for BarChartOptions {
    fn default() -> Self {
        Self {
            roles: Role::ALL.to_vec(),
            decade_override: Some((2020, 2022)),
        }
    }
}

/// Rows: decades ascending. Columns: the domain's labels. Values: summed
/// career points of the included records.
pub fn bar_table(records: &[Record], domain: &CategoryDomain, opts: &BarChartOptions) -> DenseTable {
    let included: Vec<&Record> = records
        .iter()
        .filter(|r| Role::from_position(&r.position).is_some_and(|role| opts.roles.contains(&role)))
        .collect();

    let binner = match opts.decade_override {
        Some((lo, hi)) => DecadeBinner::with_override(lo, hi),
        None => DecadeBinner::new(),
    };
    let table = rollup(
        &included,
        |r| Some(binner.label(r.year)),
        |r| Some(domain.remap(&r.nationality).to_string()),
        |r| u64::from(r.points),
    );

    let rows = binner.ordered_labels(included.iter().map(|r| r.year));
    let cols = domain.labels().to_vec();
    tracing::debug!(records = included.len(), rows = rows.len(), "bar table built");
    DenseTable::from_rollup(&table, rows, cols)
}

/// Bubble-grid pipeline: record counts per nationality and year group, the
/// nationality dimension reduced to top-N + "Others".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BubbleChartOptions {
    pub top_n: usize,
    pub year_groups: usize,
}

impl Default for BubbleChartOptions {
    fn default() -> Self {
        Self {
            top_n: 7,
            year_groups: 6,
        }
    }
}

/// Rows: kept nationalities by rank, then "Others". Columns: year groups in
/// chronological order. Values: record counts.
pub fn bubble_table(records: &[Record], opts: &BubbleChartOptions) -> DenseTable {
    let groups = year_groups(records.iter().map(|r| r.year), opts.year_groups);
    let counts = rollup_count(
        records,
        |r| Some(r.nationality.clone()),
        |r| {
            groups
                .iter()
                .find(|g| g.contains(r.year))
                .map(|g| g.label())
        },
    );
    let reduced = top_n_with_others(&counts, opts.top_n);

    let rows: Vec<String> = reduced.table.keys().cloned().collect();
    let cols: Vec<String> = groups.iter().map(|g| g.label()).collect();
    tracing::debug!(records = records.len(), groups = cols.len(), "bubble table built");
    DenseTable::from_rollup(&reduced.table, rows, cols)
}

/// Heatmap pipeline: record counts per draft year and career-point class,
/// over a year period and a draft-rank window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeatmapOptions {
    /// Inclusive draft-year window.
    pub period: (i32, i32),
    /// Inclusive `overall_pick` window.
    pub ranks: (u32, u32),
    /// Point class count over the filtered maximum.
    pub classes: usize,
}

impl Default for HeatmapOptions {
    fn default() -> Self {
        Self {
            period: (2000, 2009),
            ranks: (1, 60),
            classes: 10,
        }
    }
}

/// Rows: every year of the period, ascending, present in the data or not.
/// Columns: point classes ascending. Values: record counts.
pub fn heatmap_table(records: &[Record], opts: &HeatmapOptions) -> DenseTable {
    let (year_lo, year_hi) = ordered(opts.period);
    let (rank_lo, rank_hi) = ordered(opts.ranks);
    let included: Vec<&Record> = records
        .iter()
        .filter(|r| {
            (year_lo..=year_hi).contains(&r.year)
                && (rank_lo..=rank_hi).contains(&r.overall_pick)
        })
        .collect();

    let max_points = included.iter().map(|r| r.points).max().unwrap_or(0);
    let classes = point_classes(max_points, opts.classes);

    let counts = rollup_count(
        &included,
        |r| Some(r.year.to_string()),
        |r| class_of(&classes, r.points).map(|c| c.label()),
    );

    let rows: Vec<String> = (year_lo..=year_hi).map(|y| y.to_string()).collect();
    let cols: Vec<String> = classes.iter().map(|c| c.label()).collect();
    tracing::debug!(
        records = included.len(),
        max_points,
        classes = cols.len(),
        "heatmap table built"
    );
    DenseTable::from_rollup(&counts, rows, cols)
}

fn ordered<T: PartialOrd>(range: (T, T)) -> (T, T) {
    if range.0 <= range.1 {
        range
    } else {
        (range.1, range.0)
    }
}
