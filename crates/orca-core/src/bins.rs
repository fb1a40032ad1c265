//! Deterministic year and measure binning.

use std::collections::BTreeSet;

/// Maps years to decade labels (`"1970-1979"`), with an optional override
/// range that wins over the plain decade rule (the dashboard uses 2020-2022
/// for the short final period of the dataset).
#[derive(Debug, Clone, Copy, Default)]
pub struct DecadeBinner {
    override_range: Option<(i32, i32)>,
}

impl DecadeBinner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_override(lo: i32, hi: i32) -> Self {
        Self {
            override_range: Some((lo.min(hi), lo.max(hi))),
        }
    }

    pub fn label(&self, year: i32) -> String {
        let (lo, hi) = self.interval(year);
        format!("{lo}-{hi}")
    }

    fn interval(&self, year: i32) -> (i32, i32) {
        if let Some((lo, hi)) = self.override_range {
            if (lo..=hi).contains(&year) {
                return (lo, hi);
            }
        }
        let start = year.div_euclid(10) * 10;
        (start, start + 9)
    }

    /// Axis order for the observed years: ascending by interval start, then
    /// end. Each label appears once.
    pub fn ordered_labels(&self, years: impl IntoIterator<Item = i32>) -> Vec<String> {
        let intervals: BTreeSet<(i32, i32)> = years.into_iter().map(|y| self.interval(y)).collect();
        intervals
            .into_iter()
            .map(|(lo, hi)| format!("{lo}-{hi}"))
            .collect()
    }
}

/// One contiguous run of distinct years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearGroup {
    pub first: i32,
    pub last: i32,
}

impl YearGroup {
    pub fn label(&self) -> String {
        format!("{}-{}", self.first, self.last)
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.first..=self.last).contains(&year)
    }
}

/// Splits the distinct years into at most `k` contiguous runs of
/// `ceil(distinct/k)` years each; the final run is truncated to whatever
/// remains. Runs that would be empty are omitted, so every group labels an
/// actual year span.
pub fn year_groups(years: impl IntoIterator<Item = i32>, k: usize) -> Vec<YearGroup> {
    let distinct: BTreeSet<i32> = years.into_iter().collect();
    if distinct.is_empty() {
        return Vec::new();
    }
    let distinct: Vec<i32> = distinct.into_iter().collect();
    let size = distinct.len().div_ceil(k.max(1));
    distinct
        .chunks(size)
        .map(|run| YearGroup {
            first: run[0],
            last: run[run.len() - 1],
        })
        .collect()
}

/// One heatmap measure class, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointClass {
    pub lo: u32,
    pub hi: u32,
}

impl PointClass {
    pub fn label(&self) -> String {
        format!("{}-{}", self.lo, self.hi)
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.lo..=self.hi).contains(&value)
    }
}

/// Divides `[0, max]` into up to `m` equal-width classes: class 0 is
/// `[0, floor(max/m)]`, class i is `[floor(max/m*i)+1, floor(max/m*(i+1))]`.
/// The last class ends exactly at `max`. With `max == 0` a single `[0, 0]`
/// class is produced; classes the floor arithmetic leaves empty (possible
/// when `max < m`) are dropped so the kept classes tile `[0, max]` exactly.
pub fn point_classes(max: u32, m: usize) -> Vec<PointClass> {
    if max == 0 {
        return vec![PointClass { lo: 0, hi: 0 }];
    }
    let m = m.max(1);
    let tick = f64::from(max) / m as f64;
    let mut classes = Vec::with_capacity(m);
    for i in 0..m {
        let lo = if i == 0 {
            0
        } else {
            (tick * i as f64).floor() as u32 + 1
        };
        // The final class is clipped to the observed max so the classes tile
        // [0, max] even when the float products round low.
        let hi = if i == m - 1 {
            max
        } else {
            (tick * (i + 1) as f64).floor() as u32
        };
        if lo <= hi {
            classes.push(PointClass { lo, hi });
        }
    }
    classes
}

/// The class containing `value`, if any. Values in `[0, max]` always match.
pub fn class_of(classes: &[PointClass], value: u32) -> Option<PointClass> {
    classes.iter().copied().find(|c| c.contains(value))
}
