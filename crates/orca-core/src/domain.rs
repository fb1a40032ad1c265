//! The shared category domain: which labels exist, in what order, and with
//! what color. Built once per dataset and passed by reference into every
//! chart pipeline, so all charts agree on stacking/legend order.

use crate::aggregate::{OTHERS, count_by};
use crate::record::Record;
use indexmap::IndexMap;
use serde::Serialize;

/// Dashboard palette, keyed by nationality code. Labels without an entry get
/// the "Others" gray.
pub const DEFAULT_PALETTE: [(&str, &str); 8] = [
    ("US", "#50a1df"),
    ("SK", "#f09029"),
    ("FI", "#807bbf"),
    ("RU", "#de594d"),
    ("CA", "#67dec6"),
    ("SE", "#fbe43a"),
    ("CZ", "#ed75c9"),
    (OTHERS, "#696868"),
];

const FALLBACK_COLOR: &str = "#696868";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryDomain {
    labels: Vec<String>,
    colors: IndexMap<String, String>,
}

impl CategoryDomain {
    /// Ranks nationalities by record count and keeps the `top_n` most
    /// frequent, "Others" appended last.
    pub fn from_records(records: &[Record], top_n: usize) -> Self {
        Self::from_counts(&count_by(records, |r| Some(r.nationality.clone())), top_n)
    }

    /// Builds a domain from precomputed per-label counts. Order: count
    /// descending, ties by first occurrence, [`OTHERS`] always last whether
    /// or not it appeared in the counts.
    pub fn from_counts(counts: &IndexMap<String, u64>, top_n: usize) -> Self {
        let mut order: Vec<usize> = (0..counts.len()).collect();
        let totals: Vec<u64> = counts.values().copied().collect();
        order.sort_by(|a, b| totals[*b].cmp(&totals[*a]));

        let mut labels: Vec<String> = Vec::with_capacity(top_n + 1);
        for idx in order {
            if labels.len() == top_n {
                break;
            }
            let (label, _) = counts.get_index(idx).expect("index from 0..len");
            if label != OTHERS {
                labels.push(label.clone());
            }
        }
        labels.push(OTHERS.to_string());

        let palette: IndexMap<&str, &str> = DEFAULT_PALETTE.iter().copied().collect();
        let colors = labels
            .iter()
            .map(|label| {
                let color = palette.get(label.as_str()).copied().unwrap_or(FALLBACK_COLOR);
                (label.clone(), color.to_string())
            })
            .collect();

        Self { labels, colors }
    }

    /// Ordered labels, [`OTHERS`] last.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// The kept labels, i.e. everything except the trailing [`OTHERS`].
    pub fn kept(&self) -> &[String] {
        &self.labels[..self.labels.len() - 1]
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    /// Allow-list remap: labels outside the domain become [`OTHERS`].
    pub fn remap<'a>(&'a self, label: &'a str) -> &'a str {
        if self.contains(label) { label } else { OTHERS }
    }

    pub fn color_of(&self, label: &str) -> &str {
        self.colors
            .get(self.remap(label))
            .map(String::as_str)
            .unwrap_or(FALLBACK_COLOR)
    }
}
