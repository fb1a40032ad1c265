use crate::aggregate::Rollup;
use serde::Serialize;

/// A complete `bucket × category` grid: every `(row, col)` pair has a value,
/// absent aggregation cells densified to 0. Label vectors carry the axis and
/// stacking order renderers must follow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DenseTable {
    pub row_labels: Vec<String>,
    pub col_labels: Vec<String>,
    /// `values[row][col]`, aligned with the label vectors.
    pub values: Vec<Vec<u64>>,
}

impl DenseTable {
    /// Densifies a rollup over the full `rows × cols` cross product.
    /// Rollup entries outside the given labels are dropped.
    pub fn from_rollup(rollup: &Rollup, rows: Vec<String>, cols: Vec<String>) -> Self {
        let values = rows
            .iter()
            .map(|row| {
                cols.iter()
                    .map(|col| {
                        rollup
                            .get(row.as_str())
                            .and_then(|r| r.get(col.as_str()))
                            .copied()
                            .unwrap_or(0)
                    })
                    .collect()
            })
            .collect();
        Self {
            row_labels: rows,
            col_labels: cols,
            values,
        }
    }

    pub fn get(&self, row: &str, col: &str) -> Option<u64> {
        let r = self.row_labels.iter().position(|l| l == row)?;
        let c = self.col_labels.iter().position(|l| l == col)?;
        Some(self.values[r][c])
    }

    /// Per-row sums, aligned with `row_labels` (bubble charts size rows by
    /// their totals).
    pub fn row_totals(&self) -> Vec<u64> {
        self.values
            .iter()
            .map(|row| row.iter().sum())
            .collect()
    }

    pub fn total(&self) -> u64 {
        self.values.iter().flatten().sum()
    }
}
