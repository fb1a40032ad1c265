#![forbid(unsafe_code)]

//! Draft dataset semantics (headless).
//!
//! Design goals:
//! - deterministic outputs: insertion-ordered aggregation, stable axis and
//!   legend ordering, exact integer conservation under top-N reduction
//! - lenient ingestion (unparseable numeric cells coerce to 0, counted and
//!   logged) with typed errors for structural problems only
//! - every knob injected through options structs; no global state

pub mod aggregate;
pub mod bins;
pub mod charts;
pub mod domain;
pub mod error;
pub mod ingest;
pub mod record;
pub mod table;

pub use aggregate::{OTHERS, Rollup, TopN, count_by, rollup, rollup_count, sum_by, top_n_with_others};
pub use bins::{DecadeBinner, PointClass, YearGroup, class_of, point_classes, year_groups};
pub use charts::{
    BarChartOptions, BubbleChartOptions, HeatmapOptions, bar_table, bubble_table, heatmap_table,
};
pub use domain::{CategoryDomain, DEFAULT_PALETTE};
pub use error::{Error, Result};
pub use ingest::{
    IngestReport, read_records, read_records_path, read_records_path_sync, read_records_sync,
};
pub use record::{Record, Role, Stat};
pub use table::DenseTable;

#[cfg(test)]
mod tests;
