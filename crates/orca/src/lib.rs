#![forbid(unsafe_code)]

//! Headless engine for the draft dashboard.
//!
//! `orca` bundles the dataset semantics from `orca-core` with the `krill`
//! beeswarm layout: load a CSV once, then derive chart tables and swarm
//! scenes from the resident records. Everything downstream of the load is
//! synchronous, deterministic, and free of shared mutable state.

pub use orca_core::*;

pub mod swarm;
pub mod view;

pub use swarm::SwarmConfig;
pub use view::{Grouping, Lane, SceneParticle, SwarmFilter, SwarmScene, SwarmView};

/// A loaded dataset plus everything derived once per dataset: the ingest
/// report and the category domain all charts share.
///
/// Intended for integrations where threading records, domain, and options
/// through every call is noisy. All work is CPU-bound; the async loaders
/// are executor-agnostic wrappers over the sync path.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub records: Vec<Record>,
    pub report: IngestReport,
    pub domain: CategoryDomain,
}

impl Dashboard {
    pub const DEFAULT_TOP_N: usize = 7;

    /// Builds the dashboard state from already-read records.
    pub fn from_records(records: Vec<Record>, report: IngestReport) -> Self {
        let domain = CategoryDomain::from_records(&records, Self::DEFAULT_TOP_N);
        Self {
            records,
            report,
            domain,
        }
    }

    pub fn load_sync<R: std::io::Read>(reader: R) -> Result<Self> {
        let (records, report) = orca_core::read_records_sync(reader)?;
        Ok(Self::from_records(records, report))
    }

    pub async fn load<R: std::io::Read>(reader: R) -> Result<Self> {
        Self::load_sync(reader)
    }

    pub fn load_path_sync<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let (records, report) = orca_core::read_records_path_sync(path)?;
        Ok(Self::from_records(records, report))
    }

    pub async fn load_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        Self::load_path_sync(path)
    }

    /// Rebuilds the category domain with a different top-N count.
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.domain = CategoryDomain::from_records(&self.records, top_n);
        self
    }

    pub fn bar_table(&self, opts: &BarChartOptions) -> DenseTable {
        orca_core::bar_table(&self.records, &self.domain, opts)
    }

    pub fn bubble_table(&self, opts: &BubbleChartOptions) -> DenseTable {
        orca_core::bubble_table(&self.records, opts)
    }

    pub fn heatmap_table(&self, opts: &HeatmapOptions) -> DenseTable {
        orca_core::heatmap_table(&self.records, opts)
    }

    /// Spawns a swarm view over a private copy of the records, so the view
    /// can cache snapshots without holding a borrow on the dashboard.
    pub fn swarm_view(&self, config: SwarmConfig) -> SwarmView {
        SwarmView::new(self.records.clone(), self.domain.clone(), config)
    }
}

#[cfg(test)]
mod tests;
