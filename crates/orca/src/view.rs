//! Grouping state machine and scene assembly for the beeswarm view.
//!
//! A [`SwarmView`] owns a private copy of the dataset, caches one committed
//! snapshot per grouping, and emits declarative [`SwarmScene`] values. The
//! renderer interpolates between the scene's two snapshots; the view never
//! re-simulates mid-transition and never mutates a committed snapshot.

use std::str::FromStr;
use std::sync::Arc;

use krill::{Particle, Snapshot, lane_y};
use orca_core::{CategoryDomain, Record, Role, Stat};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;

use crate::swarm::{ParticleScales, SwarmConfig};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Layout(#[from] krill::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Which guide lines the particles relax toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Grouping {
    /// One shared midline for the whole dataset.
    #[default]
    Spread,
    /// One lane per domain label, "Others" included.
    Nationality,
    /// One lane per role; records without a role sit this grouping out.
    Role,
}

impl FromStr for Grouping {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "spread" | "default" => Ok(Self::Spread),
            "nationality" | "nationalities" => Ok(Self::Nationality),
            "role" | "roles" | "position" => Ok(Self::Role),
            _ => Err(()),
        }
    }
}

/// Restricts the dataset a view simulates and sizes dots by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SwarmFilter {
    /// Restrict to one draft class; `None` keeps every year.
    pub year: Option<i32>,
    pub stat: Stat,
}

#[derive(Debug, Clone, Serialize)]
pub struct Lane {
    pub label: String,
    pub y: f64,
}

/// Per-dot metadata the renderer needs besides coordinates.
#[derive(Debug, Clone, Serialize)]
pub struct SceneParticle {
    pub id: u32,
    pub player: String,
    /// Domain label the dot is colored by.
    pub category: String,
    pub radius: f64,
}

/// One grouping transition, expressed as a value.
///
/// `from` and `to` are committed snapshots; the renderer owns the animation
/// between them. Particles absent from `to` (no role under the role
/// grouping) are exiting and fade out on the renderer's side.
#[derive(Debug, Clone, Serialize)]
pub struct SwarmScene {
    pub grouping: Grouping,
    pub from: Arc<Snapshot>,
    pub to: Arc<Snapshot>,
    pub lanes: Vec<Lane>,
    pub particles: Vec<SceneParticle>,
    pub domain: CategoryDomain,
}

#[derive(Debug, Clone)]
pub struct SwarmView {
    records: Vec<Record>,
    domain: CategoryDomain,
    config: SwarmConfig,
    filter: SwarmFilter,
    grouping: Grouping,
    cache: FxHashMap<Grouping, Arc<Snapshot>>,
}

impl SwarmView {
    pub fn new(records: Vec<Record>, domain: CategoryDomain, config: SwarmConfig) -> Self {
        Self {
            records,
            domain,
            config,
            filter: SwarmFilter::default(),
            grouping: Grouping::default(),
            cache: FxHashMap::default(),
        }
    }

    pub fn grouping(&self) -> Grouping {
        self.grouping
    }

    pub fn filter(&self) -> SwarmFilter {
        self.filter
    }

    /// Swaps the filtered dataset. Every cached snapshot belongs to the old
    /// dataset, so a real change drops them all.
    pub fn set_filter(&mut self, filter: SwarmFilter) {
        if filter == self.filter {
            return;
        }
        self.filter = filter;
        self.cache.clear();
        tracing::debug!(
            year = ?filter.year,
            stat = filter.stat.label(),
            "swarm filter changed, cached snapshots dropped"
        );
    }

    /// The committed snapshot for `grouping`, simulating only on a cache
    /// miss. Requesting the same grouping twice without a filter change
    /// returns the same snapshot, coordinates untouched.
    pub fn snapshot(&mut self, grouping: Grouping) -> Result<Arc<Snapshot>> {
        if let Some(hit) = self.cache.get(&grouping) {
            tracing::debug!(?grouping, "swarm snapshot cache hit");
            return Ok(Arc::clone(hit));
        }
        tracing::debug!(?grouping, "swarm snapshot cache miss, simulating");
        let snapshot = Arc::new(self.simulate(grouping)?);
        self.cache.insert(grouping, Arc::clone(&snapshot));
        Ok(snapshot)
    }

    /// Switches to `grouping` and returns the transition scene: the current
    /// grouping's snapshot as `from`, the new one as `to`, both served from
    /// cache when available.
    pub fn activate(&mut self, grouping: Grouping) -> Result<SwarmScene> {
        let from = self.snapshot(self.grouping)?;
        let to = self.snapshot(grouping)?;
        self.grouping = grouping;

        let filtered = self.filtered();
        let scales = ParticleScales::new(&filtered, self.filter.stat, &self.config);
        let lanes = self.lanes(grouping, &filtered);
        let particles = filtered
            .iter()
            .map(|(id, r)| SceneParticle {
                id: *id,
                player: r.player.clone(),
                category: self.domain.remap(&r.nationality).to_string(),
                radius: scales.radius(r),
            })
            .collect();

        Ok(SwarmScene {
            grouping,
            from,
            to,
            lanes,
            particles,
            domain: self.domain.clone(),
        })
    }

    /// Records passing the year filter, keyed by their dataset ordinal. The
    /// ordinal is the particle identity, stable across filters and
    /// groupings.
    fn filtered(&self) -> Vec<(u32, &Record)> {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, r)| self.filter.year.is_none_or(|year| r.year == year))
            .map(|(i, r)| (i as u32, r))
            .collect()
    }

    fn category_of(&self, record: &Record, grouping: Grouping) -> Option<String> {
        match grouping {
            Grouping::Spread => None,
            Grouping::Nationality => Some(self.domain.remap(&record.nationality).to_string()),
            Grouping::Role => Role::from_position(&record.position).map(|r| r.label().to_string()),
        }
    }

    /// Guide lanes for `grouping`, restricted to categories present in the
    /// filtered records. Nationality lanes follow domain order, role lanes
    /// the fixed forward/defensemen/goalie order.
    fn lanes(&self, grouping: Grouping, filtered: &[(u32, &Record)]) -> Vec<Lane> {
        let labels: Vec<String> = match grouping {
            Grouping::Spread => Vec::new(),
            Grouping::Nationality => {
                let present: FxHashSet<&str> = filtered
                    .iter()
                    .map(|(_, r)| self.domain.remap(&r.nationality))
                    .collect();
                self.domain
                    .labels()
                    .iter()
                    .filter(|label| present.contains(label.as_str()))
                    .cloned()
                    .collect()
            }
            Grouping::Role => {
                let present: FxHashSet<Role> = filtered
                    .iter()
                    .filter_map(|(_, r)| Role::from_position(&r.position))
                    .collect();
                Role::ALL
                    .iter()
                    .filter(|role| present.contains(role))
                    .map(|role| role.label().to_string())
                    .collect()
            }
        };

        let count = labels.len();
        labels
            .into_iter()
            .enumerate()
            .map(|(i, label)| Lane {
                label,
                y: lane_y(i, count, self.config.height),
            })
            .collect()
    }

    fn simulate(&self, grouping: Grouping) -> Result<Snapshot> {
        let filtered = self.filtered();
        let scales = ParticleScales::new(&filtered, self.filter.stat, &self.config);

        match grouping {
            Grouping::Spread => {
                let midline = lane_y(0, 0, self.config.height);
                let particles: Vec<Particle> = filtered
                    .iter()
                    .map(|(id, r)| scales.particle(*id, r, midline))
                    .collect();
                Ok(krill::simulate(&particles, &self.config.options)?)
            }
            Grouping::Nationality | Grouping::Role => {
                let lanes = self.lanes(grouping, &filtered);
                let mut groups: Vec<Vec<Particle>> = vec![Vec::new(); lanes.len()];
                for (id, r) in &filtered {
                    let Some(category) = self.category_of(r, grouping) else {
                        continue;
                    };
                    let Some(li) = lanes.iter().position(|lane| lane.label == category) else {
                        continue;
                    };
                    groups[li].push(scales.particle(*id, r, lanes[li].y));
                }
                Ok(krill::simulate_partitioned(&groups, &self.config.options)?)
            }
        }
    }
}
