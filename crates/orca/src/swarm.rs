//! Bridges draft records to layout particles.

use krill::{LinearScale, Particle, SqrtScale};
use orca_core::{Record, Stat};

/// Canvas geometry and solver knobs for one swarm view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwarmConfig {
    pub width: f64,
    pub height: f64,
    /// Horizontal margin kept free on both ends of the pick axis.
    pub padding: f64,
    /// Dot radius range in pixels. The lower bound keeps zero-stat players
    /// visible.
    pub radius_range: (f64, f64),
    pub options: krill::SwarmOptions,
}

impl SwarmConfig {
    pub const DEFAULT_WIDTH: f64 = 900.0;
    pub const DEFAULT_HEIGHT: f64 = 460.0;
    pub const DEFAULT_PADDING: f64 = 40.0;
    pub const DEFAULT_RADIUS_RANGE: (f64, f64) = (1.0, 12.0);
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            padding: Self::DEFAULT_PADDING,
            radius_range: Self::DEFAULT_RADIUS_RANGE,
            options: krill::SwarmOptions::default(),
        }
    }
}

/// The two per-dataset scales a swarm derives its particles from: pick
/// number to x coordinate, stat value to radius. Built once per simulation
/// over the filtered records so target assignment is a pure function of the
/// dataset and config.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ParticleScales {
    pick: LinearScale,
    size: SqrtScale,
    stat: Stat,
}

impl ParticleScales {
    pub(crate) fn new(records: &[(u32, &Record)], stat: Stat, config: &SwarmConfig) -> Self {
        let mut pick_lo = f64::INFINITY;
        let mut pick_hi = f64::NEG_INFINITY;
        let mut stat_max = 0u32;
        for (_, r) in records {
            pick_lo = pick_lo.min(f64::from(r.overall_pick));
            pick_hi = pick_hi.max(f64::from(r.overall_pick));
            stat_max = stat_max.max(stat.of(r));
        }
        if records.is_empty() {
            pick_lo = 0.0;
            pick_hi = 0.0;
        }

        Self {
            pick: LinearScale::new(
                (pick_lo, pick_hi),
                (config.padding, config.width - config.padding),
            ),
            size: SqrtScale::new(f64::from(stat_max), config.radius_range),
            stat,
        }
    }

    pub(crate) fn radius(&self, record: &Record) -> f64 {
        self.size.radius(f64::from(self.stat.of(record)))
    }

    pub(crate) fn particle(&self, id: u32, record: &Record, y_target: f64) -> Particle {
        Particle {
            id,
            x_target: self.pick.value(f64::from(record.overall_pick)),
            y_target,
            radius: self.radius(record),
        }
    }
}
