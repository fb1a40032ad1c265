//! Fixed-iteration beeswarm relaxation.
//!
//! Particles are pulled toward per-particle targets while a pairwise sweep
//! pushes overlapping neighbours apart. The iteration count is a fixed
//! budget, not a convergence criterion: overlap is reduced, not guaranteed
//! eliminated, and callers must treat residual overlap as expected.

use std::collections::BTreeMap;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;

use crate::error::{Error, Result};

/// Layout input: one dot with its rest position and size already resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub id: u32,
    pub x_target: f64,
    pub y_target: f64,
    pub radius: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwarmOptions {
    /// Fixed relaxation budget. The solver always runs exactly this many
    /// iterations.
    pub iterations: usize,
    pub x_strength: f64,
    pub y_strength: f64,
    /// Fraction of each detected overlap corrected per sweep.
    pub collide_strength: f64,
    /// Collision sweeps per iteration.
    pub collide_passes: usize,
    /// Per-axis cap on the distance a pull may move a particle in one
    /// iteration.
    pub max_displacement: f64,
    pub seed: u64,
}

impl SwarmOptions {
    pub const DEFAULT_ITERATIONS: usize = 150;
    pub const DEFAULT_X_STRENGTH: f64 = 0.8;
    pub const DEFAULT_Y_STRENGTH: f64 = 0.1;
    pub const DEFAULT_COLLIDE_STRENGTH: f64 = 1.0;
    pub const DEFAULT_COLLIDE_PASSES: usize = 2;
    pub const DEFAULT_MAX_DISPLACEMENT: f64 = 30.0;

    // Cooling floor reached on the final iteration.
    const ALPHA_MIN: f64 = 0.001;
}

impl Default for SwarmOptions {
    fn default() -> Self {
        Self {
            iterations: Self::DEFAULT_ITERATIONS,
            x_strength: Self::DEFAULT_X_STRENGTH,
            y_strength: Self::DEFAULT_Y_STRENGTH,
            collide_strength: Self::DEFAULT_COLLIDE_STRENGTH,
            collide_passes: Self::DEFAULT_COLLIDE_PASSES,
            max_displacement: Self::DEFAULT_MAX_DISPLACEMENT,
            seed: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Committed positions for one grouping configuration.
///
/// Snapshots are immutable once returned; a changed filter or grouping
/// produces a new snapshot instead of editing this one, so two snapshots
/// can be interpolated for a transition.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Snapshot {
    pub positions: BTreeMap<u32, Point>,
}

impl Snapshot {
    pub fn get(&self, id: u32) -> Option<Point> {
        self.positions.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Relaxes one flat set of particles and returns their final positions.
///
/// The input is never mutated. Runs are deterministic: the same particles,
/// in the same order, with the same options produce a bit-identical
/// snapshot. Symmetry breaking for coincident centers comes from a seeded
/// xorshift generator, never from ambient entropy.
pub fn simulate(particles: &[Particle], opts: &SwarmOptions) -> Result<Snapshot> {
    let timing_enabled = std::env::var("KRILL_SWARM_TIMING").ok().as_deref() == Some("1");
    let total_start = timing_enabled.then(std::time::Instant::now);

    let mut seen = FxHashSet::default();
    validate(particles, &mut seen)?;

    let mut rng = XorShift64Star::new(opts.seed);
    let mut positions = BTreeMap::new();
    relax(particles, opts, &mut rng, &mut positions);

    if let Some(s) = total_start {
        eprintln!(
            "[krill-swarm-timing] total={:?} particles={} iterations={} passes={}",
            s.elapsed(),
            particles.len(),
            opts.iterations,
            opts.collide_passes,
        );
    }

    Ok(Snapshot { positions })
}

/// Relaxes each partition independently and merges the results by particle
/// id. Partitions never collide with each other; each one settles around
/// its own targets (one guide lane per group, in the grouped views).
pub fn simulate_partitioned(groups: &[Vec<Particle>], opts: &SwarmOptions) -> Result<Snapshot> {
    let timing_enabled = std::env::var("KRILL_SWARM_TIMING").ok().as_deref() == Some("1");
    let total_start = timing_enabled.then(std::time::Instant::now);

    let mut seen = FxHashSet::default();
    for group in groups {
        validate(group, &mut seen)?;
    }

    let mut positions = BTreeMap::new();
    for (gi, group) in groups.iter().enumerate() {
        // Decorrelate the jitter stream per partition so re-partitioning
        // does not replay the flat run's sequence.
        let mut rng = XorShift64Star::new(opts.seed);
        rng.mix(gi as u64 + 1);
        relax(group, opts, &mut rng, &mut positions);
    }

    if let Some(s) = total_start {
        eprintln!(
            "[krill-swarm-timing] total={:?} groups={} particles={} iterations={} passes={}",
            s.elapsed(),
            groups.len(),
            positions.len(),
            opts.iterations,
            opts.collide_passes,
        );
    }

    Ok(Snapshot { positions })
}

fn validate(particles: &[Particle], seen: &mut FxHashSet<u32>) -> Result<()> {
    for p in particles {
        if !(p.x_target.is_finite() && p.y_target.is_finite() && p.radius.is_finite()) {
            return Err(Error::NonFinite { id: p.id });
        }
        if p.radius <= 0.0 {
            return Err(Error::NonPositiveRadius {
                id: p.id,
                radius: p.radius,
            });
        }
        if !seen.insert(p.id) {
            return Err(Error::DuplicateId { id: p.id });
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Copy)]
struct SimParticle {
    id: u32,
    x: f64,
    y: f64,
    x_target: f64,
    y_target: f64,
    radius: f64,
}

impl SimParticle {
    fn move_by(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }
}

fn relax(
    particles: &[Particle],
    opts: &SwarmOptions,
    rng: &mut XorShift64Star,
    out: &mut BTreeMap<u32, Point>,
) {
    // Start every particle at its own target; a tiny seeded y offset breaks
    // the exact stacking of particles that share a target.
    let mut parts: Vec<SimParticle> = particles
        .iter()
        .map(|p| SimParticle {
            id: p.id,
            x: p.x_target,
            y: p.y_target + rng.next_f64_signed() * 1e-3,
            x_target: p.x_target,
            y_target: p.y_target,
            radius: p.radius,
        })
        .collect();

    if opts.iterations > 0 && !parts.is_empty() {
        // Geometric cooling down to ALPHA_MIN on the last iteration. Late
        // iterations apply almost no pull, leaving the sweeps to settle
        // residual overlap.
        let decay = 1.0 - SwarmOptions::ALPHA_MIN.powf(1.0 / opts.iterations as f64);
        let mut alpha = 1.0;

        for _ in 0..opts.iterations {
            alpha *= 1.0 - decay;

            for p in &mut parts {
                let dx = cap(
                    (p.x_target - p.x) * opts.x_strength * alpha,
                    opts.max_displacement,
                );
                let dy = cap(
                    (p.y_target - p.y) * opts.y_strength * alpha,
                    opts.max_displacement,
                );
                p.move_by(dx, dy);
            }

            for _ in 0..opts.collide_passes {
                collide_sweep(&mut parts, opts.collide_strength, rng);
            }
        }
    }

    for p in &parts {
        out.insert(p.id, Point { x: p.x, y: p.y });
    }
}

fn cap(d: f64, max: f64) -> f64 {
    if max > 0.0 && d.abs() > max {
        max * d.signum()
    } else {
        d
    }
}

/// One stable order-dependent pass over all overlapping pairs.
///
/// Positions are bucketed into a uniform grid with cells as wide as the
/// largest diameter, so any overlapping pair sits within one cell step on
/// both axes and the 3x3 neighbourhood probe finds it. The grid is built
/// once per pass; motion within the pass can hide a new overlap until the
/// next one.
fn collide_sweep(parts: &mut [SimParticle], strength: f64, rng: &mut XorShift64Star) {
    if parts.len() < 2 {
        return;
    }

    let cell = parts.iter().map(|p| p.radius).fold(0.0_f64, f64::max) * 2.0;
    let mut grid: FxHashMap<(i64, i64), Vec<usize>> = FxHashMap::default();
    for (i, p) in parts.iter().enumerate() {
        grid.entry(cell_of(p.x, p.y, cell)).or_default().push(i);
    }

    for i in 0..parts.len() {
        let (cx, cy) = cell_of(parts[i].x, parts[i].y, cell);
        for ny in [cy - 1, cy, cy + 1] {
            for nx in [cx - 1, cx, cx + 1] {
                let Some(bucket) = grid.get(&(nx, ny)) else {
                    continue;
                };
                for &j in bucket {
                    // Each unordered pair is resolved once per pass, in
                    // index order.
                    if j > i {
                        resolve_pair(parts, i, j, strength, rng);
                    }
                }
            }
        }
    }
}

fn cell_of(x: f64, y: f64, cell: f64) -> (i64, i64) {
    ((x / cell).floor() as i64, (y / cell).floor() as i64)
}

fn resolve_pair(
    parts: &mut [SimParticle],
    i: usize,
    j: usize,
    strength: f64,
    rng: &mut XorShift64Star,
) {
    debug_assert!(i < j);
    let (head, tail) = parts.split_at_mut(j);
    let a = &mut head[i];
    let b = &mut tail[0];

    let mut dx = a.x - b.x;
    let mut dy = a.y - b.y;
    let mut d2 = dx * dx + dy * dy;
    let min_dist = a.radius + b.radius;
    if d2 >= min_dist * min_dist {
        return;
    }

    if d2 == 0.0 {
        // Coincident centers have no separation axis; pick one from the
        // seeded stream.
        dx = rng.next_f64_signed() * 1e-6;
        dy = rng.next_f64_signed() * 1e-6;
        d2 = dx * dx + dy * dy;
        if d2 == 0.0 {
            dx = 1e-6;
            d2 = dx * dx;
        }
    }

    let d = d2.sqrt();
    let push = (min_dist - d) / d * strength;
    // The larger particle moves less, weighted by area.
    let wa = b.radius * b.radius / (a.radius * a.radius + b.radius * b.radius);
    let wb = 1.0 - wa;
    a.move_by(dx * push * wa, dy * push * wa);
    b.move_by(-dx * push * wb, -dy * push * wb);
}

#[derive(Debug, Clone)]
struct XorShift64Star {
    state: u64,
}

impl XorShift64Star {
    fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    /// One-way mix to decorrelate partition indices from the base seed.
    fn mix(&mut self, v: u64) {
        self.state ^= v.wrapping_mul(0x9E3779B97F4A7C15_u64);
        let _ = self.next_u64();
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D_u64)
    }

    /// Uniform in (-1, 1) with 53 bits of precision.
    fn next_f64_signed(&mut self) -> f64 {
        let u = self.next_u64() >> 11;
        let v = (u as f64) / ((1u64 << 53) as f64);
        (v * 2.0) - 1.0
    }
}
