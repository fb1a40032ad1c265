#![forbid(unsafe_code)]

//! Headless beeswarm layout engine.
//!
//! `krill` relaxes a set of circles toward per-particle targets while
//! resolving pairwise collisions, and commits the result as an immutable
//! position snapshot. It knows nothing about any particular dataset:
//!
//! - fixed iteration budget, never convergence-driven
//! - deterministic for a given input order, options, and seed
//! - pure: callers hand in particles by reference and get a new snapshot back

pub mod error;
pub mod scale;
pub mod swarm;

pub use error::{Error, Result};
pub use scale::{LinearScale, SqrtScale, lane_y};
pub use swarm::{Particle, Point, Snapshot, SwarmOptions, simulate, simulate_partitioned};
