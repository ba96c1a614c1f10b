//! Read-side diagnostics: collision tallies and whole-world energy/momentum.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::{collision::walls::WallHits, core::body::Body};

/// Running tally of resolved collisions since the world was created or last cleared.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollisionCounter {
    wall: u64,
    pair: u64,
}

impl CollisionCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one per reflected axis.
    pub fn record_walls(&mut self, hits: WallHits) {
        self.wall += u64::from(hits.count());
    }

    pub fn record_pair(&mut self) {
        self.pair += 1;
    }

    pub fn wall(&self) -> u64 {
        self.wall
    }

    pub fn pair(&self) -> u64 {
        self.pair
    }

    pub fn total(&self) -> u64 {
        self.wall + self.pair
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Recomputes aggregate quantities from body state on every query.
pub struct EnergyAccountant;

impl EnergyAccountant {
    /// `Σ ½·m·|v|²` over all bodies.
    pub fn total_kinetic_energy(bodies: &[Body]) -> f64 {
        bodies.iter().map(Body::kinetic_energy).sum()
    }

    /// `Σ m·v` over all bodies.
    pub fn total_momentum(bodies: &[Body]) -> DVec2 {
        bodies.iter().map(Body::momentum).sum()
    }
}
