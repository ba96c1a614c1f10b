use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::{ArenaError, Result};

/// Rectangular arena `[0, width] × [0, height]`, fixed for the lifetime of a world.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArenaBounds {
    width: f64,
    height: f64,
}

impl ArenaBounds {
    pub fn new(width: f64, height: f64) -> Result<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(ArenaError::InvalidArena { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn size(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    /// Smallest legal centre coordinate for a disc of `radius`.
    pub fn min_center(&self, radius: f64) -> DVec2 {
        DVec2::splat(radius)
    }

    /// Largest legal centre coordinate for a disc of `radius`.
    pub fn max_center(&self, radius: f64) -> DVec2 {
        self.size() - DVec2::splat(radius)
    }

    /// True when a disc of `radius` centred at `position` lies fully inside the arena.
    pub fn contains_disc(&self, position: DVec2, radius: f64) -> bool {
        let min = self.min_center(radius);
        let max = self.max_center(radius);
        position.cmpge(min).all() && position.cmple(max).all()
    }
}
