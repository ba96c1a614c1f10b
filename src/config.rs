//! Global configuration constants and the serializable world configuration.

use serde::{Deserialize, Serialize};

/// Default arena width in simulation units.
pub const DEFAULT_ARENA_WIDTH: f64 = 800.0;

/// Default arena height in simulation units.
pub const DEFAULT_ARENA_HEIGHT: f64 = 600.0;

/// Velocity components whose magnitude falls below this after a bounce are snapped to zero.
pub const MIN_SPEED: f64 = 0.01;

/// Fraction of kinetic energy kept after a bounce or collision (1.0 = perfectly elastic).
pub const DEFAULT_RETENTION: f64 = 1.0;

/// Position advance multiplier applied per step.
pub const DEFAULT_TIME_SCALE: f64 = 1.0;

/// Time scales visited by [`crate::World::cycle_time_scale`].
pub const TIME_SCALE_CYCLE: [f64; 3] = [1.0, 2.0, 4.0];

/// Extra separation added by the simple policy so a corrected pair does not re-trigger.
pub const SIMPLE_SEPARATION_SLOP: f64 = 1.0;

/// The robust policy relies on the approach filter instead of slop.
pub const ROBUST_SEPARATION_SLOP: f64 = 0.0;

/// Selects which physics policy a world is built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PolicyKind {
    /// Naive walls, unfiltered pair resolution.
    Simple,
    /// Edge-triggered walls, approach-filtered pair resolution.
    #[default]
    Robust,
}

/// Construction-time settings for a [`crate::World`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub width: f64,
    pub height: f64,
    pub retention: f64,
    pub time_scale: f64,
    pub policy: PolicyKind,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_ARENA_WIDTH,
            height: DEFAULT_ARENA_HEIGHT,
            retention: DEFAULT_RETENTION,
            time_scale: DEFAULT_TIME_SCALE,
            policy: PolicyKind::default(),
        }
    }
}

impl WorldConfig {
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_retention(mut self, retention: f64) -> Self {
        self.retention = retention;
        self
    }

    pub fn with_time_scale(mut self, time_scale: f64) -> Self {
        self.time_scale = time_scale;
        self
    }

    pub fn with_policy(mut self, policy: PolicyKind) -> Self {
        self.policy = policy;
        self
    }
}
