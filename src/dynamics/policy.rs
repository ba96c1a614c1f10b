use crate::{
    collision::{
        pair::{PairOutcome, PairResolver},
        walls::{WallHits, WallResolver},
    },
    config::{PolicyKind, ROBUST_SEPARATION_SLOP, SIMPLE_SEPARATION_SLOP},
    core::{body::Body, types::ArenaBounds},
};

/// Capability interface selecting how a world integrates and resolves contacts.
pub trait PhysicsPolicy: Send + Sync {
    fn name(&self) -> &str;

    /// Position multiplier used by the integrator for the given world time scale.
    fn time_step(&self, time_scale: f64) -> f64 {
        time_scale
    }

    fn resolve_walls(&self, body: &mut Body, bounds: &ArenaBounds, retention: f64) -> WallHits;

    fn resolve_pair(&self, a: &mut Body, b: &mut Body, retention: f64) -> PairOutcome;

    /// Runs after the pair pass so positional correction cannot leave a body outside.
    fn contain(&self, body: &mut Body, bounds: &ArenaBounds) -> bool;
}

/// Naive walls, unfiltered pair exchange, one unit of slop on separation,
/// and a fixed one-frame advance regardless of time scale.
#[derive(Debug, Clone, Copy)]
pub struct SimplePhysicsPolicy {
    pub walls: WallResolver,
    pub pairs: PairResolver,
}

impl Default for SimplePhysicsPolicy {
    fn default() -> Self {
        Self {
            walls: WallResolver::naive(),
            pairs: PairResolver::new(false, Some(SIMPLE_SEPARATION_SLOP)),
        }
    }
}

impl PhysicsPolicy for SimplePhysicsPolicy {
    fn name(&self) -> &str {
        "simple"
    }

    fn time_step(&self, _time_scale: f64) -> f64 {
        1.0
    }

    fn resolve_walls(&self, body: &mut Body, bounds: &ArenaBounds, retention: f64) -> WallHits {
        self.walls.resolve(body, bounds, retention)
    }

    fn resolve_pair(&self, a: &mut Body, b: &mut Body, retention: f64) -> PairOutcome {
        self.pairs.resolve(a, b, retention)
    }

    fn contain(&self, body: &mut Body, bounds: &ArenaBounds) -> bool {
        self.walls.contain(body, bounds)
    }
}

/// Edge-triggered walls and approach-filtered pair exchange with exact separation.
#[derive(Debug, Clone, Copy)]
pub struct RobustPhysicsPolicy {
    pub walls: WallResolver,
    pub pairs: PairResolver,
}

impl Default for RobustPhysicsPolicy {
    fn default() -> Self {
        Self {
            walls: WallResolver::edge_triggered(),
            pairs: PairResolver::new(true, Some(ROBUST_SEPARATION_SLOP)),
        }
    }
}

impl PhysicsPolicy for RobustPhysicsPolicy {
    fn name(&self) -> &str {
        "robust"
    }

    fn resolve_walls(&self, body: &mut Body, bounds: &ArenaBounds, retention: f64) -> WallHits {
        self.walls.resolve(body, bounds, retention)
    }

    fn resolve_pair(&self, a: &mut Body, b: &mut Body, retention: f64) -> PairOutcome {
        self.pairs.resolve(a, b, retention)
    }

    fn contain(&self, body: &mut Body, bounds: &ArenaBounds) -> bool {
        self.walls.contain(body, bounds)
    }
}

/// Builds the boxed policy named by `kind`.
pub fn policy_for(kind: PolicyKind) -> Box<dyn PhysicsPolicy> {
    match kind {
        PolicyKind::Simple => Box::new(SimplePhysicsPolicy::default()),
        PolicyKind::Robust => Box::new(RobustPhysicsPolicy::default()),
    }
}
