use std::time::Instant;

use glam::DVec2;

use crate::{
    collision::queries::{PointHit, PointQuery},
    config::{WorldConfig, DEFAULT_RETENTION, DEFAULT_TIME_SCALE, TIME_SCALE_CYCLE},
    core::{body::Body, types::ArenaBounds},
    dynamics::{
        integrator::Integrator,
        policy::{policy_for, PhysicsPolicy, RobustPhysicsPolicy},
    },
    error::{ArenaError, Result},
    utils::{
        allocator::{BodyHandle, BodySet},
        logging::ScopedTimer,
        profiling::StepMetrics,
    },
};

pub mod diagnostics;

pub use diagnostics::{CollisionCounter, EnergyAccountant};

/// Owns the bodies of one arena and advances them a frame at a time.
///
/// A step integrates and wall-resolves every body first, then resolves every
/// unordered pair `(i, j)` with `i < j` in ascending order, then lets the policy
/// pull any body that positional correction pushed past a wall. State observed
/// between calls to [`World::step`] is always a fully resolved frame.
pub struct World {
    bodies: BodySet,
    bounds: ArenaBounds,
    time_scale: f64,
    retention: f64,
    collisions: CollisionCounter,
    policy: Box<dyn PhysicsPolicy>,
    metrics: StepMetrics,
}

impl World {
    /// Creates a world with the robust policy and default retention/time scale.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        Self::with_policy(width, height, RobustPhysicsPolicy::default())
    }

    pub fn with_policy<P>(width: f64, height: f64, policy: P) -> Result<Self>
    where
        P: PhysicsPolicy + 'static,
    {
        Self::build(ArenaBounds::new(width, height)?, Box::new(policy))
    }

    pub fn from_config(config: &WorldConfig) -> Result<Self> {
        let bounds = ArenaBounds::new(config.width, config.height)?;
        let mut world = Self::build(bounds, policy_for(config.policy))?;
        world.set_retention(config.retention)?;
        world.set_time_scale(config.time_scale)?;
        Ok(world)
    }

    fn build(bounds: ArenaBounds, policy: Box<dyn PhysicsPolicy>) -> Result<Self> {
        log::debug!(
            "creating {}x{} world with {} policy",
            bounds.width(),
            bounds.height(),
            policy.name()
        );
        Ok(Self {
            bodies: BodySet::new(),
            bounds,
            time_scale: DEFAULT_TIME_SCALE,
            retention: DEFAULT_RETENTION,
            collisions: CollisionCounter::new(),
            policy,
            metrics: StepMetrics::default(),
        })
    }

    /// Adds a body; rejects non-positive radius or mass before it can enter the world.
    pub fn place_body(
        &mut self,
        position: DVec2,
        radius: f64,
        mass: f64,
        velocity: DVec2,
    ) -> Result<BodyHandle> {
        let body = Body::new(position, velocity, radius, mass)?;
        let handle = self.bodies.insert(body);
        log::debug!(
            "placed body {} at ({:.1}, {:.1}) r={radius} m={mass}",
            handle.index(),
            position.x,
            position.y
        );
        Ok(handle)
    }

    /// Advances the simulation by one frame.
    pub fn step(&mut self) {
        let start = Instant::now();
        let mut metrics = StepMetrics {
            body_count: self.bodies.len(),
            ..StepMetrics::default()
        };
        let integrator = Integrator::new(self.policy.time_step(self.time_scale));

        {
            let _timer = ScopedTimer::new("step::integrate", &mut metrics.integrate_time);
            for body in self.bodies.iter_mut() {
                integrator.advance(body);
                let hits = self.policy.resolve_walls(body, &self.bounds, self.retention);
                self.collisions.record_walls(hits);
                metrics.wall_reflections += hits.count() as usize;
            }
        }

        {
            let _timer = ScopedTimer::new("step::pairs", &mut metrics.pair_time);
            let count = self.bodies.len();
            for i in 0..count {
                for j in (i + 1)..count {
                    let Some((a, b)) = self.bodies.pair_mut(i, j) else {
                        continue;
                    };
                    metrics.pair_checks += 1;
                    if self.policy.resolve_pair(a, b, self.retention).is_resolved() {
                        self.collisions.record_pair();
                        metrics.pairs_resolved += 1;
                    }
                }
            }

            for body in self.bodies.iter_mut() {
                if self.policy.contain(body, &self.bounds) {
                    metrics.bodies_contained += 1;
                }
            }
        }

        metrics.total_time = start.elapsed();
        self.metrics = metrics;
    }

    /// Removes every body and resets the collision count and time scale.
    ///
    /// Handles issued before the clear no longer resolve.
    pub fn clear(&mut self) {
        log::debug!(
            "clearing {} bodies after {} collisions",
            self.bodies.len(),
            self.collisions.total()
        );
        self.bodies.clear();
        log::trace!("body set now at generation {}", self.bodies.generation());
        self.collisions.reset();
        self.time_scale = DEFAULT_TIME_SCALE;
        self.metrics.reset();
    }

    /// Sets the kinetic-energy retention fraction; values outside `[0, 1]` are rejected.
    pub fn set_retention(&mut self, retention: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&retention) {
            log::warn!("rejected retention {retention}, keeping {}", self.retention);
            return Err(ArenaError::DegenerateConfiguration {
                name: "retention",
                value: retention,
            });
        }
        log::debug!("retention {} -> {retention}", self.retention);
        self.retention = retention;
        Ok(())
    }

    /// Sets the per-step position multiplier; must be positive and finite.
    pub fn set_time_scale(&mut self, time_scale: f64) -> Result<()> {
        if !(time_scale.is_finite() && time_scale > 0.0) {
            log::warn!(
                "rejected time scale {time_scale}, keeping {}",
                self.time_scale
            );
            return Err(ArenaError::DegenerateConfiguration {
                name: "time_scale",
                value: time_scale,
            });
        }
        log::debug!("time scale {} -> {time_scale}", self.time_scale);
        self.time_scale = time_scale;
        Ok(())
    }

    /// Moves to the next entry of the 1 → 2 → 4 cycle and returns it.
    pub fn cycle_time_scale(&mut self) -> f64 {
        let next = TIME_SCALE_CYCLE
            .iter()
            .position(|&scale| scale == self.time_scale)
            .map(|index| TIME_SCALE_CYCLE[(index + 1) % TIME_SCALE_CYCLE.len()])
            .unwrap_or(TIME_SCALE_CYCLE[0]);
        self.time_scale = next;
        log::debug!("time scale cycled to {next}");
        next
    }

    /// First body, in placement order, under `point`.
    pub fn body_at(&self, point: DVec2) -> Option<BodyHandle> {
        PointQuery::first(&self.bodies, point)
    }

    /// Every body under `point`, nearest centre first.
    pub fn bodies_at(&self, point: DVec2) -> Vec<PointHit> {
        PointQuery::all(&self.bodies, point)
    }

    /// Moves a body to `position` and stops it, as an interactive drag does.
    pub fn drag_body(&mut self, handle: BodyHandle, position: DVec2) -> Result<()> {
        if !position.is_finite() {
            return Err(ArenaError::InvalidBodyParameters {
                field: "position",
                value: if position.x.is_finite() { position.y } else { position.x },
            });
        }
        let body = self
            .bodies
            .get_mut(handle)
            .ok_or(ArenaError::UnknownBody(handle))?;
        body.teleport(position);
        body.velocity = DVec2::ZERO;
        Ok(())
    }

    pub fn body(&self, handle: BodyHandle) -> Option<&Body> {
        self.bodies.get(handle)
    }

    /// Mutable access for external writes between steps; radius and mass stay fixed.
    pub fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut Body> {
        self.bodies.get_mut(handle)
    }

    pub fn bodies(&self) -> &[Body] {
        self.bodies.as_slice()
    }

    pub fn handles(&self) -> impl Iterator<Item = BodyHandle> + '_ {
        self.bodies.handles()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn bounds(&self) -> ArenaBounds {
        self.bounds
    }

    pub fn retention(&self) -> f64 {
        self.retention
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    pub fn policy_name(&self) -> &str {
        self.policy.name()
    }

    /// Wall reflections plus resolved pairs since creation or the last clear.
    pub fn collision_count(&self) -> u64 {
        self.collisions.total()
    }

    pub fn collisions(&self) -> CollisionCounter {
        self.collisions
    }

    pub fn total_kinetic_energy(&self) -> f64 {
        EnergyAccountant::total_kinetic_energy(self.bodies.as_slice())
    }

    pub fn total_momentum(&self) -> DVec2 {
        EnergyAccountant::total_momentum(self.bodies.as_slice())
    }

    pub fn last_step_metrics(&self) -> &StepMetrics {
        &self.metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamics::policy::SimplePhysicsPolicy;

    fn world() -> World {
        World::new(800.0, 600.0).unwrap()
    }

    #[test]
    fn rejects_invalid_bodies_without_storing_them() {
        let mut world = world();
        assert!(world
            .place_body(DVec2::new(10.0, 10.0), 0.0, 1.0, DVec2::ZERO)
            .is_err());
        assert!(world
            .place_body(DVec2::new(10.0, 10.0), 1.0, 0.0, DVec2::ZERO)
            .is_err());
        assert!(world.is_empty());
    }

    #[test]
    fn setters_keep_previous_value_on_rejection() {
        let mut world = world();
        world.set_retention(0.8).unwrap();
        assert!(world.set_retention(1.2).is_err());
        assert!(world.set_retention(-0.1).is_err());
        assert!(world.set_retention(f64::NAN).is_err());
        assert_eq!(world.retention(), 0.8);

        world.set_time_scale(2.0).unwrap();
        assert!(world.set_time_scale(0.0).is_err());
        assert!(world.set_time_scale(f64::INFINITY).is_err());
        assert_eq!(world.time_scale(), 2.0);
    }

    #[test]
    fn time_scale_cycles_and_resets_on_clear() {
        let mut world = world();
        assert_eq!(world.cycle_time_scale(), 2.0);
        assert_eq!(world.cycle_time_scale(), 4.0);
        assert_eq!(world.cycle_time_scale(), 1.0);

        world.set_time_scale(3.0).unwrap();
        assert_eq!(world.cycle_time_scale(), 1.0);

        world.set_time_scale(4.0).unwrap();
        world.clear();
        assert_eq!(world.time_scale(), 1.0);
    }

    #[test]
    fn time_scale_multiplies_displacement() {
        let mut world = world();
        let handle = world
            .place_body(DVec2::new(100.0, 100.0), 5.0, 1.0, DVec2::new(3.0, 0.0))
            .unwrap();
        world.set_time_scale(4.0).unwrap();
        world.step();
        let body = world.body(handle).unwrap();
        assert_eq!(body.position.x, 112.0);
        assert_eq!(body.velocity.x, 3.0);
    }

    #[test]
    fn simple_policy_advances_one_frame_regardless_of_scale() {
        let mut world = World::with_policy(800.0, 600.0, SimplePhysicsPolicy::default()).unwrap();
        let handle = world
            .place_body(DVec2::new(100.0, 100.0), 5.0, 1.0, DVec2::new(3.0, 0.0))
            .unwrap();
        world.set_time_scale(4.0).unwrap();
        world.step();
        assert_eq!(world.body(handle).unwrap().position.x, 103.0);
        assert_eq!(world.policy_name(), "simple");
    }

    #[test]
    fn metrics_describe_last_step() {
        let mut world = world();
        for i in 0..4 {
            world
                .place_body(DVec2::new(100.0 + 50.0 * i as f64, 300.0), 5.0, 1.0, DVec2::ZERO)
                .unwrap();
        }
        world.step();
        let metrics = world.last_step_metrics();
        assert_eq!(metrics.body_count, 4);
        assert_eq!(metrics.pair_checks, StepMetrics::pair_checks_for(4));
        assert_eq!(metrics.pairs_resolved, 0);
        assert_eq!(metrics.wall_reflections, 0);
        assert_eq!(metrics.bodies_contained, 0);
    }

    #[test]
    fn correction_into_a_wall_is_undone_within_the_step() {
        let mut world = world();
        let walled = world
            .place_body(DVec2::new(10.0, 300.0), 10.0, 1.0, DVec2::ZERO)
            .unwrap();
        let pressed = world
            .place_body(DVec2::new(29.0, 300.0), 10.0, 1.0, DVec2::ZERO)
            .unwrap();

        world.step();

        assert_eq!(world.body(walled).unwrap().position.x, 10.0);
        assert_eq!(world.body(pressed).unwrap().position.x, 29.5);
        assert_eq!(world.last_step_metrics().bodies_contained, 1);
        assert_eq!(world.collision_count(), 0);
    }

    #[test]
    fn drag_moves_and_stops_body() {
        let mut world = world();
        let handle = world
            .place_body(DVec2::new(100.0, 100.0), 10.0, 1.0, DVec2::new(5.0, 5.0))
            .unwrap();
        assert_eq!(world.body_at(DVec2::new(105.0, 100.0)), Some(handle));

        world.drag_body(handle, DVec2::new(400.0, 300.0)).unwrap();
        let body = world.body(handle).unwrap();
        assert_eq!(body.position, DVec2::new(400.0, 300.0));
        assert_eq!(body.previous_position, DVec2::new(400.0, 300.0));
        assert_eq!(body.velocity, DVec2::ZERO);

        world.clear();
        assert_eq!(
            world.drag_body(handle, DVec2::new(1.0, 1.0)),
            Err(ArenaError::UnknownBody(handle))
        );
    }

    #[test]
    fn from_config_validates_every_field() {
        let config = WorldConfig::default().with_retention(0.5).with_time_scale(2.0);
        let world = World::from_config(&config).unwrap();
        assert_eq!(world.retention(), 0.5);
        assert_eq!(world.time_scale(), 2.0);
        assert_eq!(world.bounds().width(), 800.0);

        assert!(World::from_config(&config.with_retention(2.0)).is_err());
        assert!(World::from_config(&config.with_size(0.0, 600.0)).is_err());
    }
}
