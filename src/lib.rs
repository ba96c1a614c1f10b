//! Particle Arena – a 2D kernel for circular bodies in a bounded arena.
//!
//! Bodies move in straight lines, reflect off the arena walls, and exchange
//! momentum on contact through a 1D elastic collision along the contact
//! normal. A retention coefficient removes energy on every bounce, and a time
//! scale speeds up position advance without touching velocities.
//!
//! The kernel is frame-stepped and single-threaded: an external loop calls
//! [`World::step`] (or [`ArenaEngine::tick`]) once per frame and reads body
//! state back between steps.

pub mod collision;
pub mod config;
pub mod core;
pub mod dynamics;
pub mod error;
pub mod utils;
pub mod world;

pub use glam::DVec2;

pub use collision::{
    pair::{PairOutcome, PairResolver},
    queries::{PointHit, PointQuery},
    walls::{WallHits, WallMode, WallResolver},
};
pub use config::{PolicyKind, WorldConfig};
pub use crate::core::{body::Body, types::ArenaBounds};
pub use dynamics::{
    integrator::Integrator,
    policy::{PhysicsPolicy, RobustPhysicsPolicy, SimplePhysicsPolicy},
};
pub use error::{ArenaError, Result};
pub use utils::{
    allocator::BodyHandle,
    math::{launch_velocity, Rotate2},
    profiling::StepMetrics,
};
pub use world::{CollisionCounter, EnergyAccountant, World};

/// High-level wrapper that owns a [`World`] plus the state an interactive
/// front end keeps around it: a pause flag and the body being dragged.
pub struct ArenaEngine {
    world: World,
    paused: bool,
    dragging: Option<BodyHandle>,
}

impl ArenaEngine {
    pub fn new(config: WorldConfig) -> Result<Self> {
        Ok(Self {
            world: World::from_config(&config)?,
            paused: false,
            dragging: None,
        })
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Places a body launched at `speed` along `angle_degrees`.
    pub fn launch(
        &mut self,
        position: DVec2,
        radius: f64,
        mass: f64,
        speed: f64,
        angle_degrees: f64,
    ) -> Result<BodyHandle> {
        self.world
            .place_body(position, radius, mass, launch_velocity(speed, angle_degrees))
    }

    /// Steps the world unless paused. Returns whether a step ran.
    pub fn tick(&mut self) -> bool {
        if self.paused {
            return false;
        }
        if let Some(handle) = self.dragging {
            // Hold the dragged body still against anything that hit it last frame.
            if let Some(body) = self.world.body_mut(handle) {
                body.velocity = DVec2::ZERO;
            }
        }
        self.world.step();
        true
    }

    /// Flips the pause flag and returns the new state.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        log::debug!("paused: {}", self.paused);
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Starts dragging the body under `point`, if any.
    pub fn begin_drag(&mut self, point: DVec2) -> Option<BodyHandle> {
        self.dragging = self.world.body_at(point);
        self.dragging
    }

    /// Moves the dragged body to `point`; does nothing when no drag is active.
    pub fn drag_to(&mut self, point: DVec2) -> Result<()> {
        match self.dragging {
            Some(handle) => self.world.drag_body(handle, point),
            None => Ok(()),
        }
    }

    pub fn end_drag(&mut self) -> Option<BodyHandle> {
        self.dragging.take()
    }

    pub fn dragging(&self) -> Option<BodyHandle> {
        self.dragging
    }

    /// Clears the world and drops any active drag.
    pub fn clear(&mut self) {
        self.dragging = None;
        self.world.clear();
    }
}
