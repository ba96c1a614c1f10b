//! Simulation dynamics: position integration and selectable physics policies.

pub mod integrator;
pub mod policy;

pub use integrator::Integrator;
pub use policy::{policy_for, PhysicsPolicy, RobustPhysicsPolicy, SimplePhysicsPolicy};
