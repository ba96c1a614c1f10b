use glam::DVec2;
use serde::Serialize;

use crate::error::{ArenaError, Result};

/// Circular rigid body simulated inside an arena.
///
/// Radius and mass are fixed at construction; position and velocity are free
/// for collaborators to overwrite between steps (e.g. while dragging).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Body {
    pub position: DVec2,
    /// Position before the most recent integration; the wall resolver uses it to detect crossings.
    pub previous_position: DVec2,
    pub velocity: DVec2,
    radius: f64,
    mass: f64,
}

impl Body {
    /// Creates a body, rejecting non-positive or non-finite radius and mass.
    pub fn new(position: DVec2, velocity: DVec2, radius: f64, mass: f64) -> Result<Self> {
        check_positive("radius", radius)?;
        check_positive("mass", mass)?;
        check_finite("position", position)?;
        check_finite("velocity", velocity)?;

        Ok(Self {
            position,
            previous_position: position,
            velocity,
            radius,
            mass,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.length_squared()
    }

    pub fn momentum(&self) -> DVec2 {
        self.velocity * self.mass
    }

    pub fn contains_point(&self, point: DVec2) -> bool {
        self.position.distance(point) <= self.radius
    }

    /// Moves the body as an external write, forgetting its motion history.
    pub fn teleport(&mut self, position: DVec2) {
        self.position = position;
        self.previous_position = position;
    }
}

fn check_positive(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ArenaError::InvalidBodyParameters { field, value })
    }
}

fn check_finite(field: &'static str, value: DVec2) -> Result<()> {
    if value.is_finite() {
        return Ok(());
    }
    let bad = if value.x.is_finite() { value.y } else { value.x };
    Err(ArenaError::InvalidBodyParameters { field, value: bad })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_radius_and_mass() {
        let err = Body::new(DVec2::ZERO, DVec2::ZERO, 0.0, 1.0).unwrap_err();
        assert_eq!(
            err,
            ArenaError::InvalidBodyParameters {
                field: "radius",
                value: 0.0
            }
        );

        let err = Body::new(DVec2::ZERO, DVec2::ZERO, 1.0, -2.0).unwrap_err();
        assert!(matches!(
            err,
            ArenaError::InvalidBodyParameters { field: "mass", .. }
        ));

        assert!(Body::new(DVec2::ZERO, DVec2::ZERO, f64::NAN, 1.0).is_err());
        assert!(Body::new(DVec2::new(f64::INFINITY, 0.0), DVec2::ZERO, 1.0, 1.0).is_err());
    }

    #[test]
    fn kinetic_energy_and_momentum() {
        let body = Body::new(DVec2::ZERO, DVec2::new(3.0, 4.0), 1.0, 2.0).unwrap();
        assert_eq!(body.kinetic_energy(), 25.0);
        assert_eq!(body.momentum(), DVec2::new(6.0, 8.0));
    }

    #[test]
    fn point_containment_includes_rim() {
        let body = Body::new(DVec2::new(10.0, 10.0), DVec2::ZERO, 5.0, 1.0).unwrap();
        assert!(body.contains_point(DVec2::new(15.0, 10.0)));
        assert!(!body.contains_point(DVec2::new(15.1, 10.0)));
    }
}
