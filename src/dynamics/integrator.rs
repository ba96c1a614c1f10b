use crate::core::body::Body;

/// Explicit position integrator: `position += velocity * dt`.
///
/// `dt` is a unitless frame multiplier; velocities are never scaled by it.
#[derive(Debug, Clone, Copy)]
pub struct Integrator {
    pub dt: f64,
}

impl Integrator {
    pub fn new(dt: f64) -> Self {
        Self { dt }
    }

    /// Remembers the current position, then advances it.
    pub fn advance(&self, body: &mut Body) {
        body.previous_position = body.position;
        body.position += body.velocity * self.dt;
    }
}
