use glam::DVec2;

use crate::{
    config::MIN_SPEED,
    core::body::Body,
    utils::math::{snap_vec_to_rest, Rotate2},
};

/// Result of checking one unordered pair of bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairOutcome {
    /// The discs do not overlap.
    Apart,
    /// The discs overlap but are already separating; velocities were left alone.
    Receding,
    /// Velocities were exchanged along the contact normal.
    Resolved,
    /// The pair has no positive total mass and was skipped.
    Degenerate,
}

impl PairOutcome {
    pub fn is_resolved(&self) -> bool {
        matches!(self, PairOutcome::Resolved)
    }

    pub fn is_contact(&self) -> bool {
        matches!(self, PairOutcome::Resolved | PairOutcome::Receding)
    }
}

/// Circle–circle contact solver: 1D elastic exchange along the contact normal,
/// followed by an optional push-apart along the same normal.
#[derive(Debug, Clone, Copy)]
pub struct PairResolver {
    /// Skip the velocity exchange for pairs that are already moving apart.
    pub approach_filter: bool,
    /// Extra separation added on top of the overlap; `None` disables positional correction.
    pub separation_slop: Option<f64>,
    pub min_speed: f64,
}

impl PairResolver {
    pub fn new(approach_filter: bool, separation_slop: Option<f64>) -> Self {
        Self {
            approach_filter,
            separation_slop,
            min_speed: MIN_SPEED,
        }
    }

    pub fn resolve(&self, a: &mut Body, b: &mut Body, retention: f64) -> PairOutcome {
        let delta = b.position - a.position;
        let distance = delta.length();
        let reach = a.radius() + b.radius();
        if distance >= reach {
            return PairOutcome::Apart;
        }

        let total_mass = a.mass() + b.mass();
        if total_mass.is_nan() || total_mass <= 0.0 {
            log::warn!("skipping pair with non-positive total mass {total_mass}");
            return PairOutcome::Degenerate;
        }

        // Coincident centres have no contact direction; fall back to +x.
        let angle = if distance > 0.0 {
            delta.y.atan2(delta.x)
        } else {
            0.0
        };
        let normal = DVec2::from_angle(angle);

        let approaching = (b.velocity - a.velocity).dot(normal) < 0.0;
        let outcome = if self.approach_filter && !approaching {
            PairOutcome::Receding
        } else {
            self.exchange_momentum(a, b, angle, total_mass, retention);
            PairOutcome::Resolved
        };

        if let Some(slop) = self.separation_slop {
            let offset = normal * (0.5 * (reach - distance + slop));
            a.position -= offset;
            b.position += offset;
        }

        outcome
    }

    fn exchange_momentum(
        &self,
        a: &mut Body,
        b: &mut Body,
        angle: f64,
        total_mass: f64,
        retention: f64,
    ) {
        let m1 = a.mass();
        let m2 = b.mass();
        let v1 = a.velocity.to_frame(angle);
        let v2 = b.velocity.to_frame(angle);

        let v1n = ((m1 - m2) * v1.x + 2.0 * m2 * v2.x) / total_mass;
        let v2n = ((m2 - m1) * v2.x + 2.0 * m1 * v1.x) / total_mass;

        let factor = retention.clamp(0.0, 1.0).sqrt();
        a.velocity = DVec2::new(v1n, v1.y).from_frame(angle) * factor;
        b.velocity = DVec2::new(v2n, v2.y).from_frame(angle) * factor;

        // Snapping removes momentum, so a perfectly elastic exchange is left exact.
        if factor < 1.0 {
            a.velocity = snap_vec_to_rest(a.velocity, self.min_speed);
            b.velocity = snap_vec_to_rest(b.velocity, self.min_speed);
        }
    }
}
