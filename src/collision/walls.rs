use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::{
    config::MIN_SPEED,
    core::{body::Body, types::ArenaBounds},
    utils::math::snap_to_rest,
};

/// How the wall resolver decides that a boundary was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WallMode {
    /// Reflect on every frame the disc pokes outside the arena.
    Naive,
    /// Reflect only when the disc crosses a boundary or is still heading out through it.
    EdgeTriggered,
}

/// Axes reflected by a single wall resolution.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WallHits {
    pub x: bool,
    pub y: bool,
}

impl WallHits {
    /// Number of axis reflections; a corner hit counts twice.
    pub fn count(&self) -> u32 {
        self.x as u32 + self.y as u32
    }

    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

/// Keeps bodies inside the arena by reflecting the velocity component normal to a wall.
#[derive(Debug, Clone, Copy)]
pub struct WallResolver {
    pub mode: WallMode,
    pub min_speed: f64,
}

impl WallResolver {
    pub fn new(mode: WallMode) -> Self {
        Self {
            mode,
            min_speed: MIN_SPEED,
        }
    }

    pub fn naive() -> Self {
        Self::new(WallMode::Naive)
    }

    pub fn edge_triggered() -> Self {
        Self::new(WallMode::EdgeTriggered)
    }

    /// Reflects `body` off any wall it violates. Each axis is handled independently.
    pub fn resolve(&self, body: &mut Body, bounds: &ArenaBounds, retention: f64) -> WallHits {
        let factor = retention.clamp(0.0, 1.0).sqrt();
        let min = bounds.min_center(body.radius());
        let max = bounds.max_center(body.radius());

        let x = self.resolve_axis(
            AxisSpan { min: min.x, max: max.x },
            &mut body.position.x,
            body.previous_position.x,
            &mut body.velocity.x,
            factor,
        );
        let y = self.resolve_axis(
            AxisSpan { min: min.y, max: max.y },
            &mut body.position.y,
            body.previous_position.y,
            &mut body.velocity.y,
            factor,
        );

        WallHits { x, y }
    }

    /// Pulls a disc that ended up outside the inset bounds back onto them, without
    /// touching its velocity. Naive walls leave positions alone.
    ///
    /// Returns `true` when the body was moved.
    pub fn contain(&self, body: &mut Body, bounds: &ArenaBounds) -> bool {
        if self.mode == WallMode::Naive || bounds.contains_disc(body.position, body.radius()) {
            return false;
        }

        let min = bounds.min_center(body.radius());
        let max = bounds.max_center(body.radius());
        body.position = DVec2::new(
            AxisSpan { min: min.x, max: max.x }.clamp(body.position.x),
            AxisSpan { min: min.y, max: max.y }.clamp(body.position.y),
        );
        true
    }

    fn resolve_axis(
        &self,
        span: AxisSpan,
        position: &mut f64,
        previous: f64,
        velocity: &mut f64,
        factor: f64,
    ) -> bool {
        let below = *position < span.min;
        let above = *position > span.max;
        if !below && !above {
            return false;
        }

        match self.mode {
            WallMode::Naive => {
                *velocity = snap_to_rest(-*velocity * factor, self.min_speed);
                true
            }
            WallMode::EdgeTriggered => {
                let crossed = !span.violated_by(previous);
                let outward = (below && *velocity < 0.0) || (above && *velocity > 0.0);
                let reflect = crossed || outward;
                if reflect {
                    *velocity = snap_to_rest(-*velocity * factor, self.min_speed);
                }
                // Clamped even without a reflection; an inward velocity is kept.
                *position = span.clamp(*position);
                reflect
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct AxisSpan {
    min: f64,
    max: f64,
}

impl AxisSpan {
    fn violated_by(&self, value: f64) -> bool {
        value < self.min || value > self.max
    }

    // max/min rather than f64::clamp: an arena narrower than the disc has min > max.
    fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena() -> ArenaBounds {
        ArenaBounds::new(800.0, 600.0).unwrap()
    }

    fn body(position: DVec2, velocity: DVec2) -> Body {
        Body::new(position, velocity, 10.0, 1.0).unwrap()
    }

    #[test]
    fn inside_body_is_untouched() {
        let mut b = body(DVec2::new(400.0, 300.0), DVec2::new(3.0, -2.0));
        let hits = WallResolver::edge_triggered().resolve(&mut b, &arena(), 1.0);
        assert!(!hits.any());
        assert_eq!(b.velocity, DVec2::new(3.0, -2.0));
    }

    #[test]
    fn crossing_reflects_and_clamps() {
        let mut b = body(DVec2::new(795.0, 300.0), DVec2::new(4.0, 0.0));
        b.previous_position = DVec2::new(789.0, 300.0);
        let hits = WallResolver::edge_triggered().resolve(&mut b, &arena(), 1.0);
        assert!(hits.x && !hits.y);
        assert_eq!(b.velocity.x, -4.0);
        assert_eq!(b.position.x, 790.0);
    }

    #[test]
    fn embedded_body_moving_inward_is_not_reflected_again() {
        let mut b = body(DVec2::new(5.0, 300.0), DVec2::new(3.0, 0.0));
        b.previous_position = DVec2::new(2.0, 300.0);
        let hits = WallResolver::edge_triggered().resolve(&mut b, &arena(), 1.0);
        assert!(!hits.any());
        assert_eq!(b.velocity.x, 3.0);
        assert_eq!(b.position.x, 10.0);
    }

    #[test]
    fn body_at_rest_outside_is_pulled_back_without_a_hit() {
        let mut b = body(DVec2::new(9.5, 300.0), DVec2::ZERO);
        b.previous_position = DVec2::new(9.5, 300.0);
        let hits = WallResolver::edge_triggered().resolve(&mut b, &arena(), 0.0);
        assert!(!hits.any());
        assert_eq!(b.position, DVec2::new(10.0, 300.0));
        assert_eq!(b.velocity, DVec2::ZERO);
    }

    #[test]
    fn contain_clamps_only_escaped_discs() {
        let resolver = WallResolver::edge_triggered();
        let mut inside = body(DVec2::new(400.0, 300.0), DVec2::new(1.0, 0.0));
        assert!(!resolver.contain(&mut inside, &arena()));
        assert_eq!(inside.position, DVec2::new(400.0, 300.0));

        let mut escaped = body(DVec2::new(9.5, 596.0), DVec2::new(-2.0, 1.0));
        assert!(resolver.contain(&mut escaped, &arena()));
        assert_eq!(escaped.position, DVec2::new(10.0, 590.0));
        assert_eq!(escaped.velocity, DVec2::new(-2.0, 1.0));
        assert!(arena().contains_disc(escaped.position, escaped.radius()));

        let mut naive = body(DVec2::new(9.5, 300.0), DVec2::ZERO);
        assert!(!WallResolver::naive().contain(&mut naive, &arena()));
        assert_eq!(naive.position.x, 9.5);
    }

    #[test]
    fn naive_mode_flips_every_frame_while_outside() {
        let resolver = WallResolver::naive();
        let mut b = body(DVec2::new(5.0, 300.0), DVec2::new(3.0, 0.0));
        assert!(resolver.resolve(&mut b, &arena(), 1.0).x);
        assert_eq!(b.velocity.x, -3.0);
        assert!(resolver.resolve(&mut b, &arena(), 1.0).x);
        assert_eq!(b.velocity.x, 3.0);
        assert_eq!(b.position.x, 5.0);
    }

    #[test]
    fn corner_hit_reflects_both_axes() {
        let mut b = body(DVec2::new(795.0, 595.0), DVec2::new(2.0, 2.0));
        b.previous_position = DVec2::new(789.0, 589.0);
        let hits = WallResolver::edge_triggered().resolve(&mut b, &arena(), 1.0);
        assert_eq!(hits.count(), 2);
        assert_eq!(b.velocity, DVec2::new(-2.0, -2.0));
    }

    #[test]
    fn retention_scales_speed_by_square_root() {
        let mut b = body(DVec2::new(5.0, 300.0), DVec2::new(-4.0, 1.0));
        WallResolver::edge_triggered().resolve(&mut b, &arena(), 0.25);
        assert_eq!(b.velocity.x, 2.0);
        assert_eq!(b.velocity.y, 1.0);
    }

    #[test]
    fn zero_retention_snaps_to_rest() {
        let mut b = body(DVec2::new(5.0, 300.0), DVec2::new(-4.0, 1.0));
        let hits = WallResolver::edge_triggered().resolve(&mut b, &arena(), 0.0);
        assert!(hits.x);
        assert_eq!(b.velocity.x, 0.0);
    }

    #[test]
    fn tiny_rebound_snaps_to_zero() {
        let mut b = body(DVec2::new(5.0, 300.0), DVec2::new(-0.015, 0.0));
        WallResolver::edge_triggered().resolve(&mut b, &arena(), 0.25);
        assert_eq!(b.velocity.x, 0.0);
    }

    #[test]
    fn oversized_disc_does_not_panic() {
        let tiny = ArenaBounds::new(10.0, 10.0).unwrap();
        let mut b = body(DVec2::new(5.0, 5.0), DVec2::new(-1.0, 0.0));
        let hits = WallResolver::edge_triggered().resolve(&mut b, &tiny, 1.0);
        assert!(hits.x);
        assert!(b.position.x.is_finite());
    }
}
