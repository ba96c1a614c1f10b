use glam::DVec2;

use crate::utils::allocator::{BodyHandle, BodySet};

/// Body whose disc contains a query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointHit {
    pub handle: BodyHandle,
    /// Distance from the query point to the body centre.
    pub distance: f64,
}

/// Point-in-disc queries over a body set, used for picking bodies under a pointer.
pub struct PointQuery;

impl PointQuery {
    /// First body, in placement order, whose disc contains `point` (rim included).
    pub fn first(bodies: &BodySet, point: DVec2) -> Option<BodyHandle> {
        bodies
            .handles()
            .zip(bodies.iter())
            .find(|(_, body)| body.contains_point(point))
            .map(|(handle, _)| handle)
    }

    /// Every body containing `point`, nearest centre first.
    pub fn all(bodies: &BodySet, point: DVec2) -> Vec<PointHit> {
        let mut hits: Vec<PointHit> = bodies
            .handles()
            .zip(bodies.iter())
            .filter(|(_, body)| body.contains_point(point))
            .map(|(handle, body)| PointHit {
                handle,
                distance: body.position.distance(point),
            })
            .collect();

        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }
}
