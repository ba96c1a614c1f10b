//! Additional math helpers layered on top of `glam`.

use glam::DVec2;

/// Frame rotation for 2D vectors.
///
/// `to_frame(angle)` expresses a world-frame vector in a frame whose local x axis
/// points along `angle`; `from_frame(angle)` maps it back.
pub trait Rotate2 {
    fn to_frame(self, angle: f64) -> Self;
    fn from_frame(self, angle: f64) -> Self;
}

impl Rotate2 for DVec2 {
    fn to_frame(self, angle: f64) -> Self {
        DVec2::from_angle(-angle).rotate(self)
    }

    fn from_frame(self, angle: f64) -> Self {
        DVec2::from_angle(angle).rotate(self)
    }
}

/// Converts a launch speed and heading (degrees, clockwise from +x in screen space) into a velocity.
pub fn launch_velocity(speed: f64, angle_degrees: f64) -> DVec2 {
    let (sin, cos) = angle_degrees.to_radians().sin_cos();
    DVec2::new(cos * speed, sin * speed)
}

/// Zeroes a velocity component whose magnitude is below `threshold`.
pub fn snap_to_rest(component: f64, threshold: f64) -> f64 {
    if component.abs() < threshold {
        0.0
    } else {
        component
    }
}

/// Component-wise [`snap_to_rest`].
pub fn snap_vec_to_rest(v: DVec2, threshold: f64) -> DVec2 {
    DVec2::new(snap_to_rest(v.x, threshold), snap_to_rest(v.y, threshold))
}
