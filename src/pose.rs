//! Robot pose and the distance queries the sequencer runs against it.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::{PI, TAU};

/// Planar robot pose accumulated since the last reset.
///
/// `x` and `y` are in meters, `theta` in radians. The odometry layer owns the
/// pose and hands it to the sequencer by mutable reference every tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub x: f32,
    pub y: f32,
    pub theta: f32,
}

impl Pose {
    /// The origin pose `(0, 0, 0)`.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        theta: 0.0,
    };

    pub fn new(x: f32, y: f32, theta: f32) -> Self {
        Self { x, y, theta }
    }

    /// Pose with only a linear component along the robot's heading axis.
    pub fn linear(meters: f32) -> Self {
        Self::new(meters, 0.0, 0.0)
    }

    /// Pose with only a heading component.
    pub fn heading(radians: f32) -> Self {
        Self::new(0.0, 0.0, radians)
    }

    /// Planar position as a vector.
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Euclidean distance between the two positions. Heading is ignored.
    pub fn distance_to(&self, target: &Pose) -> f32 {
        self.position().distance(target.position())
    }

    /// Signed heading error `target.theta - self.theta`, wrapped into `(-π, π]`.
    ///
    /// Positive means the target lies counter-clockwise of the current heading.
    pub fn angle_to(&self, target: &Pose) -> f32 {
        normalize_angle(target.theta - self.theta)
    }

    /// Zeroes the local odometry frame.
    pub fn reset(&mut self) {
        *self = Self::ZERO;
    }
}

/// Wraps an angle into `(-π, π]`.
///
/// Non-finite input is returned unchanged.
pub fn normalize_angle(angle: f32) -> f32 {
    if !angle.is_finite() {
        return angle;
    }
    let mut a = angle % TAU;
    if a > PI {
        a -= TAU;
    } else if a <= -PI {
        a += TAU;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn distance_ignores_heading() {
        let a = Pose::new(0.0, 0.0, 1.0);
        let b = Pose::new(3.0, 4.0, -2.0);
        assert!((a.distance_to(&b) - 5.0).abs() < EPS);
    }

    #[test]
    fn angle_to_is_signed() {
        let here = Pose::heading(0.0);
        assert!((here.angle_to(&Pose::heading(0.5)) - 0.5).abs() < EPS);
        assert!((here.angle_to(&Pose::heading(-0.5)) + 0.5).abs() < EPS);
    }

    #[test]
    fn angle_to_takes_the_short_way_round() {
        // 170° to -170° is a 20° counter-clockwise turn, not 340° clockwise.
        let here = Pose::heading(170f32.to_radians());
        let there = Pose::heading(-170f32.to_radians());
        assert!((here.angle_to(&there) - 20f32.to_radians()).abs() < 1e-4);
    }

    #[test]
    fn normalize_half_open_range() {
        assert!((normalize_angle(PI) - PI).abs() < EPS);
        assert!((normalize_angle(-PI) - PI).abs() < EPS);
        assert!((normalize_angle(2.5 * PI) - PI / 2.0).abs() < 1e-4);
        assert!(normalize_angle(TAU).abs() < EPS);
        assert!((normalize_angle(-PI / 2.0) + PI / 2.0).abs() < EPS);
    }

    #[test]
    fn reset_zeroes_everything() {
        let mut pose = Pose::new(1.2, -0.4, 0.3);
        pose.reset();
        assert_eq!(pose, Pose::ZERO);
    }
}
