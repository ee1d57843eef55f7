//! 2D vector math used by the steering pipeline.
//!
//! Storage and arithmetic come from [`glam::Vec2`]; [`SteerVec`] adds the
//! handful of operations steering code is written in terms of.  Every
//! operation is total: zero-length inputs produce zero-length outputs rather
//! than NaN.

pub use glam::Vec2;

/// Steering-flavoured helpers on top of `glam::Vec2`.
pub trait SteerVec: Sized {
    /// Clamp the magnitude to at most `max`, preserving direction.
    fn limit(self, max: f32) -> Self;

    /// Rescale to magnitude `mag`.  A zero vector stays zero.
    fn set_mag(self, mag: f32) -> Self;

    /// Angle of the vector in radians, in `(-π, π]`.  Zero for the zero vector.
    fn heading(self) -> f32;

    /// Unit vector pointing along `angle` radians.
    fn from_heading(angle: f32) -> Self;
}

impl SteerVec for Vec2 {
    #[inline]
    fn limit(self, max: f32) -> Vec2 {
        self.clamp_length_max(max)
    }

    #[inline]
    fn set_mag(self, mag: f32) -> Vec2 {
        self.normalize_or_zero() * mag
    }

    #[inline]
    fn heading(self) -> f32 {
        self.y.atan2(self.x)
    }

    #[inline]
    fn from_heading(angle: f32) -> Vec2 {
        let (sin, cos) = angle.sin_cos();
        Vec2::new(cos, sin)
    }
}

/// Absolute angular difference between two headings, wrapped into `[0, π]`.
pub fn angle_between(a: f32, b: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    let d = (a - b).rem_euclid(TAU);
    if d > PI { TAU - d } else { d }
}
