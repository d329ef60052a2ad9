mod vec;

pub use std::f32::consts::PI;

pub use vec::Vec3;

use std::ops::{Add, Mul, Sub};

/// Blend between `v0` and `v1`. `t` outside [0, 1] is clamped, never an
/// error, so callers can feed raw interpolation weights straight in.
pub fn lerp<T>(v0: T, v1: T, t: f32) -> T
where
    T: Add<Output = T> + Sub<Output = T> + Mul<f32, Output = T> + Copy,
{
    v0 + (v1 - v0) * t.clamp(0.0, 1.0)
}

#[derive(Copy, Clone, Debug)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub const fn new(origin: Vec3, direction: Vec3) -> Self {
        Ray { origin, direction }
    }
}
