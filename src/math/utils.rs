use std::ops::{Add, Mul, Range};

/// Linear interpolation, `from` at `t = 0` and `to` at `t = 1`
pub fn lerp<T>(t: f32, from: T, to: T) -> T
where
    T: Add<T, Output = T>,
    f32: Mul<T, Output = T>,
{
    (1.0 - t) * from + t * to
}

pub trait RangeSurroundsExt {
    /// `start < t < end`, both bounds excluded
    fn surrounds(&self, t: f32) -> bool;
}

impl RangeSurroundsExt for Range<f32> {
    fn surrounds(&self, t: f32) -> bool {
        self.start < t && t < self.end
    }
}
