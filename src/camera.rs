use crate::{
    math::vec::{Point, Vec3},
    ray::Ray,
};

/// Pinhole camera looking through a rectangular viewport.
///
/// The viewport spans `lower_left_corner + u * horizontal + v * vertical` for `u, v` in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub width: u32,
    pub height: u32,
    pub origin: Point,
    pub lower_left_corner: Point,
    pub horizontal: Vec3,
    pub vertical: Vec3,
}

impl Camera {
    pub fn new(
        width: u32,
        height: u32,
        origin: Point,
        lower_left_corner: Point,
        horizontal: Vec3,
        vertical: Vec3,
    ) -> Self {
        Self {
            width,
            height,
            origin,
            lower_left_corner,
            horizontal,
            vertical,
        }
    }

    /// Camera at the origin looking down `-z` through a 4x2 viewport at `z = -1`
    pub fn tutorial(width: u32, height: u32) -> Self {
        Self::new(
            width,
            height,
            Vec3::ZERO,
            Vec3::new(-2.0, -1.0, -1.0),
            Vec3::new(4.0, 0.0, 0.0),
            Vec3::new(0.0, 2.0, 0.0),
        )
    }

    pub fn ray(&self, u: f32, v: f32) -> Ray<'static> {
        let target = self.lower_left_corner + u * self.horizontal + v * self.vertical;
        Ray::new(self.origin, target - self.origin)
    }

    /// Ray through pixel `(i, j)`, with `j` counted from the bottom row
    pub fn pixel_ray(&self, i: u32, j: u32) -> Ray<'static> {
        let u = i as f32 / self.width as f32;
        let v = j as f32 / self.height as f32;
        self.ray(u, v)
    }
}
