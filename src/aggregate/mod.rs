pub mod shapelist;

use std::ops::Range;

use crate::{
    hit::{Hit, Hittable},
    ray::Ray,
};

pub use shapelist::ShapeList;

/// A group of shapes answering for the nearest of its members.
pub trait Aggregate {
    /// The hit with the smallest `t` inside `range` over every member, whatever their order.
    fn first_hit(&self, ray: &Ray, range: Range<f32>) -> Hit;
}

impl<T> Hittable for T
where
    T: Aggregate + Send + Sync,
{
    fn hit(&self, ray: &Ray, range: Range<f32>) -> Hit {
        self.first_hit(ray, range)
    }
}
