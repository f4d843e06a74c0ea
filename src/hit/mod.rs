use std::ops::Range;

use crate::{
    math::vec::{Normal, Point},
    ray::Ray,
};

/// Where and how a ray met a surface.
#[derive(Debug, Clone, PartialEq)]
pub struct HitRecord {
    pub t: f32,
    pub hit_point: Point,
    /// Unit length for a positive radius, see [`crate::shape::Sphere`]
    pub normal: Normal,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Hit {
    Hit(HitRecord),
    NoHit,
}

impl Hit {
    pub fn is_hit(&self) -> bool {
        matches!(self, Hit::Hit(_))
    }

    pub fn record(&self) -> Option<&HitRecord> {
        match self {
            Hit::Hit(record) => Some(record),
            Hit::NoHit => None,
        }
    }
}

impl From<Hit> for Option<HitRecord> {
    fn from(hit: Hit) -> Self {
        match hit {
            Hit::Hit(record) => Some(record),
            Hit::NoHit => None,
        }
    }
}

/// Anything a ray can be intersected with.
///
/// `range` is open on both ends: only hits with `range.start < t < range.end` count.
/// An empty or NaN range never hits.
pub trait Hittable: Send + Sync {
    fn hit(&self, ray: &Ray, range: Range<f32>) -> Hit;
}
