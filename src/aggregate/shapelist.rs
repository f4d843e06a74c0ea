use std::ops::Range;

use crate::{
    hit::{Hit, Hittable},
    ray::Ray,
    shape::Sphere,
};

use super::Aggregate;

/// Ordered, owned list of spheres.
///
/// The order only matters for exact ties in `t`, where the earliest sphere wins.
/// A render pass borrows the list immutably; edits happen between passes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeList(Vec<Sphere>);

impl ShapeList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`ShapeList::push`].
    pub fn with(mut self, sphere: Sphere) -> Self {
        self.push(sphere);
        self
    }

    pub fn push(&mut self, sphere: Sphere) {
        self.0.push(sphere)
    }

    pub fn prepend(&mut self, sphere: Sphere) {
        self.0.insert(0, sphere)
    }

    /// Inserts at `index`, appending when `index` is past the end.
    pub fn insert(&mut self, index: usize, sphere: Sphere) {
        let index = index.min(self.0.len());
        self.0.insert(index, sphere)
    }

    /// Removes the sphere at `index`; out of bounds leaves the list untouched.
    pub fn remove(&mut self, index: usize) -> Option<Sphere> {
        (index < self.0.len()).then(|| self.0.remove(index))
    }

    pub fn pop(&mut self) -> Option<Sphere> {
        self.0.pop()
    }

    pub fn get(&self, index: usize) -> Option<&Sphere> {
        self.0.get(index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sphere> {
        self.0.iter()
    }
}

impl Aggregate for ShapeList {
    fn first_hit(&self, ray: &Ray, range: Range<f32>) -> Hit {
        let start = range.start;
        let mut end = range.end;
        let mut res = Hit::NoHit;

        for sphere in self.0.iter() {
            let range = start..end;
            if range.is_empty() {
                break;
            }

            // Later spheres only win if strictly nearer
            if let Hit::Hit(record) = sphere.hit(ray, range) {
                end = record.t;
                res = Hit::Hit(record);
            }
        }
        res
    }
}

impl From<Vec<Sphere>> for ShapeList {
    fn from(spheres: Vec<Sphere>) -> Self {
        Self(spheres)
    }
}

impl FromIterator<Sphere> for ShapeList {
    fn from_iter<I: IntoIterator<Item = Sphere>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ShapeList {
    type Item = &'a Sphere;
    type IntoIter = std::slice::Iter<'a, Sphere>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
