use std::borrow::Cow;

use super::math::vec::{Point, Vec3};

/// The half-line `origin + t * direction`.
///
/// Both vectors are either owned by the ray ([`Ray::new`]) or borrowed from the caller
/// ([`Ray::borrowed`]); a borrowing ray cannot outlive the vectors it points to.
///
/// The direction is used as given: it is never normalized, and a zero direction is legal
/// (the ray degenerates to its origin).
#[derive(Debug, Clone, PartialEq)]
pub struct Ray<'a> {
    origin: Cow<'a, Point>,
    direction: Cow<'a, Vec3>,
}

impl Ray<'static> {
    pub fn new(origin: Point, direction: Vec3) -> Self {
        Self {
            origin: Cow::Owned(origin),
            direction: Cow::Owned(direction),
        }
    }
}

impl<'a> Ray<'a> {
    pub fn borrowed(origin: &'a Point, direction: &'a Vec3) -> Self {
        Self {
            origin: Cow::Borrowed(origin),
            direction: Cow::Borrowed(direction),
        }
    }

    pub fn origin(&self) -> &Point {
        &self.origin
    }

    pub fn direction(&self) -> &Vec3 {
        &self.direction
    }

    /// Detaches the ray from any borrowed storage.
    pub fn into_owned(self) -> Ray<'static> {
        Ray {
            origin: Cow::Owned(self.origin.into_owned()),
            direction: Cow::Owned(self.direction.into_owned()),
        }
    }

    pub fn at(&self, t: f32) -> Point {
        self.origin() + &(t * self.direction())
    }

    /// Writes [`Ray::at`] into `out` without building a temporary.
    pub fn at_into(&self, t: f32, out: &mut Point) {
        *out = *self.direction();
        *out *= t;
        *out += *self.origin();
    }
}
