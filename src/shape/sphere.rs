use std::ops::Range;

use crate::{
    hit::{Hit, HitRecord, Hittable},
    math::{float::FloatAsExt, utils::RangeSurroundsExt, vec::Point},
    ray::Ray,
};

/// A simple sphere shape.
///
/// Normals are `(p - center) / radius`: they point outwards if `radius` is positive and are
/// reversed if `radius` is negative. A sphere of radius zero has no surface and is never hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Point,
    pub radius: f32,
}

impl Sphere {
    pub const fn new(center: Point, radius: f32) -> Self {
        Self { center, radius }
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, range: Range<f32>) -> Hit {
        if range.is_empty() || self.radius == 0.0 {
            return Hit::NoHit;
        }
        // A zero direction never crosses anything
        let Some(a) = ray.direction().length_squared().into_non_zero(0.0) else {
            return Hit::NoHit;
        };

        let oc = ray.origin() - &self.center;
        let b_half = oc.dot(ray.direction());
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant_quarter = b_half * b_half - a * c;
        if discriminant_quarter.is_nan() || discriminant_quarter <= 0.0 {
            return Hit::NoHit;
        }

        // Either find first hit if hit is in range else, find the second hit
        let sqrt_d = discriminant_quarter.sqrt();
        let Some(t) = [(-b_half - sqrt_d) / a, (-b_half + sqrt_d) / a]
            .into_iter()
            .find(|&t| range.surrounds(t))
        else {
            return Hit::NoHit;
        };

        let hit_point = ray.at(t);
        let normal = (hit_point - self.center) / self.radius;
        Hit::Hit(HitRecord {
            t,
            hit_point,
            normal,
        })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::Sphere;
    use crate::{
        hit::{Hit, HitRecord, Hittable},
        math::vec::Vec3,
        ray::Ray,
    };

    const UNIT: Sphere = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5);
    const FORWARD: std::ops::Range<f32> = 0.0..f32::INFINITY;

    fn record(hit: Hit) -> HitRecord {
        match hit {
            Hit::Hit(record) => record,
            Hit::NoHit => panic!("expected a hit"),
        }
    }

    #[test]
    fn miss() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        assert_eq!(UNIT.hit(&ray, FORWARD), Hit::NoHit);
    }

    #[test]
    fn hit_front() {
        let ray = Ray::new(Vec3::ZERO, -Vec3::Z);
        let rec = record(UNIT.hit(&ray, FORWARD));
        assert_eq!(rec.t, 0.5);
        assert_abs_diff_eq!(rec.hit_point, Vec3::new(0.0, 0.0, -0.5));
        assert_abs_diff_eq!(rec.normal, Vec3::Z);
    }

    #[test]
    fn direction_need_not_be_unit() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -2.0));
        let rec = record(UNIT.hit(&ray, FORWARD));
        assert_eq!(rec.t, 0.25);
        assert_abs_diff_eq!(rec.hit_point, Vec3::new(0.0, 0.0, -0.5));
        assert_abs_diff_eq!(rec.normal, Vec3::Z);
    }

    #[test]
    fn inside_takes_far_root() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, -1.0), -Vec3::Z);
        let rec = record(UNIT.hit(&ray, FORWARD));
        assert_eq!(rec.t, 0.5);
        assert_abs_diff_eq!(rec.hit_point, Vec3::new(0.0, 0.0, -1.5));
        assert_abs_diff_eq!(rec.normal, -Vec3::Z);
    }

    #[test]
    fn bounds_are_exclusive() {
        let ray = Ray::new(Vec3::ZERO, -Vec3::Z);
        // Near root sits exactly on t_min, the far one is used
        let rec = record(UNIT.hit(&ray, 0.5..f32::INFINITY));
        assert_eq!(rec.t, 1.5);
        assert_abs_diff_eq!(rec.normal, -Vec3::Z);
        // Far root sits exactly on t_max, near root is before t_min
        assert_eq!(UNIT.hit(&ray, 0.6..1.5), Hit::NoHit);
    }

    #[test]
    fn closer_object_cuts_range() {
        let ray = Ray::new(Vec3::ZERO, -Vec3::Z);
        assert_eq!(UNIT.hit(&ray, 0.0..0.4), Hit::NoHit);
    }

    #[test]
    fn behind_origin() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        assert_eq!(UNIT.hit(&ray, FORWARD), Hit::NoHit);
    }

    #[test]
    fn tangent_is_a_miss() {
        let ray = Ray::new(Vec3::new(0.0, 0.5, 0.0), -Vec3::Z);
        assert_eq!(UNIT.hit(&ray, FORWARD), Hit::NoHit);
    }

    #[test]
    fn zero_direction_never_hits() {
        let inside = Ray::new(Vec3::new(0.0, 0.0, -1.0), Vec3::ZERO);
        assert_eq!(UNIT.hit(&inside, -10.0..10.0), Hit::NoHit);
    }

    #[test]
    fn zero_radius_never_hits() {
        let point = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.0);
        let ray = Ray::new(Vec3::ZERO, -Vec3::Z);
        assert_eq!(point.hit(&ray, FORWARD), Hit::NoHit);
    }

    #[test]
    fn negative_radius_flips_normal() {
        let inverted = Sphere::new(Vec3::new(0.0, 0.0, -1.0), -0.5);
        let ray = Ray::new(Vec3::ZERO, -Vec3::Z);
        let rec = record(inverted.hit(&ray, FORWARD));
        assert_eq!(rec.t, 0.5);
        assert_abs_diff_eq!(rec.normal, -Vec3::Z);
    }

    #[test]
    fn empty_range_never_hits() {
        let ray = Ray::new(Vec3::ZERO, -Vec3::Z);
        assert_eq!(UNIT.hit(&ray, 1.0..1.0), Hit::NoHit);
        assert_eq!(UNIT.hit(&ray, 2.0..0.0), Hit::NoHit);
        assert_eq!(UNIT.hit(&ray, f32::NAN..f32::INFINITY), Hit::NoHit);
    }
}
