#![allow(clippy::op_ref)]

use std::{
    fmt::Display,
    ops::{
        Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
    },
};

use crate::error::VecError;

use super::float::FloatAsExt;

/// Three single precision components: `x, y, z`, read as `r, g, b` when the vector holds a color.
///
/// Operators between two vectors are entrywise, so `a * b` is the Hadamard product.
/// Every operator has a pure form (`a + b`) and an in-place form (`a += b`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3(pub [f32; 3]);

pub type Point = Vec3;
pub type Normal = Vec3;

impl Vec3 {
    pub const X: Self = Self([1.0, 0.0, 0.0]);
    pub const Y: Self = Self([0.0, 1.0, 0.0]);
    pub const Z: Self = Self([0.0, 0.0, 1.0]);
    pub const ZERO: Self = Self([0.0, 0.0, 0.0]);
    pub const ONES: Self = Self([1.0, 1.0, 1.0]);

    /// Number of components, and the length every buffer form expects.
    pub const LEN: usize = 3;

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self([x, y, z])
    }

    pub fn x(&self) -> f32 {
        self.0[0]
    }
    pub fn y(&self) -> f32 {
        self.0[1]
    }
    pub fn z(&self) -> f32 {
        self.0[2]
    }
    pub fn r(&self) -> f32 {
        self.0[0]
    }
    pub fn g(&self) -> f32 {
        self.0[1]
    }
    pub fn b(&self) -> f32 {
        self.0[2]
    }

    pub fn set(&mut self, x: f32, y: f32, z: f32) {
        self.0 = [x, y, z];
    }

    pub fn dot(&self, rhs: &Self) -> f32 {
        self.0[0] * rhs.0[0] + self.0[1] * rhs.0[1] + self.0[2] * rhs.0[2]
    }

    /// Right-handed cross product.
    pub fn cross(&self, rhs: &Self) -> Vec3 {
        Vec3([
            self.0[1] * rhs.0[2] - self.0[2] * rhs.0[1],
            self.0[2] * rhs.0[0] - self.0[0] * rhs.0[2],
            self.0[0] * rhs.0[1] - self.0[1] * rhs.0[0],
        ])
    }

    pub fn length_squared(&self) -> f32 {
        Self::dot(self, self)
    }
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Unit vector pointing along `self`.
    ///
    /// The zero vector has no direction: every component of the result is NaN (`0 / 0`).
    /// Nothing is clamped; use [`Vec3::try_normalize`] when the input may be degenerate.
    pub fn normalize(&self) -> Vec3 {
        self / self.length()
    }

    /// Unit vector pointing along `self`, or `None` if the length is zero or not finite.
    pub fn try_normalize(&self) -> Option<Vec3> {
        let length = self.length().into_finite()?.into_non_zero(0.0)?;
        Some(self / length)
    }

    /// In-place [`Vec3::normalize`], with the same NaN behaviour on the zero vector.
    pub fn normalize_mut(&mut self) {
        *self /= self.length();
    }

    pub fn negate_mut(&mut self) {
        *self = -*self;
    }

    /// Copies the components into `out`, which must hold exactly [`Vec3::LEN`] values.
    pub fn write_to(&self, out: &mut [f32]) -> Result<(), VecError> {
        if out.len() != Self::LEN {
            return Err(VecError::Length {
                expected: Self::LEN,
                found: out.len(),
            });
        }
        out.copy_from_slice(&self.0);
        Ok(())
    }
}

impl Index<usize> for Vec3 {
    type Output = f32;

    fn index(&self, index: usize) -> &Self::Output {
        self.0.index(index)
    }
}

impl IndexMut<usize> for Vec3 {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.0.index_mut(index)
    }
}

macro_rules! impl_entrywise_op {
    ($op_trait:ident, $op_fn:ident, $assign_trait:ident, $assign_fn:ident, $op:tt) => {
        impl $op_trait for &Vec3 {
            type Output = Vec3;

            fn $op_fn(self, rhs: Self) -> Self::Output {
                Vec3([
                    self.0[0] $op rhs.0[0],
                    self.0[1] $op rhs.0[1],
                    self.0[2] $op rhs.0[2],
                ])
            }
        }
        impl $op_trait for Vec3 {
            type Output = Vec3;

            fn $op_fn(self, rhs: Self) -> Self::Output {
                &self $op &rhs
            }
        }
        impl $op_trait<f32> for &Vec3 {
            type Output = Vec3;

            fn $op_fn(self, rhs: f32) -> Self::Output {
                Vec3(self.0.map(|c| c $op rhs))
            }
        }
        impl $op_trait<f32> for Vec3 {
            type Output = Vec3;

            fn $op_fn(self, rhs: f32) -> Self::Output {
                &self $op rhs
            }
        }
        impl $assign_trait for Vec3 {
            fn $assign_fn(&mut self, rhs: Self) {
                for (c, r) in self.0.iter_mut().zip(rhs.0) {
                    *c = *c $op r;
                }
            }
        }
        impl $assign_trait<f32> for Vec3 {
            fn $assign_fn(&mut self, rhs: f32) {
                for c in self.0.iter_mut() {
                    *c = *c $op rhs;
                }
            }
        }
    };
}

impl_entrywise_op!(Add, add, AddAssign, add_assign, +);
impl_entrywise_op!(Sub, sub, SubAssign, sub_assign, -);
impl_entrywise_op!(Mul, mul, MulAssign, mul_assign, *);
impl_entrywise_op!(Div, div, DivAssign, div_assign, /);

impl Mul<&Vec3> for f32 {
    type Output = Vec3;

    fn mul(self, rhs: &Vec3) -> Self::Output {
        rhs * self
    }
}
impl Mul<Vec3> for f32 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Self::Output {
        &rhs * self
    }
}

impl Neg for &Vec3 {
    type Output = Vec3;

    fn neg(self) -> Self::Output {
        Vec3(self.0.map(|c| -c))
    }
}
impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Self::Output {
        -&self
    }
}

impl From<f32> for Vec3 {
    fn from(x: f32) -> Self {
        Vec3([x, x, x])
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(values: [f32; 3]) -> Self {
        Vec3(values)
    }
}

impl TryFrom<&[f32]> for Vec3 {
    type Error = VecError;

    fn try_from(values: &[f32]) -> Result<Self, Self::Error> {
        <[f32; 3]>::try_from(values)
            .map(Vec3)
            .map_err(|_| VecError::Length {
                expected: Self::LEN,
                found: values.len(),
            })
    }
}

impl Display for Vec3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} {:.2} {:.2}", self.0[0], self.0[1], self.0[2])
    }
}

#[cfg(test)]
impl approx::AbsDiffEq for Vec3 {
    type Epsilon = f32;

    fn default_epsilon() -> Self::Epsilon {
        f32::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| f32::abs_diff_eq(a, b, epsilon))
    }
}

#[cfg(test)]
impl approx::RelativeEq for Vec3 {
    fn default_max_relative() -> Self::Epsilon {
        f32::EPSILON
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| f32::relative_eq(a, b, epsilon, max_relative))
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::Vec3;
    use crate::error::VecError;

    #[test]
    fn normalize_gives_unit_length() {
        for v in [
            Vec3::new(3.0, 4.0, 0.0),
            Vec3::new(-1.0, 2.0, -3.5),
            Vec3::new(1e-3, 0.0, 2e-3),
            Vec3::new(150.0, -20.0, 7.0),
        ] {
            assert_relative_eq!(v.normalize().length(), 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn normalize_zero_is_nan() {
        let n = Vec3::ZERO.normalize();
        assert!(n.0.iter().all(|c| c.is_nan()));
        assert_eq!(Vec3::ZERO.try_normalize(), None);
        assert_eq!(Vec3::new(0.0, 2.0, 0.0).try_normalize(), Some(Vec3::Y));
    }

    #[test]
    fn normalize_in_place() {
        let mut v = Vec3::new(0.0, 0.0, -5.0);
        v.normalize_mut();
        assert_abs_diff_eq!(v, -Vec3::Z);
    }

    #[test]
    fn cross_anti_commutative() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-4.0, 0.5, 2.0);
        assert_abs_diff_eq!(a.cross(&b), -b.cross(&a));
        assert_eq!(Vec3::X.cross(&Vec3::Y), Vec3::Z);
    }

    #[test]
    fn dot_orthogonal_is_zero() {
        assert_eq!(Vec3::X.dot(&Vec3::Y), 0.0);
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-4.0, 0.5, 2.0);
        assert_eq!(a.dot(&b), b.dot(&a));
        assert_eq!(a.dot(&b), 3.0);
    }

    #[test]
    fn length() {
        let v = Vec3::new(2.0, 3.0, 6.0);
        assert_eq!(v.length_squared(), 49.0);
        assert_eq!(v.length(), 7.0);
    }

    #[test]
    fn arithmetic() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(2.0, 4.0, 8.0);
        assert_eq!(a + b, Vec3::new(3.0, 6.0, 11.0));
        assert_eq!(b - a, Vec3::new(1.0, 2.0, 5.0));
        assert_eq!(a * b, Vec3::new(2.0, 8.0, 24.0));
        assert_eq!(b / a, Vec3::new(2.0, 2.0, 8.0 / 3.0));
        assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(a + 1.0, Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(a - 1.0, Vec3::new(0.0, 1.0, 2.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(b / 2.0, Vec3::new(1.0, 2.0, 4.0));
        assert_eq!(&a + &b, a + b);
    }

    #[test]
    fn in_place_matches_pure() {
        let a = Vec3::new(1.0, -2.0, 3.0);
        let b = Vec3::new(0.5, 4.0, -8.0);

        let mut v = a;
        v += b;
        assert_eq!(v, a + b);
        v -= b;
        assert_eq!(v, a);
        v *= b;
        assert_eq!(v, a * b);
        v /= b;
        assert_eq!(v, a);
        v *= 3.0;
        assert_eq!(v, 3.0 * a);
        v.negate_mut();
        assert_eq!(v, -3.0 * a);
    }

    #[test]
    fn in_place_with_itself() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        v += v;
        assert_eq!(v, Vec3::new(2.0, 4.0, 6.0));
        v *= v;
        assert_eq!(v, Vec3::new(4.0, 16.0, 36.0));
        v -= v;
        assert_eq!(v, Vec3::ZERO);
    }

    #[test]
    fn buffers_need_three_components() {
        let v = Vec3::try_from(&[1.0, 2.0, 3.0][..]).unwrap();
        assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(
            Vec3::try_from(&[1.0, 2.0][..]),
            Err(VecError::Length {
                expected: 3,
                found: 2
            })
        );

        let mut out = [0.0; 3];
        v.write_to(&mut out).unwrap();
        assert_eq!(out, [1.0, 2.0, 3.0]);

        let mut too_long = [0.0; 4];
        assert_eq!(
            v.write_to(&mut too_long),
            Err(VecError::Length {
                expected: 3,
                found: 4
            })
        );
        assert_eq!(too_long, [0.0; 4]);
    }

    #[test]
    fn accessors_and_display() {
        let mut v = Vec3::new(0.25, 0.5, 1.0);
        assert_eq!((v.x(), v.y(), v.z()), (v.r(), v.g(), v.b()));
        v[1] = 2.0;
        assert_eq!(v[1], 2.0);
        v.set(1.0, 2.0, 3.0);
        assert_eq!(v.to_string(), "1.00 2.00 3.00");
    }
}
