//! Contains the objects that are meant to be rendered.
//!
//! Spheres are the only shape.

pub mod sphere;

pub use sphere::Sphere;
