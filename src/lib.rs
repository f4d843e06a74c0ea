//! A sphere ray caster: rays from a pinhole camera against a list of spheres, colored red on a
//! hit and with a sky gradient otherwise.

pub mod aggregate;
pub mod camera;
pub mod color;
pub mod error;
pub mod hit;
pub mod integrators;
pub mod math;
pub mod output;
pub mod progress;
pub mod ray;
pub mod renderer;
pub mod scene;
pub mod shape;
pub mod utils;
