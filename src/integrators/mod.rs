use crate::{color::Color, hit::Hittable, ray::Ray};

mod flat;

pub use flat::{ColorResolver, ShadingMode};

/// Turns a primary ray into the color of its pixel.
pub trait Integrator: Send + Sync {
    fn ray_color(&self, ray: &Ray, world: &dyn Hittable) -> Color;
}

/// Color of `ray` against `world` with the default [`ColorResolver`]: red on a hit in
/// `(0.001, inf)`, white-to-sky-blue gradient otherwise.
pub fn resolve_color(ray: &Ray, world: &dyn Hittable) -> Color {
    ColorResolver::default().ray_color(ray, world)
}
