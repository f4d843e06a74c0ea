use crate::{
    color::{self, Color},
    hit::{Hit, Hittable},
    math::{utils::lerp, vec::Vec3},
    ray::Ray,
};

use super::Integrator;

/// What a hit looks like.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ShadingMode {
    /// Every hit gets [`ColorResolver::hit_color`]
    #[default]
    Flat,
    /// The hit normal mapped from `[-1, 1]` to `[0, 1]`
    Normal,
}

/// No lighting: a flat color where something is hit, a vertical gradient elsewhere.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorResolver {
    /// Hits closer than this are ignored, so a ray leaving a surface does not hit it again
    pub t_min: f32,
    pub t_max: f32,
    pub shading: ShadingMode,
    pub hit_color: Color,
    /// Background looking straight down
    pub horizon: Color,
    /// Background looking straight up
    pub zenith: Color,
}

impl Default for ColorResolver {
    fn default() -> Self {
        Self {
            t_min: 0.001,
            t_max: f32::INFINITY,
            shading: ShadingMode::Flat,
            hit_color: color::RED,
            horizon: color::WHITE,
            zenith: color::SKY_BLUE,
        }
    }
}

impl ColorResolver {
    /// Background seen along `direction`; only the direction's vertical slope matters.
    ///
    /// A direction that cannot be normalized (zero or non-finite) gets the horizon color.
    pub fn background(&self, direction: &Vec3) -> Color {
        let Some(unit_direction) = direction.try_normalize() else {
            crate::warn_once!("degenerate ray direction {direction}, using the horizon color");
            return self.horizon;
        };
        let t = 0.5 * (unit_direction.y() + 1.0);
        lerp(t, self.horizon, self.zenith)
    }
}

impl Integrator for ColorResolver {
    fn ray_color(&self, ray: &Ray, world: &dyn Hittable) -> Color {
        match world.hit(ray, self.t_min..self.t_max) {
            Hit::Hit(record) => match self.shading {
                ShadingMode::Flat => self.hit_color,
                ShadingMode::Normal => 0.5 * (record.normal + 1.0),
            },
            Hit::NoHit => self.background(ray.direction()),
        }
    }
}
