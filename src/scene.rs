use crate::{aggregate::ShapeList, math::vec::Vec3, shape::Sphere};

/// Built-in scenes, all seen by [`Camera::tutorial`](crate::camera::Camera::tutorial).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SceneKind {
    /// Nothing but background
    Sky,
    /// One sphere in the middle of the frame
    #[default]
    Sphere,
    /// The middle sphere resting on a huge one acting as the ground
    Ground,
}

pub const CENTER_SPHERE: Sphere = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5);
pub const GROUND_SPHERE: Sphere = Sphere::new(Vec3::new(0.0, -100.5, -1.0), 100.0);

impl From<SceneKind> for ShapeList {
    fn from(kind: SceneKind) -> Self {
        match kind {
            SceneKind::Sky => ShapeList::new(),
            SceneKind::Sphere => ShapeList::new().with(CENTER_SPHERE),
            SceneKind::Ground => ShapeList::new().with(CENTER_SPHERE).with(GROUND_SPHERE),
        }
    }
}
