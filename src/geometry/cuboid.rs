use crate::error::SceneError;
use crate::geometry::Geometry;
use crate::intersection::Intersection;
use crate::props::Props;
use crate::ray::Ray;

/// The scene format's `box` kind. Declared but carries no geometry yet;
/// rays pass through it.
#[derive(Copy, Clone, Debug, Default)]
pub struct Cuboid;

impl Cuboid {
    pub fn from_props(_props: &Props) -> Result<Self, SceneError> {
        Ok(Self)
    }
}

impl Geometry for Cuboid {
    fn intersections(&self, _ray: &Ray<f64>) -> Vec<Intersection> {
        // Intersection math not written yet.
        Vec::new()
    }
}
