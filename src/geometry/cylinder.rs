use crate::error::SceneError;
use crate::geometry::Geometry;
use crate::intersection::Intersection;
use crate::props::Props;
use crate::ray::Ray;

/// Declared in scene files but carries no geometry yet; rays pass
/// through it.
#[derive(Copy, Clone, Debug, Default)]
pub struct Cylinder;

impl Cylinder {
    pub fn from_props(_props: &Props) -> Result<Self, SceneError> {
        Ok(Self)
    }
}

impl Geometry for Cylinder {
    fn intersections(&self, _ray: &Ray<f64>) -> Vec<Intersection> {
        // Intersection math not written yet.
        Vec::new()
    }
}
