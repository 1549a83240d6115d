use crate::error::SceneError;
use crate::geometry::{Geometry, EPSILON};
use crate::intersection::Intersection;
use crate::props::{Props, PropsExt};
use crate::ray::Ray;
use crate::vec3::Vec3;

/// Infinite plane: a unit normal and the signed distance of the plane
/// from the world origin along that normal.
#[derive(Copy, Clone, Debug)]
pub struct Plane {
    normal: Vec3<f64>,
    dist: f64,
}

impl Plane {
    /// `normal` must be unit length.
    pub fn new(normal: Vec3<f64>, dist: f64) -> Self {
        Self { normal, dist }
    }

    pub fn from_props(props: &Props) -> Result<Self, SceneError> {
        let normal = props.get_vec3("normal")?.try_unit().ok_or_else(|| {
            SceneError::DegenerateVector {
                key: "normal".to_string(),
            }
        })?;

        Ok(Self::new(normal, props.get_f64("distance")?))
    }
}

impl Geometry for Plane {
    fn intersections(&self, ray: &Ray<f64>) -> Vec<Intersection> {
        let ln = self.normal.dot(ray.direction());

        // Parallel rays never strike the plane.
        if ln.abs() < EPSILON {
            return Vec::new();
        }

        let t = (self.normal.scale(self.dist) - ray.origin()).dot(&self.normal) / ln;
        if t <= 0.0 {
            return Vec::new();
        }

        // The stored normal, as-is; orientation is not flipped toward
        // the ray.
        vec![Intersection::new(t, self.normal)]
    }
}
