use crate::vec3::Vec3;

/// A ray cast into the scene: origin plus unit direction. The constructor
/// normalizes, so every constructed ray satisfies the unit-length
/// invariant the intersection solvers rely on.
#[derive(Debug)]
pub struct Ray<T> {
    origin: Vec3<T>,
    direction: Vec3<T>,
}

impl Ray<f64> {
    pub fn new(origin: Vec3<f64>, direction: Vec3<f64>) -> Self {
        Self {
            origin,
            direction: direction.unit(),
        }
    }

    #[inline]
    pub fn origin(&self) -> Vec3<f64> {
        self.origin
    }

    #[inline]
    pub fn direction(&self) -> &Vec3<f64> {
        &self.direction
    }

    /// Point at parameter `t`: origin + direction · t.
    #[inline]
    pub fn offset(&self, t: f64) -> Vec3<f64> {
        self.origin + self.direction.scale(t)
    }
}
