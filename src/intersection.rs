use crate::vec3::Vec3;

/// One forward intersection a primitive reports: the distance along the
/// ray and the unit surface normal at the struck point.
#[derive(Copy, Clone, Debug)]
pub struct Intersection {
    pub t: f64,
    pub normal: Vec3<f64>,
}

impl Intersection {
    pub fn new(t: f64, normal: Vec3<f64>) -> Self {
        Self { t, normal }
    }
}
