use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

use thiserror::Error;

/// Shortest length `try_unit` accepts before declaring the vector
/// directionless.
const MIN_LEN: f64 = 1e-12;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T> Vec3<T> {
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
}

impl<T: Copy + Mul<Output = T>> Vec3<T> {
    #[inline]
    pub fn scale(&self, factor: T) -> Vec3<T> {
        Vec3 {
            x: self.x * factor,
            y: self.y * factor,
            z: self.z * factor,
        }
    }
}

impl<T: Copy + Add<Output = T> + Mul<Output = T>> Vec3<T> {
    #[inline]
    pub fn dot(&self, other: &Vec3<T>) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
}

impl Vec3<f64> {
    #[inline]
    pub fn len(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction. The caller must guarantee a
    /// non-zero length; data from outside the crate goes through
    /// `try_unit` instead.
    #[inline]
    pub fn unit(&self) -> Vec3<f64> {
        let len = self.len();
        debug_assert!(len > MIN_LEN);

        Vec3 {
            x: self.x / len,
            y: self.y / len,
            z: self.z / len,
        }
    }

    /// Guarded normalization: `None` when the vector is too short to
    /// carry a direction.
    pub fn try_unit(&self) -> Option<Vec3<f64>> {
        if self.len() <= MIN_LEN {
            None
        } else {
            Some(self.unit())
        }
    }
}

impl<T: Add<Output = T>> Add for Vec3<T> {
    type Output = Vec3<T>;

    #[inline]
    fn add(self, other: Vec3<T>) -> Self::Output {
        Vec3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl<T: Sub<Output = T>> Sub for Vec3<T> {
    type Output = Vec3<T>;

    #[inline]
    fn sub(self, other: Vec3<T>) -> Self::Output {
        Vec3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("expected three space-separated numbers, got `{0}`")]
pub struct ParseVec3Error(String);

/// Property maps encode vectors as `"x y z"`.
impl FromStr for Vec3<f64> {
    type Err = ParseVec3Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace().map(f64::from_str);

        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(Ok(x)), Some(Ok(y)), Some(Ok(z)), None) => Ok(Vec3::new(x, y, z)),
            _ => Err(ParseVec3Error(s.to_string())),
        }
    }
}
