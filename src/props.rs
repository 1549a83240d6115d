use std::collections::HashMap;

use crate::error::SceneError;
use crate::vec3::Vec3;

/// Flat property map of a scene entry. Every value arrives as a string,
/// the way the editor stores them; conversion happens at construction.
pub type Props = HashMap<String, String>;

/// Typed accessors over a property map. A missing key and an
/// unconvertible value are both fatal construction errors.
pub trait PropsExt {
    fn get_str(&self, key: &str) -> Result<&str, SceneError>;
    fn get_f64(&self, key: &str) -> Result<f64, SceneError>;
    fn get_u32(&self, key: &str) -> Result<u32, SceneError>;
    fn get_vec3(&self, key: &str) -> Result<Vec3<f64>, SceneError>;
}

impl PropsExt for Props {
    fn get_str(&self, key: &str) -> Result<&str, SceneError> {
        self.get(key)
            .map(String::as_str)
            .ok_or_else(|| SceneError::MissingProperty(key.to_string()))
    }

    fn get_f64(&self, key: &str) -> Result<f64, SceneError> {
        let value = self.get_str(key)?;
        value.trim().parse().map_err(|_| SceneError::MalformedProperty {
            key: key.to_string(),
            value: value.to_string(),
        })
    }

    fn get_u32(&self, key: &str) -> Result<u32, SceneError> {
        let value = self.get_str(key)?;
        value.trim().parse().map_err(|_| SceneError::MalformedProperty {
            key: key.to_string(),
            value: value.to_string(),
        })
    }

    fn get_vec3(&self, key: &str) -> Result<Vec3<f64>, SceneError> {
        let value = self.get_str(key)?;
        value.parse().map_err(|_| SceneError::MalformedProperty {
            key: key.to_string(),
            value: value.to_string(),
        })
    }
}
