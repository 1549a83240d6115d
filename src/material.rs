use image::Rgb;

use crate::error::SceneError;
use crate::props::{Props, PropsExt};
use crate::vec3::Vec3;

/// Reflectance coefficients of a scene object, one triple per term, each
/// channel in [0, 1]. Only the ambient term reaches the output today;
/// diffuse and reflection are captured for the shading stage.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Material {
    pub ambient: Vec3<f64>,
    pub diffuse: Vec3<f64>,
    pub reflection: Vec3<f64>,
}

impl Material {
    pub fn new(ambient: Vec3<f64>, diffuse: Vec3<f64>, reflection: Vec3<f64>) -> Self {
        Self {
            ambient,
            diffuse,
            reflection,
        }
    }

    pub fn from_props(props: &Props) -> Result<Self, SceneError> {
        Ok(Self {
            ambient: props.get_vec3("ambient")?,
            diffuse: props.get_vec3("diffuse")?,
            reflection: props.get_vec3("reflection")?,
        })
    }

    /// Ambient color as output bytes, each channel independently scaled
    /// to 0..=255 and clamped.
    pub fn ambient_rgb(&self) -> Rgb<u8> {
        Rgb([
            to_byte(self.ambient.x),
            to_byte(self.ambient.y),
            to_byte(self.ambient.z),
        ])
    }
}

fn to_byte(channel: f64) -> u8 {
    (channel * 255.0).clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(pairs: &[(&str, &str)]) -> Props {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn builds_from_properties() {
        let map = props(&[
            ("ambient", "1 0 0"),
            ("diffuse", "0.5 0.5 0.5"),
            ("reflection", "0 0 0"),
        ]);

        let material = Material::from_props(&map).unwrap();
        assert_eq!(material.ambient, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(material.ambient_rgb(), Rgb([255, 0, 0]));
    }

    #[test]
    fn missing_coefficient_is_fatal() {
        let map = props(&[("ambient", "1 0 0"), ("diffuse", "0 0 0")]);
        assert!(matches!(
            Material::from_props(&map),
            Err(SceneError::MissingProperty(_))
        ));
    }

    #[test]
    fn channels_clamp_to_byte_range() {
        let material = Material::new(
            Vec3::new(1.5, -0.25, 0.5),
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 0.0),
        );

        assert_eq!(material.ambient_rgb(), Rgb([255, 0, 127]));
    }
}
