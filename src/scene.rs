use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::camera::Camera;
use crate::error::SceneError;
use crate::geometry::{Cone, Cuboid, Cylinder, Geometry, Model, Plane, SceneObject, Sphere, Triangle};
use crate::material::Material;
use crate::picture::Picture;
use crate::props::{Props, PropsExt};
use crate::vec3::Vec3;

/// Property key naming an entry's primitive kind.
const ELEMENT_KEY: &str = "element";

/// One category-tagged group of scene entries as the editor hands them
/// over: `"objects"` or `"lights"`, each entry a flat property map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub category: String,
    pub entries: Vec<Props>,
}

/// A light's captured properties. Collected during assembly; the tracer
/// does not consume lights yet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub location: Vec3<f64>,
    pub intensity: f64,
}

impl Light {
    pub fn from_props(props: &Props) -> Result<Self, SceneError> {
        Ok(Self {
            location: props.get_vec3("location")?,
            intensity: props.get_f64("intensity")?,
        })
    }
}

/// Accumulates objects and lights from scene groups, then freezes into a
/// `Scene`.
#[derive(Default)]
pub struct SceneBuilder {
    objects: Vec<SceneObject>,
    lights: Vec<Light>,
}

impl SceneBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one group. An unrecognized object kind is reported and
    /// skipped; a malformed or missing property aborts assembly.
    pub fn push_group(&mut self, group: &Group) -> Result<(), SceneError> {
        match group.category.as_str() {
            "objects" => {
                for props in &group.entries {
                    self.push_object(props)?;
                }
            }
            "lights" => {
                for props in &group.entries {
                    self.lights.push(Light::from_props(props)?);
                }
            }
            other => debug!("ignoring scene group `{}`", other),
        }

        Ok(())
    }

    fn push_object(&mut self, props: &Props) -> Result<(), SceneError> {
        let kind = props.get_str(ELEMENT_KEY)?;

        let geometry: Box<dyn Geometry + Sync> = match kind {
            "plane" => Box::new(Plane::from_props(props)?),
            "sphere" => Box::new(Sphere::from_props(props)?),
            "cone" => Box::new(Cone::from_props(props)?),
            "triangle" => Box::new(Triangle::from_props(props)?),
            "cylinder" => Box::new(Cylinder::from_props(props)?),
            "box" => Box::new(Cuboid::from_props(props)?),
            other => {
                warn!("unrecognized element kind `{}`; skipping entry", other);
                return Ok(());
            }
        };

        self.objects.push(Model {
            geometry,
            material: Material::from_props(props)?,
        });

        Ok(())
    }

    pub fn build(self) -> Scene {
        Scene {
            objects: self.objects,
            lights: self.lights,
        }
    }
}

/// Immutable primitive and light collections. Assembly completes before
/// any trace begins; a built scene is only ever read.
pub struct Scene {
    objects: Vec<SceneObject>,
    lights: Vec<Light>,
}

impl Scene {
    /// Assemble a scene from its ordered groups.
    pub fn assemble(groups: &[Group]) -> Result<Self, SceneError> {
        let mut builder = SceneBuilder::new();
        for group in groups {
            builder.push_group(group)?;
        }

        Ok(builder.build())
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Drive one render pass over the camera's sub-region.
    pub fn render(&self, camera: &Camera) -> Picture {
        camera.render(&self.objects)
    }
}
