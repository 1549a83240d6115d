use crate::error::SceneError;
use crate::geometry::{closest_root, Geometry, DISC_EPSILON};
use crate::intersection::Intersection;
use crate::props::{Props, PropsExt};
use crate::ray::Ray;
use crate::vec3::Vec3;

/// Every cone opens downward from its apex.
const AXIS: Vec3<f64> = Vec3::new(0.0, -1.0, 0.0);

/// Single-nappe cone standing on the x-z plane: `location` is the center
/// of the base circle, the apex sits `height` above it, and the surface
/// widens from the apex down to the base. Half-angle is
/// `atan(radius / height)`.
#[derive(Copy, Clone, Debug)]
pub struct Cone {
    location: Vec3<f64>,
    height: f64,
    angle: f64,
}

impl Cone {
    pub fn new(location: Vec3<f64>, radius: f64, height: f64) -> Self {
        Self {
            location,
            height,
            angle: (radius / height).atan(),
        }
    }

    pub fn from_props(props: &Props) -> Result<Self, SceneError> {
        let radius = props.get_f64("radius")?;
        let height = props.get_f64("height")?;

        if radius <= 0.0 {
            return Err(SceneError::MalformedProperty {
                key: "radius".to_string(),
                value: radius.to_string(),
            });
        }
        if height <= 0.0 {
            return Err(SceneError::MalformedProperty {
                key: "height".to_string(),
                value: height.to_string(),
            });
        }

        Ok(Self::new(props.get_vec3("location")?, radius, height))
    }

    fn apex(&self) -> Vec3<f64> {
        self.location + Vec3::new(0.0, self.height, 0.0)
    }

    /// A candidate only counts when its point lies below the apex, on
    /// the nappe that opens toward the base.
    fn on_nappe(&self, point: Vec3<f64>) -> bool {
        (point - self.apex()).dot(&AXIS) > 0.0
    }

    /// Unit outward normal from the implicit-surface gradient.
    fn normal_at(&self, point: Vec3<f64>, cos2: f64) -> Vec3<f64> {
        let g = point - self.apex();
        (g.scale(cos2) - AXIS.scale(g.dot(&AXIS))).unit()
    }
}

impl Geometry for Cone {
    fn intersections(&self, ray: &Ray<f64>) -> Vec<Intersection> {
        let apex = self.apex();
        let cos2 = self.angle.cos().powi(2);
        let co = ray.origin() - apex;

        let d_axis = ray.direction().dot(&AXIS);
        let co_axis = co.dot(&AXIS);

        let a = d_axis * d_axis - cos2;
        let b = 2.0 * (d_axis * co_axis - ray.direction().dot(&co) * cos2);
        let c = co_axis * co_axis - co.dot(&co) * cos2;

        // A ray parallel to a generator line degenerates the quadratic.
        if a.abs() < DISC_EPSILON {
            return Vec::new();
        }

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < -DISC_EPSILON {
            return Vec::new();
        }

        let t = if discriminant.abs() <= DISC_EPSILON {
            -b / (2.0 * a)
        } else {
            let sqrt = discriminant.sqrt();
            let d1 = (-b + sqrt) / (2.0 * a);
            let d2 = (-b - sqrt) / (2.0 * a);
            if d1 <= 0.0 && d2 <= 0.0 {
                return Vec::new();
            }
            closest_root(d1, d2)
        };

        if t <= 0.0 {
            return Vec::new();
        }

        let point = ray.offset(t);
        if !self.on_nappe(point) {
            return Vec::new();
        }

        vec![Intersection::new(t, self.normal_at(point, cos2))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Base circle of radius 1 at the origin, apex at (0, 1, 0), 45°
    // half-angle.
    fn unit_cone() -> Cone {
        Cone::new(Vec3::new(0.0, 0.0, 0.0), 1.0, 1.0)
    }

    #[test]
    fn side_ray_hits_the_surface() {
        let cone = unit_cone();
        let ray = Ray::new(Vec3::new(-5.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));

        let hits = cone.intersections(&ray);
        assert_eq!(hits.len(), 1);
        assert!((hits[0].t - 4.0).abs() < 1e-9);

        // Outward at (-1, 0, 0) is (-1, 1, 0) normalized.
        let inv_sqrt2 = 1.0 / 2.0f64.sqrt();
        assert!((hits[0].normal.x + inv_sqrt2).abs() < 1e-9);
        assert!((hits[0].normal.y - inv_sqrt2).abs() < 1e-9);
        assert!(hits[0].normal.z.abs() < 1e-9);
    }

    #[test]
    fn upper_nappe_candidates_are_discarded() {
        let cone = unit_cone();
        // Crosses the mirror nappe two units above the apex.
        let ray = Ray::new(Vec3::new(-5.0, 3.0, 0.0), Vec3::new(1.0, 0.0, 0.0));

        assert!(cone.intersections(&ray).is_empty());
    }

    #[test]
    fn ray_beside_the_cone_misses() {
        let cone = unit_cone();
        let ray = Ray::new(Vec3::new(-5.0, 0.0, 5.0), Vec3::new(1.0, 0.0, 0.0));

        assert!(cone.intersections(&ray).is_empty());
    }

    #[test]
    fn cone_behind_the_ray_misses() {
        let cone = unit_cone();
        let ray = Ray::new(Vec3::new(-5.0, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0));

        assert!(cone.intersections(&ray).is_empty());
    }

    #[test]
    fn nonpositive_height_is_rejected() {
        let props: Props = [
            ("location", "0 0 0"),
            ("radius", "1"),
            ("height", "-2"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        assert!(matches!(
            Cone::from_props(&props),
            Err(SceneError::MalformedProperty { .. })
        ));
    }
}
