use crate::error::SceneError;
use crate::geometry::{closest_root, Geometry, DISC_EPSILON};
use crate::intersection::Intersection;
use crate::props::{Props, PropsExt};
use crate::ray::Ray;
use crate::vec3::Vec3;

#[derive(Copy, Clone, Debug)]
pub struct Sphere {
    center: Vec3<f64>,
    radius: f64,
}

impl Sphere {
    pub fn new(center: Vec3<f64>, radius: f64) -> Self {
        Self { center, radius }
    }

    pub fn from_props(props: &Props) -> Result<Self, SceneError> {
        let radius = props.get_f64("radius")?;
        if radius <= 0.0 {
            return Err(SceneError::MalformedProperty {
                key: "radius".to_string(),
                value: radius.to_string(),
            });
        }

        Ok(Self::new(props.get_vec3("location")?, radius))
    }

    fn normal_at(&self, point: Vec3<f64>) -> Vec3<f64> {
        (point - self.center).unit()
    }
}

impl Geometry for Sphere {
    fn intersections(&self, ray: &Ray<f64>) -> Vec<Intersection> {
        let oc = ray.origin() - self.center;

        let a = ray.direction().dot(ray.direction()); // 1 for unit directions
        let b = 2.0 * ray.direction().dot(&oc);
        let c = oc.dot(&oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < -DISC_EPSILON {
            return Vec::new();
        }

        if discriminant.abs() <= DISC_EPSILON {
            // Grazing ray, a single point of contact.
            let t = -b / (2.0 * a);
            if t <= 0.0 {
                return Vec::new();
            }
            return vec![Intersection::new(t, self.normal_at(ray.offset(t)))];
        }

        let sqrt = discriminant.sqrt();
        let d1 = (-b + sqrt) / (2.0 * a);
        let d2 = (-b - sqrt) / (2.0 * a);
        if d1 <= 0.0 && d2 <= 0.0 {
            return Vec::new();
        }

        let t = closest_root(d1, d2);
        vec![Intersection::new(t, self.normal_at(ray.offset(t)))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ray_through_center_picks_near_root() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0));

        let hits = sphere.intersections(&ray);
        assert_eq!(hits.len(), 1);
        assert!((hits[0].t - 4.0).abs() < 1e-12);
        assert_eq!(hits[0].normal, Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn origin_inside_picks_the_forward_root() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 0.0), 1.0);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0));

        let hits = sphere.intersections(&ray);
        assert_eq!(hits.len(), 1);
        assert!((hits[0].t - 1.0).abs() < 1e-12);
    }

    #[test]
    fn sphere_behind_the_ray_misses() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0));

        assert!(sphere.intersections(&ray).is_empty());
    }

    #[test]
    fn ray_aside_misses() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));

        assert!(sphere.intersections(&ray).is_empty());
    }

    #[test]
    fn grazing_ray_reports_one_contact() {
        let sphere = Sphere::new(Vec3::new(1.0, 0.0, 5.0), 1.0);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0));

        let hits = sphere.intersections(&ray);
        assert_eq!(hits.len(), 1);
        assert!((hits[0].t - 5.0).abs() < 1e-9);
    }

    #[test]
    fn normal_points_outward() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 5.0), 2.0);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0));

        let hits = sphere.intersections(&ray);
        let normal = hits[0].normal;
        assert!((normal.len() - 1.0).abs() < 1e-12);
        assert_eq!(normal, Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn nonpositive_radius_is_rejected() {
        let props: Props = [
            ("location", "0 0 5"),
            ("radius", "0"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        assert!(matches!(
            Sphere::from_props(&props),
            Err(SceneError::MalformedProperty { .. })
        ));
    }
}
