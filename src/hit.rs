use crate::geometry::SceneObject;
use crate::vec3::Vec3;

/// One recorded impact of a ray: distance from the ray origin, surface
/// normal at the struck point, and a borrow of the object that produced
/// it. Lives only for one pixel's evaluation.
#[derive(Clone, Copy)]
pub struct Hit<'a> {
    pub t: f64,
    pub normal: Vec3<f64>,
    pub object: &'a SceneObject,
}

impl<'a> Hit<'a> {
    pub fn new(t: f64, normal: Vec3<f64>, object: &'a SceneObject) -> Self {
        Self { t, normal, object }
    }
}

/// Impacts accumulated for one ray across every object in the scene.
#[derive(Default)]
pub struct HitList<'a> {
    hits: Vec<Hit<'a>>,
}

impl<'a> HitList<'a> {
    pub fn new() -> Self {
        Self { hits: Vec::new() }
    }

    /// Concatenate a batch of hits; order is irrelevant.
    pub fn append<I>(&mut self, hits: I)
    where
        I: IntoIterator<Item = Hit<'a>>,
    {
        self.hits.extend(hits);
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// The impact with the smallest distance, or `None` when nothing was
    /// struck. Equal distances resolve to whichever object came first.
    pub fn nearest(&self) -> Option<&Hit<'a>> {
        let mut dist = f64::INFINITY;
        let mut nearest = None;

        for hit in &self.hits {
            if hit.t < dist {
                dist = hit.t;
                nearest = Some(hit);
            }
        }

        nearest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Model, Sphere};
    use crate::material::Material;

    fn object() -> SceneObject {
        Model {
            geometry: Box::new(Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0)),
            material: Material::new(
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(0.0, 0.0, 0.0),
            ),
        }
    }

    #[test]
    fn nearest_of_empty_list_is_none() {
        assert!(HitList::new().nearest().is_none());
    }

    #[test]
    fn nearest_picks_minimum_distance() {
        let up = Vec3::new(0.0, 1.0, 0.0);
        let object = object();

        let mut hits = HitList::new();
        hits.append([Hit::new(4.0, up, &object), Hit::new(2.0, up, &object)]);
        hits.append([Hit::new(3.0, up, &object)]);

        assert_eq!(hits.len(), 3);
        assert_eq!(hits.nearest().unwrap().t, 2.0);
    }

    #[test]
    fn append_accepts_empty_batches() {
        let mut hits = HitList::new();
        hits.append([]);
        assert!(hits.is_empty());
    }
}
