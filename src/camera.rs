use std::time::Instant;

use image::Rgb;
use log::{debug, info};
use rayon::prelude::*;

use crate::error::SceneError;
use crate::geometry::SceneObject;
use crate::hit::{Hit, HitList};
use crate::picture::Picture;
use crate::props::{Props, PropsExt};
use crate::ray::Ray;
use crate::vec3::Vec3;

/// Pinhole camera fixed at the world origin looking down +z, plus the
/// rectangular pixel sub-region one pass renders. Immutable for the
/// duration of a pass; the object collection is borrowed per call, never
/// stored.
#[derive(Debug, Clone)]
pub struct Camera {
    width: u32,
    height: u32,
    begrow: u32,
    endrow: u32,
    begcol: u32,
    endcol: u32,
    fov_y: f64,
    location: Vec3<f64>,
    look_at: Vec3<f64>,
}

impl Camera {
    /// Build a camera from its property map. Every key is required;
    /// the sub-region must fit inside the image.
    pub fn from_props(props: &Props) -> Result<Self, SceneError> {
        let camera = Self {
            width: props.get_u32("width")?,
            height: props.get_u32("height")?,
            begrow: props.get_u32("begrow")?,
            endrow: props.get_u32("endrow")?,
            begcol: props.get_u32("begcol")?,
            endcol: props.get_u32("endcol")?,
            fov_y: props.get_f64("fov_y")?,
            location: props.get_vec3("location")?,
            look_at: props.get_vec3("look_at")?,
        };

        if camera.begrow > camera.endrow
            || camera.begcol > camera.endcol
            || camera.endrow >= camera.height
            || camera.endcol >= camera.width
        {
            return Err(SceneError::RegionOutOfBounds {
                begrow: camera.begrow,
                endrow: camera.endrow,
                begcol: camera.begcol,
                endcol: camera.endcol,
                width: camera.width,
                height: camera.height,
            });
        }

        Ok(camera)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Vertical field of view as configured. The projection currently
    /// uses the fixed `2 / height` pixel scale instead.
    /// TODO: fold fov_y into the pixel scale.
    pub fn fov_y(&self) -> f64 {
        self.fov_y
    }

    pub fn location(&self) -> Vec3<f64> {
        self.location
    }

    pub fn look_at(&self) -> Vec3<f64> {
        self.look_at
    }

    /// The ray through pixel (x, y), cast from the origin through the
    /// image plane at z = 1.
    fn pixel_ray(&self, x: u32, y: u32) -> Ray<f64> {
        let cx = self.width as f64 / 2.0 - 0.5;
        let cy = self.height as f64 / 2.0 - 0.5;
        let scale = 2.0 / self.height as f64;

        Ray::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new((x as f64 - cx) * scale, (y as f64 - cy) * scale, 1.0),
        )
    }

    /// Render the assigned sub-region against `objects` into a fresh
    /// pixel buffer. Scanlines are traced in parallel; each owns a
    /// disjoint slice of the buffer, so two passes over the same scene
    /// produce identical bytes.
    pub fn render(&self, objects: &[SceneObject]) -> Picture {
        let mut picture = Picture::new(self.width, self.height);
        let rowstride = picture.rowstride();
        let height = self.height;

        info!(
            "rendering rows {}..={}, cols {}..={} of a {}x{} image",
            self.begrow, self.endrow, self.begcol, self.endcol, self.width, self.height
        );
        let started = Instant::now();

        picture
            .bytes_mut()
            .par_chunks_mut(rowstride)
            .enumerate()
            .for_each(|(row, scanline)| {
                // Buffer rows run top-down while camera y grows upward.
                let y = height - 1 - row as u32;
                if y < self.begrow || y > self.endrow {
                    return;
                }

                for x in self.begcol..=self.endcol {
                    let color = self.tracer(&self.pixel_ray(x, y), objects);
                    let offset = x as usize * 3;
                    scanline[offset..offset + 3].copy_from_slice(&color.0);
                }
            });

        debug!("pass finished in {:.3?}", started.elapsed());
        picture
    }

    /// Follow one ray: collect impacts from every object, keep the
    /// nearest, and return its ambient color, or black on a miss.
    fn tracer(&self, ray: &Ray<f64>, objects: &[SceneObject]) -> Rgb<u8> {
        let mut hits = HitList::new();

        for object in objects {
            let found = object.geometry.intersections(ray);
            hits.append(found.into_iter().map(|i| Hit::new(i.t, i.normal, object)));
        }

        match hits.nearest() {
            Some(hit) => hit.object.material.ambient_rgb(),
            None => Rgb([0, 0, 0]),
        }
    }
}
