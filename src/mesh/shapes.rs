//! 3D primitive shapes as `Mesh`s

use crate::float_types::{Real, TAU, tolerance};
use crate::mesh::Mesh;
use crate::mesh::polygon::Polygon;
use crate::mesh::vertex::Vertex;
use nalgebra::{Point3, Vector3};
use std::fmt::Debug;
use tracing::debug;

impl<S: Clone + Debug + Send + Sync> Mesh<S> {
    /// A right circular cylinder standing on the XY plane.
    ///
    /// The axis is +Z through the origin, the base sits at `z = 0` and the
    /// top at `z = height`. `segments` is the number of facets around the
    /// side (at least 3).
    pub fn cylinder(radius: Real, height: Real, segments: usize, metadata: Option<S>) -> Mesh<S> {
        Self::frustum(radius, radius, height, segments, metadata)
    }

    /// A frustum with `radius1` at the base (`z = 0`) and `radius2` at the
    /// top (`z = height`).
    ///
    /// Caps are triangle fans around a center vertex; the side is one quad
    /// per segment. All faces wind counter-clockwise seen from outside.
    pub fn frustum(
        radius1: Real,
        radius2: Real,
        height: Real,
        segments: usize,
        metadata: Option<S>,
    ) -> Mesh<S> {
        let segments = segments.max(3);
        debug!(radius1, radius2, height, segments, "creating frustum primitive");

        let ring = |radius: Real, z: Real| -> Vec<Point3<Real>> {
            (0..segments)
                .map(|i| {
                    let angle = (i as Real / segments as Real) * TAU;
                    Point3::new(angle.cos() * radius, angle.sin() * radius, z)
                })
                .collect()
        };
        let bottom = ring(radius1, 0.0);
        let top = ring(radius2, height);
        let bottom_center = Point3::new(0.0, 0.0, 0.0);
        let top_center = Point3::new(0.0, 0.0, height);
        let down = -Vector3::z();
        let up = Vector3::z();

        let mut polygons = Vec::with_capacity(segments * 3);
        for i in 0..segments {
            let j = (i + 1) % segments;

            if radius1 > tolerance() {
                polygons.push(Polygon::new(
                    vec![
                        Vertex::new(bottom_center, down),
                        Vertex::new(bottom[j], down),
                        Vertex::new(bottom[i], down),
                    ],
                    metadata.clone(),
                ));
            }

            if radius2 > tolerance() {
                polygons.push(Polygon::new(
                    vec![
                        Vertex::new(top_center, up),
                        Vertex::new(top[i], up),
                        Vertex::new(top[j], up),
                    ],
                    metadata.clone(),
                ));
            }

            let radial = |p: &Point3<Real>| {
                let v = Vector3::new(p.x, p.y, 0.0);
                if v.norm() > tolerance() { v.normalize() } else { up }
            };
            let mut side = vec![
                Vertex::new(bottom[i], radial(&bottom[i])),
                Vertex::new(bottom[j], radial(&bottom[j])),
                Vertex::new(top[j], radial(&top[j])),
                Vertex::new(top[i], radial(&top[i])),
            ];
            // a cone apex collapses two corners into one
            side.dedup_by(|a, b| (a.pos - b.pos).norm() < tolerance());
            if side.len() >= 3 {
                polygons.push(Polygon::new(side, metadata.clone()));
            }
        }

        Mesh::from_polygons(&polygons, metadata)
    }
}
