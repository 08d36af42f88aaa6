//! Convex or concave planar polygons with a cached plane and generic metadata.

use crate::float_types::{Real, parry3d::bounding_volume::Aabb, tolerance};
use crate::mesh::plane::Plane;
use crate::mesh::vertex::Vertex;
use geo::{Coord, LineString, Polygon as GeoPolygon, TriangulateEarcut};
use nalgebra::Point3;
use std::fmt::Debug;
use std::sync::OnceLock;

/// A polygon, defined by a list of vertices.
/// - `S` is the generic metadata type, stored as `Option<S>`.
#[derive(Debug, Clone)]
pub struct Polygon<S: Clone> {
    /// Vertices defining the polygon's shape
    pub vertices: Vec<Vertex>,

    /// The plane on which this polygon lies
    pub plane: Plane,

    /// Lazily‑computed axis‑aligned bounding box of the polygon
    pub bounding_box: OnceLock<Aabb>,

    /// Generic metadata associated with the polygon
    pub metadata: Option<S>,
}

impl<S: Clone + PartialEq> PartialEq for Polygon<S> {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices
            && self.plane == other.plane
            && self.metadata == other.metadata
    }
}

impl<S: Clone + Send + Sync + Debug> Polygon<S> {
    /// Create a polygon from vertices, computing its plane from the winding.
    pub fn new(vertices: Vec<Vertex>, metadata: Option<S>) -> Self {
        debug_assert!(vertices.len() >= 3, "degenerate polygon");

        let plane = Plane::from_vertices(&vertices);
        Polygon {
            vertices,
            plane,
            bounding_box: OnceLock::new(),
            metadata,
        }
    }

    /// Create a polygon that keeps an already known plane.
    pub fn with_plane(vertices: Vec<Vertex>, plane: Plane, metadata: Option<S>) -> Self {
        Polygon {
            vertices,
            plane,
            bounding_box: OnceLock::new(),
            metadata,
        }
    }

    /// Axis aligned bounding box of this polygon (cached after first call)
    pub fn bounding_box(&self) -> Aabb {
        *self.bounding_box.get_or_init(|| {
            let mut mins = Point3::new(Real::MAX, Real::MAX, Real::MAX);
            let mut maxs = Point3::new(-Real::MAX, -Real::MAX, -Real::MAX);
            for v in &self.vertices {
                mins = mins.inf(&v.pos);
                maxs = maxs.sup(&v.pos);
            }
            Aabb::new(mins, maxs)
        })
    }

    /// Reverse winding order, flip vertex normals and the plane.
    pub fn flip(&mut self) {
        self.vertices.reverse();
        for v in &mut self.vertices {
            v.flip();
        }
        self.plane.flip();
    }

    /// Return an iterator over paired vertices each forming an edge of the polygon
    pub fn edges(&self) -> impl Iterator<Item = (&Vertex, &Vertex)> {
        self.vertices.iter().zip(self.vertices.iter().cycle().skip(1))
    }

    /// Recompute this polygon's plane from its vertices and assign that
    /// plane's normal to every vertex.
    pub fn set_new_normal(&mut self) {
        self.plane = Plane::from_vertices(&self.vertices);
        for v in &mut self.vertices {
            v.normal = self.plane.normal();
        }
    }

    /// Area of the polygon, summed over its triangles.
    pub fn area(&self) -> Real {
        self.triangulate()
            .iter()
            .map(|[a, b, c]| (b.pos - a.pos).cross(&(c.pos - a.pos)).norm() * 0.5)
            .sum()
    }

    /// Set the metadata of this polygon.
    pub fn set_metadata(&mut self, metadata: S) {
        self.metadata = Some(metadata);
    }

    /// Triangulate this polygon into triangles wound like the polygon.
    ///
    /// The polygon is rotated into the XY plane, ear-cut in 2D and the
    /// resulting indices are mapped back onto the original vertices, so no
    /// new positions are introduced.
    pub fn triangulate(&self) -> Vec<[Vertex; 3]> {
        let n = self.vertices.len();
        if n < 3 {
            return Vec::new();
        }
        if n == 3 {
            return vec![[
                self.vertices[0].clone(),
                self.vertices[1].clone(),
                self.vertices[2].clone(),
            ]];
        }

        let (to_xy, _) = self.plane.to_xy_transform();
        let outer: Vec<Coord<Real>> = self
            .vertices
            .iter()
            .map(|v| {
                let p = to_xy.transform_point(&v.pos);
                Coord { x: p.x, y: p.y }
            })
            .collect();

        let polygon = GeoPolygon::new(LineString::new(outer), Vec::new());
        let triangulation = polygon.earcut_triangles_raw();

        let normal = self.plane.normal();
        let mut triangles: Vec<[usize; 3]> = triangulation
            .triangle_indices
            .chunks_exact(3)
            .map(|tri| {
                // the closing coordinate of the ring aliases vertex 0
                let [a, b, c] = [tri[0] % n, tri[1] % n, tri[2] % n];
                let (pa, pb, pc) = (
                    &self.vertices[a].pos,
                    &self.vertices[b].pos,
                    &self.vertices[c].pos,
                );
                if (pb - pa).cross(&(pc - pa)).dot(&normal) < 0.0 {
                    [a, c, b]
                } else {
                    [a, b, c]
                }
            })
            .collect();

        // Ear cutting drops collinear ring vertices. Put them back by
        // splitting the triangle edge they sit on, so neighbouring polygons
        // that share those vertices still meet edge to edge.
        for v in 0..n {
            if triangles.iter().any(|t| t.contains(&v)) {
                continue;
            }
            let p = &self.vertices[v].pos;
            let hit = triangles.iter().enumerate().find_map(|(k, t)| {
                (0..3).find_map(|e| {
                    let (a, b) = (t[e], t[(e + 1) % 3]);
                    on_segment(p, &self.vertices[a].pos, &self.vertices[b].pos)
                        .then_some((k, e))
                })
            });
            if let Some((k, e)) = hit {
                let t = triangles[k];
                let (a, b, c) = (t[e], t[(e + 1) % 3], t[(e + 2) % 3]);
                triangles[k] = [a, v, c];
                triangles.push([v, b, c]);
            }
        }

        triangles
            .into_iter()
            .map(|[a, b, c]| {
                [
                    self.vertices[a].clone(),
                    self.vertices[b].clone(),
                    self.vertices[c].clone(),
                ]
            })
            .collect()
    }
}

/// `true` if `p` lies strictly between `a` and `b` on the segment `a`–`b`.
fn on_segment(p: &Point3<Real>, a: &Point3<Real>, b: &Point3<Real>) -> bool {
    let ab = b - a;
    let len2 = ab.norm_squared();
    if len2 < Real::EPSILON {
        return false;
    }
    let t = (p - a).dot(&ab) / len2;
    let closest = a + ab * t;
    t > 0.0 && t < 1.0 && (p - closest).norm() < tolerance()
}
