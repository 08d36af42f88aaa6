//! Planes: point orientation, polygon splitting and projection into the XY plane.

use crate::float_types::{Real, tolerance};
use crate::mesh::polygon::Polygon;
use crate::mesh::vertex::Vertex;
use nalgebra::{Isometry3, Matrix4, Point3, Rotation3, Translation3, Vector3};
use std::fmt::Debug;

// Plane classification constants
pub const COPLANAR: i8 = 0;
pub const FRONT: i8 = 1;
pub const BACK: i8 = 2;
pub const SPANNING: i8 = 3;

/// An oriented plane `n·p = w` with unit normal `n`.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    /// Unit normal vector of the plane
    pub normal: Vector3<Real>,
    /// Distance from origin along normal
    pub w: Real,
}

impl Plane {
    /// Create a new plane from a normal vector and distance.
    /// The normal is normalized; `w` is taken as given.
    pub fn from_normal(normal: Vector3<Real>, w: Real) -> Self {
        Plane {
            normal: normal.normalize(),
            w,
        }
    }

    /// Plane through `point` with the given normal.
    pub fn from_point_normal(point: &Point3<Real>, normal: Vector3<Real>) -> Self {
        let normal = normal.normalize();
        Plane {
            w: normal.dot(&point.coords),
            normal,
        }
    }

    /// Create a plane from three points.
    /// The normal direction follows the right-hand rule: (p2-p1) × (p3-p1)
    pub fn from_points(p1: Point3<Real>, p2: Point3<Real>, p3: Point3<Real>) -> Self {
        let normal = (p2 - p1).cross(&(p3 - p1));

        if normal.norm_squared() < Real::EPSILON * Real::EPSILON {
            // Degenerate triangle, return default plane
            return Plane {
                normal: Vector3::z(),
                w: 0.0,
            };
        }

        Self::from_point_normal(&p1, normal)
    }

    /// Best-fit plane of a vertex loop using Newell's method, oriented to
    /// agree with the loop's winding.
    pub fn from_vertices(vertices: &[Vertex]) -> Self {
        let points: Vec<Point3<Real>> = vertices.iter().map(|v| v.pos).collect();
        Self::from_loop(&points).unwrap_or(Plane {
            normal: Vector3::z(),
            w: 0.0,
        })
    }

    /// Newell plane of a closed point loop, or `None` if the loop encloses no area.
    pub fn from_loop(points: &[Point3<Real>]) -> Option<Self> {
        if points.len() < 3 {
            return None;
        }
        let normal = points
            .iter()
            .zip(points.iter().cycle().skip(1))
            .fold(Vector3::zeros(), |acc, (curr, next)| {
                acc + Vector3::new(
                    (curr.y - next.y) * (curr.z + next.z),
                    (curr.z - next.z) * (curr.x + next.x),
                    (curr.x - next.x) * (curr.y + next.y),
                )
            });
        if normal.norm() < tolerance() * tolerance() {
            return None;
        }
        let centroid = points
            .iter()
            .fold(Vector3::zeros(), |acc, p| acc + p.coords)
            / points.len() as Real;
        Some(Self::from_point_normal(&Point3::from(centroid), normal))
    }

    /// A vertical plane containing the vertical line through `center`,
    /// turned `angle_deg` counter-clockwise about +Z from the XZ plane.
    ///
    /// The normal points towards increasing angle, so points swept just
    /// past `angle_deg` lie in front of the plane.
    pub fn vertical_through(center: &Point3<Real>, angle_deg: Real) -> Self {
        let a = angle_deg.to_radians();
        Self::from_point_normal(center, Vector3::new(-a.sin(), a.cos(), 0.0))
    }

    /// Get the plane normal
    pub const fn normal(&self) -> Vector3<Real> {
        self.normal
    }

    /// Get the offset (distance from origin)
    pub const fn offset(&self) -> Real {
        self.w
    }

    /// Flip the plane (reverse normal and distance)
    pub fn flip(&mut self) {
        self.normal = -self.normal;
        self.w = -self.w;
    }

    /// Signed distance from the plane, positive in front.
    pub fn signed_distance(&self, point: &Point3<Real>) -> Real {
        self.normal.dot(&point.coords) - self.w
    }

    /// Classify a point relative to the plane.
    pub fn orient_point(&self, point: &Point3<Real>) -> i8 {
        let t = self.signed_distance(point);
        if t < -tolerance() {
            BACK
        } else if t > tolerance() {
            FRONT
        } else {
            COPLANAR
        }
    }

    /// Classify a polygon with respect to the plane.
    /// Returns a bitmask of COPLANAR, FRONT, and BACK.
    pub fn classify_polygon<S: Clone + Send + Sync + Debug>(&self, polygon: &Polygon<S>) -> i8 {
        polygon
            .vertices
            .iter()
            .fold(COPLANAR, |acc, v| acc | self.orient_point(&v.pos))
    }

    /// Splits a polygon by this plane, returning four buckets:
    /// `(coplanar_front, coplanar_back, front, back)`.
    #[allow(clippy::type_complexity)]
    pub fn split_polygon<S: Clone + Send + Sync + Debug>(
        &self,
        polygon: &Polygon<S>,
    ) -> (Vec<Polygon<S>>, Vec<Polygon<S>>, Vec<Polygon<S>>, Vec<Polygon<S>>) {
        let mut coplanar_front = Vec::new();
        let mut coplanar_back = Vec::new();
        let mut front = Vec::new();
        let mut back = Vec::new();

        let types: Vec<i8> = polygon
            .vertices
            .iter()
            .map(|v| self.orient_point(&v.pos))
            .collect();
        let polygon_type = types.iter().fold(COPLANAR, |acc, &t| acc | t);

        match polygon_type {
            COPLANAR => {
                if self.normal.dot(&polygon.plane.normal()) > 0.0 {
                    coplanar_front.push(polygon.clone());
                } else {
                    coplanar_back.push(polygon.clone());
                }
            },
            FRONT => front.push(polygon.clone()),
            BACK => back.push(polygon.clone()),

            // True spanning – do the split
            _ => {
                let mut split_front = Vec::<Vertex>::new();
                let mut split_back = Vec::<Vertex>::new();
                let n = polygon.vertices.len();

                for i in 0..n {
                    let j = (i + 1) % n;
                    let (type_i, type_j) = (types[i], types[j]);
                    let vertex_i = &polygon.vertices[i];
                    let vertex_j = &polygon.vertices[j];

                    if type_i != BACK {
                        split_front.push(vertex_i.clone());
                    }
                    if type_i != FRONT {
                        split_back.push(vertex_i.clone());
                    }

                    if (type_i | type_j) == SPANNING {
                        // both polygons sharing this edge must produce the same bits
                        let (from, to) = canonical_edge(vertex_i, vertex_j);
                        let denom = self.normal.dot(&(to.pos - from.pos));
                        if denom.abs() > Real::EPSILON {
                            let t = (self.w - self.normal.dot(&from.pos.coords)) / denom;
                            let vertex_new = from.interpolate(to, t);
                            split_front.push(vertex_new.clone());
                            split_back.push(vertex_new);
                        }
                    }
                }

                // keep the source plane: recomputing it from split vertices drifts
                if split_front.len() >= 3 {
                    front.push(Polygon::with_plane(
                        split_front,
                        polygon.plane.clone(),
                        polygon.metadata.clone(),
                    ));
                }
                if split_back.len() >= 3 {
                    back.push(Polygon::with_plane(
                        split_back,
                        polygon.plane.clone(),
                        polygon.metadata.clone(),
                    ));
                }
            },
        }

        (coplanar_front, coplanar_back, front, back)
    }

    /// Returns (T, T_inv), where:
    /// - `T` maps a point on this plane into XY plane (z=0) with the plane's normal going to +Z
    /// - `T_inv` is the inverse transform, mapping back
    pub fn to_xy_transform(&self) -> (Matrix4<Real>, Matrix4<Real>) {
        let n = self.normal;
        let n_len = n.norm();
        if n_len < Real::EPSILON {
            return (Matrix4::identity(), Matrix4::identity());
        }
        let norm_dir = n / n_len;

        // Rotate plane.normal -> +Z; antiparallel normals have no unique
        // rotation, so turn half a revolution about X instead
        let rot = Rotation3::rotation_between(&norm_dir, &Vector3::z()).unwrap_or_else(|| {
            Rotation3::from_axis_angle(&Vector3::x_axis(), std::f64::consts::PI as Real)
        });
        let iso_rot = Isometry3::from_parts(Translation3::identity(), rot.into());

        // translate so the plane's reference point lands at z=0
        let p0 = Point3::from(norm_dir * (self.w / n_len));
        let p0_rot = iso_rot.transform_point(&p0);
        let iso_trans = Translation3::new(0.0, 0.0, -p0_rot.z);

        let transform_to_xy = iso_trans.to_homogeneous() * iso_rot.to_homogeneous();
        let transform_from_xy = transform_to_xy
            .try_inverse()
            .unwrap_or_else(Matrix4::identity);

        (transform_to_xy, transform_from_xy)
    }
}

/// Order an edge's endpoints by position, independent of winding.
fn canonical_edge<'a>(a: &'a Vertex, b: &'a Vertex) -> (&'a Vertex, &'a Vertex) {
    if [a.pos.x, a.pos.y, a.pos.z] <= [b.pos.x, b.pos.y, b.pos.z] {
        (a, b)
    } else {
        (b, a)
    }
}
