//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use nalgebra::{Point3, Vector3};
use spiralstair::{
    float_types::Real,
    mesh::{Mesh, polygon::Polygon, vertex::Vertex},
};
use std::fmt::Debug;

/// Returns the approximate bounding box `[min_x, min_y, min_z, max_x, max_y, max_z]`
/// for a set of polygons.
pub fn bounding_box<S: Clone + Send + Sync + Debug>(polygons: &[Polygon<S>]) -> [Real; 6] {
    let mut min = [Real::MAX; 3];
    let mut max = [Real::MIN; 3];

    for poly in polygons {
        for v in &poly.vertices {
            for axis in 0..3 {
                min[axis] = min[axis].min(v.pos[axis]);
                max[axis] = max[axis].max(v.pos[axis]);
            }
        }
    }

    [min[0], min[1], min[2], max[0], max[1], max[2]]
}

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Helper to make a simple Polygon in 3D with given vertices.
pub fn make_polygon_3d(points: &[[Real; 3]]) -> Polygon<()> {
    let verts = points
        .iter()
        .map(|p| Vertex::new(Point3::new(p[0], p[1], p[2]), Vector3::z()))
        .collect();
    Polygon::new(verts, None)
}

/// Polar angle of a point about +Z in degrees, in `[0, 360)`.
pub fn polar_angle_deg(p: &Point3<Real>) -> Real {
    p.y.atan2(p.x).to_degrees().rem_euclid(360.0)
}

/// `true` if every vertex off the axis lies within `[from, to]` degrees
/// (both in `[0, 360)`, `from <= to`), allowing `slack` degrees either way.
pub fn within_sector<S: Clone + Send + Sync + Debug>(
    mesh: &Mesh<S>,
    from: Real,
    to: Real,
    slack: Real,
) -> bool {
    mesh.polygons.iter().flat_map(|p| &p.vertices).all(|v| {
        let radial = (v.pos.x * v.pos.x + v.pos.y * v.pos.y).sqrt();
        if radial < 1e-6 {
            return true;
        }
        let angle = polar_angle_deg(&v.pos);
        angle >= from - slack && angle <= to + slack
    })
}

/// Area of a regular `segments`-gon of circumradius `radius`.
pub fn ngon_area(radius: Real, segments: usize) -> Real {
    let n = segments as Real;
    0.5 * n * radius * radius * (std::f64::consts::TAU as Real / n).sin()
}
