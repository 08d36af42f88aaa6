//! Triangle view of a solid, used by the export backends.

use crate::mesh::Mesh;
use crate::mesh::vertex::Vertex;
use std::fmt::Debug;

/// A surface that can present itself as triangles.
///
/// Anything implementing this can be written by the triangle-based
/// exporters in [`io`](crate::io).
pub trait Triangulated3D {
    /// Call `f` once per triangle, wound counter-clockwise seen from
    /// outside.
    fn visit_triangles<F>(&self, f: F)
    where
        F: FnMut([Vertex; 3]);

    /// Number of triangles `visit_triangles` produces.
    fn triangle_count(&self) -> usize {
        let mut count = 0;
        self.visit_triangles(|_| count += 1);
        count
    }
}

impl<S: Clone + Send + Sync + Debug> Triangulated3D for Mesh<S> {
    fn visit_triangles<F>(&self, mut f: F)
    where
        F: FnMut([Vertex; 3]),
    {
        for poly in &self.polygons {
            for triangle in poly.triangulate() {
                f(triangle);
            }
        }
    }
}
