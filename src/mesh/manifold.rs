use crate::float_types::Real;
use crate::mesh::Mesh;
use crate::mesh::vertex::{QuantizedPoint, undirected};
use hashbrown::{HashMap, HashSet};
use nalgebra::Point3;
use std::fmt::Debug;

/// A directed polygon edge with no partner running the other way.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryEdge {
    pub start: Point3<Real>,
    pub end: Point3<Real>,
}

impl<S: Clone + Debug + Send + Sync> Mesh<S> {
    /// Checks if the Mesh object is manifold
    ///
    /// ### Returns
    /// Returns `true` if every edge of the triangulated surface appears
    /// exactly 2 times
    ///
    /// ### Notes:
    /// - Uses a `QUANTIZATION_FACTOR` for `Real` coordinates
    pub fn is_manifold(&self) -> bool {
        let tri_mesh = self.triangulate();
        if tri_mesh.polygons.is_empty() {
            return false;
        }
        let mut edge_counts: HashMap<(QuantizedPoint, QuantizedPoint), u32> = HashMap::new();

        for poly in &tri_mesh.polygons {
            for &(i0, i1) in &[(0, 1), (1, 2), (2, 0)] {
                let p0 = poly.vertices[i0].key();
                let p1 = poly.vertices[i1].key();
                *edge_counts.entry(undirected(p0, p1)).or_insert(0) += 1;
            }
        }

        // For a perfectly closed manifold surface (with no boundary),
        // each edge should appear exactly 2 times.
        edge_counts.values().all(|&count| count == 2)
    }

    /// All directed polygon edges whose reverse edge is missing, i.e. the
    /// rim of every hole in the surface. Zero-length edges are skipped.
    pub fn boundary_edges(&self) -> Vec<BoundaryEdge> {
        let mut directed: HashSet<(QuantizedPoint, QuantizedPoint)> = HashSet::new();
        let mut edges: Vec<(QuantizedPoint, QuantizedPoint, Point3<Real>, Point3<Real>)> =
            Vec::new();

        for poly in &self.polygons {
            for (a, b) in poly.edges() {
                let (ka, kb) = (a.key(), b.key());
                if ka == kb {
                    continue;
                }
                if directed.insert((ka, kb)) {
                    edges.push((ka, kb, a.pos, b.pos));
                }
            }
        }

        edges
            .into_iter()
            .filter(|(ka, kb, _, _)| !directed.contains(&(*kb, *ka)))
            .map(|(_, _, start, end)| BoundaryEdge { start, end })
            .collect()
    }

    /// `true` when the surface has no boundary edges.
    pub fn is_closed(&self) -> bool {
        !self.polygons.is_empty() && self.boundary_edges().is_empty()
    }
}
