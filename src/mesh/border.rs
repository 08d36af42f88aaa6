//! Boundary loop detection and border closing.
//!
//! A cut leaves an open surface whose rim is one or more closed loops of
//! boundary edges. Closing the border turns every loop into planar cap
//! facets wound against the rim, so the result is watertight.

use crate::errors::GeometryError;
use crate::float_types::{Real, tolerance};
use crate::mesh::Mesh;
use crate::mesh::plane::Plane;
use crate::mesh::polygon::Polygon;
use crate::mesh::vertex::{QuantizedPoint, Vertex};
use hashbrown::HashMap;
use nalgebra::Point3;
use std::fmt::Debug;
use tracing::{debug, warn};

/// A closed loop of boundary edges, in the direction the surface runs
/// along them.
#[derive(Debug, Clone)]
pub struct BoundaryLoop {
    pub points: Vec<Point3<Real>>,
}

impl BoundaryLoop {
    /// Number of edges (and vertices) in the loop.
    pub fn edge_count(&self) -> usize {
        self.points.len()
    }

    /// Split the loop into planar facets.
    ///
    /// A planar loop is its own facet. Otherwise the longest planar run of
    /// consecutive points is cut off along a chord and the remainder is
    /// decomposed again. The two half-rectangles left by two cuts through a
    /// cylinder's axis meet along the axis, which is exactly that chord.
    pub fn planar_facets(&self) -> Option<Vec<Vec<Point3<Real>>>> {
        planar_facets(&self.points)
    }
}

fn is_planar(points: &[Point3<Real>]) -> bool {
    Plane::from_loop(points)
        .is_some_and(|plane| points.iter().all(|p| plane.signed_distance(p).abs() <= tolerance()))
}

fn cyclic_run(points: &[Point3<Real>], start: usize, len: usize) -> Vec<Point3<Real>> {
    (0..len).map(|k| points[(start + k) % points.len()]).collect()
}

fn planar_facets(points: &[Point3<Real>]) -> Option<Vec<Vec<Point3<Real>>>> {
    let n = points.len();
    if n < 3 {
        return None;
    }
    if is_planar(points) {
        return Some(vec![points.to_vec()]);
    }

    // (start, run length) of the longest planar run that leaves a polygon behind
    let mut best: Option<(usize, usize)> = None;
    for start in 0..n {
        for len in 3..=n - 1 {
            if best.is_some_and(|(_, best_len)| best_len >= len) {
                continue;
            }
            if is_planar(&cyclic_run(points, start, len)) {
                best = Some((start, len));
            }
        }
    }

    let (start, len) = best?;
    let run = cyclic_run(points, start, len);
    // the remainder shares the chord endpoints with the run
    let rest = cyclic_run(points, start + len - 1, n - len + 2);

    let mut facets = vec![run];
    facets.extend(planar_facets(&rest)?);
    Some(facets)
}

impl<S: Clone + Send + Sync + Debug> Mesh<S> {
    /// Trace the boundary edges into closed loops.
    pub fn boundary_loops(&self) -> Vec<BoundaryLoop> {
        let edges = self.boundary_edges();
        if edges.is_empty() {
            return Vec::new();
        }
        debug!("found {} boundary edges", edges.len());

        let mut outgoing: HashMap<QuantizedPoint, Vec<usize>> = HashMap::new();
        for (index, edge) in edges.iter().enumerate() {
            outgoing
                .entry(QuantizedPoint::from(&edge.start))
                .or_default()
                .push(index);
        }

        let mut used = vec![false; edges.len()];
        let mut loops = Vec::new();

        for first in 0..edges.len() {
            if used[first] {
                continue;
            }
            used[first] = true;

            let origin = QuantizedPoint::from(&edges[first].start);
            let mut points = vec![edges[first].start];
            let mut current = QuantizedPoint::from(&edges[first].end);
            let mut closed = true;

            while current != origin {
                let next = outgoing
                    .get(&current)
                    .and_then(|candidates| candidates.iter().copied().find(|&e| !used[e]));
                match next {
                    Some(e) => {
                        used[e] = true;
                        points.push(edges[e].start);
                        current = QuantizedPoint::from(&edges[e].end);
                    },
                    None => {
                        warn!("boundary chain starting at {} is not closed", edges[first].start);
                        closed = false;
                        break;
                    },
                }
            }

            if closed && points.len() >= 3 {
                loops.push(BoundaryLoop { points });
            }
        }

        debug!(
            "traced {} boundary loops, sizes: {:?}",
            loops.len(),
            loops.iter().map(BoundaryLoop::edge_count).collect::<Vec<_>>()
        );
        loops
    }

    /// Fill every hole in the surface with planar cap polygons.
    ///
    /// Cap polygons carry no metadata. A mesh without holes is returned
    /// unchanged.
    ///
    /// ## Errors
    /// [`GeometryError::NonPlanarBorder`] if a loop cannot be split into
    /// planar facets, [`GeometryError::OpenShell`] if boundary edges remain.
    pub fn close_border(&self) -> Result<Mesh<S>, GeometryError> {
        let mut polygons = self.polygons.clone();

        for boundary in self.boundary_loops() {
            let facets = boundary.planar_facets().ok_or(GeometryError::NonPlanarBorder {
                vertices: boundary.edge_count(),
            })?;
            for facet in facets {
                // run against the rim so every cap edge pairs with a surface edge
                let reversed: Vec<Point3<Real>> = facet.into_iter().rev().collect();
                let Some(plane) = Plane::from_loop(&reversed) else {
                    continue;
                };
                let vertices = reversed
                    .iter()
                    .map(|p| Vertex::new(*p, plane.normal()))
                    .collect();
                polygons.push(Polygon::with_plane(vertices, plane, None));
            }
        }

        let closed = Mesh::from_polygons(&polygons, self.metadata.clone());
        let remaining = closed.boundary_edges().len();
        if remaining > 0 {
            return Err(GeometryError::OpenShell {
                boundary_edges: remaining,
            });
        }
        Ok(closed)
    }
}
