//! Shell separation.
//!
//! Polygons are connected when they share an edge. Edges are matched on
//! quantized endpoint positions, so a polygon soup produced by cutting
//! (where neighbours carry their own copies of each split vertex) still
//! joins up.

use crate::mesh::Mesh;
use crate::mesh::cut::Side;
use crate::mesh::vertex::{QuantizedPoint, undirected};
use hashbrown::HashMap;
use std::fmt::Debug;
use tracing::debug;

/// One connected piece of a cut solid, tagged with the side of every cut
/// plane it was found on (in cut order).
#[derive(Debug, Clone)]
pub struct Shell<S: Clone + Send + Sync + Debug> {
    pub mesh: Mesh<S>,
    pub sides: Vec<Side>,
}

impl<S: Clone + Send + Sync + Debug> Shell<S> {
    /// An uncut solid: one shell with no tags.
    pub fn whole(mesh: Mesh<S>) -> Self {
        Shell {
            mesh,
            sides: Vec::new(),
        }
    }

    /// Split into connected components, each keeping this shell's tags.
    pub fn separate(&self) -> Vec<Shell<S>> {
        self.mesh
            .separate()
            .into_iter()
            .map(|mesh| Shell {
                mesh,
                sides: self.sides.clone(),
            })
            .collect()
    }
}

fn find(parent: &mut [usize], mut i: usize) -> usize {
    while parent[i] != i {
        parent[i] = parent[parent[i]];
        i = parent[i];
    }
    i
}

impl<S: Clone + Send + Sync + Debug> Mesh<S> {
    /// Split the mesh into its edge-connected components.
    ///
    /// Components are returned in the order of their first polygon, so the
    /// result is reproducible for a given polygon order.
    pub fn separate(&self) -> Vec<Mesh<S>> {
        let n = self.polygons.len();
        let mut parent: Vec<usize> = (0..n).collect();
        let mut edge_owner: HashMap<(QuantizedPoint, QuantizedPoint), usize> = HashMap::new();

        for (index, poly) in self.polygons.iter().enumerate() {
            for (a, b) in poly.edges() {
                let (ka, kb) = (a.key(), b.key());
                if ka == kb {
                    continue;
                }
                match edge_owner.get(&undirected(ka, kb)) {
                    Some(&other) => {
                        let (ra, rb) = (find(&mut parent, index), find(&mut parent, other));
                        if ra != rb {
                            parent[ra.max(rb)] = ra.min(rb);
                        }
                    },
                    None => {
                        edge_owner.insert(undirected(ka, kb), index);
                    },
                }
            }
        }

        let mut order: Vec<usize> = Vec::new();
        let mut groups: HashMap<usize, Vec<usize>> = HashMap::new();
        for index in 0..n {
            let root = find(&mut parent, index);
            groups
                .entry(root)
                .or_insert_with(|| {
                    order.push(root);
                    Vec::new()
                })
                .push(index);
        }

        debug!(polygons = n, shells = order.len(), "separated mesh into shells");

        order
            .iter()
            .map(|root| {
                let polygons: Vec<_> = groups[root]
                    .iter()
                    .map(|&i| self.polygons[i].clone())
                    .collect();
                Mesh::from_polygons(&polygons, self.metadata.clone())
            })
            .collect()
    }
}
