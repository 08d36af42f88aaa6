//! Non-destructive plane cuts.
//!
//! A cut splits every polygon that spans the plane and sorts the pieces by
//! side. Polygons behind the plane are *extracted* into a second mesh
//! instead of being deleted, and no cap is added over the cut, so both
//! halves are open surfaces until [`Mesh::close_border`] is applied.

use crate::mesh::Mesh;
use crate::mesh::plane::Plane;
use crate::mesh::shells::Shell;
use crate::traits::CSGOps;
use std::fmt::Debug;

/// Which side of a cut plane a piece lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Front,
    Back,
}

/// The two halves produced by one cut.
#[derive(Debug, Clone)]
pub struct CutPieces<S: Clone + Send + Sync + Debug> {
    /// Polygons in front of the plane (and coplanar ones facing the same way)
    pub kept: Mesh<S>,
    /// Polygons behind the plane (and coplanar ones facing away)
    pub extracted: Mesh<S>,
}

impl<S: Clone + Send + Sync + Debug> Mesh<S> {
    /// Cut this mesh with `plane`, extracting the faces behind it.
    pub fn cut(&self, plane: &Plane) -> CutPieces<S> {
        let mut kept = Vec::new();
        let mut extracted = Vec::new();

        for poly in &self.polygons {
            let (coplanar_front, coplanar_back, front, back) = plane.split_polygon(poly);
            kept.extend(coplanar_front);
            kept.extend(front);
            extracted.extend(coplanar_back);
            extracted.extend(back);
        }

        CutPieces {
            kept: Mesh::from_polygons(&kept, self.metadata.clone()),
            extracted: Mesh::from_polygons(&extracted, self.metadata.clone()),
        }
    }
}

impl<S: Clone + Send + Sync + Debug> Shell<S> {
    /// Cut this shell, returning the non-empty halves with `side` appended
    /// to their tags. The kept half comes first.
    pub fn cut(&self, plane: &Plane) -> Vec<Shell<S>> {
        let CutPieces { kept, extracted } = self.mesh.cut(plane);
        [(kept, Side::Front), (extracted, Side::Back)]
            .into_iter()
            .filter(|(mesh, _)| !mesh.is_empty())
            .map(|(mesh, side)| {
                let mut sides = self.sides.clone();
                sides.push(side);
                Shell { mesh, sides }
            })
            .collect()
    }
}

/// Apply one cut to every shell of a multi-shell object.
pub fn cut_shells<S: Clone + Send + Sync + Debug>(
    shells: &[Shell<S>],
    plane: &Plane,
) -> Vec<Shell<S>> {
    shells.iter().flat_map(|shell| shell.cut(plane)).collect()
}

/// Aggregate tagged shells back into one mesh.
pub fn merge_shells<S: Clone + Send + Sync + Debug>(shells: &[Shell<S>]) -> Mesh<S> {
    shells
        .iter()
        .fold(Mesh::new(), |acc: Mesh<S>, shell| acc.union(&shell.mesh))
}
