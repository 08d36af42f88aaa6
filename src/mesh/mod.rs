//! `Mesh` struct and implementations of the `CSGOps` trait for `Mesh`

use crate::errors::GeometryError;
use crate::float_types::{
    Real,
    parry3d::{bounding_volume::Aabb, shape::Shape, shape::TriMesh},
};
use crate::traits::CSGOps;
use nalgebra::{Matrix4, Point3};
use std::{fmt::Debug, sync::OnceLock};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub mod border;
pub mod cut;
pub mod manifold;
pub mod plane;
pub mod polygon;
pub mod shapes;
pub mod shells;
pub mod vertex;

use polygon::Polygon;
use vertex::Vertex;

#[derive(Clone, Debug)]
pub struct Mesh<S: Clone + Send + Sync + Debug> {
    /// 3D polygons for volumetric shapes
    pub polygons: Vec<Polygon<S>>,

    /// Lazily calculated AABB that spans `polygons`.
    pub bounding_box: OnceLock<Aabb>,

    /// Metadata
    pub metadata: Option<S>,
}

impl<S: Clone + Send + Sync + Debug> Mesh<S> {
    /// Build a Mesh from an existing polygon list
    pub fn from_polygons(polygons: &[Polygon<S>], metadata: Option<S>) -> Self {
        Mesh {
            polygons: polygons.to_vec(),
            bounding_box: OnceLock::new(),
            metadata,
        }
    }

    /// Aggregate any number of meshes into one, keeping the metadata of the first.
    pub fn merge<'a, I>(meshes: I) -> Self
    where
        I: IntoIterator<Item = &'a Mesh<S>>,
        S: 'a,
    {
        let mut iter = meshes.into_iter();
        let Some(first) = iter.next() else {
            return Mesh::new();
        };
        let mut merged = first.clone();
        for mesh in iter {
            merged.polygons.extend(mesh.polygons.iter().cloned());
        }
        merged.invalidate_bounding_box();
        merged
    }

    /// Helper to collect all vertices from the Mesh.
    #[cfg(not(feature = "parallel"))]
    pub fn vertices(&self) -> Vec<Vertex> {
        self.polygons
            .iter()
            .flat_map(|p| p.vertices.clone())
            .collect()
    }

    /// Parallel helper to collect all vertices from the Mesh.
    #[cfg(feature = "parallel")]
    pub fn vertices(&self) -> Vec<Vertex> {
        self.polygons
            .par_iter()
            .flat_map(|p| p.vertices.clone())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Triangulate each polygon in the Mesh returning a Mesh containing triangles
    pub fn triangulate(&self) -> Mesh<S> {
        let triangles = self
            .polygons
            .iter()
            .flat_map(|poly| {
                poly.triangulate().into_iter().map(move |triangle| {
                    Polygon::with_plane(
                        triangle.to_vec(),
                        poly.plane.clone(),
                        poly.metadata.clone(),
                    )
                })
            })
            .collect::<Vec<_>>();

        Mesh::from_polygons(&triangles, self.metadata.clone())
    }

    /// Renormalize all polygons in this Mesh by re-computing each polygon’s plane
    /// and assigning that plane’s normal to all vertices.
    pub fn renormalize(&mut self) {
        for poly in &mut self.polygons {
            poly.set_new_normal();
        }
    }

    /// Assign `metadata` to the mesh and to every polygon, replacing whatever
    /// the polygons carried before.
    pub fn with_metadata(mut self, metadata: S) -> Self {
        for poly in &mut self.polygons {
            poly.set_metadata(metadata.clone());
        }
        self.metadata = Some(metadata);
        self
    }

    /// Total surface area of all polygons.
    pub fn surface_area(&self) -> Real {
        self.polygons.iter().map(Polygon::area).sum()
    }

    /// Extracts vertices and indices from the Mesh's tessellated polygons.
    fn get_vertices_and_indices(&self) -> (Vec<Point3<Real>>, Vec<[u32; 3]>) {
        let tri_mesh = self.triangulate();
        let vertices = tri_mesh
            .polygons
            .iter()
            .flat_map(|p| [p.vertices[0].pos, p.vertices[1].pos, p.vertices[2].pos])
            .collect();

        let indices = (0..tri_mesh.polygons.len())
            .map(|i| {
                let offset = i as u32 * 3;
                [offset, offset + 1, offset + 2]
            })
            .collect();

        (vertices, indices)
    }

    /// Convert the polygons in this Mesh to a Parry `TriMesh`.
    ///
    /// ## Errors
    /// If the mesh has no triangles, or Parry returns a `TriMeshBuilderError`
    pub fn to_trimesh(&self) -> Result<TriMesh, GeometryError> {
        let (vertices, indices) = self.get_vertices_and_indices();
        if indices.is_empty() {
            return Err(GeometryError::EmptyMesh);
        }
        TriMesh::new(vertices, indices).map_err(|e| GeometryError::TriMesh(format!("{e:?}")))
    }

    /// Enclosed volume, computed by Parry from the triangulated surface.
    /// Only meaningful for closed meshes.
    pub fn volume(&self) -> Result<Real, GeometryError> {
        let trimesh = self.to_trimesh()?;
        Ok(trimesh.mass_properties(1.0).mass())
    }

    /// Approximate mass and center of mass using Parry.
    pub fn mass_properties(&self, density: Real) -> Result<(Real, Point3<Real>), GeometryError> {
        let trimesh = self.to_trimesh()?;
        let mp = trimesh.mass_properties(density);
        Ok((mp.mass(), mp.local_com))
    }
}

impl<S: Clone + Send + Sync + Debug> CSGOps for Mesh<S> {
    /// Returns a new empty Mesh
    fn new() -> Self {
        Mesh {
            polygons: Vec::new(),
            bounding_box: OnceLock::new(),
            metadata: None,
        }
    }

    /// Return a new Mesh holding the polygons of both meshes.
    ///
    /// Treads and spine only touch along shared faces, so the pieces are
    /// aggregated rather than clipped against each other.
    fn union(&self, other: &Mesh<S>) -> Mesh<S> {
        let mut polygons = self.polygons.clone();
        polygons.extend(other.polygons.iter().cloned());

        Mesh {
            polygons,
            bounding_box: OnceLock::new(),
            metadata: self.metadata.clone().or_else(|| other.metadata.clone()),
        }
    }

    /// Apply an arbitrary 3D transform (as a 4x4 matrix) to the mesh.
    ///
    /// Normals are carried by the inverse transpose; a singular matrix
    /// falls back to recomputing them from the transformed polygons.
    fn transform(&self, mat: &Matrix4<Real>) -> Mesh<S> {
        let mat_inv_transpose = mat.try_inverse().map(|inv| inv.transpose());
        let mut mesh = self.clone();

        let apply = |poly: &mut Polygon<S>| {
            for vert in &mut poly.vertices {
                vert.pos = mat.transform_point(&vert.pos);
                if let Some(normal_mat) = &mat_inv_transpose {
                    vert.normal = normal_mat.transform_vector(&vert.normal).normalize();
                }
            }

            // keep the cached plane consistent with the new vertex positions
            poly.plane = plane::Plane::from_vertices(&poly.vertices);
            poly.bounding_box = OnceLock::new();
            if mat_inv_transpose.is_none() {
                poly.set_new_normal();
            }
        };

        #[cfg(feature = "parallel")]
        mesh.polygons.par_iter_mut().for_each(apply);

        #[cfg(not(feature = "parallel"))]
        mesh.polygons.iter_mut().for_each(apply);

        mesh.invalidate_bounding_box();
        mesh
    }

    /// Returns a [`parry3d::bounding_volume::Aabb`] indicating the 3D bounds of all `polygons`.
    fn bounding_box(&self) -> Aabb {
        *self.bounding_box.get_or_init(|| {
            let mut mins = Point3::new(Real::MAX, Real::MAX, Real::MAX);
            let mut maxs = Point3::new(-Real::MAX, -Real::MAX, -Real::MAX);

            for poly in &self.polygons {
                for v in &poly.vertices {
                    mins = mins.inf(&v.pos);
                    maxs = maxs.sup(&v.pos);
                }
            }

            // If still uninitialized (e.g., no polygons), return a trivial AABB at origin
            if mins.x > maxs.x {
                return Aabb::new(Point3::origin(), Point3::origin());
            }

            Aabb::new(mins, maxs)
        })
    }

    /// Invalidates object's cached bounding box.
    fn invalidate_bounding_box(&mut self) {
        self.bounding_box = OnceLock::new();
    }
}
