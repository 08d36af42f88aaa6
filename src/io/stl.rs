//! STL export and import through `stl_io`.

use crate::float_types::Real;
use crate::io::IoError;
use crate::mesh::Mesh;
use crate::mesh::polygon::Polygon;
use crate::mesh::vertex::Vertex;
use crate::triangulated::Triangulated3D;
use nalgebra::{Point3, Vector3};
use std::fmt::{Debug, Write};
use std::io::Cursor;

/// Facet normal from the triangle's winding, or the first vertex normal if
/// the triangle is degenerate.
fn facet_normal(tri: &[Vertex; 3]) -> Vector3<Real> {
    let n = (tri[1].pos - tri[0].pos).cross(&(tri[2].pos - tri[0].pos));
    n.try_normalize(Real::EPSILON).unwrap_or(tri[0].normal)
}

/// Write `shape` as an ASCII STL solid called `name`.
///
/// ```rust
/// # use spiralstair::stair::build_wedge;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let wedge = build_wedge(30.0, 0.0, 1.0, 0.2)?;
/// let text = wedge.to_stl_ascii("wedge");
/// assert!(text.starts_with("solid wedge"));
/// # Ok(())
/// # }
/// ```
pub fn to_stl_ascii<T: Triangulated3D>(shape: &T, name: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "solid {name}");

    shape.visit_triangles(|tri| {
        let n = facet_normal(&tri);
        let _ = writeln!(out, "  facet normal {:.6} {:.6} {:.6}", n.x, n.y, n.z);
        out.push_str("    outer loop\n");
        for v in &tri {
            let p = v.pos;
            let _ = writeln!(out, "      vertex {:.6} {:.6} {:.6}", p.x, p.y, p.z);
        }
        out.push_str("    endloop\n");
        out.push_str("  endfacet\n");
    });

    let _ = writeln!(out, "endsolid {name}");
    out
}

/// Write `shape` as binary STL. The format has no room for a name.
pub fn to_stl_binary<T: Triangulated3D>(shape: &T) -> Result<Vec<u8>, IoError> {
    use stl_io::{Normal, Triangle, Vertex as StlVertex, write_stl};

    let mut triangles = Vec::<Triangle>::new();
    shape.visit_triangles(|tri| {
        let n = facet_normal(&tri);
        #[allow(clippy::unnecessary_cast)]
        triangles.push(Triangle {
            normal: Normal::new([n.x as f32, n.y as f32, n.z as f32]),
            vertices: tri
                .map(|v| StlVertex::new([v.pos.x as f32, v.pos.y as f32, v.pos.z as f32])),
        });
    });

    let mut cursor = Cursor::new(Vec::new());
    write_stl(&mut cursor, triangles.iter())?;
    Ok(cursor.into_inner())
}

/// Read ASCII or binary STL into a mesh of triangles.
pub fn from_stl<S: Clone + Send + Sync + Debug>(
    bytes: &[u8],
    metadata: Option<S>,
) -> Result<Mesh<S>, IoError> {
    let mut cursor = Cursor::new(bytes);
    let stl = stl_io::read_stl(&mut cursor)?;

    let point = |index: usize| -> Result<Point3<Real>, IoError> {
        let v = stl.vertices.get(index).ok_or_else(|| {
            IoError::MalformedInput(format!("face refers to missing vertex {index}"))
        })?;
        Ok(Point3::new(v[0] as Real, v[1] as Real, v[2] as Real))
    };

    let mut polygons = Vec::with_capacity(stl.faces.len());
    for face in &stl.faces {
        let normal = Vector3::new(
            face.normal[0] as Real,
            face.normal[1] as Real,
            face.normal[2] as Real,
        );
        let vertices = face
            .vertices
            .iter()
            .map(|&i| point(i).map(|p| Vertex::new(p, normal)))
            .collect::<Result<Vec<_>, _>>()?;
        polygons.push(Polygon::new(vertices, metadata.clone()));
    }

    Ok(Mesh::from_polygons(&polygons, metadata))
}

impl<S: Clone + Debug + Send + Sync> Mesh<S> {
    pub fn to_stl_ascii(&self, name: &str) -> String {
        to_stl_ascii(self, name)
    }

    pub fn to_stl_binary(&self) -> Result<Vec<u8>, IoError> {
        to_stl_binary(self)
    }

    pub fn from_stl(bytes: &[u8], metadata: Option<S>) -> Result<Mesh<S>, IoError> {
        from_stl(bytes, metadata)
    }
}
