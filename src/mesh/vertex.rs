//! Struct and functions for working with `Vertex`s from which `Polygon`s are composed.

use crate::float_types::{QUANTIZATION_FACTOR, Real};
use nalgebra::{Point3, Vector3};

/// A vertex of a polygon, holding position and normal.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    pub pos: Point3<Real>,
    pub normal: Vector3<Real>,
}

impl Vertex {
    /// Create a new [`Vertex`].
    ///
    /// * `pos`    – the position in model space
    /// * `normal` – (optionally non‑unit) normal; it is **copied verbatim**
    pub const fn new(pos: Point3<Real>, normal: Vector3<Real>) -> Self {
        Vertex { pos, normal }
    }

    /// Flip vertex normal
    pub fn flip(&mut self) {
        self.normal = -self.normal;
    }

    /// Return the linear interpolation between `self` (`t = 0`) and `other` (`t = 1`).
    ///
    /// Normals are linearly interpolated as well.
    pub fn interpolate(&self, other: &Vertex, t: Real) -> Vertex {
        let new_pos = self.pos + (other.pos - self.pos) * t;
        let new_normal = self.normal + (other.normal - self.normal) * t;
        Vertex::new(new_pos, new_normal)
    }

    /// Position snapped to the quantization lattice.
    pub fn key(&self) -> QuantizedPoint {
        QuantizedPoint::from(&self.pos)
    }
}

/// A position snapped to an integer lattice so that vertices produced by
/// splitting the same edge from either side compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuantizedPoint(pub i64, pub i64, pub i64);

impl From<&Point3<Real>> for QuantizedPoint {
    fn from(p: &Point3<Real>) -> Self {
        QuantizedPoint(
            (p.x * QUANTIZATION_FACTOR).round() as i64,
            (p.y * QUANTIZATION_FACTOR).round() as i64,
            (p.z * QUANTIZATION_FACTOR).round() as i64,
        )
    }
}

/// An undirected edge key, smaller endpoint first.
pub fn undirected(a: QuantizedPoint, b: QuantizedPoint) -> (QuantizedPoint, QuantizedPoint) {
    if a < b { (a, b) } else { (b, a) }
}
