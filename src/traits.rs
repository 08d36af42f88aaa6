use crate::float_types::Real;
use crate::float_types::parry3d::bounding_volume::Aabb;
use nalgebra::{Matrix4, Point3, Rotation3, Translation3, Vector3};

/// Aggregation + rigid transformations shared by every solid.
pub trait CSGOps: Sized + Clone {
    fn new() -> Self;

    /// Aggregate `self` and `other` into one solid. Pieces are kept as they
    /// are, nothing is clipped.
    fn union(&self, other: &Self) -> Self;
    fn transform(&self, matrix: &Matrix4<Real>) -> Self;
    fn bounding_box(&self) -> Aabb;
    fn invalidate_bounding_box(&mut self);

    /// Returns a new Self translated by vector.
    fn translate_vector(&self, vector: Vector3<Real>) -> Self {
        self.transform(&Translation3::from(vector).to_homogeneous())
    }

    /// Returns a new Self translated by x, y, and z.
    fn translate(&self, x: Real, y: Real, z: Real) -> Self {
        self.translate_vector(Vector3::new(x, y, z))
    }

    /// Geometric center of the bounding box.
    fn center_point(&self) -> Point3<Real> {
        self.bounding_box().center()
    }

    /// Translates the object so that its bottommost point(s) sit exactly at z=0.
    fn float(&self) -> Self {
        let aabb = self.bounding_box();
        self.translate(0.0, 0.0, -aabb.mins.z)
    }

    /// Rotates the solid by x_degrees, y_degrees, z_degrees
    fn rotate(&self, x_deg: Real, y_deg: Real, z_deg: Real) -> Self {
        let rx = Rotation3::from_axis_angle(&Vector3::x_axis(), x_deg.to_radians());
        let ry = Rotation3::from_axis_angle(&Vector3::y_axis(), y_deg.to_radians());
        let rz = Rotation3::from_axis_angle(&Vector3::z_axis(), z_deg.to_radians());

        let rot = rz * ry * rx;
        self.transform(&rot.to_homogeneous())
    }

    /// Scale about the origin.
    fn scale(&self, sx: Real, sy: Real, sz: Real) -> Self {
        self.transform(&Matrix4::new_nonuniform_scaling(&Vector3::new(sx, sy, sz)))
    }

    /// Turn about the vertical (Z) axis through the origin.
    fn spin(&self, deg: Real) -> Self {
        self.rotate(0.0, 0.0, deg)
    }

    /// Height of the bounding box along Z.
    fn height(&self) -> Real {
        let aabb = self.bounding_box();
        aabb.maxs.z - aabb.mins.z
    }
}
